pub mod approval;
pub mod types;
pub mod weigh;

pub use approval::{approval_cmd, state_code_cmd};
pub use weigh::weigh_cmd;
