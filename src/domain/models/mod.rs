mod conversation;
mod model_id;
mod session_config;
mod turn;

pub use conversation::*;
pub use model_id::*;
pub use session_config::*;
pub use turn::*;
