pub mod key_handler;
pub use key_handler::KeyHandler;

pub mod utils;
pub use utils::*;
