pub mod text_match;
pub use text_match::matches;

pub mod window;
pub use window::{display_width, fixed_width, tail};
