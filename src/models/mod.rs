pub mod common;
pub mod notification;
pub mod storyboard;
pub mod text;

pub use common::*;
pub use notification::*;
pub use storyboard::*;
pub use text::*;
