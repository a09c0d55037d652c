pub mod keyboard;
pub mod pointer;
pub mod window;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_pointer_handlers;
pub use window::{wire_resize, wire_visibility};
