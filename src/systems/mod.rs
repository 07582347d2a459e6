//! Application systems
//!
//! Window management and rendering, kept out of main.rs so they can be tested.

mod render;
mod window;

pub use render::RenderSystem;
pub use window::{WindowSystem, WindowError};
