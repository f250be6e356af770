pub mod layout;
pub mod render;

pub use layout::{layout, LineLayout};
pub use render::{render, render_to_string, TableEmitter};
