// UI Layer
pub mod components;
pub mod layout;
pub mod renderer;
pub mod theme;

pub use layout::{LayoutManager, LayoutMode};
pub use theme::Theme;
