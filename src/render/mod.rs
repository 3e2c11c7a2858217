//! raylib front end: layout, input, textures and drawing.

pub mod input;
pub mod layout;
pub mod scene;
pub mod texture_loader;

pub use input::InputState;
pub use layout::PageLayout;
pub use scene::Scene;
