pub mod bounds;
pub mod source;
pub mod widget;

pub use source::TemplateTiles;
pub use widget::{MapOutput, MapSurface};
