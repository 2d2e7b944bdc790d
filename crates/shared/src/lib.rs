pub mod anchor;
mod brand;
mod section;

pub use anchor::{Anchors, Jump, ScrollBehavior, ScrollBlock, Viewport, jump};
pub use brand::*;
pub use section::*;
