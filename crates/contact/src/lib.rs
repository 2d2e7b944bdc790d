mod draft;
mod mailto;

pub use draft::*;
pub use mailto::*;
