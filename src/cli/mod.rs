pub mod render;
pub mod server;

pub use render::render;
pub use server::serve;
