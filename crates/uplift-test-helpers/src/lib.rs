mod catalog;
mod content_dir;
mod store;

pub use catalog::*;
pub use content_dir::*;
pub use store::*;
