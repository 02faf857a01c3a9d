//! Reading and writing descriptor files

pub mod load;
pub mod write;

pub use load::{load, load_or_empty, DescriptorError};
pub use write::{render_pretty, write_pretty};
