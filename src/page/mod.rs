pub mod hierarchy;
pub mod title;
pub mod types;

pub use hierarchy::*;
pub use title::*;
pub use types::*;
