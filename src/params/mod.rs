pub mod definitions;
pub mod options;
pub mod resolver;

pub use definitions::*;
pub use options::*;
pub use resolver::*;
