pub mod components;
pub mod policy;
pub mod renderer;
pub mod renders;
pub mod traits;

pub use components::*;
pub use policy::*;
pub use renderer::*;
pub use renders::*;
pub use traits::*;
