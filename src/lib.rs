//! # subpagelist
//!
//! Renders the sub pages of a wiki page as a nested wikitext list.
//!
//! Page hierarchy comes only from the `/` separators in page titles:
//! `A/B/C` is a sub page of `A/B`, which is a sub page of `A`. A request goes
//! through three steps:
//!
//! 1. a [`SubPageFinder`] supplies the titles below the requested page,
//! 2. [`PageHierarchyCreator`] turns the flat titles into a [`Page`] tree,
//! 3. a [`ListRenderer`] formats the tree according to a [`RenderPolicy`].
//!
//! [`SubPageList`] wires these together for the list directive and
//! [`SubPageCount`] answers the count directive.

pub mod config;
pub mod error;
pub mod finder;
pub mod handler;
pub mod page;
pub mod params;
pub mod renderer;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::*;
pub use finder::*;
pub use handler::*;
pub use page::*;
pub use params::*;
pub use renderer::*;
