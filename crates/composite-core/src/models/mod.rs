//! Value types shared by project discovery and dependency resolution.

mod coordinate;
mod project;

pub use coordinate::*;
pub use project::*;
