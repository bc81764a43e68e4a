//! Composite Core - module substitution for multi-project builds.
//!
//! Lets an externally declared module coordinate (`group:name`) be redirected
//! to a project built locally, and caches each project's component description
//! for reuse during dependency graph resolution.
//!
//! # Example
//!
//! ```
//! use composite_core::{ModuleSelector, SubstitutionRegistry};
//!
//! # fn main() -> composite_core::Result<()> {
//! let registry: SubstitutionRegistry<Vec<&str>> = SubstitutionRegistry::new();
//!
//! // Discovery phase
//! registry.register_parts("org.acme", "lib", ":lib", vec!["default"])?;
//! registry.seal();
//!
//! // Resolution phase
//! let selector = ModuleSelector::parse("org.acme:lib:2.0")?;
//! let project = registry.resolve_substitution(&selector).expect("substituted");
//! assert_eq!(project.as_str(), ":lib");
//! assert_eq!(*registry.describe_project(&project).unwrap(), vec!["default"]);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use config::{ConflictPolicy, SubstitutionConfig};
pub use error::{CompositeError, Result};
pub use models::{ModuleCoordinate, ModuleSelector, ProjectPath};
pub use registry::{RegistryStats, SubstitutionEntry, SubstitutionLookup, SubstitutionRegistry};
