//! Project substitution registry for composite builds.
//!
//! The registry is the hand-off point between two build phases:
//! - **Discovery** registers each participating project together with the
//!   external module coordinate it replaces and its component description.
//! - **Resolution** asks, for every external module selector, whether a local
//!   project stands in for it and what that project publishes.
//!
//! One registry belongs to one build context. Seal it when discovery
//! completes so late registrations fail instead of racing the resolver.

mod substitution_registry;
mod traits;

pub use substitution_registry::{RegistryStats, SubstitutionEntry, SubstitutionRegistry};
pub use traits::SubstitutionLookup;
