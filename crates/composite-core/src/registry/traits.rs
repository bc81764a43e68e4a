//! Read-side trait used by dependency resolution.

use crate::models::{ModuleSelector, ProjectPath};
use std::sync::Arc;

/// Lookup seam between the substitution registry and the graph resolver.
///
/// Absence is an expected outcome: resolvers fall back to resolving the
/// module externally when a lookup returns `None`.
pub trait SubstitutionLookup<D>: Send + Sync {
    /// Find the local project substituted for a selector's group and name.
    ///
    /// The selector's version is ignored.
    fn resolve_substitution(&self, selector: &ModuleSelector) -> Option<ProjectPath>;

    /// Get the component description registered for a project.
    fn describe_project(&self, project_path: &str) -> Option<Arc<D>>;

    /// Resolve a selector straight to its substituted project and description.
    fn resolve_component(&self, selector: &ModuleSelector) -> Option<(ProjectPath, Arc<D>)> {
        let project_path = self.resolve_substitution(selector)?;
        let description = self.describe_project(project_path.as_str())?;
        Some((project_path, description))
    }
}
