//! In-memory registry of module-to-project substitutions.
//!
//! Project discovery registers `(coordinate, project, description)` triples
//! while configuring participants; dependency resolution later asks whether a
//! module selector has a local substitute and, if so, what that project
//! publishes. Both maps live behind one lock so a registration is never
//! observed half-applied.

use crate::config::{ConflictPolicy, SubstitutionConfig};
use crate::error::{CompositeError, Result};
use crate::models::{ModuleCoordinate, ModuleSelector, ProjectPath};
use crate::registry::traits::SubstitutionLookup;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};
use tracing::{debug, info, warn};

/// A single coordinate-to-project mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstitutionEntry {
    pub coordinate: ModuleCoordinate,
    pub project_path: ProjectPath,
}

/// Registry counters for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    /// Number of substituted module coordinates.
    pub substitution_count: usize,
    /// Number of projects with a registered description.
    pub project_count: usize,
    /// Whether discovery has completed.
    pub sealed: bool,
    pub conflict_policy: ConflictPolicy,
}

/// Both maps, always mutated together.
#[derive(Debug)]
struct RegistryState<D> {
    /// Module coordinate -> substituting project
    substitutions: HashMap<ModuleCoordinate, ProjectPath>,
    /// Project -> published component description
    descriptions: HashMap<ProjectPath, Arc<D>>,
}

impl<D> Default for RegistryState<D> {
    fn default() -> Self {
        Self {
            substitutions: HashMap::new(),
            descriptions: HashMap::new(),
        }
    }
}

/// Substitution registry scoped to a single composite build.
///
/// `D` is the component description produced by project configuration. The
/// registry never inspects it; it hands out shared `Arc<D>` references.
///
/// Registrations are accepted until [`seal`](Self::seal) marks the end of
/// discovery. Reads are allowed at any time and see every registration that
/// completed before them.
#[derive(Debug)]
pub struct SubstitutionRegistry<D> {
    config: SubstitutionConfig,
    state: RwLock<RegistryState<D>>,
    sealed: AtomicBool,
}

impl<D> Default for SubstitutionRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> SubstitutionRegistry<D> {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SubstitutionConfig::default())
    }

    /// Create an empty registry with an explicit configuration.
    pub fn with_config(config: SubstitutionConfig) -> Self {
        Self {
            config,
            state: RwLock::new(RegistryState::default()),
            sealed: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &SubstitutionConfig {
        &self.config
    }

    /// Register a project as the substitute for a module coordinate.
    ///
    /// Installs `coordinate -> project_path` and `project_path -> description`
    /// in one critical section. An existing mapping for either key is replaced
    /// unless the conflict policy is [`ConflictPolicy::Reject`].
    ///
    /// # Errors
    ///
    /// - `RegistrationSealed` if discovery has already been sealed
    /// - `DuplicateSubstitution` if the coordinate maps to another project and
    ///   the policy rejects conflicts
    /// - `LockPoisoned` if a previous writer panicked
    ///
    /// No state changes when an error is returned.
    pub fn register(
        &self,
        coordinate: ModuleCoordinate,
        project_path: ProjectPath,
        description: impl Into<Arc<D>>,
    ) -> Result<()> {
        let description = description.into();
        let mut state = self
            .state
            .write()
            .map_err(|_| CompositeError::LockPoisoned)?;

        // Checked under the write lock so seal() cannot interleave.
        if self.sealed.load(Ordering::Acquire) {
            return Err(CompositeError::RegistrationSealed {
                coordinate: coordinate.to_string(),
            });
        }

        if let Some(existing) = state.substitutions.get(&coordinate) {
            if *existing != project_path {
                match self.config.conflict_policy {
                    ConflictPolicy::Overwrite => {
                        debug!(
                            "Replacing substitution for {}: {} -> {}",
                            coordinate, existing, project_path
                        );
                    }
                    ConflictPolicy::Warn => {
                        warn!(
                            "Module {} claimed by both {} and {}, keeping the latter",
                            coordinate, existing, project_path
                        );
                    }
                    ConflictPolicy::Reject => {
                        return Err(CompositeError::DuplicateSubstitution {
                            coordinate: coordinate.to_string(),
                            existing: existing.to_string(),
                            attempted: project_path.to_string(),
                        });
                    }
                }
            }
        }

        debug!(
            "Registering project participant: {} | {}",
            coordinate, project_path
        );
        state
            .substitutions
            .insert(coordinate, project_path.clone());
        let displaced = state.descriptions.insert(project_path, description);

        // Release the lock before a replaced description runs its destructor.
        drop(state);
        drop(displaced);

        Ok(())
    }

    /// Validate raw strings and register them.
    ///
    /// Fails with `InvalidArgument` on an empty group, name or project path
    /// before touching the registry.
    pub fn register_parts(
        &self,
        group: &str,
        name: &str,
        project_path: &str,
        description: impl Into<Arc<D>>,
    ) -> Result<()> {
        let coordinate = ModuleCoordinate::new(group, name)?;
        let project_path = ProjectPath::new(project_path)?;
        self.register(coordinate, project_path, description)
    }

    /// Find the project substituted for a selector, ignoring its version.
    pub fn resolve_substitution(&self, selector: &ModuleSelector) -> Option<ProjectPath> {
        let coordinate = selector.coordinate()?;
        self.read_state().substitutions.get(&coordinate).cloned()
    }

    /// Get the component description registered for a project.
    pub fn describe_project(&self, project_path: impl AsRef<str>) -> Option<Arc<D>> {
        self.read_state()
            .descriptions
            .get(project_path.as_ref())
            .cloned()
    }

    /// Resolve a selector to its project and description under one read lock.
    pub fn resolve_component(&self, selector: &ModuleSelector) -> Option<(ProjectPath, Arc<D>)> {
        let coordinate = selector.coordinate()?;
        let state = self.read_state();
        let project_path = state.substitutions.get(&coordinate)?;
        let description = state.descriptions.get(project_path)?;
        Some((project_path.clone(), description.clone()))
    }

    /// Mark project discovery as complete.
    ///
    /// Waits for in-flight registrations, then rejects all later ones.
    /// Calling this more than once has no further effect.
    pub fn seal(&self) {
        // Holding the write lock orders the flag after every pending register().
        let state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if !self.sealed.swap(true, Ordering::AcqRel) {
            info!(
                "Substitution registry sealed with {} substitution(s)",
                state.substitutions.len()
            );
        }
    }

    /// Check whether discovery has been sealed.
    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::Acquire)
    }

    /// Snapshot every substitution, sorted by coordinate.
    pub fn substitutions(&self) -> Vec<SubstitutionEntry> {
        let state = self.read_state();
        let mut entries: Vec<SubstitutionEntry> = state
            .substitutions
            .iter()
            .map(|(coordinate, project_path)| SubstitutionEntry {
                coordinate: coordinate.clone(),
                project_path: project_path.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.coordinate.cmp(&b.coordinate));
        entries
    }

    /// Number of substituted coordinates.
    pub fn len(&self) -> usize {
        self.read_state().substitutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> RegistryStats {
        let state = self.read_state();
        RegistryStats {
            substitution_count: state.substitutions.len(),
            project_count: state.descriptions.len(),
            sealed: self.is_sealed(),
            conflict_policy: self.config.conflict_policy,
        }
    }

    // Writers never leave the maps half-updated, so a poisoned lock is still
    // safe to read.
    fn read_state(&self) -> RwLockReadGuard<'_, RegistryState<D>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<D: Send + Sync> SubstitutionLookup<D> for SubstitutionRegistry<D> {
    fn resolve_substitution(&self, selector: &ModuleSelector) -> Option<ProjectPath> {
        SubstitutionRegistry::resolve_substitution(self, selector)
    }

    fn describe_project(&self, project_path: &str) -> Option<Arc<D>> {
        SubstitutionRegistry::describe_project(self, project_path)
    }

    fn resolve_component(&self, selector: &ModuleSelector) -> Option<(ProjectPath, Arc<D>)> {
        SubstitutionRegistry::resolve_component(self, selector)
    }
}
