//! Configuration for the substitution registry.
//!
//! Compile-time limits live on [`RegistryConfig`]; per-build behavior is
//! carried by [`SubstitutionConfig`].

use serde::{Deserialize, Serialize};

/// Registry-level constants.
pub struct RegistryConfig;

impl RegistryConfig {
    /// Separator used in `group:name[:version]` notation.
    pub const COORDINATE_SEPARATOR: char = ':';
}

/// What to do when a coordinate is registered again with a different project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Last registration wins.
    #[default]
    Overwrite,
    /// Last registration wins, and the conflict is logged.
    Warn,
    /// The later registration fails and the earlier mapping is kept.
    Reject,
}

impl ConflictPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictPolicy::Overwrite => "overwrite",
            ConflictPolicy::Warn => "warn",
            ConflictPolicy::Reject => "reject",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "overwrite" => Some(ConflictPolicy::Overwrite),
            "warn" => Some(ConflictPolicy::Warn),
            "reject" => Some(ConflictPolicy::Reject),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Runtime configuration for one build context's registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionConfig {
    /// How duplicate coordinate registrations are handled.
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,
}

impl SubstitutionConfig {
    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }
}
