//! Project path identifiers.

use crate::error::Result;
use crate::models::coordinate::require_component;
use serde::Serialize;
use std::borrow::Borrow;

/// Identifier of a locally buildable project, unique within a composite build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProjectPath(String);

impl ProjectPath {
    /// Create a project path, rejecting empty or blank identifiers.
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        require_component("project path", &path)?;
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets the registry's description map be queried with a plain `&str`.
impl Borrow<str> for ProjectPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_project_path_validation() {
        assert!(ProjectPath::new("").is_err());
        assert!(ProjectPath::new("   ").is_err());
        assert_eq!(ProjectPath::new(":lib").unwrap().as_str(), ":lib");
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(ProjectPath::new(":lib").unwrap(), 1);
        assert_eq!(map.get(":lib"), Some(&1));
    }

    #[test]
    fn test_serializes_as_string() {
        let path = ProjectPath::new(":app:core").unwrap();
        assert_eq!(serde_json::to_string(&path).unwrap(), r#"":app:core""#);
    }
}
