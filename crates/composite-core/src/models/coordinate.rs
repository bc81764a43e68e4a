//! Module coordinates and the selectors that reference them.

use crate::config::RegistryConfig;
use crate::error::{CompositeError, Result};
use serde::Serialize;

/// Version-independent identity of an externally resolvable module.
///
/// Two coordinates are equal when both group and name match. Versions are
/// carried by [`ModuleSelector`] and never take part in identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ModuleCoordinate {
    group: String,
    name: String,
}

impl ModuleCoordinate {
    /// Create a coordinate, rejecting blank components and components that
    /// contain the `:` separator.
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let group = group.into();
        let name = name.into();
        require_coordinate_part("group", &group)?;
        require_coordinate_part("name", &name)?;
        Ok(Self { group, name })
    }

    /// Parse `group:name` notation.
    pub fn parse(notation: &str) -> Result<Self> {
        let mut parts = notation.split(RegistryConfig::COORDINATE_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(group), Some(name), None) => Self::new(group, name),
            _ => Err(CompositeError::invalid(
                "coordinate",
                format!("expected group:name, got '{}'", notation),
            )),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for ModuleCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.group,
            RegistryConfig::COORDINATE_SEPARATOR,
            self.name
        )
    }
}

/// A dependency request encountered during graph resolution.
///
/// Only `group` and `name` are consulted when looking up a substitution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ModuleSelector {
    pub group: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ModuleSelector {
    /// Create a selector without a version.
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: None,
        }
    }

    /// Attach a requested version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Parse `group:name` or `group:name:version` notation.
    pub fn parse(notation: &str) -> Result<Self> {
        let parts: Vec<&str> = notation
            .split(RegistryConfig::COORDINATE_SEPARATOR)
            .collect();
        match parts.as_slice() {
            [group, name] => {
                let coordinate = ModuleCoordinate::new(*group, *name)?;
                Ok(Self::from(coordinate))
            }
            [group, name, version] => {
                let coordinate = ModuleCoordinate::new(*group, *name)?;
                require_coordinate_part("version", version)?;
                Ok(Self::from(coordinate).with_version(*version))
            }
            _ => Err(CompositeError::invalid(
                "selector",
                format!("expected group:name[:version], got '{}'", notation),
            )),
        }
    }

    /// The version-independent coordinate this selector points at.
    ///
    /// Returns `None` when group or name is blank, since no registered
    /// coordinate can match it.
    pub fn coordinate(&self) -> Option<ModuleCoordinate> {
        ModuleCoordinate::new(self.group.as_str(), self.name.as_str()).ok()
    }
}

impl From<ModuleCoordinate> for ModuleSelector {
    fn from(coordinate: ModuleCoordinate) -> Self {
        Self {
            group: coordinate.group,
            name: coordinate.name,
            version: None,
        }
    }
}

impl std::fmt::Display for ModuleSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = RegistryConfig::COORDINATE_SEPARATOR;
        match &self.version {
            Some(version) => write!(f, "{}{}{}{}{}", self.group, sep, self.name, sep, version),
            None => write!(f, "{}{}{}", self.group, sep, self.name),
        }
    }
}

pub(crate) fn require_component(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CompositeError::invalid(field, "must not be empty"));
    }
    Ok(())
}

// Group, name and version must survive a round trip through `group:name:version`.
fn require_coordinate_part(field: &str, value: &str) -> Result<()> {
    require_component(field, value)?;
    if value.contains(RegistryConfig::COORDINATE_SEPARATOR) {
        return Err(CompositeError::invalid(
            field,
            format!(
                "must not contain '{}', got '{}'",
                RegistryConfig::COORDINATE_SEPARATOR,
                value
            ),
        ));
    }
    Ok(())
}
