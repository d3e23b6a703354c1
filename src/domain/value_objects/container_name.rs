use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::errors::DomainError;

/// Cached regex pattern for container names
static CONTAINER_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9._-]*$").expect("Invalid container name regex")
});

/// Validated container name (the bucket that objects live in)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerName(String);

impl ContainerName {
    pub const DEFAULT: &'static str = "default";
    const MAX_LENGTH: usize = 63;

    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::InvalidContainerName(
                "Container name cannot be empty".to_string(),
            ));
        }

        if value.len() > Self::MAX_LENGTH {
            return Err(DomainError::InvalidContainerName(format!(
                "Container name too long: {} > {}",
                value.len(),
                Self::MAX_LENGTH
            )));
        }

        if !CONTAINER_NAME_REGEX.is_match(&value) {
            return Err(DomainError::InvalidContainerName(format!(
                "'{}' must be lowercase alphanumeric with '.', '-' or '_'",
                value
            )));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ContainerName {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl std::fmt::Display for ContainerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ContainerName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
