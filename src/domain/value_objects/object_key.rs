use crate::domain::errors::DomainError;

/// Name of an object inside a container. Always a single path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectKey(String);

impl ObjectKey {
    pub const SEPARATOR: char = '/';

    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.contains(Self::SEPARATOR) {
            return Err(DomainError::InvalidObjectKey(format!(
                "'{}' contains a path separator",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Derive the key from a raw request path.
    ///
    /// Leading and trailing separators are trimmed; whatever remains must be
    /// a single segment. `/` yields the empty key.
    pub fn from_path(path: &str) -> Result<Self, DomainError> {
        let cleaned = path.trim_matches(Self::SEPARATOR);
        if cleaned.split(Self::SEPARATOR).count() > 1 {
            return Err(DomainError::SubpathNotSupported(cleaned.to_string()));
        }
        Ok(Self(cleaned.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ObjectKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
