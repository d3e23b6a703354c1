use crate::domain::errors::DomainError;

/// Media type label stored alongside an object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentType(String);

impl ContentType {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidContentType(
                "Content type cannot be empty".to_string(),
            ));
        }

        if !trimmed.chars().all(|c| c.is_ascii() && !c.is_ascii_control()) {
            return Err(DomainError::InvalidContentType(format!(
                "'{}' contains non-printable characters",
                trimmed.escape_debug()
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn octet_stream() -> Self {
        Self("application/octet-stream".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ContentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_trims_whitespace() {
        let ct = ContentType::new("  text/plain ").unwrap();
        assert_eq!(ct.as_str(), "text/plain");
    }

    #[test]
    fn test_content_type_keeps_parameters() {
        let ct = ContentType::new("text/plain; charset=utf-8").unwrap();
        assert_eq!(ct.to_string(), "text/plain; charset=utf-8");
    }

    #[test]
    fn test_content_type_rejects_empty() {
        assert!(ContentType::new("").is_err());
        assert!(ContentType::new("   ").is_err());
    }

    #[test]
    fn test_content_type_rejects_control_characters() {
        assert!(ContentType::new("text/plain\r\nx-evil: 1").is_err());
    }
}
