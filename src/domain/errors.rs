use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Cannot use a subpathed object name (e.g. foo/bar.txt): {0}")]
    SubpathNotSupported(String),

    #[error("Invalid object key: {0}")]
    InvalidObjectKey(String),

    #[error("Invalid container name: {0}")]
    InvalidContainerName(String),

    #[error("Invalid content type: {0}")]
    InvalidContentType(String),
}
