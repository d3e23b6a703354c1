use std::path::PathBuf;

use crate::domain::value_objects::ContainerName;

/// Which blob-storage backend the gateway talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Process-local map, lost on restart
    #[default]
    Memory,
    /// Directories and files under `STORAGE_ROOT`
    Filesystem,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::Filesystem => write!(f, "filesystem"),
        }
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "filesystem" | "fs" => Ok(StorageBackend::Filesystem),
            _ => Err(format!("Invalid storage backend: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub storage_backend: StorageBackend,
    pub storage_root: PathBuf,
    pub durable_writes: bool,
    /// Container used when a request does not select one
    pub default_container: String,
    pub max_body_bytes: usize,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            storage_backend: StorageBackend::Memory,
            storage_root: PathBuf::from("/data/blobs"),
            durable_writes: true,
            default_container: ContainerName::DEFAULT.to_string(),
            max_body_bytes: 100 * 1024 * 1024, // 100 MiB
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// Unset variables take their defaults; set but unparseable ones are
    /// an error.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            listen_addr: lookup("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            storage_backend: parse_var(&lookup, "STORAGE_BACKEND", defaults.storage_backend)?,
            storage_root: lookup("STORAGE_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_root),
            durable_writes: parse_var(&lookup, "DURABLE_WRITES", defaults.durable_writes)?,
            default_container: lookup("DEFAULT_CONTAINER").unwrap_or(defaults.default_container),
            max_body_bytes: parse_var(&lookup, "MAX_BODY_BYTES", defaults.max_body_bytes)?,
            log_format: parse_var(&lookup, "LOG_FORMAT", defaults.log_format)?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.listen_addr.is_empty() {
            return Err("LISTEN_ADDR cannot be empty".to_string());
        }

        ContainerName::new(self.default_container.as_str())
            .map_err(|e| format!("DEFAULT_CONTAINER is invalid: {}", e))?;

        if self.max_body_bytes == 0 {
            return Err("MAX_BODY_BYTES must be at least 1".to_string());
        }

        if self.storage_backend == StorageBackend::Filesystem
            && self.storage_root.as_os_str().is_empty()
        {
            return Err("STORAGE_ROOT cannot be empty for the filesystem backend".to_string());
        }

        Ok(())
    }

    /// Default container as a validated name
    pub fn default_container_name(&self) -> Result<ContainerName, String> {
        ContainerName::new(self.default_container.as_str()).map_err(|e| e.to_string())
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, String>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| format!("{} has an invalid value '{}': {}", name, raw, e)),
        None => Ok(default),
    }
}
