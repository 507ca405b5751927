use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RealtimeError {
    #[error("realtime is disabled by the server configuration")]
    Disabled,

    #[error("realtime fetch failed: {0}")]
    Fetch(String),

    #[error("realtime payload decode error: {0}")]
    Decode(String),

    #[error("realtime service is not running")]
    NotRunning,
}

#[derive(Debug, thiserror::Error)]
pub enum EngageError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Realtime(#[from] RealtimeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
