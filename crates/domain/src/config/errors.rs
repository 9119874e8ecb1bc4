/// Failures while reading, writing or checking `linode-records` configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read configuration from {0}: {1}")]
    FileRead(String, String),

    #[error("Cannot write configuration to {0}: {1}")]
    FileWrite(String, String),

    #[error("Invalid configuration TOML: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}
