use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskLabError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("project file parse error: {0}")]
    ProjectParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("refusing to overwrite existing file: {0} (use --force)")]
    OutputExists(String),

    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("invalid selection {attribute}={value} (allowed: {allowed})")]
    InvalidSelection {
        attribute: String,
        value: String,
        allowed: String,
    },

    #[error("malformed assignment '{0}', expected ATTRIBUTE=VALUE")]
    MalformedAssignment(String),

    #[error("logging setup failed: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RiskLabError>;
