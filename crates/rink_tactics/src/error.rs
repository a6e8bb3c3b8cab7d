use thiserror::Error;

/// Construction and configuration errors.
///
/// Classification itself never fails; these only surface while building a
/// rink model, loading a classifier config, or decoding tracking JSON.
#[derive(Error, Debug)]
pub enum TacticsError {
    #[error("Invalid rink dimensions: {reason}")]
    InvalidRink { reason: String },

    #[error("Invalid classifier config: {reason}")]
    InvalidConfig { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TacticsError {
    pub(crate) fn invalid_rink(reason: impl Into<String>) -> Self {
        TacticsError::InvalidRink {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        TacticsError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TacticsError>;
