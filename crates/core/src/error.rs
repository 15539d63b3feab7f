use thiserror::Error;

/// Top-level error type shared by every glance crate.
#[derive(Debug, Error)]
pub enum GlanceError {
    /// A metrics query failed. `what` names the query, e.g. `"memory usage"`.
    #[error("{what}: {reason}")]
    Provider { what: String, reason: String },

    #[error("metrics are not supported on this platform")]
    Unsupported,

    #[error("invalid mode '{0}'")]
    InvalidMode(String),

    #[error("config error: {0}")]
    Config(String),
}

impl GlanceError {
    /// Shorthand for a [`GlanceError::Provider`] failure.
    pub fn provider(what: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Provider {
            what:   what.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = GlanceError> = std::result::Result<T, E>;
