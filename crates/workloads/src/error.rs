use http::StatusCode;
use url::Url;

/// A workload result.
pub type Result<T> = std::result::Result<T, Error>;

/// A workload error.
///
/// Every variant fails only the request that produced it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The outbound request could not be sent.
    #[error("failed to send GET request to '{url}'")]
    Transport {
        /// The requested URL.
        url: Url,
        /// The underlying transport error.
        #[source]
        source: anyhow::Error,
    },

    /// The outbound response body could not be read.
    #[error("failed to read response body from '{url}'")]
    Body {
        /// The requested URL.
        url: Url,
        /// The underlying stream error.
        #[source]
        source: anyhow::Error,
    },

    /// A Spin variable holds a value the workload cannot use.
    #[error("invalid value for variable '{name}': {reason}")]
    InvalidVariable {
        /// The variable name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A query parameter holds a value the workload cannot use.
    #[error("invalid query parameter '{name}': {reason}")]
    InvalidQuery {
        /// The parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The requested Argon2 cost parameters are out of range.
    #[error("invalid Argon2 parameters: {0}")]
    InvalidHashParams(String),

    /// Hashing or verifying the password failed.
    #[error("password hashing failed: {0}")]
    Hash(String),
}

impl Error {
    /// The HTTP status reported to the caller for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Transport { .. } | Self::Body { .. } => StatusCode::BAD_GATEWAY,
            Self::InvalidQuery { .. } | Self::InvalidHashParams(_) => StatusCode::BAD_REQUEST,
            Self::InvalidVariable { .. } | Self::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub(crate) fn invalid_query(name: &str, reason: impl ToString) -> Self {
        Self::InvalidQuery {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn invalid_variable(name: &str, reason: impl ToString) -> Self {
        Self::InvalidVariable {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
