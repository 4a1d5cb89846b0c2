use thiserror::Error;

pub type Result<T> = std::result::Result<T, RafflekitError>;

#[derive(Error, Debug)]
pub enum RafflekitError {
    #[error("Network connection error: {0}")]
    NetworkConnection(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Malformed object: {0}")]
    MalformedObject(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Operation timeout: {0}")]
    Timeout(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RafflekitError {
    pub fn network_connection(msg: impl Into<String>) -> Self {
        Self::NetworkConnection(msg.into())
    }

    pub fn rpc(code: i64, msg: impl Into<String>) -> Self {
        Self::Rpc {
            code,
            message: msg.into(),
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedObject(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

// reqwest folds timeouts into its error type
impl From<reqwest::Error> for RafflekitError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RafflekitError::Timeout(err.to_string())
        } else {
            RafflekitError::NetworkConnection(err.to_string())
        }
    }
}
