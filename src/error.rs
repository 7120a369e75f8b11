use thiserror::Error;

/// Errors returned by gotify-push library.
#[derive(Error, Debug)]
pub enum Error {
    /// No message text was given as argument or via stdin.
    #[error("a message must be set, either as argument or via stdin")]
    MissingMessage,

    /// Message text was given as argument and via stdin at the same time.
    #[error("a message is set via stdin and arguments, use only one of them")]
    ConflictingMessageSource,

    /// No token override and no usable configuration.
    #[error("token is not configured, run 'gotify init'")]
    MissingToken,

    /// No url override and no usable configuration.
    #[error("url is not configured, run 'gotify init'")]
    MissingUrl,

    /// Server url could not be parsed as an absolute url.
    #[error("invalid url {0}")]
    InvalidUrl(String),

    /// None of the configuration locations contain a file.
    #[error("no configuration found in any of: {0}")]
    ConfigNotFound(String),

    /// Server answered the create message request with a non-success status.
    #[error("server responded with {status}: {description}")]
    Delivery {
        /// HTTP status code returned by the server.
        status: u16,
        /// Error description returned by the server or the status reason.
        description: String,
    },

    /// Call to a feature that is not enabled.
    #[error("Feature {0} is not enabled")]
    DisabledFeature(String),

    // ### Converting from other error types ###
    /// Pass-thru [`std::io::Error`].
    #[error("std::io Error: {0}")]
    IOError(#[from] std::io::Error),

    /// Pass-thru `serde_json::Error`.
    #[error("Serde_json Error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[cfg(feature = "parse-cfg")]
    /// Pass-thru `toml::de::Error`.
    #[error("Serde Toml Error: {0}")]
    SerdeTomlError(#[from] toml::de::Error),

    #[cfg(feature = "client")]
    /// Pass-thru `reqwest::Error`, raised when the request could not be delivered.
    #[error("Reqwest Error: {0}")]
    ReqwestError(#[from] reqwest::Error),
}

impl Error {
    /// Whether this error happened while delivering the message to the server.
    pub fn is_delivery_error(&self) -> bool {
        match self {
            Error::Delivery { .. } => true,
            #[cfg(feature = "client")]
            Error::ReqwestError(_) => true,
            _ => false,
        }
    }
}
