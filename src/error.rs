//! # Probe Errors

use std::error::Error as StdError;

pub type Result<T> = std::result::Result<T, ProbeError>;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Any transport-level failure: connect, DNS, TLS, timeout, bad response, body read.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("failed to load profile '{path}'")]
    ProfileLoad {
        path: String,
        #[source]
        source: ini::Error,
    },

    #[error("invalid value '{value}' for '{key}' in profile [{profile}]")]
    ProfileValue {
        profile: String,
        key: String,
        value: String,
    },
}

impl ProbeError {
    /// Message with the full cause chain, e.g.
    /// `error sending request for url (...): client error (Connect): tcp connect error: Connection refused`.
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        // `transparent` forwards source() to the inner error's source, so the chain starts below it
        while let Some(cause) = source {
            message.push_str(&format!(": {cause}"));
            source = cause.source();
        }
        message
    }

    pub fn is_request(&self) -> bool {
        matches!(self, ProbeError::Request(_))
    }
}
