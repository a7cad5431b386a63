use thiserror::Error;

pub type Result<T> = std::result::Result<T, BridgeError>;

/// Failures surfaced by the native layer. The dispatcher never catches,
/// wraps, or retries these; callers see them exactly as the bridge raised
/// them. An unavailable permission is not an error — it is
/// `PermissionStatus::Unavailable`.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("platform error ({code}): {message}")]
    Platform { code: String, message: String },

    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),
}

impl BridgeError {
    #[must_use]
    pub fn platform(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Platform {
            code: code.into(),
            message: message.into(),
        }
    }
}
