use thiserror::Error;

/// Failures surfaced by the signal engine.
///
/// `InvalidRequest` means there was nothing to evaluate and is reported back to
/// the caller as-is. `Computation` means a snapshot was present but a value in it
/// could not be used; callers going through `SignalEngine::predict` get a
/// degraded `HOLD` instead of this error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("computation error: {0}")]
    Computation(String),
}

impl EngineError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn computation(message: impl Into<String>) -> Self {
        Self::Computation(message.into())
    }

    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
