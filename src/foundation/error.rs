/// Convenience result type used across waveline.
pub type WavelineResult<T> = Result<T, WavelineError>;

/// Top-level error taxonomy used by engine and adapter APIs.
#[derive(thiserror::Error, Debug)]
pub enum WavelineError {
    /// Invalid geometry, configuration or caller-provided parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Not enough decoded audio to render anything.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// A sample format outside the five canonical ones.
    #[error("unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Errors while reading or decoding audio input.
    #[error("decode error: {0}")]
    Decode(String),

    /// Errors while encoding the finished pixel grid.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WavelineError {
    /// Build a [`WavelineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WavelineError::InsufficientData`] value.
    pub fn insufficient_data(msg: impl Into<String>) -> Self {
        Self::InsufficientData(msg.into())
    }

    /// Build a [`WavelineError::UnsupportedFormat`] value.
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Build a [`WavelineError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`WavelineError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`WavelineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
