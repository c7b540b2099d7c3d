use thiserror::Error;

/// Errors returned by the validated conversion and search entry points.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DspError {
    #[error("ADC bit depth must be at least 1")]
    ZeroBitDepth,
    #[error("ADC bit depth {bits} exceeds the supported maximum of {max}")]
    BitDepthTooLarge { bits: u32, max: u32 },
    #[error("ADC range must be finite and positive, got {0}")]
    InvalidRange(f64),
    #[error("amplitude sequence is empty")]
    EmptyAmplitudes,
    #[error("{frequencies} frequencies supplied for {amplitudes} amplitudes")]
    LengthMismatch {
        frequencies: usize,
        amplitudes: usize,
    },
    #[cfg(feature = "serde")]
    #[error("invalid ADC configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DspError>;
