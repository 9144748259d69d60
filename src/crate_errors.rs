use crate::{
    angle,
    args,
    output,
};

/// Error-type enum for the `asv_geometry` crate.
/// Wraps the error of every stage a command goes through.
#[derive(Debug)]
pub enum AsvError {
    ArgError(args::ArgError),
    AngleError(angle::AngleError),
    OutputError(output::OutputError),
    StringOnly(String),
}
impl std::fmt::Display for AsvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AsvError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            AsvError::AngleError(error) => write!(f, "! ANGLE ERROR:\n{}", error),
            AsvError::OutputError(error) => write!(f, "! OUTPUT ERROR:\n{}", error),
            AsvError::StringOnly(error) => write!(f, "! ASV GEOMETRY ERROR:\n- {}", error),
        }
    }
}
impl std::error::Error for AsvError {}
impl From<String> for AsvError {
    fn from(error: String) -> Self {
        AsvError::StringOnly(error)
    }
}
impl From<args::ArgError> for AsvError {
    fn from(error: args::ArgError) -> Self {
        AsvError::ArgError(error)
    }
}
impl From<angle::AngleError> for AsvError {
    fn from(error: angle::AngleError) -> Self {
        AsvError::AngleError(error)
    }
}
impl From<output::OutputError> for AsvError {
    fn from(error: output::OutputError) -> Self {
        AsvError::OutputError(error)
    }
}

/// Result type for the `asv_geometry` crate.
pub type AsvResult<T> = std::result::Result<T, AsvError>;

/// Create an `AsvResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::AsvError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> AsvResult<T> {
    Err(AsvError::StringOnly(error_str.to_string()))
}
