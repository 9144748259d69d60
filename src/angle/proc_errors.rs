/// Angle error type.
#[derive(Debug)]
pub enum AngleError {
    /// Non-finite value passed where an angle was expected.
    InvalidArgument{
        name: String,
        value: f64,
    },
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for AngleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AngleError::InvalidArgument{name, value} => write!(f, "- Invalid argument: {} must be finite, got {}", name, value),
            AngleError::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}
impl std::error::Error for AngleError {}
impl From<String> for AngleError {
    fn from(error: String) -> Self {
        AngleError::StringOnly(error)
    }
}

/// Result type for the `angle` module.
pub type AngleResult<T> = std::result::Result<T, AngleError>;

/// Create a `AngleError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> AngleResult<T> {
    Err(AngleError::StringOnly(error_str.to_string()))
}
