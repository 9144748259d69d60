/// Report output error type.
#[derive(Debug)]
pub enum OutputError {
    /// Serde JSON error.
    SerdeJsonError(serde_json::Error),
    /// Serde YAML error.
    SerdeYamlError(serde_yaml::Error),
    /// TOML serialization error.
    TomlSerError(toml::ser::Error),
}
impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::SerdeJsonError(error) => write!(f, "- JSON Serialization Error:\n{}", error),
            OutputError::SerdeYamlError(error) => write!(f, "- YAML Serialization Error:\n{}", error),
            OutputError::TomlSerError(error) => write!(f, "- TOML Serialization Error:\n{}", error),
        }
    }
}
impl std::error::Error for OutputError {}
impl From<serde_json::Error> for OutputError {
    fn from(error: serde_json::Error) -> Self {
        OutputError::SerdeJsonError(error)
    }
}
impl From<serde_yaml::Error> for OutputError {
    fn from(error: serde_yaml::Error) -> Self {
        OutputError::SerdeYamlError(error)
    }
}
impl From<toml::ser::Error> for OutputError {
    fn from(error: toml::ser::Error) -> Self {
        OutputError::TomlSerError(error)
    }
}

/// Result type for the `output` module.
pub type OutputResult<T> = std::result::Result<T, OutputError>;

