use std::env;

/// Environment variable holding the colon-delimited list of store paths
pub const PATH_VAR: &str = "AWS_ENV_PATH";

const PATH_DELIMITER: char = ':';

/// Outcome of the startup activation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// No store paths configured, nothing to do
    Disabled,
    /// Paths to export, in the order given
    Configured(Vec<String>),
}

impl Activation {
    /// Read the activation state from `AWS_ENV_PATH`
    pub fn from_env() -> Self {
        Self::from_var(PATH_VAR)
    }

    pub fn from_var(name: &str) -> Self {
        Self::from_value(env::var(name).ok())
    }

    pub fn from_value(value: Option<String>) -> Self {
        match value.map(|value| split_paths(&value)) {
            Some(paths) if !paths.is_empty() => Activation::Configured(paths),
            _ => Activation::Disabled,
        }
    }
}

/// Split a colon-delimited path list, dropping empty segments
pub fn split_paths(value: &str) -> Vec<String> {
    value
        .split(PATH_DELIMITER)
        .filter(|path| !path.is_empty())
        .map(str::to_string)
        .collect()
}
