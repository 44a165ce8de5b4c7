mod ssm;

pub use ssm::SsmStore;

use thiserror::Error;

/// A single parameter as returned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One page of a "get parameters by path" listing
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParameterPage {
    pub parameters: Vec<Parameter>,
    pub next_token: Option<String>,
}

/// Request for one page of parameters under a path. Values are always
/// requested decrypted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathQuery {
    pub path: String,
    pub recursive: bool,
    pub next_token: Option<String>,
}

impl PathQuery {
    pub fn new(path: &str, recursive: bool) -> Self {
        Self {
            path: path.to_string(),
            recursive,
            next_token: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("GetParametersByPath failed for {path}: {message}")]
    ListByPath { path: String, message: String },

    #[error("GetParameter failed for {name}: {message}")]
    GetParameter { name: String, message: String },
}

/// Read access to a hierarchical parameter store
pub trait ParameterStore {
    /// Fetch one page of parameters under `query.path`.
    fn parameters_by_path(&self, query: &PathQuery) -> Result<ParameterPage, StoreError>;

    /// Look up a single parameter by its exact name. `Ok(None)` means the
    /// parameter does not exist.
    fn parameter(&self, name: &str) -> Result<Option<Parameter>, StoreError>;
}
