//! Error types for the HR platform permission core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HrpError {
    #[error("Unknown capability: {0}")]
    UnknownCapability(String),

    #[error("Unknown permission scope: {0}")]
    UnknownScope(String),

    #[error("Invalid module code: {0}")]
    InvalidModuleCode(String),

    #[error("Duplicate module in catalog: {0}")]
    DuplicateModule(String),

    #[error("Duplicate dependency rule for module: {0}")]
    DuplicateRule(String),

    #[error("Role not found: {0}")]
    RoleNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, HrpError>;
