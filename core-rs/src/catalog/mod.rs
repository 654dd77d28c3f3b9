//! Module catalog
//!
//! The catalog is the externally supplied list of valid functional modules
//! for one permission scope, with display metadata for rendering. It decides
//! which modules the editing surface seeds and renders; the resolver itself
//! is catalog-agnostic and operates purely over the keys appearing in the
//! dependency graph and the supplied mapping.

use crate::errors::{HrpError, Result};
use crate::permissions::types::ModuleCode;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Module codes are lowercase snake_case identifiers
static MODULE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid module code regex"));

/// Display metadata for one functional module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub code: ModuleCode,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ModuleDescriptor {
    pub fn new(code: impl Into<ModuleCode>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Ordered list of the modules known to one permission scope
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleCatalog {
    modules: Vec<ModuleDescriptor>,
}

impl ModuleCatalog {
    /// Build a catalog, rejecting duplicate or malformed module codes
    pub fn new(modules: Vec<ModuleDescriptor>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::new();
        for module in &modules {
            let code = module.code.as_str();
            if !MODULE_CODE_RE.is_match(code) {
                return Err(HrpError::InvalidModuleCode(code.to_string()));
            }
            if !seen.insert(code) {
                return Err(HrpError::DuplicateModule(code.to_string()));
            }
        }
        Ok(Self { modules })
    }

    /// Parse a catalog from a YAML document
    ///
    /// Format:
    /// ```yaml
    /// - code: master_data
    ///   name: Master Data
    ///   description: Shared lookup tables
    /// - code: employees
    ///   name: Employees
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let modules: Vec<ModuleDescriptor> = serde_yaml::from_str(yaml)?;
        Self::new(modules)
    }

    /// Load a catalog from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Descriptors in catalog order
    pub fn modules(&self) -> &[ModuleDescriptor] {
        &self.modules
    }

    pub fn get(&self, code: &str) -> Option<&ModuleDescriptor> {
        self.modules.iter().find(|m| m.code.as_str() == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Module codes in catalog order
    pub fn codes(&self) -> impl Iterator<Item = &ModuleCode> {
        self.modules.iter().map(|m| &m.code)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
