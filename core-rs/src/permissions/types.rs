//! Core permission data model
//!
//! A role's permission state is a mapping from module code to a fixed record
//! of six capability flags. A module absent from the mapping carries the
//! all-false default set; callers never observe partial records.

use crate::errors::{HrpError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::str::FromStr;

/// Opaque identifier for a functional module (e.g. "employees", "master_data")
///
/// Module codes are map keys, not free text. Which codes are valid is the
/// module catalog's concern; the resolver operates over whatever codes appear
/// in the dependency graph and the supplied mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleCode(String);

impl ModuleCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModuleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for ModuleCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

// Allows HashMap<ModuleCode, _> lookups keyed by &str.
impl Borrow<str> for ModuleCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One of the six independently grantable capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Read,
    Write,
    Update,
    Delete,
    Approve,
    Export,
}

impl Capability {
    /// All six capabilities in the order the external record lists them
    pub const ALL: [Capability; 6] = [
        Capability::Read,
        Capability::Write,
        Capability::Update,
        Capability::Delete,
        Capability::Approve,
        Capability::Export,
    ];

    /// Field name used by the external flat record shape
    pub fn wire_name(&self) -> &'static str {
        match self {
            Capability::Read => "canRead",
            Capability::Write => "canWrite",
            Capability::Update => "canUpdate",
            Capability::Delete => "canDelete",
            Capability::Approve => "canApprove",
            Capability::Export => "canExport",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Capability {
    type Err = HrpError;

    /// Parse a capability from its wire name (`canRead`) or short name (`read`)
    ///
    /// Unknown names fail here, at the boundary - the resolver itself never
    /// sees malformed capability values.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "canRead" | "read" => Ok(Capability::Read),
            "canWrite" | "write" => Ok(Capability::Write),
            "canUpdate" | "update" => Ok(Capability::Update),
            "canDelete" | "delete" => Ok(Capability::Delete),
            "canApprove" | "approve" => Ok(Capability::Approve),
            "canExport" | "export" => Ok(Capability::Export),
            other => Err(HrpError::UnknownCapability(other.to_string())),
        }
    }
}

/// Fixed record of the six capability flags for one module
///
/// All six fields are always present; there are no partial records. The
/// serialized form matches the external store shape (`canRead` ... `canExport`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSet {
    pub can_read: bool,
    pub can_write: bool,
    pub can_update: bool,
    pub can_delete: bool,
    pub can_approve: bool,
    pub can_export: bool,
}

impl PermissionSet {
    /// The all-false default set, the implicit value for absent modules
    pub const NONE: PermissionSet = PermissionSet {
        can_read: false,
        can_write: false,
        can_update: false,
        can_delete: false,
        can_approve: false,
        can_export: false,
    };

    /// The all-true set used by "Grant All"
    pub const ALL: PermissionSet = PermissionSet {
        can_read: true,
        can_write: true,
        can_update: true,
        can_delete: true,
        can_approve: true,
        can_export: true,
    };

    /// True if any of the six flags is enabled
    pub fn has_any(&self) -> bool {
        self.can_read
            || self.can_write
            || self.can_update
            || self.can_delete
            || self.can_approve
            || self.can_export
    }

    pub fn get(&self, capability: Capability) -> bool {
        match capability {
            Capability::Read => self.can_read,
            Capability::Write => self.can_write,
            Capability::Update => self.can_update,
            Capability::Delete => self.can_delete,
            Capability::Approve => self.can_approve,
            Capability::Export => self.can_export,
        }
    }

    pub fn set(&mut self, capability: Capability, value: bool) {
        match capability {
            Capability::Read => self.can_read = value,
            Capability::Write => self.can_write = value,
            Capability::Update => self.can_update = value,
            Capability::Delete => self.can_delete = value,
            Capability::Approve => self.can_approve = value,
            Capability::Export => self.can_export = value,
        }
    }

    /// Capabilities currently enabled, in record order
    pub fn enabled(&self) -> Vec<Capability> {
        Capability::ALL
            .iter()
            .copied()
            .filter(|c| self.get(*c))
            .collect()
    }
}

/// Full permission state for one role: module code -> permission set
///
/// Keys are unique, insertion order is irrelevant. A module absent from the
/// mapping reads as [`PermissionSet::NONE`]. The mapping covers modules from
/// exactly one permission scope; organization and platform modules are never
/// mixed in the same mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PermissionMapping {
    entries: HashMap<ModuleCode, PermissionSet>,
}

impl PermissionMapping {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Permission set for a module, the all-false default if absent
    pub fn get(&self, module: &str) -> PermissionSet {
        self.entries.get(module).copied().unwrap_or(PermissionSet::NONE)
    }

    /// True if the mapping has an explicit entry for the module
    pub fn contains(&self, module: &str) -> bool {
        self.entries.contains_key(module)
    }

    /// Replace (or create) a module's entire permission set
    pub fn insert(&mut self, module: ModuleCode, set: PermissionSet) {
        self.entries.insert(module, set);
    }

    /// Mutable access to a module's set, creating the default entry if absent
    pub fn entry_mut(&mut self, module: &ModuleCode) -> &mut PermissionSet {
        self.entries
            .entry(module.clone())
            .or_insert(PermissionSet::NONE)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ModuleCode, &PermissionSet)> {
        self.entries.iter()
    }

    /// Module codes in sorted order, for stable rendering and serialization
    pub fn modules_sorted(&self) -> Vec<&ModuleCode> {
        let mut codes: Vec<&ModuleCode> = self.entries.keys().collect();
        codes.sort();
        codes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
