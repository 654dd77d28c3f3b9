//! Flat permission record shape
//!
//! The permission store collaborator exchanges a role's grants as a flat list
//! of per-module records. The editing surface converts that list into the
//! keyed [`PermissionMapping`] on load and back on submit; the resolver never
//! serializes.

use crate::catalog::ModuleCatalog;
use crate::permissions::types::{ModuleCode, PermissionMapping, PermissionSet};
use serde::{Deserialize, Serialize};

/// One module's grants in the external list shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRecord {
    pub module_code: ModuleCode,
    pub can_read: bool,
    pub can_write: bool,
    pub can_update: bool,
    pub can_delete: bool,
    pub can_approve: bool,
    pub can_export: bool,
}

impl PermissionRecord {
    pub fn new(module_code: impl Into<ModuleCode>, set: PermissionSet) -> Self {
        Self {
            module_code: module_code.into(),
            can_read: set.can_read,
            can_write: set.can_write,
            can_update: set.can_update,
            can_delete: set.can_delete,
            can_approve: set.can_approve,
            can_export: set.can_export,
        }
    }

    pub fn permission_set(&self) -> PermissionSet {
        PermissionSet {
            can_read: self.can_read,
            can_write: self.can_write,
            can_update: self.can_update,
            can_delete: self.can_delete,
            can_approve: self.can_approve,
            can_export: self.can_export,
        }
    }
}

/// Convert the flat record list into a keyed mapping
///
/// Duplicate module codes behave as a keyed upsert: the last record wins.
pub fn mapping_from_records(records: &[PermissionRecord]) -> PermissionMapping {
    let mut mapping = PermissionMapping::new();
    for record in records {
        mapping.insert(record.module_code.clone(), record.permission_set());
    }
    mapping
}

/// Convert a mapping back into the flat list shape, sorted by module code
pub fn records_from_mapping(mapping: &PermissionMapping) -> Vec<PermissionRecord> {
    mapping
        .modules_sorted()
        .into_iter()
        .map(|code| PermissionRecord::new(code.clone(), mapping.get(code.as_str())))
        .collect()
}

/// Seed default entries for catalog modules missing from the mapping
///
/// Every module known to the catalog must be present in the mapping the
/// surface renders; modules the store has never persisted get the all-false
/// default set.
pub fn seed_catalog_defaults(mapping: &mut PermissionMapping, catalog: &ModuleCatalog) {
    for code in catalog.codes() {
        if !mapping.contains(code.as_str()) {
            mapping.insert(code.clone(), PermissionSet::NONE);
        }
    }
}
