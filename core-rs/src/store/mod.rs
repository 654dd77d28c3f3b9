//! Permission store boundary
//!
//! The store collaborator supplies a role's grants as a flat list of
//! per-module records and persists the list handed back on submit. This
//! module owns the record shape, the list/mapping conversions, and the
//! file-backed reference store behind the [`PermissionStore`] seam.

pub mod file_store;
pub mod records;

pub use file_store::{FilePermissionStore, PermissionStore, RoleGrants};
pub use records::{
    mapping_from_records, records_from_mapping, seed_catalog_defaults, PermissionRecord,
};
