//! Permission editing session
//!
//! A [`PermissionEditor`] owns one role's permission mapping for the lifetime
//! of one open "Manage Permissions" dialog. The surface loads the role's flat
//! record list from the store, opens an editor over it, applies checkbox and
//! bulk mutations as the user works, renders locked state from
//! [`PermissionEditor::is_locked`], and finally submits
//! [`PermissionEditor::into_records`] back to the store. Dropping the editor
//! without submitting is cancellation; nothing persists in between.
//!
//! The mapping has a single writer (this editor) for the whole session, so
//! there is no aliasing of intermediate states across call sites.

use crate::permissions::resolver;
use crate::permissions::types::{Capability, ModuleCode, PermissionMapping, PermissionSet};
use crate::scope::PermissionScope;
use crate::store::records::{
    mapping_from_records, records_from_mapping, seed_catalog_defaults, PermissionRecord,
};

/// In-memory editing state for one role's permissions in one scope
#[derive(Debug, Clone)]
pub struct PermissionEditor {
    scope: PermissionScope,
    mapping: PermissionMapping,
}

impl PermissionEditor {
    /// Open an editing session over a role's stored records
    ///
    /// Seeds every catalog module missing from the records with the default
    /// all-false set, then resolves implied reads once so the first render
    /// is already consistent.
    pub fn open(scope: PermissionScope, records: &[PermissionRecord]) -> Self {
        let mut mapping = mapping_from_records(records);
        seed_catalog_defaults(&mut mapping, scope.module_catalog());
        resolver::apply_dependencies(scope.dependency_graph(), &mut mapping);
        Self { scope, mapping }
    }

    /// Open an editing session for a role with no stored grants yet
    pub fn empty(scope: PermissionScope) -> Self {
        Self::open(scope, &[])
    }

    pub fn scope(&self) -> PermissionScope {
        self.scope
    }

    /// Toggle one capability checkbox
    pub fn set_capability(&mut self, module: &ModuleCode, capability: Capability, value: bool) {
        resolver::update_permission(
            self.scope.dependency_graph(),
            &mut self.mapping,
            module,
            capability,
            value,
        );
    }

    /// "Grant All" bulk action for one module
    pub fn grant_all(&mut self, module: &ModuleCode) {
        resolver::set_module_permissions(
            self.scope.dependency_graph(),
            &mut self.mapping,
            module,
            PermissionSet::ALL,
        );
    }

    /// "Revoke All" bulk action for one module
    pub fn revoke_all(&mut self, module: &ModuleCode) {
        resolver::set_module_permissions(
            self.scope.dependency_graph(),
            &mut self.mapping,
            module,
            PermissionSet::NONE,
        );
    }

    /// True if the module's read checkbox is locked (auto-selected)
    ///
    /// Locked means some module that requires this one currently has a
    /// capability enabled; the surface disables the read checkbox and shows
    /// the auto-selected marker. Only read is ever locked.
    pub fn is_locked(&self, module: &str) -> bool {
        resolver::is_required_dependency(self.scope.dependency_graph(), &self.mapping, module)
    }

    /// Current permission set for a module, the default set if absent
    pub fn permissions_of(&self, module: &str) -> PermissionSet {
        self.mapping.get(module)
    }

    /// Read view of the full mapping
    pub fn mapping(&self) -> &PermissionMapping {
        &self.mapping
    }

    /// The submit shape handed back to the permission store
    pub fn into_records(self) -> Vec<PermissionRecord> {
        records_from_mapping(&self.mapping)
    }
}
