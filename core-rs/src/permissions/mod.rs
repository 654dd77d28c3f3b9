//! Permission model and dependency resolution
//!
//! Provides the role permission data model (module codes, capability sets,
//! per-role mappings), the static module dependency graph, and the resolver
//! that derives implied read permissions for the "Manage Permissions"
//! surfaces.

pub mod graph;
pub mod resolver;
pub mod types;

pub use graph::{DependencyGraph, DependencyRule};
pub use resolver::{
    apply_dependencies, is_required_dependency, set_module_permissions, update_permission,
};
pub use types::{Capability, ModuleCode, PermissionMapping, PermissionSet};
