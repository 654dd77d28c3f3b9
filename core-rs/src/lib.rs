//! # HRP Core - HR Platform Permission Engine
//!
//! Permission core for the HR administration platform: computes derived,
//! implied module permissions for role management. A module granted any
//! capability automatically implies read access on the modules it depends
//! on; the same resolution logic serves the organization-level and the
//! platform-level "Manage Permissions" surfaces.
//!
//! ## Core Principle
//!
//! **The graph is configuration, the resolver is pure**: dependency graphs
//! are immutable, injected configuration values; every resolver operation is
//! total, synchronous, in-memory computation with no I/O.
//!
//! ## Key Features
//!
//! - Six independent capability flags per module (read/write/update/delete/approve/export)
//! - Single-pass implied-read resolution over an ordered dependency graph
//! - Locked-checkbox predicate for rendering auto-selected read permissions
//! - Editing sessions that own one role's mapping from open to submit
//! - Flat record store boundary with a file-backed reference collaborator
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │    Permission store (flat lists)    │
//! └─────────────────────────────────────┘
//!           ▲                 ▲
//!           │ load            │ submit
//!     ┌─────┴─────────────────┴──────┐
//!     │  PermissionEditor (session)  │
//!     │  mapping + locked queries    │
//!     └─────┬─────────────────┬──────┘
//!           │                 │
//!     ┌─────┴────────┐   ┌────┴────────┐
//!     │ Organization │   │  Platform   │
//!     │ graph+catalog│   │graph+catalog│
//!     └──────────────┘   └─────────────┘
//! ```

pub mod catalog;
pub mod editor;
pub mod errors;
pub mod permissions;
pub mod scope;
pub mod store;

pub use catalog::{ModuleCatalog, ModuleDescriptor};
pub use editor::PermissionEditor;
pub use errors::HrpError;
pub use permissions::{
    apply_dependencies, is_required_dependency, set_module_permissions, update_permission,
    Capability, DependencyGraph, DependencyRule, ModuleCode, PermissionMapping, PermissionSet,
};
pub use scope::PermissionScope;
pub use store::{
    mapping_from_records, records_from_mapping, seed_catalog_defaults, FilePermissionStore,
    PermissionRecord, PermissionStore, RoleGrants,
};

/// Version of the permission core
pub const VERSION: &str = "0.4.2";
