//! Permission scopes
//!
//! Permission management is exposed in two places in the platform: the
//! organization admin console (tenant-scoped modules) and the platform
//! console (platform-wide modules). Each scope carries its own immutable
//! dependency graph and module catalog; the resolver is injected with the
//! active graph and is otherwise identical for both.
//!
//! Both graphs and catalogs are process-wide configuration with no lifecycle
//! beyond process start. Custom YAML-loaded graphs/catalogs can be used in
//! their place (see `DependencyGraph::load` / `ModuleCatalog::load`).

use crate::catalog::{ModuleCatalog, ModuleDescriptor};
use crate::errors::{HrpError, Result};
use crate::permissions::graph::{DependencyGraph, DependencyRule};
use crate::permissions::types::ModuleCode;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

fn rule(module: &str, requires: &[&str]) -> DependencyRule {
    DependencyRule::new(module, requires.iter().map(|d| ModuleCode::from(*d)).collect())
}

/// Organization-scope module dependencies
static ORGANIZATION_GRAPH: Lazy<DependencyGraph> = Lazy::new(|| {
    DependencyGraph::new(vec![
        rule("employees", &["master_data"]),
        rule("attendance", &["master_data", "employees"]),
        rule("leave", &["master_data", "employees"]),
        rule("recruitment", &["master_data"]),
        rule("reports", &["master_data"]),
    ])
    .expect("organization dependency graph is well-formed")
});

/// Platform-scope module dependencies
static PLATFORM_GRAPH: Lazy<DependencyGraph> = Lazy::new(|| {
    DependencyGraph::new(vec![
        rule("accounts", &["master_data", "platform_roles"]),
        rule("organizations", &["master_data", "subscription_plans"]),
        rule("platform_modules", &["master_data"]),
    ])
    .expect("platform dependency graph is well-formed")
});

/// Organization-scope module catalog
static ORGANIZATION_CATALOG: Lazy<ModuleCatalog> = Lazy::new(|| {
    ModuleCatalog::new(vec![
        ModuleDescriptor::new("master_data", "Master Data")
            .with_description("Departments, designations and shared lookup tables"),
        ModuleDescriptor::new("employees", "Employees")
            .with_description("Employee records and profiles"),
        ModuleDescriptor::new("attendance", "Attendance")
            .with_description("Daily attendance and timesheets"),
        ModuleDescriptor::new("leave", "Leave")
            .with_description("Leave requests and balances"),
        ModuleDescriptor::new("recruitment", "Recruitment")
            .with_description("Job postings, applicants and interviews"),
        ModuleDescriptor::new("reports", "Reports")
            .with_description("Organization reporting"),
        ModuleDescriptor::new("organization_settings", "Organization Settings")
            .with_description("Organization profile and preferences"),
    ])
    .expect("organization module catalog is well-formed")
});

/// Platform-scope module catalog
static PLATFORM_CATALOG: Lazy<ModuleCatalog> = Lazy::new(|| {
    ModuleCatalog::new(vec![
        ModuleDescriptor::new("master_data", "Master Data")
            .with_description("Platform-wide lookup tables"),
        ModuleDescriptor::new("platform_roles", "Platform Roles")
            .with_description("Platform role definitions"),
        ModuleDescriptor::new("accounts", "Accounts")
            .with_description("Platform user accounts"),
        ModuleDescriptor::new("organizations", "Organizations")
            .with_description("Tenant organizations"),
        ModuleDescriptor::new("subscription_plans", "Subscription Plans")
            .with_description("Plans and module entitlements"),
        ModuleDescriptor::new("platform_modules", "Platform Modules")
            .with_description("Functional module registry"),
    ])
    .expect("platform module catalog is well-formed")
});

/// Which "Manage Permissions" surface a mapping belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionScope {
    Organization,
    Platform,
}

impl PermissionScope {
    /// The scope's immutable dependency graph
    pub fn dependency_graph(&self) -> &'static DependencyGraph {
        match self {
            PermissionScope::Organization => &ORGANIZATION_GRAPH,
            PermissionScope::Platform => &PLATFORM_GRAPH,
        }
    }

    /// The scope's module catalog
    pub fn module_catalog(&self) -> &'static ModuleCatalog {
        match self {
            PermissionScope::Organization => &ORGANIZATION_CATALOG,
            PermissionScope::Platform => &PLATFORM_CATALOG,
        }
    }
}

impl std::fmt::Display for PermissionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionScope::Organization => write!(f, "organization"),
            PermissionScope::Platform => write!(f, "platform"),
        }
    }
}

impl FromStr for PermissionScope {
    type Err = HrpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "organization" | "org" => Ok(PermissionScope::Organization),
            "platform" => Ok(PermissionScope::Platform),
            other => Err(HrpError::UnknownScope(other.to_string())),
        }
    }
}
