//! File-backed permission store
//!
//! The reference collaborator behind the [`PermissionStore`] seam: one
//! pretty-printed JSON document per role under a root directory. The editing
//! surface loads a role's flat record list from here, and submits the
//! updated list back; nothing is persisted while a dialog is open.

use crate::errors::{HrpError, Result};
use crate::scope::PermissionScope;
use crate::store::records::PermissionRecord;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Persisted permission grants for one role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleGrants {
    pub role_id: Uuid,
    pub role_name: String,
    pub scope: PermissionScope,
    /// RFC3339 timestamp of the last save
    pub updated_at: String,
    pub permissions: Vec<PermissionRecord>,
}

impl RoleGrants {
    /// Create grants for a new role with a fresh id
    pub fn new(
        role_name: impl Into<String>,
        scope: PermissionScope,
        permissions: Vec<PermissionRecord>,
    ) -> Self {
        Self {
            role_id: Uuid::new_v4(),
            role_name: role_name.into(),
            scope,
            updated_at: chrono::Utc::now().to_rfc3339(),
            permissions,
        }
    }
}

/// Store seam between the permission surfaces and persistence
pub trait PermissionStore {
    /// Load one role's grants
    ///
    /// # Errors
    /// Returns `HrpError::RoleNotFound` if the role has never been saved
    fn load_role(&self, role_id: &Uuid) -> Result<RoleGrants>;

    /// Persist one role's grants, stamping `updated_at`
    fn save_role(&self, grants: &RoleGrants) -> Result<RoleGrants>;

    /// All persisted roles, sorted by role name
    fn list_roles(&self) -> Result<Vec<RoleGrants>>;
}

/// One JSON document per role under a root directory
#[derive(Debug, Clone)]
pub struct FilePermissionStore {
    root: PathBuf,
}

impl FilePermissionStore {
    /// Create a store rooted at the given directory
    ///
    /// The directory is created on first save, not here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn role_path(&self, role_id: &Uuid) -> PathBuf {
        self.root.join(format!("{}.json", role_id))
    }
}

impl PermissionStore for FilePermissionStore {
    fn load_role(&self, role_id: &Uuid) -> Result<RoleGrants> {
        let path = self.role_path(role_id);
        if !path.exists() {
            return Err(HrpError::RoleNotFound(role_id.to_string()));
        }

        let content = fs::read_to_string(&path)?;
        let grants: RoleGrants = serde_json::from_str(&content)?;
        Ok(grants)
    }

    fn save_role(&self, grants: &RoleGrants) -> Result<RoleGrants> {
        fs::create_dir_all(&self.root).map_err(|e| {
            HrpError::Store(format!("Failed to create store directory: {}", e))
        })?;

        let mut stamped = grants.clone();
        stamped.updated_at = chrono::Utc::now().to_rfc3339();

        let json = serde_json::to_string_pretty(&stamped)?;
        fs::write(self.role_path(&stamped.role_id), json)?;

        tracing::debug!(role = %stamped.role_name, id = %stamped.role_id, "saved role grants");
        Ok(stamped)
    }

    fn list_roles(&self) -> Result<Vec<RoleGrants>> {
        let mut roles = Vec::new();

        if !self.root.exists() {
            return Ok(roles);
        }

        let entries = fs::read_dir(&self.root).map_err(|e| {
            HrpError::Store(format!("Failed to read store directory: {}", e))
        })?;

        for entry in entries {
            let entry = entry
                .map_err(|e| HrpError::Store(format!("Failed to read directory entry: {}", e)))?;

            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                match fs::read_to_string(&path) {
                    Ok(content) => match serde_json::from_str::<RoleGrants>(&content) {
                        Ok(grants) => roles.push(grants),
                        Err(e) => {
                            eprintln!("[FilePermissionStore] Failed to parse role {:?}: {}", path.file_name(), e);
                        }
                    },
                    Err(e) => {
                        eprintln!("[FilePermissionStore] Failed to read role {:?}: {}", path.file_name(), e);
                    }
                }
            }
        }

        // Sort by role name for consistent listing
        roles.sort_by(|a, b| a.role_name.cmp(&b.role_name));
        Ok(roles)
    }
}
