//! Walk through one permission editing session
//!
//! Run with: cargo run --example resolve_role

use hrp_core::{Capability, ModuleCode, PermissionEditor, PermissionScope};

fn main() {
    // Open the organization "Manage Permissions" surface for a fresh role
    let mut editor = PermissionEditor::empty(PermissionScope::Organization);

    // The admin checks "write" on attendance
    editor.set_capability(&ModuleCode::from("attendance"), Capability::Write, true);

    // Attendance depends on master_data and employees: both reads are now
    // forced on and their checkboxes render locked
    for module in ["master_data", "employees", "attendance"] {
        let set = editor.permissions_of(module);
        println!(
            "{:<12} read={:<5} write={:<5} locked={}",
            module,
            set.can_read,
            set.can_write,
            editor.is_locked(module)
        );
    }

    // Submit: the flat record list handed back to the permission store
    let records = editor.into_records();
    println!("\nsubmitting {} module records", records.len());
}
