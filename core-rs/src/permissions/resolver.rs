//! Permission dependency resolution
//!
//! Maintains the invariant that whenever a module has any enabled capability,
//! every module it requires (per the dependency graph) has at least read
//! access - and exposes that invariant both as a mutating operation over the
//! mapping and as a read-only query used to render locked / auto-selected
//! checkboxes.
//!
//! All operations are pure in-memory computation: no I/O, no external
//! services, total over any mapping and any graph. Module codes unknown to
//! the mapping are treated as fresh all-false entries, never rejected.
//!
//! The active graph is injected at call time, so the same resolution logic
//! serves both the organization-permission and the platform-permission
//! surfaces.

use crate::permissions::graph::DependencyGraph;
use crate::permissions::types::{Capability, ModuleCode, PermissionMapping, PermissionSet};

/// Resolve first-order implied read permissions
///
/// For every rule in the graph: if the rule's module has any enabled
/// capability, force `can_read = true` on every module it requires
/// (inserting a default entry when the required module is absent). All other
/// flags of the required modules stay untouched.
///
/// Single-pass semantics: the graph is walked exactly once per call and
/// every `has_any` check reads the mapping's state as of call entry - reads
/// granted by this pass do not feed back into the same pass. Enabling module
/// A therefore does NOT cascade a forced read onto A's transitive
/// requirements unless the intermediate module already had a capability
/// enabled before the call. A later call observes the stored implied reads
/// and converges further.
///
/// Monotone: never clears a flag; in particular an implied read granted in an
/// earlier call survives even after the inducing module's capabilities are
/// all cleared. Idempotent: re-applying after convergence changes nothing.
pub fn apply_dependencies(graph: &DependencyGraph, mapping: &mut PermissionMapping) {
    // Decide which rules fire against the entry state; writes accumulate in
    // the live mapping without widening this pass.
    let entry_state = mapping.clone();
    for rule in graph.rules() {
        if !entry_state.get(rule.module.as_str()).has_any() {
            continue;
        }
        for required in &rule.requires {
            mapping.entry_mut(required).can_read = true;
        }
    }
}

/// Set one capability flag on one module, then re-resolve implications
///
/// The unit of mutation driven by a single checkbox click. A module absent
/// from the mapping gets a default entry first, so the call is total over
/// unknown module codes.
///
/// # Arguments
/// * `graph` - Active scope's dependency graph
/// * `mapping` - Role permission state, mutated in place
/// * `module` - Module whose checkbox was toggled
/// * `capability` - Which of the six flags to set
/// * `value` - New flag value
pub fn update_permission(
    graph: &DependencyGraph,
    mapping: &mut PermissionMapping,
    module: &ModuleCode,
    capability: Capability,
    value: bool,
) {
    mapping.entry_mut(module).set(capability, value);
    apply_dependencies(graph, mapping);
}

/// Replace one module's entire permission set, then re-resolve implications
///
/// Used by the "Grant All" / "Revoke All" bulk actions with
/// [`PermissionSet::ALL`] and [`PermissionSet::NONE`].
pub fn set_module_permissions(
    graph: &DependencyGraph,
    mapping: &mut PermissionMapping,
    module: &ModuleCode,
    set: PermissionSet,
) {
    mapping.insert(module.clone(), set);
    apply_dependencies(graph, mapping);
}

/// True if the module's read permission is currently implied by a dependent
///
/// Read-only predicate for rendering: a module is "required" when some rule
/// lists it as a requirement AND that rule's module currently has any
/// capability enabled. The OR over dependents short-circuits on the first
/// match; order among dependents is irrelevant.
///
/// The lock this predicate governs only ever applies to the read capability -
/// write/update/delete/approve/export stay directly togglable.
pub fn is_required_dependency(
    graph: &DependencyGraph,
    mapping: &PermissionMapping,
    module: &str,
) -> bool {
    graph.rules().iter().any(|rule| {
        rule.requires.iter().any(|required| required.as_str() == module)
            && mapping.get(rule.module.as_str()).has_any()
    })
}
