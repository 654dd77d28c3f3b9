// Resolver Contract Tests
//
// These pin the observable semantics the permission surfaces depend on:
// single-pass resolution with entry-state reads, monotone implied reads with
// no revocation cascade, and the locked-checkbox predicate. Breaking any of
// these changes what admins see in the "Manage Permissions" dialogs.

use hrp_core::{
    apply_dependencies, is_required_dependency, set_module_permissions, update_permission,
    Capability, DependencyGraph, DependencyRule, ModuleCode, PermissionMapping, PermissionSet,
};

fn graph(rules: &[(&str, &[&str])]) -> DependencyGraph {
    DependencyGraph::new(
        rules
            .iter()
            .map(|(module, requires)| {
                DependencyRule::new(
                    *module,
                    requires.iter().map(|d| ModuleCode::from(*d)).collect(),
                )
            })
            .collect(),
    )
    .expect("test graph is well-formed")
}

fn code(s: &str) -> ModuleCode {
    ModuleCode::from(s)
}

// -------------------------------------------------------------------------
// Idempotence: re-applying after convergence changes nothing
// -------------------------------------------------------------------------
#[test]
fn contract_apply_dependencies_is_idempotent() {
    let graph = graph(&[
        ("employees", &["master_data"]),
        ("attendance", &["master_data", "employees"]),
    ]);

    let mut mapping = PermissionMapping::new();
    update_permission(
        &graph,
        &mut mapping,
        &code("attendance"),
        Capability::Delete,
        true,
    );

    let once = mapping.clone();
    apply_dependencies(&graph, &mut mapping);
    assert_eq!(mapping, once);

    apply_dependencies(&graph, &mut mapping);
    assert_eq!(mapping, once);
}

// -------------------------------------------------------------------------
// Monotonicity: resolution never clears a previously-true flag
// -------------------------------------------------------------------------
#[test]
fn contract_apply_dependencies_never_clears_flags() {
    let graph = graph(&[("employees", &["master_data"])]);

    let mut mapping = PermissionMapping::new();
    mapping.insert(code("employees"), PermissionSet::ALL);
    mapping.insert(code("reports"), {
        let mut set = PermissionSet::NONE;
        set.can_export = true;
        set
    });

    let before = mapping.clone();
    apply_dependencies(&graph, &mut mapping);

    for (module, set_before) in before.iter() {
        let set_after = mapping.get(module.as_str());
        for cap in Capability::ALL {
            if set_before.get(cap) {
                assert!(
                    set_after.get(cap),
                    "{} lost {} during resolution",
                    module,
                    cap
                );
            }
        }
    }
}

// -------------------------------------------------------------------------
// Single-pass locality: only first-order requirements gain read
// -------------------------------------------------------------------------
#[test]
fn contract_single_pass_locality() {
    let graph = graph(&[("attendance", &["master_data", "employees"])]);

    let mut mapping = PermissionMapping::new();
    update_permission(
        &graph,
        &mut mapping,
        &code("attendance"),
        Capability::Write,
        true,
    );

    assert!(mapping.get("master_data").can_read);
    assert!(mapping.get("employees").can_read);

    // Nothing but can_read changes on the required modules
    for module in ["master_data", "employees"] {
        let set = mapping.get(module);
        assert!(!set.can_write, "{} gained write", module);
        assert!(!set.can_update, "{} gained update", module);
        assert!(!set.can_delete, "{} gained delete", module);
        assert!(!set.can_approve, "{} gained approve", module);
        assert!(!set.can_export, "{} gained export", module);
    }
}

// -------------------------------------------------------------------------
// No second-order cascade: the sweep checks each module's pre-existing
// state, so reads granted by the pass never widen the same pass
// -------------------------------------------------------------------------
#[test]
fn contract_no_second_order_cascade() {
    let graph = graph(&[("a", &["b"]), ("b", &["c"])]);

    let mut mapping = PermissionMapping::new();
    update_permission(&graph, &mut mapping, &code("a"), Capability::Write, true);

    assert!(mapping.get("b").can_read, "first-order implication missing");
    assert!(
        !mapping.get("c").can_read,
        "second-order cascade must not happen in a single call"
    );
}

#[test]
fn contract_no_second_order_cascade_either_declaration_order() {
    // Same rules, reversed declaration - the one-call result is identical
    let graph = graph(&[("b", &["c"]), ("a", &["b"])]);

    let mut mapping = PermissionMapping::new();
    update_permission(&graph, &mut mapping, &code("a"), Capability::Write, true);

    assert!(mapping.get("b").can_read);
    assert!(!mapping.get("c").can_read);
}

// -------------------------------------------------------------------------
// The stored implied read IS visible to later calls: the next edit
// re-resolves and closes the chain
// -------------------------------------------------------------------------
#[test]
fn contract_next_call_observes_stored_implied_reads() {
    let graph = graph(&[("a", &["b"]), ("b", &["c"])]);

    let mut mapping = PermissionMapping::new();
    update_permission(&graph, &mut mapping, &code("a"), Capability::Write, true);
    assert!(!mapping.get("c").can_read);

    // Any subsequent edit triggers another resolution pass
    apply_dependencies(&graph, &mut mapping);
    assert!(mapping.get("c").can_read);
}

// -------------------------------------------------------------------------
// Second-order implication does happen when the middle module already had
// its own grant before the pass
// -------------------------------------------------------------------------
#[test]
fn contract_cascade_through_independently_granted_module() {
    let graph = graph(&[("b", &["c"]), ("a", &["b"])]);

    let mut mapping = PermissionMapping::new();
    update_permission(&graph, &mut mapping, &code("b"), Capability::Update, true);
    update_permission(&graph, &mut mapping, &code("a"), Capability::Write, true);

    assert!(mapping.get("c").can_read);
}

// -------------------------------------------------------------------------
// Locked predicate: true while any dependent has any grant, false after
// -------------------------------------------------------------------------
#[test]
fn contract_is_required_dependency_tracks_dependent_grants() {
    let graph = graph(&[("employees", &["master_data"])]);

    let mut mapping = PermissionMapping::new();
    update_permission(
        &graph,
        &mut mapping,
        &code("employees"),
        Capability::Write,
        true,
    );
    assert!(is_required_dependency(&graph, &mapping, "master_data"));

    set_module_permissions(&graph, &mut mapping, &code("employees"), PermissionSet::NONE);
    assert!(!is_required_dependency(&graph, &mapping, "master_data"));
}

#[test]
fn contract_is_required_dependency_ors_across_dependents() {
    let graph = graph(&[
        ("employees", &["master_data"]),
        ("attendance", &["master_data"]),
        ("recruitment", &["master_data"]),
    ]);

    let mut mapping = PermissionMapping::new();
    update_permission(
        &graph,
        &mut mapping,
        &code("recruitment"),
        Capability::Export,
        true,
    );

    assert!(is_required_dependency(&graph, &mapping, "master_data"));
}

// -------------------------------------------------------------------------
// Bulk set-all then resolve
// -------------------------------------------------------------------------
#[test]
fn contract_grant_all_forces_requirement_reads_only() {
    let graph = graph(&[("employees", &["master_data"])]);

    let mut mapping = PermissionMapping::new();
    set_module_permissions(&graph, &mut mapping, &code("employees"), PermissionSet::ALL);

    assert_eq!(mapping.get("employees"), PermissionSet::ALL);

    let master = mapping.get("master_data");
    assert!(master.can_read);
    assert!(!master.can_write);
    assert!(!master.can_update);
    assert!(!master.can_delete);
    assert!(!master.can_approve);
    assert!(!master.can_export);
}

// -------------------------------------------------------------------------
// Default-entry creation: unknown module codes are never rejected
// -------------------------------------------------------------------------
#[test]
fn contract_update_creates_default_entry_for_absent_module() {
    let graph = graph(&[("employees", &["master_data"])]);

    let mut mapping = PermissionMapping::new();
    update_permission(
        &graph,
        &mut mapping,
        &code("never_seen_before"),
        Capability::Approve,
        true,
    );

    let set = mapping.get("never_seen_before");
    assert!(set.can_approve);
    for cap in [
        Capability::Read,
        Capability::Write,
        Capability::Update,
        Capability::Delete,
        Capability::Export,
    ] {
        assert!(!set.get(cap));
    }
}

// -------------------------------------------------------------------------
// End-to-end scenario: grant then clear on the platform accounts module.
// Implied reads persist after the inducing grant is cleared - the resolver
// only ever adds implied reads, revocation is a manual admin action.
// -------------------------------------------------------------------------
#[test]
fn contract_accounts_scenario_no_revocation_cascade() {
    let graph = graph(&[("accounts", &["master_data", "platform_roles"])]);
    let mut mapping = PermissionMapping::new();

    update_permission(&graph, &mut mapping, &code("accounts"), Capability::Read, true);

    assert!(mapping.get("accounts").can_read);
    assert!(mapping.get("master_data").can_read);
    assert!(mapping.get("platform_roles").can_read);
    for module in ["accounts", "master_data", "platform_roles"] {
        let set = mapping.get(module);
        assert!(!set.can_write);
        assert!(!set.can_update);
        assert!(!set.can_delete);
        assert!(!set.can_approve);
        assert!(!set.can_export);
    }

    update_permission(&graph, &mut mapping, &code("accounts"), Capability::Read, false);

    assert!(!mapping.get("accounts").can_read);
    // Implied reads survive; they are now unlocked for manual cleanup
    assert!(mapping.get("master_data").can_read);
    assert!(mapping.get("platform_roles").can_read);
    assert!(!is_required_dependency(&graph, &mapping, "master_data"));
    assert!(!is_required_dependency(&graph, &mapping, "platform_roles"));
}

// -------------------------------------------------------------------------
// Totality over cyclic graphs: a cycle still terminates in one pass
// -------------------------------------------------------------------------
#[test]
fn contract_cyclic_graph_terminates() {
    // Reads granted by the pass don't feed back into it, so the cycle needs
    // a second call to close - and each call still terminates.
    let graph = graph(&[("b", &["a"]), ("a", &["b"])]);

    let mut mapping = PermissionMapping::new();
    update_permission(&graph, &mut mapping, &code("a"), Capability::Write, true);

    assert!(mapping.get("b").can_read);
    assert!(!mapping.get("a").can_read);

    // The next pass sees b's read and closes the cycle
    apply_dependencies(&graph, &mut mapping);
    assert!(mapping.get("a").can_read);
}
