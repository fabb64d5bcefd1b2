//! Closure properties: the chained-extraction scenario, idempotence,
//! termination under reference cycles, include_self semantics, and inert
//! unresolved or external references.

use harvest_binder::{Bindings, DeclKind, Target, bind};
use harvest_reach::{expressions_in, gather_all_expressions};
use harvest_tree::{NodeArena, NodeIndex};
use rustc_hash::FxHashSet;

fn gather(arena: &NodeArena, bindings: &Bindings, start: NodeIndex) -> FxHashSet<NodeIndex> {
    gather_all_expressions(arena, bindings, start, &FxHashSet::default(), false)
}

fn set(nodes: &[NodeIndex]) -> FxHashSet<NodeIndex> {
    nodes.iter().copied().collect()
}

/// f calls g, g calls h, h is a leaf. Field names mirror that shape.
struct Chained {
    arena: NodeArena,
    bindings: Bindings,
    f_body: NodeIndex,
    call_g: NodeIndex,
    ref_g: NodeIndex,
    g: NodeIndex,
    g_body: NodeIndex,
    call_h: NodeIndex,
    ref_h: NodeIndex,
    h: NodeIndex,
    h_body: NodeIndex,
    lit: NodeIndex,
}

fn chained_calls() -> Chained {
    let mut arena = NodeArena::new();
    let f_name = arena.intern("f");
    let g_name = arena.intern("g");
    let h_name = arena.intern("h");

    let lit = arena.add_literal();
    let h_body = arena.add_block(&[lit]);
    let h = arena.add_function(h_name, &[h_body]);

    let ref_h = arena.add_name_ref(h_name);
    let call_h = arena.add_call(ref_h, &[]);
    let g_body = arena.add_block(&[call_h]);
    let g = arena.add_function(g_name, &[g_body]);

    let ref_g = arena.add_name_ref(g_name);
    let call_g = arena.add_call(ref_g, &[]);
    let f_body = arena.add_block(&[call_g]);
    let f = arena.add_function(f_name, &[f_body]);

    let root = arena.add_source_unit(&[f, g, h]);
    let bindings = bind(&arena, root);

    Chained {
        arena,
        bindings,
        f_body,
        call_g,
        ref_g,
        g,
        g_body,
        call_h,
        ref_h,
        h,
        h_body,
        lit,
    }
}

#[test]
fn chained_calls_gather_every_dependency_exactly_once() {
    let fx = chained_calls();
    let result = gather(&fx.arena, &fx.bindings, fx.f_body);

    let expected = set(&[
        fx.call_g, fx.ref_g, fx.g, fx.g_body, fx.call_h, fx.ref_h, fx.h, fx.h_body, fx.lit,
    ]);
    assert_eq!(result, expected);
    // Neither the start node nor anything above it leaks in.
    assert!(!result.contains(&fx.f_body));
}

#[test]
fn result_is_a_superset_of_local_expressions() {
    let fx = chained_calls();
    let result = gather(&fx.arena, &fx.bindings, fx.f_body);
    for local in expressions_in(&fx.arena, fx.f_body) {
        assert!(result.contains(&local), "{local:?} missing from closure");
    }
}

#[test]
fn gather_is_idempotent() {
    let fx = chained_calls();
    let first = gather(&fx.arena, &fx.bindings, fx.f_body);
    let second = gather(&fx.arena, &fx.bindings, fx.f_body);
    assert_eq!(first, second);
}

#[test]
fn include_self_controls_start_membership() {
    let fx = chained_calls();

    let without = gather_all_expressions(
        &fx.arena,
        &fx.bindings,
        fx.f_body,
        &FxHashSet::default(),
        false,
    );
    assert!(!without.contains(&fx.f_body));

    let with = gather_all_expressions(
        &fx.arena,
        &fx.bindings,
        fx.f_body,
        &FxHashSet::default(),
        true,
    );
    assert!(with.contains(&fx.f_body));
    // Everything else is unchanged.
    let mut with_minus_start = with.clone();
    with_minus_start.remove(&fx.f_body);
    assert_eq!(with_minus_start, without);
}

#[test]
fn already_got_suppresses_expansion_but_not_membership() {
    let fx = chained_calls();
    let already_got = set(&[fx.g]);
    let result = gather_all_expressions(&fx.arena, &fx.bindings, fx.f_body, &already_got, false);

    // g is still discovered by f's reference, but never expanded, so
    // nothing from g's body shows up.
    assert_eq!(result, set(&[fx.call_g, fx.ref_g, fx.g]));
}

#[test]
fn mutual_recursion_terminates_and_covers_both_functions() {
    let mut arena = NodeArena::new();
    let a_name = arena.intern("a");
    let b_name = arena.intern("b");

    let ref_b = arena.add_name_ref(b_name);
    let call_b = arena.add_call(ref_b, &[]);
    let a_body = arena.add_block(&[call_b]);
    let a = arena.add_function(a_name, &[a_body]);

    let ref_a = arena.add_name_ref(a_name);
    let call_a = arena.add_call(ref_a, &[]);
    let b_body = arena.add_block(&[call_a]);
    let b = arena.add_function(b_name, &[b_body]);

    let root = arena.add_source_unit(&[a, b]);
    let bindings = bind(&arena, root);

    let from_a = gather(&arena, &bindings, a);
    assert!(from_a.contains(&b));
    assert!(from_a.contains(&a));
    assert_eq!(
        from_a,
        set(&[a, a_body, call_b, ref_b, b, b_body, call_a, ref_a])
    );

    let from_b = gather(&arena, &bindings, b);
    assert!(from_b.contains(&a));
    assert!(from_b.contains(&b));
}

#[test]
fn unresolved_reference_is_inert() {
    let mut arena = NodeArena::new();
    let name = arena.intern("imported");
    let reference = arena.add_name_ref(name);
    let block = arena.add_block(&[reference]);
    let root = arena.add_source_unit(&[block]);
    let bindings = bind(&arena, root);

    let result = gather(&arena, &bindings, block);
    assert_eq!(result, set(&[reference]));
}

#[test]
fn external_target_is_inert() {
    let mut arena = NodeArena::new();
    let name = arena.intern("println");
    let reference = arena.add_name_ref(name);
    let block = arena.add_block(&[reference]);
    arena.add_source_unit(&[block]);

    let mut bindings = Bindings::new();
    bindings.insert_target(reference, Target::external(DeclKind::Function));

    let result = gather(&arena, &bindings, block);
    // Same as sub-expression enumeration alone.
    assert_eq!(result, set(&expressions_in(&arena, block)));
}

#[test]
fn function_start_contributes_its_representative() {
    let fx = chained_calls();
    // Expanding a function declaration adds its representative view,
    // which for a plain top-level function is the declaration itself.
    let result = gather(&fx.arena, &fx.bindings, fx.g);
    assert!(result.contains(&fx.g));
    assert!(result.contains(&fx.h));
    assert!(result.contains(&fx.lit));
}

#[test]
fn selector_function_contributes_the_qualified_parent() {
    let mut arena = NodeArena::new();
    let owner = arena.intern("owner");
    let m_name = arena.intern("m");
    let receiver = arena.add_name_ref(owner);
    let method = arena.add_function(m_name, &[]);
    let access = arena.add_field_access(receiver, method);
    let root = arena.add_source_unit(&[access]);
    let bindings = bind(&arena, root);

    let result = gather(&arena, &bindings, method);
    assert!(result.contains(&access));
    // The access's own sub-expressions follow once it is expanded.
    assert!(result.contains(&receiver));
}
