//! End-to-end update-cycle scenarios: a simulated host driving the cells
//! through render and commit phases the way a component instance would.

use std::rc::Rc;

use render_hooks::{changed_props, DeepMemo, Previous, Props, TraceUpdates, Value};
use serde_json::json;

fn props(json: serde_json::Value) -> Props {
    match Value::from(json) {
        Value::Record(record) => (*record).clone(),
        _ => Props::new(),
    }
}

// ---------------------------------------------------------------------------
// Previous-value tracker across cycles
// ---------------------------------------------------------------------------

#[test]
fn previous_tracker_lags_one_cycle() {
    let mut cell = Previous::new();

    // Cycle 1: render, then commit.
    assert!(cell.observe(Value::from(10)).is_none());
    cell.commit();

    // Cycle 2 sees cycle 1's value.
    let seen = cell.observe(Value::from(20)).cloned();
    assert_eq!(seen.and_then(|v| v.as_number()), Some(10.0));
    cell.commit();

    // Cycle 3 sees cycle 2's value, not its own.
    let seen = cell.observe(Value::from(30)).cloned();
    assert_eq!(seen.and_then(|v| v.as_number()), Some(20.0));
}

// ---------------------------------------------------------------------------
// Deep memoization across cycles
// ---------------------------------------------------------------------------

#[test]
fn memo_keeps_allocation_across_equal_cycles() {
    let mut cell = DeepMemo::new();

    // Two cycles with structurally equal but separately allocated props.
    let first = cell.memo(Value::from(json!({"x": 1})));
    let second = cell.memo(Value::from(json!({"x": 1})));
    assert!(Rc::ptr_eq(&first, &second));

    // A real change adopts the new allocation.
    let third = cell.memo(Value::from(json!({"x": 2})));
    assert!(!Rc::ptr_eq(&second, &third));

    // And equal candidates stick to it again.
    let fourth = cell.memo(Value::from(json!({"x": 2})));
    assert!(Rc::ptr_eq(&third, &fourth));
}

#[test]
fn memo_with_nested_structures() {
    let mut cell = DeepMemo::new();
    let first = cell.memo(Value::from(json!({"a": [1, {"b": 2}]})));
    let second = cell.memo(Value::from(json!({"a": [1, {"b": 2}]})));
    assert!(Rc::ptr_eq(&first, &second));

    let third = cell.memo(Value::from(json!({"a": [1, {"b": 3}]})));
    assert!(!Rc::ptr_eq(&second, &third));
}

// ---------------------------------------------------------------------------
// Change tracing across cycles
// ---------------------------------------------------------------------------

#[test]
fn trace_scenario_from_two_cycles() {
    let mut trace = TraceUpdates::new("Widget");
    trace.commit(&props(json!({"a": 1, "b": 2})));
    trace.commit(&props(json!({"a": 1, "b": 3})));

    // The logger's stored cycle advanced; the change set it reported is
    // reproducible from the same inputs.
    let changes = changed_props(
        &props(json!({"a": 1, "b": 2})),
        &props(json!({"a": 1, "b": 3})),
    );
    assert_eq!(changes.len(), 1);
    let change = changes.get("b").unwrap();
    assert_eq!(change.previous.as_number(), Some(2.0));
    assert_eq!(change.current.as_number(), Some(3.0));
}

// ---------------------------------------------------------------------------
// Cells composed, as a component would hold them
// ---------------------------------------------------------------------------

#[test]
fn composed_cells_over_three_cycles() {
    struct Instance {
        previous: Previous<Value>,
        memo: DeepMemo,
        trace: TraceUpdates,
    }

    let mut instance = Instance {
        previous: Previous::new(),
        memo: DeepMemo::new(),
        trace: TraceUpdates::new("Composed"),
    };

    let cycles = [
        json!({"x": 1}),
        json!({"x": 1}),
        json!({"x": 2}),
    ];

    let mut memoized = Vec::new();
    for raw in cycles {
        let value = Value::from(raw.clone());

        // Render phase.
        instance.previous.observe(value.clone());
        memoized.push(instance.memo.memo(value));

        // Commit phase.
        instance.previous.commit();
        instance.trace.commit(&props(raw));
    }

    // Cycles 1 and 2 were structurally equal: one shared allocation.
    assert!(Rc::ptr_eq(&memoized[0], &memoized[1]));
    assert!(!Rc::ptr_eq(&memoized[1], &memoized[2]));

    // The tracker holds the last committed cycle's value.
    let last = instance.previous.get().and_then(|v| v.as_record().cloned());
    assert_eq!(
        last.and_then(|r| r.get("x").and_then(Value::as_number)),
        Some(2.0)
    );

    // The trace logger advanced to the last cycle.
    let prev = instance.trace.previous().unwrap();
    assert_eq!(prev.get("x").and_then(Value::as_number), Some(2.0));
}
