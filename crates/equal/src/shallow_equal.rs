use std::rc::Rc;

use render_hooks_value::Value;

/// Performs the host framework's per-render comparison.
///
/// Primitives and dates compare by value; patterns, lists, and records
/// compare by shared-pointer identity only, so a structurally identical but
/// separately allocated composite counts as changed. Absence markers follow
/// the same rule as [`crate::deep_equal`]: `Null` and `Undefined` are
/// mutually equal.
pub fn shallow_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null | Value::Undefined, Value::Null | Value::Undefined) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::Date(x), Value::Date(y)) => x.timestamp_millis() == y.timestamp_millis(),
        (Value::Pattern(x), Value::Pattern(y)) => Rc::ptr_eq(x, y),
        (Value::List(x), Value::List(y)) => Rc::ptr_eq(x, y),
        (Value::Record(x), Value::Record(y)) => Rc::ptr_eq(x, y),
        _ => false,
    }
}
