use std::rc::Rc;

use render_hooks_value::Value;

/// Performs a deep structural equality check between two values.
///
/// Total and side-effect free. The rules apply in order, first match wins:
///
/// 1. Shared-pointer identity for lists, records, and patterns short-circuits
///    to true.
/// 2. If either side is an absence marker, the pair is equal iff both sides
///    are absence markers (`Null` and `Undefined` are mutually equal).
/// 3. Mismatched variants are never equal.
/// 4. Primitives compare by value. Floats keep host semantics: NaN is never
///    equal to NaN, +0.0 equals -0.0.
/// 5. Lists compare by length, then element-wise in index order.
/// 6. Dates compare by epoch-millisecond offset.
/// 7. Patterns compare by canonical source text.
/// 8. Records compare by key count, then every key of the left side must be
///    present on the right with a recursively equal value. The count check
///    is what rules out extra keys on the right.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    // Identity shortcut: same shared allocation is equal without descent.
    match (a, b) {
        (Value::List(x), Value::List(y)) if Rc::ptr_eq(x, y) => return true,
        (Value::Record(x), Value::Record(y)) if Rc::ptr_eq(x, y) => return true,
        (Value::Pattern(x), Value::Pattern(y)) if Rc::ptr_eq(x, y) => return true,
        _ => {}
    }

    match (a, b) {
        (Value::Null | Value::Undefined, Value::Null | Value::Undefined) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::Date(x), Value::Date(y)) => x.timestamp_millis() == y.timestamp_millis(),
        (Value::Pattern(x), Value::Pattern(y)) => x.source() == y.source(),

        (Value::List(x), Value::List(y)) => {
            if x.len() != y.len() {
                return false;
            }
            for (item_a, item_b) in x.iter().zip(y.iter()) {
                if !deep_equal(item_a, item_b) {
                    return false;
                }
            }
            true
        }

        (Value::Record(x), Value::Record(y)) => {
            if x.len() != y.len() {
                return false;
            }
            for (key, val_a) in x.iter() {
                match y.get(key) {
                    Some(val_b) => {
                        if !deep_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        // Different variants are never equal
        _ => false,
    }
}
