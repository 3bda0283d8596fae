//! Predicates and coercions referenced by the attribute schema tables.
//!
//! Every function is pure. Predicates answer whether a candidate is
//! acceptable as-is; coercions may rewrite it into a richer representation
//! and hand the original back on failure.

mod coerce;


use crate::{sdl::Keyword, value::Value};

// re-exports
pub use coerce::{to_vector, to_vector_array};

// ----------------------------------------------------------------------------
// scalar types
// ----------------------------------------------------------------------------

#[must_use]
pub const fn is_bool(v: &Value) -> bool {
    matches!(v, Value::Bool(_))
}

#[must_use]
pub const fn is_int(v: &Value) -> bool {
    matches!(v, Value::Int(_))
}

/// Finite numbers; integers count.
#[must_use]
pub fn is_float(v: &Value) -> bool {
    v.as_f64().is_some_and(f64::is_finite)
}

#[must_use]
pub const fn is_string(v: &Value) -> bool {
    matches!(v, Value::Str(_))
}

#[must_use]
pub fn is_non_empty_string(v: &Value) -> bool {
    matches!(v, Value::Str(s) if !s.is_empty())
}

/// Either kind of text: a quoted string or a raw scene fragment.
#[must_use]
pub const fn is_text(v: &Value) -> bool {
    matches!(v, Value::Str(_) | Value::Sdl(_))
}

/// A scene-language user function, e.g. `function { x*x + y*y - 1 }`.
#[must_use]
pub fn is_sdl_function(v: &Value) -> bool {
    v.as_str().is_some_and(|s| {
        let s = s.trim();
        s.starts_with("function") && s.contains('{') && s.ends_with('}')
    })
}

// ----------------------------------------------------------------------------
// ranges
// ----------------------------------------------------------------------------

/// `lo <= v <= hi`.
#[must_use]
pub fn is_within(v: &Value, lo: f64, hi: f64) -> bool {
    is_float(v) && v.as_f64().is_some_and(|f| (lo..=hi).contains(&f))
}

/// Integer in `lo..=hi`.
#[must_use]
pub fn is_int_within(v: &Value, lo: i64, hi: i64) -> bool {
    v.as_i64().is_some_and(|i| (lo..=hi).contains(&i))
}

#[must_use]
pub fn at_least(v: &Value, lo: f64) -> bool {
    is_float(v) && v.as_f64().is_some_and(|f| f >= lo)
}

#[must_use]
pub fn above(v: &Value, lo: f64) -> bool {
    is_float(v) && v.as_f64().is_some_and(|f| f > lo)
}

#[must_use]
pub fn below(v: &Value, hi: f64) -> bool {
    is_float(v) && v.as_f64().is_some_and(|f| f < hi)
}

// ----------------------------------------------------------------------------
// keys
// ----------------------------------------------------------------------------

/// String naming one of the table's keys.
#[must_use]
pub fn is_key(v: &Value, table: &[Keyword]) -> bool {
    matches!(v, Value::Str(s) if table.iter().any(|kw| kw.key == s))
}

/// String equal to one of `choices`.
#[must_use]
pub fn is_one_of(v: &Value, choices: &[&str]) -> bool {
    matches!(v, Value::Str(s) if choices.contains(&s.as_str()))
}

// ----------------------------------------------------------------------------
// arrays
// ----------------------------------------------------------------------------

fn is_array_of(v: &Value, min: usize, max: usize, pred: impl Fn(&Value) -> bool) -> bool {
    v.as_list()
        .is_some_and(|items| (min..=max).contains(&items.len()) && items.iter().all(pred))
}

/// List of `min..=max` finite numbers.
#[must_use]
pub fn is_array_of_floats(v: &Value, min: usize, max: usize) -> bool {
    is_array_of(v, min, max, is_float)
}

#[must_use]
pub fn is_array_of_ints(v: &Value, min: usize, max: usize) -> bool {
    is_array_of(v, min, max, is_int)
}

#[must_use]
pub fn is_array_of_strings(v: &Value, min: usize, max: usize) -> bool {
    is_array_of(v, min, max, is_string)
}

// ----------------------------------------------------------------------------
// classes
// ----------------------------------------------------------------------------

/// Object (or vector) whose class is exactly one of `classes`.
#[must_use]
pub fn is_class(v: &Value, classes: &[&str]) -> bool {
    match v {
        Value::Node(node) => classes.contains(&node.class_name()),
        Value::Vector(vector) => classes.contains(&vector.kind().class_name()),
        _ => false,
    }
}

/// Object whose class is `base` or derives from it.
#[must_use]
pub fn inherits_from(v: &Value, base: &str) -> bool {
    v.as_node().is_some_and(|node| node.is_a(base))
}

#[must_use]
pub fn is_array_of_class(v: &Value, classes: &[&str], min: usize, max: usize) -> bool {
    is_array_of(v, min, max, |item| is_class(item, classes))
}

#[must_use]
pub fn is_array_of_base_class(v: &Value, base: &str, min: usize, max: usize) -> bool {
    is_array_of(v, min, max, |item| inherits_from(item, base))
}
