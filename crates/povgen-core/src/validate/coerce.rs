use crate::value::{Value, Vector, VectorKind};

/// Accept a vector of `kind` unchanged, or promote a numeric list of the
/// right arity into one. The original value comes back on failure.
pub fn to_vector(kind: VectorKind, v: Value) -> Result<Value, Value> {
    match v {
        Value::Vector(vector) if vector.kind() == kind => Ok(Value::Vector(vector)),
        Value::List(_) => match v.floats().and_then(|floats| Vector::new(kind, floats)) {
            Some(vector) => Ok(Value::Vector(vector)),
            None => Err(v),
        },
        other => Err(other),
    }
}

/// List of `min..=max` vectors of `kind`, each element coerced with
/// [`to_vector`].
pub fn to_vector_array(kind: VectorKind, min: usize, max: usize, v: Value) -> Result<Value, Value> {
    let items = match v {
        Value::List(items) => items,
        other => return Err(other),
    };
    if !(min..=max).contains(&items.len()) {
        return Err(Value::List(items));
    }

    let coerced: Option<Vec<Value>> = items
        .iter()
        .map(|item| to_vector(kind, item.clone()).ok())
        .collect();

    coerced.map(Value::List).ok_or(Value::List(items))
}
