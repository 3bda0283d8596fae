use povgen_core::{Error, Slot, Value};
use serde::{Serialize, Serializer};

///
/// Validator
///
/// Capability attached to a mutable attribute. `Check` accepts or rejects
/// the candidate as-is; `Coerce` may rewrite it into a richer representation
/// and returns the input on rejection.
///

#[derive(Clone, Copy, Debug)]
pub enum Validator {
    Check(fn(&Value) -> bool),
    Coerce(fn(Value) -> Result<Value, Value>),
}

impl Validator {
    /// Run the validator, yielding the value to store.
    pub fn apply(self, candidate: Value) -> Result<Value, Value> {
        match self {
            Self::Check(pred) => {
                if pred(&candidate) {
                    Ok(candidate)
                } else {
                    Err(candidate)
                }
            }
            Self::Coerce(coerce) => coerce(candidate),
        }
    }
}

///
/// Constant
///
/// Fixed initializer for immutable attributes and defaults.
///

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Constant {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(&'static str),
}

impl Constant {
    #[must_use]
    pub fn to_value(self) -> Option<Value> {
        match self {
            Self::Null => None,
            Self::Bool(b) => Some(Value::Bool(b)),
            Self::Int(i) => Some(Value::Int(i)),
            Self::Float(f) => Some(Value::Float(f)),
            Self::Str(s) => Some(Value::from(s)),
        }
    }
}

///
/// AttributeRule
///
/// One mutable attribute of a class.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct AttributeRule {
    pub name: &'static str,
    pub required: bool,

    #[serde(rename = "validated", serialize_with = "serialize_validator")]
    pub validator: Option<Validator>,

    #[serde(skip_serializing_if = "str::is_empty")]
    pub error: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Constant>,

    pub type_name: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

fn serialize_validator<S: Serializer>(v: &Option<Validator>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_bool(v.is_some())
}

impl AttributeRule {
    #[must_use]
    pub const fn new(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            required: false,
            validator: None,
            error: "",
            default: None,
            type_name,
            description: None,
        }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn check(mut self, pred: fn(&Value) -> bool, error: &'static str) -> Self {
        self.validator = Some(Validator::Check(pred));
        self.error = error;
        self
    }

    #[must_use]
    pub const fn coerce(
        mut self,
        coerce: fn(Value) -> Result<Value, Value>,
        error: &'static str,
    ) -> Self {
        self.validator = Some(Validator::Coerce(coerce));
        self.error = error;
        self
    }

    #[must_use]
    pub const fn default_value(mut self, value: Constant) -> Self {
        self.default = Some(value);
        self
    }

    #[must_use]
    pub const fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Decide what to store for a candidate assignment on `class`.
    ///
    /// Unset, deferred and raw slots are stored as given. Literals must pass
    /// the validator and are stored in the form it returns. With no validator
    /// every literal is accepted.
    pub fn accept(&self, class: &str, val: Slot) -> Result<Slot, Error> {
        match (val, self.validator) {
            (Slot::Literal(candidate), Some(validator)) => validator
                .apply(candidate)
                .map(Slot::Literal)
                .map_err(|_| Error::invalid(class, self.name, self.error)),
            (val, _) => Ok(val),
        }
    }
}
