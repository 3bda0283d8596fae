use crate::value::{Value, Vector};
use derive_more::{Deref, IntoIterator};
use std::{collections::BTreeMap, fmt, rc::Rc};

/// Prefix marking a string as a raw scene fragment: the prefix is stripped and
/// the rest is stored without validation.
pub const RAW_SENTINEL: char = '&';

/// Computation evaluated each time the attribute is read.
pub type Deferred = Rc<dyn Fn() -> Value>;

///
/// Slot
///
/// Stored state of a mutable attribute.
///

#[derive(Clone, Default)]
pub enum Slot {
    #[default]
    Unset,
    Literal(Value),
    Deferred(Deferred),
    Raw(String),
}

impl Slot {
    pub fn deferred(f: impl Fn() -> Value + 'static) -> Self {
        Self::Deferred(Rc::new(f))
    }

    pub fn raw(expr: impl Into<String>) -> Self {
        Self::Raw(expr.into())
    }

    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Interpret a string, honouring the raw sentinel.
    fn text(s: &str) -> Self {
        match s.strip_prefix(RAW_SENTINEL) {
            Some(expr) => Self::Raw(expr.to_string()),
            None => Self::Literal(Value::Str(s.to_string())),
        }
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("Unset"),
            Self::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
            Self::Raw(expr) => f.debug_tuple("Raw").field(expr).finish(),
        }
    }
}

impl From<Value> for Slot {
    fn from(v: Value) -> Self {
        Self::Literal(v)
    }
}

impl From<&str> for Slot {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for Slot {
    fn from(s: String) -> Self {
        Self::text(&s)
    }
}

macro_rules! impl_from_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Slot {
                fn from(v: $ty) -> Self {
                    Self::Literal(Value::from(v))
                }
            }
        )*
    };
}

impl_from_value!(bool, f32, f64, i32, i64, u8, u32, Vector, Vec<Value>, Vec<f64>);

impl<const N: usize> From<[f64; N]> for Slot {
    fn from(items: [f64; N]) -> Self {
        Self::Literal(Value::from(items))
    }
}

impl<const N: usize> From<[i32; N]> for Slot {
    fn from(items: [i32; N]) -> Self {
        Self::Literal(Value::from(items))
    }
}

///
/// Options
///
/// Named attribute values handed to a constructor. Keys are the schema's
/// attribute names; iteration is in key order.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator)]
pub struct Options(BTreeMap<String, Slot>);

impl Options {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, val: impl Into<Slot>) -> Self {
        self.insert(name, val);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, val: impl Into<Slot>) {
        self.0.insert(name.into(), val.into());
    }
}

impl<K: Into<String>, V: Into<Slot>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
