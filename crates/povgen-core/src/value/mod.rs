mod vector;


use crate::node::Node;
use std::rc::Rc;

// re-exports
pub use vector::{Vector, VectorKind};

///
/// Value
///
/// A concrete attribute value. `Sdl` is a scene-language fragment that is
/// emitted verbatim; `Node` is a constructed object nested inside another
/// (a CSG operand, a blob component, a clipping shape).
///

#[derive(Clone, Debug)]
#[remain::sorted]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i64),
    List(Vec<Self>),
    Node(Rc<dyn Node>),
    Sdl(String),
    Str(String),
    Vector(Vector),
}

impl Value {
    /// Wrap a constructed object so it can be stored in an attribute.
    pub fn node(node: impl Node + 'static) -> Self {
        Self::Node(Rc::new(node))
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric view; integers widen to floats.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Text view over both quoted strings and raw fragments.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) | Self::Sdl(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_vector(&self) -> Option<&Vector> {
        match self {
            Self::Vector(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_node(&self) -> Option<&dyn Node> {
        match self {
            Self::Node(node) => Some(node.as_ref()),
            _ => None,
        }
    }

    /// Every element as a float, or `None` if this is not a numeric list.
    #[must_use]
    pub fn floats(&self) -> Option<Vec<f64>> {
        self.as_list()?.iter().map(Self::as_f64).collect()
    }

    /// Short label used in diagnostics.
    #[must_use]
    pub fn type_label(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::List(_) => "list",
            Self::Node(node) => node.class_name(),
            Self::Sdl(_) => "sdl",
            Self::Str(_) => "string",
            Self::Vector(v) => v.kind().class_name(),
        }
    }
}

// Nodes compare by identity; everything else structurally.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Node(a), Self::Node(b)) => Rc::ptr_eq(a, b),
            (Self::Sdl(a), Self::Sdl(b)) | (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Vector(a), Self::Vector(b)) => a == b,
            _ => false,
        }
    }
}

// ----------------------------------------------------------------------------
// conversions
// ----------------------------------------------------------------------------

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    f32 => Float,
    f64 => Float,
    i32 => Int,
    i64 => Int,
    u8 => Int,
    u32 => Int,
    String => Str,
    Vector => Vector,
    Vec<Value> => List,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<Vec<f64>> for Value {
    fn from(items: Vec<f64>) -> Self {
        Self::List(items.into_iter().map(Self::Float).collect())
    }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(items: [f64; N]) -> Self {
        Self::List(items.into_iter().map(Self::Float).collect())
    }
}

impl<const N: usize> From<[i32; N]> for Value {
    fn from(items: [i32; N]) -> Self {
        Self::List(items.into_iter().map(Self::from).collect())
    }
}
