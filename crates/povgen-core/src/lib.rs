//! Runtime model shared by the schema tables, the generated classes and the
//! scene serializers.
//!
//! Nothing in here knows about individual entity types. It provides the value
//! representation, the stored-slot tagging for mutable attributes, the `Node`
//! seam used to nest objects inside each other, and the predicate library the
//! attribute validators are written against.

pub mod error;
pub mod node;
pub mod sdl;
pub mod slot;
pub mod validate;
pub mod value;

pub use error::Error;
pub use node::Node;
pub use slot::{Deferred, Options, RAW_SENTINEL, Slot};
pub use value::{Value, Vector, VectorKind};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::Error,
        node::Node,
        sdl::Keyword,
        slot::{Options, Slot},
        value::{Value, Vector, VectorKind},
    };
}
