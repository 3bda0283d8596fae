//! Declarative description of every generatable class.
//!
//! The tables under [`tables`] are plain statics. The class builder reads
//! them at build time; the generated classes read them again at runtime to
//! run each attribute's validator.

pub mod class;
pub mod error;
pub mod node;
pub mod tables;
pub mod validate;

/// Maximum length for class identifiers.
pub const MAX_CLASS_NAME_LEN: usize = 64;

/// Maximum length for attribute identifiers.
pub const MAX_ATTRIBUTE_NAME_LEN: usize = 64;

use crate::error::ErrorTree;
use thiserror::Error as ThisError;

// re-exports
pub use class::Class;
pub use node::{AttributeRule, Constant, Def, EntityDescriptor, Immutable, Validator};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        class::Class,
        err,
        error::ErrorTree,
        node::{AttributeRule, Constant, Def, EntityDescriptor, Immutable, Validator},
    };
    pub use povgen_core::{
        prelude::*,
        validate::*,
    };
    pub use serde::Serialize;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("schema validation failed:\n{0}")]
    Validation(ErrorTree),
}

/// Validate the full catalog.
pub fn check() -> Result<(), Error> {
    validate::validate_schema(tables::catalog()).map_err(Error::Validation)
}
