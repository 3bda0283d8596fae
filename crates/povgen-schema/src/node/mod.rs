mod attribute;
mod entity;

pub use attribute::{AttributeRule, Constant, Validator};
pub use entity::{EntityDescriptor, Immutable};

use serde::Serialize;

///
/// Def
///
/// Where a descriptor static lives, so generated code can name it.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Def {
    pub module_path: &'static str,
    pub ident: &'static str,
}

impl Def {
    #[must_use]
    pub const fn new(module_path: &'static str, ident: &'static str) -> Self {
        Self { module_path, ident }
    }

    /// Absolute path to the static, e.g. `::povgen_schema::tables::objects::BOX`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("::{}::{}", self.module_path, self.ident)
    }
}
