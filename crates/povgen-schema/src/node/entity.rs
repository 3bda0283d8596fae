use crate::node::{AttributeRule, Constant, Def};
use serde::Serialize;
use std::borrow::Cow;

///
/// Immutable
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Immutable {
    pub name: &'static str,
    pub value: Constant,
}

impl Immutable {
    #[must_use]
    pub const fn new(name: &'static str, value: Constant) -> Self {
        Self { name, value }
    }
}

///
/// EntityDescriptor
///
/// Everything the class builder needs to emit one class.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct EntityDescriptor {
    pub def: Def,
    pub name: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub superclass: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,

    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub immutable: &'static [Immutable],

    pub mutable: &'static [AttributeRule],

    /// Replaces the `options: Options` constructor parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor_args: Option<&'static str>,

    /// Replaces the option-routing constructor body. Runs with `this` bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor_body: Option<&'static str>,
}

impl EntityDescriptor {
    /// Template for the struct-update syntax in the tables.
    pub const EMPTY: Self = Self {
        def: Def::new("", ""),
        name: "",
        superclass: None,
        description: None,
        immutable: &[],
        mutable: &[],
        constructor_args: None,
        constructor_body: None,
    };

    #[must_use]
    pub fn description_or_default(&self) -> Cow<'static, str> {
        match self.description {
            Some(desc) => Cow::Borrowed(desc),
            None => Cow::Owned(format!("{} class", self.name)),
        }
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeRule> {
        self.mutable.iter().find(|rule| rule.name == name)
    }

    /// Position of a mutable attribute within the descriptor.
    #[must_use]
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.mutable.iter().position(|rule| rule.name == name)
    }

    #[must_use]
    pub fn immutable(&self, name: &str) -> Option<&Immutable> {
        self.immutable.iter().find(|imm| imm.name == name)
    }

    pub fn required(&self) -> impl Iterator<Item = &AttributeRule> {
        self.mutable.iter().filter(|rule| rule.required)
    }

    #[must_use]
    pub const fn uses_default_constructor(&self) -> bool {
        self.constructor_args.is_none() && self.constructor_body.is_none()
    }
}
