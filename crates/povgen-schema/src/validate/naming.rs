use crate::{
    MAX_ATTRIBUTE_NAME_LEN, MAX_CLASS_NAME_LEN, err, error::ErrorTree, node::EntityDescriptor,
};
use convert_case::{Boundary, Case, Casing};
use std::collections::{BTreeMap, BTreeSet};

/// Method names every generated class already defines.
pub const RESERVED_METHODS: &[&str] = &[
    "apply",
    "assign",
    "base",
    "descriptor",
    "get",
    "missing_required",
    "new",
    "require",
];

/// Words that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "super", "_"];

/// Snake-case method name generated for an attribute. Digits stay attached
/// to the word before them, so `corner1` keeps its name.
#[must_use]
pub fn method_name(attribute: &str) -> String {
    attribute
        .from_case(Case::Camel)
        .remove_boundaries(&Boundary::digits())
        .to_case(Case::Snake)
}

fn is_pascal_case(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        && name.chars().all(|c| c.is_ascii_alphanumeric())
}

fn is_camel_case(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_lowercase())
        && name.chars().all(|c| c.is_ascii_alphanumeric())
}

pub fn validate_class_name(desc: &EntityDescriptor, errs: &mut ErrorTree) {
    let name = desc.name;

    if !is_pascal_case(name) {
        err!(errs, "class name '{name}' must be PascalCase");
    }
    if name.len() > MAX_CLASS_NAME_LEN {
        err!(errs, "class name '{name}' exceeds {MAX_CLASS_NAME_LEN} characters");
    }
    if desc.def.ident.is_empty() {
        err!(errs, "descriptor for '{name}' has no static identifier");
    }
}

/// Attribute names are camelCase, bounded and unique across both the
/// immutable and mutable sets.
pub fn validate_attribute_names(desc: &EntityDescriptor, errs: &mut ErrorTree) {
    let names = desc
        .immutable
        .iter()
        .map(|imm| imm.name)
        .chain(desc.mutable.iter().map(|rule| rule.name));

    let mut seen = BTreeSet::new();
    for name in names {
        if !is_camel_case(name) {
            errs.add_route(name, "attribute names must be camelCase");
        }
        if name.len() > MAX_ATTRIBUTE_NAME_LEN {
            errs.add_route(
                name,
                format!("attribute name exceeds {MAX_ATTRIBUTE_NAME_LEN} characters"),
            );
        }
        if !seen.insert(name) {
            errs.add_route(name, "duplicate attribute name");
        }
    }
}

/// Getter and setter names must not collide with each other or with the
/// methods every class carries.
pub fn validate_method_names(desc: &EntityDescriptor, errs: &mut ErrorTree) {
    let mut owners: BTreeMap<String, &str> = BTreeMap::new();

    let attributes = desc
        .immutable
        .iter()
        .map(|imm| imm.name)
        .chain(desc.mutable.iter().map(|rule| rule.name));

    for name in attributes {
        let getter = method_name(name);

        if RESERVED_METHODS.contains(&getter.as_str()) {
            errs.add_route(name, format!("'{getter}' is a reserved method name"));
        }
        if NON_RAW_KEYWORDS.contains(&getter.as_str()) {
            errs.add_route(name, format!("'{getter}' cannot be used as an identifier"));
        }

        for method in [format!("set_{getter}"), getter] {
            if let Some(prev) = owners.insert(method.clone(), name)
                && prev != name
            {
                errs.add_route(name, format!("method '{method}' collides with '{prev}'"));
            }
        }
    }
}

pub fn validate_unique_classes(catalog: &[&EntityDescriptor], errs: &mut ErrorTree) {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();

    for desc in catalog {
        // module names are derived from the snake-case form
        let snake = desc.name.to_case(Case::Snake);

        if let Some(prev) = seen.insert(snake.clone(), desc.name) {
            if prev == desc.name {
                err!(errs, "duplicate class name '{prev}'");
            } else {
                err!(errs, "class names '{prev}' and '{}' both map to '{snake}'", desc.name);
            }
        }
    }
}
