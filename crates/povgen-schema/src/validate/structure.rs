use crate::{
    err,
    error::ErrorTree,
    node::{Constant, EntityDescriptor},
};
use povgen_core::Slot;
use std::collections::BTreeMap;

/// Per-attribute rules: validators carry a message and defaults pass them.
pub fn validate_rules(desc: &EntityDescriptor, errs: &mut ErrorTree) {
    for rule in desc.mutable {
        if rule.validator.is_some() && rule.error.is_empty() {
            errs.add_route(rule.name, "validated attribute has no error message");
        }
        if rule.type_name.is_empty() {
            errs.add_route(rule.name, "attribute has no type name");
        }

        if rule.default.is_some_and(|c| !is_finite(c)) {
            errs.add_route(rule.name, "default value is not a finite number");
        }
        if let Some(default) = rule.default.and_then(|c| c.to_value())
            && rule.accept(desc.name, Slot::Literal(default)).is_err()
        {
            errs.add_route(rule.name, "default value fails the attribute's validator");
        }
    }
}

/// Immutable initializers must be representable as literals.
pub fn validate_immutables(desc: &EntityDescriptor, errs: &mut ErrorTree) {
    for imm in desc.immutable {
        if !is_finite(imm.value) {
            errs.add_route(imm.name, "initializer is not a finite number");
        }
    }
}

const fn is_finite(constant: Constant) -> bool {
    match constant {
        Constant::Float(f) => f.is_finite(),
        _ => true,
    }
}

/// Custom constructors need both a parameter list and a body.
pub fn validate_constructor(desc: &EntityDescriptor, errs: &mut ErrorTree) {
    match (desc.constructor_args, desc.constructor_body) {
        (Some(_), None) => err!(errs, "constructor_args given without constructor_body"),
        (None, Some(_)) => err!(errs, "constructor_body given without constructor_args"),
        _ => {}
    }
}

/// Superclasses must exist, be declared earlier and take plain options.
pub fn validate_superclasses(catalog: &[&EntityDescriptor], errs: &mut ErrorTree) {
    let positions: BTreeMap<&str, usize> = catalog
        .iter()
        .enumerate()
        .map(|(i, desc)| (desc.name, i))
        .collect();

    for (i, desc) in catalog.iter().enumerate() {
        let Some(superclass) = desc.superclass else {
            continue;
        };
        let name = desc.name;

        match positions.get(superclass) {
            None => err!(errs, "'{name}' extends unknown class '{superclass}'"),
            Some(&j) if j >= i => {
                err!(errs, "'{name}' must be declared after its superclass '{superclass}'");
            }
            Some(&j) => {
                if !catalog[j].uses_default_constructor() {
                    err!(
                        errs,
                        "'{name}' extends '{superclass}', which has a custom constructor"
                    );
                }
            }
        }
    }
}
