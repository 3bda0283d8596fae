//! Self-checks run over the catalog before any code is generated.

pub mod naming;
pub mod structure;

#[cfg(test)]
mod tests;

use crate::{error::ErrorTree, node::EntityDescriptor};

/// Validate `catalog` in a fixed order: per-descriptor checks first, then
/// the checks that need the whole catalog.
pub fn validate_schema(catalog: &[&EntityDescriptor]) -> Result<(), ErrorTree> {
    let mut errors = ErrorTree::new();

    for desc in catalog {
        errors.merge(desc.name, validate_descriptor(desc));
    }
    validate_global(catalog, &mut errors);

    errors.result()
}

// Local invariants of one descriptor, routed relative to the class.
fn validate_descriptor(desc: &EntityDescriptor) -> ErrorTree {
    let mut errs = ErrorTree::new();

    naming::validate_class_name(desc, &mut errs);
    naming::validate_attribute_names(desc, &mut errs);
    naming::validate_method_names(desc, &mut errs);
    structure::validate_immutables(desc, &mut errs);
    structure::validate_rules(desc, &mut errs);
    structure::validate_constructor(desc, &mut errs);

    errs
}

fn validate_global(catalog: &[&EntityDescriptor], errs: &mut ErrorTree) {
    naming::validate_unique_classes(catalog, errs);
    structure::validate_superclasses(catalog, errs);
}
