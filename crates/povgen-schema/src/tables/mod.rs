//! The catalog of generatable classes.
//!
//! Order matters: a superclass must appear before its subclasses, and the
//! generator emits classes in catalog order.

// Shorthand for the attribute shapes that recur across the tables. Each
// expands to an `AttributeRule` whose error message names the attribute.

macro_rules! float {
    ($name:literal) => {
        AttributeRule::new($name, "float").check(is_float, concat!($name, " must be a float."))
    };
}

macro_rules! int {
    ($name:literal) => {
        AttributeRule::new($name, "integer").check(is_int, concat!($name, " must be an integer."))
    };
}

macro_rules! boolean {
    ($name:literal) => {
        AttributeRule::new($name, "boolean").check(is_bool, concat!($name, " must be a boolean."))
    };
}

macro_rules! string {
    ($name:literal) => {
        AttributeRule::new($name, "string").check(
            is_non_empty_string,
            concat!($name, " must be a non-empty string."),
        )
    };
}

/// Raw scene text: a quoted string or a `&`-prefixed fragment.
macro_rules! sdl {
    ($name:literal) => {
        AttributeRule::new($name, "SDL").check(is_text, concat!($name, " must be a string of SDL."))
    };
}

macro_rules! vector {
    ($name:literal, $kind:ident, $class:literal) => {
        AttributeRule::new($name, $class).coerce(
            |v| to_vector(VectorKind::$kind, v),
            concat!($name, " must be a ", $class, "."),
        )
    };
}

macro_rules! xyz {
    ($name:literal) => {
        vector!($name, Xyz, "VectorXYZ")
    };
}

macro_rules! color {
    ($name:literal) => {
        vector!($name, Color, "Color")
    };
}

macro_rules! sturm {
    () => {
        boolean!("sturm").describe(
            "If true, POV-Ray will use the slower but more accurate Sturmian root solver. \
             Use this if the surface exhibits holes or other imperfections.",
        )
    };
}

macro_rules! hierarchy {
    () => {
        boolean!("hierarchy").describe("If false, turn off the internal bounding hierarchy.")
    };
}

pub mod global_settings;
pub mod image_options;
pub mod keywords;
pub mod objects;
pub mod primitive;
pub mod vectors;

#[cfg(test)]
mod tests;

use crate::node::EntityDescriptor;

static CATALOG: &[&EntityDescriptor] = &[
    &global_settings::GLOBAL_SETTINGS,
    &image_options::IMAGE_OPTIONS,
    &primitive::PRIMITIVE,
    &objects::BICUBIC_PATCH,
    &objects::BLOB,
    &objects::BOX,
    &objects::CAMERA,
    &objects::CONE,
    &objects::CUBIC,
    &objects::CYLINDER,
    &objects::DIFFERENCE,
    &objects::DISC,
    &objects::HEIGHT_FIELD,
    &objects::INTERSECTION,
    &objects::ISO_SURFACE,
    &objects::JULIA_FRACTAL,
    &objects::LATHE,
    &objects::LIGHT_SOURCE,
    &objects::MERGE,
    &objects::MESH,
    &objects::OVUS,
    &objects::PARAMETRIC,
    &objects::PLANE,
    &objects::POLY,
    &objects::POLYGON,
    &objects::POLYNOMIAL,
    &objects::PRISM,
    &objects::QUADRIC,
    &objects::QUARTIC,
    &objects::SPHERE,
    &objects::SPHERE_SWEEP,
    &objects::SUPERELLIPSOID,
    &objects::SOR,
    &objects::TEXT,
    &objects::TORUS,
    &objects::TRIANGLE,
    &objects::UNION,
    &vectors::VECTOR_XY,
    &vectors::VECTOR_UV,
    &vectors::VECTOR_XYZ,
    &vectors::VECTOR_XYZW,
    &vectors::COLOR,
];

/// Every descriptor, superclasses first.
#[must_use]
pub fn catalog() -> &'static [&'static EntityDescriptor] {
    CATALOG
}

#[must_use]
pub fn find(name: &str) -> Option<&'static EntityDescriptor> {
    CATALOG.iter().copied().find(|desc| desc.name == name)
}

/// `name` followed by each of its ancestors. Stops at an unknown class.
#[must_use]
pub fn lineage(name: &str) -> Vec<&'static str> {
    let mut chain = Vec::new();
    let mut next = find(name);

    while let Some(desc) = next {
        // guard against a cyclic table
        if chain.contains(&desc.name) {
            break;
        }
        chain.push(desc.name);
        next = desc.superclass.and_then(find);
    }

    chain
}
