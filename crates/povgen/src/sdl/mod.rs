//! Scene-description output for the generated classes.
//!
//! Every object class implements [`Node`]: serialization checks the
//! required attributes, writes the object's own block and then the modifiers
//! shared through [`Primitive`].

mod objects;
mod settings;

#[cfg(test)]
mod tests;

pub use settings::INI_KEYS;

use crate::classes::*;
use povgen_core::{Error, Node, Value, sdl::tab};
use povgen_schema::{Class, tables::lineage};
use std::any::Any;

// ----------------------------------------------------------------------------
// Block
// ----------------------------------------------------------------------------

///
/// Block
///
/// Body lines of one `keyword { ... }` block written at `stops`.
///

#[derive(Debug)]
pub struct Block {
    stops: usize,
    lines: Vec<String>,
}

impl Block {
    #[must_use]
    pub const fn new(stops: usize) -> Self {
        Self {
            stops,
            lines: Vec::new(),
        }
    }

    /// One line of body text, indented one level past the block.
    pub fn line(&mut self, text: impl AsRef<str>) {
        self.lines
            .push(format!("{}{}", tab(self.stops + 1), text.as_ref()));
    }

    /// A value as body content: nested objects render as their own blocks,
    /// anything else on one line.
    pub fn value(&mut self, value: &Value) -> Result<(), Error> {
        match value {
            Value::Node(node) => {
                self.lines.push(node.to_sdl(self.stops + 1)?);
            }
            Value::List(items) if items.iter().any(|i| matches!(i, Value::Node(_))) => {
                for item in items {
                    self.value(item)?;
                }
            }
            other => self.line(verbatim(other)?),
        }

        Ok(())
    }

    /// Wrap a value in a named sub-block, e.g. `clipped_by { ... }`.
    pub fn nested(&mut self, keyword: &str, value: &Value) -> Result<(), Error> {
        let mut inner = Self::new(self.stops + 1);
        inner.value(value)?;
        self.lines.push(inner.finish(keyword));

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn finish(self, keyword: &str) -> String {
        let t0 = tab(self.stops);

        if self.lines.is_empty() {
            format!("{t0}{keyword} {{ }}")
        } else {
            format!("{t0}{keyword} {{\n{}\n{t0}}}", self.lines.join("\n"))
        }
    }
}

// ----------------------------------------------------------------------------
// attribute helpers
// ----------------------------------------------------------------------------

/// Scene text for a value; strings and raw fragments are written verbatim.
pub fn verbatim(value: &Value) -> Result<String, Error> {
    match value {
        Value::Str(s) | Value::Sdl(s) => Ok(s.clone()),
        other => other.to_sdl(0),
    }
}

pub(crate) fn attr<C: Class>(obj: &C, name: &str) -> Option<Value> {
    obj.get(name).ok().flatten()
}

pub(crate) fn required<C: Class>(obj: &C, name: &str) -> Result<Value, Error> {
    attr(obj, name).ok_or_else(|| Error::missing_required(C::NAME, name))
}

pub(crate) fn flag<C: Class>(obj: &C, name: &str) -> Option<bool> {
    attr(obj, name).and_then(|v| v.as_bool())
}

pub(crate) fn on_off(b: bool) -> &'static str {
    if b { "on" } else { "off" }
}

/// `keyword value` when the attribute is set.
pub(crate) fn emit<C: Class>(
    obj: &C,
    block: &mut Block,
    name: &str,
    keyword: &str,
) -> Result<(), Error> {
    if let Some(v) = attr(obj, name) {
        block.line(format!("{keyword} {}", verbatim(&v)?));
    }

    Ok(())
}

/// Bare `keyword` when the attribute is true.
pub(crate) fn emit_flag<C: Class>(obj: &C, block: &mut Block, name: &str, keyword: &str) {
    if flag(obj, name) == Some(true) {
        block.line(keyword);
    }
}

/// `<a, b, c>` for a list of numbers.
pub(crate) fn angle_list(value: &Value) -> Result<String, Error> {
    Ok(format!("<{}>", value.to_sdl(0)?))
}

// ----------------------------------------------------------------------------
// Primitive modifiers
// ----------------------------------------------------------------------------

/// Modifiers every object inherits, in the order POV-Ray expects them.
pub(crate) fn modifiers(obj: &Primitive, block: &mut Block) -> Result<(), Error> {
    for name in ["texture", "material", "interior"] {
        if let Some(v) = attr(obj, name) {
            block.line(verbatim(&v)?);
        }
    }

    if let Some(v) = attr(obj, "clippedBy") {
        block.nested("clipped_by", &v)?;
    }
    if let Some(v) = attr(obj, "boundedBy") {
        block.nested("bounded_by", &v)?;
    }

    for (name, keyword) in [
        ("doubleIlluminate", "double_illuminate"),
        ("hollow", "hollow"),
        ("inverse", "inverse"),
        ("noImage", "no_image"),
        ("noRadiosity", "no_radiosity"),
        ("noReflection", "no_reflection"),
        ("noShadow", "no_shadow"),
    ] {
        emit_flag(obj, block, name, keyword);
    }

    for name in ["photons", "radiosity", "transform"] {
        if let Some(v) = attr(obj, name) {
            block.line(verbatim(&v)?);
        }
    }

    Ok(())
}

/// `// id` comment placed above an object's block.
pub(crate) fn with_id(obj: &Primitive, stops: usize, body: String) -> Result<String, Error> {
    match attr(obj, "id") {
        Some(id) => Ok(format!("{}// {}\n{body}", tab(stops), verbatim(&id)?)),
        None => Ok(body),
    }
}

// ----------------------------------------------------------------------------
// Node impls
// ----------------------------------------------------------------------------

macro_rules! impl_node {
    ($($class:ident => $write:path),* $(,)?) => {
        $(
            impl Node for $class {
                fn class_name(&self) -> &'static str {
                    <Self as Class>::NAME
                }

                fn is_a(&self, class: &str) -> bool {
                    lineage(<Self as Class>::NAME).contains(&class)
                }

                fn to_sdl(&self, stops: usize) -> Result<String, Error> {
                    self.require()?;
                    $write(self, stops)
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn is_active(&self) -> bool {
                    flag(self, "active") != Some(false)
                }
            }
        )*
    };
}

impl_node! {
    BicubicPatch => objects::bicubic_patch,
    Blob => objects::blob,
    Box => objects::r#box,
    Camera => objects::camera,
    Cone => objects::cone,
    Cubic => objects::cubic,
    Cylinder => objects::cylinder,
    Difference => objects::difference,
    Disc => objects::disc,
    HeightField => objects::height_field,
    Intersection => objects::intersection,
    IsoSurface => objects::iso_surface,
    JuliaFractal => objects::julia_fractal,
    Lathe => objects::lathe,
    LightSource => objects::light_source,
    Merge => objects::merge,
    Mesh => objects::mesh,
    Ovus => objects::ovus,
    Parametric => objects::parametric,
    Plane => objects::plane,
    Poly => objects::poly,
    Polygon => objects::polygon,
    Polynomial => objects::polynomial,
    Prism => objects::prism,
    Quadric => objects::quadric,
    Quartic => objects::quartic,
    Sphere => objects::sphere,
    SphereSweep => objects::sphere_sweep,
    Superellipsoid => objects::superellipsoid,
    Sor => objects::sor,
    Text => objects::text,
    Torus => objects::torus,
    Triangle => objects::triangle,
    Union => objects::union,
}
