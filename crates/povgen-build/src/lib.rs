//! Code generation for the povgen class catalog.
//!
//! [`generate`] validates the schema catalog and renders every descriptor
//! through the [`ClassBuilder`]. [`Generator`] adds the optional syntax check
//! and writes the artifact, and [`build!`] wires it into a build script.

pub mod builder;
pub mod format;

mod macros;

pub use builder::{ClassBuilder, Style};
pub use format::FormatError;

use povgen_schema::{error::ErrorTree, node::EntityDescriptor, tables, validate};
use std::{fs, io, path::Path};
use thiserror::Error as ThisError;

/// Imports the generated classes are written against.
pub const PREAMBLE: &str = "\
// Generated by povgen-build from the povgen-schema catalog. Do not edit.

use ::povgen_core::{Error, Options, Slot, Value};
use ::povgen_schema::{Class, EntityDescriptor};
";

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("schema validation failed:\n{0}")]
    Schema(ErrorTree),

    #[error("formatting {class}: {source}")]
    Format {
        class: &'static str,
        source: FormatError,
    },

    #[error("generated code does not parse: {0}")]
    Syntax(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Render the full catalog with `style`.
pub fn generate(style: &Style) -> Result<String, BuildError> {
    generate_catalog(tables::catalog(), style)
}

/// Render `catalog`, superclasses first, under the import preamble.
pub fn generate_catalog(
    catalog: &[&EntityDescriptor],
    style: &Style,
) -> Result<String, BuildError> {
    validate::validate_schema(catalog).map_err(BuildError::Schema)?;

    let mut out = String::from(PREAMBLE);
    for desc in catalog {
        out.push('\n');
        out.push_str(&class_module(desc, style)?);
        out.push('\n');
    }
    tracing::debug!(classes = catalog.len(), bytes = out.len(), "rendered catalog");

    Ok(out)
}

// One class inside its own module, then the export declaration.
fn class_module(desc: &EntityDescriptor, style: &Style) -> Result<String, BuildError> {
    let module = builder::module_ident(desc.name);
    let inner = style.at_depth(style.depth + 1);
    let t0 = format::tab(style.depth, &style.indent);
    let t1 = format::tab(style.depth + 1, &style.indent);

    let class = ClassBuilder::new(desc, &inner)
        .generate()
        .map_err(|source| BuildError::Format {
            class: desc.name,
            source,
        })?;
    tracing::trace!(class = desc.name, module = %module, "built class");

    Ok(format!(
        "{t0}mod {module} {{\n{t1}use super::*;\n\n{class}\n{t0}}}\n\n{t0}pub use {module}::{};\n",
        desc.name
    ))
}

/// Parse `code` as a Rust source file.
pub fn check_syntax(code: &str) -> Result<(), BuildError> {
    syn::parse_file(code)
        .map(|_| ())
        .map_err(|e| BuildError::Syntax(e.to_string()))
}

///
/// Generator
///

#[derive(Clone, Debug)]
pub struct Generator {
    style: Style,
    check_syntax: bool,
    catalog: &'static [&'static EntityDescriptor],
}

impl Generator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            style: Style::default(),
            check_syntax: true,
            catalog: tables::catalog(),
        }
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub const fn check_syntax(mut self, enabled: bool) -> Self {
        self.check_syntax = enabled;
        self
    }

    #[must_use]
    pub const fn catalog(mut self, catalog: &'static [&'static EntityDescriptor]) -> Self {
        self.catalog = catalog;
        self
    }

    /// Generated source, syntax-checked when enabled.
    pub fn render(&self) -> Result<String, BuildError> {
        let code = generate_catalog(self.catalog, &self.style)?;
        if self.check_syntax {
            check_syntax(&code)?;
        }

        Ok(code)
    }

    /// Render and write the artifact to `path`, returning its size in bytes.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<usize, BuildError> {
        let path = path.as_ref();
        let code = self.render()?;

        fs::write(path, &code)?;
        tracing::info!(path = %path.display(), bytes = code.len(), "wrote generated classes");

        Ok(code.len())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
