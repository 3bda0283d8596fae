use povgen_build::{BuildError, Generator, Style, format::{self, FormatError}};
use povgen_config::{ConfigError, GeneratorConfig};
use povgen_schema::{
    error::ErrorTree,
    node::{Constant, EntityDescriptor},
    tables, validate,
};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// CliError
///

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("schema validation failed:\n{0}")]
    Schema(ErrorTree),

    #[error("unknown class '{0}'")]
    UnknownClass(String),
}

/// Builder style from the `[generator]` section.
#[must_use]
pub fn style(config: &GeneratorConfig) -> Style {
    Style {
        indent: config.indent.clone(),
        divider_width: config.divider_width,
        wrap_width: config.wrap_width,
        ..Style::default()
    }
}

// ----------------------------------------------------------------------------
// generate / check
// ----------------------------------------------------------------------------

pub fn generate(
    config: &GeneratorConfig,
    out: Option<&Path>,
    no_check: bool,
    w: &mut impl Write,
) -> Result<PathBuf, CliError> {
    let path = out.map_or_else(|| config.output.clone(), Path::to_path_buf);

    let bytes = Generator::new()
        .style(style(config))
        .check_syntax(config.check_syntax && !no_check)
        .write(&path)?;
    writeln!(w, "wrote {bytes} bytes to {}", path.display())?;

    Ok(path)
}

pub fn check(w: &mut impl Write) -> Result<(), CliError> {
    let catalog = tables::catalog();
    validate::validate_schema(catalog).map_err(CliError::Schema)?;

    writeln!(w, "{} classes ok", catalog.len())?;

    Ok(())
}

// ----------------------------------------------------------------------------
// list / describe
// ----------------------------------------------------------------------------

/// One aligned row per class: name, superclass, immutable and mutable counts.
pub fn list(w: &mut impl Write) -> Result<(), CliError> {
    let mut rows = vec![[
        "CLASS".to_string(),
        "EXTENDS".to_string(),
        "IMMUTABLE".to_string(),
        "MUTABLE".to_string(),
    ]];

    for desc in tables::catalog() {
        rows.push([
            desc.name.to_string(),
            desc.superclass.unwrap_or("-").to_string(),
            desc.immutable.len().to_string(),
            desc.mutable.len().to_string(),
        ]);
    }

    write_table(w, &rows)
}

pub fn describe(name: &str, json: bool, w: &mut impl Write) -> Result<(), CliError> {
    let desc = tables::find(name).ok_or_else(|| CliError::UnknownClass(name.to_string()))?;

    if json {
        serde_json::to_writer_pretty(&mut *w, desc)?;
        writeln!(w)?;
        return Ok(());
    }

    writeln!(w, "{}", desc.name)?;
    if let Some(superclass) = desc.superclass {
        writeln!(w, "extends {superclass}")?;
    }
    writeln!(w)?;
    write!(w, "{}", format::wrap(&desc.description_or_default(), "", format::WRAP_WIDTH))?;
    writeln!(w)?;

    if !desc.immutable.is_empty() {
        writeln!(w, "\nRead-only:")?;
        let rows: Vec<[String; 2]> = desc
            .immutable
            .iter()
            .map(|imm| [format!("  {}", imm.name), constant(imm.value)])
            .collect();
        write_table(w, &rows)?;
    }

    writeln!(w, "\nAttributes:")?;
    write_table(w, &attribute_rows(desc))?;

    Ok(())
}

fn attribute_rows(desc: &EntityDescriptor) -> Vec<[String; 5]> {
    desc.mutable
        .iter()
        .map(|rule| {
            [
                format!("  {}", rule.name),
                rule.type_name.to_string(),
                if rule.required { "required" } else { "" }.to_string(),
                rule.default.map(constant).unwrap_or_default(),
                rule.description.unwrap_or_default().to_string(),
            ]
        })
        .collect()
}

fn constant(c: Constant) -> String {
    match c {
        Constant::Null => "null".to_string(),
        Constant::Bool(b) => b.to_string(),
        Constant::Int(i) => i.to_string(),
        Constant::Float(f) => format!("{f:?}"),
        Constant::Str(s) => format!("{s:?}"),
    }
}

fn write_table<R: AsRef<[String]>>(w: &mut impl Write, rows: &[R]) -> Result<(), CliError> {
    let table = format::align(rows)?;
    for line in table.lines() {
        writeln!(w, "{}", line.trim_end())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn check_reports_the_class_count() {
        let out = output(|w| check(w));
        assert_eq!(out, format!("{} classes ok\n", tables::catalog().len()));
    }

    #[test]
    fn list_has_a_row_per_class() {
        let out = output(|w| list(w));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), tables::catalog().len() + 1);
        assert!(lines[0].starts_with("CLASS"));
        assert!(lines.iter().any(|l| l.starts_with("Sphere ") && l.contains("Primitive")));
    }

    #[test]
    fn describe_lists_attributes() {
        let out = output(|w| describe("Sphere", false, w));

        assert!(out.starts_with("Sphere\nextends Primitive\n"));
        assert!(out.contains("Read-only:"));
        assert!(out.contains("required"));
        assert!(out.lines().any(|l| l.trim_start().starts_with("center")));
    }

    #[test]
    fn describe_json_is_the_descriptor() {
        let out = output(|w| describe("Box", true, w));
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["name"], "Box");
        assert_eq!(json["superclass"], "Primitive");
        assert_eq!(json["mutable"][0]["name"], "corner1");
    }

    #[test]
    fn describe_unknown_class_fails() {
        let err = describe("Teapot", false, &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "unknown class 'Teapot'");
    }

    #[test]
    fn generate_writes_to_the_override_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.rs");

        let mut buf = Vec::new();
        let path = generate(&GeneratorConfig::default(), Some(&out), true, &mut buf).unwrap();

        assert_eq!(path, out);
        assert!(std::fs::read_to_string(&out).unwrap().contains("pub use sphere_class::Sphere;"));
        assert!(String::from_utf8(buf).unwrap().starts_with("wrote "));
    }

    #[test]
    fn style_follows_the_config() {
        let config = GeneratorConfig {
            indent: "\t".to_string(),
            divider_width: 100,
            ..GeneratorConfig::default()
        };
        let style = style(&config);

        assert_eq!(style.indent, "\t");
        assert_eq!(style.divider_width, 100);
        assert_eq!(style.depth, 0);
    }
}
