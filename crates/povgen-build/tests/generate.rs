use povgen_build::{BuildError, Generator, Style, check_syntax, generate, generate_catalog};
use povgen_core::validate::is_float;
use povgen_schema::{
    node::{AttributeRule, Def, EntityDescriptor},
    tables,
};

#[test]
fn full_catalog_parses() {
    let code = generate(&Style::default()).unwrap();

    check_syntax(&code).unwrap();
    assert!(code.starts_with("// Generated by povgen-build"));
}

#[test]
fn one_export_per_class_in_catalog_order() {
    let code = generate(&Style::default()).unwrap();

    let exports: Vec<&str> = code
        .lines()
        .filter_map(|line| line.strip_prefix("pub use "))
        .collect();
    assert_eq!(exports.len(), tables::catalog().len());

    let names: Vec<&str> = exports
        .iter()
        .filter_map(|e| e.rsplit("::").next())
        .map(|e| e.trim_end_matches(';'))
        .collect();
    let expected: Vec<&str> = tables::catalog().iter().map(|d| d.name).collect();
    assert_eq!(names, expected);

    assert!(code.contains("pub use box_class::Box;"));
    assert!(code.contains("mod global_settings_class {\n    use super::*;"));
}

#[test]
fn every_class_implements_the_trait() {
    let code = generate(&Style::default()).unwrap();

    for desc in tables::catalog() {
        assert!(
            code.contains(&format!("impl Class for {} {{", desc.name)),
            "{}",
            desc.name
        );
    }
}

#[test]
fn vectors_take_positional_components() {
    let code = generate(&Style::default()).unwrap();

    assert!(code.contains("pub fn new(x: f64, y: f64, z: f64) -> Result<Self, Error> {"));
    assert!(code.contains("pub fn new(r: f64, g: f64, b: f64) -> Result<Self, Error> {"));
}

#[test]
fn broken_catalog_is_rejected() {
    static ORPHAN: EntityDescriptor = EntityDescriptor {
        def: Def::new("fixtures", "ORPHAN"),
        name: "Orphan",
        superclass: Some("Missing"),
        mutable: &[AttributeRule::new("size", "float").check(is_float, "size must be a float.")],
        ..EntityDescriptor::EMPTY
    };

    let err = generate_catalog(&[&ORPHAN], &Style::default()).unwrap_err();
    match err {
        BuildError::Schema(tree) => {
            assert!(tree.to_string().contains("unknown class 'Missing'"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn writes_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("classes.rs");

    let bytes = Generator::new().write(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();

    assert_eq!(bytes, written.len());
    assert!(written.contains("pub use color_class::Color;"));
}

#[test]
fn custom_style_changes_layout() {
    let style = Style {
        indent: "\t".to_string(),
        divider_width: 60,
        ..Style::default()
    };
    let code = Generator::new().style(style).render().unwrap();

    assert!(code.contains("mod box_class {\n\tuse super::*;"));
    assert!(code.lines().any(|l| l == format!("\t//{}", "=".repeat(57))));
}

#[test]
fn syntax_errors_are_reported() {
    let err = check_syntax("pub struct {").unwrap_err();

    assert!(matches!(err, BuildError::Syntax(_)));
}
