use super::*;
use crate::node::{AttributeRule, Constant, Def, Immutable};
use povgen_core::validate::is_float;

const fn class(name: &'static str) -> EntityDescriptor {
    EntityDescriptor {
        def: Def::new("test", "CLASS"),
        name,
        ..EntityDescriptor::EMPTY
    }
}

static BASE: EntityDescriptor = class("Base");

static CHILD: EntityDescriptor = EntityDescriptor {
    superclass: Some("Base"),
    mutable: &[AttributeRule::new("size", "float").check(is_float, "size must be a float.")],
    ..class("Child")
};

fn errors(catalog: &[&EntityDescriptor]) -> ErrorTree {
    validate_schema(catalog).expect_err("expected schema errors")
}

#[test]
fn well_formed_catalog_passes() {
    assert!(validate_schema(&[&BASE, &CHILD]).is_ok());
}

#[test]
fn superclass_must_come_first() {
    let errs = errors(&[&CHILD, &BASE]);

    let msgs = errs.get("").unwrap();
    assert!(msgs[0].contains("declared after its superclass 'Base'"));
}

#[test]
fn unknown_superclass() {
    let errs = errors(&[&CHILD]);

    assert!(errs.get("").unwrap()[0].contains("unknown class 'Base'"));
}

#[test]
fn superclass_needs_default_constructor() {
    static CUSTOM: EntityDescriptor = EntityDescriptor {
        constructor_args: Some("x: f64"),
        constructor_body: Some("this.set_x(x)?;"),
        mutable: &[AttributeRule::new("x", "float").check(is_float, "x must be a float.")],
        ..class("Base")
    };

    let errs = errors(&[&CUSTOM, &CHILD]);
    assert!(errs.get("").unwrap()[0].contains("custom constructor"));
}

#[test]
fn constructor_parts_come_together() {
    static HALF: EntityDescriptor = EntityDescriptor {
        constructor_args: Some("x: f64"),
        ..class("Half")
    };

    let errs = errors(&[&HALF]);
    assert_eq!(
        errs.get("Half").unwrap(),
        ["constructor_args given without constructor_body"]
    );
}

#[test]
fn bad_class_names() {
    static LOWER: EntityDescriptor = class("box");
    static DUP: EntityDescriptor = class("Base");

    let errs = errors(&[&BASE, &LOWER, &DUP]);
    assert!(errs.get("box").unwrap()[0].contains("PascalCase"));
    assert!(errs.get("").unwrap()[0].contains("duplicate class name 'Base'"));
}

#[test]
fn attribute_names_are_unique_across_sets() {
    static CLASH: EntityDescriptor = EntityDescriptor {
        immutable: &[Immutable::new("solid", Constant::Bool(true))],
        mutable: &[AttributeRule::new("solid", "boolean")],
        ..class("Clash")
    };

    let errs = errors(&[&CLASH]);
    assert!(
        errs.get("Clash.solid")
            .unwrap()
            .iter()
            .any(|m| m == "duplicate attribute name")
    );
}

#[test]
fn reserved_method_names() {
    static RESERVED: EntityDescriptor = EntityDescriptor {
        mutable: &[AttributeRule::new("descriptor", "string")],
        ..class("Reserved")
    };

    let errs = errors(&[&RESERVED]);
    assert_eq!(
        errs.get("Reserved.descriptor").unwrap(),
        ["'descriptor' is a reserved method name"]
    );
}

#[test]
fn method_names_keep_trailing_digits() {
    assert_eq!(naming::method_name("corner1"), "corner1");
    assert_eq!(naming::method_name("height2"), "height2");
    assert_eq!(naming::method_name("radBrightness"), "rad_brightness");
}

#[test]
fn getter_and_setter_collisions() {
    static SHADOW: EntityDescriptor = EntityDescriptor {
        mutable: &[
            AttributeRule::new("size", "float"),
            AttributeRule::new("setSize", "float"),
        ],
        ..class("Shadow")
    };

    let errs = errors(&[&SHADOW]);
    assert!(errs.get("Shadow.setSize").unwrap()[0].contains("collides with 'size'"));
}

#[test]
fn validator_needs_a_message() {
    static SILENT: EntityDescriptor = EntityDescriptor {
        mutable: &[AttributeRule::new("size", "float").check(is_float, "")],
        ..class("Silent")
    };

    let errs = errors(&[&SILENT]);
    assert_eq!(
        errs.get("Silent.size").unwrap(),
        ["validated attribute has no error message"]
    );
}

#[test]
fn defaults_must_pass_their_validator() {
    static WRONG: EntityDescriptor = EntityDescriptor {
        mutable: &[AttributeRule::new("size", "float")
            .check(is_float, "size must be a float.")
            .default_value(Constant::Str("big"))],
        ..class("Wrong")
    };

    let errs = errors(&[&WRONG]);
    assert!(errs.get("Wrong.size").is_some());
}
