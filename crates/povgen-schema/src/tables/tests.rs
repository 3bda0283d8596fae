use super::*;
use crate::{node::AttributeRule, validate::validate_schema};
use povgen_core::{Error, Slot, Value};

#[test]
fn catalog_validates_clean() {
    if let Err(errs) = validate_schema(catalog()) {
        panic!("catalog has schema errors:\n{errs}");
    }
}

#[test]
fn lineage_walks_superclasses() {
    assert_eq!(lineage("Box"), ["Box", "Primitive"]);
    assert_eq!(lineage("Primitive"), ["Primitive"]);
    assert_eq!(lineage("VectorXYZ"), ["VectorXYZ"]);
    assert!(lineage("Teapot").is_empty());
}

#[test]
fn find_by_class_name() {
    let desc = find("LightSource").expect("LightSource");

    assert_eq!(desc.def.ident, "LIGHT_SOURCE");
    assert!(desc.def.path().ends_with("::objects::LIGHT_SOURCE"));
    assert!(find("lightSource").is_none());
}

#[test]
fn every_validator_has_a_message() {
    for desc in catalog() {
        for rule in desc.mutable {
            if rule.validator.is_some() {
                assert!(!rule.error.is_empty(), "{}.{}", desc.name, rule.name);
            }
        }
    }
}

#[test]
fn box_corner_rejects_short_vectors() {
    let rule = find("Box").and_then(|d| d.attribute("corner1")).expect("corner1");

    let ok = rule.accept("Box", Slot::from([0.0, 0.0, 0.0])).unwrap();
    assert!(matches!(ok, Slot::Literal(Value::Vector(_))));

    let err = rule.accept("Box", Slot::from([0.0, 0.0])).unwrap_err();
    assert_eq!(err.to_string(), "[Box]: corner1 must be a VectorXYZ.");
}

#[test]
fn raw_and_deferred_skip_validation() {
    let rule = find("Sphere").and_then(|d| d.attribute("radius")).expect("radius");

    let raw = rule.accept("Sphere", Slot::from("&Radius * 2")).unwrap();
    assert!(matches!(raw, Slot::Raw(ref expr) if expr == "Radius * 2"));

    let deferred = rule
        .accept("Sphere", Slot::deferred(|| Value::from("not a float")))
        .unwrap();
    assert!(matches!(deferred, Slot::Deferred(_)));
}

#[test]
fn rule_without_validator_accepts_anything() {
    let rule = AttributeRule::new("anything", "any");

    let slot = rule.accept("Widget", Slot::from(vec![Value::Bool(true)])).unwrap();
    assert!(matches!(slot, Slot::Literal(Value::List(_))));
}

#[test]
fn keyed_attributes_use_their_tables() {
    let rule = find("Camera").and_then(|d| d.attribute("type")).expect("type");

    assert!(rule.accept("Camera", Slot::from("ultraWideAngle")).is_ok());
    let err = rule.accept("Camera", Slot::from("ultra_wide_angle")).unwrap_err();
    assert!(matches!(err, Error::Invalid { .. }));
}

#[test]
fn bokeh_requires_zero_blue() {
    let rule = find("Camera").and_then(|d| d.attribute("bokeh")).expect("bokeh");

    assert!(rule.accept("Camera", Slot::from([0.5, 1.0, 0.0])).is_ok());
    assert!(rule.accept("Camera", Slot::from([0.5, 1.0, 0.2])).is_err());
    assert!(rule.accept("Camera", Slot::from([1.5, 0.0, 0.0])).is_err());
}

#[test]
fn csg_classes_share_immutables() {
    for name in ["Difference", "Intersection", "Merge", "Union"] {
        let desc = find(name).expect(name);
        let csg = desc.immutable("csg").expect("csg");

        assert_eq!(csg.value, crate::node::Constant::Bool(true));
        assert_eq!(
            desc.immutable("finite").map(|imm| imm.value),
            Some(crate::node::Constant::Null)
        );
    }
}

#[test]
fn descriptors_serialize_for_describe() {
    let json = serde_json::to_value(find("Box").expect("Box")).unwrap();

    assert_eq!(json["name"], "Box");
    assert_eq!(json["superclass"], "Primitive");
    assert_eq!(json["mutable"][0]["name"], "corner1");
    assert_eq!(json["mutable"][0]["validated"], true);
    assert_eq!(json["mutable"][0]["required"], true);
    assert!(json.get("constructor_args").is_none());
}

#[test]
fn color_filter_defaults_to_zero() {
    let rule = find("Color").and_then(|d| d.attribute("f")).expect("f");

    assert_eq!(rule.default.and_then(|c| c.to_value()), Some(Value::Float(0.0)));
}
