use povgen::{Error, Options, Slot, Value, VectorKind, classes::*, prelude::Class};
use proptest::prelude::*;

fn unit_sphere() -> Sphere {
    Sphere::new(
        Options::new()
            .set("center", [0.0, 0.0, 0.0])
            .set("radius", 1.0),
    )
    .unwrap()
}

#[test]
fn box_rejects_a_scalar_corner() {
    let err = Box::new(Options::new().set("corner1", 5.0)).unwrap_err();

    assert_eq!(err.to_string(), "[Box]: corner1 must be a VectorXYZ.");
    assert_eq!(err.attribute(), Some("corner1"));
}

#[test]
fn box_accepts_a_vector_and_reads_it_back() {
    let b = Box::new(
        Options::new()
            .set("corner1", [-1.0, -1.0, -1.0])
            .set("corner2", [1.0, 1.0, 1.0]),
    )
    .unwrap();

    let corner = b.get("corner1").unwrap().unwrap();
    let vector = corner.as_vector().unwrap();
    assert_eq!(vector.kind(), VectorKind::Xyz);
    assert_eq!(vector.components(), &[-1.0, -1.0, -1.0]);
}

#[test]
fn box_corner_setter_and_getter() {
    let mut b = Box::new(Options::new()).unwrap();

    let err = b.set_corner1(5.0).unwrap_err();
    assert_eq!(err.to_string(), "[Box]: corner1 must be a VectorXYZ.");
    assert_eq!(b.corner1(), None);

    b.set_corner1([-1.0, -1.0, -1.0]).unwrap();
    let corner = b.corner1().unwrap();
    assert_eq!(corner.as_vector().unwrap().components(), &[-1.0, -1.0, -1.0]);
    assert_eq!(b.get("corner1").unwrap(), Some(corner));
}

#[test]
fn immutable_properties_are_read_only() {
    let mut s = unit_sphere();

    assert_eq!(s.finite(), Some(Value::Bool(true)));
    assert_eq!(
        s.set_finite(false).unwrap_err(),
        Error::read_only("Sphere", "finite")
    );
    assert_eq!(
        s.assign("solid", Slot::from(false)).unwrap_err(),
        Error::read_only("Sphere", "solid")
    );
}

#[test]
fn csg_finiteness_is_left_open() {
    let u = Union::new(Options::new().set("components", vec![Value::node(unit_sphere())])).unwrap();

    assert_eq!(u.finite(), None);
    assert_eq!(u.csg(), Some(Value::Bool(true)));
}

#[test]
fn setters_validate() {
    let mut s = unit_sphere();

    s.set_radius(2.5).unwrap();
    assert_eq!(s.radius(), Some(Value::Float(2.5)));

    let err = s.set_radius("large").unwrap_err();
    assert_eq!(err.to_string(), "[Sphere]: radius must be a float.");
    assert_eq!(s.radius(), Some(Value::Float(2.5)));
}

#[test]
fn construction_is_all_or_nothing() {
    let result = Sphere::new(
        Options::new()
            .set("center", [0.0, 0.0, 0.0])
            .set("radius", "wide"),
    );

    assert!(matches!(result, Err(Error::Invalid { .. })));
}

#[test]
fn apply_commits_only_when_every_option_passes() {
    let mut s = unit_sphere();

    // center is assigned before radius fails
    let err = s
        .apply(
            Options::new()
                .set("center", [5.0, 5.0, 5.0])
                .set("radius", "wide"),
        )
        .unwrap_err();
    assert_eq!(err.attribute(), Some("radius"));

    let center = s.get("center").unwrap().unwrap();
    assert_eq!(center.as_vector().unwrap().components(), &[0.0, 0.0, 0.0]);

    s.apply(Options::new().set("radius", 4.0)).unwrap();
    assert_eq!(s.radius(), Some(Value::Float(4.0)));
}

#[test]
fn raw_values_bypass_validation() {
    let mut s = unit_sphere();

    s.set_radius("&Radius * 2").unwrap();
    assert_eq!(s.radius(), Some(Value::Sdl("Radius * 2".into())));
}

#[test]
fn deferred_values_are_computed_on_read() {
    let mut s = unit_sphere();

    s.assign("radius", Slot::deferred(|| Value::Float(0.25))).unwrap();
    assert_eq!(s.radius(), Some(Value::Float(0.25)));
}

#[test]
fn inherited_attributes_are_reachable() {
    let mut s = unit_sphere();

    assert_eq!(s.get("active").unwrap(), Some(Value::Bool(true)));
    assert_eq!(s.active(), Some(Value::Bool(true)));

    s.assign("noShadow", Slot::from(true)).unwrap();
    assert_eq!(s.get("noShadow").unwrap(), Some(Value::Bool(true)));

    let err = s.assign("noShadow", Slot::from(1)).unwrap_err();
    assert_eq!(err.to_string(), "[Primitive]: noShadow must be a boolean.");
}

#[test]
fn unknown_attributes_fail() {
    let mut s = unit_sphere();

    let err = s.assign("color", Slot::from(1.0)).unwrap_err();
    assert!(matches!(err, Error::UnknownAttribute { .. }));
    assert_eq!(err.attribute(), Some("color"));
    assert!(s.get("color").is_err());
}

#[test]
fn missing_required_is_reported() {
    let s = Sphere::new(Options::new()).unwrap();
    assert_eq!(s.missing_required(), Some("center"));
    assert_eq!(s.require(), Err(Error::missing_required("Sphere", "center")));

    assert_eq!(unit_sphere().missing_required(), None);
}

#[test]
fn composite_attributes_check_their_members() {
    let plane = Plane::new(
        Options::new()
            .set("normal", [0.0, 1.0, 0.0])
            .set("distance", 0.0),
    )
    .unwrap();

    let err = Union::new(Options::new().set("components", vec![Value::from(1.0)])).unwrap_err();
    assert_eq!(err.to_string(), "[Union]: components must be an array of Primitives.");

    Union::new(Options::new().set("components", vec![Value::node(plane)])).unwrap();
}

#[test]
fn vector_classes_convert_to_values() {
    let v = VectorXYZ::new(1.0, 2.0, 3.0).unwrap();
    let value = Value::try_from(&v).unwrap();

    let mut s = unit_sphere();
    s.assign("center", Slot::from(value)).unwrap();
    let center = s.get("center").unwrap().unwrap();
    assert_eq!(center.as_vector().unwrap().components(), &[1.0, 2.0, 3.0]);

    let c = Color::new(1.0, 0.5, 0.0).unwrap();
    assert_eq!(c.to_vector().unwrap().components(), &[1.0, 0.5, 0.0, 0.0, 0.0]);
}

#[test]
fn class_names_follow_the_catalog() {
    assert_eq!(Sphere::NAME, "Sphere");
    assert_eq!(Sphere::descriptor().superclass, Some("Primitive"));
    assert_eq!(GlobalSettings::NAME, "GlobalSettings");
}

proptest! {
    #[test]
    fn finite_radii_read_back(r in -1.0e6f64..1.0e6) {
        let mut s = unit_sphere();
        s.set_radius(r).unwrap();

        prop_assert_eq!(s.radius(), Some(Value::Float(r)));
    }

    #[test]
    fn antialias_depth_is_bounded(depth in -100i64..100) {
        let mut options = ImageOptions::new(Options::new()).unwrap();
        let result = options.assign("antialiasDepth", Slot::from(depth));

        prop_assert_eq!(result.is_ok(), (1..=9).contains(&depth));
    }
}
