use super::*;
use povgen_core::{Options, Slot};

fn sphere(center: [f64; 3], radius: f64) -> Sphere {
    Sphere::new(Options::new().set("center", center).set("radius", radius)).unwrap()
}

///
/// Block
///

#[test]
fn empty_block_closes_on_one_line() {
    assert_eq!(Block::new(0).finish("bounded_by"), "bounded_by { }");
    assert_eq!(Block::new(2).finish("union"), "        union { }");
}

#[test]
fn block_lines_are_indented_one_level() {
    let mut block = Block::new(1);
    block.line("open");
    block.line("sturm");

    assert!(!block.is_empty());
    assert_eq!(block.finish("torus"), "    torus {\n        open\n        sturm\n    }");
}

#[test]
fn nested_values_wrap_in_a_named_block() {
    let mut block = Block::new(0);
    block
        .nested("clipped_by", &Value::node(sphere([0.0, 0.0, 0.0], 1.0)))
        .unwrap();

    assert_eq!(
        block.finish("box"),
        "box {\n    clipped_by {\n        sphere {\n            <0, 0, 0>, 1\n        }\n    }\n}"
    );
}

#[test]
fn verbatim_skips_quoting() {
    assert_eq!(verbatim(&Value::from("pigment { Red }")).unwrap(), "pigment { Red }");
    assert_eq!(verbatim(&Value::Sdl("T_Stone1".into())).unwrap(), "T_Stone1");
    assert_eq!(verbatim(&Value::Float(0.5)).unwrap(), "0.5");
}

///
/// Objects
///

#[test]
fn sphere_block() {
    assert_eq!(
        sphere([0.0, 1.0, 2.0], 2.0).to_sdl(0).unwrap(),
        "sphere {\n    <0, 1, 2>, 2\n}"
    );
}

#[test]
fn blob_sphere_carries_strength() {
    let mut s = sphere([0.0, 0.0, 0.0], 1.0);
    s.assign("strength", Slot::from(0.5)).unwrap();

    assert_eq!(s.to_sdl(0).unwrap(), "sphere {\n    <0, 0, 0>, 1, strength 0.5\n}");
}

#[test]
fn id_and_modifiers_follow_the_body() {
    let b = Box::new(
        Options::new()
            .set("corner1", [-1.0, -1.0, -1.0])
            .set("corner2", [1.0, 1.0, 1.0])
            .set("id", "crate")
            .set("texture", "&texture { T_Wood1 }")
            .set("hollow", true)
            .set("transform", "&rotate y*45"),
    )
    .unwrap();

    assert_eq!(
        b.to_sdl(0).unwrap(),
        "// crate\nbox {\n    <-1, -1, -1>, <1, 1, 1>\n    texture { T_Wood1 }\n    hollow\n    \
         rotate y*45\n}"
    );
}

#[test]
fn missing_required_fails_serialization() {
    let s = Sphere::new(Options::new().set("radius", 1.0)).unwrap();

    assert_eq!(
        s.to_sdl(0).unwrap_err(),
        Error::missing_required("Sphere", "center")
    );
}

#[test]
fn csg_nests_its_components() {
    let u = Union::new(Options::new().set(
        "components",
        vec![
            Value::node(sphere([0.0, 0.0, 0.0], 1.0)),
            Value::node(sphere([1.0, 0.0, 0.0], 1.0)),
        ],
    ))
    .unwrap();

    assert_eq!(
        u.to_sdl(0).unwrap(),
        "union {\n    sphere {\n        <0, 0, 0>, 1\n    }\n    sphere {\n        <1, 0, 0>, 1\n    \
         }\n}"
    );
}

#[test]
fn camera_writes_type_then_vectors() {
    let camera = Camera::new(
        Options::new()
            .set("type", "perspective")
            .set("location", [0.0, 2.0, -5.0])
            .set("lookAt", [0.0, 0.0, 0.0])
            .set("angle", 60.0),
    )
    .unwrap();

    assert_eq!(
        camera.to_sdl(0).unwrap(),
        "camera {\n    perspective\n    location <0, 2, -5>\n    angle 60\n    look_at <0, 0, 0>\n}"
    );
}

#[test]
fn light_source_point_has_no_type_keyword() {
    let light = LightSource::new(
        Options::new()
            .set("type", "point")
            .set("location", [10.0, 10.0, -10.0])
            .set("color", [1.0, 1.0, 1.0]),
    )
    .unwrap();

    assert_eq!(
        light.to_sdl(0).unwrap(),
        "light_source {\n    <10, 10, -10>, rgbft <1, 1, 1, 0, 0>\n}"
    );
}

#[test]
fn prism_maps_its_spline_keyword() {
    let prism = Prism::new(
        Options::new()
            .set("type", "linearSweep")
            .set("height1", 0.0)
            .set("height2", 1.0)
            .set(
                "points",
                vec![
                    Value::from([0.0, 0.0]),
                    Value::from([1.0, 0.0]),
                    Value::from([0.0, 1.0]),
                    Value::from([0.0, 0.0]),
                ],
            ),
    )
    .unwrap();

    let sdl = prism.to_sdl(0).unwrap();
    assert!(sdl.starts_with("prism {\n    linear_sweep\n    0, 1,\n    4,\n"));
    assert!(sdl.contains("<0, 0>, <1, 0>, <0, 1>, <0, 0>\n}"));
}

#[test]
fn polynomial_terms() {
    let poly = Polynomial::new(
        Options::new()
            .set("order", 2)
            .set(
                "coefficients",
                vec![Value::from([2.0, 0.0, 0.0, 1.0]), Value::from([0.0, 0.0, 0.0, -1.0])],
            ),
    )
    .unwrap();

    assert_eq!(
        poly.to_sdl(0).unwrap(),
        "polynomial {\n    2,\n    xyz(2, 0, 0):1,\n    xyz(0, 0, 0):-1\n}"
    );
}

#[test]
fn raw_attributes_pass_through() {
    let s = Sphere::new(
        Options::new()
            .set("center", "&Origin")
            .set("radius", "&R * 2"),
    )
    .unwrap();

    assert_eq!(s.to_sdl(0).unwrap(), "sphere {\n    Origin, R * 2\n}");
}

#[test]
fn union_can_disable_split() {
    let mut u = Union::new(
        Options::new().set("components", vec![Value::node(sphere([0.0, 0.0, 0.0], 1.0))]),
    )
    .unwrap();
    u.assign("splitUnion", Slot::from(false)).unwrap();

    assert!(u.to_sdl(0).unwrap().ends_with("    split_union off\n}"));
}

#[test]
fn inactive_objects_report_it() {
    let mut s = sphere([0.0, 0.0, 0.0], 1.0);
    assert!(s.is_active());

    s.assign("active", Slot::from(false)).unwrap();
    assert!(!s.is_active());
}

///
/// Settings
///

#[test]
fn global_settings_gate_sub_blocks() {
    let mut settings = GlobalSettings::new(Options::new().set("assumedGamma", 1.0)).unwrap();
    settings.assign("radBrightness", Slot::from(1.5)).unwrap();

    // radiosity settings are held back until the switch is on
    assert_eq!(settings.to_sdl(0).unwrap(), "global_settings {\n    assumed_gamma 1\n}");

    settings.assign("radiosity", Slot::from(true)).unwrap();
    assert_eq!(
        settings.to_sdl(0).unwrap(),
        "global_settings {\n    assumed_gamma 1\n    radiosity {\n        brightness 1.5\n    \
         }\n}"
    );
}

#[test]
fn image_options_write_ini_lines() {
    let options = ImageOptions::new(
        Options::new()
            .set("width", 800)
            .set("height", 600)
            .set("outputFileType", "png"),
    )
    .unwrap();

    assert_eq!(
        options.to_ini().unwrap(),
        "Width=800\nHeight=600\nOutput_To_File=on\nOutput_File_Type=N\n"
    );
}

#[test]
fn ini_keys_cover_every_image_option() {
    let desc = ImageOptions::descriptor();

    for rule in desc.mutable {
        assert!(
            INI_KEYS.iter().any(|(name, _)| *name == rule.name),
            "{} has no INI key",
            rule.name
        );
    }
}
