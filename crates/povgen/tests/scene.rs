use povgen::{Options, Scene, Slot, Value, classes::*, prelude::Class};
use std::rc::Rc;

fn sphere(x: f64) -> Sphere {
    Sphere::new(
        Options::new()
            .set("center", [x, 0.0, 0.0])
            .set("radius", 1.0),
    )
    .unwrap()
}

#[test]
fn empty_scene_has_only_the_version() {
    let scene = Scene::new();

    assert!(scene.is_empty());
    assert_eq!(scene.to_sdl().unwrap(), "#version 3.7;\n");
}

#[test]
fn full_scene_in_order() {
    let settings = GlobalSettings::new(Options::new().set("assumedGamma", 1.0)).unwrap();
    let camera = Camera::new(
        Options::new()
            .set("type", "orthographic")
            .set("location", [0.0, 0.0, -10.0]),
    )
    .unwrap();

    let mut scene = Scene::new()
        .include("colors.inc")
        .global_settings(settings);
    scene.add(camera).add(sphere(0.0));

    assert_eq!(scene.len(), 2);
    assert_eq!(
        scene.to_sdl().unwrap(),
        "#version 3.7;\n\n\
         #include \"colors.inc\"\n\n\
         global_settings {\n    assumed_gamma 1\n}\n\n\
         camera {\n    orthographic\n    location <0, 0, -10>\n}\n\n\
         sphere {\n    <0, 0, 0>, 1\n}\n"
    );
}

#[test]
fn inactive_objects_are_skipped() {
    let mut hidden = sphere(5.0);
    hidden.assign("active", Slot::from(false)).unwrap();

    let mut scene = Scene::new();
    scene.add(sphere(0.0)).add(hidden);

    let sdl = scene.to_sdl().unwrap();
    assert!(sdl.contains("<0, 0, 0>, 1"));
    assert!(!sdl.contains("<5, 0, 0>"));
}

#[test]
fn shared_objects_can_be_reused() {
    let ball: Rc<dyn povgen::Node> = Rc::new(sphere(1.0));

    let mut scene = Scene::new();
    scene.add_shared(Rc::clone(&ball));

    let union = Union::new(
        Options::new().set("components", vec![Value::Node(ball), Value::node(sphere(2.0))]),
    )
    .unwrap();
    scene.add(union);

    let sdl = scene.to_sdl().unwrap();
    assert_eq!(sdl.matches("<1, 0, 0>, 1").count(), 2);
}

#[test]
fn missing_required_stops_the_scene() {
    let mut scene = Scene::new();
    scene.add(Sphere::new(Options::new().set("radius", 1.0)).unwrap());

    let err = scene.to_sdl().unwrap_err();
    assert_eq!(err.to_string(), "[Sphere]: center is a required attribute.");
    assert_eq!(Sphere::NAME, err.class());
}
