//! Coordinate and color classes. Each takes its components positionally.

use crate::prelude::*;

pub static VECTOR_XY: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "VECTOR_XY"),
    name: "VectorXY",
    description: Some("A two-dimensional point or direction."),
    mutable: &[float!("x").required(), float!("y").required()],
    constructor_args: Some("x: f64, y: f64"),
    constructor_body: Some("this.set_x(x)?;\nthis.set_y(y)?;"),
    ..EntityDescriptor::EMPTY
};

pub static VECTOR_UV: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "VECTOR_UV"),
    name: "VectorUV",
    description: Some("A point in the UV plane of a parametric surface."),
    mutable: &[float!("u").required(), float!("v").required()],
    constructor_args: Some("u: f64, v: f64"),
    constructor_body: Some("this.set_u(u)?;\nthis.set_v(v)?;"),
    ..EntityDescriptor::EMPTY
};

pub static VECTOR_XYZ: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "VECTOR_XYZ"),
    name: "VectorXYZ",
    description: Some("A three-dimensional point or direction."),
    mutable: &[
        float!("x").required(),
        float!("y").required(),
        float!("z").required(),
    ],
    constructor_args: Some("x: f64, y: f64, z: f64"),
    constructor_body: Some("this.set_x(x)?;\nthis.set_y(y)?;\nthis.set_z(z)?;"),
    ..EntityDescriptor::EMPTY
};

pub static VECTOR_XYZW: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "VECTOR_XYZW"),
    name: "VectorXYZW",
    description: Some("A four-dimensional vector, used by julia fractals and polynomials."),
    mutable: &[
        float!("x").required(),
        float!("y").required(),
        float!("z").required(),
        float!("w").required(),
    ],
    constructor_args: Some("x: f64, y: f64, z: f64, w: f64"),
    constructor_body: Some("this.set_x(x)?;\nthis.set_y(y)?;\nthis.set_z(z)?;\nthis.set_w(w)?;"),
    ..EntityDescriptor::EMPTY
};

pub static COLOR: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "COLOR"),
    name: "Color",
    description: Some(
        "An RGB color with optional filter and transmit channels. Channels are nominally in the \
         unit interval but may exceed it for over-bright lights.",
    ),
    mutable: &[
        float!("r").required().describe("Red channel."),
        float!("g").required().describe("Green channel."),
        float!("b").required().describe("Blue channel."),
        float!("f")
            .default_value(Constant::Float(0.0))
            .describe("Filter channel."),
        float!("t")
            .default_value(Constant::Float(0.0))
            .describe("Transmit channel."),
    ],
    constructor_args: Some("r: f64, g: f64, b: f64"),
    constructor_body: Some("this.set_r(r)?;\nthis.set_g(g)?;\nthis.set_b(b)?;"),
    ..EntityDescriptor::EMPTY
};
