//! Geometric primitives, lights and the camera.

use crate::{
    prelude::*,
    tables::keywords::{
        CAMERA_TYPES, FONT_TYPES, HF_TYPES, INTERNAL_SPLINE_TYPES, JULIA_FRACTAL_TYPES,
        LIGHT_TYPES, PRISM_TYPES, SPLINE_TYPES,
    },
};

// ----------------------------------------------------------------------------
// immutable sets
// ----------------------------------------------------------------------------

const fn flags(finite: bool, solid: bool, csg_operand: bool) -> [Immutable; 4] {
    [
        Immutable::new("finite", Constant::Bool(finite)),
        Immutable::new("solid", Constant::Bool(solid)),
        Immutable::new("csg", Constant::Bool(false)),
        Immutable::new("csgOperand", Constant::Bool(csg_operand)),
    ]
}

const FINITE_SOLID: &[Immutable] = &flags(true, true, false);
const FINITE_SURFACE: &[Immutable] = &flags(true, false, false);
const INFINITE_SOLID: &[Immutable] = &flags(false, true, false);
const LIGHT: &[Immutable] = &flags(true, false, true);

/// CSG results inherit finiteness from their operands.
const CSG: &[Immutable] = &[
    Immutable::new("finite", Constant::Null),
    Immutable::new("solid", Constant::Bool(true)),
    Immutable::new("csg", Constant::Bool(true)),
];

// ----------------------------------------------------------------------------
// compound validators
// ----------------------------------------------------------------------------

fn positive_angle(v: &Value) -> bool {
    above(v, 0.0)
        || (is_array_of_floats(v, 2, 2)
            && v.floats().is_some_and(|f| f.iter().all(|a| *a > 0.0)))
}

fn blur_samples(v: &Value) -> bool {
    is_array_of_floats(v, 1, 2) && v.floats().is_some_and(|f| f.iter().all(|s| *s >= 0.0))
}

// r and g within the unit interval, b zero
fn bokeh(v: Value) -> Result<Value, Value> {
    let color = to_vector(VectorKind::Color, v)?;
    let ok = color.as_vector().is_some_and(|c| {
        let unit = |x: Option<f64>| x.is_some_and(|x| (0.0..=1.0).contains(&x));
        unit(c.get("r")) && unit(c.get("g")) && c.get("b") == Some(0.0)
    });

    if ok { Ok(color) } else { Err(color) }
}

fn confidence(v: &Value) -> bool {
    at_least(v, 0.0) && below(v, 1.0)
}

fn max_trace(v: &Value) -> bool {
    is_int(v) || is_one_of(v, &["allIntersections"])
}

fn gamma(v: &Value) -> bool {
    is_float(v) || is_one_of(v, &["sRGB"])
}

fn container(v: &Value) -> bool {
    is_class(v, &["Sphere", "Box"])
}

// ----------------------------------------------------------------------------
// descriptors
// ----------------------------------------------------------------------------

pub static BICUBIC_PATCH: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "BICUBIC_PATCH"),
    name: "BicubicPatch",
    superclass: Some("Primitive"),
    immutable: FINITE_SURFACE,
    mutable: &[
        AttributeRule::new("type", "integer")
            .required()
            .check(|v| is_int_within(v, 0, 1), "type must be either 0 or 1.")
            .describe(
                "Type 0 reduces the memory used to store the patch at the cost of slower \
                 rendering. Type 1 does the reverse.",
            ),
        AttributeRule::new("points", "[VectorXYZ]")
            .required()
            .coerce(
                |v| to_vector_array(VectorKind::Xyz, 16, 16, v),
                "points must be an array of 16 VectorXYZ.",
            )
            .describe("The 16 control points of the 4 x 4 patch."),
        int!("uSteps").describe("Number of rows of triangles used to create the patch."),
        int!("vSteps").describe("Number of columns of triangles used to create the patch."),
        AttributeRule::new("flatness", "float")
            .check(
                |v| is_within(v, 0.0, 1.0),
                "flatness must be a float in the unit interval (0.0 - 1.0).",
            )
            .describe(
                "At 0 (the default) the patch is subdivided only as specified by uSteps and \
                 vSteps. Values up to 1.0 allow further automatic subdivision.",
            ),
    ],
    ..EntityDescriptor::EMPTY
};

pub static BLOB: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "BLOB"),
    name: "Blob",
    superclass: Some("Primitive"),
    immutable: FINITE_SOLID,
    mutable: &[
        AttributeRule::new("components", "[Sphere|Cylinder]")
            .required()
            .check(
                |v| is_array_of_class(v, &["Sphere", "Cylinder"], 1, usize::MAX),
                "components must be an array of Spheres and/or Cylinders.",
            )
            .describe("Spheres and cylinders, optionally with their strength attributes set."),
        float!("threshold").describe(
            "Field strength that distinguishes between the inside and outside of the blob.",
        ),
        sturm!(),
        hierarchy!(),
    ],
    ..EntityDescriptor::EMPTY
};

pub static BOX: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "BOX"),
    name: "Box",
    superclass: Some("Primitive"),
    immutable: FINITE_SOLID,
    mutable: &[
        xyz!("corner1")
            .required()
            .describe("The first of two opposite corners of the cube."),
        xyz!("corner2")
            .required()
            .describe("The second of two opposite corners of the cube."),
    ],
    ..EntityDescriptor::EMPTY
};

pub static CAMERA: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "CAMERA"),
    name: "Camera",
    superclass: Some("Primitive"),
    immutable: FINITE_SURFACE,
    mutable: &[
        AttributeRule::new("type", "string")
            .required()
            .check(
                |v| is_key(v, CAMERA_TYPES),
                "type must be one of cylinder, fisheye, meshCamera, omnimax, orthographic, \
                 panoramic, perspective, spherical, or ultraWideAngle.",
            )
            .describe("Defines the type of the camera."),
        AttributeRule::new("angle", "float|[float]")
            .check(
                positive_angle,
                "angle must be a float greater than zero or an array of two floats greater than \
                 zero.",
            )
            .describe(
                "Horizontal viewing angle in degrees. Spherical cameras accept a second element \
                 for the vertical angle.",
            ),
        float!("aperture").describe(
            "Together with blurSamples, enables simulated depth of field. Inversely \
             proportional to the depth of the zone of sharpness.",
        ),
        AttributeRule::new("blurSamples", "[float]")
            .check(
                blur_samples,
                "blurSamples must be an array of one or two floats greater than or equal to zero.",
            )
            .describe("Minimum and, optionally, maximum number of depth-of-field samples."),
        AttributeRule::new("bokeh", "Color")
            .coerce(bokeh, "bokeh must be a Color in the range <0, 0, 0> to <1, 1, 0>.")
            .describe("Specifies the bokeh color."),
        AttributeRule::new("confidence", "float")
            .check(
                confidence,
                "confidence must be a float in the range [0.0, 1.0).",
            )
            .describe(
                "Confidence interval that decides when enough depth-of-field samples have been \
                 taken. The default is 0.9.",
            ),
        AttributeRule::new("cylinderType", "integer")
            .check(
                |v| is_int_within(v, 1, 4),
                "cylinderType must be an integer in the range (1 - 4).",
            )
            .describe("Variant of the cylinder camera, 1 through 4."),
        xyz!("direction").describe(
            "Direction vector of the camera before it is moved by lookAt and any rotations.",
        ),
        xyz!("focalPoint")
            .describe("Point at which the image is perfectly focused when aperture is non-zero."),
        xyz!("location").describe("Specifies the location of the camera."),
        xyz!("lookAt").describe("Point the camera is aimed at."),
        xyz!("right").describe(
            "Along with up, determines the aspect ratio of the image. Defaults to <1.33, 0, 0>.",
        ),
        xyz!("sky").describe("Determines where up is for the camera before lookAt is applied."),
        xyz!("up").describe(
            "Along with right, determines the aspect ratio of the image. Defaults to <0, 1, 0>.",
        ),
        float!("variance").describe(
            "Smallest displayable color difference when aperture is non-zero. The default is \
             1/128.",
        ),
        float!("vertAngle")
            .describe("Vertical angle of the viewing area for the spherical camera."),
    ],
    ..EntityDescriptor::EMPTY
};

pub static CONE: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "CONE"),
    name: "Cone",
    superclass: Some("Primitive"),
    immutable: FINITE_SOLID,
    mutable: &[
        xyz!("basePoint")
            .required()
            .describe("Center of the cone's base end."),
        float!("baseRadius")
            .required()
            .describe("Radius of the cone's base end."),
        xyz!("capPoint")
            .required()
            .describe("Center of the cone's cap end."),
        float!("capRadius").required().describe(
            "Radius of the cone's cap end. When non-zero the shape is technically a frustum.",
        ),
        boolean!("open").describe("If true, the base and the cap are left open."),
    ],
    ..EntityDescriptor::EMPTY
};

pub static CUBIC: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "CUBIC"),
    name: "Cubic",
    superclass: Some("Primitive"),
    immutable: INFINITE_SOLID,
    mutable: &[
        AttributeRule::new("coefficients", "[float]")
            .required()
            .check(
                |v| is_array_of_floats(v, 20, 20),
                "coefficients must be an array of 20 floats.",
            )
            .describe("The 20 coefficients of a third-order polynomial."),
        sturm!(),
    ],
    ..EntityDescriptor::EMPTY
};

pub static CYLINDER: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "CYLINDER"),
    name: "Cylinder",
    superclass: Some("Primitive"),
    immutable: FINITE_SOLID,
    mutable: &[
        xyz!("basePoint")
            .required()
            .describe("Center of the base end of the cylinder."),
        xyz!("capPoint")
            .required()
            .describe("Center of the cap end of the cylinder."),
        float!("radius")
            .required()
            .describe("Radius of the cylinder."),
        boolean!("open").describe("If true, the cap and base planes are left open."),
        float!("strength").describe("Field strength when the cylinder is a blob component."),
    ],
    ..EntityDescriptor::EMPTY
};

pub static DIFFERENCE: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "DIFFERENCE"),
    name: "Difference",
    superclass: Some("Primitive"),
    immutable: CSG,
    mutable: &[
        AttributeRule::new("positiveComponent", "Primitive")
            .required()
            .check(
                |v| inherits_from(v, "Primitive"),
                "positiveComponent must be a Primitive.",
            )
            .describe("Base object from which the negative components are subtracted."),
        AttributeRule::new("negativeComponents", "[Primitive]")
            .required()
            .check(
                |v| is_array_of_base_class(v, "Primitive", 1, usize::MAX),
                "negativeComponents must be an array of Primitives.",
            )
            .describe("Objects subtracted from the positive component."),
    ],
    ..EntityDescriptor::EMPTY
};

pub static DISC: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "DISC"),
    name: "Disc",
    superclass: Some("Primitive"),
    immutable: FINITE_SURFACE,
    mutable: &[
        xyz!("center")
            .required()
            .describe("Center point of the disc."),
        xyz!("normal")
            .required()
            .describe("Normal, i.e. orientation, of the disc."),
        float!("radius").required().describe("Radius of the disc."),
        float!("holeRadius").describe("Radius of the hole in the center of the disc."),
    ],
    ..EntityDescriptor::EMPTY
};

pub static HEIGHT_FIELD: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "HEIGHT_FIELD"),
    name: "HeightField",
    superclass: Some("Primitive"),
    immutable: FINITE_SOLID,
    mutable: &[
        AttributeRule::new("source", "SDL|string")
            .required()
            .check(
                |v| is_sdl_function(v) || is_string(v),
                "source must be an SDL function or a filename.",
            )
            .describe("Either an SDL function or the path to a graphics file."),
        AttributeRule::new("hfType", "string")
            .check(
                |v| is_one_of(v, HF_TYPES),
                "hfType must be one of exr, gif, hdr, iff, jpeg, pgm, png, pot, ppm, sys, tga, or \
                 tiff.",
            )
            .describe("File format of the source image."),
        boolean!("smooth").describe("If true, surface normals are smoothed."),
        AttributeRule::new("waterLevel", "float")
            .check(
                |v| is_within(v, 0.0, 1.0),
                "waterLevel must be a float in the unit interval (0.0 - 1.0).",
            )
            .describe("Height below which the field is hidden. Defaults to 0.0."),
        hierarchy!(),
        AttributeRule::new("gamma", "float|string")
            .check(gamma, "gamma must be a float or 'sRGB'.")
            .describe("Gamma used to interpret the image file."),
        boolean!("premultiplied")
            .describe("Whether the file stores premultiplied associated alpha."),
    ],
    ..EntityDescriptor::EMPTY
};

pub static INTERSECTION: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "INTERSECTION"),
    name: "Intersection",
    superclass: Some("Primitive"),
    immutable: CSG,
    mutable: &[AttributeRule::new("components", "[Primitive]")
        .required()
        .check(
            |v| is_array_of_base_class(v, "Primitive", 1, usize::MAX),
            "components must be an array of Primitives.",
        )
        .describe("Objects whose intersection produces the result.")],
    ..EntityDescriptor::EMPTY
};

pub static ISO_SURFACE: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "ISO_SURFACE"),
    name: "IsoSurface",
    superclass: Some("Primitive"),
    immutable: FINITE_SOLID,
    mutable: &[
        AttributeRule::new("source", "SDL")
            .required()
            .check(is_sdl_function, "source must be an SDL function.")
            .describe("SDL function code which defines the surface."),
        AttributeRule::new("containedBy", "Sphere|Box")
            .check(container, "containedBy must be a Sphere or a Box.")
            .describe("Sphere or Box bounding the portion of the surface that is rendered."),
        float!("threshold")
            .describe("The surface appears where source equals this value. Defaults to 0."),
        float!("accuracy").describe("Subdivision accuracy; lower is more accurate."),
        float!("maxGradient").describe("Maximum gradient of the source function."),
        AttributeRule::new("evaluate", "[float]")
            .check(
                |v| is_array_of_floats(v, 3, 3),
                "evaluate must be an array of three floats.",
            )
            .describe("Guides the dynamic adaptation of maxGradient."),
        boolean!("open").describe(
            "If true, the boundaries where the surface meets containedBy are left open.",
        ),
        AttributeRule::new("maxTrace", "integer|string")
            .check(
                max_trace,
                "maxTrace must be either an integer or 'allIntersections'.",
            )
            .describe("Maximum number of intersections checked inside a CSG."),
    ],
    ..EntityDescriptor::EMPTY
};

pub static JULIA_FRACTAL: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "JULIA_FRACTAL"),
    name: "JuliaFractal",
    superclass: Some("Primitive"),
    immutable: FINITE_SOLID,
    mutable: &[
        AttributeRule::new("type", "string")
            .required()
            .check(
                |v| is_one_of(v, JULIA_FRACTAL_TYPES),
                "type must be a quaternion or hypercomplex julia fractal formula.",
            )
            .describe("Julia fractal formula, e.g. quaternion:sqr or hypercomplex:cube."),
        vector!("juliaParam", Xyzw, "VectorXYZW")
            .required()
            .describe("The standard julia parameter p in f(h) + p."),
        vector!("power", Xy, "VectorXY")
            .describe("X and Y exponents for the hypercomplex:pwr formula."),
        int!("maxIter").describe("Iterations used to find the surface. The default is 20."),
        int!("precision").describe("Accuracy of the surface search. The default is 20."),
        vector!("slice", Xyzw, "VectorXYZW")
            .describe("3D slice through 4D space. Defaults to <0, 0, 0, 1>."),
        float!("distance").describe("Distance of the slice from the origin. Defaults to 0."),
    ],
    ..EntityDescriptor::EMPTY
};

pub static LATHE: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "LATHE"),
    name: "Lathe",
    superclass: Some("Primitive"),
    immutable: FINITE_SOLID,
    mutable: &[
        AttributeRule::new("type", "string")
            .required()
            .check(
                |v| is_key(v, SPLINE_TYPES),
                "type must be one of bezierSpline, cubicSpline, linearSpline, or \
                 quadraticSpline.",
            )
            .describe("Spline type used to define the profile."),
        AttributeRule::new("points", "[VectorXY]")
            .required()
            .coerce(
                |v| to_vector_array(VectorKind::Xy, 2, usize::MAX, v),
                "points must be an array of two or more VectorXY.",
            )
            .describe("Points defining the spline."),
        sturm!(),
    ],
    ..EntityDescriptor::EMPTY
};

pub static LIGHT_SOURCE: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "LIGHT_SOURCE"),
    name: "LightSource",
    superclass: Some("Primitive"),
    immutable: LIGHT,
    mutable: &[
        xyz!("location")
            .required()
            .describe("Location of the light source."),
        color!("color")
            .required()
            .describe("Color of the light source."),
        AttributeRule::new("adaptive", "integer")
            .check(
                |v| is_int_within(v, 0, i64::MAX),
                "adaptive must be an integer greater than or equal to zero.",
            )
            .describe("Adaptive sampling level for area lights."),
        boolean!("areaIllumination")
            .describe("If true, full area light diffuse and specular illumination is enabled."),
        boolean!("areaLight").describe(
            "If true, the light becomes an area light and axis1, axis2, size1 and size2 must be \
             defined.",
        ),
        xyz!("axis1").describe("Orientation of the area light along its first axis."),
        xyz!("axis2").describe("Orientation of the area light along its second axis."),
        boolean!("circular")
            .describe("If true, the area light grid approximates a circle or ellipse."),
        AttributeRule::new("fadeDistance", "float")
            .check(
                |v| above(v, 0.0),
                "fadeDistance must be a float greater than zero.",
            )
            .describe("Distance at which the light is at full intensity."),
        float!("fadePower")
            .describe("Rate at which intensity decreases beyond fadeDistance."),
        AttributeRule::new("falloff", "float")
            .check(|v| below(v, 90.0), "falloff must be a float less than 90.")
            .describe("Outer cone within which a spotlight fades to nothing."),
        boolean!("jitter")
            .describe("If true, area light positions are randomly moved to reduce banding."),
        AttributeRule::new("looksLike", "Primitive")
            .check(
                |v| inherits_from(v, "Primitive"),
                "looksLike must be a Primitive.",
            )
            .describe("Object acting as the physical source of the light."),
        boolean!("mediaAttenuation")
            .describe("If true, the light is attenuated by passing through media."),
        boolean!("mediaInteraction")
            .describe("If true (the default), the light interacts with media."),
        boolean!("orient")
            .describe("If true, the area light is oriented toward every surface tested."),
        boolean!("parallel")
            .describe("If true, all light rays are parallel to the line to pointAt."),
        xyz!("pointAt").describe("Point a spotlight is aimed at."),
        AttributeRule::new("projectedThrough", "Primitive")
            .check(
                |v| inherits_from(v, "Primitive"),
                "projectedThrough must be a Primitive.",
            )
            .describe("Object through which the light rays must pass to be visible."),
        AttributeRule::new("radius", "float")
            .check(|v| below(v, 90.0), "radius must be a float less than 90.")
            .describe("Angle of the cone of light produced by a spotlight."),
        boolean!("shadowless")
            .describe("If true, the light neither casts shadows nor causes highlights."),
        AttributeRule::new("size1", "integer")
            .check(
                |v| is_int_within(v, 0, i64::MAX),
                "size1 must be an integer greater than or equal to zero.",
            )
            .describe("Number of rows of lights in an area light."),
        AttributeRule::new("size2", "integer")
            .check(
                |v| is_int_within(v, 0, i64::MAX),
                "size2 must be an integer greater than or equal to zero.",
            )
            .describe("Number of columns of lights in an area light."),
        AttributeRule::new("tightness", "float")
            .check(
                |v| is_within(v, 0.0, 100.0),
                "tightness must be a float in the range (0 - 100).",
            )
            .describe("Modifies the relationship between radius and falloff."),
        AttributeRule::new("type", "string")
            .required()
            .check(
                |v| is_one_of(v, LIGHT_TYPES),
                "type must be one of cylinder, point, or spotlight.",
            )
            .describe("Type of the light."),
    ],
    ..EntityDescriptor::EMPTY
};

pub static MERGE: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "MERGE"),
    name: "Merge",
    superclass: Some("Primitive"),
    immutable: CSG,
    mutable: &[AttributeRule::new("components", "[Primitive]")
        .required()
        .check(
            |v| is_array_of_base_class(v, "Primitive", 1, usize::MAX),
            "components must be an array of Primitives.",
        )
        .describe("Objects to merge.")],
    ..EntityDescriptor::EMPTY
};

pub static MESH: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "MESH"),
    name: "Mesh",
    superclass: Some("Primitive"),
    immutable: FINITE_SURFACE,
    mutable: &[
        AttributeRule::new("triangles", "[Triangle]")
            .required()
            .check(
                |v| is_array_of_class(v, &["Triangle"], 1, usize::MAX),
                "triangles must be an array of Triangles.",
            )
            .describe("The triangles comprising the mesh."),
        xyz!("insideVector")
            .describe("Direction used to determine the inside of a closed mesh."),
        hierarchy!(),
    ],
    ..EntityDescriptor::EMPTY
};

pub static OVUS: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "OVUS"),
    name: "Ovus",
    superclass: Some("Primitive"),
    immutable: FINITE_SOLID,
    mutable: &[
        float!("bottomRadius")
            .required()
            .describe("Radius of the bottom sphere."),
        float!("topRadius")
            .required()
            .describe("Radius of the top sphere."),
    ],
    ..EntityDescriptor::EMPTY
};

pub static PARAMETRIC: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "PARAMETRIC"),
    name: "Parametric",
    superclass: Some("Primitive"),
    immutable: FINITE_SOLID,
    mutable: &[
        AttributeRule::new("funcX", "SDL")
            .required()
            .check(is_sdl_function, "funcX must be an SDL function.")
            .describe("Determines the X coordinate of the surface."),
        AttributeRule::new("funcY", "SDL")
            .required()
            .check(is_sdl_function, "funcY must be an SDL function.")
            .describe("Determines the Y coordinate of the surface."),
        AttributeRule::new("funcZ", "SDL")
            .required()
            .check(is_sdl_function, "funcZ must be an SDL function.")
            .describe("Determines the Z coordinate of the surface."),
        vector!("uv1", Uv, "VectorUV")
            .required()
            .describe("One corner of the UV plane the surface is mapped to."),
        vector!("uv2", Uv, "VectorUV")
            .required()
            .describe("The other corner of the UV plane."),
        AttributeRule::new("containedBy", "Sphere|Box")
            .check(container, "containedBy must be a Sphere or Box.")
            .describe("Sphere or Box bounding the rendered portion of the surface."),
        float!("maxGradient").describe("Maximum gradient of the surface functions."),
        float!("accuracy").describe("Subdivision accuracy; lower is more accurate."),
        AttributeRule::new("precomputeDepth", "integer")
            .check(
                |v| is_int_within(v, 0, 20),
                "precomputeDepth must be an integer in the range (0 - 20).",
            )
            .describe("Precalculation depth, trading memory for speed."),
        boolean!("precomputeX").describe("Precalculate the X coordinate during subdivision."),
        boolean!("precomputeY").describe("Precalculate the Y coordinate during subdivision."),
        boolean!("precomputeZ").describe("Precalculate the Z coordinate during subdivision."),
    ],
    ..EntityDescriptor::EMPTY
};

pub static PLANE: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "PLANE"),
    name: "Plane",
    superclass: Some("Primitive"),
    immutable: INFINITE_SOLID,
    mutable: &[
        xyz!("normal")
            .required()
            .describe("Surface normal of the plane."),
        float!("distance")
            .required()
            .describe("Distance of the plane from the origin along the normal."),
    ],
    ..EntityDescriptor::EMPTY
};

pub static POLY: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "POLY"),
    name: "Poly",
    superclass: Some("Primitive"),
    immutable: INFINITE_SOLID,
    mutable: &[
        AttributeRule::new("order", "integer")
            .required()
            .check(
                |v| is_int_within(v, 2, 35),
                "order must be an integer in the range (2 - 35).",
            )
            .describe("Order of the polynomial."),
        AttributeRule::new("coefficients", "[float]")
            .required()
            .check(
                |v| is_array_of_floats(v, 1, usize::MAX),
                "coefficients must be an array of floats.",
            )
            .describe(
                "Coefficients of the polynomial; ((order + 1) * (order + 2) * (order + 3)) / 6 \
                 are required.",
            ),
        sturm!(),
    ],
    ..EntityDescriptor::EMPTY
};

pub static POLYGON: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "POLYGON"),
    name: "Polygon",
    superclass: Some("Primitive"),
    immutable: FINITE_SURFACE,
    mutable: &[AttributeRule::new("points", "[VectorXY]")
        .required()
        .coerce(
            |v| to_vector_array(VectorKind::Xy, 3, usize::MAX, v),
            "points must be an array of three or more VectorXY.",
        )
        .describe("Vertices of the polygon; repeat the first point to close a sub-polygon.")],
    ..EntityDescriptor::EMPTY
};

pub static POLYNOMIAL: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "POLYNOMIAL"),
    name: "Polynomial",
    superclass: Some("Primitive"),
    immutable: INFINITE_SOLID,
    mutable: &[
        AttributeRule::new("order", "integer")
            .required()
            .check(
                |v| is_int_within(v, 2, 35),
                "order must be an integer in the range (2 - 35).",
            )
            .describe("Order of the polynomial."),
        AttributeRule::new("coefficients", "[VectorXYZW]")
            .required()
            .coerce(
                |v| to_vector_array(VectorKind::Xyzw, 1, usize::MAX, v),
                "coefficients must be an array of VectorXYZW.",
            )
            .describe("Terms as <x power, y power, z power, coefficient>."),
        sturm!(),
    ],
    ..EntityDescriptor::EMPTY
};

pub static PRISM: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "PRISM"),
    name: "Prism",
    superclass: Some("Primitive"),
    immutable: FINITE_SOLID,
    mutable: &[
        AttributeRule::new("type", "string")
            .required()
            .check(
                |v| is_key(v, PRISM_TYPES),
                "type must be one of bezierSpline, conicSweep, cubicSpline, linearSpline, \
                 linearSweep, or quadraticSpline.",
            )
            .describe("Spline or sweep type used for the prism."),
        float!("height1")
            .required()
            .describe("Y coordinate of the top of the prism."),
        float!("height2")
            .required()
            .describe("Y coordinate of the bottom of the prism."),
        AttributeRule::new("points", "[VectorXY]")
            .required()
            .coerce(
                |v| to_vector_array(VectorKind::Xy, 0, usize::MAX, v),
                "points must be an array of VectorXY.",
            )
            .describe("Spline points swept along the Y axis."),
        boolean!("open").describe("If true, the top and bottom of the prism are left open."),
        sturm!(),
    ],
    ..EntityDescriptor::EMPTY
};

pub static QUADRIC: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "QUADRIC"),
    name: "Quadric",
    superclass: Some("Primitive"),
    immutable: INFINITE_SOLID,
    mutable: &[AttributeRule::new("coefficients", "[float]")
        .required()
        .check(
            |v| is_array_of_floats(v, 10, 10),
            "coefficients must be an array of 10 floats.",
        )
        .describe("The 10 coefficients of a second-order polynomial.")],
    ..EntityDescriptor::EMPTY
};

pub static QUARTIC: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "QUARTIC"),
    name: "Quartic",
    superclass: Some("Primitive"),
    immutable: INFINITE_SOLID,
    mutable: &[
        AttributeRule::new("coefficients", "[float]")
            .required()
            .check(
                |v| is_array_of_floats(v, 35, 35),
                "coefficients must be an array of 35 floats.",
            )
            .describe("The 35 coefficients of a fourth-order polynomial."),
        sturm!(),
    ],
    ..EntityDescriptor::EMPTY
};

pub static SPHERE: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "SPHERE"),
    name: "Sphere",
    superclass: Some("Primitive"),
    immutable: FINITE_SOLID,
    mutable: &[
        xyz!("center")
            .required()
            .describe("Center point of the sphere."),
        float!("radius")
            .required()
            .describe("Radius of the sphere."),
        float!("strength").describe("Field strength when the sphere is a blob component."),
    ],
    ..EntityDescriptor::EMPTY
};

pub static SPHERE_SWEEP: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "SPHERE_SWEEP"),
    name: "SphereSweep",
    superclass: Some("Primitive"),
    immutable: FINITE_SOLID,
    mutable: &[
        AttributeRule::new("type", "string")
            .required()
            .check(
                |v| is_key(v, INTERNAL_SPLINE_TYPES),
                "type must be one of bSpline, cubicSpline, or linearSpline.",
            )
            .describe("Spline type used for the sweep."),
        AttributeRule::new("spheres", "[Sphere]")
            .required()
            .check(
                |v| is_array_of_class(v, &["Sphere"], 2, usize::MAX),
                "spheres must be an array of two or more Spheres.",
            )
            .describe("Spheres whose positions and radii are interpolated."),
        float!("tolerance")
            .describe("Depth tolerance for intersection calculations. Defaults to 0.000001."),
    ],
    ..EntityDescriptor::EMPTY
};

pub static SUPERELLIPSOID: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "SUPERELLIPSOID"),
    name: "Superellipsoid",
    superclass: Some("Primitive"),
    immutable: FINITE_SOLID,
    mutable: &[
        AttributeRule::new("e", "float")
            .required()
            .check(|v| above(v, 0.0), "e must be a float greater than zero.")
            .describe("The east-west exponent."),
        AttributeRule::new("n", "float")
            .required()
            .check(|v| above(v, 0.0), "n must be a float greater than zero.")
            .describe("The north-south exponent."),
    ],
    ..EntityDescriptor::EMPTY
};

pub static SOR: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "SOR"),
    name: "Sor",
    superclass: Some("Primitive"),
    description: Some("Surface of revolution."),
    immutable: FINITE_SOLID,
    mutable: &[
        AttributeRule::new("points", "[VectorXY]")
            .required()
            .coerce(
                |v| to_vector_array(VectorKind::Xy, 2, usize::MAX, v),
                "points must be an array of two or more VectorXY.",
            )
            .describe("Points of the open curve rotated about the Y axis."),
        boolean!("open").describe("If true, the base and the cap are left open."),
        sturm!(),
    ],
    ..EntityDescriptor::EMPTY
};

pub static TEXT: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "TEXT"),
    name: "Text",
    superclass: Some("Primitive"),
    immutable: FINITE_SOLID,
    mutable: &[
        AttributeRule::new("fontType", "string")
            .required()
            .check(
                |v| is_key(v, FONT_TYPES),
                "fontType must be one of internal, ttc, or ttf.",
            )
            .describe("File format of the font."),
        string!("font").required().describe("Filename of the font."),
        string!("displayText")
            .required()
            .describe("The text to be rendered."),
        float!("thickness")
            .required()
            .describe("Front-to-back thickness of the extruded characters."),
        float!("offset")
            .required()
            .describe("Extra space placed between characters, 0 for none."),
    ],
    ..EntityDescriptor::EMPTY
};

pub static TORUS: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "TORUS"),
    name: "Torus",
    superclass: Some("Primitive"),
    immutable: FINITE_SOLID,
    mutable: &[
        float!("majorRadius")
            .required()
            .describe("Radius of the circle along which the cross section is swept."),
        float!("minorRadius")
            .required()
            .describe("Radius of the cross section."),
        sturm!(),
    ],
    ..EntityDescriptor::EMPTY
};

pub static TRIANGLE: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "TRIANGLE"),
    name: "Triangle",
    superclass: Some("Primitive"),
    description: Some(
        "The Triangle class combines POV-Ray's triangle and smooth_triangle based on the \
         supplied parameters and the smooth flag.",
    ),
    immutable: FINITE_SURFACE,
    mutable: &[
        xyz!("corner1")
            .required()
            .describe("First corner of the triangle."),
        xyz!("corner2")
            .required()
            .describe("Second corner of the triangle."),
        xyz!("corner3")
            .required()
            .describe("Third corner of the triangle."),
        boolean!("smooth").describe(
            "If true and normal1 through normal3 are defined, the triangle is output as a \
             smooth triangle.",
        ),
        xyz!("normal1").describe("Surface normal at corner1."),
        xyz!("normal2").describe("Surface normal at corner2."),
        xyz!("normal3").describe("Surface normal at corner3."),
        AttributeRule::new("textures", "[integer]")
            .check(
                |v| is_array_of_ints(v, 1, 3),
                "textures must be an array of one to three integers.",
            )
            .describe("Texture indices for a triangle inside a mesh."),
    ],
    ..EntityDescriptor::EMPTY
};

pub static UNION: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "UNION"),
    name: "Union",
    superclass: Some("Primitive"),
    immutable: CSG,
    mutable: &[
        AttributeRule::new("components", "[Primitive]")
            .required()
            .check(
                |v| is_array_of_base_class(v, "Primitive", 1, usize::MAX),
                "components must be an array of Primitives.",
            )
            .describe("Objects combined by the union."),
        boolean!("splitUnion").describe(
            "If the composite object lacks holes, setting this to false can speed up \
             rendering. Defaults to true.",
        ),
    ],
    ..EntityDescriptor::EMPTY
};
