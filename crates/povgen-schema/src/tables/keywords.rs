//! Closed vocabularies accepted by string-valued attributes.

use povgen_core::sdl::Keyword;

pub static CAMERA_TYPES: &[Keyword] = &[
    Keyword::new("cylinder", "cylinder"),
    Keyword::new("fisheye", "fisheye"),
    Keyword::new("meshCamera", "mesh_camera"),
    Keyword::new("omnimax", "omnimax"),
    Keyword::new("orthographic", "orthographic"),
    Keyword::new("panoramic", "panoramic"),
    Keyword::new("perspective", "perspective"),
    Keyword::new("spherical", "spherical"),
    Keyword::new("ultraWideAngle", "ultra_wide_angle"),
];

pub static SPLINE_TYPES: &[Keyword] = &[
    Keyword::new("bezierSpline", "bezier_spline"),
    Keyword::new("cubicSpline", "cubic_spline"),
    Keyword::new("linearSpline", "linear_spline"),
    Keyword::new("quadraticSpline", "quadratic_spline"),
];

pub static PRISM_TYPES: &[Keyword] = &[
    Keyword::new("bezierSpline", "bezier_spline"),
    Keyword::new("conicSweep", "conic_sweep"),
    Keyword::new("cubicSpline", "cubic_spline"),
    Keyword::new("linearSpline", "linear_spline"),
    Keyword::new("linearSweep", "linear_sweep"),
    Keyword::new("quadraticSpline", "quadratic_spline"),
];

/// Spline types supported by `sphere_sweep`.
pub static INTERNAL_SPLINE_TYPES: &[Keyword] = &[
    Keyword::new("bSpline", "b_spline"),
    Keyword::new("cubicSpline", "cubic_spline"),
    Keyword::new("linearSpline", "linear_spline"),
];

pub static FONT_TYPES: &[Keyword] = &[
    Keyword::new("internal", "internal"),
    Keyword::new("ttc", "ttc"),
    Keyword::new("ttf", "ttf"),
];

/// Render output formats and their `Output_File_Type` codes.
pub static OUTPUT_FILE_TYPES: &[Keyword] = &[
    Keyword::new("bmp", "B"),
    Keyword::new("exr", "E"),
    Keyword::new("hdr", "H"),
    Keyword::new("jpeg", "J"),
    Keyword::new("png", "N"),
    Keyword::new("ppm", "P"),
    Keyword::new("sys", "S"),
    Keyword::new("targa", "T"),
    Keyword::new("targaCompressed", "C"),
];

pub static HF_TYPES: &[&str] = &[
    "exr", "gif", "hdr", "iff", "jpeg", "pgm", "png", "pot", "ppm", "sys", "tga", "tiff",
];

pub static JULIA_FRACTAL_TYPES: &[&str] = &[
    "hypercomplex:acos",
    "hypercomplex:acosh",
    "hypercomplex:asin",
    "hypercomplex:atan",
    "hypercomplex:atanh",
    "hypercomplex:cos",
    "hypercomplex:cosh",
    "hypercomplex:cube",
    "hypercomplex:exp",
    "hypercomplex:ln",
    "hypercomplex:pwr",
    "hypercomplex:reciprocal",
    "hypercomplex:sin",
    "hypercomplex:sinh",
    "hypercomplex:sqr",
    "hypercomplex:tan",
    "hypercomplex:tanh",
    "quaternion:cube",
    "quaternion:sqr",
];

pub static LIGHT_TYPES: &[&str] = &["cylinder", "point", "spotlight"];

pub static CHARSETS: &[&str] = &["ascii", "sys", "utf8"];
