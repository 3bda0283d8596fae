//! One writer per object class.

use super::{Block, angle_list, attr, emit, emit_flag, flag, modifiers, on_off, required, verbatim, with_id};
use crate::classes::*;
use povgen_core::{
    Error, Value,
    sdl::{Keyword, float, keyword},
};
use povgen_schema::Class;
use povgen_schema::tables::keywords::{
    CAMERA_TYPES, FONT_TYPES, INTERNAL_SPLINE_TYPES, PRISM_TYPES, SPLINE_TYPES,
};

// ----------------------------------------------------------------------------
// shared pieces
// ----------------------------------------------------------------------------

/// Append the inherited modifiers, close the block and prefix the id.
fn close(obj: &Primitive, mut block: Block, name: &str, stops: usize) -> Result<String, Error> {
    modifiers(obj, &mut block)?;
    with_id(obj, stops, block.finish(name))
}

/// Close with only the transform, for objects that take no material.
fn close_bare(obj: &Primitive, mut block: Block, name: &str, stops: usize) -> Result<String, Error> {
    if let Some(v) = attr(obj, "transform") {
        block.line(verbatim(&v)?);
    }
    with_id(obj, stops, block.finish(name))
}

/// Scene keyword for a keyed attribute; raw fragments pass through.
fn keyed(table: &[Keyword], value: &Value) -> Result<String, Error> {
    match value {
        Value::Str(key) => Ok(keyword(table, key).unwrap_or(key.as_str()).to_string()),
        other => verbatim(other),
    }
}

fn join(items: &[Value], sep: &str) -> Result<String, Error> {
    Ok(items
        .iter()
        .map(verbatim)
        .collect::<Result<Vec<_>, _>>()?
        .join(sep))
}

/// Point lists, `per_row` to a line, optionally preceded by their count.
/// Raw fragments are written as given.
fn points(block: &mut Block, value: &Value, per_row: usize, counted: bool) -> Result<(), Error> {
    let Some(items) = value.as_list() else {
        block.line(verbatim(value)?);
        return Ok(());
    };

    if counted {
        block.line(format!("{},", items.len()));
    }

    let rows: Vec<&[Value]> = items.chunks(per_row.max(1)).collect();
    for (i, row) in rows.iter().enumerate() {
        let sep = if i + 1 < rows.len() { "," } else { "" };
        block.line(format!("{}{sep}", join(row, ", ")?));
    }

    Ok(())
}

fn components(block: &mut Block, value: &Value) -> Result<(), Error> {
    block.value(value)
}

/// `sturm` and `hierarchy` trailers.
fn solver_flags<C: Class>(obj: &C, block: &mut Block) {
    emit_flag(obj, block, "sturm", "sturm");
    if let Some(h) = flag(obj, "hierarchy") {
        block.line(format!("hierarchy {}", on_off(h)));
    }
}

fn with_strength<C: Class>(obj: &C, line: String) -> Result<String, Error> {
    match attr(obj, "strength") {
        Some(s) => Ok(format!("{line}, strength {}", verbatim(&s)?)),
        None => Ok(line),
    }
}

// ----------------------------------------------------------------------------
// objects
// ----------------------------------------------------------------------------

pub fn bicubic_patch(obj: &BicubicPatch, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(format!("type {}", verbatim(&required(obj, "type")?)?));
    emit(obj, &mut b, "flatness", "flatness")?;
    emit(obj, &mut b, "uSteps", "u_steps")?;
    emit(obj, &mut b, "vSteps", "v_steps")?;
    points(&mut b, &required(obj, "points")?, 4, false)?;

    close(obj, b, "bicubic_patch", stops)
}

pub fn blob(obj: &Blob, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    emit(obj, &mut b, "threshold", "threshold")?;
    components(&mut b, &required(obj, "components")?)?;
    solver_flags(obj, &mut b);

    close(obj, b, "blob", stops)
}

pub fn r#box(obj: &Box, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(format!(
        "{}, {}",
        verbatim(&required(obj, "corner1")?)?,
        verbatim(&required(obj, "corner2")?)?
    ));

    close(obj, b, "box", stops)
}

pub fn camera(obj: &Camera, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    let kind = keyed(CAMERA_TYPES, &required(obj, "type")?)?;
    if kind == "cylinder" {
        let variant = attr(obj, "cylinderType").map_or(Ok("1".to_string()), |v| verbatim(&v))?;
        b.line(format!("cylinder {variant}"));
    } else {
        b.line(kind);
    }

    for (name, kw) in [
        ("location", "location"),
        ("direction", "direction"),
        ("right", "right"),
        ("up", "up"),
        ("sky", "sky"),
    ] {
        emit(obj, &mut b, name, kw)?;
    }

    // a second angle, from either source, is the vertical angle
    if let Some(angle) = attr(obj, "angle") {
        let mut parts = match angle.floats() {
            Some(floats) => floats.into_iter().map(float).collect(),
            None => vec![verbatim(&angle)?],
        };
        if parts.len() == 1
            && let Some(vert) = attr(obj, "vertAngle")
        {
            parts.push(verbatim(&vert)?);
        }
        b.line(format!("angle {}", parts.join(" ")));
    }

    emit(obj, &mut b, "lookAt", "look_at")?;
    emit(obj, &mut b, "focalPoint", "focal_point")?;
    emit(obj, &mut b, "aperture", "aperture")?;
    if let Some(samples) = attr(obj, "blurSamples") {
        b.line(format!("blur_samples {}", verbatim(&samples)?));
    }
    emit(obj, &mut b, "confidence", "confidence")?;
    emit(obj, &mut b, "variance", "variance")?;
    if let Some(bokeh) = attr(obj, "bokeh") {
        b.line(format!("bokeh {{ pigment {{ {} }} }}", verbatim(&bokeh)?));
    }

    close_bare(obj, b, "camera", stops)
}

pub fn cone(obj: &Cone, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(format!(
        "{}, {}, {}, {}",
        verbatim(&required(obj, "basePoint")?)?,
        verbatim(&required(obj, "baseRadius")?)?,
        verbatim(&required(obj, "capPoint")?)?,
        verbatim(&required(obj, "capRadius")?)?
    ));
    emit_flag(obj, &mut b, "open", "open");

    close(obj, b, "cone", stops)
}

pub fn cubic(obj: &Cubic, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(angle_list(&required(obj, "coefficients")?)?);
    solver_flags(obj, &mut b);

    close(obj, b, "cubic", stops)
}

pub fn cylinder(obj: &Cylinder, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    let line = format!(
        "{}, {}, {}",
        verbatim(&required(obj, "basePoint")?)?,
        verbatim(&required(obj, "capPoint")?)?,
        verbatim(&required(obj, "radius")?)?
    );
    b.line(with_strength(obj, line)?);
    emit_flag(obj, &mut b, "open", "open");

    close(obj, b, "cylinder", stops)
}

pub fn difference(obj: &Difference, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.value(&required(obj, "positiveComponent")?)?;
    components(&mut b, &required(obj, "negativeComponents")?)?;

    close(obj, b, "difference", stops)
}

pub fn disc(obj: &Disc, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    let mut line = format!(
        "{}, {}, {}",
        verbatim(&required(obj, "center")?)?,
        verbatim(&required(obj, "normal")?)?,
        verbatim(&required(obj, "radius")?)?
    );
    if let Some(hole) = attr(obj, "holeRadius") {
        line = format!("{line}, {}", verbatim(&hole)?);
    }
    b.line(line);

    close(obj, b, "disc", stops)
}

pub fn height_field(obj: &HeightField, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    let source = required(obj, "source")?;
    match (&source, attr(obj, "hfType")) {
        // a file name needs its format keyword
        (Value::Str(file), hf_type) if !file.trim_start().starts_with("function") => {
            let kind = match hf_type {
                Some(t) => verbatim(&t)?,
                None => file
                    .rsplit_once('.')
                    .map_or("png", |(_, ext)| ext)
                    .to_ascii_lowercase(),
            };
            b.line(format!("{kind} {}", source.to_sdl(0)?));
        }
        _ => b.line(verbatim(&source)?),
    }

    emit_flag(obj, &mut b, "smooth", "smooth");
    emit(obj, &mut b, "waterLevel", "water_level")?;
    if let Some(h) = flag(obj, "hierarchy") {
        b.line(format!("hierarchy {}", on_off(h)));
    }
    if let Some(gamma) = attr(obj, "gamma") {
        let gamma = match gamma.as_str() {
            Some("sRGB") => "srgb".to_string(),
            _ => verbatim(&gamma)?,
        };
        b.line(format!("gamma {gamma}"));
    }
    if let Some(p) = flag(obj, "premultiplied") {
        b.line(format!("premultiplied {}", on_off(p)));
    }

    close(obj, b, "height_field", stops)
}

pub fn intersection(obj: &Intersection, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);
    components(&mut b, &required(obj, "components")?)?;

    close(obj, b, "intersection", stops)
}

pub fn iso_surface(obj: &IsoSurface, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(verbatim(&required(obj, "source")?)?);
    if let Some(container) = attr(obj, "containedBy") {
        b.nested("contained_by", &container)?;
    }
    emit(obj, &mut b, "threshold", "threshold")?;
    emit(obj, &mut b, "accuracy", "accuracy")?;
    emit(obj, &mut b, "maxGradient", "max_gradient")?;
    emit(obj, &mut b, "evaluate", "evaluate")?;
    emit_flag(obj, &mut b, "open", "open");
    if let Some(trace) = attr(obj, "maxTrace") {
        match trace.as_str() {
            Some("allIntersections") => b.line("all_intersections"),
            _ => b.line(format!("max_trace {}", verbatim(&trace)?)),
        }
    }

    close(obj, b, "isosurface", stops)
}

pub fn julia_fractal(obj: &JuliaFractal, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(verbatim(&required(obj, "juliaParam")?)?);

    let kind = required(obj, "type")?;
    match kind.as_str().and_then(|k| k.split_once(':')) {
        Some((algebra, func)) => {
            b.line(algebra);
            match (func, attr(obj, "power").and_then(|p| p.as_vector().cloned())) {
                ("pwr", Some(power)) => {
                    let parts: Vec<String> = power.components().iter().map(|c| float(*c)).collect();
                    b.line(format!("pwr {}", parts.join(", ")));
                }
                _ => b.line(func),
            }
        }
        None => b.line(verbatim(&kind)?),
    }

    emit(obj, &mut b, "maxIter", "max_iteration")?;
    emit(obj, &mut b, "precision", "precision")?;
    if let Some(slice) = attr(obj, "slice") {
        let distance = attr(obj, "distance").map_or(Ok("0".to_string()), |d| verbatim(&d))?;
        b.line(format!("slice {}, {distance}", verbatim(&slice)?));
    }

    close(obj, b, "julia_fractal", stops)
}

pub fn lathe(obj: &Lathe, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(keyed(SPLINE_TYPES, &required(obj, "type")?)?);
    points(&mut b, &required(obj, "points")?, 4, true)?;
    solver_flags(obj, &mut b);

    close(obj, b, "lathe", stops)
}

pub fn light_source(obj: &LightSource, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(format!(
        "{}, {}",
        verbatim(&required(obj, "location")?)?,
        verbatim(&required(obj, "color")?)?
    ));

    let kind = required(obj, "type")?;
    match kind.as_str() {
        Some("point") => {}
        Some(other) => b.line(other),
        None => b.line(verbatim(&kind)?),
    }

    emit_flag(obj, &mut b, "parallel", "parallel");
    emit(obj, &mut b, "pointAt", "point_at")?;
    emit(obj, &mut b, "radius", "radius")?;
    emit(obj, &mut b, "falloff", "falloff")?;
    emit(obj, &mut b, "tightness", "tightness")?;

    if flag(obj, "areaLight") == Some(true) {
        let part = |name: &str| required(obj, name).and_then(|v| verbatim(&v));
        b.line(format!(
            "area_light {}, {}, {}, {}",
            part("axis1")?,
            part("axis2")?,
            part("size1")?,
            part("size2")?
        ));
        emit(obj, &mut b, "adaptive", "adaptive")?;
        emit_flag(obj, &mut b, "jitter", "jitter");
        emit_flag(obj, &mut b, "circular", "circular");
        emit_flag(obj, &mut b, "orient", "orient");
    }
    if let Some(on) = flag(obj, "areaIllumination") {
        b.line(format!("area_illumination {}", on_off(on)));
    }

    emit(obj, &mut b, "fadeDistance", "fade_distance")?;
    emit(obj, &mut b, "fadePower", "fade_power")?;
    if let Some(on) = flag(obj, "mediaAttenuation") {
        b.line(format!("media_attenuation {}", on_off(on)));
    }
    if let Some(on) = flag(obj, "mediaInteraction") {
        b.line(format!("media_interaction {}", on_off(on)));
    }
    emit_flag(obj, &mut b, "shadowless", "shadowless");

    if let Some(shape) = attr(obj, "looksLike") {
        b.nested("looks_like", &shape)?;
    }
    if let Some(shape) = attr(obj, "projectedThrough") {
        b.nested("projected_through", &shape)?;
    }

    close_bare(obj, b, "light_source", stops)
}

pub fn merge(obj: &Merge, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);
    components(&mut b, &required(obj, "components")?)?;

    close(obj, b, "merge", stops)
}

pub fn mesh(obj: &Mesh, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    components(&mut b, &required(obj, "triangles")?)?;
    emit(obj, &mut b, "insideVector", "inside_vector")?;
    if let Some(h) = flag(obj, "hierarchy") {
        b.line(format!("hierarchy {}", on_off(h)));
    }

    close(obj, b, "mesh", stops)
}

pub fn ovus(obj: &Ovus, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(format!(
        "{}, {}",
        verbatim(&required(obj, "bottomRadius")?)?,
        verbatim(&required(obj, "topRadius")?)?
    ));

    close(obj, b, "ovus", stops)
}

pub fn parametric(obj: &Parametric, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(format!("{},", verbatim(&required(obj, "funcX")?)?));
    b.line(format!("{},", verbatim(&required(obj, "funcY")?)?));
    b.line(verbatim(&required(obj, "funcZ")?)?);
    b.line(format!(
        "{}, {}",
        verbatim(&required(obj, "uv1")?)?,
        verbatim(&required(obj, "uv2")?)?
    ));

    if let Some(container) = attr(obj, "containedBy") {
        b.nested("contained_by", &container)?;
    }
    emit(obj, &mut b, "maxGradient", "max_gradient")?;
    emit(obj, &mut b, "accuracy", "accuracy")?;

    if let Some(depth) = attr(obj, "precomputeDepth") {
        let axes: Vec<&str> = [("precomputeX", "x"), ("precomputeY", "y"), ("precomputeZ", "z")]
            .into_iter()
            .filter(|(name, _)| flag(obj, name) == Some(true))
            .map(|(_, axis)| axis)
            .collect();
        if !axes.is_empty() {
            b.line(format!("precompute {}, {}", verbatim(&depth)?, axes.join(", ")));
        }
    }

    close(obj, b, "parametric", stops)
}

pub fn plane(obj: &Plane, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(format!(
        "{}, {}",
        verbatim(&required(obj, "normal")?)?,
        verbatim(&required(obj, "distance")?)?
    ));

    close(obj, b, "plane", stops)
}

pub fn poly(obj: &Poly, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(format!(
        "{}, {}",
        verbatim(&required(obj, "order")?)?,
        angle_list(&required(obj, "coefficients")?)?
    ));
    solver_flags(obj, &mut b);

    close(obj, b, "poly", stops)
}

pub fn polygon(obj: &Polygon, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);
    points(&mut b, &required(obj, "points")?, 4, true)?;

    close(obj, b, "polygon", stops)
}

pub fn polynomial(obj: &Polynomial, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(format!("{},", verbatim(&required(obj, "order")?)?));

    // one `xyz(i, j, k):c` term per line
    let coefficients = required(obj, "coefficients")?;
    match coefficients.as_list() {
        Some(terms) => {
            for (i, term) in terms.iter().enumerate() {
                let text = match term.as_vector().map(|v| v.components()) {
                    Some([x, y, z, c]) => format!(
                        "xyz({}, {}, {}):{}",
                        float(*x),
                        float(*y),
                        float(*z),
                        float(*c)
                    ),
                    _ => verbatim(term)?,
                };
                let sep = if i + 1 < terms.len() { "," } else { "" };
                b.line(format!("{text}{sep}"));
            }
        }
        None => b.line(verbatim(&coefficients)?),
    }
    solver_flags(obj, &mut b);

    close(obj, b, "polynomial", stops)
}

pub fn prism(obj: &Prism, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(keyed(PRISM_TYPES, &required(obj, "type")?)?);
    b.line(format!(
        "{}, {},",
        verbatim(&required(obj, "height1")?)?,
        verbatim(&required(obj, "height2")?)?
    ));
    points(&mut b, &required(obj, "points")?, 4, true)?;
    emit_flag(obj, &mut b, "open", "open");
    solver_flags(obj, &mut b);

    close(obj, b, "prism", stops)
}

pub fn quadric(obj: &Quadric, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    let coefficients = required(obj, "coefficients")?;
    match coefficients.as_list() {
        Some(c) if c.len() == 10 => b.line(format!(
            "<{}>, <{}>, <{}>, {}",
            join(&c[0..3], ", ")?,
            join(&c[3..6], ", ")?,
            join(&c[6..9], ", ")?,
            verbatim(&c[9])?
        )),
        _ => b.line(verbatim(&coefficients)?),
    }

    close(obj, b, "quadric", stops)
}

pub fn quartic(obj: &Quartic, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(angle_list(&required(obj, "coefficients")?)?);
    solver_flags(obj, &mut b);

    close(obj, b, "quartic", stops)
}

pub fn sphere(obj: &Sphere, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    let line = format!(
        "{}, {}",
        verbatim(&required(obj, "center")?)?,
        verbatim(&required(obj, "radius")?)?
    );
    b.line(with_strength(obj, line)?);

    close(obj, b, "sphere", stops)
}

pub fn sphere_sweep(obj: &SphereSweep, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(keyed(INTERNAL_SPLINE_TYPES, &required(obj, "type")?)?);

    let spheres = required(obj, "spheres")?;
    match spheres.as_list() {
        Some(items) => {
            b.line(format!("{},", items.len()));
            for (i, item) in items.iter().enumerate() {
                let sphere = item
                    .as_node()
                    .and_then(|n| n.as_any().downcast_ref::<Sphere>())
                    .ok_or_else(|| Error::serialize(SphereSweep::NAME, "spheres must hold Spheres"))?;
                let sep = if i + 1 < items.len() { "," } else { "" };
                b.line(format!(
                    "{}, {}{sep}",
                    verbatim(&required(sphere, "center")?)?,
                    verbatim(&required(sphere, "radius")?)?
                ));
            }
        }
        None => b.line(verbatim(&spheres)?),
    }
    emit(obj, &mut b, "tolerance", "tolerance")?;

    close(obj, b, "sphere_sweep", stops)
}

pub fn superellipsoid(obj: &Superellipsoid, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(format!(
        "<{}, {}>",
        verbatim(&required(obj, "e")?)?,
        verbatim(&required(obj, "n")?)?
    ));

    close(obj, b, "superellipsoid", stops)
}

pub fn sor(obj: &Sor, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    points(&mut b, &required(obj, "points")?, 4, true)?;
    emit_flag(obj, &mut b, "open", "open");
    solver_flags(obj, &mut b);

    close(obj, b, "sor", stops)
}

pub fn text(obj: &Text, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(format!(
        "{} {} {}",
        keyed(FONT_TYPES, &required(obj, "fontType")?)?,
        required(obj, "font")?.to_sdl(0)?,
        required(obj, "displayText")?.to_sdl(0)?
    ));
    b.line(format!(
        "{}, {}",
        verbatim(&required(obj, "thickness")?)?,
        verbatim(&required(obj, "offset")?)?
    ));

    close(obj, b, "text", stops)
}

pub fn torus(obj: &Torus, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    b.line(format!(
        "{}, {}",
        verbatim(&required(obj, "majorRadius")?)?,
        verbatim(&required(obj, "minorRadius")?)?
    ));
    solver_flags(obj, &mut b);

    close(obj, b, "torus", stops)
}

/// Written as `smooth_triangle` when smooth and all three normals are set.
pub fn triangle(obj: &Triangle, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    let corners = ["corner1", "corner2", "corner3"]
        .map(|name| required(obj, name).and_then(|v| verbatim(&v)));
    let normals = ["normal1", "normal2", "normal3"].map(|name| attr(obj, name));

    let smooth = flag(obj, "smooth") == Some(true) && normals.iter().all(Option::is_some);
    let [c1, c2, c3] = corners;
    let (c1, c2, c3) = (c1?, c2?, c3?);

    let name = if smooth {
        let mut n = Vec::with_capacity(3);
        for normal in normals.iter().flatten() {
            n.push(verbatim(normal)?);
        }
        b.line(format!("{c1}, {}, {c2}, {}, {c3}, {}", n[0], n[1], n[2]));
        "smooth_triangle"
    } else {
        b.line(format!("{c1}, {c2}, {c3}"));
        "triangle"
    };

    close(obj, b, name, stops)
}

pub fn union(obj: &Union, stops: usize) -> Result<String, Error> {
    let mut b = Block::new(stops);

    components(&mut b, &required(obj, "components")?)?;
    if flag(obj, "splitUnion") == Some(false) {
        b.line("split_union off");
    }

    close(obj, b, "union", stops)
}
