use crate::prelude::*;

pub static PRIMITIVE: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "PRIMITIVE"),
    name: "Primitive",
    description: Some(
        "Primitive is the base class for every geometric object. It holds the modifiers that all \
         objects share: identity, material, clipping and the render flags.",
    ),
    mutable: &[
        boolean!("active")
            .default_value(Constant::Bool(true))
            .describe("If false, the object is skipped when the scene is written."),
        AttributeRule::new("boundedBy", "Primitive")
            .check(
                |v| inherits_from(v, "Primitive"),
                "boundedBy must be a Primitive.",
            )
            .describe("Manual bounding object used to speed up intersection tests."),
        AttributeRule::new("clippedBy", "Primitive")
            .check(
                |v| inherits_from(v, "Primitive"),
                "clippedBy must be a Primitive.",
            )
            .describe("Object whose interior defines the visible portion of this one."),
        boolean!("doubleIlluminate")
            .describe("If true, the object is lit on both sides of its surface."),
        boolean!("hollow").describe("If true, the object can contain media and fog."),
        string!("id").describe("Identifier written as a comment above the object."),
        sdl!("interior").describe("SDL interior block, emitted verbatim."),
        boolean!("inverse").describe("If true, inside and outside are swapped."),
        sdl!("material").describe("SDL material block, emitted verbatim."),
        boolean!("noImage").describe("If true, the object is invisible to camera rays."),
        boolean!("noRadiosity").describe("If true, the object is invisible to radiosity rays."),
        boolean!("noReflection").describe("If true, the object does not appear in reflections."),
        boolean!("noShadow").describe("If true, the object casts no shadows."),
        sdl!("photons").describe("SDL photons block, emitted verbatim."),
        sdl!("radiosity").describe("SDL radiosity block, emitted verbatim."),
        sdl!("texture").describe("SDL texture block, emitted verbatim."),
        sdl!("transform")
            .describe("Transformation statements such as scale, rotate and translate."),
    ],
    ..EntityDescriptor::EMPTY
};
