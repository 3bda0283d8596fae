use crate::{prelude::*, tables::keywords::CHARSETS};

fn expand_thresholds(v: &Value) -> bool {
    v.as_list()
        .is_some_and(|l| l.len() == 2 && is_float(&l[0]) && is_int(&l[1]))
}

fn gather(v: &Value) -> bool {
    is_array_of_ints(v, 2, 2)
        && v.as_list().is_some_and(|l| match (l[0].as_i64(), l[1].as_i64()) {
            (Some(lo), Some(hi)) => lo >= 0 && lo <= hi,
            _ => false,
        })
}

fn rad_count(v: &Value) -> bool {
    is_array_of_ints(v, 1, 2)
        && v.as_list()
            .is_some_and(|l| l.iter().all(|i| i.as_i64().is_some_and(|i| i >= 1)))
}

pub static GLOBAL_SETTINGS: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "GLOBAL_SETTINGS"),
    name: "GlobalSettings",
    description: Some(
        "The GlobalSettings class manages the variables that will be output into the SDL \
         global_settings block.",
    ),
    mutable: &[
        AttributeRule::new("adcBailout", "float")
            .check(
                |v| at_least(v, 0.0),
                "adcBailout must be a float greater than or equal to zero.",
            )
            .describe(
                "Defines the Adaptive Depth Control bailout value, which determines when to stop \
                 tracing further reflections once they cease to contribute significantly to the \
                 color of the current pixel. Defaults to 0.0039.",
            ),
        color!("ambientLight").describe(
            "Specifies the color of the ambient light, i.e., the illumination that falls on every \
             object from all directions in the absence of any explicit LightSource.",
        ),
        float!("assumedGamma").describe("Defines the working gamma space for the render."),
        AttributeRule::new("charset", "string")
            .check(
                |v| is_one_of(v, CHARSETS),
                "charset must be one of 'ascii', 'utf8', or 'sys'.",
            )
            .describe(
                "Specifies which character set will be used in interpreting the contents of text \
                 strings. The default is ascii.",
            ),
        color!("iridWavelength").describe(
            "Specifies a color to use in iridescence calculations. The default, [0.70, 0.52, 0.48], \
             will rarely if ever need to be changed.",
        ),
        AttributeRule::new("maxIntersections", "integer")
            .check(
                |v| is_int_within(v, 0, i64::MAX),
                "maxIntersections must be an integer greater than or equal to zero.",
            )
            .describe(
                "Sets the size of POV-Ray's internal I-Stacks for tracking ray/object \
                 intersections. The default is 64.",
            ),
        AttributeRule::new("maxTraceLevel", "integer")
            .check(
                |v| is_int_within(v, 0, 256),
                "maxTraceLevel must be an integer in the range (0 - 256).",
            )
            .describe(
                "Sets an upper limit on the number of reflections that a ray can undergo before \
                 calculations are stopped and the pixel returns as black.",
            ),
        AttributeRule::new("mmPerUnit", "float")
            .check(
                |v| at_least(v, 0.0),
                "mmPerUnit must be a float greater than or equal to zero.",
            )
            .describe(
                "Sets the number of millimeters per unit of space, which affects the behavior of \
                 subsurface transport. The default is 10.",
            ),
        AttributeRule::new("noiseGenerator", "integer")
            .check(
                |v| is_int_within(v, 1, 3),
                "noiseGenerator must be an integer and one of 1, 2, or 3.",
            )
            .describe("Specifies which noise generator POV-Ray will use. The default is 2."),
        AttributeRule::new("numberOfWaves", "integer")
            .check(
                |v| is_int_within(v, 0, i64::MAX),
                "numberOfWaves must be an integer greater than or equal to zero.",
            )
            .describe(
                "Specifies the number of waves used by the waves and ripples texture patterns. \
                 The default is 10.",
            ),
        boolean!("photon").describe(
            "If true, photons are enabled and the photon* parameters are emitted in output.",
        ),
        AttributeRule::new("photonAdcBailout", "float")
            .check(
                |v| at_least(v, 0.0),
                "photonAdcBailout must be a float greater than or equal to zero.",
            )
            .describe("Adaptive Depth Control bailout for photon rays."),
        AttributeRule::new("photonAutostop", "float")
            .check(
                |v| is_within(v, 0.0, 1.0),
                "photonAutostop must be a float within the unit interval (0.0 - 1.0).",
            )
            .describe(
                "Fraction of an object's bounding box that may be searched without photon hits \
                 before shooting stops.",
            ),
        AttributeRule::new("photonCount", "integer")
            .check(
                |v| is_int_within(v, 0, i64::MAX),
                "photonCount must be an integer greater than or equal to zero.",
            )
            .describe("Approximate total number of photons to shoot. Overrides photonSpacing."),
        AttributeRule::new("photonExpandThresholds", "[float, integer]")
            .check(
                expand_thresholds,
                "photonExpandThresholds must be an array consisting of a float and an integer.",
            )
            .describe(
                "Percentage by which the gather radius may grow, and the minimum number of photons \
                 that triggers the expansion.",
            ),
        AttributeRule::new("photonGather", "[integer]")
            .check(
                gather,
                "photonGather must be an array of two integers greater than or equal to zero in \
                 ascending order.",
            )
            .describe("Minimum and maximum number of photons gathered at each point."),
        float!("photonJitter").describe("Amount of jitter applied to photon shooting."),
        string!("photonLoadFile").describe("Loads a previously saved photon map from this file."),
        AttributeRule::new("photonMaxTraceLevel", "integer")
            .check(
                |v| is_int_within(v, 0, i64::MAX),
                "photonMaxTraceLevel must be an integer greater than or equal to zero.",
            )
            .describe("Overrides maxTraceLevel for photon rays."),
        AttributeRule::new("photonMedia", "[float]")
            .check(
                |v| is_array_of_floats(v, 2, 2),
                "photonMedia must be an array of two floats.",
            )
            .describe("Maximum number of media photon steps and the media spacing multiplier."),
        AttributeRule::new("photonRadius", "[float]")
            .check(
                |v| is_array_of_floats(v, 4, 4),
                "photonRadius must be an array of four floats.",
            )
            .describe("Gather radius, its multiplier, and the media radius and multiplier."),
        string!("photonSaveFile").describe("Saves the computed photon map to this file."),
        AttributeRule::new("photonSpacing", "float")
            .check(|v| above(v, 0.0), "photonSpacing must be a float greater than zero.")
            .describe("Average distance between photons on surfaces."),
        float!("radAdcBailout")
            .describe("Specifies an Adaptive Depth Control for radiosity rays. The default is 0.01."),
        boolean!("radAlwaysSample").describe(
            "If true, new samples will be gathered during the final radiosity pass. This is \
             slower and often produces lower-quality results, so the default is false.",
        ),
        float!("radBrightness").describe(
            "Specifies the amount by which the brightness of objects should be adjusted before \
             being returned to the rest of the system. The default is 1.0.",
        ),
        AttributeRule::new("radCount", "[integer]")
            .check(
                rad_count,
                "radCount must be an array of one or two integers, both of which must be greater \
                 than or equal to one.",
            )
            .describe(
                "Number of radiosity rays emitted when a new radiosity value is needed, optionally \
                 followed by the number of directions to choose from. The default is 35.",
            ),
        float!("radErrorBound").describe(
            "Specifies the tolerated error and defaults to 1.8. Lower values are more accurate \
             but require higher radCount values.",
        ),
        AttributeRule::new("radGrayThreshold", "float")
            .check(
                |v| is_within(v, 0.0, 1.0),
                "radGrayThreshold must be a float in the unit interval (0.0 - 1.0).",
            )
            .describe("Counteracts color bleed by desaturating reflected light."),
        boolean!("radiosity").describe(
            "If true, radiosity is enabled and the rad* parameters are emitted in output.",
        ),
        float!("radLowErrorFactor").describe(
            "Multiplies radErrorBound during preliminary passes to reduce blotchy artifacts.",
        ),
        float!("radMaximumReuse").describe("Sets an upper bound on the reuse of samples."),
        float!("radMaxSample").describe(
            "Defines an upper limit on the brightness of radiosity samples, which can correct for \
             some brightness artifacts at the expense of realism.",
        ),
        float!("radMinimumReuse").describe("Sets a lower bound on the reuse of samples."),
        AttributeRule::new("radNearestCount", "integer")
            .check(
                |v| is_int_within(v, 1, 20),
                "radNearestCount must be an integer in the range 1-20.",
            )
            .describe(
                "Minimum number of old radiosity values blended together to create a new \
                 interpolated value. Defaults to 5.",
            ),
        boolean!("radNormal")
            .describe("If true, radiosity will be affected by normal perturbations."),
        AttributeRule::new("radPretraceEnd", "float")
            .check(
                |v| is_within(v, 0.0, 1.0),
                "radPretraceEnd must be a float in the unit interval (0.0 - 1.0).",
            )
            .describe(
                "Size of mosaic blocks at the end of the pretrace phase as a fraction of image \
                 size.",
            ),
        AttributeRule::new("radPretraceStart", "float")
            .check(
                |v| is_within(v, 0.0, 1.0),
                "radPretraceStart must be a float in the unit interval (0.0 - 1.0).",
            )
            .describe(
                "Size of mosaic blocks at the start of the pretrace phase as a fraction of image \
                 size.",
            ),
        AttributeRule::new("radRecursionLimit", "integer")
            .check(
                |v| is_int_within(v, 1, 20),
                "radRecursionLimit must be an integer in the range 1-20.",
            )
            .describe(
                "Determines how many recursion levels are used to calculate the diffuse \
                 inter-reflection.",
            ),
        boolean!("radSubsurface").describe(
            "If true, radiosity calculations will take subsurface light transport into account.",
        ),
        boolean!("subRadiosity").describe(
            "If true, subsurface effects will be applied to incoming radiosity illumination.",
        ),
        AttributeRule::new("subSamples", "[integer]")
            .check(
                |v| is_array_of_ints(v, 2, 2),
                "subSamples must be an array of two integers.",
            )
            .describe(
                "Number of samples to use for diffuse scattering and single-scattering \
                 approximation. The default for both is 50.",
            ),
        boolean!("subsurface").describe(
            "If true, subsurface light transport is enabled and the sub* parameters are emitted \
             in output.",
        ),
    ],
    ..EntityDescriptor::EMPTY
};
