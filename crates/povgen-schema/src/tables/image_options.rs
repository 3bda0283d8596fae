use crate::{prelude::*, tables::keywords::OUTPUT_FILE_TYPES};

pub static IMAGE_OPTIONS: EntityDescriptor = EntityDescriptor {
    def: Def::new(module_path!(), "IMAGE_OPTIONS"),
    name: "ImageOptions",
    description: Some(
        "The ImageOptions class holds the render settings that are written to the INI file \
         passed to POV-Ray alongside the scene.",
    ),
    mutable: &[
        boolean!("antialias").describe("If true, antialiasing is performed."),
        AttributeRule::new("antialiasDepth", "integer")
            .check(
                |v| is_int_within(v, 1, 9),
                "antialiasDepth must be an integer in the range (1 - 9).",
            )
            .describe("Depth of recursive supersampling. The default is 3."),
        float!("antialiasGamma")
            .describe("Gamma applied to color comparisons during antialiasing."),
        AttributeRule::new("antialiasThreshold", "float")
            .check(
                |v| at_least(v, 0.0),
                "antialiasThreshold must be a float greater than or equal to zero.",
            )
            .describe("Color difference between neighboring pixels that triggers supersampling."),
        AttributeRule::new("bitsPerColor", "integer")
            .check(
                |v| is_int_within(v, 5, 16),
                "bitsPerColor must be an integer in the range (5 - 16).",
            )
            .describe("Number of bits per color channel in the output file."),
        boolean!("createIni")
            .describe("If true, POV-Ray writes the options it actually used to an INI file."),
        boolean!("display").describe("If true, the image is displayed while rendering."),
        AttributeRule::new("endColumn", "integer")
            .check(|v| is_int_within(v, 1, i64::MAX), "endColumn must be a positive integer.")
            .describe("Last column of the image to render."),
        AttributeRule::new("endRow", "integer")
            .check(|v| is_int_within(v, 1, i64::MAX), "endRow must be a positive integer.")
            .describe("Last row of the image to render."),
        AttributeRule::new("height", "integer")
            .check(|v| is_int_within(v, 1, i64::MAX), "height must be a positive integer.")
            .describe("Height of the output image in pixels."),
        string!("includeHeader")
            .describe("File included at the top of the scene before anything else is parsed."),
        boolean!("jitter").describe("If true, supersampling positions are jittered."),
        AttributeRule::new("jitterAmount", "float")
            .check(
                |v| is_within(v, 0.0, 1.0),
                "jitterAmount must be a float in the unit interval (0.0 - 1.0).",
            )
            .describe("Amount of jitter applied to supersampling positions."),
        string!("libraryPath").describe("Additional directory searched for include files."),
        boolean!("outputAlpha").describe("If true, an alpha channel is written to the output."),
        string!("outputFileName").describe("Name of the rendered image file."),
        AttributeRule::new("outputFileType", "string")
            .check(
                |v| is_key(v, OUTPUT_FILE_TYPES),
                "outputFileType must be one of 'bmp', 'exr', 'hdr', 'jpeg', 'png', 'ppm', 'sys', \
                 'targa', or 'targaCompressed'.",
            )
            .describe("Format of the rendered image file."),
        boolean!("outputToFile")
            .default_value(Constant::Bool(true))
            .describe("If false, no image file is written."),
        boolean!("pauseWhenDone").describe("If true, POV-Ray waits for a keypress after rendering."),
        AttributeRule::new("quality", "integer")
            .check(
                |v| is_int_within(v, 0, 11),
                "quality must be an integer in the range (0 - 11).",
            )
            .describe("Rendering quality, from 0 (rough) to 11 (everything enabled)."),
        AttributeRule::new("renderBlockSize", "integer")
            .check(
                |v| is_int_within(v, 4, i64::MAX),
                "renderBlockSize must be an integer greater than or equal to 4.",
            )
            .describe("Edge length of the square blocks handed to render threads."),
        AttributeRule::new("samplingMethod", "integer")
            .check(
                |v| is_int_within(v, 1, 2),
                "samplingMethod must be either 1 or 2.",
            )
            .describe("Antialiasing method: 1 is non-recursive, 2 is adaptive recursive."),
        AttributeRule::new("startColumn", "integer")
            .check(|v| is_int_within(v, 1, i64::MAX), "startColumn must be a positive integer.")
            .describe("First column of the image to render."),
        AttributeRule::new("startRow", "integer")
            .check(|v| is_int_within(v, 1, i64::MAX), "startRow must be a positive integer.")
            .describe("First row of the image to render."),
        boolean!("verbose").describe("If true, POV-Ray prints detailed progress information."),
        AttributeRule::new("width", "integer")
            .check(|v| is_int_within(v, 1, i64::MAX), "width must be a positive integer.")
            .describe("Width of the output image in pixels."),
        AttributeRule::new("workThreads", "integer")
            .check(
                |v| is_int_within(v, 1, 512),
                "workThreads must be an integer in the range (1 - 512).",
            )
            .describe("Number of render threads."),
    ],
    ..EntityDescriptor::EMPTY
};
