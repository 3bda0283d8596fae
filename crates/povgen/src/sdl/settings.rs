//! `global_settings` blocks and INI render options.

use super::{Block, attr, emit, flag, on_off, verbatim};
use crate::classes::{GlobalSettings, ImageOptions};
use povgen_core::{Error, Value, sdl::keyword};
use povgen_schema::{Class, tables::keywords::OUTPUT_FILE_TYPES};

/// ImageOptions attribute to INI key, in output order.
pub const INI_KEYS: &[(&str, &str)] = &[
    ("width", "Width"),
    ("height", "Height"),
    ("startColumn", "Start_Column"),
    ("endColumn", "End_Column"),
    ("startRow", "Start_Row"),
    ("endRow", "End_Row"),
    ("quality", "Quality"),
    ("antialias", "Antialias"),
    ("antialiasDepth", "Antialias_Depth"),
    ("antialiasGamma", "Antialias_Gamma"),
    ("antialiasThreshold", "Antialias_Threshold"),
    ("samplingMethod", "Sampling_Method"),
    ("jitter", "Jitter"),
    ("jitterAmount", "Jitter_Amount"),
    ("bitsPerColor", "Bits_Per_Color"),
    ("outputAlpha", "Output_Alpha"),
    ("outputToFile", "Output_To_File"),
    ("outputFileName", "Output_File_Name"),
    ("outputFileType", "Output_File_Type"),
    ("includeHeader", "Include_Header"),
    ("libraryPath", "Library_Path"),
    ("display", "Display"),
    ("pauseWhenDone", "Pause_When_Done"),
    ("verbose", "Verbose"),
    ("createIni", "Create_Ini"),
    ("renderBlockSize", "Render_Block_Size"),
    ("workThreads", "Work_Threads"),
];

const TOP_LEVEL: &[(&str, &str)] = &[
    ("adcBailout", "adc_bailout"),
    ("ambientLight", "ambient_light"),
    ("assumedGamma", "assumed_gamma"),
    ("iridWavelength", "irid_wavelength"),
    ("maxIntersections", "max_intersections"),
    ("maxTraceLevel", "max_trace_level"),
    ("mmPerUnit", "mm_per_unit"),
    ("noiseGenerator", "noise_generator"),
    ("numberOfWaves", "number_of_waves"),
];

const PHOTONS: &[(&str, &str)] = &[
    ("photonCount", "count"),
    ("photonSpacing", "spacing"),
    ("photonGather", "gather"),
    ("photonMedia", "media"),
    ("photonJitter", "jitter"),
    ("photonMaxTraceLevel", "max_trace_level"),
    ("photonAdcBailout", "adc_bailout"),
    ("photonAutostop", "autostop"),
    ("photonExpandThresholds", "expand_thresholds"),
    ("photonRadius", "radius"),
];

const RADIOSITY: &[(&str, &str)] = &[
    ("radAdcBailout", "adc_bailout"),
    ("radBrightness", "brightness"),
    ("radCount", "count"),
    ("radErrorBound", "error_bound"),
    ("radGrayThreshold", "gray_threshold"),
    ("radLowErrorFactor", "low_error_factor"),
    ("radMaximumReuse", "maximum_reuse"),
    ("radMinimumReuse", "minimum_reuse"),
    ("radMaxSample", "max_sample"),
    ("radNearestCount", "nearest_count"),
    ("radPretraceEnd", "pretrace_end"),
    ("radPretraceStart", "pretrace_start"),
    ("radRecursionLimit", "recursion_limit"),
];

fn switch(obj: &GlobalSettings, block: &mut Block, name: &str, keyword: &str) {
    if let Some(b) = flag(obj, name) {
        block.line(format!("{keyword} {}", on_off(b)));
    }
}

impl GlobalSettings {
    /// The `global_settings` block. The photons, radiosity and subsurface
    /// sub-blocks are written only when their switch is on.
    pub fn to_sdl(&self, stops: usize) -> Result<String, Error> {
        self.require()?;
        let mut block = Block::new(stops);

        for (name, keyword) in TOP_LEVEL {
            emit(self, &mut block, name, keyword)?;
        }
        if let Some(charset) = attr(self, "charset") {
            block.line(format!("charset {}", verbatim(&charset)?));
        }

        if flag(self, "photon") == Some(true) {
            let mut photons = Block::new(stops + 1);
            for (name, keyword) in PHOTONS {
                emit(self, &mut photons, name, keyword)?;
            }
            for (name, keyword) in [("photonLoadFile", "load_file"), ("photonSaveFile", "save_file")] {
                if let Some(file) = attr(self, name) {
                    photons.line(format!("{keyword} {}", file.to_sdl(0)?));
                }
            }
            block.line(photons.finish("photons").trim_start());
        }

        if flag(self, "radiosity") == Some(true) {
            let mut radiosity = Block::new(stops + 1);
            for (name, keyword) in RADIOSITY {
                emit(self, &mut radiosity, name, keyword)?;
            }
            switch(self, &mut radiosity, "radAlwaysSample", "always_sample");
            switch(self, &mut radiosity, "radNormal", "normal");
            switch(self, &mut radiosity, "radSubsurface", "subsurface");
            block.line(radiosity.finish("radiosity").trim_start());
        }

        if flag(self, "subsurface") == Some(true) {
            let mut subsurface = Block::new(stops + 1);
            emit(self, &mut subsurface, "subSamples", "samples")?;
            switch(self, &mut subsurface, "subRadiosity", "radiosity");
            block.line(subsurface.finish("subsurface").trim_start());
        }

        Ok(block.finish("global_settings"))
    }
}

impl ImageOptions {
    /// `Key=Value` lines for a POV-Ray INI file, one per set option.
    pub fn to_ini(&self) -> Result<String, Error> {
        self.require()?;
        let mut out = String::new();

        for (name, key) in INI_KEYS {
            let Some(value) = attr(self, name) else {
                continue;
            };

            let text = match (&value, *name) {
                (Value::Str(ty), "outputFileType") => keyword(OUTPUT_FILE_TYPES, ty)
                    .ok_or_else(|| Error::serialize(Self::NAME, format!("unknown output type '{ty}'")))?
                    .to_string(),
                (Value::Bool(b), _) => on_off(*b).to_string(),
                _ => verbatim(&value)?,
            };

            out.push_str(key);
            out.push('=');
            out.push_str(&text);
            out.push('\n');
        }

        Ok(out)
    }
}
