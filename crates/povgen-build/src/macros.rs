/// Build-script entry point: generates the class catalog into `OUT_DIR`.
///
/// Expands to statements using `?`, so the calling `main` must return a
/// `Result` whose error type accepts `std::env::VarError` and
/// `povgen_build::BuildError`.
#[macro_export]
macro_rules! build {
    ($file:expr) => {
        use std::{env::var, path::PathBuf};

        //
        // CARGO
        //

        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-env-changed=POVGEN_NO_CHECK");

        let out_dir = var("OUT_DIR")?;

        //
        // CLASSES
        //

        let check = var("POVGEN_NO_CHECK").is_err();
        let path = PathBuf::from(out_dir).join($file);
        ::povgen_build::Generator::new()
            .check_syntax(check)
            .write(&path)?;
    };
}
