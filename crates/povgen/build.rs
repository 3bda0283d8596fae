use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    povgen_build::build!("classes.rs");

    Ok(())
}
