use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

const HEADER: &str = "get_distance.h";

fn main() -> Result<(), Box<dyn Error>> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")?;
    let manifest_dir = Path::new(&manifest_dir);

    let config = cbindgen::Config::from_file(manifest_dir.join("cbindgen.toml"))?;
    let bindings = cbindgen::generate_with_config(manifest_dir, config)?;

    let include_dir = manifest_dir.join("include");
    fs::create_dir_all(&include_dir)?;
    bindings.write_to_file(include_dir.join(HEADER));

    for input in ["build.rs", "cbindgen.toml", "src/lib.rs"] {
        println!("cargo:rerun-if-changed={input}");
    }
    Ok(())
}
