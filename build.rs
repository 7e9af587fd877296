use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use toml::Value;

/// Writes `app_metadata.rs` into `OUT_DIR` so the crate can embed its own
/// identity (name, version, repository owner) as constants.
struct AppMetadata {
    file: File,
}

impl AppMetadata {
    fn new() -> io::Result<Self> {
        let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
        let dest_path = Path::new(&out_dir).join("app_metadata.rs");
        let file = File::create(dest_path)?;
        Ok(Self { file })
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        writeln!(
            self.file,
            "#[allow(unused)]\npub const APP_METADATA_{}: &str = \"{}\";",
            key.to_uppercase(),
            value
        )
    }
}

fn main() -> io::Result<()> {
    let cargo_toml = fs::read_to_string("Cargo.toml").expect("Failed to read Cargo.toml");
    let cargo_toml: Value = toml::from_str(&cargo_toml).expect("Failed to parse Cargo.toml");

    // The owner lives in [package.metadata]; it names the account that hosts
    // the release listing this binary checks itself against.
    let owner = cargo_toml
        .get("package")
        .and_then(|pkg| pkg.get("metadata"))
        .and_then(|meta| meta.get("owner"))
        .and_then(|owner| owner.as_str())
        .unwrap_or("upcheck-app")
        .to_string();

    let mut app_metadata = AppMetadata::new()?;
    app_metadata.write("NAME", &env::var("CARGO_PKG_NAME").unwrap())?;
    app_metadata.write("VERSION", &env::var("CARGO_PKG_VERSION").unwrap())?;
    app_metadata.write("OWNER", &owner)?;

    Ok(())
}
