//! Generates `app_metadata.rs` in `OUT_DIR`: one `APP_METADATA_<KEY>` string
//! constant for the package name, its version and every string entry of
//! `[package.metadata]`.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use toml::Value;

struct AppMetadata {
    out: Vec<u8>,
}

impl AppMetadata {
    fn new() -> Self {
        Self { out: Vec::new() }
    }

    fn constant(&mut self, key: &str, value: &str) -> io::Result<()> {
        writeln!(self.out, "#[allow(unused)]")?;
        writeln!(self.out, "pub const APP_METADATA_{}: &str = {:?};", key.to_uppercase(), value)
    }

    fn finish(self) -> io::Result<()> {
        let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;
        fs::write(PathBuf::from(out_dir).join("app_metadata.rs"), self.out)
    }
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=Cargo.toml");

    let manifest: Value = toml::from_str(&fs::read_to_string("Cargo.toml")?).map_err(io::Error::other)?;

    let mut metadata = AppMetadata::new();
    metadata.constant("name", &env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "taskflow".to_string()))?;
    metadata.constant("version", &env::var("CARGO_PKG_VERSION").unwrap_or_default())?;

    let entries = manifest.get("package").and_then(|package| package.get("metadata")).and_then(Value::as_table);
    for (key, value) in entries.into_iter().flatten() {
        if let Some(value) = value.as_str() {
            metadata.constant(key, value)?;
        }
    }

    metadata.finish()
}
