use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct WindowEntry {
    key: String,
}

#[derive(Debug, Deserialize)]
struct LocationEntry {
    id: String,
    parent: Option<String>,
    kind: String,
}

#[derive(Debug, Deserialize)]
struct CatalogHeader {
    schema_version: u32,
    default_location: String,
    windows: Vec<WindowEntry>,
    locations: Vec<LocationEntry>,
}

fn catalog_path(root: &Path) -> PathBuf {
    root.join("config").join("desktop.toml")
}

fn check_catalog(path: &Path, header: &CatalogHeader) {
    if header.schema_version != CATALOG_SCHEMA_VERSION {
        panic!(
            "catalog schema mismatch in {}: expected {CATALOG_SCHEMA_VERSION} found {}",
            path.display(),
            header.schema_version
        );
    }

    let mut keys = HashSet::new();
    for window in &header.windows {
        if !keys.insert(window.key.as_str()) {
            panic!("duplicate window key `{}` in {}", window.key, path.display());
        }
    }

    let mut folders = HashSet::new();
    let mut ids = HashSet::new();
    for location in &header.locations {
        if !ids.insert(location.id.as_str()) {
            panic!("duplicate location `{}` in {}", location.id, path.display());
        }
        if let Some(parent) = location.parent.as_deref() {
            if !folders.contains(parent) {
                panic!(
                    "location `{}` in {} names parent `{parent}` which is not a folder declared earlier",
                    location.id,
                    path.display()
                );
            }
        }
        if location.kind == "folder" {
            folders.insert(location.id.as_str());
        }
    }

    if !folders.contains(header.default_location.as_str()) {
        panic!(
            "default location `{}` in {} is not a declared folder",
            header.default_location,
            path.display()
        );
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = catalog_path(&crate_root);
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: toml::Value = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    let header: CatalogHeader = catalog
        .clone()
        .try_into()
        .unwrap_or_else(|err| panic!("invalid catalog layout in {}: {err}", path.display()));
    check_catalog(&path, &header);

    let json = serde_json::to_string_pretty(&catalog).expect("serialize desktop catalog");
    let generated = format!(
        "/// Build-time generated desktop catalog JSON.\n\
pub const DESKTOP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
