use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const KNOWN_APP_IDS: [&str; 9] = [
    "finder",
    "files",
    "terminal",
    "notes",
    "calculator",
    "clock",
    "weather",
    "vscode",
    "wallpaper",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowDefaults {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogEntry {
    id: String,
    title: String,
    icon: String,
    keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppCatalog {
    schema_version: u32,
    window_defaults: WindowDefaults,
    apps: Vec<CatalogEntry>,
}

fn validate(catalog: &AppCatalog, path: &str) {
    if catalog.schema_version != 1 {
        panic!(
            "catalog schema mismatch in {path}: expected 1 found {}",
            catalog.schema_version
        );
    }
    if catalog.window_defaults.width < 300 || catalog.window_defaults.height < 200 {
        panic!("window defaults in {path} are below the 300x200 minimum");
    }

    let mut seen = HashSet::new();
    for entry in &catalog.apps {
        if !KNOWN_APP_IDS.contains(&entry.id.as_str()) {
            panic!("unknown app id `{}` in {path}", entry.id);
        }
        if !seen.insert(entry.id.as_str()) {
            panic!("duplicate app id `{}` in {path}", entry.id);
        }
        if entry.title.trim().is_empty() || entry.icon.trim().is_empty() {
            panic!("app `{}` in {path} needs a title and an icon", entry.id);
        }
        if entry.keywords.iter().all(|k| k.trim().is_empty()) {
            panic!("app `{}` in {path} has no search keywords", entry.id);
        }
    }
    if seen.len() != KNOWN_APP_IDS.len() {
        panic!(
            "catalog {path} lists {} apps, expected {}",
            seen.len(),
            KNOWN_APP_IDS.len()
        );
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("app_catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: AppCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&catalog, &path.display().to_string());

    let json = serde_json::to_string_pretty(&catalog).expect("serialize app catalog");
    let generated = format!(
        "/// Build-time generated application catalog JSON.\n\
pub const APP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
