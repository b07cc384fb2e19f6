//! Build script for the storefront crate.
//!
//! Fingerprints `static/css/main.css` so templates can link an
//! immutable, cache-busted URL.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let css_path = Path::new(&manifest_dir).join("static/css/main.css");

    println!("cargo:rerun-if-changed={}", css_path.display());

    // A missing stylesheet leaves the hash empty rather than failing the
    // build; the recovery pages link the unhashed file anyway.
    let Ok(content) = fs::read(&css_path) else {
        println!("cargo:warning=static/css/main.css not found, CSS_HASH left empty");
        println!("cargo:rustc-env=CSS_HASH=");
        return;
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let short_hash = &digest[..8];

    // Templates read this via env!("CSS_HASH") through the css_hash filter.
    println!("cargo:rustc-env=CSS_HASH={short_hash}");

    // The hashed copy is what /static/css/derived/main.<hash>.css serves.
    let derived_dir = Path::new(&manifest_dir).join("static/css/derived");
    fs::create_dir_all(&derived_dir).expect("Failed to create derived CSS directory");
    fs::copy(&css_path, derived_dir.join(format!("main.{short_hash}.css")))
        .expect("Failed to copy CSS to derived directory");
}
