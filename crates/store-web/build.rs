//! Forwards storefront settings to the compiler so they are inlined into
//! the WASM bundle. Values come from the environment or a `.env` file.

#[path = "build/env_files.rs"]
mod env_files;

use std::path::PathBuf;

const FORWARDED_VARS: [&str; 2] = ["RAZORPAY_KEY_ID", "STORE_API_URL"];

fn main() {
    // Watched even when absent, so creating a `.env` later triggers a rebuild.
    let manifest_dir = PathBuf::from(std::env::var_os("CARGO_MANIFEST_DIR").unwrap_or_default());
    for path in env_files::env_file_candidates(&manifest_dir) {
        println!("cargo:rerun-if-changed={}", path.display());
    }
    let _ = dotenvy::dotenv();

    for key in FORWARDED_VARS {
        println!("cargo:rerun-if-env-changed={key}");
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
