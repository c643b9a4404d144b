//! Build script for graha_sys
//!
//! Locates the Swiss Ephemeris shared library (`libswe`).

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SWISSEPH_LIB_DIR");

    // Strategy 1: explicit library directory
    if let Ok(lib_dir) = env::var("SWISSEPH_LIB_DIR") {
        println!("cargo:rustc-link-search=native={lib_dir}");
        println!("cargo:rustc-link-lib=dylib=swe");
        return;
    }

    // Strategy 2: pkg-config (distribution packages ship `swe.pc` or `libswe.pc`)
    for name in ["swe", "libswe"] {
        if pkg_config::Config::new().probe(name).is_ok() {
            println!("cargo:info=Found {name} via pkg-config");
            return;
        }
    }

    // Strategy 3: common install locations
    let search_paths = [
        "/usr/local/lib",
        "/usr/lib",
        "/usr/lib/x86_64-linux-gnu",
        "/usr/lib/aarch64-linux-gnu",
        "/opt/homebrew/lib",
    ];
    for path in &search_paths {
        let dir = PathBuf::from(path);
        if dir.join("libswe.so").exists()
            || dir.join("libswe.dylib").exists()
            || dir.join("libswe.a").exists()
        {
            println!("cargo:rustc-link-search=native={path}");
            println!("cargo:rustc-link-lib=swe");
            return;
        }
    }

    // Leave it to the default linker path and say so.
    println!("cargo:warning=libswe not located; set SWISSEPH_LIB_DIR if linking fails");
    println!("cargo:rustc-link-lib=swe");
}
