//! Build script for dashboard-analysis.
//!
//! Copies every analysis fixture JSON to OUT_DIR so the dashboard can
//! embed them all via `include_str!` at compile time.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let files = vec![
        ("../fixtures/analysis_result.json", "analysis_result.json"),
        ("../fixtures/frequency_curve.json", "frequency_curve.json"),
        ("../fixtures/frequency_table.json", "frequency_table.json"),
        ("../fixtures/basic_frequency.json", "basic_frequency.json"),
    ];

    for (src_path, dest_name) in &files {
        let src = Path::new(src_path);
        let dest = Path::new(&out_dir).join(dest_name);
        if src.exists() {
            fs::copy(src, &dest).unwrap_or_else(|e| {
                panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
            });
        } else {
            fs::write(&dest, "").unwrap();
            println!(
                "cargo:warning=Fixture file {} not found, using empty placeholder",
                src_path
            );
        }
        println!("cargo:rerun-if-changed={}", src_path);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
