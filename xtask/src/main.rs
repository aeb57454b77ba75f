//! Custom cargo commands for the facetrank crate.
//!
//! Usage:
//!   cargo xtask test                 - Run all tests
//!   cargo xtask check                - Quick check (check + test + clippy)
//!   cargo xtask bench                - Run benchmarks
//!   cargo xtask fuzz [TARGET] [SECS] - Run fuzz targets (needs cargo-fuzz, nightly)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets declared in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &["facet_dispatch", "legacy_dense_window"];

/// Default time budget per fuzz target.
const DEFAULT_FUZZ_SECS: u64 = 60;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.get(1).map(String::as_str), args.get(2).map(String::as_str))?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  test                    Run all Rust tests
  check                   Quick check (cargo check + test + clippy)
  bench                   Run benchmarks
  fuzz [TARGET] [SECS]    Run one fuzz target, or all of them, for SECS each (default 60)
"#
    );
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run fuzz targets for a fixed time each
fn fuzz(target: Option<&str>, secs: Option<&str>) -> Result<()> {
    let targets: Vec<&str> = match target {
        Some(name) if FUZZ_TARGETS.contains(&name) => vec![name],
        Some(name) => bail!("Unknown fuzz target '{}', expected one of {:?}", name, FUZZ_TARGETS),
        None => FUZZ_TARGETS.to_vec(),
    };
    let secs = match secs {
        Some(s) => s
            .parse::<u64>()
            .with_context(|| format!("Invalid fuzz duration '{}'", s))?,
        None => DEFAULT_FUZZ_SECS,
    };

    let max_time = format!("-max_total_time={}", secs);
    for (i, name) in targets.iter().enumerate() {
        println!("[{}/{}] fuzzing {} for {}s...", i + 1, targets.len(), name, secs);
        run_cargo(&["+nightly", "fuzz", "run", name, "--", &max_time])?;
    }

    println!("\n✓ No fuzz failures");
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
