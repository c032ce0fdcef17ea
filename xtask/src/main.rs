//! Custom cargo commands for namekeys.
//!
//! Usage:
//!   cargo xtask verify          - Run full verification suite
//!   cargo xtask test            - Run all tests
//!   cargo xtask check           - Quick check (test + clippy)
//!   cargo xtask bench           - Run benchmarks
//!   cargo xtask fuzz [TARGET]   - Fuzz one target (or all) for a short while

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["keyword_generation", "query_matching"];

/// Seconds per target for `cargo xtask fuzz`.
const FUZZ_SECONDS: u32 = 60;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify           Run full verification suite (all feature sets + clippy)
  test             Run all Rust tests
  check            Quick check (cargo test + clippy)
  bench            Run benchmarks
  fuzz [TARGET]    Run cargo-fuzz for {FUZZ_SECONDS}s per target
                   Targets: {}
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("namekeys Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Running tests (default features)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ Tests passed\n");

    println!("[2/4] Running tests (no default features)...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Sequential, ASCII-only build passed\n");

    println!("[3/4] Running release-mode tests (contracts off)...");
    run_cargo(&["test", "--quiet", "--release", "--lib"])?;
    println!("✓ Release tests passed\n");

    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run one fuzz target, or every target in turn.
fn fuzz(target: Option<&str>) -> Result<()> {
    let targets: Vec<&str> = match target {
        Some(target) if FUZZ_TARGETS.contains(&target) => vec![target],
        Some(target) => bail!(
            "unknown fuzz target {:?} (expected one of: {})",
            target,
            FUZZ_TARGETS.join(", ")
        ),
        None => FUZZ_TARGETS.to_vec(),
    };

    let fuzz_dir = project_root()?.join("fuzz");
    let max_time = format!("-max_total_time={FUZZ_SECONDS}");
    for target in targets {
        println!("Fuzzing {target} for {FUZZ_SECONDS}s...");
        run_cargo_in(&fuzz_dir, &["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }
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
    run_cargo_in(&project_root()?, args)
}

fn run_cargo_in(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
