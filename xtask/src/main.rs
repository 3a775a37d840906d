//! Custom cargo commands for the oeis crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Contracts in src/contracts.rs each carry one marker
const MIN_INVARIANT_MARKERS: usize = 5;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + catalog names + tests + clippy)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("OEIS Crate Verification Suite");
    println!("==========================================\n");

    // Step 1: Check invariant markers
    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    // Step 2: Catalog names are unique and well-formed
    println!("[2/4] Checking catalog names...");
    let count = check_catalog_names()?;
    println!("✓ {} catalog names, no duplicates\n", count);

    // Step 3: Run tests
    println!("[3/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    // Step 4: Clippy
    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
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
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
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

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let contracts = fs::read_to_string(root.join("src/contracts.rs"))
        .context("Failed to read contracts.rs")?;

    let count = contracts.matches("INVARIANT:").count();

    if count < MIN_INVARIANT_MARKERS {
        bail!(
            "Expected at least {} INVARIANT markers, found {}. Someone may have removed a contract!",
            MIN_INVARIANT_MARKERS,
            count
        );
    }

    Ok(())
}

/// Every quoted `"Annnnnn"` that opens a line in src/catalog names a
/// registration. Duplicates panic at startup; catch them before that.
fn check_catalog_names() -> Result<usize> {
    let catalog_dir = project_root()?.join("src/catalog");
    let mut seen: BTreeMap<String, String> = BTreeMap::new();

    for entry in fs::read_dir(&catalog_dir).context("Failed to read src/catalog")? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }
        let file = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        for line in source.lines() {
            let Some(name) = registered_name(line) else {
                continue;
            };
            if let Some(previous) = seen.insert(name.to_string(), file.clone()) {
                bail!("{} registered in both {} and {}", name, previous, file);
            }
        }
    }

    if seen.is_empty() {
        bail!("No catalog registrations found in {}", catalog_dir.display());
    }
    Ok(seen.len())
}

/// `"A000045",` on a line of its own, as the register calls are formatted.
fn registered_name(line: &str) -> Option<&str> {
    let name = line.trim().strip_prefix('"')?.strip_suffix("\",")?;
    let well_formed = name.len() == 7
        && name.starts_with('A')
        && name[1..].bytes().all(|b| b.is_ascii_digit());
    well_formed.then_some(name)
}
