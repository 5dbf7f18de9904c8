//! Stamps build metadata read by `src/version.rs`

use std::process::Command;

fn main() {
    // YYYY-MM-DD, shown by `kbump version`
    let date = chrono::Utc::now().format("%Y-%m-%d");
    println!("cargo:rustc-env=BUILD_DATE={}", date);

    // Absent outside a git checkout (e.g. a crates.io tarball)
    if let Some(sha) = git_short_sha() {
        println!("cargo:rustc-env=GIT_SHA={}", sha);
    }

    // Cargo sets TARGET for build scripts only; forward it to the crate
    if let Ok(target) = std::env::var("TARGET") {
        println!("cargo:rustc-env=TARGET={}", target);
    }

    // A new commit moves HEAD
    println!("cargo:rerun-if-changed=.git/HEAD");
}

fn git_short_sha() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let sha = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!sha.is_empty()).then_some(sha)
}
