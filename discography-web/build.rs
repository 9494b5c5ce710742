//! Build script for discography-web
//!
//! Captures build identification for the startup log line: short git
//! hash, build timestamp, build profile.

use std::process::Command;

/// Short commit hash, or `DISCOGRAPHY_GIT_HASH` when building outside a
/// checkout (release tarballs), or `unknown`
fn git_short_hash() -> String {
    let from_git = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    from_git
        .or_else(|| std::env::var("DISCOGRAPHY_GIT_HASH").ok())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    let build_timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=GIT_HASH={}", git_short_hash());
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", build_timestamp);
    println!("cargo:rustc-env=BUILD_PROFILE={}", profile);
    println!("cargo:rerun-if-env-changed=DISCOGRAPHY_GIT_HASH");
    println!("cargo:rerun-if-changed=../.git/HEAD");
}
