//! Stamps the build with a version and commit for `/status` and the startup log.
//!
//! `NAVBAR_VERSION` falls back to the package version. `NAVBAR_GIT_SHA` falls
//! back to a shortened `GITHUB_SHA` on CI, then to `git rev-parse`.

use std::env;
use std::process::Command;

const SHORT_SHA_LEN: usize = 7;

fn main() {
    for var in ["NAVBAR_VERSION", "NAVBAR_GIT_SHA", "GITHUB_SHA"] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let version = env::var("NAVBAR_VERSION")
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|_| "unknown".into());

    let git_sha = env::var("NAVBAR_GIT_SHA")
        .ok()
        .or_else(|| env::var("GITHUB_SHA").ok().map(short_sha))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=NAVBAR_VERSION={version}");
    println!("cargo:rustc-env=NAVBAR_GIT_SHA={git_sha}");
}

fn short_sha(sha: String) -> String {
    sha.chars().take(SHORT_SHA_LEN).collect()
}

fn git_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let sha = String::from_utf8(output.stdout).ok()?;
    Some(sha.trim().to_string()).filter(|s| !s.is_empty())
}
