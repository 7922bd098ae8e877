// build.rs - Build metadata for the `maybe` binary

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    generate_build_info();
    generate_version_info();
}

fn generate_build_info() {
    let git_hash = get_git_hash().unwrap_or_else(|| "unknown".to_string());
    let build_time = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

    println!("cargo:rustc-env=MAYBE_GIT_HASH={}", git_hash);
    println!("cargo:rustc-env=MAYBE_BUILD_TIME={}", build_time);
}

fn generate_version_info() {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
    let major_minor = version.split('.').take(2).collect::<Vec<_>>().join(".");

    println!("cargo:rustc-env=MAYBE_VERSION_MAJOR_MINOR={}", major_minor);
}

fn get_git_hash() -> Option<String> {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
            } else {
                None
            }
        })
}
