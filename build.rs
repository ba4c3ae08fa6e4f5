use std::process::Command;

fn main() {
    // Get git commit hash (short)
    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    // Check if we're on a tagged release
    let is_release = Command::new("git")
        .args(["describe", "--exact-match", "--tags", "HEAD"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);

    // Set version suffix for development builds
    if !is_release && git_hash != "unknown" {
        println!("cargo:rustc-env=DOCGEN_VERSION_SUFFIX=-dev.{}", git_hash);
    } else {
        println!("cargo:rustc-env=DOCGEN_VERSION_SUFFIX=");
    }

    // Rebuild if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");
}
