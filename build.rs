use std::{env, process::Command};

const SHA_VAR: &str = "SHELTER_UI_GIT_SHA";

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed={SHA_VAR}");

    // Release images are built from a tarball without `.git`; CI passes the
    // commit in the environment instead.
    let commit = env::var(SHA_VAR)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(describe_head)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env={SHA_VAR}={commit}");
}

/// Abbreviated commit, suffixed `-dirty` for uncommitted changes.
fn describe_head() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=8"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    (!described.is_empty()).then(|| described.to_string())
}
