//! Embeds the build date and short commit hash shown by `hotcold --version`.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn main() {
    let commit = env::var("BUILD_COMMIT").unwrap_or_else(|_| git_short_hash());
    let date = env::var("BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string());

    let out_dir = env::var("OUT_DIR").unwrap();
    fs::write(
        Path::new(&out_dir).join("build_info.rs"),
        format!(
            "pub const BUILD_COMMIT: &str = {commit:?};\npub const BUILD_DATE: &str = {date:?};\n"
        ),
    )
    .unwrap();

    println!("cargo:rerun-if-env-changed=BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}

fn git_short_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
