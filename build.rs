use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let git_hash = command_output("git", &["rev-parse", "--short", "HEAD"])
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=FINBTI_BUILD_HASH={git_hash}");

    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    println!("cargo:rustc-env=FINBTI_BUILD_TIMESTAMP={timestamp}");

    for (key, var) in [("TARGET", "FINBTI_BUILD_TARGET"), ("PROFILE", "FINBTI_BUILD_PROFILE")] {
        let value = env::var(key).unwrap_or_else(|_| "unknown".to_string());
        println!("cargo:rustc-env={var}={value}");
    }
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
