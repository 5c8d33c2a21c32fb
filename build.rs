use chrono::Datelike;

fn main() {
    // Capture the current timestamp as the build time
    let now = chrono::Utc::now();

    // Also set as environment variables for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // Rerun if build.rs or the portfolio document changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=data/portfolio.json");
}
