fn main() {
    // Use VERSION/COMMIT env vars if set (from CI), otherwise fall back to Cargo.toml version
    let version =
        std::env::var("VERSION").unwrap_or_else(|_| std::env::var("CARGO_PKG_VERSION").unwrap());
    let commit = std::env::var("COMMIT").unwrap_or_else(|_| "HEAD".to_string());
    println!("cargo:rustc-env=EASY_ADD_VERSION={}", version);
    println!("cargo:rustc-env=EASY_ADD_COMMIT={}", commit);
    println!("cargo:rerun-if-env-changed=VERSION");
    println!("cargo:rerun-if-env-changed=COMMIT");
}
