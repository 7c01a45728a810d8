use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Reported by `gridfit --version`
    println!(
        "cargo:rustc-env=BUILD_DATE={}",
        Utc::now().format("%Y-%m-%d")
    );
}
