//! Hands the esp-hal and defmt linker scripts to the linker.
//! The board builds inside a workspace, so the scripts are passed here rather
//! than through a `.cargo/config.toml` at the workspace root, which would
//! also apply to the host-only crates.

fn main() {
    println!("cargo:rustc-link-arg=-Tlinkall.x");
    println!("cargo:rustc-link-arg=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");
}
