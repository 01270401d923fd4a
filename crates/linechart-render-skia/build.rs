// File: crates/linechart-render-skia/build.rs
// Summary: Links the Windows system libraries skia-safe's prebuilt binaries expect.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager calls RegOpenKeyExW / RegQueryInfoKeyW.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
