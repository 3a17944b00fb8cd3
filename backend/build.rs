use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

// Compiles frontend/bloom-wasm for the browser and runs wasm-bindgen over it,
// leaving the bundle in frontend/bloom-wasm/pkg for ServeDir to hand out.
// A missing wasm toolchain only warns: the server runs fine without the bundle.

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR missing"));
    let workspace_root = manifest_dir
        .parent()
        .expect("backend must live inside workspace")
        .to_path_buf();
    let bloom_crate = workspace_root.join("frontend/bloom-wasm");
    let bloom_src = bloom_crate.join("src");
    let pkg_dir = bloom_crate.join("pkg");

    println!(
        "cargo:rerun-if-changed={}",
        bloom_crate.join("Cargo.toml").display()
    );
    println!("cargo:rerun-if-changed={}", bloom_src.display());
    println!("cargo:rerun-if-changed={}", pkg_dir.display());
    println!("cargo:rerun-if-env-changed=WASM_BINDGEN");
    println!("cargo:rerun-if-env-changed=SKIP_BLOOM_WASM_BUILD");

    let skip_wasm_build = env::var("CI").is_ok() || env::var("SKIP_BLOOM_WASM_BUILD").is_ok();
    if skip_wasm_build {
        if bundle_present(&pkg_dir) {
            println!(
                "cargo:warning=Skipping bloom_wasm build; using prebuilt artifacts in {}",
                pkg_dir.display()
            );
        } else {
            println!(
                "cargo:warning=Skipping bloom_wasm build and no prebuilt bundle in {}; the page will not animate",
                pkg_dir.display()
            );
        }
        return;
    }

    if let Err(e) = build_bundle(&workspace_root, &pkg_dir) {
        println!("cargo:warning=bloom_wasm bundle not built: {e}");
    }
}

fn bundle_present(pkg_dir: &Path) -> bool {
    pkg_dir.join("bloom_sim_bg.wasm").is_file() && pkg_dir.join("bloom_sim.js").is_file()
}

fn build_bundle(workspace_root: &Path, pkg_dir: &Path) -> Result<(), String> {
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    let base_rustflags = env::var("RUSTFLAGS").unwrap_or_default();
    let mut rustflags = base_rustflags.trim().to_string();
    if !rustflags.is_empty() {
        rustflags.push(' ');
    }
    rustflags.push_str("-C opt-level=3 -C codegen-units=1 -C lto=fat");

    let default_target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| workspace_root.join("target"));
    let wasm_target_dir = default_target_dir.join("wasm-cache");

    let build_status = Command::new(&cargo)
        .current_dir(workspace_root)
        .args([
            "build",
            "--package",
            "bloom_wasm",
            "--release",
            "--target",
            "wasm32-unknown-unknown",
        ])
        .env_remove("CARGO_ENCODED_RUSTFLAGS")
        .env("RUSTFLAGS", &rustflags)
        .env("CARGO_TARGET_DIR", &wasm_target_dir)
        .status()
        .map_err(|err| format!("failed to invoke cargo for bloom_wasm: {err}"))?;

    if !build_status.success() {
        return Err(
            "building bloom_wasm failed (is the wasm32-unknown-unknown target installed?)".into(),
        );
    }

    let target_wasm = wasm_target_dir.join("wasm32-unknown-unknown/release/bloom_wasm.wasm");
    if !target_wasm.exists() {
        return Err(format!("expected wasm artifact at {}", target_wasm.display()));
    }

    if pkg_dir.exists() {
        fs::remove_dir_all(pkg_dir).map_err(|err| format!("unable to clear pkg dir: {err}"))?;
    }
    fs::create_dir_all(pkg_dir).map_err(|err| format!("unable to create pkg dir: {err}"))?;

    let wasm_bindgen = env::var("WASM_BINDGEN").unwrap_or_else(|_| "wasm-bindgen".to_string());
    let bindgen_status = Command::new(&wasm_bindgen)
        .arg("--target")
        .arg("web")
        .arg("--out-dir")
        .arg(pkg_dir)
        .arg("--out-name")
        .arg("bloom_sim")
        .arg(&target_wasm)
        .status()
        .map_err(|err| {
            format!(
                "failed to run {wasm_bindgen} (install via `cargo install wasm-bindgen-cli` or set WASM_BINDGEN): {err}"
            )
        })?;

    if !bindgen_status.success() {
        return Err("wasm-bindgen emitted a non-zero exit status".into());
    }
    Ok(())
}
