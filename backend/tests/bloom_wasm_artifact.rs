use std::{collections::HashSet, fs, path::PathBuf};

use wasmparser::{Parser, Payload, Validator};

fn wasm_pkg_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("backend manifest must have a parent directory")
        .join("frontend")
        .join("bloom-wasm")
        .join("pkg")
}

fn wasm_and_js_paths() -> (PathBuf, PathBuf) {
    let pkg_dir = wasm_pkg_dir();
    (
        pkg_dir.join("bloom_sim_bg.wasm"),
        pkg_dir.join("bloom_sim.js"),
    )
}

// build.rs only warns when the wasm toolchain is missing, so the bundle
// may legitimately be absent.
fn bundle_built() -> bool {
    let (wasm_path, js_path) = wasm_and_js_paths();
    if wasm_path.is_file() && js_path.is_file() {
        return true;
    }
    eprintln!(
        "bloom wasm bundle not built in {}, skipping",
        wasm_pkg_dir().display()
    );
    false
}

#[test]
fn bloom_wasm_artifact_exports_expected_symbols() {
    if !bundle_built() {
        return;
    }
    let (wasm_path, _) = wasm_and_js_paths();

    let wasm_bytes = fs::read(&wasm_path)
        .unwrap_or_else(|err| panic!("Failed to read {}: {err}", wasm_path.display()));

    // Validate the module structure and collect its export names.
    let mut validator = Validator::new();
    let mut exports = HashSet::new();
    for payload in Parser::new(0).parse_all(&wasm_bytes) {
        let payload = payload.expect("wasm payload parsing failed");
        validator
            .payload(&payload)
            .expect("wasm module failed validation");

        if let Payload::ExportSection(section) = payload {
            for export in section {
                let export = export.expect("failed to parse export entry");
                exports.insert(export.name.to_owned());
            }
        }
    }

    let expected = [
        "bloom_init",
        "bloom_resize",
        "bloom_step",
        "bloom_tick",
        "bloom_reset",
        "bloom_background",
        "bloom_draw_ptr",
        "bloom_draw_len",
        "bloom_shape_count",
        "bloom_flower_count",
        "bloom_heart_count",
        "bloom_inbox_ptr",
        "bloom_inbox_capacity",
        "bloom_load_lyrics",
        "bloom_next_resource",
        "bloom_carousel_init",
        "bloom_carousel_request",
        "bloom_carousel_poll",
        "bloom_carousel_index",
        "bloom_escalation_init",
        "bloom_escalation_press",
        "bloom_escalation_font_px",
    ];

    let missing: Vec<_> = expected
        .iter()
        .filter(|name| !exports.contains(**name))
        .copied()
        .collect();

    assert!(
        missing.is_empty(),
        "WASM missing expected exports: {:?}",
        missing
    );
}

#[test]
fn bloom_wasm_js_glue_targets_embedded_wasm() {
    if !bundle_built() {
        return;
    }
    let (_, js_path) = wasm_and_js_paths();

    let js = fs::read_to_string(&js_path)
        .unwrap_or_else(|err| panic!("Failed to read {}: {err}", js_path.display()));

    assert!(
        js.contains("bloom_sim_bg.wasm"),
        "JS glue does not reference the bundled wasm binary"
    );
    assert!(
        js.contains("export default __wbg_init"),
        "JS glue is missing the default init export"
    );
}
