//! Integration Test: Headless Core
//!
//! `folio-core` holds the widget logic for every surface. It must not depend
//! on a terminal, clipboard or async runtime; those belong to `sysfolio-tui`.

use std::fs;

use architectural_enforcement::{code_part, dependency_names, scan, workspace_root};

const SURFACE_CRATES: [&str; 5] = ["ratatui", "crossterm", "arboard", "tokio", "futures"];

#[test]
fn test_core_manifest_has_no_surface_crates() {
    let manifest = fs::read_to_string(workspace_root().join("folio/core/Cargo.toml"))
        .expect("folio/core/Cargo.toml should be readable");
    let deps = dependency_names(&manifest);

    assert!(deps.iter().any(|d| d == "serde"), "manifest parse failed: {deps:?}");
    for forbidden in SURFACE_CRATES {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "folio-core depends on {forbidden}"
        );
    }
}

#[test]
fn test_core_sources_import_no_surface_crates() {
    let violations = scan(&["folio/core/src"], |_, lines, idx| {
        let code = code_part(lines[idx]);
        SURFACE_CRATES
            .iter()
            .any(|krate| code.contains(&format!("{krate}::")))
    });

    assert!(violations.is_empty(), "surface crates used in core: {violations:#?}");
}

#[test]
fn test_tui_depends_on_core() {
    let manifest = fs::read_to_string(workspace_root().join("tui/Cargo.toml"))
        .expect("tui/Cargo.toml should be readable");
    assert!(dependency_names(&manifest).iter().any(|d| d == "folio-core"));
}
