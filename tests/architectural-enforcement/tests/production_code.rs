//! Integration Test: Production Code Rules
//!
//! **Sleep prohibition**: widget time is virtual and driven by the scheduler;
//! the terminal loop waits on events and a `tokio::time::interval`. Nothing
//! in production code may sleep. Frame-rate limiting in `tui/src/app.rs` is
//! the one tolerated exception.
//!
//! **No panicking unwraps**: production code propagates errors or falls
//! back; `unwrap()`/`expect()` belong in tests.

use architectural_enforcement::{
    is_frame_limiting_context, is_panicking_unwrap, is_sleep_call, rust_files, scan,
};

const PRODUCTION_DIRS: [&str; 2] = ["folio/core/src", "tui/src"];

#[test]
fn test_no_sleep_in_production_code() {
    let violations = scan(&PRODUCTION_DIRS, |path, lines, idx| {
        if !is_sleep_call(lines[idx]) {
            return false;
        }
        let frame_loop = path.ends_with("tui/src/app.rs") && is_frame_limiting_context(lines, idx);
        !frame_loop
    });

    if !violations.is_empty() {
        for violation in &violations {
            eprintln!("  sleep: {violation}");
        }
        panic!(
            "Found {} sleep call(s) in production code; use the scheduler or an interval",
            violations.len()
        );
    }
}

#[test]
fn test_no_panicking_unwraps_in_production_code() {
    let violations = scan(&PRODUCTION_DIRS, |_, lines, idx| is_panicking_unwrap(lines[idx]));

    if !violations.is_empty() {
        for violation in &violations {
            eprintln!("  unwrap: {violation}");
        }
        panic!("Found {} unwrap()/expect() call(s) in production code", violations.len());
    }
}

#[test]
fn test_scanner_sees_the_workspace() {
    let files = rust_files("folio/core/src");
    assert!(files.iter().any(|p| p.ends_with("scheduler.rs")));
    assert!(!rust_files("tui/src").is_empty());
}
