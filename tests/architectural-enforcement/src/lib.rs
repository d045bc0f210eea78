//! Architectural Enforcement
//!
//! Source scanners shared by the integration tests in `tests/`:
//! - No sleep calls in production code (timers go through the scheduler or
//!   `tokio::time::interval`)
//! - No `unwrap()`/`expect()` in production code
//! - The widget core stays free of terminal crates
//!
//! Production code is everything in a file before its `#[cfg(test)]` module.

use std::fs;
use std::path::{Path, PathBuf};

/// A rule broken at a specific line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// File the line is in
    pub path: PathBuf,
    /// 1-based line number
    pub line: usize,
    /// The offending line, trimmed
    pub text: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} - {}", self.path.display(), self.line, self.text)
    }
}

/// Workspace root (two levels above this crate)
pub fn workspace_root() -> PathBuf {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(Path::parent)
        .map_or_else(|| manifest.to_path_buf(), Path::to_path_buf)
}

/// Every `.rs` file under `dir` (relative to the workspace root)
pub fn rust_files(dir: &str) -> Vec<PathBuf> {
    let root = workspace_root().join(dir);
    if !root.exists() {
        return Vec::new();
    }

    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// The code part of a line, without any `//` comment
pub fn code_part(line: &str) -> &str {
    line.split("//").next().unwrap_or(line)
}

/// Lines before the first `#[cfg(test)]`
pub fn production_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .take_while(|line| !line.trim_start().starts_with("#[cfg(test)]"))
        .collect()
}

/// Run `matches` over the production lines of every file under `dirs`
pub fn scan<F>(dirs: &[&str], matches: F) -> Vec<Violation>
where
    F: Fn(&Path, &[&str], usize) -> bool,
{
    let mut violations = Vec::new();
    for dir in dirs {
        for path in rust_files(dir) {
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            let lines = production_lines(&content);
            for idx in 0..lines.len() {
                if matches(&path, &lines, idx) {
                    violations.push(Violation {
                        path: path.clone(),
                        line: idx + 1,
                        text: lines[idx].trim().to_string(),
                    });
                }
            }
        }
    }
    violations
}

/// Whether the line calls a sleep function
pub fn is_sleep_call(line: &str) -> bool {
    let code = code_part(line);
    code.contains("::sleep(") || code.contains(".sleep(") || code.contains("sleep_until(")
}

/// Whether the line unwraps an `Option`/`Result` with a panic
pub fn is_panicking_unwrap(line: &str) -> bool {
    let code = code_part(line);
    code.contains(".unwrap()") || code.contains(".expect(")
}

/// Whether a sleep at `idx` is inside a frame-rate limiter
///
/// Looks for frame or FPS wording in the ten lines before and five after.
pub fn is_frame_limiting_context(lines: &[&str], idx: usize) -> bool {
    let range = idx.saturating_sub(10)..std::cmp::min(idx + 5, lines.len());
    lines[range].iter().any(|line| {
        let line = line.to_lowercase();
        line.contains("frame") || line.contains("fps")
    })
}

/// Dependency names listed under `[dependencies]` in a manifest
pub fn dependency_names(manifest: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut in_deps = false;
    for line in manifest.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            in_deps = line == "[dependencies]";
            continue;
        }
        if !in_deps || line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((name, _)) = line.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_detection() {
        assert!(is_sleep_call("    tokio::time::sleep(Duration::from_millis(10)).await;"));
        assert!(is_sleep_call("std::thread::sleep(d);"));
        assert!(!is_sleep_call("// std::thread::sleep(d);"));
        assert!(!is_sleep_call("let mut frames = tokio::time::interval(d);"));
    }

    #[test]
    fn test_unwrap_detection() {
        assert!(is_panicking_unwrap("let x = y.unwrap();"));
        assert!(is_panicking_unwrap("let x = y.expect(\"boom\");"));
        assert!(!is_panicking_unwrap("let x = y.unwrap_or(0);"));
        assert!(!is_panicking_unwrap("/// let x = y.unwrap();"));
    }

    #[test]
    fn test_production_lines_stop_at_test_module() {
        let content = "fn a() {}\n\n#[cfg(test)]\nmod tests {\n    fn b() { x.unwrap(); }\n}\n";
        assert_eq!(production_lines(content), vec!["fn a() {}", ""]);
    }

    #[test]
    fn test_frame_limiting_detection() {
        let code = [
            "fn render_loop() {",
            "    let frame_duration = Duration::from_millis(100); // 10 FPS",
            "    loop {",
            "        render();",
            "        tokio::time::sleep(frame_duration).await;",
            "    }",
            "}",
        ];
        assert!(is_frame_limiting_context(&code, 4));

        let code = ["fn poll() {", "    tokio::time::sleep(d).await;", "}"];
        assert!(!is_frame_limiting_context(&code, 1));
    }

    #[test]
    fn test_dependency_names() {
        let manifest = r#"
[package]
name = "x"

[dependencies]
serde = { version = "1", features = ["derive"] }
toml = "0.8"

[dev-dependencies]
tempfile = "3"
"#;
        assert_eq!(dependency_names(manifest), vec!["serde", "toml"]);
    }
}
