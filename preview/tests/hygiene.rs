//! Hygiene — enforces coding standards at test time
//!
//! Scans the preview crate source tree for antipatterns that violate project
//! standards. Each pattern has a budget of zero: rendering and input code
//! must propagate errors, never crash the tab or silently drop failures.

use std::fs;
use std::path::Path;

/// (pattern, label) pairs that must not appear in production source.
const FORBIDDEN: &[(&str, &str)] = &[
    // Panics — these crash the wasm instance.
    (".unwrap()", ".unwrap()"),
    (".expect(", ".expect()"),
    ("panic!(", "panic!()"),
    ("unreachable!(", "unreachable!()"),
    ("todo!(", "todo!()"),
    ("unimplemented!(", "unimplemented!()"),
    // Silent loss — discards errors without inspecting.
    ("let _ =", "let _ ="),
    (".ok()", ".ok()"),
    // Structure.
    ("#[allow(dead_code)]", "#[allow(dead_code)]"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `preview/src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

#[test]
fn forbidden_pattern_budgets() {
    let files = source_files();
    assert!(!files.is_empty(), "no source files found; run from the crate root");

    let mut violations = Vec::new();
    for (pattern, label) in FORBIDDEN {
        for file in &files {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            if count > 0 {
                violations.push(format!("  {label} x{count} in {}", file.path));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "hygiene budget exceeded:\n{}",
        violations.join("\n")
    );
}
