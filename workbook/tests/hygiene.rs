//! Hygiene — enforces coding standards at test time
//!
//! Scans the workbook crate's production sources for patterns that crash or
//! silently swallow errors. Decoding runs on untrusted user files, so every
//! budget is zero and stays zero.

use std::fs;
use std::path::Path;

/// (pattern, budget, what it means)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "crashes the decoder"),
    ("unreachable!(", 0, "crashes the decoder"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards a result without inspecting it"),
    (".ok()", 0, "turns an error into silence"),
    ("allow(dead_code)", 0, "hides unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, sibling `_test.rs` files excluded.
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
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_were_found() {
    let files = source_files();
    assert!(
        files.iter().any(|f| f.path.ends_with("decode.rs")),
        "hygiene scan must run from the workbook crate root"
    );
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, meaning) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("  `{pattern}` ({meaning}): found {count}, max {budget}\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
