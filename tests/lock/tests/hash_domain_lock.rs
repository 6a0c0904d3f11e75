//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has expected count (catches forgotten additions to ALL)
//! 2. All domain byte strings are unique and null-terminated
//! 3. All domains follow `LADDER::*::V1\0` naming convention
//! 4. No raw `LADDER::` domain literals in production source outside `hash_domain.rs`

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use ladder_kernel::proof::hash::HashDomain;

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        7,
        "if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_bytes_unique_and_terminated() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(seen.insert(domain.as_bytes()), "duplicate domain bytes: {domain}");
        assert!(domain.as_bytes().ends_with(&[0]), "{domain} is not null-terminated");
    }
}

#[test]
fn hash_domain_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(bytes.starts_with(b"LADDER::"), "{domain}");
        assert!(bytes.ends_with(b"::V1\0"), "{domain}");
    }
}

/// Scan kernel/, search/, harness/ source for `b"LADDER::` literals.
/// Test modules are skipped by brace-depth tracking.
#[test]
fn no_raw_domain_literals_outside_authority() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let pattern = "b\"LADDER::";
    let mut violations = Vec::new();

    for crate_dir in ["kernel", "search", "harness"] {
        for path in rust_files(&root.join(crate_dir).join("src")) {
            if path.file_name().and_then(|n| n.to_str()) == Some("hash_domain.rs") {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            for (line_no, line) in production_lines(&content) {
                if line.contains(pattern) {
                    violations.push(format!("  {}:{line_no}: {}", path.display(), line.trim()));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "raw LADDER:: domain literals found outside hash_domain.rs:\n{}",
        violations.join("\n")
    );
}

/// Non-comment lines outside `#[cfg(test)]` blocks, 1-based.
fn production_lines(content: &str) -> Vec<(usize, &str)> {
    let mut lines = Vec::new();
    let mut depth: usize = 0;
    let mut skip_above: Option<usize> = None;
    let mut cfg_test_pending = false;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.contains("#[cfg(test)]") {
            cfg_test_pending = true;
            continue;
        }
        let opens = line.matches('{').count();
        let closes = line.matches('}').count();
        if cfg_test_pending && opens > 0 {
            skip_above = Some(depth);
            cfg_test_pending = false;
        }
        depth = depth.saturating_add(opens).saturating_sub(closes);

        if let Some(limit) = skip_above {
            if depth <= limit {
                skip_above = None;
            }
            continue;
        }
        if !trimmed.starts_with("//") {
            lines.push((i + 1, line));
        }
    }
    lines
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let Ok(entries) = std::fs::read_dir(dir) else {
        return files;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().is_some_and(|e| e == "rs") {
            files.push(path);
        }
    }
    files
}
