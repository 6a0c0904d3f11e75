//! Cross-process determinism test.
//!
//! Spawns the `ladder_fixture` binary under several environment variants
//! and asserts that all produce identical stdout. Ladders, graph digests
//! and bundle digests must not depend on cwd, locale or unrelated env vars.

use std::path::{Path, PathBuf};
use std::process::Command;

/// `cargo test` puts test binaries in `target/<profile>/deps/`; the
/// fixture binary lives one level up.
fn binary_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push(format!("ladder_fixture{}", std::env::consts::EXE_SUFFIX));
    path
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Run the fixture with `work_dir` as cwd and the given env overrides.
fn run_variant(work_dir: &Path, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!(
            "failed to spawn {} (work_dir={}, overrides={env_overrides:?}): {e}",
            bin.display(),
            work_dir.display()
        )
    });
    assert!(
        output.status.success(),
        "ladder_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    let tmp = tempfile::tempdir().unwrap();
    assert_eq!(baseline, run_variant(tmp.path(), &[]), "cwd changed output");

    assert_eq!(
        baseline,
        run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]),
        "LC_ALL=C LANG=C changed output"
    );
    assert_eq!(
        baseline,
        run_variant(&root, &[("LC_ALL", "tr_TR.UTF-8"), ("LANG", "tr_TR.UTF-8")]),
        "Turkish locale changed output"
    );
    assert_eq!(
        baseline,
        run_variant(
            &root,
            &[
                ("LADDER_NOISE", "should_not_matter"),
                ("TZ", "Europe/Istanbul"),
                ("RUST_LOG", "trace"),
            ],
        ),
        "spurious env vars changed output"
    );
}

#[test]
fn crossproc_output_reports_sample_ladders() {
    let output = run_variant(&workspace_root(), &[]);
    let lines: Vec<&str> = output.lines().collect();

    // Six lines per query, six sample queries.
    assert_eq!(lines.len(), 6 * 6, "{output}");
    for expected in [
        "ladder=kedi -> keçi -> kuçi -> kuçu",
        "ladder=masa -> mana -> sana -> saka -> şaka",
        "ladder=elma -> alma -> arma -> arka",
        "ladder=test",
        "status=invalid_input",
        "search_graph_digest=none",
    ] {
        assert!(lines.contains(&expected), "missing {expected:?}:\n{output}");
    }
    assert_eq!(
        lines.iter().filter(|l| **l == "ladder=not found").count(),
        2,
        "kuzu -> dolu and ev -> gül"
    );
    assert!(lines
        .iter()
        .filter(|l| l.starts_with("bundle_digest="))
        .all(|l| l.starts_with("bundle_digest=sha256:")));
}
