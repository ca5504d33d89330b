//! Fake formatter executables
//!
//! Each helper writes a small `/bin/sh` script into a directory and marks it
//! executable, so tests can exercise the stdin → stdout formatter contract
//! without a Go toolchain installed.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write an executable shell script `dir/name` with the given body
///
/// # Panics
///
/// Panics if the script cannot be written or made executable.
pub fn fake_formatter(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body))
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));

    let mut perms = fs::metadata(&path)
        .expect("Failed to stat fake formatter")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("Failed to chmod fake formatter");

    path
}

/// Copies stdin to stdout unchanged
pub fn passthrough_formatter(dir: &Path) -> PathBuf {
    fake_formatter(dir, "fmt-cat", "exec cat")
}

/// Consumes stdin, prints a diagnostic, and exits with `code`
pub fn failing_formatter(dir: &Path, code: i32) -> PathBuf {
    fake_formatter(
        dir,
        &format!("fmt-fail-{}", code),
        &format!("cat >/dev/null\necho 'syntax error' >&2\nexit {}", code),
    )
}

/// Uppercases everything, proving the output went through the formatter
pub fn uppercasing_formatter(dir: &Path) -> PathBuf {
    fake_formatter(dir, "fmt-upper", "exec tr 'a-z' 'A-Z'")
}

/// Records its arguments (one per line) in `record`, then copies stdin to stdout
pub fn recording_formatter(dir: &Path, record: &Path) -> PathBuf {
    fake_formatter(
        dir,
        "fmt-record",
        &format!(
            "printf '%s\\n' \"$@\" > '{}'\nexec cat",
            record.display()
        ),
    )
}
