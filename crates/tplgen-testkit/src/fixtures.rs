//! Template fixtures

use std::path::{Path, PathBuf};

/// Generic list template exercising every built-in placeholder
pub const LIST_TEMPLATE: &str = "package PACKAGE

type ZZList struct {
\titems []ELEM
}

func NewZZList() *ZZList { return &ZZList{} }

func (l *ZZList) zzPush(v ELEM) { l.items = append(l.items, v) }
";

/// Write `contents` to `dir/name` and return the path
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_template(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents)
        .unwrap_or_else(|e| panic!("Failed to write template {}: {}", path.display(), e));
    path
}
