//! Source snippets under `tests/snippets`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Directory holding the `.php` snippets and their `.yml` expectations.
pub fn snippets_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("snippets")
}

/// Every `.php` snippet, sorted by path.
pub fn php_snippets() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(snippets_dir())
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "php"))
        .collect();
    paths.sort();
    paths
}

/// Snippets that have a recorded expected tree next to them.
pub fn golden_snippets() -> Vec<(PathBuf, PathBuf)> {
    php_snippets()
        .into_iter()
        .filter_map(|php| {
            let yml = php.with_extension("yml");
            yml.is_file().then_some((php, yml))
        })
        .collect()
}

pub fn read(path: &Path) -> Vec<u8> {
    std::fs::read(path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}
