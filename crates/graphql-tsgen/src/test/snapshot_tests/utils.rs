use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;

pub fn get_fixtures_dir() -> &'static Path {
    static FIXTURES_DIR: OnceLock<PathBuf> = OnceLock::new();
    FIXTURES_DIR.get_or_init(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/test/snapshot_tests/fixtures")
    })
}

/// Normalizes line endings so fixtures checked out on Windows still match.
pub fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n")
}
