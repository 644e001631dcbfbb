//! Reference table location.

use std::path::PathBuf;

/// Environment variable for overriding the bundled reference table.
pub const STANDARDS_ENV_VAR: &str = "LABREF_STANDARDS_FILE";

/// Path of a reference table file that overrides the bundled one.
///
/// Returns `None` when `LABREF_STANDARDS_FILE` is unset or empty.
pub fn standards_override() -> Option<PathBuf> {
    std::env::var_os(STANDARDS_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Location of the bundled table inside the source tree.
pub fn bundled_table_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards/reference_ranges.toml")
}
