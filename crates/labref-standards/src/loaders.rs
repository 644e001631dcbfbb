use std::path::Path;

use tracing::{debug, info};

use crate::error::StandardsError;
use crate::manifest::TableFile;
use crate::paths::standards_override;
use crate::registry::ReferenceTable;

/// Reference table compiled into the binary.
const BUNDLED_TABLE: &str = include_str!("../../../standards/reference_ranges.toml");
const BUNDLED_ORIGIN: &str = "<bundled>/reference_ranges.toml";

/// Load the bundled reference table.
pub fn load_bundled_reference_table() -> Result<ReferenceTable, StandardsError> {
    parse_reference_table(BUNDLED_TABLE, Path::new(BUNDLED_ORIGIN))
}

/// Load the active reference table.
///
/// Resolution order:
/// 1. `explicit` path (the CLI's `--standards` flag)
/// 2. `LABREF_STANDARDS_FILE` environment variable
/// 3. the bundled table
pub fn load_default_reference_table(
    explicit: Option<&Path>,
) -> Result<ReferenceTable, StandardsError> {
    if let Some(path) = explicit {
        return load_reference_table(path);
    }
    if let Some(path) = standards_override() {
        return load_reference_table(&path);
    }
    debug!("using bundled reference table");
    load_bundled_reference_table()
}

/// Load and validate a reference table file.
pub fn load_reference_table(path: &Path) -> Result<ReferenceTable, StandardsError> {
    let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    let table = parse_reference_table(&text, path)?;
    info!(
        path = %path.display(),
        analyte_count = table.analyte_count(),
        panel_count = table.panels().len(),
        "loaded reference table"
    );
    Ok(table)
}

/// Parse and validate reference table text. `origin` is used in errors.
pub fn parse_reference_table(text: &str, origin: &Path) -> Result<ReferenceTable, StandardsError> {
    let file: TableFile = toml::from_str(text).map_err(|source| StandardsError::Toml {
        path: origin.to_path_buf(),
        source,
    })?;
    ReferenceTable::from_file(file)
}
