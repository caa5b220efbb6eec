use std::path::Path;

use crate::error::TargetsError;
use crate::probe::Target;

/// Read the target list from `path`.
/// The file is read in full on every call so edits take effect on the next round.
pub async fn load_targets(path: &Path) -> Result<Vec<Target>, TargetsError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| TargetsError {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(parse_targets(&contents))
}

/// One target per line, surrounding whitespace trimmed, blank lines skipped.
pub fn parse_targets(contents: &str) -> Vec<Target> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Target::from)
        .collect()
}
