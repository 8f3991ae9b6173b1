//! Version abbreviation for edge labels

const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";
const SNAPSHOT_ABBREVIATION: &str = "-S.";

/// Shorten a version string for display on an edge.
///
/// The transform is deterministic and idempotent: abbreviating an already
/// abbreviated version returns it unchanged.
pub fn abbreviate_version(version: &str) -> String {
    match version.strip_suffix(SNAPSHOT_SUFFIX) {
        Some(base) => format!("{base}{SNAPSHOT_ABBREVIATION}"),
        None => version.to_string(),
    }
}
