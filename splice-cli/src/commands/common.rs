use std::path::Path;

use anyhow::Context;
use splice::Pattern;

/// Decode a pattern file, attaching the path to any failure.
pub fn load_pattern(path: &Path) -> anyhow::Result<Pattern> {
    Pattern::from_file(path).with_context(|| format!("failed to load pattern: {}", path.display()))
}
