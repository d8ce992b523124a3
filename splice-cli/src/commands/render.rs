use std::path::Path;

use crate::commands::common::load_pattern;

/// Print the canonical text report. The output is byte-exact, including the
/// tab separator and trailing newline, so it can be diffed by consumers.
pub fn run(path: &Path) -> anyhow::Result<()> {
    let pattern = load_pattern(path)?;
    print!("{pattern}");
    Ok(())
}
