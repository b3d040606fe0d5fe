//! Generate command implementation

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use scopedoc::{SCOPE_TABLE_FILE, ScopeTableGenerator};

/// Generate the scope table and write it to `output` (default:
/// `scope-table.md` in the working directory).
pub fn generate_command(scopes_path: Option<&Path>, output: Option<PathBuf>) -> Result<()> {
    let defs = super::load_definitions(scopes_path)?;
    debug!("Loaded {} scope definitions", defs.len());

    let output = output.unwrap_or_else(|| PathBuf::from(SCOPE_TABLE_FILE));
    ScopeTableGenerator::new(&defs).write_table(&output)
}
