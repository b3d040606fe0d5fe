//! Check command implementation

use std::path::Path;

use anyhow::{Result, bail};

use scopedoc::hierarchy::ScopeHierarchy;
use scopedoc::validate::check_hierarchy;

/// Validate the scope hierarchy: dangling subscope references, scopes with
/// multiple parents, and subscope cycles.
pub fn check_command(scopes_path: Option<&Path>) -> Result<()> {
    let defs = super::load_definitions(scopes_path)?;
    let problems = check_hierarchy(&defs);

    if problems.is_empty() {
        let top_level = ScopeHierarchy::build(&defs).roots().len();
        println!(
            "✓ Scope hierarchy OK ({} scopes, {} top-level).",
            defs.len(),
            top_level
        );
        return Ok(());
    }

    for problem in &problems {
        println!("  ✗ {problem}");
    }
    bail!("{} problem(s) found in the scope hierarchy", problems.len())
}
