//! CLI command implementations

pub mod check;
pub mod generate;

use std::path::Path;

use anyhow::{Context, Result};

use scopedoc::ScopeDefinitions;

/// Load scope definitions from an explicit TOML file, or fall back to the
/// built-in embedded set.
pub fn load_definitions(scopes_path: Option<&Path>) -> Result<ScopeDefinitions> {
    match scopes_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read scope definitions: {}", path.display()))?;

            ScopeDefinitions::from_toml_str(&content)
                .with_context(|| format!("Failed to parse scope definitions: {}", path.display()))
        }
        None => ScopeDefinitions::builtin().context("Failed to parse built-in scope definitions"),
    }
}
