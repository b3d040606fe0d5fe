//! Scope table generation
//!
//! Walks the scope forest in pre-order and renders one markdown table row per
//! scope, indented by its depth in the hierarchy. The result is written to
//! `scope-table.md`, which the docs build includes verbatim.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::hierarchy::ScopeHierarchy;
use crate::scopes::{ScopeDefinition, ScopeDefinitions};
use crate::table::MarkdownTable;

/// Default output file, relative to the working directory
pub const SCOPE_TABLE_FILE: &str = "scope-table.md";

/// Title line preceding the table
pub const TABLE_TITLE: &str = "Table 1. Available scopes and their hierarchy";

/// Table column headers
pub const TABLE_HEADERS: [&str; 2] = ["Scope", "Grants permission to:"];

/// One level of indentation in the rendered scope label
const MD_INDENT: &str = "&nbsp;&nbsp;&nbsp;";

/// A rendered table row: indented code-formatted scope name plus its
/// composed description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub label: String,
    pub description: String,
}

/// Renders the scope reference table from a set of definitions.
///
/// The definitions are passed in by the caller; the generator holds no global
/// state and never mutates its input.
pub struct ScopeTableGenerator<'a> {
    scopes: &'a ScopeDefinitions,
}

impl<'a> ScopeTableGenerator<'a> {
    pub fn new(scopes: &'a ScopeDefinitions) -> Self {
        Self { scopes }
    }

    /// Produce one row per scope in pre-order DFS over the forest, roots and
    /// children in declaration order.
    ///
    /// Returns an error if a subscope is referenced but never defined. Cycles
    /// are not detected here (see [`crate::validate`]); generation trusts its
    /// input.
    pub fn table_rows(&self) -> Result<Vec<TableRow>> {
        let hierarchy = ScopeHierarchy::build(self.scopes);
        let mut rows = Vec::with_capacity(self.scopes.len());

        for root in hierarchy.roots() {
            self.push_rows(&hierarchy, &mut rows, root, 0)?;
        }

        debug!("Rendered {} scope rows", rows.len());
        Ok(rows)
    }

    fn push_rows(
        &self,
        hierarchy: &ScopeHierarchy,
        rows: &mut Vec<TableRow>,
        name: &str,
        depth: usize,
    ) -> Result<()> {
        let def = self.scopes.get(name).ok_or_else(|| {
            anyhow!("scope `{name}` is referenced as a subscope but never defined")
        })?;

        rows.push(TableRow {
            label: format!("{}`{}`", MD_INDENT.repeat(depth), name),
            description: compose_description(def),
        });

        for child in hierarchy.children(name) {
            self.push_rows(hierarchy, rows, child, depth + 1)?;
        }
        Ok(())
    }

    /// Render the complete file content: title line plus the markdown table
    pub fn render(&self) -> Result<String> {
        let mut table = MarkdownTable::new(TABLE_HEADERS);
        for row in self.table_rows()? {
            table.push_row([row.label, row.description]);
        }
        Ok(format!("{TABLE_TITLE}\n{}", table.render()))
    }

    /// Generate the table and write it to `path`, overwriting any existing
    /// content. The write is a plain overwrite, not atomic.
    pub fn write_table(&self, path: &Path) -> Result<()> {
        let content = self.render()?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write scope table: {}", path.display()))?;

        println!("Generated {}.", path.display());
        println!(
            "Run 'make clean' before 'make html' to ensure the rendered scopes page picks up the latest table."
        );
        Ok(())
    }
}

/// Compose a scope's rendered description. A non-empty metadescription is
/// appended as an italicized parenthetical, replacing any trailing periods.
fn compose_description(def: &ScopeDefinition) -> String {
    match def.metadescription.as_deref().filter(|m| !m.is_empty()) {
        Some(meta) => format!("{} _({meta})_.", def.description.trim_end_matches('.')),
        None => def.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_for(defs: &ScopeDefinitions) -> Vec<TableRow> {
        ScopeTableGenerator::new(defs)
            .table_rows()
            .expect("well-formed definitions must render")
    }

    #[test]
    fn test_child_listed_under_parent_with_indentation() {
        let defs = ScopeDefinitions::from(vec![
            ScopeDefinition::new("a", "A."),
            ScopeDefinition::new("b", "B.").with_subscopes(["a"]),
        ]);

        let rows = rows_for(&defs);
        assert_eq!(
            rows,
            vec![
                TableRow {
                    label: "`b`".into(),
                    description: "B.".into(),
                },
                TableRow {
                    label: "&nbsp;&nbsp;&nbsp;`a`".into(),
                    description: "A.".into(),
                },
            ]
        );
    }

    #[test]
    fn test_every_scope_rendered_exactly_once() {
        let defs = ScopeDefinitions::builtin().unwrap();
        let rows = rows_for(&defs);
        assert_eq!(rows.len(), defs.len());

        for def in defs.iter() {
            let expected = format!("`{}`", def.name);
            let count = rows
                .iter()
                .filter(|r| r.label.trim_start_matches("&nbsp;") == expected)
                .count();
            assert_eq!(count, 1, "scope `{}` rendered {} times", def.name, count);
        }
    }

    #[test]
    fn test_indentation_matches_depth() {
        let defs = ScopeDefinitions::from(vec![
            ScopeDefinition::new("root", "R.").with_subscopes(["mid"]),
            ScopeDefinition::new("mid", "M.").with_subscopes(["leaf"]),
            ScopeDefinition::new("leaf", "L."),
        ]);

        let rows = rows_for(&defs);
        assert_eq!(rows[0].label, "`root`");
        assert_eq!(rows[1].label, "&nbsp;&nbsp;&nbsp;`mid`");
        assert_eq!(rows[2].label, "&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;`leaf`");
    }

    #[test]
    fn test_metadescription_replaces_trailing_period() {
        let def = ScopeDefinition::new("x", "Grants X.").with_metadescription("see docs");
        assert_eq!(compose_description(&def), "Grants X _(see docs)_.");
    }

    #[test]
    fn test_metadescription_strips_all_trailing_periods() {
        let def = ScopeDefinition::new("x", "Grants X...").with_metadescription("see docs");
        assert_eq!(compose_description(&def), "Grants X _(see docs)_.");
    }

    #[test]
    fn test_empty_metadescription_leaves_description_unchanged() {
        let plain = ScopeDefinition::new("x", "Grants X.");
        assert_eq!(compose_description(&plain), "Grants X.");

        let empty = ScopeDefinition::new("x", "Grants X.").with_metadescription("");
        assert_eq!(compose_description(&empty), "Grants X.");
    }

    #[test]
    fn test_undefined_subscope_is_an_error() {
        let defs = ScopeDefinitions::from(vec![
            ScopeDefinition::new("a", "A.").with_subscopes(["ghost"]),
        ]);

        let err = ScopeTableGenerator::new(&defs).table_rows().unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_render_starts_with_title_and_headers() {
        let defs = ScopeDefinitions::from(vec![ScopeDefinition::new("a", "A.")]);
        let content = ScopeTableGenerator::new(&defs).render().unwrap();

        let mut lines = content.lines();
        assert_eq!(lines.next(), Some(TABLE_TITLE));
        let header = lines.next().unwrap();
        assert!(header.contains("Scope") && header.contains("Grants permission to:"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let defs = ScopeDefinitions::builtin().unwrap();
        let generator = ScopeTableGenerator::new(&defs);
        assert_eq!(generator.render().unwrap(), generator.render().unwrap());
    }
}
