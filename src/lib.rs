//! scopedoc - permission scope reference table generator
//!
//! Renders the hub's RBAC scope definitions as a hierarchical two-column
//! markdown table and writes it to `scope-table.md` for inclusion in the
//! docs. Subscopes are indented under their parent, and top-level scopes
//! appear in declaration order, so regenerating from unchanged definitions
//! always produces an identical file.

pub mod generator;
pub mod hierarchy;
pub mod scopes;
pub mod table;
pub mod validate;

pub use generator::{SCOPE_TABLE_FILE, ScopeTableGenerator, TABLE_TITLE, TableRow};
pub use scopes::{ScopeDefinition, ScopeDefinitions};
