//! Scope definition types
//!
//! Scopes are the hub's named permission units. The definitions are owned by
//! the permissions subsystem; this crate only consumes them as read-only
//! input. The built-in set is embedded at compile time from
//! `assets/scopes.toml`, and an alternative set can be loaded from any TOML
//! document of the same shape.

use serde::{Deserialize, Serialize};

/// Embedded built-in scope definitions (compile-time)
pub const BUILTIN_SCOPES_TOML: &str = include_str!("../assets/scopes.toml");

/// A single named permission scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeDefinition {
    /// Unique scope name (e.g. "read:users")
    pub name: String,

    /// Human-readable description of what the scope grants
    pub description: String,

    /// Optional short qualifier appended to the rendered description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadescription: Option<String>,

    /// Names of the scopes nested directly under this one, in order.
    /// Empty for leaf scopes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subscopes: Vec<String>,
}

impl ScopeDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            metadescription: None,
            subscopes: Vec::new(),
        }
    }

    pub fn with_metadescription(mut self, metadescription: impl Into<String>) -> Self {
        self.metadescription = Some(metadescription.into());
        self
    }

    pub fn with_subscopes<I, S>(mut self, subscopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subscopes = subscopes.into_iter().map(Into::into).collect();
        self
    }
}

/// Ordered collection of scope definitions.
///
/// Declaration order is significant: the generated table lists top-level
/// scopes and subscopes in the order they were declared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScopeDefinitions {
    #[serde(rename = "scope", default)]
    scopes: Vec<ScopeDefinition>,
}

impl ScopeDefinitions {
    /// Parse the embedded built-in definitions
    pub fn builtin() -> Result<Self, toml::de::Error> {
        Self::from_toml_str(BUILTIN_SCOPES_TOML)
    }

    /// Parse definitions from a TOML document (`[[scope]]` array of tables)
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Look up a definition by scope name
    pub fn get(&self, name: &str) -> Option<&ScopeDefinition> {
        self.scopes.iter().find(|s| s.name == name)
    }

    /// Iterate over all definitions in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &ScopeDefinition> {
        self.scopes.iter()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl From<Vec<ScopeDefinition>> for ScopeDefinitions {
    fn from(scopes: Vec<ScopeDefinition>) -> Self {
        Self { scopes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_definitions_parse() {
        let defs = ScopeDefinitions::builtin().expect("embedded scopes.toml must parse");
        assert!(!defs.is_empty());
        assert!(defs.get("admin:users").is_some());
    }

    #[test]
    fn test_declaration_order_preserved() {
        let defs = ScopeDefinitions::from_toml_str(
            r#"
            [[scope]]
            name = "b"
            description = "B."

            [[scope]]
            name = "a"
            description = "A."
            "#,
        )
        .unwrap();

        let names: Vec<&str> = defs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn test_missing_subscopes_key_is_empty() {
        let defs = ScopeDefinitions::from_toml_str(
            r#"
            [[scope]]
            name = "leaf"
            description = "A leaf."
            "#,
        )
        .unwrap();

        assert!(defs.get("leaf").unwrap().subscopes.is_empty());
        assert!(defs.get("leaf").unwrap().metadescription.is_none());
    }
}
