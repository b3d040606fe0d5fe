//! Parent/child relationships derived from the scope definitions

use std::collections::{HashMap, HashSet};

use crate::scopes::ScopeDefinitions;

/// The scope forest: per-scope ordered child lists plus the set of all names
/// that appear as a subscope anywhere.
///
/// Leaf scopes have an empty child list. The hierarchy is assumed acyclic and
/// single-parent; neither is enforced here (see [`crate::validate`]).
pub struct ScopeHierarchy<'a> {
    defs: &'a ScopeDefinitions,
    children: HashMap<&'a str, Vec<&'a str>>,
    subscopes: HashSet<&'a str>,
}

impl<'a> ScopeHierarchy<'a> {
    /// Build the relationships in one pass over the definitions.
    ///
    /// A scope with an explicit empty subscope list is treated identically to
    /// one that declares none.
    pub fn build(defs: &'a ScopeDefinitions) -> Self {
        let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut subscopes: HashSet<&str> = HashSet::new();

        for def in defs.iter() {
            let entry = children.entry(def.name.as_str()).or_default();
            for sub in &def.subscopes {
                entry.push(sub.as_str());
                subscopes.insert(sub.as_str());
            }
        }

        Self {
            defs,
            children,
            subscopes,
        }
    }

    /// Direct children of a scope, in declared order (empty for leaves
    /// and for names without a definition)
    pub fn children(&self, name: &str) -> &[&'a str] {
        self.children.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether this name appears as a subscope of any scope
    pub fn is_subscope(&self, name: &str) -> bool {
        self.subscopes.contains(name)
    }

    /// Top-level scopes: names never seen as a subscope, in declaration order
    pub fn roots(&self) -> Vec<&'a str> {
        self.defs
            .iter()
            .map(|def| def.name.as_str())
            .filter(|name| !self.subscopes.contains(name))
            .collect()
    }
}
