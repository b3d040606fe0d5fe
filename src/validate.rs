//! Scope hierarchy validation
//!
//! Generation trusts its input; these checks exist so the operator can vet a
//! definition set before regenerating the docs (`scopedoc check`).

use std::collections::HashMap;

use crate::hierarchy::ScopeHierarchy;
use crate::scopes::ScopeDefinitions;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScopeGraphError {
    #[error("scope `{child}` is listed as a subscope of `{parent}` but has no definition")]
    UndefinedSubscope { parent: String, child: String },

    #[error("scope `{child}` is listed as a subscope of both `{first}` and `{second}`")]
    MultipleParents {
        child: String,
        first: String,
        second: String,
    },

    #[error("subscope cycle detected through `{name}`")]
    Cycle { name: String },
}

/// Check the full definition set and return every problem found.
///
/// An empty result means the hierarchy is a well-formed forest: every
/// referenced subscope is defined, no scope has two parents, and no subscope
/// chain loops back on itself.
pub fn check_hierarchy(defs: &ScopeDefinitions) -> Vec<ScopeGraphError> {
    let mut problems = Vec::new();

    // Dangling references and duplicate parents in one declaration-order pass
    let mut parent_of: HashMap<&str, &str> = HashMap::new();
    for def in defs.iter() {
        for sub in &def.subscopes {
            if defs.get(sub).is_none() {
                problems.push(ScopeGraphError::UndefinedSubscope {
                    parent: def.name.clone(),
                    child: sub.clone(),
                });
            }
            if let Some(first) = parent_of.insert(sub.as_str(), def.name.as_str()) {
                problems.push(ScopeGraphError::MultipleParents {
                    child: sub.clone(),
                    first: first.to_string(),
                    second: def.name.clone(),
                });
            }
        }
    }

    problems.extend(find_cycles(defs));
    problems
}

/// Depth-first walk over every defined scope, so cycles unreachable from any
/// root are still found. Each cycle is reported once, at the scope where the
/// walk closed the loop.
fn find_cycles(defs: &ScopeDefinitions) -> Vec<ScopeGraphError> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        InProgress,
        Done,
    }

    fn visit<'a>(
        name: &'a str,
        hierarchy: &ScopeHierarchy<'a>,
        marks: &mut HashMap<&'a str, Mark>,
        problems: &mut Vec<ScopeGraphError>,
    ) {
        match marks.get(name) {
            Some(Mark::Done) => return,
            Some(Mark::InProgress) => {
                problems.push(ScopeGraphError::Cycle {
                    name: name.to_string(),
                });
                return;
            }
            None => {}
        }

        marks.insert(name, Mark::InProgress);
        for child in hierarchy.children(name) {
            visit(child, hierarchy, marks, problems);
        }
        marks.insert(name, Mark::Done);
    }

    let hierarchy = ScopeHierarchy::build(defs);
    let mut marks = HashMap::new();
    let mut problems = Vec::new();
    for def in defs.iter() {
        visit(def.name.as_str(), &hierarchy, &mut marks, &mut problems);
    }
    problems
}
