//! Route table defects.

use thiserror::Error;

/// A single problem found in a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteDefect {
    /// The table has no entries at all.
    #[error("route table is empty")]
    Empty,

    /// No entry is bound to `/`.
    #[error("no route is bound to the root path '/'")]
    MissingRoot,

    /// Two entries share a path.
    #[error("duplicate path '{path}' at entries {first} and {second}")]
    DuplicatePath { path: String, first: usize, second: usize },

    /// Two entries share a name.
    #[error("duplicate name '{name}' at entries {first} and {second}")]
    DuplicateName { name: String, first: usize, second: usize },

    /// The view reference does not resolve in the catalog.
    #[error("entry {index} ('{name}') references unknown view '{view}'")]
    UnknownView { index: usize, name: String, view: String },

    /// The path is not a plain absolute path.
    #[error("entry {index} has malformed path '{path}': {reason}")]
    MalformedPath {
        index: usize,
        path: String,
        reason: &'static str,
    },

    /// The name is empty or contains whitespace.
    #[error("entry {index} has malformed name '{name}'")]
    MalformedName { index: usize, name: String },
}

/// Construction failure carrying every defect found in the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid route table: {}", join(.0))]
pub struct RegistryError(Vec<RouteDefect>);

impl RegistryError {
    pub(crate) fn new(defects: Vec<RouteDefect>) -> Self {
        Self(defects)
    }

    pub fn defects(&self) -> &[RouteDefect] {
        &self.0
    }
}

fn join(defects: &[RouteDefect]) -> String {
    defects
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_all_defects() {
        let err = RegistryError::new(vec![
            RouteDefect::MissingRoot,
            RouteDefect::DuplicateName {
                name: "Overview".into(),
                first: 0,
                second: 2,
            },
        ]);
        assert_eq!(
            err.to_string(),
            "invalid route table: no route is bound to the root path '/', \
             duplicate name 'Overview' at entries 0 and 2"
        );
    }
}
