//! Route lookup for the navigation host.
//!
//! # Responsibilities
//! - Validate a route table once, at startup
//! - Store entries in definition order
//! - Look up an entry by exact path or exact name
//!
//! # Design Decisions
//! - Immutable after construction (shareable across threads without locks)
//! - O(1) path and name lookup via HashMap into the ordered entry list
//! - Explicit `None` on a miss rather than a silent default

use std::collections::HashMap;

use crate::routing::entry::{RouteDef, RouteEntry, ROOT_PATH};
use crate::routing::error::{RegistryError, RouteDefect};
use crate::views::ViewCatalog;

/// Validated, read-only table of navigable destinations.
#[derive(Debug, Clone)]
pub struct RouteRegistry<V> {
    entries: Vec<RouteEntry<V>>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl<V> RouteRegistry<V> {
    /// Build a registry from an ordered table, resolving each view through
    /// `catalog`.
    ///
    /// Fails if the table is empty, lacks a `/` entry, repeats a path or a
    /// name, references a view the catalog does not know, or contains a
    /// malformed path or name. All defects are reported together and no
    /// partial registry is returned.
    pub fn new<C>(defs: impl IntoIterator<Item = RouteDef>, catalog: &C) -> Result<Self, RegistryError>
    where
        C: ViewCatalog<View = V> + ?Sized,
    {
        let mut defects = Vec::new();
        let mut entries = Vec::new();
        let mut by_path: HashMap<String, usize> = HashMap::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();

        for (index, def) in defs.into_iter().enumerate() {
            def.check_shape(index, &mut defects);

            if let Some(&first) = by_path.get(&def.path) {
                defects.push(RouteDefect::DuplicatePath {
                    path: def.path.clone(),
                    first,
                    second: index,
                });
            } else {
                by_path.insert(def.path.clone(), index);
            }

            if let Some(&first) = by_name.get(&def.name) {
                defects.push(RouteDefect::DuplicateName {
                    name: def.name.clone(),
                    first,
                    second: index,
                });
            } else {
                by_name.insert(def.name.clone(), index);
            }

            match catalog.resolve(&def.view) {
                Some(view) => entries.push(RouteEntry::new(def.path, def.name, view)),
                None => defects.push(RouteDefect::UnknownView {
                    index,
                    name: def.name,
                    view: def.view,
                }),
            }
        }

        if by_path.is_empty() {
            defects.push(RouteDefect::Empty);
        }
        if !by_path.contains_key(ROOT_PATH) {
            defects.push(RouteDefect::MissingRoot);
        }

        if !defects.is_empty() {
            return Err(RegistryError::new(defects));
        }

        Ok(Self {
            entries,
            by_path,
            by_name,
        })
    }

    /// Exact match on the stored paths.
    pub fn resolve_by_path(&self, path: &str) -> Option<&RouteEntry<V>> {
        self.by_path.get(path).map(|&i| &self.entries[i])
    }

    /// Exact match on the stored names.
    pub fn resolve_by_name(&self, name: &str) -> Option<&RouteEntry<V>> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Every entry, in definition order.
    pub fn list(&self) -> &[RouteEntry<V>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteEntry<V>> {
        self.entries.iter()
    }

    /// The landing destination bound to `/`.
    pub fn root(&self) -> &RouteEntry<V> {
        // Construction guarantees a root entry.
        &self.entries[self.by_path[ROOT_PATH]]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed registry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, V> IntoIterator for &'a RouteRegistry<V> {
    type Item = &'a RouteEntry<V>;
    type IntoIter = std::slice::Iter<'a, RouteEntry<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
