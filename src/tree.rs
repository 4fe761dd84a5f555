//! The compacted route tree.
//!
//! Flat `(path, handlers, owner)` registrations are merged into a compressed
//! prefix tree: shared path prefixes collapse into shared ancestor nodes,
//! and an insertion that only partially overlaps an existing node splits the
//! incoming path at its first segment boundary and descends. Each node
//! stores only its own path fragment; the concatenation of fragments from
//! the root to a node is that node's full path and is unique across the
//! tree.
//!
//! The tree is built once per discovery pass and finalized with [`Route::clean`];
//! after that it is read-only. [`Route::filtered`] produces independent
//! pruned copies, so readers exporting different owner-tag views never
//! interfere.

use crate::handler::Handler;

use serde::Serialize;

/// Identity of the type that originated a registration.
///
/// Opaque and equality-comparable only; used for provenance tracking and
/// post-hoc filtering, never for ordering. Tags accumulate upward through
/// the ancestor chain at insertion time, so a node carries the tags of every
/// registration merged into it or any of its descendants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerTag(String);

impl OwnerTag {
    pub fn new(name: impl Into<String>) -> OwnerTag {
        OwnerTag(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A node in the compacted route tree.
///
/// `path` is the node's own fragment, not its full path; `path` and `owners`
/// are construction-time bookkeeping and never serialize. A node holds
/// `handlers` only when it was produced as, or merged from, a terminal
/// registration; intermediates created by splitting start without them and
/// can gain them later through an exact-path merge.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip)]
    path: String,
    #[serde(skip)]
    owners: Vec<OwnerTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    handlers: Option<Vec<Handler>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    routes: Option<Vec<Route>>,
}

impl Route {
    /// A terminal registration for `path`, owned by `owner`.
    ///
    /// `path` must begin with `/`; feeding anything else is a caller
    /// contract violation and fails fast.
    pub fn new(path: impl Into<String>, handlers: Vec<Handler>, owner: OwnerTag) -> Route {
        let path = path.into();
        assert!(
            path.starts_with('/'),
            "route path must begin with '/' in path '{path}'"
        );
        Route {
            name: None,
            path,
            owners: vec![owner],
            handlers: Some(handlers),
            routes: None,
        }
    }

    /// A synthetic group node, e.g. the `"@"` export root.
    pub fn group(name: impl Into<String>, routes: Vec<Route>) -> Route {
        Route {
            name: Some(name.into()),
            path: String::new(),
            owners: Vec::new(),
            handlers: None,
            routes: if routes.is_empty() { None } else { Some(routes) },
        }
    }

    /// The node's own path fragment.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn handlers(&self) -> Option<&[Handler]> {
        self.handlers.as_deref()
    }

    pub fn routes(&self) -> Option<&[Route]> {
        self.routes.as_deref()
    }

    pub fn owners(&self) -> &[OwnerTag] {
        &self.owners
    }

    /// Merges `route` into this node's subtree.
    ///
    /// The first child whose fragment is a string prefix of the incoming
    /// path absorbs it: an exact match concatenates handler lists, a partial
    /// match strips the shared fragment and recurses. Without a match the
    /// path is attached as a new child, split at its first segment boundary
    /// when it spans more than one. Owner tags accumulate on every node
    /// along the way. Insertion cannot fail and never leaves the tree
    /// half-updated; every split strictly shortens the remainder.
    pub fn insert(&mut self, route: Route) {
        if let Some(routes) = &mut self.routes {
            for child in routes.iter_mut() {
                if !route.path.starts_with(child.path.as_str()) {
                    continue;
                }

                if route.path == child.path {
                    child.merge_owners(&route.owners);
                    if let Some(handlers) = route.handlers {
                        match &mut child.handlers {
                            Some(existing) => existing.extend(handlers),
                            None => child.handlers = Some(handlers),
                        }
                    }
                } else {
                    child.merge_owners(&route.owners);
                    let mut rest = route;
                    rest.path = rest.path.split_off(child.path.len());
                    child.insert(rest);
                }
                return;
            }
        }

        let child = match split_point(&route.path) {
            Some(at) => route.split_at(at),
            None => route,
        };

        let owners = child.owners.clone();
        match &mut self.routes {
            Some(routes) => routes.push(child),
            None => self.routes = Some(vec![child]),
        }
        self.merge_owners(&owners);
    }

    /// Splits off everything past `at` into a tail node and re-inserts it as
    /// a descendant; `self` keeps the head fragment and loses its handlers
    /// to the tail.
    fn split_at(mut self, at: usize) -> Route {
        let tail = Route {
            name: None,
            path: self.path.split_off(at),
            owners: self.owners.clone(),
            handlers: self.handlers.take(),
            routes: self.routes.take(),
        };
        self.insert(tail);
        self
    }

    fn merge_owners(&mut self, owners: &[OwnerTag]) {
        for owner in owners {
            if !self.owners.contains(owner) {
                self.owners.push(owner.clone());
            }
        }
    }

    /// Pruned deep copies of this node's children: a child survives iff
    /// `include` is empty (no filter) or its accumulated owner tags
    /// intersect `include`, with its own children filtered recursively. The
    /// source tree is never touched.
    pub fn filtered(&self, include: &[OwnerTag]) -> Vec<Route> {
        let Some(routes) = &self.routes else {
            return Vec::new();
        };

        routes
            .iter()
            .filter(|child| {
                include.is_empty() || child.owners.iter().any(|tag| include.contains(tag))
            })
            .map(|child| {
                let routes = child.filtered(include);
                Route {
                    routes: if routes.is_empty() { None } else { Some(routes) },
                    ..child.clone()
                }
            })
            .collect()
    }

    /// Finalizes the subtree in place: empty child lists disappear so the
    /// exported form omits them, and nodes without an explicit name derive
    /// one from their fragment with the leading separator stripped.
    pub fn clean(&mut self) {
        if self.routes.as_ref().is_some_and(Vec::is_empty) {
            self.routes = None;
        }

        if self.name.is_none() {
            let name = self.path.strip_prefix('/').unwrap_or(&self.path);
            self.name = Some(name.to_string());
        }

        if let Some(routes) = &mut self.routes {
            for route in routes {
                route.clean();
            }
        }
    }
}

/// Byte offset of the first segment boundary past the fragment's leading
/// separator, if the fragment spans more than one segment.
fn split_point(path: &str) -> Option<usize> {
    let skip = usize::from(path.starts_with('/'));
    path[skip..].find('/').map(|at| at + skip)
}

#[cfg(test)]
mod test {
    use super::split_point;

    #[test]
    fn split_points() {
        assert_eq!(split_point("/user"), None);
        assert_eq!(split_point("/user/account"), Some(5));
        assert_eq!(split_point("/a/b/c"), Some(2));
        // fragments produced by prefix stripping may lack the separator
        assert_eq!(split_point("2"), None);
        assert_eq!(split_point("2/x"), Some(1));
    }
}
