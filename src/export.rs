//! Serialized view of a finalized route tree.
//!
//! Only `name`, `handlers` and `routes` surface; a node's path fragment and
//! owner tags are construction-time bookkeeping. A node with only children
//! is a group, a node with only handlers is a leaf, and a node may be both
//! (a path that is directly handled and also has deeper sub-paths). Absent
//! optional fields are omitted rather than emitted empty.

use crate::tree::Route;

pub fn to_json(route: &Route) -> serde_json::Result<String> {
    serde_json::to_string(route)
}

pub fn to_json_pretty(route: &Route) -> serde_json::Result<String> {
    serde_json::to_string_pretty(route)
}
