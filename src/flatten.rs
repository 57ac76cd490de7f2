// vtreebuild.
// Copyright 2026.

//! DFS linearization with expansion and filter hoisting.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::filter::{self, Predicate};
use crate::node::{NodeType, Origin, TreeData, TreeNode};

/// One row a UI renderer needs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VisibleNode {
    pub id: String,
    pub depth: usize,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub has_children: bool,
    pub virtual_path: String,
    pub entry_id: Option<String>,
    pub is_virtual: bool,
    pub source_path: Option<String>,
    pub origin: Origin,
}

/// A pluggable per-parent child ordering, used instead of `child_ids`
/// order when flatten is invoked with the "sorted" strategy.
pub trait SortDelegate {
    fn sort_child_ids(&self, data: &TreeData, parent_id: &str) -> Vec<String>;
}

/// DFS-order child ids (the default strategy: just `child_ids` as materialized).
pub struct DefaultOrder;

impl SortDelegate for DefaultOrder {
    fn sort_child_ids(&self, data: &TreeData, parent_id: &str) -> Vec<String> {
        data.nodes[parent_id].child_ids.clone()
    }
}

/// Linearize `data` starting at its `visible_root_id`, respecting
/// `expanded_ids` and an optional filter query.
pub fn flatten(data: &TreeData, expanded_ids: &HashSet<String>, filter_query: Option<&str>) -> Vec<VisibleNode> {
    flatten_with_order(data, expanded_ids, filter_query, &DefaultOrder)
}

/// Same as [`flatten`] but with an injected [`SortDelegate`] for child order.
pub fn flatten_with_order(
    data: &TreeData,
    expanded_ids: &HashSet<String>,
    filter_query: Option<&str>,
    order: &dyn SortDelegate,
) -> Vec<VisibleNode> {
    let has_filter = filter_query.map(|q| !q.trim().is_empty()).unwrap_or(false);
    let predicate: Predicate = filter::compile(filter_query);
    let mut memo: HashMap<String, bool> = HashMap::new();

    let mut out = Vec::new();
    let root = data.visible_root();
    if data.omit_container_row_at_root
        && matches!(root.node_type, NodeType::Root | NodeType::Folder)
    {
        for child_id in order.sort_child_ids(data, &root.id) {
            let force = has_filter && subtree_matches(data, &child_id, &predicate, &mut memo);
            visit(
                data, &child_id, 0, force, has_filter, &predicate, expanded_ids, &mut memo, order, &mut out,
            );
        }
    } else {
        let force = has_filter && subtree_matches(data, &root.id, &predicate, &mut memo);
        visit(
            data, &root.id, 0, force, has_filter, &predicate, expanded_ids, &mut memo, order, &mut out,
        );
    }
    out
}

#[allow(clippy::too_many_arguments)]
fn visit(
    data: &TreeData,
    id: &str,
    depth: usize,
    force_expand: bool,
    has_filter: bool,
    predicate: &Predicate,
    expanded_ids: &HashSet<String>,
    memo: &mut HashMap<String, bool>,
    order: &dyn SortDelegate,
    out: &mut Vec<VisibleNode>,
) {
    let node = &data.nodes[id];
    if !subtree_matches(data, id, predicate, memo) {
        return;
    }
    out.push(to_visible(node, depth));

    let expandable = matches!(node.node_type, NodeType::Root | NodeType::Folder) && node.has_children();
    if !expandable {
        return;
    }
    if force_expand || expanded_ids.contains(id) {
        for child_id in order.sort_child_ids(data, id) {
            let child_force = has_filter && subtree_matches(data, &child_id, predicate, memo);
            visit(
                data, &child_id, depth + 1, child_force, has_filter, predicate, expanded_ids, memo, order, out,
            );
        }
    }
}

fn to_visible(node: &TreeNode, depth: usize) -> VisibleNode {
    VisibleNode {
        id: node.id.clone(),
        depth,
        name: node.name.clone(),
        node_type: node.node_type,
        has_children: node.has_children(),
        virtual_path: node.virtual_path.clone(),
        entry_id: node.entry_id.clone(),
        is_virtual: node.is_virtual,
        source_path: node.source_path.clone(),
        origin: node.origin,
    }
}

fn subtree_matches(
    data: &TreeData,
    id: &str,
    predicate: &Predicate,
    memo: &mut HashMap<String, bool>,
) -> bool {
    if let Some(&cached) = memo.get(id) {
        return cached;
    }
    let node = &data.nodes[id];
    let ext = filter::extension_lower(&node.name);
    let self_matches = predicate(&node.name, &ext);
    let result = self_matches || node.child_ids.iter().any(|c| subtree_matches(data, c, predicate, memo));
    memo.insert(id.to_string(), result);
    result
}
