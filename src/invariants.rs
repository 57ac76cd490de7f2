// vtreebuild.
// Copyright 2026.

//! Post-materialization structural invariants. Run
//! unconditionally after every build in debug builds (see
//! [`crate::builder::TreeBuilder::build`]) and exposed publicly via
//! [`crate::node::TreeData::check_invariants`] for callers who want the
//! same guarantee in release builds.

use std::collections::HashSet;

use crate::node::{NodeType, TreeData};

pub fn check(data: &TreeData) -> crate::errors::Result<()> {
    check_root(data)?;
    check_parent_child_consistency(data)?;
    check_files_are_leaves(data)?;
    check_reachable_from_root(data)?;
    check_visible_root_exists(data)?;
    Ok(())
}

/// I1: the root node exists, is of type `Root`, and has no parent.
fn check_root(data: &TreeData) -> crate::errors::Result<()> {
    let root = data
        .nodes
        .get(&data.root_id)
        .ok_or_else(|| TreeData::invariant_error(format!("root id {:?} has no node", data.root_id)))?;
    if root.node_type != NodeType::Root {
        return Err(TreeData::invariant_error(format!(
            "node {:?} is the declared root but has type {:?}",
            root.id, root.node_type
        )));
    }
    if !root.parent_id.is_empty() {
        return Err(TreeData::invariant_error(format!("root node {:?} has a non-empty parent_id", root.id)));
    }
    Ok(())
}

/// I2/I3: every `child_ids` entry resolves to a node whose `parent_id`
/// points back, and every non-root node's `parent_id` resolves to a node
/// that lists it as a child.
fn check_parent_child_consistency(data: &TreeData) -> crate::errors::Result<()> {
    for node in data.nodes.values() {
        for child_id in &node.child_ids {
            let child = data
                .nodes
                .get(child_id)
                .ok_or_else(|| TreeData::invariant_error(format!("node {:?} lists missing child {child_id:?}", node.id)))?;
            if child.parent_id != node.id {
                return Err(TreeData::invariant_error(format!(
                    "child {:?} of {:?} reports parent {:?} instead",
                    child.id, node.id, child.parent_id
                )));
            }
        }
        if node.id != data.root_id {
            let parent = data
                .nodes
                .get(&node.parent_id)
                .ok_or_else(|| TreeData::invariant_error(format!("node {:?} has missing parent {:?}", node.id, node.parent_id)))?;
            if !parent.child_ids.iter().any(|c| c == &node.id) {
                return Err(TreeData::invariant_error(format!(
                    "node {:?} claims parent {:?} but is not listed among its children",
                    node.id, node.parent_id
                )));
            }
        }
    }
    Ok(())
}

/// I4: a `File` node never has children.
fn check_files_are_leaves(data: &TreeData) -> crate::errors::Result<()> {
    for node in data.nodes.values() {
        if node.node_type == NodeType::File && node.has_children() {
            return Err(TreeData::invariant_error(format!("file node {:?} has children", node.id)));
        }
    }
    Ok(())
}

/// I5: every node is reachable from the root by following `child_ids`
/// (no orphans left behind by a materialization bug).
fn check_reachable_from_root(data: &TreeData) -> crate::errors::Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack = vec![data.root_id.as_str()];
    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        if let Some(node) = data.nodes.get(id) {
            stack.extend(node.child_ids.iter().map(String::as_str));
        }
    }
    if seen.len() != data.nodes.len() {
        return Err(TreeData::invariant_error(format!(
            "{} of {} nodes are unreachable from the root",
            data.nodes.len() - seen.len(),
            data.nodes.len()
        )));
    }
    Ok(())
}

/// I6: `visible_root_id` names an existing node.
fn check_visible_root_exists(data: &TreeData) -> crate::errors::Result<()> {
    if !data.nodes.contains_key(&data.visible_root_id) {
        return Err(TreeData::invariant_error(format!("visible_root_id {:?} has no node", data.visible_root_id)));
    }
    Ok(())
}
