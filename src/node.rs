// vtreebuild.
// Copyright 2026.

//! The tree's vertex type [`TreeNode`] and the immutable output graph
//! [`TreeData`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// What a [`TreeNode`] represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Root,
    Folder,
    File,
}

/// Whether a folder was named directly by the caller or inferred to
/// reach a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    None,
    Inferred,
    Direct,
}

impl Origin {
    /// `direct ⊕ * = direct`; else `inferred ⊕ * = inferred`; else `none`.
    pub fn merge(self, other: Origin) -> Origin {
        use Origin::*;
        match (self, other) {
            (Direct, _) | (_, Direct) => Direct,
            (Inferred, _) | (_, Inferred) => Inferred,
            (None, None) => None,
        }
    }
}

/// One vertex of the materialized tree.
///
/// Nodes are immutable once built; a rebuild produces an entirely new
/// [`TreeData`] with (by construction) the same ids for unchanged
/// inputs, which is what lets a host's expansion/selection state survive
/// a rebuild.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub parent_id: String,
    pub child_ids: Vec<String>,
    pub virtual_path: String,
    pub source_path: Option<String>,
    pub entry_id: Option<String>,
    pub is_virtual: bool,
    pub is_expanded: bool,
    pub is_selected: bool,
    pub origin: Origin,
}

impl TreeNode {
    pub fn has_children(&self) -> bool {
        !self.child_ids.is_empty()
    }
}

/// The immutable output of a build.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TreeData {
    pub nodes: HashMap<String, TreeNode>,
    pub root_id: String,
    pub visible_root_id: String,
    pub omit_container_row_at_root: bool,
}

impl TreeData {
    pub fn root(&self) -> &TreeNode {
        &self.nodes[&self.root_id]
    }

    pub fn visible_root(&self) -> &TreeNode {
        &self.nodes[&self.visible_root_id]
    }

    pub fn get(&self, id: &str) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    pub fn children_of<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a TreeNode> + 'a {
        self.nodes[id].child_ids.iter().filter_map(move |c| self.nodes.get(c))
    }

    /// Verify the tree's structural invariants: parent/child linkage,
    /// name uniqueness among siblings, and id stability.
    ///
    /// This is run unconditionally in debug builds right after
    /// materialization (see [`crate::builder`]); it is also exposed
    /// publicly so callers and tests can run it in release builds.
    pub fn check_invariants(&self) -> Result<()> {
        crate::invariants::check(self)
    }

    pub(crate) fn invariant_error(msg: impl Into<String>) -> Error {
        Error::TreeInvariant(msg.into())
    }
}
