// vtreebuild.
// Copyright 2026.

//! The flat, caller-supplied input to a build: [`TreeEntry`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One real or virtual file supplied to [`crate::builder::TreeBuilder`].
///
/// `id` is caller-stable and becomes the node's [`crate::node::TreeNode::entry_id`].
/// `full_path` is raw, in whatever form the host OS produced it; it is
/// canonicalized internally (see [`crate::path::canonicalize`]) and never
/// interpreted as anything but a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub id: String,
    pub name: String,
    pub full_path: String,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

impl TreeEntry {
    /// Build a plain, non-virtual entry.
    pub fn new(id: impl Into<String>, name: impl Into<String>, full_path: impl Into<String>) -> Self {
        TreeEntry {
            id: id.into(),
            name: name.into(),
            full_path: full_path.into(),
            is_virtual: false,
            metadata: None,
        }
    }

    /// Build a virtual entry with an optional `virtualParent` hint.
    pub fn virtual_entry(
        id: impl Into<String>,
        name: impl Into<String>,
        full_path: impl Into<String>,
        virtual_parent: Option<&str>,
    ) -> Self {
        let mut metadata = Map::new();
        if let Some(parent) = virtual_parent {
            metadata.insert("virtualParent".to_string(), Value::String(parent.to_string()));
        }
        TreeEntry {
            id: id.into(),
            name: name.into(),
            full_path: full_path.into(),
            is_virtual: true,
            metadata: if metadata.is_empty() { None } else { Some(metadata) },
        }
    }

    /// The `metadata.virtualParent` hint, if present and non-blank.
    pub fn virtual_parent(&self) -> Option<&str> {
        self.metadata
            .as_ref()?
            .get("virtualParent")?
            .as_str()
            .filter(|s| !s.trim().is_empty())
    }
}
