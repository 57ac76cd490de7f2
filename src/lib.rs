// vtreebuild.
// Copyright 2026.

//! A deterministic, pure, in-memory virtual directory-tree builder.
//!
//! [`TreeBuilder::build`] turns a flat list of [`TreeEntry`] values into a
//! normalized [`TreeData`] graph. From there [`flatten`] linearizes the
//! visible rows a UI renders, and [`diff`] computes the minimal edit
//! script between two such linearizations.

mod anchors;
mod builder;
mod diff;
mod entry;
mod errors;
mod filter;
mod flatten;
mod ids;
mod invariants;
mod node;
mod path;
mod prefix;

pub use builder::{BuildOptions, TreeBuilder};
pub use diff::{diff, ListDiff};
pub use entry::TreeEntry;
pub use errors::{Error, Result};
pub use flatten::{flatten, flatten_with_order, DefaultOrder, SortDelegate, VisibleNode};
pub use node::{NodeType, Origin, TreeData, TreeNode};
pub use path::canonicalize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::collections::HashSet;

    fn expand_all(data: &TreeData) -> HashSet<String> {
        data.nodes
            .values()
            .filter(|n| matches!(n.node_type, NodeType::Root | NodeType::Folder))
            .map(|n| n.id.clone())
            .collect()
    }

    #[test]
    fn end_to_end_build_flatten_diff() {
        let before_entries = vec![
            TreeEntry::new("1", "a.txt", "/repo/src/a.txt"),
            TreeEntry::new("2", "b.txt", "/repo/src/b.txt"),
        ];
        let opts = BuildOptions {
            strip_prefixes: vec!["/repo".to_string()],
            auto_pick_visible_root: false,
            ..Default::default()
        };
        let builder = TreeBuilder::new(opts.clone());
        let before_data = builder.build(before_entries).unwrap();
        before_data.check_invariants().unwrap();
        let before_flat = flatten(&before_data, &expand_all(&before_data), None);

        let after_entries = vec![
            TreeEntry::new("2", "b.txt", "/repo/src/b.txt"),
            TreeEntry::new("3", "c.txt", "/repo/src/c.txt"),
        ];
        let after_data = builder.build(after_entries).unwrap();
        after_data.check_invariants().unwrap();
        let after_flat = flatten(&after_data, &expand_all(&after_data), None);

        let delta = diff(&before_flat, &after_flat);
        assert!(!delta.removes_desc.is_empty() || !delta.inserts_asc.is_empty());

        // Rebuilding identical inputs must be id-stable (I7 in spec terms).
        let rebuilt = TreeBuilder::new(opts).build(vec![
            TreeEntry::new("1", "a.txt", "/repo/src/a.txt"),
            TreeEntry::new("2", "b.txt", "/repo/src/b.txt"),
        ]).unwrap();
        assert_eq!(before_data.root_id, rebuilt.root_id);
        let mut before_ids: Vec<&String> = before_data.nodes.keys().collect();
        let mut rebuilt_ids: Vec<&String> = rebuilt.nodes.keys().collect();
        before_ids.sort();
        rebuilt_ids.sort();
        assert_eq!(before_ids, rebuilt_ids);
    }
}
