// vtreebuild.
// Copyright 2026.

//! The literal build/flatten/diff scenarios from the design spec,
//! kept as integration tests so the public API stays exercised end to
//! end rather than just through each module's own unit tests.

use vtreebuild::{
    diff, BuildOptions, NodeType, Origin, TreeBuilder, TreeEntry, VisibleNode,
};

fn child_names(data: &vtreebuild::TreeData, id: &str) -> Vec<String> {
    data.children_of(id).map(|c| c.name.clone()).collect()
}

#[test]
fn scenario_a_anchor_compression() {
    let entries = vec![
        TreeEntry::new("f", "file_category.dart", "/repo/lib/src/features/scan/models/file_category.dart"),
        TreeEntry::new("s", "markdown_builder.dart", "/repo/lib/src/features/scan/services/markdown_builder.dart"),
        TreeEntry::new("d", "scan.dart", "/repo/lib/src/features/scan/scan.dart"),
    ];
    let opts = BuildOptions {
        strip_prefixes: vec!["/repo".to_string()],
        omit_container_row_at_root: true,
        auto_pick_visible_root: false,
        ..Default::default()
    };
    let data = TreeBuilder::new(opts).build(entries).unwrap();
    data.check_invariants().unwrap();

    let top: Vec<&str> = data.children_of(&data.visible_root_id).map(|n| n.name.as_str()).collect();
    assert_eq!(top, vec!["scan"]);

    let scan = data.children_of(&data.visible_root_id).next().unwrap();
    assert_eq!(scan.origin, Origin::Inferred);
    assert_eq!(scan.source_path.as_deref(), Some("/lib/src/features/scan"));

    let mut kids = child_names(&data, &scan.id);
    kids.sort();
    assert_eq!(kids, vec!["models", "scan.dart", "services"]);
    // folders sort before files at the same level.
    let kids_in_order = child_names(&data, &scan.id);
    assert_eq!(kids_in_order, vec!["models", "services", "scan.dart"]);
}

#[test]
fn scenario_b_direct_selection_promotes_origin() {
    let entries = vec![
        TreeEntry::new("f", "file_category.dart", "/repo/lib/src/features/scan/models/file_category.dart"),
        TreeEntry::new("s", "markdown_builder.dart", "/repo/lib/src/features/scan/services/markdown_builder.dart"),
        TreeEntry::new("d", "scan.dart", "/repo/lib/src/features/scan/scan.dart"),
    ];
    let opts = BuildOptions {
        strip_prefixes: vec!["/repo".to_string()],
        omit_container_row_at_root: true,
        auto_pick_visible_root: false,
        selected_directories: vec!["/repo/lib/src/features/editor".to_string()],
        ..Default::default()
    };
    let data = TreeBuilder::new(opts).build(entries).unwrap();
    data.check_invariants().unwrap();

    let mut top: Vec<&vtreebuild::TreeNode> = data.children_of(&data.visible_root_id).collect();
    top.sort_by(|a, b| a.name.cmp(&b.name));
    let names: Vec<&str> = top.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["editor", "scan"]);
    assert_eq!(top[0].origin, Origin::Direct);
    assert_eq!(top[1].origin, Origin::Inferred);
}

#[test]
fn scenario_c_virtual_merges_into_real() {
    let entries = vec![
        TreeEntry::new("real", "story.md", "/repo/notes/story.md"),
        TreeEntry::virtual_entry("v", "scratch.txt", "/virtual/scratch.txt", Some("repo/notes")),
    ];
    let opts = BuildOptions {
        omit_container_row_at_root: true,
        auto_pick_visible_root: false,
        ..Default::default()
    };
    let data = TreeBuilder::new(opts).build(entries).unwrap();
    data.check_invariants().unwrap();

    let notes_folders: Vec<_> = data
        .nodes
        .values()
        .filter(|n| n.node_type == NodeType::Folder && n.name == "notes")
        .collect();
    assert_eq!(notes_folders.len(), 1, "expected exactly one merged 'notes' folder");

    let notes = notes_folders[0];
    let mut entry_ids: Vec<&str> = data
        .children_of(&notes.id)
        .filter_map(|c| c.entry_id.as_deref())
        .collect();
    entry_ids.sort();
    assert_eq!(entry_ids, vec!["real", "v"]);
}

#[test]
fn scenario_d_lis_reorder() {
    let before = visible_nodes(&["a", "b", "c"]);
    let after = visible_nodes(&["c", "a", "b"]);
    let delta = diff(&before, &after);
    assert_eq!(delta.removes_desc, vec![2]);
    assert_eq!(delta.inserts_asc, vec![0]);
}

#[test]
fn scenario_e_mixed_diff() {
    let before = visible_nodes(&["anchor", "b", "c", "d", "e"]);
    let after = visible_nodes(&["inserted", "anchor", "d", "e", "tail"]);
    let delta = diff(&before, &after);
    assert_eq!(delta.removes_desc, vec![2, 1]);
    assert_eq!(delta.inserts_asc, vec![0, 4]);
}

#[test]
fn scenario_f_windows_canonicalization_dedup() {
    let entries = vec![
        TreeEntry::new("A", "a.dart", r"C:\work\repo\lib\a.dart"),
        TreeEntry::new("B", "a.dart", "c:/work/repo/lib/a.dart"),
    ];
    let opts = BuildOptions {
        strip_prefixes: vec!["C:/work/repo".to_string()],
        case_insensitive_paths: true,
        omit_container_row_at_root: true,
        auto_pick_visible_root: false,
        ..Default::default()
    };
    let data = TreeBuilder::new(opts).build(entries).unwrap();
    data.check_invariants().unwrap();

    let files: Vec<_> = data.nodes.values().filter(|n| n.node_type == NodeType::File).collect();
    assert_eq!(files.len(), 1, "duplicate canonical paths must dedup to one file node");

    let top: Vec<&str> = data.children_of(&data.visible_root_id).map(|n| n.name.as_str()).collect();
    assert_eq!(top, vec!["lib"]);
}

/// Build bare [`VisibleNode`] rows for diff-only scenarios that don't need
/// a real tree behind them.
fn visible_nodes(ids: &[&str]) -> Vec<VisibleNode> {
    ids.iter()
        .map(|id| VisibleNode {
            id: id.to_string(),
            depth: 0,
            name: id.to_string(),
            node_type: NodeType::File,
            has_children: false,
            virtual_path: format!("/{id}"),
            entry_id: Some(id.to_string()),
            is_virtual: false,
            source_path: None,
            origin: Origin::None,
        })
        .collect()
}
