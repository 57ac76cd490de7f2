// vtreebuild.
// Copyright 2026.

//! The graph materializer: turns a flat entry list plus anchors into a
//! [`TreeData`].
//!
//! Every input is normalized rather than rejected: the only
//! recoverable error this module raises is a folder name containing a
//! path separator, which can only happen if a caller hands in a `name`
//! with a literal `/` in it.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug_span;

use crate::anchors;
use crate::entry::TreeEntry;
use crate::errors::{Error, Result};
use crate::ids::{self, CONTAINER_ID, ROOT_ID};
use crate::node::{NodeType, Origin, TreeData, TreeNode};
use crate::path::canonicalize;
use crate::prefix::{is_within, relative_segments, PrefixStripper};

/// Every knob accepted by [`TreeBuilder::build`].
#[derive(Clone, Debug, Deserialize)]
pub struct BuildOptions {
    pub source_roots: Vec<String>,
    pub selected_directories: Vec<String>,
    pub root_folder_label: String,
    pub expand_folders_by_default: bool,
    pub select_new_files_by_default: bool,
    pub prefer_deepest_root: bool,
    pub sort_children_by_name: bool,
    pub strip_prefixes: Vec<String>,
    pub auto_pick_visible_root: bool,
    pub visible_root_max_hoist_levels: Option<usize>,
    pub visible_root_ignore_virtual_files: bool,
    pub merge_virtual_into_real_folders: bool,
    pub case_insensitive_paths: bool,
    #[serde(skip)]
    pub unicode_normalize: Option<fn(&str) -> String>,
    pub auto_compute_anchors: bool,
    pub omit_container_row_at_root: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            source_roots: Vec::new(),
            selected_directories: Vec::new(),
            root_folder_label: "tree".to_string(),
            expand_folders_by_default: true,
            select_new_files_by_default: true,
            prefer_deepest_root: false,
            sort_children_by_name: true,
            strip_prefixes: Vec::new(),
            auto_pick_visible_root: true,
            visible_root_max_hoist_levels: Some(2),
            visible_root_ignore_virtual_files: true,
            merge_virtual_into_real_folders: true,
            case_insensitive_paths: true,
            unicode_normalize: None,
            auto_compute_anchors: true,
            omit_container_row_at_root: false,
        }
    }
}

/// Builds a [`TreeData`] from a flat entry list. Stateless beyond the
/// options it was constructed with; a `TreeBuilder` may be reused across
/// many independent `build` calls, including concurrently.
pub struct TreeBuilder {
    options: BuildOptions,
}

impl TreeBuilder {
    pub fn new(options: BuildOptions) -> Self {
        TreeBuilder { options }
    }

    pub fn build(&self, entries: Vec<TreeEntry>) -> Result<TreeData> {
        let opts = &self.options;
        let _span = debug_span!("tree_build", entries = entries.len()).entered();

        let prefix_stripper = PrefixStripper::new(&opts.strip_prefixes);
        let mut mat = Materializer::new(opts, &prefix_stripper);

        mat.create_skeleton();

        let (real_entries, virtual_entries) = dedup_and_split(entries, opts);

        let canonical_files: Vec<String> = real_entries
            .iter()
            .map(|e| canonicalize(&e.full_path, opts.unicode_normalize.as_deref_fn()))
            .collect();
        let canonical_dirs: Vec<String> = opts
            .selected_directories
            .iter()
            .map(|d| canonicalize(d, opts.unicode_normalize.as_deref_fn()))
            .collect();
        let canonical_roots: Vec<String> = opts
            .source_roots
            .iter()
            .map(|r| canonicalize(r, opts.unicode_normalize.as_deref_fn()))
            .collect();

        let universe = {
            let _span = debug_span!("anchor_universe").entered();
            anchors::build_universe(opts.auto_compute_anchors, &canonical_files, &canonical_dirs, &canonical_roots)
        };
        let mut top_anchors = {
            let _span = debug_span!("anchor_compress").entered();
            anchors::compress(&universe, opts.case_insensitive_paths, opts.prefer_deepest_root)
        };

        let (groups, extra_anchors) = anchors::group_files(&top_anchors, &canonical_files, opts.case_insensitive_paths);
        top_anchors.extend(extra_anchors);
        top_anchors.sort_by(|a, b| segment_count(a).cmp(&segment_count(b)).then_with(|| a.cmp(b)));

        let labels = assign_labels(&top_anchors, opts.case_insensitive_paths);

        {
            let _span = debug_span!("materialize_anchors").entered();
            for anchor in &top_anchors {
                let label = &labels[anchor];
                let is_direct = canonical_dirs
                    .iter()
                    .any(|d| eq_under_case(d, anchor, opts.case_insensitive_paths));
                mat.materialize_anchor(anchor, label, is_direct)?;
            }
        }

        {
            let _span = debug_span!("materialize_files").entered();
            for (anchor, files) in &groups {
                for file_path in files {
                    let entry = real_entries
                        .iter()
                        .zip(&canonical_files)
                        .find(|(_, c)| *c == file_path)
                        .map(|(e, _)| e)
                        .expect("grouped file path must come from a real entry");
                    mat.materialize_file(anchor, entry)?;
                }
            }
        }

        {
            let _span = debug_span!("materialize_selected_dirs").entered();
            for dir in &canonical_dirs {
                mat.materialize_empty_selected_dir(dir, &top_anchors)?;
            }
        }

        {
            let _span = debug_span!("materialize_virtual").entered();
            for entry in &virtual_entries {
                mat.materialize_virtual(entry, &top_anchors)?;
            }
        }

        if opts.sort_children_by_name {
            mat.sort_all_children();
        }

        let visible_root_id = mat.pick_visible_root();

        let data = TreeData {
            nodes: mat.nodes,
            root_id: ROOT_ID.to_string(),
            visible_root_id,
            omit_container_row_at_root: opts.omit_container_row_at_root,
        };

        #[cfg(debug_assertions)]
        data.check_invariants()
            .unwrap_or_else(|e| panic!("tree invariant violated after materialization: {e}"));

        Ok(data)
    }
}

/// Small helper so `Option<fn(&str) -> String>` can be passed around as
/// `Option<&dyn Fn(&str) -> String>` without cloning the function pointer
/// at every call site.
trait AsDynFn {
    fn as_deref_fn(&self) -> Option<&dyn Fn(&str) -> String>;
}

impl AsDynFn for Option<fn(&str) -> String> {
    fn as_deref_fn(&self) -> Option<&dyn Fn(&str) -> String> {
        self.as_ref().map(|f| f as &dyn Fn(&str) -> String)
    }
}

fn eq_under_case(a: &str, b: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        a.to_lowercase() == b.to_lowercase()
    } else {
        a == b
    }
}

fn segment_count(path: &str) -> usize {
    path.split('/').filter(|s| !s.is_empty()).count()
}

/// Drops real entries that canonicalize to a duplicate path (first
/// occurrence wins) and splits the input into (real, virtual).
fn dedup_and_split(entries: Vec<TreeEntry>, opts: &BuildOptions) -> (Vec<TreeEntry>, Vec<TreeEntry>) {
    let mut seen_paths: std::collections::HashSet<String> = std::collections::HashSet::new();
    let mut seen_ids: std::collections::HashSet<String> = std::collections::HashSet::new();
    let mut real = Vec::new();
    let mut virt = Vec::new();
    for entry in entries {
        if !seen_ids.insert(entry.id.clone()) {
            continue; // duplicate entry id, first occurrence wins
        }
        if entry.is_virtual {
            virt.push(entry);
            continue;
        }
        let canon = canonicalize(&entry.full_path, opts.unicode_normalize.as_deref_fn());
        let key = if opts.case_insensitive_paths { canon.to_lowercase() } else { canon };
        if seen_paths.insert(key) {
            real.push(entry);
        }
    }
    (real, virt)
}

/// When multiple top anchors share a basename, widen each
/// conflicting label by one additional ancestor segment joined with
/// `" - "`, repeating until unique, falling back to a digest suffix.
fn assign_labels(anchors: &[String], case_insensitive: bool) -> HashMap<String, String> {
    let segments: HashMap<&str, Vec<&str>> = anchors
        .iter()
        .map(|a| (a.as_str(), a.split('/').filter(|s| !s.is_empty()).collect::<Vec<_>>()))
        .collect();

    let max_len = segments.values().map(|s| s.len()).max().unwrap_or(1).max(1);
    for level in 1..=max_len {
        let mut labels: HashMap<String, String> = HashMap::new();
        let mut counts: HashMap<String, usize> = HashMap::new();
        for anchor in anchors {
            let segs = &segments[anchor.as_str()];
            let take = level.min(segs.len()).max(1);
            let label = segs[segs.len() - take..].join(" - ");
            let key = if case_insensitive { label.to_lowercase() } else { label.clone() };
            *counts.entry(key).or_insert(0) += 1;
            labels.insert(anchor.clone(), label);
        }
        let all_unique = labels.values().all(|label| {
            let key = if case_insensitive { label.to_lowercase() } else { label.clone() };
            counts[&key] == 1
        });
        if all_unique || level == max_len {
            if all_unique {
                return labels;
            }
            // Final fallback: append a short digest to any still-conflicting label.
            let mut final_labels = HashMap::new();
            for anchor in anchors {
                let label = &labels[anchor];
                let key = if case_insensitive { label.to_lowercase() } else { label.clone() };
                let label = if counts[&key] > 1 {
                    format!("{label} [{}]", ids::short_digest(anchor))
                } else {
                    label.clone()
                };
                final_labels.insert(anchor.clone(), label);
            }
            return final_labels;
        }
    }
    unreachable!("loop always returns by level == max_len")
}

/// Internal mutable state while building the graph.
struct Materializer<'a> {
    opts: &'a BuildOptions,
    prefix_stripper: &'a PrefixStripper,
    nodes: HashMap<String, TreeNode>,
    /// Remembered canonical source path per folder id, used to decide
    /// whether two folders reached by different routes actually merge.
    /// `None` for purely virtual folders.
    canon_by_id: HashMap<String, Option<String>>,
}

impl<'a> Materializer<'a> {
    fn new(opts: &'a BuildOptions, prefix_stripper: &'a PrefixStripper) -> Self {
        Materializer { opts, prefix_stripper, nodes: HashMap::new(), canon_by_id: HashMap::new() }
    }

    fn create_skeleton(&mut self) {
        self.nodes.insert(
            ROOT_ID.to_string(),
            TreeNode {
                id: ROOT_ID.to_string(),
                name: String::new(),
                node_type: NodeType::Root,
                parent_id: String::new(),
                child_ids: vec![CONTAINER_ID.to_string()],
                virtual_path: "/".to_string(),
                source_path: None,
                entry_id: None,
                is_virtual: false,
                is_expanded: true,
                is_selected: false,
                origin: Origin::None,
            },
        );
        self.nodes.insert(
            CONTAINER_ID.to_string(),
            TreeNode {
                id: CONTAINER_ID.to_string(),
                name: self.opts.root_folder_label.clone(),
                node_type: NodeType::Folder,
                parent_id: ROOT_ID.to_string(),
                child_ids: Vec::new(),
                virtual_path: format!("/{}", self.opts.root_folder_label),
                source_path: None,
                entry_id: None,
                is_virtual: false,
                is_expanded: self.opts.expand_folders_by_default,
                is_selected: false,
                origin: Origin::None,
            },
        );
        self.canon_by_id.insert(CONTAINER_ID.to_string(), None);
    }

    #[allow(clippy::too_many_arguments)]
    fn find_or_create_folder(
        &mut self,
        parent_id: &str,
        name: &str,
        source_path: Option<String>,
        canonical_source_path: Option<String>,
        forced_id: Option<String>,
        origin: Origin,
        virtual_path: String,
    ) -> Result<String> {
        if name.contains('/') {
            return Err(Error::InvariantViolation { name: name.to_string() });
        }

        // 1. Forced ID already present.
        if let Some(id) = &forced_id {
            if self.nodes.contains_key(id) {
                let existing_origin = self.nodes[id].origin;
                let node = self.nodes.get_mut(id).expect("checked above");
                debug_assert_eq!(node.node_type, NodeType::Folder);
                node.name = name.to_string();
                if let Some(sp) = &source_path {
                    if node.source_path.as_deref() != Some(sp.as_str()) {
                        node.source_path = Some(sp.clone());
                    }
                }
                node.is_expanded = self.opts.expand_folders_by_default;
                node.origin = existing_origin.merge(origin);
                self.ensure_child(parent_id, id);
                return Ok(id.clone());
            }
        }

        // 2. Merge into an existing sibling by name + canonical-path test.
        let sibling_ids: Vec<String> = self.nodes[parent_id].child_ids.clone();
        for sibling_id in sibling_ids {
            let sibling = &self.nodes[&sibling_id];
            if sibling.node_type != NodeType::Folder || sibling.name != name {
                continue;
            }
            let existing_canon = self.canon_by_id.get(&sibling_id).cloned().flatten();
            let mergeable = match (&existing_canon, &canonical_source_path) {
                (None, None) => true,
                (Some(e), Some(i)) => eq_under_case(e, i, self.opts.case_insensitive_paths),
                (Some(_), None) => self.opts.merge_virtual_into_real_folders,
                (None, Some(_)) => self.opts.merge_virtual_into_real_folders,
            };
            if !mergeable {
                continue;
            }
            let adopts_incoming_canonical = existing_canon.is_none() && canonical_source_path.is_some();
            let sibling_mut = self.nodes.get_mut(&sibling_id).expect("sibling exists");
            if sibling_mut.source_path.is_none() {
                if let Some(sp) = &source_path {
                    sibling_mut.source_path = Some(sp.clone());
                }
            }
            if adopts_incoming_canonical {
                sibling_mut.source_path = source_path.clone().or(sibling_mut.source_path.clone());
            }
            sibling_mut.origin = sibling_mut.origin.merge(origin);
            if adopts_incoming_canonical {
                self.canon_by_id.insert(sibling_id.clone(), canonical_source_path.clone());
            }
            return Ok(sibling_id);
        }

        // 3. Create.
        let id = forced_id.unwrap_or_else(|| match &canonical_source_path {
            Some(c) => ids::source_path_folder_id(c),
            None => ids::virtual_folder_id(&virtual_path),
        });
        self.nodes.insert(
            id.clone(),
            TreeNode {
                id: id.clone(),
                name: name.to_string(),
                node_type: NodeType::Folder,
                parent_id: parent_id.to_string(),
                child_ids: Vec::new(),
                virtual_path,
                source_path,
                entry_id: None,
                is_virtual: canonical_source_path.is_none(),
                is_expanded: self.opts.expand_folders_by_default,
                is_selected: false,
                origin,
            },
        );
        self.canon_by_id.insert(id.clone(), canonical_source_path);
        self.ensure_child(parent_id, &id);
        Ok(id)
    }

    fn ensure_child(&mut self, parent_id: &str, child_id: &str) {
        let parent = self.nodes.get_mut(parent_id).expect("parent must exist");
        if !parent.child_ids.iter().any(|c| c == child_id) {
            parent.child_ids.push(child_id.to_string());
        }
    }

    fn materialize_anchor(&mut self, anchor: &str, label: &str, is_direct: bool) -> Result<()> {
        let source_path = self.prefix_stripper.strip(anchor);
        let virtual_path = format!("{}/{}", self.nodes[CONTAINER_ID].virtual_path, label);
        let origin = if is_direct { Origin::Direct } else { Origin::Inferred };
        self.find_or_create_folder(
            CONTAINER_ID,
            label,
            Some(source_path),
            Some(anchor.to_string()),
            Some(ids::top_anchor_folder_id(anchor)),
            origin,
            virtual_path,
        )?;
        Ok(())
    }

    fn materialize_file(&mut self, anchor: &str, entry: &TreeEntry) -> Result<()> {
        let file_node_id = ids::file_node_id(&entry.id);
        if self.nodes.contains_key(&file_node_id) {
            return Ok(()); // duplicate guard
        }
        let canonical_path = canonicalize(&entry.full_path, self.opts.unicode_normalize.as_deref_fn());
        let canonical_dir = crate::prefix::parent_of(&canonical_path);
        let segments = relative_segments(anchor, &canonical_dir, self.opts.case_insensitive_paths);

        let anchor_id = ids::top_anchor_folder_id(anchor);
        let mut parent_id = anchor_id;
        let mut canonical_so_far = anchor.to_string();
        for segment in &segments {
            canonical_so_far = if canonical_so_far == "/" {
                format!("/{segment}")
            } else {
                format!("{canonical_so_far}/{segment}")
            };
            let parent_source_path = self.nodes[&parent_id].source_path.clone();
            let source_path = parent_source_path.map(|p| {
                if p == "/" {
                    format!("/{segment}")
                } else {
                    format!("{p}/{segment}")
                }
            });
            let virtual_path = format!("{}/{}", self.nodes[&parent_id].virtual_path, segment);
            parent_id = self.find_or_create_folder(
                &parent_id,
                segment,
                source_path,
                Some(canonical_so_far.clone()),
                None,
                Origin::Inferred,
                virtual_path,
            )?;
        }

        let file_virtual_path = format!("{}/{}", self.nodes[&parent_id].virtual_path, entry.name);
        let file_source_path = self.nodes[&parent_id].source_path.clone().map(|p| {
            if p == "/" {
                format!("/{}", entry.name)
            } else {
                format!("{p}/{}", entry.name)
            }
        });
        self.nodes.insert(
            file_node_id.clone(),
            TreeNode {
                id: file_node_id.clone(),
                name: entry.name.clone(),
                node_type: NodeType::File,
                parent_id: parent_id.clone(),
                child_ids: Vec::new(),
                virtual_path: file_virtual_path,
                source_path: file_source_path,
                entry_id: Some(entry.id.clone()),
                is_virtual: false,
                is_expanded: false,
                is_selected: self.opts.select_new_files_by_default,
                origin: Origin::None,
            },
        );
        self.ensure_child(&parent_id, &file_node_id);
        Ok(())
    }

    fn materialize_empty_selected_dir(&mut self, dir: &str, top_anchors: &[String]) -> Result<()> {
        let Some(anchor) = top_anchors
            .iter()
            .find(|a| is_within(a, dir, self.opts.case_insensitive_paths))
            .cloned()
        else {
            return Ok(()); // nothing governs this selection; skip
        };
        if eq_under_case(&anchor, dir, self.opts.case_insensitive_paths) {
            return Ok(()); // the anchor folder itself already carries Direct origin
        }

        let segments = relative_segments(&anchor, dir, self.opts.case_insensitive_paths);
        let anchor_id = ids::top_anchor_folder_id(&anchor);
        let mut parent_id = anchor_id;
        let mut canonical_so_far = anchor.clone();
        let last = segments.len().saturating_sub(1);
        for (i, segment) in segments.iter().enumerate() {
            canonical_so_far = if canonical_so_far == "/" {
                format!("/{segment}")
            } else {
                format!("{canonical_so_far}/{segment}")
            };
            let parent_source_path = self.nodes[&parent_id].source_path.clone();
            let source_path = parent_source_path.map(|p| {
                if p == "/" {
                    format!("/{segment}")
                } else {
                    format!("{p}/{segment}")
                }
            });
            let virtual_path = format!("{}/{}", self.nodes[&parent_id].virtual_path, segment);
            let origin = if i == last { Origin::Direct } else { Origin::Inferred };
            parent_id = self.find_or_create_folder(
                &parent_id,
                segment,
                source_path,
                Some(canonical_so_far.clone()),
                None,
                origin,
                virtual_path,
            )?;
        }
        Ok(())
    }

    fn materialize_virtual(&mut self, entry: &TreeEntry, top_anchors: &[String]) -> Result<()> {
        let file_node_id = ids::file_node_id(&entry.id);
        if self.nodes.contains_key(&file_node_id) {
            return Ok(());
        }

        let parent_id = match entry.virtual_parent() {
            None => CONTAINER_ID.to_string(),
            Some(hint) => {
                let segments = normalize_virtual_parent(hint);
                let hint_path = format!("/{}", segments.join("/"));

                // The hint may name a real anchor's own canonical path (or a
                // descendant of one): in that case place the virtual folder
                // chain under that anchor's real folder so it merges with it,
                // rather than growing a fresh, disconnected chain under the
                // container, so it merges with the real folder's existing children.
                let governing = if self.opts.merge_virtual_into_real_folders {
                    top_anchors
                        .iter()
                        .find(|a| is_within(a, &hint_path, self.opts.case_insensitive_paths))
                        .cloned()
                } else {
                    None
                };

                match governing {
                    Some(anchor) => {
                        let remaining = relative_segments(&anchor, &hint_path, self.opts.case_insensitive_paths);
                        let mut parent_id = ids::top_anchor_folder_id(&anchor);
                        let mut canonical_so_far = anchor.clone();
                        for segment in &remaining {
                            canonical_so_far = if canonical_so_far == "/" {
                                format!("/{segment}")
                            } else {
                                format!("{canonical_so_far}/{segment}")
                            };
                            let parent_source_path = self.nodes[&parent_id].source_path.clone();
                            let source_path = parent_source_path.map(|p| {
                                if p == "/" {
                                    format!("/{segment}")
                                } else {
                                    format!("{p}/{segment}")
                                }
                            });
                            let virtual_path = format!("{}/{}", self.nodes[&parent_id].virtual_path, segment);
                            parent_id = self.find_or_create_folder(
                                &parent_id,
                                segment,
                                source_path,
                                Some(canonical_so_far.clone()),
                                None,
                                Origin::Inferred,
                                virtual_path,
                            )?;
                        }
                        parent_id
                    }
                    None => {
                        let mut parent_id = CONTAINER_ID.to_string();
                        for segment in segments {
                            let virtual_path = format!("{}/{}", self.nodes[&parent_id].virtual_path, segment);
                            parent_id = self.find_or_create_folder(
                                &parent_id,
                                &segment,
                                None,
                                None,
                                None,
                                Origin::Inferred,
                                virtual_path,
                            )?;
                        }
                        parent_id
                    }
                }
            }
        };

        let virtual_path = format!("{}/{}", self.nodes[&parent_id].virtual_path, entry.name);
        self.nodes.insert(
            file_node_id.clone(),
            TreeNode {
                id: file_node_id.clone(),
                name: entry.name.clone(),
                node_type: NodeType::File,
                parent_id: parent_id.clone(),
                child_ids: Vec::new(),
                virtual_path,
                source_path: None,
                entry_id: Some(entry.id.clone()),
                is_virtual: true,
                is_expanded: false,
                is_selected: self.opts.select_new_files_by_default,
                origin: Origin::None,
            },
        );
        self.ensure_child(&parent_id, &file_node_id);
        Ok(())
    }

    fn sort_all_children(&mut self) {
        let ids: Vec<String> = self.nodes.keys().cloned().collect();
        for id in ids {
            let mut child_ids = self.nodes[&id].child_ids.clone();
            if child_ids.is_empty() {
                continue;
            }
            child_ids.sort_by(|a, b| {
                let na = &self.nodes[a];
                let nb = &self.nodes[b];
                let rank = |t: NodeType| if t == NodeType::Folder { 0 } else { 1 };
                rank(na.node_type)
                    .cmp(&rank(nb.node_type))
                    .then_with(|| na.name.to_lowercase().cmp(&nb.name.to_lowercase()))
                    .then_with(|| na.id.cmp(&nb.id))
            });
            self.nodes.get_mut(&id).expect("id came from nodes").child_ids = child_ids;
        }
    }

    fn pick_visible_root(&self) -> String {
        if !self.opts.auto_pick_visible_root {
            return CONTAINER_ID.to_string();
        }
        let mut current = CONTAINER_ID.to_string();
        let mut hoisted = 0usize;
        loop {
            if let Some(max) = self.opts.visible_root_max_hoist_levels {
                if hoisted >= max {
                    break;
                }
            }
            let node = &self.nodes[&current];
            let folder_children: Vec<&String> = node
                .child_ids
                .iter()
                .filter(|c| self.nodes[*c].node_type == NodeType::Folder)
                .collect();
            let file_children_count = node
                .child_ids
                .iter()
                .filter(|c| {
                    let n = &self.nodes[*c];
                    n.node_type == NodeType::File
                        && !(self.opts.visible_root_ignore_virtual_files && n.is_virtual)
                })
                .count();
            if folder_children.len() == 1 && file_children_count == 0 {
                current = folder_children[0].clone();
                hoisted += 1;
            } else {
                break;
            }
        }
        current
    }
}

/// Normalize a `virtualParent` hint: backslashes to slashes, leading `/`
/// implied, `.`/`..` collapsed, empty segments dropped.
fn normalize_virtual_parent(hint: &str) -> Vec<String> {
    let slashed = hint.replace('\\', "/");
    let mut stack: Vec<String> = Vec::new();
    for segment in slashed.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other.to_string()),
        }
    }
    stack
}
