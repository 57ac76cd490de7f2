// vtreebuild.
// Copyright 2026.

//! Anchor universe, compression, and file grouping.

use std::collections::HashMap;

use crate::prefix::{is_within, parent_of};

/// Build the candidate anchor universe.
///
/// `files` and `dirs`/`roots` are already-canonicalized paths.
pub fn build_universe(
    auto_compute: bool,
    files: &[String],
    selected_directories: &[String],
    source_roots: &[String],
) -> Vec<String> {
    let mut universe = Vec::new();
    if auto_compute {
        for f in files {
            universe.push(parent_of(f));
        }
        universe.extend(selected_directories.iter().cloned());
    }
    universe.extend(source_roots.iter().cloned());
    universe
}

/// Compress the anchor universe down to the surviving "top anchors",
/// shallowest first. When `prefer_deepest` is set (the `preferDeepestRoot`
/// option), the dominance rule inverts: among mutually-ancestral
/// candidates the deepest one survives instead of the shallowest.
pub fn compress(universe: &[String], case_insensitive: bool, prefer_deepest: bool) -> Vec<String> {
    // 1. Dedup by case-folded key, keeping one representative.
    let mut seen: HashMap<String, String> = HashMap::new();
    for path in universe {
        let key = if case_insensitive { path.to_lowercase() } else { path.clone() };
        seen.entry(key).or_insert_with(|| path.clone());
    }
    let mut candidates: Vec<String> = seen.into_values().collect();

    // 2. Sort by ancestor depth, then lexicographically. Depth is the
    // number of path segments; shallower sorts first regardless of the
    // dominance rule, since dominance only decides *which* of a mutually
    // ancestral pair is kept, not the walk order.
    candidates.sort_by(|a, b| depth(a).cmp(&depth(b)).then_with(|| a.cmp(b)));

    // 3. Walk in that order. In the default (shallowest-wins) mode, drop
    // a candidate already dominated by a kept ancestor. In
    // `prefer_deepest` mode, a candidate that is a *descendant* of a kept
    // anchor instead replaces it, since candidates arrive shallowest
    // first and we want the deepest of each mutually-ancestral chain.
    let mut kept: Vec<String> = Vec::new();
    for candidate in candidates {
        let ancestor_idx = kept
            .iter()
            .position(|existing| is_within(existing, &candidate, case_insensitive) && *existing != candidate);
        match ancestor_idx {
            Some(idx) if prefer_deepest => kept[idx] = candidate,
            Some(_) => {} // shallower existing anchor wins; candidate dropped
            None => kept.push(candidate),
        }
    }
    kept.sort_by(|a, b| depth(a).cmp(&depth(b)).then_with(|| a.cmp(b)));
    kept
}

fn depth(path: &str) -> usize {
    path.split('/').filter(|s| !s.is_empty()).count()
}

/// Assign each canonicalized file path to the first (shallowest) top
/// anchor that is its ancestor. Falls back to the file's own parent
/// directory (a synthetic top anchor) if none applies. Every top anchor
/// gets an entry, possibly empty.
pub fn group_files(
    top_anchors: &[String],
    files: &[String],
    case_insensitive: bool,
) -> (HashMap<String, Vec<String>>, Vec<String>) {
    let mut groups: HashMap<String, Vec<String>> = top_anchors.iter().cloned().map(|a| (a, Vec::new())).collect();
    let mut extra_anchors: Vec<String> = Vec::new();
    for file in files {
        let governing = top_anchors
            .iter()
            .find(|anchor| is_within(anchor, file, case_insensitive))
            .cloned();
        match governing {
            Some(anchor) => groups.entry(anchor).or_default().push(file.clone()),
            None => {
                let synthetic = parent_of(file);
                if !groups.contains_key(&synthetic) {
                    extra_anchors.push(synthetic.clone());
                }
                groups.entry(synthetic).or_default().push(file.clone());
            }
        }
    }
    (groups, extra_anchors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compression_drops_descendant_anchors() {
        let universe = vec!["/repo/a".to_string(), "/repo/a/b".to_string(), "/repo/c".to_string()];
        let kept = compress(&universe, true, false);
        assert_eq!(kept, vec!["/repo/a".to_string(), "/repo/c".to_string()]);
    }

    #[test]
    fn prefer_deepest_inverts_dominance() {
        let universe = vec!["/repo/a".to_string(), "/repo/a/b".to_string()];
        let kept = compress(&universe, true, true);
        assert_eq!(kept, vec!["/repo/a/b".to_string()]);
    }

    #[test]
    fn dedup_is_case_insensitive() {
        let universe = vec!["/Repo/A".to_string(), "/repo/a".to_string()];
        let kept = compress(&universe, true, false);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn grouping_assigns_shallowest_ancestor() {
        let anchors = vec!["/repo".to_string()];
        let files = vec!["/repo/a/b.txt".to_string()];
        let (groups, extra) = group_files(&anchors, &files, true);
        assert!(extra.is_empty());
        assert_eq!(groups["/repo"], vec!["/repo/a/b.txt".to_string()]);
    }

    #[test]
    fn ungrouped_file_falls_back_to_own_parent() {
        let anchors: Vec<String> = vec![];
        let files = vec!["/other/a.txt".to_string()];
        let (groups, extra) = group_files(&anchors, &files, true);
        assert_eq!(extra, vec!["/other".to_string()]);
        assert_eq!(groups["/other"], vec!["/other/a.txt".to_string()]);
    }
}
