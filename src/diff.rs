// vtreebuild.
// Copyright 2026.

//! Minimal row-level delta between two flattened sequences via a
//! Minimal-edit list diff via Longest Increasing Subsequence.

use std::collections::HashMap;

use crate::flatten::VisibleNode;

/// Row-level edit script: apply `removes_desc` to `before` (in the
/// order given, each index valid against the progressively-shrinking
/// list), then `inserts_asc` to the result, to arrive at `after`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListDiff {
    pub removes_desc: Vec<usize>,
    pub inserts_asc: Vec<usize>,
}

/// Diff two flattened sequences, keyed by [`VisibleNode::id`].
pub fn diff(before: &[VisibleNode], after: &[VisibleNode]) -> ListDiff {
    if before.len() == after.len() && before.iter().zip(after).all(|(a, b)| a.id == b.id) {
        return ListDiff { removes_desc: Vec::new(), inserts_asc: Vec::new() };
    }

    let after_index_by_id: HashMap<&str, usize> =
        after.iter().enumerate().map(|(i, n)| (n.id.as_str(), i)).collect();

    // seq[i] = after-index of before[i], for the before entries that
    // still exist in after, keeping track of which `before` index each
    // sequence element came from.
    let mut seq: Vec<usize> = Vec::new();
    let mut seq_before_idx: Vec<usize> = Vec::new();
    for (i, node) in before.iter().enumerate() {
        if let Some(&after_idx) = after_index_by_id.get(node.id.as_str()) {
            seq.push(after_idx);
            seq_before_idx.push(i);
        }
    }

    let lis_positions = longest_increasing_subsequence(&seq);
    let kept_after_indices: std::collections::HashSet<usize> =
        lis_positions.iter().map(|&pos| seq[pos]).collect();
    let kept_before_indices: std::collections::HashSet<usize> =
        lis_positions.iter().map(|&pos| seq_before_idx[pos]).collect();

    let mut removes_desc: Vec<usize> = (0..before.len())
        .filter(|i| !kept_before_indices.contains(i))
        .collect();
    removes_desc.sort_unstable_by(|a, b| b.cmp(a));

    let inserts_asc: Vec<usize> = (0..after.len())
        .filter(|j| !kept_after_indices.contains(j))
        .collect();

    ListDiff { removes_desc, inserts_asc }
}

/// Indices (into `seq`) of one longest strictly-increasing subsequence,
/// found via patience sorting with binary search over tails and a `prev`
/// backpointer array, in ascending order of index.
fn longest_increasing_subsequence(seq: &[usize]) -> Vec<usize> {
    if seq.is_empty() {
        return Vec::new();
    }
    // tails[k] = index into `seq` of the smallest tail value of any
    // increasing subsequence of length k+1.
    let mut tails: Vec<usize> = Vec::new();
    let mut prev: Vec<Option<usize>> = vec![None; seq.len()];

    for i in 0..seq.len() {
        let value = seq[i];
        // Find the first tail whose value is >= value (strictly increasing).
        let pos = tails.partition_point(|&t| seq[t] < value);
        if pos > 0 {
            prev[i] = Some(tails[pos - 1]);
        }
        if pos == tails.len() {
            tails.push(i);
        } else {
            tails[pos] = i;
        }
    }

    let mut result = Vec::with_capacity(tails.len());
    let mut cur = tails.last().copied();
    while let Some(i) = cur {
        result.push(i);
        cur = prev[i];
    }
    result.reverse();
    result
}
