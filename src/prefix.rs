// vtreebuild.
// Copyright 2026.

//! Prefix stripping and `sourcePath` display.

use crate::path::canonicalize;

/// A set of canonicalized strip prefixes, sorted longest-first so the
/// most specific prefix wins.
pub struct PrefixStripper {
    prefixes: Vec<String>,
}

impl PrefixStripper {
    pub fn new(raw_prefixes: &[String]) -> Self {
        let mut prefixes: Vec<String> = raw_prefixes.iter().map(|p| canonicalize(p, None)).collect();
        prefixes.sort_by_key(|p| std::cmp::Reverse(p.len()));
        PrefixStripper { prefixes }
    }

    /// Canonicalize `path`, then strip the first (longest) matching
    /// prefix and return the display form.
    ///
    /// - Exact match of a prefix `P`: returns `"/" + basename(P)`.
    /// - `P` is a proper ancestor: returns `"/" + relative-remainder`.
    /// - No prefix applies: returns the canonical path unchanged.
    pub fn strip(&self, path: &str) -> String {
        let canon = canonicalize(path, None);
        for prefix in &self.prefixes {
            if canon.to_lowercase() == prefix.to_lowercase() {
                let base = prefix.rsplit('/').next().filter(|s| !s.is_empty()).unwrap_or(prefix);
                return format!("/{base}");
            }
            if is_within(prefix, &canon, true) {
                let segments = relative_segments(prefix, &canon, true);
                return format!("/{}", segments.join("/"));
            }
        }
        canon
    }
}

/// True iff `child` equals `parent` or shares `parent` as a path-segment
/// prefix (not merely a string prefix: `/ab` is not within `/a`).
pub fn is_within(parent: &str, child: &str, case_insensitive: bool) -> bool {
    let (p, c) = if case_insensitive {
        (parent.to_lowercase(), child.to_lowercase())
    } else {
        (parent.to_string(), child.to_string())
    };
    if p == c {
        return true;
    }
    if p == "/" {
        return c.starts_with('/');
    }
    c.starts_with(&p) && c[p.len()..].starts_with('/')
}

/// The parent directory of a canonical path (itself canonical).
pub fn parent_of(canonical: &str) -> String {
    if canonical == "/" {
        return "/".to_string();
    }
    match canonical.rfind('/') {
        Some(0) => "/".to_string(),
        Some(idx) => canonical[..idx].to_string(),
        None => "/".to_string(),
    }
}

/// Path segments of a canonical path relative to `ancestor`, which must
/// satisfy [`is_within`] under the same `case_insensitive` policy. The
/// returned segments keep `path`'s original casing; only the prefix
/// comparison itself is case-folded.
pub fn relative_segments(ancestor: &str, path: &str, case_insensitive: bool) -> Vec<String> {
    let remainder = if ancestor == "/" {
        path.trim_start_matches('/')
    } else {
        let ancestor_chars = ancestor.chars().count();
        let cut = path.char_indices().nth(ancestor_chars).map(|(idx, _)| idx).unwrap_or(path.len());
        let (head, tail) = path.split_at(cut);
        let matches = if case_insensitive { head.to_lowercase() == ancestor.to_lowercase() } else { head == ancestor };
        if matches {
            tail.trim_start_matches('/')
        } else {
            path.trim_start_matches('/')
        }
    };
    remainder
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_exact_match_returns_basename() {
        let s = PrefixStripper::new(&["/repo".to_string()]);
        assert_eq!(s.strip("/repo"), "/repo");
    }

    #[test]
    fn strip_ancestor_returns_remainder() {
        let s = PrefixStripper::new(&["/repo".to_string()]);
        assert_eq!(s.strip("/repo/lib/src/features/scan"), "/lib/src/features/scan");
    }

    #[test]
    fn strip_no_match_returns_canonical() {
        let s = PrefixStripper::new(&["/repo".to_string()]);
        assert_eq!(s.strip("/other/lib"), "/other/lib");
    }

    #[test]
    fn strip_folds_case_between_prefix_and_path() {
        let s = PrefixStripper::new(&["/Repo".to_string()]);
        assert_eq!(s.strip("/repo/lib/src"), "/lib/src");
    }

    #[test]
    fn is_within_requires_segment_boundary() {
        assert!(is_within("/a", "/a/b", false));
        assert!(!is_within("/a", "/ab", false));
        assert!(is_within("/a", "/a", false));
    }

    #[test]
    fn relative_segments_splits_remainder() {
        assert_eq!(relative_segments("/repo", "/repo/a/b.txt", true), vec!["a", "b.txt"]);
        assert_eq!(relative_segments("/", "/a/b", true), vec!["a", "b"]);
    }

    #[test]
    fn relative_segments_folds_case_on_the_ancestor_only() {
        assert_eq!(relative_segments("/Repo", "/repo/a/b.txt", true), vec!["a", "b.txt"]);
        assert_eq!(relative_segments("/Repo", "/repo/a/b.txt", false), vec!["repo", "a", "b.txt"]);
    }
}
