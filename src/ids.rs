// vtreebuild.
// Copyright 2026.

//! Stable identifier derivation.
//!
//! IDs depend only on canonical inputs, never on build order or sibling
//! count, so a host's expansion/selection state (keyed by id) survives a
//! rebuild with identical entries.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

pub const ROOT_ID: &str = "root";
pub const CONTAINER_ID: &str = "container";

/// Replace every character outside `[A-Za-z0-9_-]` with `_`. When
/// `keep_slash` is set, `/` also passes through unchanged (used for
/// virtual-path-derived ids).
fn sanitize(s: &str, keep_slash: bool) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' || (keep_slash && c == '/') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn digest(s: &str) -> String {
    URL_SAFE_NO_PAD.encode(s.as_bytes())
}

fn basename(canonical: &str) -> &str {
    canonical.rsplit('/').next().filter(|s| !s.is_empty()).unwrap_or(canonical)
}

/// `"folder_sr_" + sanitize(basename(canonical)) + "_" + base64url(canonical)`
pub fn top_anchor_folder_id(canonical: &str) -> String {
    format!("folder_sr_{}_{}", sanitize(basename(canonical), false), digest(canonical))
}

/// Same scheme as [`top_anchor_folder_id`] but for a folder reached via
/// an interior path segment, prefixed `folder_sp_`.
pub fn source_path_folder_id(canonical_source_path: &str) -> String {
    format!(
        "folder_sp_{}_{}",
        sanitize(basename(canonical_source_path), false),
        digest(canonical_source_path)
    )
}

/// `"folder_" + sanitize(virtual_path, '/' -> '_') + "_" + base64url(virtual_path)`
pub fn virtual_folder_id(virtual_path: &str) -> String {
    format!(
        "folder_{}_{}",
        sanitize(virtual_path, false),
        digest(virtual_path)
    )
}

/// `"node_" + entry.id`
pub fn file_node_id(entry_id: &str) -> String {
    format!("node_{entry_id}")
}

/// First 6 characters of the base64url digest, used as a last-resort
/// disambiguator for top-level labels.
pub fn short_digest(s: &str) -> String {
    digest(s).chars().take(6).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable_across_calls() {
        assert_eq!(top_anchor_folder_id("/a/b"), top_anchor_folder_id("/a/b"));
        assert_eq!(file_node_id("42"), "node_42");
    }

    #[test]
    fn sanitizer_replaces_unsafe_characters() {
        assert_eq!(sanitize("foo bar/baz", false), "foo_bar_baz");
        assert_eq!(sanitize("foo bar/baz", true), "foo_bar/baz");
    }

    #[test]
    fn digest_disambiguates_sanitizer_collisions() {
        let a = top_anchor_folder_id("/x/foo-bar");
        let b = top_anchor_folder_id("/x/foo_bar");
        assert_ne!(a, b);
    }
}
