// vtreebuild.
// Copyright 2026.

//! The filter mini-language flatten consumes.
//!
//! A concrete implementation of the search-box grammar, so
//! [`crate::flatten::flatten`] is runnable end to end without an
//! external filter compiler. Grammar: terms are whitespace-split and ANDed.
//! A `!term` negates a case-insensitive substring test against the
//! node's name. An `ext:suffix` term tests the node's lowercased
//! extension (with any leading `.` on the query side stripped) for
//! equality. Any other term is a plain case-insensitive substring test.

/// A compiled filter predicate: `(name, lowercase_extension) -> bool`.
pub type Predicate = Box<dyn Fn(&str, &str) -> bool>;

enum Term {
    Substring(String),
    NotSubstring(String),
    Extension(String),
}

/// Compile a filter query into a predicate. `None` or a blank query
/// compiles to an always-true predicate.
pub fn compile(query: Option<&str>) -> Predicate {
    let terms: Vec<Term> = match query {
        Some(q) if !q.trim().is_empty() => q
            .split_whitespace()
            .map(|raw| {
                if let Some(rest) = raw.strip_prefix('!') {
                    Term::NotSubstring(rest.to_lowercase())
                } else if let Some(rest) = raw.strip_prefix("ext:") {
                    Term::Extension(rest.trim_start_matches('.').to_lowercase())
                } else {
                    Term::Substring(raw.to_lowercase())
                }
            })
            .collect(),
        _ => Vec::new(),
    };

    Box::new(move |name: &str, ext_lower: &str| {
        let name_lower = name.to_lowercase();
        terms.iter().all(|term| match term {
            Term::Substring(s) => name_lower.contains(s.as_str()),
            Term::NotSubstring(s) => !name_lower.contains(s.as_str()),
            Term::Extension(e) => ext_lower == e,
        })
    })
}

/// The lowercased extension of `name` (without the leading `.`), or
/// empty if there is none.
pub fn extension_lower(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name[idx + 1..].to_lowercase(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_matches_everything() {
        let pred = compile(None);
        assert!(pred("anything.rs", "rs"));
        let pred = compile(Some("   "));
        assert!(pred("anything.rs", "rs"));
    }

    #[test]
    fn substring_terms_and_together() {
        let pred = compile(Some("foo bar"));
        assert!(pred("foobar.rs", "rs"));
        assert!(!pred("foo.rs", "rs"));
    }

    #[test]
    fn negated_term_excludes_matches() {
        let pred = compile(Some("!test"));
        assert!(pred("main.rs", "rs"));
        assert!(!pred("main_test.rs", "rs"));
    }

    #[test]
    fn extension_term_matches_case_insensitively() {
        let pred = compile(Some("ext:RS"));
        assert!(pred("main.rs", "rs"));
        assert!(!pred("main.toml", "toml"));
    }

    #[test]
    fn extension_helper_extracts_suffix() {
        assert_eq!(extension_lower("main.rs"), "rs");
        assert_eq!(extension_lower("README"), "");
        assert_eq!(extension_lower(".gitignore"), "");
    }
}
