use crate::domain::model::QualifiedName;
use crate::utils::error::{NameError, Result};
use std::fmt;
use std::str::FromStr;

pub const SEPARATOR: char = '/';

/// Splits a qualified name into its namespace and name.
///
/// Everything before the first separator is the namespace, everything after
/// it is the name, so `a/b/c` gives `("a", "b/c")` rather than dropping the
/// trailing part. Without a separator the namespace is empty. The input is
/// assumed to be well formed; use [`try_split_qualified_name`] for untrusted
/// input.
pub fn split_qualified_name(qualified: &str) -> (&str, &str) {
    qualified.split_once(SEPARATOR).unwrap_or(("", qualified))
}

/// Joins a namespace and a name into a cleaned qualified name.
///
/// Empty parts are skipped, and the joined result goes through
/// [`clean_path`]. Returns an empty string when both parts are empty.
pub fn join_qualified_name(namespace: &str, name: &str) -> String {
    let parts: Vec<&str> = [namespace, name]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        return String::new();
    }

    clean_path(&parts.join("/"))
}

/// Lexically cleans a slash-separated path.
///
/// Collapses repeated separators, drops `.` elements, resolves `..` against
/// the preceding element (or drops it at the root of a rooted path) and
/// removes trailing separators. An empty result becomes `"."`.
pub fn clean_path(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with(SEPARATOR);
    let mut out: Vec<&str> = Vec::new();

    for segment in path.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => match out.last() {
                Some(&last) if last != ".." => {
                    out.pop();
                }
                // `..` above the root stays at the root
                _ if rooted => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }

    let joined = out.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Strict split for input that has not been validated.
///
/// Rejects empty input, empty parts around the separator and more than one
/// separator.
pub fn try_split_qualified_name(qualified: &str) -> Result<QualifiedName> {
    let invalid = |reason: &str| {
        tracing::debug!("Rejected qualified name '{}': {}", qualified, reason);
        NameError::InvalidQualifiedName {
            value: qualified.to_string(),
            reason: reason.to_string(),
        }
    };

    if qualified.is_empty() {
        return Err(invalid("name cannot be empty"));
    }

    let Some((namespace, name)) = qualified.split_once(SEPARATOR) else {
        return Ok(QualifiedName::new("", qualified));
    };

    if name.contains(SEPARATOR) {
        return Err(invalid("more than one separator"));
    }
    if namespace.is_empty() {
        return Err(invalid("namespace cannot be empty"));
    }
    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }

    Ok(QualifiedName::new(namespace, name))
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_qualified_name(&self.namespace, &self.name))
    }
}

impl FromStr for QualifiedName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self> {
        try_split_qualified_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_namespace() {
        assert_eq!(split_qualified_name("kube-system/dns"), ("kube-system", "dns"));
    }

    #[test]
    fn test_split_without_separator() {
        assert_eq!(split_qualified_name("dns"), ("", "dns"));
        assert_eq!(split_qualified_name(""), ("", ""));
    }

    #[test]
    fn test_split_uses_first_separator() {
        assert_eq!(split_qualified_name("a/b/c"), ("a", "b/c"));
        assert_eq!(split_qualified_name("/name"), ("", "name"));
        assert_eq!(split_qualified_name("ns/"), ("ns", ""));
    }

    #[test]
    fn test_join_basic() {
        assert_eq!(join_qualified_name("default", "web"), "default/web");
        assert_eq!(join_qualified_name("", "web"), "web");
        assert_eq!(join_qualified_name("default", ""), "default");
        assert_eq!(join_qualified_name("", ""), "");
    }

    #[test]
    fn test_join_cleans_separators() {
        assert_eq!(join_qualified_name("default/", "/web"), "default/web");
        assert_eq!(join_qualified_name("a//b", "c/"), "a/b/c");
        assert_eq!(join_qualified_name("a", "../b"), "b");
        assert_eq!(join_qualified_name("/", "web"), "/web");
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path(""), ".");
        assert_eq!(clean_path("/"), "/");
        assert_eq!(clean_path("a/./b"), "a/b");
        assert_eq!(clean_path("a/b/../c"), "a/c");
        assert_eq!(clean_path("a/../.."), "..");
        assert_eq!(clean_path("../../a"), "../../a");
        assert_eq!(clean_path("/../a"), "/a");
        assert_eq!(clean_path("a/.."), ".");
        assert_eq!(clean_path("abc//def///"), "abc/def");
    }

    #[test]
    fn test_try_split_accepts_valid_names() {
        let qn = try_split_qualified_name("default/web").unwrap();
        assert_eq!(qn, QualifiedName::new("default", "web"));

        let bare = try_split_qualified_name("web").unwrap();
        assert_eq!(bare, QualifiedName::new("", "web"));
    }

    #[test]
    fn test_try_split_rejects_malformed_names() {
        for input in ["", "/web", "default/", "a/b/c", "/"] {
            assert!(
                matches!(
                    try_split_qualified_name(input),
                    Err(NameError::InvalidQualifiedName { .. })
                ),
                "expected rejection for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_display_and_from_str() {
        let qn: QualifiedName = "default/web".parse().unwrap();
        assert_eq!(qn.to_string(), "default/web");
        assert_eq!(QualifiedName::new("", "web").to_string(), "web");
    }
}
