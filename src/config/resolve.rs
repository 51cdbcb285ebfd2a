//! Dotted path resolution over configuration trees.
//!
//! A path such as `nested.1.2.3.0.b` is split on `.` and walked one segment
//! at a time: segments index maps by key and lists by base-10 position.
//! Segments that are empty after trimming whitespace are skipped.

use log::trace;

use super::value::{Map, Value};
use super::ConfigError;

/// Walks `path` from `root` and returns the value it reaches.
///
/// The returned value may be of any kind; callers check the kind themselves.
/// A path without any non-empty segment resolves to `root`.
pub fn resolve<'a>(root: &'a Value, path: &str) -> Result<&'a Value, ConfigError> {
    let parts = split(path);
    walk(root, path, &parts, segments(&parts))
}

/// Walks `path` from a document root map.
///
/// The first segment is a key of `root`; the rest are walked as in
/// [`resolve`]. A path without any non-empty segment names `root` itself,
/// which is not a [`Value`], and fails with [`ConfigError::EmptyPath`].
pub fn resolve_in<'a>(root: &'a Map, path: &str) -> Result<&'a Value, ConfigError> {
    let parts = split(path);
    let mut steps = segments(&parts);

    let Some((pos, first)) = steps.next() else {
        return Err(ConfigError::EmptyPath {
            path: path.to_string(),
        });
    };
    let start = root
        .get(first)
        .ok_or_else(|| ConfigError::PathNotFound {
            path: prefix(&parts, pos),
        })?;
    trace!("resolved segment '{}' of '{}' to {}", first, path, start.kind());

    walk(start, path, &parts, steps)
}

fn split(path: &str) -> Vec<&str> {
    path.trim().split('.').collect()
}

/// Yields the non-empty segments with their position among all segments.
fn segments<'p>(parts: &'p [&'p str]) -> impl Iterator<Item = (usize, &'p str)> + 'p {
    parts
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, part)| !part.trim().is_empty())
}

/// Joins the segments up to and including `pos`, skipped ones included.
fn prefix(parts: &[&str], pos: usize) -> String {
    parts[..=pos].join(".")
}

fn walk<'a, 'p>(
    mut current: &'a Value,
    path: &str,
    parts: &[&str],
    steps: impl Iterator<Item = (usize, &'p str)>,
) -> Result<&'a Value, ConfigError> {
    for (pos, part) in steps {
        let here = || prefix(parts, pos);

        current = match current {
            Value::List(items) => {
                let index: usize = part
                    .parse()
                    .map_err(|_| ConfigError::InvalidIndex { path: here() })?;
                items.get(index).ok_or_else(|| ConfigError::IndexOutOfBounds {
                    path: here(),
                    len: items.len(),
                })?
            }
            Value::Map(map) => map
                .get(part)
                .ok_or_else(|| ConfigError::PathNotFound { path: here() })?,
            other => {
                return Err(ConfigError::NotIndexable {
                    path: here(),
                    kind: other.kind(),
                })
            }
        };
        trace!("resolved segment '{}' of '{}' to {}", part, path, current.kind());
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValueKind;

    fn make_tree(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    fn sample() -> Value {
        make_tree(
            r#"{
                "name": "John",
                "hobbies": ["skateboard", "snowboard", "go", "music"],
                "clothes": {"pants": {"waist": 32.0}},
                "nested": {"1": {"2": {"3": [{"b": "c"}]}}},
                "nothing": null
            }"#,
        )
    }

    #[test]
    fn test_top_level_key() {
        let tree = sample();
        assert_eq!(resolve(&tree, "name").unwrap(), &Value::from("John"));
    }

    #[test]
    fn test_mixed_map_and_list_traversal() {
        let tree = sample();
        assert_eq!(
            resolve(&tree, "nested.1.2.3.0.b").unwrap(),
            &Value::from("c")
        );
        assert_eq!(resolve(&tree, "hobbies.2").unwrap(), &Value::from("go"));
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        let tree = sample();
        assert_eq!(
            resolve(&tree, ".clothes..pants. .waist.").unwrap(),
            &Value::Number(32.0)
        );
        assert_eq!(
            resolve(&tree, "  clothes.pants.waist  ").unwrap(),
            &Value::Number(32.0)
        );
    }

    #[test]
    fn test_empty_path_returns_root() {
        let tree = sample();
        assert_eq!(resolve(&tree, "").unwrap(), &tree);
        assert_eq!(resolve(&tree, " . .. ").unwrap(), &tree);
    }

    #[test]
    fn test_resolves_to_non_scalar() {
        let tree = sample();
        assert_eq!(resolve(&tree, "clothes").unwrap().kind(), ValueKind::Map);
        assert_eq!(resolve(&tree, "nothing").unwrap(), &Value::Null);
    }

    #[test]
    fn test_missing_key_reports_prefix() {
        let tree = sample();
        let err = resolve(&tree, "clothes.shirt.size").unwrap_err();
        assert!(matches!(
            &err,
            ConfigError::PathNotFound { path } if path == "clothes.shirt"
        ));
    }

    #[test]
    fn test_prefix_keeps_skipped_segments() {
        let tree = sample();
        let err = resolve(&tree, "clothes..shirt").unwrap_err();
        assert_eq!(err.path(), Some("clothes..shirt"));
    }

    #[test]
    fn test_index_out_of_bounds() {
        let tree = sample();
        let err = resolve(&tree, "hobbies.4").unwrap_err();
        assert!(matches!(
            &err,
            ConfigError::IndexOutOfBounds { path, len: 4 } if path == "hobbies.4"
        ));
    }

    #[test]
    fn test_non_numeric_index() {
        let tree = sample();
        for path in ["hobbies.first", "hobbies.-1", "hobbies. 1"] {
            match resolve(&tree, path) {
                Err(ConfigError::InvalidIndex { path: prefix }) => {
                    assert!(path.starts_with(&prefix));
                }
                other => panic!("expected InvalidIndex for {path}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_resolve_in_walks_from_root_map() {
        let tree = sample();
        let root = tree.as_map().unwrap();

        assert_eq!(resolve_in(root, "name").unwrap(), &Value::from("John"));
        assert_eq!(
            resolve_in(root, "..nested.1.2.3.0.b").unwrap(),
            &Value::from("c")
        );
        assert!(matches!(
            resolve_in(root, "clothes.shirt"),
            Err(ConfigError::PathNotFound { path }) if path == "clothes.shirt"
        ));
        assert!(matches!(
            resolve_in(root, ".shirt"),
            Err(ConfigError::PathNotFound { path }) if path == ".shirt"
        ));
    }

    #[test]
    fn test_resolve_in_empty_path() {
        let tree = sample();
        let root = tree.as_map().unwrap();

        for path in ["", "  ", " . .. "] {
            match resolve_in(root, path) {
                Err(ConfigError::EmptyPath { path: reported }) => assert_eq!(reported, path),
                other => panic!("expected EmptyPath for {path:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_descending_into_scalar() {
        let tree = sample();
        let err = resolve(&tree, "name.first").unwrap_err();
        assert!(matches!(
            &err,
            ConfigError::NotIndexable { path, kind: ValueKind::String } if path == "name.first"
        ));

        let err = resolve(&tree, "nothing.at.all").unwrap_err();
        assert!(matches!(
            &err,
            ConfigError::NotIndexable { path, kind: ValueKind::Null } if path == "nothing.at"
        ));
    }
}
