//! Operations on nested locale trees
//!
//! A locale tree is a JSON object whose values are either nested objects or
//! leaves. Leaves are usually strings, but any non-object value counts as one.

use std::collections::{
    BTreeMap,
    BTreeSet,
};

use serde_json::{
    Map,
    Value,
};

use crate::error::LocaleError;

/// A parsed locale file. Key order follows the file and is kept on write.
pub type LocaleTree = Map<String, Value>;

/// Collect the dotted path of every leaf in `tree`.
///
/// Nested objects are walked but never emitted, so an empty subtree
/// contributes nothing.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use locale_tools::tree::flatten_keys;
///
/// let json = json!({ "a": { "b": "1" }, "c": "2" });
/// let keys = flatten_keys(json.as_object().unwrap(), ".");
///
/// assert_eq!(keys.into_iter().collect::<Vec<_>>(), ["a.b", "c"]);
/// ```
#[must_use]
pub fn flatten_keys(tree: &LocaleTree, separator: &str) -> BTreeSet<String> {
    let mut result = BTreeSet::new();
    visit_leaves(tree, separator, None, &mut |key, _| {
        result.insert(key);
    });
    result
}

/// Like [`flatten_keys`], keeping each leaf value.
#[must_use]
pub fn flatten_entries(tree: &LocaleTree, separator: &str) -> BTreeMap<String, Value> {
    let mut result = BTreeMap::new();
    visit_leaves(tree, separator, None, &mut |key, value| {
        result.insert(key, value.clone());
    });
    result
}

/// Depth-first walk calling `emit` with the full path of each leaf.
fn visit_leaves<'a>(
    tree: &'a LocaleTree,
    separator: &str,
    prefix: Option<&str>,
    emit: &mut impl FnMut(String, &'a Value),
) {
    for (key, value) in tree {
        let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
        match value {
            Value::Object(child) => visit_leaves(child, separator, Some(&full_key), emit),
            leaf => emit(full_key, leaf),
        }
    }
}

/// Split a dotted key into its segments.
///
/// Splitting never drops segments: `"a..b"` yields `["a", "", "b"]`.
#[must_use]
pub fn split_key<'a>(key: &'a str, separator: &str) -> Vec<&'a str> {
    key.split(separator).collect()
}

/// Set `value` at `segments`, creating intermediate objects as needed.
///
/// Missing levels are appended to their parent as empty objects. The last
/// segment is overwritten whatever it held before, leaf or subtree; an existing
/// key keeps its position.
///
/// # Errors
/// - `segments` is empty
/// - an intermediate segment already holds a leaf
pub fn deep_set(tree: &mut LocaleTree, segments: &[&str], value: Value) -> Result<(), LocaleError> {
    let Some((last, parents)) = segments.split_last() else {
        return Err(LocaleError::EmptyKeyPath);
    };

    let mut current = tree;
    for segment in parents {
        let node = current.entry(*segment).or_insert_with(|| Value::Object(Map::new()));
        current = match node {
            Value::Object(child) => child,
            _ => {
                return Err(LocaleError::PathConflict {
                    segments: segments.iter().map(ToString::to_string).collect(),
                    segment: (*segment).to_string(),
                });
            }
        };
    }

    current.insert((*last).to_string(), value);
    Ok(())
}
