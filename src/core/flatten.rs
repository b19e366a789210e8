//! Flattening of nested translation documents into separator-joined key paths.
//!
//! `{"common": {"hello": "Hello"}}` flattens to `common` and `common.hello`:
//! every object key is recorded at its own path, whether its value is a leaf
//! or another object.
//!
//! Arrays do not add index segments. Each object element of an array is
//! flattened under the array's own path, so `{"items": [{"a": 1}, {"b": 2}]}`
//! yields `items`, `items.a` and `items.b`. This means `items.0.a` style
//! lookups are never satisfied, which is a known limitation.

use serde_json::{Map, Value};

use super::KeySet;

/// A tree of translation values that can be flattened into key paths.
///
/// Implemented for `serde_json::Value`. Implementations backed by shared
/// nodes may contain cycles; `object_id` must return the same value for the
/// same underlying object so the flattener can refuse to re-enter it.
pub trait KeyTree {
    /// Identity of an object node, `None` for arrays and leaves.
    fn object_id(&self) -> Option<usize>;

    fn is_array(&self) -> bool;

    /// Visit every `(key, value)` entry of an object node, in document order.
    fn for_each_entry(&self, visit: &mut dyn FnMut(&str, &Self));

    /// Visit every element of an array node.
    fn for_each_element(&self, visit: &mut dyn FnMut(&Self));
}

impl KeyTree for Value {
    fn object_id(&self) -> Option<usize> {
        match self {
            Value::Object(map) => Some(map as *const Map<String, Value> as usize),
            _ => None,
        }
    }

    fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    fn for_each_entry(&self, visit: &mut dyn FnMut(&str, &Self)) {
        if let Value::Object(map) = self {
            for (key, value) in map {
                visit(key, value);
            }
        }
    }

    fn for_each_element(&self, visit: &mut dyn FnMut(&Self)) {
        if let Value::Array(items) = self {
            for item in items {
                visit(item);
            }
        }
    }
}

/// Flatten `value` into the set of key paths it defines.
///
/// Top-level keys carry no leading separator. A non-object root yields an
/// empty set.
pub fn flatten_keys<T: KeyTree>(value: &T, separator: &str) -> KeySet {
    let mut keys = KeySet::new();
    flatten_into(value, "", separator, &mut Vec::new(), &mut keys);
    keys
}

/// Flatten `value` under `prefix`, adding paths to an existing set.
pub fn flatten_keys_into<T: KeyTree>(value: &T, prefix: &str, separator: &str, keys: &mut KeySet) {
    flatten_into(value, prefix, separator, &mut Vec::new(), keys);
}

fn flatten_into<T: KeyTree>(
    value: &T,
    prefix: &str,
    separator: &str,
    on_path: &mut Vec<usize>,
    keys: &mut KeySet,
) {
    let Some(id) = value.object_id() else {
        return;
    };
    // Only objects on the current call chain are skipped; the same object
    // reached through a sibling path is flattened again under that path.
    if on_path.contains(&id) {
        return;
    }
    on_path.push(id);

    value.for_each_entry(&mut |key, child| {
        let path = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}{}{}", prefix, separator, key)
        };
        keys.insert(path.as_str());

        if child.object_id().is_some() {
            flatten_into(child, &path, separator, on_path, keys);
        } else if child.is_array() {
            child.for_each_element(&mut |element| {
                if element.object_id().is_some() {
                    flatten_into(element, &path, separator, on_path, keys);
                }
            });
        }
    });

    on_path.pop();
}
