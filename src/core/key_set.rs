use std::collections::HashSet;

/// A set of translation keys that remembers first-insertion order.
///
/// Membership checks go through a `HashSet`; iteration follows the order in
/// which keys were first discovered, which keeps missing-key reports stable
/// for a given input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    order: Vec<String>,
    members: HashSet<String>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key. Returns `false` if it was already present.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.members.contains(&key) {
            return false;
        }
        self.members.insert(key.clone());
        self.order.push(key);
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.members.contains(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Add every key of `other` that is not yet present, in `other`'s order.
    pub fn extend_from(&mut self, other: &KeySet) {
        for key in other.iter() {
            self.insert(key);
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl<S: Into<String>> FromIterator<S> for KeySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeySet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for KeySet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a> IntoIterator for &'a KeySet {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.order
            .iter()
            .map(String::as_str as fn(&'a String) -> &'a str)
    }
}
