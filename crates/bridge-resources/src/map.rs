//! Ordered map of resource names to script text

use std::collections::HashMap;

/// Resource name to content, in discovery order.
///
/// Names are `/`-separated paths relative to the logical prefix they were
/// enumerated under. Inserting a name twice replaces the content but keeps
/// the position of the first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl ResourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the content it replaced.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) -> Option<String> {
        let name = name.into();
        let content = content.into();

        if let Some(&position) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.entries[position].1, content));
        }

        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, content));
        None
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, content)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, content)| (name.as_str(), content.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<N: Into<String>, C: Into<String>> FromIterator<(N, C)> for ResourceMap {
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, content) in iter {
            map.insert(name, content);
        }
        map
    }
}
