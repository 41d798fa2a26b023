//! Ordered mapping of list names to file entries
//!
//! Lists are enumerated in the order their name was first bound, so the
//! emitted output follows the order variables appear in the input.

use std::collections::HashMap;

/// Mapping from list name to its ordered entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileLists {
    lists: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl FileLists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry to `name`, creating the list if needed
    pub fn append(&mut self, name: &str, entry: impl Into<String>) {
        let slot = self.slot(name);
        self.lists[slot].1.push(entry.into());
    }

    /// Replace the entries of `name`
    ///
    /// An existing list keeps its position; a new one goes last.
    pub fn insert(&mut self, name: impl Into<String>, entries: Vec<String>) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&slot) => self.lists[slot].1 = entries,
            None => {
                self.index.insert(name.clone(), self.lists.len());
                self.lists.push((name, entries));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.index
            .get(name)
            .map(|&slot| self.lists[slot].1.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Remove a list and return its entries
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        let slot = self.index.remove(name)?;
        let (_, entries) = self.lists.remove(slot);
        for idx in self.index.values_mut() {
            if *idx > slot {
                *idx -= 1;
            }
        }
        Some(entries)
    }

    /// Merge another mapping into this one, last write wins per name
    pub fn merge(&mut self, other: FileLists) {
        for (name, entries) in other.lists {
            self.insert(name, entries);
        }
    }

    /// Keep only the lists whose name satisfies `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.lists.retain(|(name, _)| keep(name));
        self.reindex();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.lists
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lists.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Total number of entries across all lists
    pub fn entry_count(&self) -> usize {
        self.lists.iter().map(|(_, entries)| entries.len()).sum()
    }

    fn slot(&mut self, name: &str) -> usize {
        if let Some(&slot) = self.index.get(name) {
            return slot;
        }
        let slot = self.lists.len();
        self.lists.push((name.to_string(), Vec::new()));
        self.index.insert(name.to_string(), slot);
        slot
    }

    fn reindex(&mut self) {
        self.index = self
            .lists
            .iter()
            .enumerate()
            .map(|(slot, (name, _))| (name.clone(), slot))
            .collect();
    }
}

impl IntoIterator for FileLists {
    type Item = (String, Vec<String>);
    type IntoIter = std::vec::IntoIter<(String, Vec<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.lists.into_iter()
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<String>)> for FileLists {
    fn from_iter<I: IntoIterator<Item = (N, Vec<String>)>>(iter: I) -> Self {
        let mut lists = FileLists::new();
        for (name, entries) in iter {
            lists.insert(name, entries);
        }
        lists
    }
}
