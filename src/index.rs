use std::collections::HashMap;

use serde::ser::{Serialize, Serializer};

/// Map of UUID to document content, in the order the UUIDs were first seen.
///
/// Inserting a UUID that is already present replaces its content and keeps
/// its original position, so when a package holds two documents with the
/// same UUID the later one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UuidIndex {
    entries: Vec<(String, Vec<u8>)>,
    positions: HashMap<String, usize>,
}

impl UuidIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the content stored for `uuid`.
    /// Returns the previous content when the UUID was already indexed.
    pub fn insert(&mut self, uuid: String, content: Vec<u8>) -> Option<Vec<u8>> {
        match self.positions.get(&uuid) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, content)),
            None => {
                self.positions.insert(uuid.clone(), self.entries.len());
                self.entries.push((uuid, content));
                None
            }
        }
    }

    pub fn get(&self, uuid: &str) -> Option<&[u8]> {
        self.positions
            .get(uuid)
            .map(|&position| self.entries[position].1.as_slice())
    }

    pub fn contains(&self, uuid: &str) -> bool {
        self.positions.contains_key(uuid)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// UUIDs in insertion order.
    pub fn uuids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(uuid, _)| uuid.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries
            .iter()
            .map(|(uuid, content)| (uuid.as_str(), content.as_slice()))
    }
}

impl FromIterator<(String, Vec<u8>)> for UuidIndex {
    fn from_iter<I: IntoIterator<Item = (String, Vec<u8>)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (uuid, content) in iter {
            index.insert(uuid, content);
        }
        index
    }
}

/// Serialized as a JSON object of UUID to content text.
impl Serialize for UuidIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.iter()
                .map(|(uuid, content)| (uuid, String::from_utf8_lossy(content))),
        )
    }
}
