use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// String-keyed map that keeps entries in insertion order.
///
/// JSON objects deserialize into it in document order, which is what makes
/// ride processing and idle-key reporting deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryMap<T>(Vec<(String, T)>);

impl<T> EntryMap<T> {
    pub fn new() -> Self {
        EntryMap(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: T) {
        self.0.push((key.into(), value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }
}

impl<T> Default for EntryMap<T> {
    fn default() -> Self {
        EntryMap::new()
    }
}

impl<T> FromIterator<(String, T)> for EntryMap<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        EntryMap(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for EntryMap<T> {
    type Item = (String, T);
    type IntoIter = std::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: Serialize> Serialize for EntryMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for EntryMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntryMapVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for EntryMapVisitor<T> {
            type Value = EntryMap<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string-keyed map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry()? {
                    entries.push((key, value));
                }
                Ok(EntryMap(entries))
            }
        }

        deserializer.deserialize_map(EntryMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::EntryMap;

    #[test]
    fn deserialization_keeps_document_order() {
        let map: EntryMap<u32> = serde_json::from_str(r#"{"zulu":1,"alpha":2,"mike":3}"#).unwrap();

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["zulu", "alpha", "mike"]);
    }

    #[test]
    fn serialization_keeps_insertion_order() {
        let mut map = EntryMap::new();
        map.insert("ride_2", 2);
        map.insert("ride_1", 1);

        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"ride_2":2,"ride_1":1}"#
        );
    }
}
