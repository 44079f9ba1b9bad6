//! Opaque key/value container used to retain screen state across
//! reconfiguration.
//!
//! Entries are held as JSON values so a bundle can be written out whole and
//! read back by a later process.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Key the list screen stores its items under.
pub const LIST_STATE_KEY: &str = "ListView";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateBundle {
    entries: BTreeMap<String, serde_json::Value>,
}

impl StateBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn put<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), Error> {
        let value = serde_json::to_value(value).map_err(|source| Error::Serialization {
            key: Some(key.to_owned()),
            source,
        })?;
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    /// Decodes the entry under `key`.
    ///
    /// `None` when the key is absent, `Some(Err(_))` when it is present but
    /// does not decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<Result<T, Error>> {
        self.entries.get(key).map(|value| {
            T::deserialize(value).map_err(|source| Error::Serialization {
                key: Some(key.to_owned()),
                source,
            })
        })
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
            .map_err(|source| Error::Serialization { key: None, source })
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|source| Error::Serialization { key: None, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get() {
        let mut bundle = StateBundle::new();
        bundle.put("numbers", &vec![1u32, 2, 3]).unwrap();
        let numbers: Vec<u32> = bundle.get("numbers").unwrap().unwrap();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(bundle.contains_key("numbers"));
    }

    #[test]
    fn missing_key_is_none() {
        let bundle = StateBundle::new();
        assert!(bundle.get::<Vec<u32>>(LIST_STATE_KEY).is_none());
    }

    #[test]
    fn wrong_shape_is_error() {
        let mut bundle = StateBundle::new();
        bundle.put("k", "not a list").unwrap();
        assert!(matches!(
            bundle.get::<Vec<u32>>("k"),
            Some(Err(Error::Serialization { key: Some(_), .. }))
        ));
    }

    #[test]
    fn json_round_trip_keeps_entries() {
        let mut bundle = StateBundle::new();
        bundle.put("a", &1u8).unwrap();
        bundle.put("b", &"two").unwrap();
        let restored = StateBundle::from_json(&bundle.to_json().unwrap()).unwrap();
        assert_eq!(restored, bundle);
        assert_eq!(restored.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn malformed_json_is_error() {
        assert!(matches!(
            StateBundle::from_json("[1, 2"),
            Err(Error::Serialization { key: None, .. })
        ));
    }
}
