//! Item records shown by the list.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Index of one of the fixed row presentations.
///
/// Always in `[0, Variant::COUNT)`; decoding a stored value outside that range
/// fails instead of producing an unrenderable row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Variant(u8);

impl Variant {
    pub const COUNT: u8 = 4;

    pub fn new(value: u8) -> Option<Self> {
        (value < Self::COUNT).then_some(Self(value))
    }

    /// Folds any value into range.
    pub fn wrapping(value: u8) -> Self {
        Self(value % Self::COUNT)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Variant {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Variant::new(value).ok_or(Error::InvalidVariant(value))
    }
}

impl From<Variant> for u8 {
    fn from(variant: Variant) -> u8 {
        variant.0
    }
}

/// One row of the list. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRecord {
    short_label: String,
    long_label: String,
    variant: Variant,
}

impl ItemRecord {
    pub fn new(short_label: impl Into<String>, long_label: impl Into<String>, variant: Variant) -> Self {
        Self {
            short_label: short_label.into(),
            long_label: long_label.into(),
            variant,
        }
    }

    pub fn short_label(&self) -> &str {
        &self.short_label
    }

    pub fn long_label(&self) -> &str {
        &self.long_label
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_range_is_enforced() {
        assert_eq!(Variant::new(3).map(Variant::get), Some(3));
        assert_eq!(Variant::new(4), None);
        assert!(matches!(
            Variant::try_from(200),
            Err(Error::InvalidVariant(200))
        ));
    }

    #[test]
    fn item_serializes_variant_as_integer() {
        let item = ItemRecord::new("abcde", "fghijklmnopqrst", Variant(2));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["variant"], 2);
        assert_eq!(json["short_label"], "abcde");
    }

    #[test]
    fn decoding_rejects_out_of_range_variant() {
        let json = r#"{"short_label":"a","long_label":"b","variant":7}"#;
        assert!(serde_json::from_str::<ItemRecord>(json).is_err());
    }
}
