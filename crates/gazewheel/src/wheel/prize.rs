use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ColorLabel(String);

gazectl::impl_string_newtype!(ColorLabel);

/// Fixed label -> prize mapping. Built once from the palette and never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrizeTable {
    prizes: HashMap<ColorLabel, u32>,
}

impl PrizeTable {
    pub fn new(entries: impl IntoIterator<Item = (ColorLabel, u32)>) -> Self {
        Self {
            prizes: entries.into_iter().collect(),
        }
    }

    /// Unknown labels are worth nothing.
    pub fn lookup(&self, label: &ColorLabel) -> u32 {
        match self.prizes.get(label) {
            Some(&prize) => prize,
            None => {
                log::warn!("No prize registered for label '{}'", label);
                0
            }
        }
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PrizeTable {
        PrizeTable::new([
            (ColorLabel::new("gold"), 500),
            (ColorLabel::new("red"), 50),
        ])
    }

    #[test]
    fn test_lookup_known_labels() {
        let table = table();
        assert_eq!(table.lookup(&ColorLabel::new("gold")), 500);
        assert_eq!(table.lookup(&ColorLabel::new("red")), 50);
    }

    #[test]
    fn test_unrecognized_label_is_worth_zero() {
        assert_eq!(table().lookup(&ColorLabel::new("mauve")), 0);
        assert_eq!(PrizeTable::default().lookup(&ColorLabel::new("gold")), 0);
    }

    #[test]
    fn test_label_deserialization() {
        let label: ColorLabel = serde_json::from_str("\"teal\"").unwrap();
        assert_eq!(label.as_str(), "teal");
    }
}
