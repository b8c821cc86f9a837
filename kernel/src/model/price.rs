use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceMasterEntry {
    pub id: String,
    pub name: String,
    pub max_price: i64,
    /// Not used by aggregation; upstream rows may omit it.
    pub created_at: Option<DateTime<FixedOffset>>,
}

/// Lookup from consumption item name to its maximum unit price.
#[derive(Debug, Default, Clone)]
pub struct PriceIndex(HashMap<String, i64>);

impl PriceIndex {
    /// Later entries overwrite earlier ones with the same name.
    pub fn build<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a PriceMasterEntry>,
    {
        let mut prices = HashMap::new();
        for entry in entries {
            prices.insert(entry.name.clone(), entry.max_price);
        }
        Self(prices)
    }

    pub fn unit_price(&self, name: &str) -> Option<i64> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
