use chrono::{DateTime, FixedOffset};
use kernel::model::price::PriceMasterEntry;
use serde::Deserialize;

// 消費品目マスタ API のレコード
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionMasterRow {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub max_price: i64,
}

impl From<ConsumptionMasterRow> for PriceMasterEntry {
    fn from(value: ConsumptionMasterRow) -> Self {
        let ConsumptionMasterRow {
            id,
            created_at,
            name,
            max_price,
        } = value;
        PriceMasterEntry {
            id,
            name,
            max_price,
            created_at,
        }
    }
}
