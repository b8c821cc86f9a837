use chrono::{DateTime, FixedOffset};
use kernel::model::booking::{Booking, Consumption};
use serde::Deserialize;

// 予約一覧 API のレコード
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRow {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub id: String,
    pub booking_date: DateTime<FixedOffset>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub office_name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub room_name: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub participants: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub list_consumption: Vec<ConsumptionRow>,
}

#[derive(Debug, Deserialize)]
pub struct ConsumptionRow {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            id,
            booking_date,
            office_name,
            room_name,
            start_time,
            end_time,
            participants,
            list_consumption,
        } = value;
        Booking {
            booking_id: id,
            booking_date,
            office_name,
            room_name,
            start_time,
            end_time,
            participants,
            consumptions: list_consumption
                .into_iter()
                .map(|c| Consumption::new(c.name))
                .collect(),
        }
    }
}
