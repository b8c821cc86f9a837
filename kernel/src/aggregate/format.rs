use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, SecondsFormat};

use super::{
    accumulator::{ConsumptionAccumulator, RoomAccumulator},
    Aggregation,
};
use crate::model::summary::{query::DATE_FORMAT, ConsumptionSummary, OfficeSummary, RoomSummary};

impl Aggregation {
    /// Offices ascending by name; rooms by booking count, descending.
    /// Sorts are stable so ties stay in first-seen order.
    pub fn into_offices(self) -> Vec<OfficeSummary> {
        let mut offices: BTreeMap<String, Vec<RoomSummary>> = BTreeMap::new();
        for room in self.rooms {
            offices
                .entry(room.office_name.clone())
                .or_default()
                .push(room_summary(room));
        }

        offices
            .into_iter()
            .map(|(office_name, mut rooms)| {
                rooms.sort_by(|a, b| b.booking_count.cmp(&a.booking_count));
                OfficeSummary { office_name, rooms }
            })
            .collect()
    }
}

fn room_summary(value: RoomAccumulator) -> RoomSummary {
    let RoomAccumulator {
        room_name,
        booking_count,
        total_participants,
        consumptions,
        min_booking_date,
        max_booking_date,
        min_start_time,
        max_end_time,
        ..
    } = value;

    let mut consumptions: Vec<ConsumptionSummary> =
        consumptions.into_iter().map(consumption_summary).collect();
    consumptions.sort_by(|a, b| b.count.cmp(&a.count));

    RoomSummary {
        room_name,
        booking_count,
        total_participants,
        consumptions,
        booking_start_date: format_date(&min_booking_date),
        booking_end_date: format_date(&max_booking_date),
        start_time: format_timestamp(&min_start_time),
        end_time: format_timestamp(&max_end_time),
    }
}

fn consumption_summary(value: ConsumptionAccumulator) -> ConsumptionSummary {
    let ConsumptionAccumulator {
        name,
        count,
        total_cost,
    } = value;
    ConsumptionSummary {
        consumption_name: name,
        count,
        total_cost,
    }
}

// calendar date in the booking's own offset
fn format_date(at: &DateTime<FixedOffset>) -> String {
    at.format(DATE_FORMAT).to_string()
}

fn format_timestamp(at: &DateTime<FixedOffset>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
