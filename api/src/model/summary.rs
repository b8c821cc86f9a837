use garde::Validate;
use kernel::model::summary::{
    query::SummaryQuery, ConsumptionSummary, OfficeSummary, RoomSummary, Summary,
};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct SummaryQueryParams {
    #[garde(length(max = 10))]
    #[serde(default)]
    pub start_date: String,
    #[garde(length(max = 10))]
    #[serde(default)]
    pub end_date: String,
}

impl From<SummaryQueryParams> for SummaryQuery {
    fn from(value: SummaryQueryParams) -> Self {
        let SummaryQueryParams {
            start_date,
            end_date,
        } = value;
        SummaryQuery::new(start_date, end_date)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummaryResponse {
    pub total_bookings: i64,
    pub total_participants: i64,
    pub offices: Vec<OfficeSummaryResponse>,
    pub start_date: String,
    pub end_date: String,
}

impl TryFrom<Summary> for BookingSummaryResponse {
    type Error = AppError;

    fn try_from(value: Summary) -> AppResult<Self> {
        let Summary {
            total_bookings,
            total_participants,
            offices,
            start_date,
            end_date,
        } = value;
        Ok(Self {
            total_bookings: to_wire_count(total_bookings)?,
            total_participants,
            offices: offices
                .into_iter()
                .map(OfficeSummaryResponse::try_from)
                .collect::<AppResult<_>>()?,
            start_date,
            end_date,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OfficeSummaryResponse {
    pub office_name: String,
    pub rooms: Vec<RoomSummaryResponse>,
}

impl TryFrom<OfficeSummary> for OfficeSummaryResponse {
    type Error = AppError;

    fn try_from(value: OfficeSummary) -> AppResult<Self> {
        let OfficeSummary { office_name, rooms } = value;
        Ok(Self {
            office_name,
            rooms: rooms
                .into_iter()
                .map(RoomSummaryResponse::try_from)
                .collect::<AppResult<_>>()?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummaryResponse {
    pub room_name: String,
    pub booking_count: i64,
    pub total_participants: i64,
    pub consumptions: Vec<ConsumptionSummaryResponse>,
    pub booking_start_date: String,
    pub booking_end_date: String,
    pub start_time: String,
    pub end_time: String,
}

impl TryFrom<RoomSummary> for RoomSummaryResponse {
    type Error = AppError;

    fn try_from(value: RoomSummary) -> AppResult<Self> {
        let RoomSummary {
            room_name,
            booking_count,
            total_participants,
            consumptions,
            booking_start_date,
            booking_end_date,
            start_time,
            end_time,
        } = value;
        Ok(Self {
            room_name,
            booking_count: to_wire_count(booking_count)?,
            total_participants,
            consumptions: consumptions
                .into_iter()
                .map(ConsumptionSummaryResponse::try_from)
                .collect::<AppResult<_>>()?,
            booking_start_date,
            booking_end_date,
            start_time,
            end_time,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionSummaryResponse {
    pub consumption_name: String,
    pub count: i64,
    pub total_cost: i64,
}

impl TryFrom<ConsumptionSummary> for ConsumptionSummaryResponse {
    type Error = AppError;

    fn try_from(value: ConsumptionSummary) -> AppResult<Self> {
        let ConsumptionSummary {
            consumption_name,
            count,
            total_cost,
        } = value;
        Ok(Self {
            consumption_name,
            count: to_wire_count(count)?,
            total_cost,
        })
    }
}

fn to_wire_count(count: usize) -> AppResult<i64> {
    i64::try_from(count)
        .map_err(|_| AppError::ConversionEntityError(format!("count {count} does not fit in i64")))
}
