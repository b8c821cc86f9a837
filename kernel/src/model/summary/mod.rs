pub mod query;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Bookings that passed the date filter, placeholder locations included.
    pub total_bookings: usize,
    pub total_participants: i64,
    pub offices: Vec<OfficeSummary>,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficeSummary {
    pub office_name: String,
    pub rooms: Vec<RoomSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSummary {
    pub room_name: String,
    pub booking_count: usize,
    pub total_participants: i64,
    pub consumptions: Vec<ConsumptionSummary>,
    /// `YYYY-MM-DD`
    pub booking_start_date: String,
    pub booking_end_date: String,
    /// RFC 3339
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumptionSummary {
    pub consumption_name: String,
    pub count: usize,
    pub total_cost: i64,
}
