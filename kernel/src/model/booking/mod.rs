use chrono::{DateTime, FixedOffset};
use derive_new::new;

/// Office names starting with this prefix are unset test data.
pub const OFFICE_PLACEHOLDER_PREFIX: &str = "officeName ";
/// Room names starting with this prefix are unset test data.
pub const ROOM_PLACEHOLDER_PREFIX: &str = "roomName ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub booking_id: String,
    pub booking_date: DateTime<FixedOffset>,
    pub office_name: String,
    pub room_name: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub participants: i64,
    pub consumptions: Vec<Consumption>,
}

impl Booking {
    /// True when either the office or the room carries a placeholder name.
    /// Such bookings count toward the totals but are never grouped.
    pub fn has_placeholder_location(&self) -> bool {
        self.office_name.starts_with(OFFICE_PLACEHOLDER_PREFIX)
            || self.room_name.starts_with(ROOM_PLACEHOLDER_PREFIX)
    }
}

/// One unit of a catering item ordered with a booking.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Consumption {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn booking_at(office_name: &str, room_name: &str) -> Booking {
        let at = DateTime::parse_from_rfc3339("2024-01-05T09:00:00+07:00").unwrap();
        Booking {
            booking_id: "1".into(),
            booking_date: at,
            office_name: office_name.into(),
            room_name: room_name.into(),
            start_time: at,
            end_time: at,
            participants: 1,
            consumptions: vec![],
        }
    }

    #[rstest]
    #[case("officeName 7", "Meeting-1", true)]
    #[case("Jakarta", "roomName 3", true)]
    #[case("officeName 1", "roomName 1", true)]
    #[case("Jakarta", "Meeting-1", false)]
    #[case("officeName", "Meeting-1", false)]
    #[case("my officeName 1", "roomName", false)]
    fn placeholder_detection_uses_prefixes(
        #[case] office: &str,
        #[case] room: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(booking_at(office, room).has_placeholder_location(), expected);
    }
}
