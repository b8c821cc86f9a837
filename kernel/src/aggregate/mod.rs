//! Booking usage aggregation.
//!
//! Bookings are narrowed to the requested date range, folded into one
//! accumulator per (office, room) and flattened into an ordered
//! [`Summary`]. Everything here is pure and request scoped.

mod accumulator;
mod format;

use std::collections::HashMap;

use accumulator::{RoomAccumulator, RoomKey};

use crate::model::{
    booking::Booking,
    price::{PriceIndex, PriceMasterEntry},
    summary::{
        query::{DateRange, SummaryQuery},
        Summary,
    },
};

/// Keeps the bookings whose date falls inside `range`, in input order.
pub fn filter_by_date<'a>(bookings: &'a [Booking], range: &DateRange) -> Vec<&'a Booking> {
    if range.is_unbounded() {
        return bookings.iter().collect();
    }
    bookings
        .iter()
        .filter(|b| range.contains(&b.booking_date))
        .collect()
}

/// Intermediate result of the grouping pass.
///
/// Rooms live in an arena in first-seen order; `index` maps each
/// (office, room) key to its slot.
#[derive(Debug, Default)]
pub struct Aggregation {
    total_bookings: usize,
    total_participants: i64,
    rooms: Vec<RoomAccumulator>,
    index: HashMap<RoomKey, usize>,
}

impl Aggregation {
    /// Every folded booking, placeholder locations included.
    pub fn total_bookings(&self) -> usize {
        self.total_bookings
    }

    /// Saturating sum of participants over every folded booking.
    pub fn total_participants(&self) -> i64 {
        self.total_participants
    }

    /// Distinct (office, room) groups; placeholder locations never form one.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Counts `booking` in the totals, then adds it to its room group unless
    /// its office or room name is a placeholder.
    pub fn fold(&mut self, booking: &Booking, prices: &PriceIndex) {
        self.total_bookings += 1;
        self.total_participants = self.total_participants.saturating_add(booking.participants);

        if booking.has_placeholder_location() {
            return;
        }

        let key = RoomKey::of(booking);
        let idx = match self.index.get(&key) {
            Some(idx) => *idx,
            None => {
                let idx = self.rooms.len();
                self.rooms.push(RoomAccumulator::seeded_by(booking));
                self.index.insert(key, idx);
                idx
            }
        };
        self.rooms[idx].fold(booking, prices);
    }
}

/// Folds `bookings` in order into a fresh [`Aggregation`].
pub fn aggregate<'a, I>(bookings: I, prices: &PriceIndex) -> Aggregation
where
    I: IntoIterator<Item = &'a Booking>,
{
    let mut aggregation = Aggregation::default();
    for booking in bookings {
        aggregation.fold(booking, prices);
    }
    aggregation
}

/// Runs the whole pipeline: price index, date filter, grouping, ordering.
pub fn summarize(
    bookings: &[Booking],
    price_master: &[PriceMasterEntry],
    query: SummaryQuery,
) -> Summary {
    let prices = PriceIndex::build(price_master);
    let range = query.date_range();
    let filtered = filter_by_date(bookings, &range);
    tracing::debug!(
        fetched = bookings.len(),
        filtered = filtered.len(),
        priced_items = prices.len(),
        "filtered bookings by date"
    );

    let aggregation = aggregate(filtered, &prices);
    tracing::debug!(
        total_bookings = aggregation.total_bookings(),
        rooms = aggregation.room_count(),
        "aggregated bookings"
    );

    let SummaryQuery {
        start_date,
        end_date,
    } = query;
    Summary {
        total_bookings: aggregation.total_bookings(),
        total_participants: aggregation.total_participants(),
        offices: aggregation.into_offices(),
        start_date,
        end_date,
    }
}
