use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};

use crate::model::{booking::Booking, price::PriceIndex};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct RoomKey {
    pub office_name: String,
    pub room_name: String,
}

impl RoomKey {
    pub fn of(booking: &Booking) -> Self {
        Self {
            office_name: booking.office_name.clone(),
            room_name: booking.room_name.clone(),
        }
    }
}

/// Running statistics for one (office, room) bucket.
#[derive(Debug)]
pub(crate) struct RoomAccumulator {
    pub office_name: String,
    pub room_name: String,
    pub booking_count: usize,
    pub total_participants: i64,
    /// Discovery order is kept so equal counts sort stably.
    pub consumptions: Vec<ConsumptionAccumulator>,
    consumption_index: HashMap<String, usize>,
    pub min_booking_date: DateTime<FixedOffset>,
    pub max_booking_date: DateTime<FixedOffset>,
    pub min_start_time: DateTime<FixedOffset>,
    pub max_end_time: DateTime<FixedOffset>,
}

impl RoomAccumulator {
    /// Seeds the date and time bounds from the first booking of the room.
    pub fn seeded_by(booking: &Booking) -> Self {
        Self {
            office_name: booking.office_name.clone(),
            room_name: booking.room_name.clone(),
            booking_count: 0,
            total_participants: 0,
            consumptions: Vec::new(),
            consumption_index: HashMap::new(),
            min_booking_date: booking.booking_date,
            max_booking_date: booking.booking_date,
            min_start_time: booking.start_time,
            max_end_time: booking.end_time,
        }
    }

    pub fn fold(&mut self, booking: &Booking, prices: &PriceIndex) {
        self.booking_count += 1;
        self.total_participants = self.total_participants.saturating_add(booking.participants);

        if booking.booking_date < self.min_booking_date {
            self.min_booking_date = booking.booking_date;
        }
        if booking.booking_date > self.max_booking_date {
            self.max_booking_date = booking.booking_date;
        }
        if booking.start_time < self.min_start_time {
            self.min_start_time = booking.start_time;
        }
        if booking.end_time > self.max_end_time {
            self.max_end_time = booking.end_time;
        }

        // each listed name is one unit, repeats included
        for consumption in &booking.consumptions {
            let unit_price = prices.unit_price(&consumption.name);
            self.consumption_mut(&consumption.name)
                .record(unit_price, booking.participants);
        }
    }

    fn consumption_mut(&mut self, name: &str) -> &mut ConsumptionAccumulator {
        let idx = match self.consumption_index.get(name) {
            Some(idx) => *idx,
            None => {
                let idx = self.consumptions.len();
                self.consumptions.push(ConsumptionAccumulator::new(name));
                self.consumption_index.insert(name.to_string(), idx);
                idx
            }
        };
        &mut self.consumptions[idx]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConsumptionAccumulator {
    pub name: String,
    pub count: usize,
    pub total_cost: i64,
}

impl ConsumptionAccumulator {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            count: 0,
            total_cost: 0,
        }
    }

    /// An unpriced item still counts as ordered but costs nothing.
    fn record(&mut self, unit_price: Option<i64>, participants: i64) {
        self.count += 1;
        if let Some(price) = unit_price {
            self.total_cost = self
                .total_cost
                .saturating_add(price.saturating_mul(participants));
        }
    }
}
