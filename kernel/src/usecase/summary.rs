use std::sync::Arc;

use derive_new::new;
use shared::error::AppResult;

use crate::{
    aggregate::summarize,
    model::summary::{query::SummaryQuery, Summary},
    repository::{booking::BookingRepository, price::PriceMasterRepository},
};

#[derive(new)]
pub struct BookingSummaryUseCase {
    booking_repository: Arc<dyn BookingRepository>,
    price_master_repository: Arc<dyn PriceMasterRepository>,
}

impl BookingSummaryUseCase {
    /// Fetches both sources concurrently and aggregates once both are in.
    /// Either fetch failing aborts the request; nothing partial is returned.
    #[tracing::instrument(skip(self))]
    pub async fn get_summary(&self, query: SummaryQuery) -> AppResult<Summary> {
        let (bookings, price_master) = tokio::try_join!(
            self.booking_repository.find_all(),
            self.price_master_repository.find_all(),
        )?;

        let range = query.date_range();
        for (side, bound) in [("start_date", &range.start), ("end_date", &range.end)] {
            if bound.is_malformed() {
                tracing::warn!(
                    side,
                    ?bound,
                    "date bound is not YYYY-MM-DD; treating it as 0001-01-01"
                );
            }
        }

        Ok(summarize(&bookings, &price_master, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        booking::{Booking, Consumption},
        price::PriceMasterEntry,
    };
    use async_trait::async_trait;
    use chrono::DateTime;
    use shared::error::AppError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct InMemoryBookings {
        bookings: Vec<Booking>,
        fail: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl BookingRepository for InMemoryBookings {
        async fn find_all(&self) -> AppResult<Vec<Booking>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AppError::UpstreamStatusError {
                    source_name: "booking list".into(),
                    status: 500,
                });
            }
            Ok(self.bookings.clone())
        }
    }

    #[derive(Default)]
    struct InMemoryPrices {
        entries: Vec<PriceMasterEntry>,
        fail: bool,
    }

    #[async_trait]
    impl PriceMasterRepository for InMemoryPrices {
        async fn find_all(&self) -> AppResult<Vec<PriceMasterEntry>> {
            if self.fail {
                return Err(AppError::UpstreamDecodeError {
                    source_name: "consumption master".into(),
                    message: "expected a sequence".into(),
                });
            }
            Ok(self.entries.clone())
        }
    }

    fn booking(id: &str, date: &str, participants: i64) -> Booking {
        let at = DateTime::parse_from_rfc3339(&format!("{date}T00:00:00Z")).unwrap();
        Booking {
            booking_id: id.into(),
            booking_date: at,
            office_name: "Jakarta".into(),
            room_name: "Meeting-1".into(),
            start_time: at,
            end_time: at,
            participants,
            consumptions: vec![Consumption::new("Coffee".into())],
        }
    }

    fn coffee(max_price: i64) -> PriceMasterEntry {
        PriceMasterEntry {
            id: "c".into(),
            name: "Coffee".into(),
            max_price,
            created_at: DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").ok(),
        }
    }

    #[tokio::test]
    async fn summarizes_fetched_data() -> anyhow::Result<()> {
        let bookings = Arc::new(InMemoryBookings {
            bookings: vec![booking("1", "2024-01-05", 4), booking("2", "2024-02-01", 6)],
            ..Default::default()
        });
        let prices = Arc::new(InMemoryPrices {
            entries: vec![coffee(10)],
            ..Default::default()
        });
        let usecase = BookingSummaryUseCase::new(bookings.clone(), prices);

        let summary = usecase
            .get_summary(SummaryQuery::new("2024-01-01".into(), "2024-01-31".into()))
            .await?;

        assert_eq!(bookings.calls.load(Ordering::SeqCst), 1);
        assert_eq!(summary.total_bookings, 1);
        assert_eq!(summary.total_participants, 4);
        assert_eq!(summary.offices[0].rooms[0].consumptions[0].total_cost, 40);
        assert_eq!(summary.start_date, "2024-01-01");
        assert_eq!(summary.end_date, "2024-01-31");
        Ok(())
    }

    #[tokio::test]
    async fn booking_fetch_failure_aborts() {
        let usecase = BookingSummaryUseCase::new(
            Arc::new(InMemoryBookings {
                fail: true,
                ..Default::default()
            }),
            Arc::new(InMemoryPrices::default()),
        );
        let res = usecase.get_summary(SummaryQuery::default()).await;
        assert!(matches!(res, Err(AppError::UpstreamStatusError { status: 500, .. })));
    }

    #[tokio::test]
    async fn price_fetch_failure_aborts() {
        let usecase = BookingSummaryUseCase::new(
            Arc::new(InMemoryBookings {
                bookings: vec![booking("1", "2024-01-05", 4)],
                ..Default::default()
            }),
            Arc::new(InMemoryPrices {
                fail: true,
                ..Default::default()
            }),
        );
        let res = usecase.get_summary(SummaryQuery::default()).await;
        assert!(matches!(res, Err(AppError::UpstreamDecodeError { .. })));
    }
}
