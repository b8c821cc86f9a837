use super::{health::build_health_check_routers, summary::build_booking_routers};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(build_health_check_routers())
        .nest("/v1", build_booking_routers())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::summary::BookingSummaryResponse;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use chrono::DateTime;
    use kernel::model::{
        booking::{Booking, Consumption},
        price::PriceMasterEntry,
    };
    use kernel::repository::{booking::BookingRepository, price::PriceMasterRepository};
    use shared::error::{AppError, AppResult};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FixedBookings(Vec<Booking>);

    #[async_trait]
    impl BookingRepository for FixedBookings {
        async fn find_all(&self) -> AppResult<Vec<Booking>> {
            Ok(self.0.clone())
        }
    }

    struct FixedPrices(Vec<PriceMasterEntry>);

    #[async_trait]
    impl PriceMasterRepository for FixedPrices {
        async fn find_all(&self) -> AppResult<Vec<PriceMasterEntry>> {
            Ok(self.0.clone())
        }
    }

    struct UnreachablePrices;

    #[async_trait]
    impl PriceMasterRepository for UnreachablePrices {
        async fn find_all(&self) -> AppResult<Vec<PriceMasterEntry>> {
            Err(AppError::UpstreamStatusError {
                source_name: "consumption master".into(),
                status: 404,
            })
        }
    }

    fn booking(id: &str, office: &str, room: &str, date: &str, participants: i64) -> Booking {
        let day = DateTime::parse_from_rfc3339(&format!("{date}T00:00:00Z")).unwrap();
        Booking {
            booking_id: id.into(),
            booking_date: day,
            office_name: office.into(),
            room_name: room.into(),
            start_time: DateTime::parse_from_rfc3339(&format!("{date}T09:00:00Z")).unwrap(),
            end_time: DateTime::parse_from_rfc3339(&format!("{date}T10:00:00Z")).unwrap(),
            participants,
            consumptions: vec![
                Consumption::new("Coffee".into()),
                Consumption::new("Tea".into()),
            ],
        }
    }

    fn app_with(prices: Arc<dyn PriceMasterRepository>) -> Router {
        let bookings = Arc::new(FixedBookings(vec![
            booking("1", "Jakarta", "Meeting-1", "2024-01-05", 4),
            booking("2", "Jakarta", "Meeting-1", "2024-01-10", 6),
            booking("3", "officeName 7", "Meeting-1", "2024-01-07", 3),
            booking("4", "Bandung", "Board", "2024-02-01", 2),
        ]));
        routes().with_state(AppRegistry::from_repositories(bookings, prices))
    }

    fn coffee_at_ten() -> Arc<dyn PriceMasterRepository> {
        Arc::new(FixedPrices(vec![PriceMasterEntry {
            id: "1".into(),
            name: "Coffee".into(),
            max_price: 10,
            created_at: DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").ok(),
        }]))
    }

    async fn get(app: Router, uri: &str) -> anyhow::Result<(StatusCode, Vec<u8>)> {
        let res = app
            .oneshot(Request::builder().uri(uri).body(Body::empty())?)
            .await?;
        let status = res.status();
        let body = to_bytes(res.into_body(), usize::MAX).await?;
        Ok((status, body.to_vec()))
    }

    #[tokio::test]
    async fn summary_for_january() -> anyhow::Result<()> {
        let (status, body) = get(
            app_with(coffee_at_ten()),
            "/v1/booking/summary?start_date=2024-01-01&end_date=2024-01-31",
        )
        .await?;
        assert_eq!(status, StatusCode::OK);

        let res: BookingSummaryResponse = serde_json::from_slice(&body)?;
        assert_eq!(res.total_bookings, 3);
        assert_eq!(res.total_participants, 13);
        assert_eq!(res.start_date, "2024-01-01");
        assert_eq!(res.end_date, "2024-01-31");
        assert_eq!(res.offices.len(), 1);

        let room = &res.offices[0].rooms[0];
        assert_eq!(res.offices[0].office_name, "Jakarta");
        assert_eq!(room.booking_count, 2);
        assert_eq!(room.total_participants, 10);
        assert_eq!(room.consumptions[0].consumption_name, "Coffee");
        assert_eq!(room.consumptions[0].total_cost, 100);
        assert_eq!(room.consumptions[1].consumption_name, "Tea");
        assert_eq!(room.consumptions[1].total_cost, 0);
        assert_eq!(room.booking_start_date, "2024-01-05");
        assert_eq!(room.booking_end_date, "2024-01-10");
        assert_eq!(room.start_time, "2024-01-05T09:00:00Z");
        assert_eq!(room.end_time, "2024-01-10T10:00:00Z");
        Ok(())
    }

    #[tokio::test]
    async fn summary_without_bounds_covers_everything() -> anyhow::Result<()> {
        let (status, body) = get(app_with(coffee_at_ten()), "/v1/booking/summary").await?;
        assert_eq!(status, StatusCode::OK);

        let res: BookingSummaryResponse = serde_json::from_slice(&body)?;
        assert_eq!(res.total_bookings, 4);
        let offices: Vec<&str> = res.offices.iter().map(|o| o.office_name.as_str()).collect();
        assert_eq!(offices, vec!["Bandung", "Jakarta"]);
        assert_eq!(res.start_date, "");
        Ok(())
    }

    #[tokio::test]
    async fn overlong_date_is_a_bad_request() -> anyhow::Result<()> {
        let (status, _) = get(
            app_with(coffee_at_ten()),
            "/v1/booking/summary?start_date=2024-01-01T00:00:00Z",
        )
        .await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn upstream_failure_is_a_bad_gateway() -> anyhow::Result<()> {
        let (status, _) = get(app_with(Arc::new(UnreachablePrices)), "/v1/booking/summary").await?;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        Ok(())
    }

    #[tokio::test]
    async fn health_check_answers_without_upstreams() -> anyhow::Result<()> {
        let (status, _) = get(app_with(Arc::new(UnreachablePrices)), "/health").await?;
        assert_eq!(status, StatusCode::OK);
        Ok(())
    }
}
