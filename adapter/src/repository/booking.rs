use async_trait::async_trait;
use derive_new::new;
use kernel::model::booking::Booking;
use kernel::repository::booking::BookingRepository;
use shared::error::AppResult;

use crate::http::{model::booking::BookingRow, HttpClient};

#[derive(new)]
pub struct BookingRepositoryImpl {
    http: HttpClient,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = self
            .http
            .get_json("booking list", self.http.booking_list_url())
            .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }
}
