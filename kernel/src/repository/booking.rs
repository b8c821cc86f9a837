use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::booking::Booking;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // 全件のスナップショットを返す。絞り込みは呼び出し側で行う
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
}
