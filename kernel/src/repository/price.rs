use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::price::PriceMasterEntry;

#[async_trait]
pub trait PriceMasterRepository: Send + Sync {
    // 消費品目ごとの上限単価の一覧を取得する
    async fn find_all(&self) -> AppResult<Vec<PriceMasterEntry>>;
}
