use async_trait::async_trait;
use derive_new::new;
use kernel::model::price::PriceMasterEntry;
use kernel::repository::price::PriceMasterRepository;
use shared::error::AppResult;

use crate::http::{model::price::ConsumptionMasterRow, HttpClient};

#[derive(new)]
pub struct PriceMasterRepositoryImpl {
    http: HttpClient,
}

#[async_trait]
impl PriceMasterRepository for PriceMasterRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<PriceMasterEntry>> {
        let rows: Vec<ConsumptionMasterRow> = self
            .http
            .get_json("consumption master", self.http.consumption_master_url())
            .await?;

        Ok(rows.into_iter().map(PriceMasterEntry::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::serve_canned;
    use axum::http::StatusCode;
    use shared::error::AppError;

    #[tokio::test]
    async fn keeps_duplicates_in_source_order() -> anyhow::Result<()> {
        let body = r#"[
            {"createdAt": "2024-06-04T10:00:00.000Z", "name": "Coffee", "maxPrice": 10, "id": "1"},
            {"createdAt": "2024-06-05T10:00:00.000Z", "name": "Coffee", "maxPrice": 12, "id": "2"}
        ]"#;
        let repo = PriceMasterRepositoryImpl::new(serve_canned(StatusCode::OK, body).await);

        let entries = repo.find_all().await?;
        let prices: Vec<i64> = entries.iter().map(|e| e.max_price).collect();
        assert_eq!(prices, vec![10, 12]);
        Ok(())
    }

    #[tokio::test]
    async fn surfaces_decode_failure() {
        let repo = PriceMasterRepositoryImpl::new(serve_canned(StatusCode::OK, "not json").await);
        let res = repo.find_all().await;
        assert!(matches!(res, Err(AppError::UpstreamDecodeError { .. })));
    }
}
