use axum::{
    extract::{Query, State},
    Json,
};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::summary::{BookingSummaryResponse, SummaryQueryParams};

#[tracing::instrument(skip(registry))]
pub async fn show_booking_summary(
    Query(query): Query<SummaryQueryParams>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingSummaryResponse>> {
    query.validate(&())?;

    let summary = registry
        .booking_summary_usecase()
        .get_summary(query.into())
        .await?;

    BookingSummaryResponse::try_from(summary).map(Json)
}
