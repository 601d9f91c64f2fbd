use super::{QueryPairs, first_param};
use crate::server::{error::ApiError, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

const HOURS: &str = "hours";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsStats {
    pub hours: u32,
    pub total: u64,
}

/// Reports how many news items were published in the trailing `hours`.
///
/// GET /news/stats?hours=N
#[tracing::instrument(skip_all)]
pub async fn get_news_stats(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<NewsStats>, ApiError> {
    let hours: u32 = first_param(&pairs, HOURS)
        .and_then(|raw| raw.parse().ok())
        .ok_or(ApiError::InvalidParam(HOURS))?;

    let total = kata::news_statistics(hours, &*state.news);
    Ok(Json(NewsStats { hours, total }))
}
