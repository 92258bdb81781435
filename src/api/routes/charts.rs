//! Chart Routes
//!
//! Individual figure endpoints, gated like the dashboard itself.
//!
//! - `GET /api/v1/charts/velocity` - Money supply velocity figure
//! - `GET /api/v1/charts/fiscal` - Fiscal balance figure

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;

use crate::api::dto::QuartersParams;
use crate::api::error::ApiResult;
use crate::api::routes::session::session_from_headers;
use crate::api::state::AppState;
use crate::charts::{fiscal_figure, velocity_figure, Figure};
use crate::dataset::QuarterSeries;

/// GET /api/v1/charts/velocity
pub async fn velocity_chart(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<QuartersParams>,
) -> ApiResult<Json<Figure>> {
    let series = gated_series(&state, &headers, params).await?;
    Ok(Json(velocity_figure(&series)))
}

/// GET /api/v1/charts/fiscal
pub async fn fiscal_chart(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<QuartersParams>,
) -> ApiResult<Json<Figure>> {
    let series = gated_series(&state, &headers, params).await?;
    Ok(Json(fiscal_figure(&series)))
}

/// Load the series for a chart request: the resolved slider value while the
/// session has accepted the disclaimer, zero rows otherwise.
async fn gated_series(
    state: &AppState,
    headers: &HeaderMap,
    params: QuartersParams,
) -> ApiResult<Arc<QuarterSeries>> {
    let session = session_from_headers(state, headers).await;
    let accepted = session.map(|s| s.disclaimer_accepted).unwrap_or(false);

    let quarters = state.quarters.resolve(params.quarters);
    let nrows = if accepted { quarters as usize } else { 0 };

    Ok(state.cache.get(nrows).await?)
}
