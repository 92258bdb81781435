//! Dashboard Routes
//!
//! - `GET /` - The dashboard page (embedded static HTML)
//! - `GET /api/v1/dashboard` - The full page model for one render pass
//!
//! Every interaction on the page (disclaimer toggle, slider drag) issues a
//! fresh dashboard request; the handler re-derives the whole page model
//! top-to-bottom. It is idempotent and stateless aside from the session
//! looked up from the request headers.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ChartsDto, DashboardResponse, QuartersParams, SliderDto};
use crate::api::error::ApiResult;
use crate::api::routes::session::session_from_headers;
use crate::api::state::AppState;
use crate::charts::{fiscal_figure, velocity_figure};
use crate::dataset::QuarterSeries;
use crate::page::{PageContent, QuarterRange};

/// GET /
///
/// Serve the dashboard page.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../static/index.html"))
}

/// GET /api/v1/dashboard
///
/// The full page model: static content, tiles, slider, notice, and both
/// figures. While the disclaimer is unaccepted, zero rows are loaded and
/// the figures render blank.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<QuartersParams>,
) -> ApiResult<Json<DashboardResponse>> {
    let session = session_from_headers(&state, &headers).await;
    let accepted = session.map(|s| s.disclaimer_accepted).unwrap_or(false);

    let quarters = state.quarters.resolve(params.quarters);
    let nrows = if accepted { quarters as usize } else { 0 };

    let series = state.cache.get(nrows).await?;

    tracing::debug!(accepted, quarters, rows = series.len(), "Rendered dashboard");

    Ok(Json(render_dashboard(
        &state.content,
        state.quarters,
        accepted,
        quarters,
        &series,
    )))
}

/// Derive the page model for one render pass. Pure: same inputs, same page.
pub fn render_dashboard(
    content: &PageContent,
    range: QuarterRange,
    accepted: bool,
    quarters: u32,
    series: &QuarterSeries,
) -> DashboardResponse {
    DashboardResponse {
        content: content.clone(),
        disclaimer_accepted: accepted,
        notice: PageContent::notice(accepted),
        slider: SliderDto::new(range, quarters),
        rows: series.len(),
        charts: ChartsDto {
            velocity: velocity_figure(series),
            fiscal: fiscal_figure(series),
        },
    }
}
