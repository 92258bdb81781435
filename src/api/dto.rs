//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::charts::Figure;
use crate::page::{PageContent, QuarterRange, SessionState};

// ============================================
// SESSION DTOs
// ============================================

/// Session state response
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub disclaimer_accepted: bool,
}

impl From<SessionState> for SessionResponse {
    fn from(session: SessionState) -> Self {
        Self {
            session_id: session.id,
            disclaimer_accepted: session.disclaimer_accepted,
        }
    }
}

// ============================================
// DASHBOARD DTOs
// ============================================

/// Query parameters shared by the dashboard and chart endpoints
#[derive(Debug, Default, Deserialize)]
pub struct QuartersParams {
    /// Slider position; absent means the published default
    #[serde(default)]
    pub quarters: Option<u32>,
}

/// Slider description for the page
#[derive(Debug, Serialize)]
pub struct SliderDto {
    pub label: &'static str,
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub value: u32,
}

impl SliderDto {
    pub fn new(range: QuarterRange, value: u32) -> Self {
        Self {
            label: "Financial Quarters",
            min: range.min,
            max: range.max,
            step: range.step,
            value,
        }
    }
}

/// The two dashboard figures
#[derive(Debug, Serialize)]
pub struct ChartsDto {
    pub velocity: Figure,
    pub fiscal: Figure,
}

/// The full page model for one render pass
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Static narrative, tiles, and citations
    pub content: PageContent,
    /// Whether this session has accepted the disclaimer
    pub disclaimer_accepted: bool,
    /// Accept prompt or chart hint, depending on the disclaimer state
    pub notice: &'static str,
    pub slider: SliderDto,
    /// Rows actually loaded for this pass (0 while unaccepted)
    pub rows: usize,
    pub charts: ChartsDto,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub dataset_url: String,
    pub cached_tables: usize,
    pub cached_rows: usize,
    pub sessions: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
