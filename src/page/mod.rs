//! Page Model
//!
//! Everything the dashboard page shows that is not chart data: the static
//! narrative and citation text, the fixed model-parameter tiles, the
//! financial-quarters slider range, and the per-session disclaimer flag.

mod content;
mod session;

pub use content::{Citation, MetricTile, PageContent, Section};
pub use session::{SessionState, SessionStore};

use serde::Serialize;

/// The financial-quarters slider: range 16-200 in steps of 2.
///
/// The published default, 193, sits off the even step grid; it is served
/// verbatim when no value is supplied, while client-supplied values are
/// clamped and snapped.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuarterRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

impl Default for QuarterRange {
    fn default() -> Self {
        Self {
            min: 16,
            max: 200,
            step: 2,
            default: 193,
        }
    }
}

impl QuarterRange {
    /// Clamp to the range and snap to the nearest step
    pub fn snap(&self, value: u32) -> u32 {
        let clamped = value.clamp(self.min, self.max);
        let offset = clamped - self.min;
        let snapped = self.min + (offset + self.step / 2) / self.step * self.step;
        snapped.min(self.max)
    }

    /// Resolve an optional client value: absent means the default
    pub fn resolve(&self, value: Option<u32>) -> u32 {
        match value {
            Some(v) => self.snap(v),
            None => self.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range() {
        let range = QuarterRange::default();
        assert_eq!(range.min, 16);
        assert_eq!(range.max, 200);
        assert_eq!(range.step, 2);
        assert_eq!(range.default, 193);
    }

    #[test]
    fn test_absent_value_is_default() {
        let range = QuarterRange::default();
        assert_eq!(range.resolve(None), 193);
    }

    #[test]
    fn test_clamping() {
        let range = QuarterRange::default();
        assert_eq!(range.resolve(Some(0)), 16);
        assert_eq!(range.resolve(Some(15)), 16);
        assert_eq!(range.resolve(Some(201)), 200);
        assert_eq!(range.resolve(Some(10_000)), 200);
    }

    #[test]
    fn test_snapping_to_even_grid() {
        let range = QuarterRange::default();
        assert_eq!(range.resolve(Some(16)), 16);
        assert_eq!(range.resolve(Some(17)), 18);
        assert_eq!(range.resolve(Some(100)), 100);
        assert_eq!(range.resolve(Some(193)), 194);
        assert_eq!(range.resolve(Some(200)), 200);
    }
}
