//! Money Supply Velocity Figure
//!
//! Four series over the shared quarter axis: bills velocity and the real
//! bond yield in lines+markers style, each with its precomputed trend as a
//! plain line at reduced opacity.

use crate::dataset::QuarterSeries;

use super::figure::{Axis, Figure, Layout, Margin, Mode, Title, Trace};

const TITLE: &str =
    "Model Bills Issued (Money) Velocity As Percent Of Model GDP & Real-World USA 10-Year Bond-Yields";

/// Trend lines are drawn at this opacity behind their primary series
const TREND_OPACITY: f64 = 0.6;

/// Build the velocity line chart for the given series
pub fn velocity_figure(series: &QuarterSeries) -> Figure {
    let dates = series.dates();

    let data = vec![
        Trace::scatter("Bills Velocity", dates.clone(), series.velocity())
            .mode(Mode::LinesMarkers),
        Trace::scatter("Bills Trend", dates.clone(), series.bills_trend())
            .mode(Mode::Lines)
            .opacity(TREND_OPACITY),
        Trace::scatter("Bond Yield", dates.clone(), series.bond_yield())
            .mode(Mode::LinesMarkers),
        Trace::scatter("Bond Trend", dates, series.bond_yield_trend())
            .mode(Mode::Lines)
            .opacity(TREND_OPACITY),
    ];

    Figure {
        data,
        layout: Layout {
            title: Title::paper_left(TITLE),
            margin: Margin::uniform(50),
            template: "gridon",
            xaxis: Axis::titled("Financial Quarters", 16, 14),
            yaxis: Axis::titled("Percent", 16, 14),
            showlegend: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::QuarterRow;

    fn sample_series() -> QuarterSeries {
        QuarterSeries::from_rows(vec![
            QuarterRow {
                date: "1974-03-31".to_string(),
                velocity_bills_issued_as_percent_gdp: 1.2,
                bills_supply_trend: 1.1,
                value: 7.5,
                value_trend: 7.4,
                fiscal_balance: -120.5,
            },
            QuarterRow {
                date: "1974-06-30".to_string(),
                velocity_bills_issued_as_percent_gdp: 1.3,
                bills_supply_trend: 1.15,
                value: 7.6,
                value_trend: 7.45,
                fiscal_balance: 35.0,
            },
        ])
    }

    #[test]
    fn test_four_traces_share_date_axis() {
        let figure = velocity_figure(&sample_series());

        assert_eq!(figure.data.len(), 4);
        for trace in &figure.data {
            assert_eq!(trace.x, vec!["1974-03-31", "1974-06-30"]);
            assert_eq!(trace.y.len(), 2);
        }
    }

    #[test]
    fn test_trace_styles() {
        let figure = velocity_figure(&sample_series());

        let names: Vec<_> = figure
            .data
            .iter()
            .map(|t| t.name.as_deref().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["Bills Velocity", "Bills Trend", "Bond Yield", "Bond Trend"]
        );

        assert_eq!(figure.data[0].mode, Some(Mode::LinesMarkers));
        assert_eq!(figure.data[1].mode, Some(Mode::Lines));
        assert_eq!(figure.data[1].opacity, Some(0.6));
        assert_eq!(figure.data[2].mode, Some(Mode::LinesMarkers));
        assert_eq!(figure.data[3].opacity, Some(0.6));
        // Primary series carry no opacity override
        assert_eq!(figure.data[0].opacity, None);
    }

    #[test]
    fn test_layout() {
        let figure = velocity_figure(&sample_series());

        assert!(figure.layout.showlegend);
        assert_eq!(
            figure.layout.xaxis.title.as_ref().unwrap().text,
            "Financial Quarters"
        );
        assert_eq!(figure.layout.yaxis.title.as_ref().unwrap().text, "Percent");
    }

    #[test]
    fn test_empty_series_yields_empty_traces() {
        let figure = velocity_figure(&QuarterSeries::default());

        assert_eq!(figure.data.len(), 4);
        for trace in &figure.data {
            assert!(trace.x.is_empty());
            assert!(trace.y.is_empty());
        }
    }
}
