//! Fiscal Balance Figure
//!
//! One bar per quarter, colored by the balance itself on a diverging
//! red/blue scale: deficits and surpluses land on opposite ends.

use crate::dataset::QuarterSeries;

use super::figure::{Axis, Figure, Layout, Margin, Marker, Title, Trace};

const TITLE: &str =
    "Model Fiscal Balance: The Flow of Net-Financial Assets from Government to the Domestic Sector";

/// Build the fiscal balance bar chart for the given series
pub fn fiscal_figure(series: &QuarterSeries) -> Figure {
    let values = series.fiscal_balance();

    // Anchor the diverging scale symmetrically around zero, so a deficit of
    // a given magnitude mirrors a surplus of the same magnitude even when
    // the data is skewed to one side.
    let bound = values.iter().fold(0.0_f64, |m, v| m.max(v.abs()));

    let trace = Trace::bar(series.dates(), values.clone()).marker(Marker {
        color: values,
        colorscale: "RdBu",
        cmin: -bound,
        cmax: bound,
    });

    Figure {
        data: vec![trace],
        layout: Layout {
            title: Title::paper_left(TITLE),
            margin: Margin::uniform(50),
            template: "gridon",
            xaxis: Axis::titled("Financial Quarters", 16, 14),
            yaxis: Axis::titled("USD", 16, 14),
            showlegend: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::QuarterRow;

    fn row(date: &str, fiscal_balance: f64) -> QuarterRow {
        QuarterRow {
            date: date.to_string(),
            velocity_bills_issued_as_percent_gdp: 0.0,
            bills_supply_trend: 0.0,
            value: 0.0,
            value_trend: 0.0,
            fiscal_balance,
        }
    }

    #[test]
    fn test_single_bar_trace_no_legend() {
        let series =
            QuarterSeries::from_rows(vec![row("1974-03-31", -120.5), row("1974-06-30", 35.0)]);
        let figure = fiscal_figure(&series);

        assert_eq!(figure.data.len(), 1);
        assert_eq!(figure.data[0].kind, "bar");
        assert!(!figure.layout.showlegend);
        assert_eq!(figure.layout.yaxis.title.as_ref().unwrap().text, "USD");
    }

    #[test]
    fn test_bars_colored_by_own_value() {
        let series =
            QuarterSeries::from_rows(vec![row("1974-03-31", -120.5), row("1974-06-30", 35.0)]);
        let figure = fiscal_figure(&series);

        let marker = figure.data[0].marker.as_ref().unwrap();
        assert_eq!(marker.color, vec![-120.5, 35.0]);
        assert_eq!(marker.colorscale, "RdBu");
    }

    #[test]
    fn test_diverging_scale_symmetric_around_zero() {
        // Skewed data: deficits dominate. Equal magnitudes must still map to
        // opposite ends of the scale, so the anchors stay symmetric.
        let series = QuarterSeries::from_rows(vec![
            row("1974-03-31", -200.0),
            row("1974-06-30", -150.0),
            row("1974-09-30", 40.0),
        ]);
        let figure = fiscal_figure(&series);

        let marker = figure.data[0].marker.as_ref().unwrap();
        assert_eq!(marker.cmin, -200.0);
        assert_eq!(marker.cmax, 200.0);
        assert_eq!(marker.cmin, -marker.cmax);
    }

    #[test]
    fn test_opposite_signs_map_to_opposite_ends() {
        let series =
            QuarterSeries::from_rows(vec![row("1974-03-31", -80.0), row("1974-06-30", 80.0)]);
        let figure = fiscal_figure(&series);

        let marker = figure.data[0].marker.as_ref().unwrap();
        // The two values sit at the exact ends of the anchored scale
        assert_eq!(marker.color[0], marker.cmin);
        assert_eq!(marker.color[1], marker.cmax);
    }

    #[test]
    fn test_empty_series() {
        let figure = fiscal_figure(&QuarterSeries::default());

        let marker = figure.data[0].marker.as_ref().unwrap();
        assert!(figure.data[0].x.is_empty());
        assert!(marker.color.is_empty());
        assert_eq!(marker.cmin, 0.0);
        assert_eq!(marker.cmax, 0.0);
    }
}
