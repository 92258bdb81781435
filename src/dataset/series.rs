//! Quarterly Series
//!
//! The tabular time series served by the dashboard: one row per financial
//! quarter, chronologically ordered. Model output columns (bills velocity,
//! fiscal balance and their trends) are joined upstream with the real-world
//! bond-yield reference series; no derived columns are computed here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{DatasetError, DatasetResult};

/// One financial quarter of model output joined with reference data
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QuarterRow {
    /// Quarter label, as published in the source file
    pub date: String,
    /// Net-financial asset flow as a percentage of model GDP
    pub velocity_bills_issued_as_percent_gdp: f64,
    /// Trend companion to the bills velocity
    pub bills_supply_trend: f64,
    /// Real-world 10-year bond yield
    pub value: f64,
    /// Trend companion to the bond yield
    pub value_trend: f64,
    /// Government fiscal balance (negative = deficit)
    pub fiscal_balance: f64,
}

/// Immutable quarterly table, in original file order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuarterSeries {
    rows: Vec<QuarterRow>,
}

impl QuarterSeries {
    /// Parse a series from CSV text, reading at most `nrows` data rows.
    ///
    /// A header row is required. Rows are kept in file order; parsing stops
    /// as soon as `nrows` rows have been read. Dates that parse as calendar
    /// dates are checked for chronological order against their predecessor.
    pub fn from_csv(input: &str, nrows: usize) -> DatasetResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(input.as_bytes());

        let mut rows: Vec<QuarterRow> = Vec::with_capacity(nrows.min(256));
        let mut previous_date: Option<NaiveDate> = None;

        for (idx, result) in reader.deserialize::<QuarterRow>().enumerate() {
            if rows.len() >= nrows {
                break;
            }

            // Header occupies line 1
            let line = idx + 2;

            let row = result.map_err(|e| DatasetError::Parse {
                line,
                message: flatten_csv_error(&e),
            })?;

            if let Some(date) = parse_quarter_date(&row.date) {
                if let Some(prev) = previous_date {
                    if date < prev {
                        return Err(DatasetError::OutOfOrder {
                            line,
                            date: row.date,
                        });
                    }
                }
                previous_date = Some(date);
            }

            rows.push(row);
        }

        Ok(Self { rows })
    }

    /// Build a series directly from rows (test and fixture use)
    pub fn from_rows(rows: Vec<QuarterRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[QuarterRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Quarter labels, in row order (the shared x-axis of both charts)
    pub fn dates(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.date.clone()).collect()
    }

    pub fn velocity(&self) -> Vec<f64> {
        self.column(|r| r.velocity_bills_issued_as_percent_gdp)
    }

    pub fn bills_trend(&self) -> Vec<f64> {
        self.column(|r| r.bills_supply_trend)
    }

    pub fn bond_yield(&self) -> Vec<f64> {
        self.column(|r| r.value)
    }

    pub fn bond_yield_trend(&self) -> Vec<f64> {
        self.column(|r| r.value_trend)
    }

    pub fn fiscal_balance(&self) -> Vec<f64> {
        self.column(|r| r.fiscal_balance)
    }

    fn column(&self, f: impl Fn(&QuarterRow) -> f64) -> Vec<f64> {
        self.rows.iter().map(f).collect()
    }
}

/// Parse a quarter label as a calendar date, if it is one.
///
/// The published file uses ISO dates; a few other common layouts are
/// accepted. Labels that match none of them are treated as opaque and
/// skip the ordering check.
fn parse_quarter_date(label: &str) -> Option<NaiveDate> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y"];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(label, fmt) {
            return Some(date);
        }
    }

    None
}

fn flatten_csv_error(e: &csv::Error) -> String {
    match e.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
date,velocity_bills_issued_as_percent_gdp,bills_supply_trend,value,value_trend,fiscal_balance
1974-03-31,1.2,1.1,7.5,7.4,-120.5
1974-06-30,1.3,1.15,7.6,7.45,-98.2
1974-09-30,1.1,1.18,7.9,7.5,35.0
1974-12-31,1.4,1.2,8.0,7.6,-140.3
";

    #[test]
    fn test_zero_rows_is_empty() {
        let series = QuarterSeries::from_csv(SAMPLE, 0).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
    }

    #[test]
    fn test_truncates_to_nrows_in_file_order() {
        let series = QuarterSeries::from_csv(SAMPLE, 2).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.rows()[0].date, "1974-03-31");
        assert_eq!(series.rows()[1].date, "1974-06-30");
    }

    #[test]
    fn test_nrows_beyond_file_returns_all() {
        let series = QuarterSeries::from_csv(SAMPLE, 100).unwrap();
        assert_eq!(series.len(), 4);
    }

    #[test]
    fn test_columns_align_with_rows() {
        let series = QuarterSeries::from_csv(SAMPLE, 100).unwrap();
        assert_eq!(series.dates().len(), series.len());
        assert_eq!(series.velocity(), vec![1.2, 1.3, 1.1, 1.4]);
        assert_eq!(series.fiscal_balance(), vec![-120.5, -98.2, 35.0, -140.3]);
    }

    #[test]
    fn test_malformed_value_reports_line() {
        let bad = "\
date,velocity_bills_issued_as_percent_gdp,bills_supply_trend,value,value_trend,fiscal_balance
1974-03-31,1.2,1.1,7.5,7.4,-120.5
1974-06-30,not-a-number,1.15,7.6,7.45,-98.2
";
        let err = QuarterSeries::from_csv(bad, 10).unwrap_err();
        match err {
            DatasetError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_out_of_order_dates_rejected() {
        let bad = "\
date,velocity_bills_issued_as_percent_gdp,bills_supply_trend,value,value_trend,fiscal_balance
1974-06-30,1.3,1.15,7.6,7.45,-98.2
1974-03-31,1.2,1.1,7.5,7.4,-120.5
";
        let err = QuarterSeries::from_csv(bad, 10).unwrap_err();
        assert!(matches!(err, DatasetError::OutOfOrder { line: 3, .. }));
    }

    #[test]
    fn test_opaque_labels_skip_ordering_check() {
        let labeled = "\
date,velocity_bills_issued_as_percent_gdp,bills_supply_trend,value,value_trend,fiscal_balance
1974Q2,1.3,1.15,7.6,7.45,-98.2
1974Q1,1.2,1.1,7.5,7.4,-120.5
";
        // Labels that are not calendar dates are treated as opaque
        let series = QuarterSeries::from_csv(labeled, 10).unwrap();
        assert_eq!(series.len(), 2);
    }
}
