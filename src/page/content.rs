//! Static Page Content
//!
//! Hardcoded display values: narrative text, model-parameter tiles, chart
//! section headers, and data citations. None of this is derived from the
//! dataset; it is configuration baked into the page.

use serde::Serialize;

/// A fixed metric display (label + preformatted value)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: &'static str,
}

/// A chart panel's header and descriptive text
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Section {
    pub header: &'static str,
    pub description: &'static str,
}

/// One cited source series
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Citation {
    pub heading: &'static str,
    pub text: &'static str,
}

/// The full static content of the dashboard page
#[derive(Debug, Clone, Serialize)]
pub struct PageContent {
    pub title: &'static str,
    pub about: &'static str,
    pub intro: &'static str,
    pub model_run: &'static str,
    pub disclaimer_label: &'static str,
    /// Metric tile rows: one of four tiles, one of three
    pub parameter_rows: Vec<Vec<MetricTile>>,
    pub velocity_section: Section,
    pub fiscal_section: Section,
    pub citation_header: &'static str,
    pub citation_preamble: &'static str,
    pub citations: Vec<Citation>,
    pub reference_note: &'static str,
    pub reference_citations: Vec<Citation>,
    pub footer: &'static str,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            title: "Agent-Based Model Choice USA (ABMPC-USA)",
            about: "This is a shareable data application. Visit https://www.transmissionvamp.com.",
            intro: "ABMPC output consuming United States of America government expenditures \
                    and (primary) discount-rate spanning financial year 1974 to present day.",
            model_run: "Model Run: 07th July 2022",
            disclaimer_label: "Disclaimer: I accept it's not investment advice.",
            parameter_rows: vec![
                vec![
                    MetricTile { label: "Government", value: "1" },
                    MetricTile { label: "Central Bank", value: "1" },
                    MetricTile { label: "Producers", value: "1" },
                    MetricTile { label: "Consumers", value: "1" },
                ],
                vec![
                    MetricTile { label: "Tax Rate", value: "37%" },
                    MetricTile { label: "Consumption Disposable", value: "60%" },
                    MetricTile { label: "Consumption Opening", value: "40%" },
                ],
            ],
            velocity_section: Section {
                header: "Money Supply Velocity",
                description: "The change, from one financial period to the next, in \
                              net-financial asset flows as a percentage of income (GDP).",
            },
            fiscal_section: Section {
                header: "Fiscal Balance",
                description: "This is the government sector fiscal balance, either in surplus \
                              (a money flow away from the Non-Government sector), or more \
                              typically, in deficit (a money flow toward the Non-Government \
                              sector).",
            },
            citation_header: "Data Citation",
            citation_preamble: "The model consumes real-world USA government expenditure and \
                                (primary) discount-rate time-series data.",
            citations: vec![
                Citation {
                    heading: "Expenditure",
                    text: "U.S. Bureau of Economic Analysis, Real Government Consumption \
                           Expenditures and Gross Investment [GCEC1], retrieved from FRED, \
                           Federal Reserve Bank of St. Louis; \
                           https://fred.stlouisfed.org/series/GCEC1",
                },
                Citation {
                    heading: "Interest on Bills",
                    text: "International Monetary Fund, Interest Rates, Discount Rate for \
                           United States [INTDSRUSM193N], retrieved from FRED, Federal \
                           Reserve Bank of St. Louis; \
                           https://fred.stlouisfed.org/series/INTDSRUSM193N",
                },
            ],
            reference_note: "For Reference:",
            reference_citations: vec![Citation {
                heading: "Bond-Yields",
                text: "Organization for Economic Co-operation and Development, Long-Term \
                       Government Bond Yields: 10-year: Main (Including Benchmark) for the \
                       United States [IRLTLT01USQ156N], retrieved from FRED, Federal Reserve \
                       Bank of St. Louis; https://fred.stlouisfed.org/series/IRLTLT01USQ156N",
            }],
            footer: "Visit the TransmissionVamp website: https://www.transmissionvamp.com",
        }
    }
}

impl PageContent {
    /// Notice shown once the disclaimer has been accepted
    pub const CHART_HINT: &'static str =
        "Hover over a specific chart for options. View fullscreen and select (unselect) categories.";

    /// Notice shown while the disclaimer is unaccepted
    pub const ACCEPT_PROMPT: &'static str = "Please accept the disclaimer to view chart data.";

    /// The notice matching a disclaimer state
    pub fn notice(accepted: bool) -> &'static str {
        if accepted {
            Self::CHART_HINT
        } else {
            Self::ACCEPT_PROMPT
        }
    }
}
