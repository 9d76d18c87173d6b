// File: crates/terminal-app/src/metrics.rs
// Summary: Metric labels beside the chart and the static ticker tape.

use serde::Serialize;

use crate::payload::Metrics;

/// Labels shown next to the chart. Values are copied from payloads verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsPanel {
    pub net_worth: String,
    pub short_interest: String,
    pub pnl: String,
}

impl MetricsPanel {
    pub fn apply(&mut self, metrics: &Metrics) {
        self.net_worth.clone_from(&metrics.net_worth);
        self.short_interest.clone_from(&metrics.short_interest);
        self.pnl.clone_from(&metrics.pnl);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Flat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub symbol: &'static str,
    pub value: &'static str,
    pub direction: Direction,
}

/// Scrolling ticker above the terminal; fixed content.
pub const TICKER: &[Quote] = &[
    Quote { symbol: "PODCST", value: "+12.4%", direction: Direction::Up },
    Quote { symbol: "SILNCE", value: "+999.0%", direction: Direction::Up },
    Quote { symbol: "HYPE", value: "-2.1%", direction: Direction::Down },
    Quote { symbol: "VIBES", value: "+0.7%", direction: Direction::Up },
    Quote { symbol: "NFA", value: "NOT ADVICE", direction: Direction::Flat },
];
