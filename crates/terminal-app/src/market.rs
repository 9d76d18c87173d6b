// File: crates/terminal-app/src/market.rs
// Summary: Simulated price series and metric strings for the fake trading terminal.

use rand::Rng;

use crate::payload::Metrics;

/// Samples per generated series.
pub const SERIES_POINTS: usize = 64;

const ANCHOR: f64 = 100.0;
const REVERSION: f64 = 0.07;
const FLOOR: f64 = 10.0;
const CRASH_START: f64 = 103.0;
const CRASH_FLOOR: f64 = 0.5;
/// Fraction of the series after which the crash lands.
const CRASH_AT: f64 = 0.35;

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Mean-reverting random walk around 100 with a hard floor of 10.
pub fn random_walk<R: Rng + ?Sized>(rng: &mut R, points: usize) -> Vec<f64> {
    let mut price = ANCHOR;
    (0..points)
        .map(|_| {
            let shock = rng.gen_range(-2.4..1.8);
            let reversion = (ANCHOR - price) * REVERSION;
            price = (price + shock + reversion).max(FLOOR);
            round2(price)
        })
        .collect()
}

/// Slow bleed from 103 with a single 68–82% drop about a third of the way in.
pub fn crash_walk<R: Rng + ?Sized>(rng: &mut R, points: usize) -> Vec<f64> {
    let drop_idx = (points as f64 * CRASH_AT) as usize;
    let mut price = CRASH_START;
    (0..points)
        .map(|i| {
            if i == drop_idx {
                price *= rng.gen_range(0.18..0.32);
            } else {
                price = (price + rng.gen_range(-1.4..0.35)).max(CRASH_FLOOR);
            }
            round2(price)
        })
        .collect()
}

pub fn metrics<R: Rng + ?Sized>(rng: &mut R) -> Metrics {
    let net = 8_000_000.0 + rng.gen::<f64>() * 9_000_000.0;
    let pnl = rng.gen_range(-40_000.0..160_000.0);
    let short_interest = rng.gen_range(220.0..720.0);
    Metrics {
        net_worth: format_usd(net),
        short_interest: format_percent(short_interest),
        pnl: format_pnl(pnl),
    }
}

pub fn crash_metrics<R: Rng + ?Sized>(rng: &mut R) -> Metrics {
    let net = rng.gen_range(41.0..5999.0);
    let pnl: f64 = rng.gen_range(-8_500_000.0..-2_100_000.0);
    let short_interest = rng.gen_range(0.01..3.5);
    Metrics {
        net_worth: format_usd(net),
        short_interest: format_percent(short_interest),
        pnl: format!("-{}", format_usd(pnl.abs())),
    }
}

/// `$1,234,567.89`. Negative amounts are prefixed with `-`.
pub fn format_usd(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac}")
}

/// Always signed: `+$12.00`, `-$3,400.10`.
pub fn format_pnl(amount: f64) -> String {
    let sign = if amount >= 0.0 { '+' } else { '-' };
    format!("{sign}{}", format_usd(amount.abs()))
}

pub fn format_percent(v: f64) -> String {
    format!("{v:.2}%")
}
