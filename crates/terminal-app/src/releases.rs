// File: crates/terminal-app/src/releases.rs
// Summary: Release log (JSON file of episode releases) and the crash statistics derived from it.

use std::fs;
use std::path::PathBuf;

use rand::Rng;
use serde::Serialize;
use serde_json::Value;

use crate::error::{FeedError, Result};
use crate::payload::Release;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Med,
    High,
    Max,
}

/// Severity from the number of releases and their average damage.
pub fn severity(total: usize, avg_damage: f64) -> Severity {
    if total == 0 {
        Severity::Low
    } else if total >= 6 || avg_damage >= 85.0 {
        Severity::Max
    } else if total >= 3 || avg_damage >= 72.0 {
        Severity::High
    } else {
        Severity::Med
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReleaseStats {
    pub total_catastrophes: usize,
    pub avg_damage_pct: f64,
    pub worst_day_pct: f64,
    pub severity: Severity,
}

/// Ordered list of releases, optionally backed by a JSON file.
#[derive(Clone, Debug, Default)]
pub struct ReleaseLog {
    path: Option<PathBuf>,
    releases: Vec<Release>,
}

impl ReleaseLog {
    pub fn in_memory(releases: Vec<Release>) -> Self {
        Self { path: None, releases }
    }

    /// Read the log at `path`. A missing, unreadable or malformed file yields
    /// an empty log; entries without a non-blank title and date are dropped.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let releases = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(value) => clean(value),
                Err(e) => {
                    log::warn!("ignoring malformed release log {}: {e}", path.display());
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                log::warn!("cannot read release log {}: {e}", path.display());
                Vec::new()
            }
        };
        Self { path: Some(path), releases }
    }

    pub fn releases(&self) -> &[Release] { &self.releases }
    pub fn latest(&self) -> Option<&Release> { self.releases.last() }
    pub fn is_empty(&self) -> bool { self.releases.is_empty() }

    /// Append `(date, title)` unless the exact pair is already logged.
    /// Returns whether it was added; the file is rewritten only when it was.
    pub fn append_if_missing(&mut self, date: &str, title: &str) -> Result<bool> {
        if self.releases.iter().any(|r| r.date == date && r.title == title) {
            return Ok(false);
        }
        self.releases.push(Release { date: date.to_string(), title: title.to_string() });
        self.save()?;
        log::info!("release logged: {date} {title:?}");
        Ok(true)
    }

    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else { return Ok(()) };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| FeedError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(&self.releases)?;
        fs::write(path, json).map_err(|e| FeedError::io(path, e))
    }

    /// Roll a damage figure per release and summarise.
    pub fn stats<R: Rng + ?Sized>(&self, rng: &mut R) -> ReleaseStats {
        let damage: Vec<f64> = self
            .releases
            .iter()
            .map(|_| ((58.0 + rng.gen::<f64>() * 38.0) * 100.0).round() / 100.0)
            .collect();
        let total = damage.len();
        let avg = if total == 0 {
            0.0
        } else {
            (damage.iter().sum::<f64>() / total as f64 * 100.0).round() / 100.0
        };
        let worst = damage.iter().copied().fold(0.0, f64::max);
        ReleaseStats {
            total_catastrophes: total,
            avg_damage_pct: avg,
            worst_day_pct: worst,
            severity: severity(total, avg),
        }
    }
}

fn clean(value: Value) -> Vec<Release> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| {
            let title = text_field(&item, "title")?;
            let date = text_field(&item, "date")?;
            Some(Release { date, title })
        })
        .collect()
}

fn text_field(item: &Value, key: &str) -> Option<String> {
    let text = match item.as_object()?.get(key)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}
