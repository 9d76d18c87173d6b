// File: crates/terminal-app/src/episodes.rs
// Summary: Episode watch: polls a feed for the latest episode and logs a release when a new one appears.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use crate::error::{FeedError, Result};
use crate::releases::ReleaseLog;

/// Minimum time between two successful checks of the feed.
pub const CHECK_INTERVAL: Duration = Duration::from_secs(15 * 60);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub release_date: String,
}

/// Where the newest episode is looked up.
pub trait EpisodeFeed {
    /// Short label stored alongside the watch state.
    fn source(&self) -> &str;
    fn latest(&self) -> impl Future<Output = Result<Episode>> + Send;
}

/// Latest episode kept in a local JSON file (`{"id","title","release_date"}`),
/// typically written by an external poller.
#[derive(Clone, Debug)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EpisodeFeed for FileFeed {
    fn source(&self) -> &str {
        "file"
    }

    async fn latest(&self) -> Result<Episode> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| FeedError::io(&self.path, e))?;
        let mut episode: Episode = serde_json::from_str(&raw)?;
        episode.id = episode.id.trim().to_string();
        if episode.id.is_empty() {
            return Err(FeedError::InvalidEpisode(format!("{} has no episode id", self.path.display())));
        }
        Ok(episode)
    }
}

/// What the watch remembers between runs. Unknown or malformed files read as
/// the default (never checked, no baseline).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchState {
    pub last_checked_epoch: i64,
    pub last_checked_at: String,
    pub last_episode_id: String,
    pub last_episode_title: String,
    pub last_episode_release_date: String,
    pub source: String,
}

impl WatchState {
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("ignoring malformed watch state {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("cannot read watch state {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FeedError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| FeedError::io(path, e))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncReason {
    /// No watch configured.
    Disabled,
    /// Checked too recently; the feed was not asked.
    IntervalGuard,
    FetchFailed,
    Ok,
}

/// Outcome of one `EpisodeWatch::sync`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub checked: bool,
    pub triggered: bool,
    pub reason: SyncReason,
    pub source: Option<String>,
}

impl SyncReport {
    pub fn disabled() -> Self {
        Self { checked: false, triggered: false, reason: SyncReason::Disabled, source: None }
    }

    fn guarded() -> Self {
        Self { checked: false, triggered: false, reason: SyncReason::IntervalGuard, source: None }
    }
}

/// Turns "a new episode came out" into a release log entry.
///
/// The first successful check only records a baseline. Later checks that see a
/// different episode id append `(release_date, title)` to the release log.
/// Successful checks are at most one per `interval`; failed ones change nothing
/// and may be retried right away.
pub struct EpisodeWatch<F> {
    feed: F,
    state_path: PathBuf,
    interval: Duration,
    last_checked: Mutex<Option<Instant>>,
}

impl<F: EpisodeFeed> EpisodeWatch<F> {
    pub fn new(feed: F, state_path: impl Into<PathBuf>) -> Self {
        Self { feed, state_path: state_path.into(), interval: CHECK_INTERVAL, last_checked: Mutex::new(None) }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn feed(&self) -> &F { &self.feed }

    pub fn state(&self) -> WatchState {
        WatchState::load(&self.state_path)
    }

    // In-process checks use the tokio clock; a fresh process falls back to the
    // persisted wall-clock stamp.
    fn due(&self, state: &WatchState) -> bool {
        if let Some(at) = *self.last_checked.lock() {
            return at.elapsed() >= self.interval;
        }
        let age = Utc::now().timestamp() - state.last_checked_epoch;
        age >= i64::try_from(self.interval.as_secs()).unwrap_or(i64::MAX)
    }

    pub async fn sync(&self, releases: &mut ReleaseLog) -> SyncReport {
        let state = self.state();
        if !self.due(&state) {
            return SyncReport::guarded();
        }

        let source = self.feed.source().to_string();
        let latest = match self.feed.latest().await {
            Ok(episode) => episode,
            Err(e) => {
                log::warn!("episode feed ({source}) failed: {e}");
                return SyncReport { checked: true, triggered: false, reason: SyncReason::FetchFailed, source: Some(source) };
            }
        };

        let known = state.last_episode_id.trim();
        let triggered = if known.is_empty() {
            log::info!("episode watch baseline set to {}", latest.id);
            false
        } else if latest.id != known {
            log::info!("new episode {} ({:?}), previous {known}", latest.id, latest.title);
            releases.append_if_missing(&latest.release_date, &latest.title).unwrap_or_else(|e| {
                log::warn!("could not record release for episode {}: {e}", latest.id);
                false
            })
        } else {
            false
        };

        let now = Utc::now();
        let next = WatchState {
            last_checked_epoch: now.timestamp(),
            last_checked_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            last_episode_id: latest.id,
            last_episode_title: latest.title,
            last_episode_release_date: latest.release_date,
            source: source.clone(),
        };
        if let Err(e) = next.save(&self.state_path) {
            log::warn!("could not save watch state: {e}");
        }
        *self.last_checked.lock() = Some(Instant::now());

        SyncReport { checked: true, triggered, reason: SyncReason::Ok, source: Some(source) }
    }
}
