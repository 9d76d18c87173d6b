// File: crates/terminal-app/src/source.rs
// Summary: Refresh sources: the async interface the terminal pulls from, a simulator and a replay.

use std::collections::VecDeque;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

use crate::episodes::{EpisodeFeed, EpisodeWatch, FileFeed, SyncReport};
use crate::error::{FeedError, Result};
use crate::headlines::CATALOGUE;
use crate::market;
use crate::payload::{Metrics, NewsItem, RecalcPayload, Release};
use crate::releases::{ReleaseLog, ReleaseStats};

/// Where refreshed data comes from. Both calls may suspend for arbitrary time.
pub trait RefreshSource {
    fn recalc(&self) -> impl Future<Output = Result<RecalcPayload>> + Send;
    fn news(&self) -> impl Future<Output = Result<NewsItem>> + Send;
}

/// Snapshot of the simulated desk, used to seed a freshly opened terminal.
#[derive(Clone, Debug, Serialize)]
pub struct TerminalState {
    pub crash_mode: bool,
    pub latest_release: Option<Release>,
    pub metrics: Metrics,
    pub releases: Vec<Release>,
    pub release_stats: ReleaseStats,
    pub episode_sync: SyncReport,
}

/// In-process market simulator. Crash mode is on whenever the release log
/// holds at least one release; the log is re-read on every refresh, after the
/// episode watch (if any) has had a chance to add to it.
pub struct SimulatedSource<F = FileFeed> {
    rng: Mutex<StdRng>,
    release_log: Option<PathBuf>,
    watch: Option<EpisodeWatch<F>>,
    latency: Duration,
}

impl SimulatedSource {
    /// `seed` makes every generated value reproducible; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng: Mutex::new(rng), release_log: None, watch: None, latency: Duration::ZERO }
    }
}

impl<F: EpisodeFeed> SimulatedSource<F> {
    pub fn with_release_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.release_log = Some(path.into());
        self
    }

    /// Releases found by `watch` are written to the release log, so set one
    /// for them to outlive a single snapshot.
    pub fn with_episode_watch<G: EpisodeFeed>(self, watch: EpisodeWatch<G>) -> SimulatedSource<G> {
        SimulatedSource {
            rng: self.rng,
            release_log: self.release_log,
            watch: Some(watch),
            latency: self.latency,
        }
    }

    /// Simulated round-trip delay applied to every call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn episode_watch(&self) -> Option<&EpisodeWatch<F>> { self.watch.as_ref() }

    fn releases(&self) -> ReleaseLog {
        match &self.release_log {
            Some(path) => ReleaseLog::load(path),
            None => ReleaseLog::default(),
        }
    }

    pub async fn terminal_state(&self) -> TerminalState {
        let mut log = self.releases();
        let episode_sync = match &self.watch {
            Some(watch) => watch.sync(&mut log).await,
            None => SyncReport::disabled(),
        };

        let crash_mode = !log.is_empty();
        let mut rng = self.rng.lock();
        let release_stats = log.stats(&mut *rng);
        let metrics = if crash_mode { market::crash_metrics(&mut *rng) } else { market::metrics(&mut *rng) };
        TerminalState {
            crash_mode,
            latest_release: log.latest().cloned(),
            metrics,
            releases: log.releases().to_vec(),
            release_stats,
            episode_sync,
        }
    }

    /// Series for the given mode.
    pub fn series(&self, crash_mode: bool) -> Vec<f64> {
        let mut rng = self.rng.lock();
        if crash_mode {
            market::crash_walk(&mut *rng, market::SERIES_POINTS)
        } else {
            market::random_walk(&mut *rng, market::SERIES_POINTS)
        }
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl<F: EpisodeFeed + Sync> RefreshSource for SimulatedSource<F> {
    async fn recalc(&self) -> Result<RecalcPayload> {
        self.round_trip().await;
        let state = self.terminal_state().await;
        let series = self.series(state.crash_mode);
        Ok(RecalcPayload {
            series,
            metrics: state.metrics,
            crash_mode: state.crash_mode,
            latest_release: state.latest_release,
        })
    }

    async fn news(&self) -> Result<NewsItem> {
        self.round_trip().await;
        let (tag, text) = *CATALOGUE.choose(&mut *self.rng.lock()).ok_or(FeedError::EmptyCatalogue)?;
        Ok(NewsItem {
            stamp: chrono::Local::now().format("%H:%M").to_string(),
            tag: tag.to_string(),
            text: text.to_string(),
        })
    }
}

/// Replays raw JSON responses in order, decoding each as it is served.
/// Running out of responses is reported as a transport failure.
#[derive(Debug, Default)]
pub struct ReplaySource {
    recalc: Mutex<VecDeque<String>>,
    news: Mutex<VecDeque<String>>,
}

impl ReplaySource {
    pub fn new(
        recalc: impl IntoIterator<Item = String>,
        news: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            recalc: Mutex::new(recalc.into_iter().collect()),
            news: Mutex::new(news.into_iter().collect()),
        }
    }

    /// Recalc responses from a JSON-lines file; blank lines are skipped.
    pub fn from_jsonl(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| FeedError::io(path, e))?;
        let lines = raw.lines().filter(|l| !l.trim().is_empty()).map(str::to_string);
        Ok(Self::new(lines, Vec::new()))
    }

    pub fn remaining(&self) -> usize {
        self.recalc.lock().len()
    }

    fn next(queue: &Mutex<VecDeque<String>>, what: &str) -> Result<String> {
        queue
            .lock()
            .pop_front()
            .ok_or_else(|| FeedError::Transport(format!("no more {what} responses to replay")))
    }
}

impl RefreshSource for ReplaySource {
    async fn recalc(&self) -> Result<RecalcPayload> {
        RecalcPayload::from_json(&Self::next(&self.recalc, "recalc")?)
    }

    async fn news(&self) -> Result<NewsItem> {
        NewsItem::from_json(&Self::next(&self.news, "news")?)
    }
}
