// File: crates/terminal-app/src/lib.rs
// Summary: Glue around the chart core: refresh sources, metrics, headlines, toast and the terminal.

pub mod config;
pub mod episodes;
pub mod error;
pub mod headlines;
pub mod market;
pub mod metrics;
pub mod payload;
pub mod releases;
pub mod source;
pub mod terminal;
pub mod toast;

pub use config::TerminalConfig;
pub use episodes::{Episode, EpisodeFeed, EpisodeWatch, FileFeed, SyncReason, SyncReport, WatchState};
pub use error::{FeedError, Result};
pub use headlines::HeadlineFeed;
pub use metrics::MetricsPanel;
pub use payload::{initial_series, Metrics, NewsItem, RecalcPayload, Release};
pub use releases::{ReleaseLog, ReleaseStats, Severity};
pub use source::{RefreshSource, ReplaySource, SimulatedSource, TerminalState};
pub use terminal::Terminal;
pub use toast::Toast;
