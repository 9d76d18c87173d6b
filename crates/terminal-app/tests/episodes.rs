// File: crates/terminal-app/tests/episodes.rs
// Purpose: Episode watch: baseline, interval guard, new-episode releases, feed failures.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use terminal_app::{
    Episode, EpisodeFeed, EpisodeWatch, FeedError, FileFeed, RefreshSource, ReleaseLog, SimulatedSource,
    SyncReason, WatchState,
};
use tokio::time::advance;

const MINUTE: Duration = Duration::from_secs(60);

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("terminal-app-episodes");
    std::fs::create_dir_all(&dir).expect("scratch dir");
    let path = dir.join(name);
    let _ = std::fs::remove_file(&path);
    path
}

fn episode(id: &str, title: &str) -> Episode {
    Episode { id: id.into(), title: title.into(), release_date: "2026-03-02".into() }
}

/// Serves queued replies in order; `None` (or an empty queue) is an outage.
#[derive(Default)]
struct ScriptedFeed {
    replies: Mutex<VecDeque<Option<Episode>>>,
    calls: AtomicUsize,
}

impl ScriptedFeed {
    fn push(&self, reply: Option<Episode>) {
        self.replies.lock().push_back(reply);
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EpisodeFeed for ScriptedFeed {
    fn source(&self) -> &str {
        "scripted"
    }

    async fn latest(&self) -> terminal_app::Result<Episode> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.replies
            .lock()
            .pop_front()
            .flatten()
            .ok_or_else(|| FeedError::Transport("feed offline".into()))
    }
}

#[tokio::test(start_paused = true)]
async fn first_sync_only_sets_baseline() {
    let state_path = scratch("baseline_state.json");
    let watch = EpisodeWatch::new(ScriptedFeed::default(), &state_path);
    watch.feed().push(Some(episode("ep-1", "Pilot")));
    let mut log = ReleaseLog::in_memory(Vec::new());

    let report = watch.sync(&mut log).await;
    assert!(report.checked);
    assert!(!report.triggered);
    assert_eq!(report.reason, SyncReason::Ok);
    assert_eq!(report.source.as_deref(), Some("scripted"));
    assert!(log.is_empty());

    let state = watch.state();
    assert_eq!(state.last_episode_id, "ep-1");
    assert_eq!(state.last_episode_title, "Pilot");
    assert_eq!(state.source, "scripted");
    assert!(state.last_checked_epoch > 0);
}

#[tokio::test(start_paused = true)]
async fn interval_guard_skips_the_feed() {
    let watch = EpisodeWatch::new(ScriptedFeed::default(), scratch("guard_state.json"));
    watch.feed().push(Some(episode("ep-1", "Pilot")));
    watch.feed().push(Some(episode("ep-1", "Pilot")));
    let mut log = ReleaseLog::default();

    watch.sync(&mut log).await;
    assert_eq!(watch.feed().calls(), 1);

    advance(14 * MINUTE).await;
    let report = watch.sync(&mut log).await;
    assert_eq!(report.reason, SyncReason::IntervalGuard);
    assert!(!report.checked);
    assert_eq!(watch.feed().calls(), 1);

    advance(MINUTE).await;
    let report = watch.sync(&mut log).await;
    assert_eq!(report.reason, SyncReason::Ok);
    assert_eq!(watch.feed().calls(), 2);
    assert!(!report.triggered);
}

#[tokio::test(start_paused = true)]
async fn new_episode_records_a_release() {
    let log_path = scratch("new_episode_releases.json");
    let watch = EpisodeWatch::new(ScriptedFeed::default(), scratch("new_episode_state.json"));
    watch.feed().push(Some(episode("ep-1", "Pilot")));
    watch.feed().push(Some(episode("ep-2", "The Sequel")));
    watch.feed().push(Some(episode("ep-2", "The Sequel")));
    let mut log = ReleaseLog::load(&log_path);

    assert!(!watch.sync(&mut log).await.triggered);
    advance(15 * MINUTE).await;
    let report = watch.sync(&mut log).await;
    assert!(report.triggered);
    assert_eq!(log.latest().map(|r| r.title.as_str()), Some("The Sequel"));
    assert_eq!(ReleaseLog::load(&log_path).releases().len(), 1);
    assert_eq!(watch.state().last_episode_id, "ep-2");

    // same episode again: nothing new
    advance(15 * MINUTE).await;
    assert!(!watch.sync(&mut log).await.triggered);
    assert_eq!(log.releases().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn feed_failure_leaves_state_untouched() {
    let watch = EpisodeWatch::new(ScriptedFeed::default(), scratch("failure_state.json"));
    watch.feed().push(Some(episode("ep-1", "Pilot")));
    watch.feed().push(None);
    watch.feed().push(Some(episode("ep-2", "Recovered")));
    let mut log = ReleaseLog::default();

    watch.sync(&mut log).await;
    let before = watch.state();

    advance(15 * MINUTE).await;
    let report = watch.sync(&mut log).await;
    assert_eq!(report.reason, SyncReason::FetchFailed);
    assert!(report.checked);
    assert!(!report.triggered);
    assert_eq!(watch.state(), before);
    assert!(log.is_empty());

    // a failed check does not arm the guard
    let report = watch.sync(&mut log).await;
    assert_eq!(report.reason, SyncReason::Ok);
    assert!(report.triggered);
    assert_eq!(watch.feed().calls(), 3);
}

#[tokio::test]
async fn persisted_check_time_guards_a_fresh_watch() {
    let state_path = scratch("persisted_state.json");
    let recent = WatchState {
        last_checked_epoch: chrono::Utc::now().timestamp(),
        last_episode_id: "ep-9".into(),
        ..WatchState::default()
    };
    recent.save(&state_path).expect("save state");

    let watch = EpisodeWatch::new(ScriptedFeed::default(), &state_path);
    let report = watch.sync(&mut ReleaseLog::default()).await;
    assert_eq!(report.reason, SyncReason::IntervalGuard);
    assert_eq!(watch.feed().calls(), 0);
}

#[tokio::test]
async fn malformed_state_reads_as_never_checked() {
    let state_path = scratch("malformed_state.json");
    std::fs::write(&state_path, "[1, 2").expect("write");
    assert_eq!(WatchState::load(&state_path), WatchState::default());
}

#[tokio::test]
async fn file_feed_requires_an_episode_id() {
    let feed_path = scratch("blank_id_feed.json");
    std::fs::write(&feed_path, r#"{"id":"  ","title":"t","release_date":"2026-01-01"}"#).expect("write");
    let err = FileFeed::new(&feed_path).latest().await.unwrap_err();
    assert!(matches!(err, FeedError::InvalidEpisode(_)), "got {err:?}");

    let missing = FileFeed::new(scratch("no_such_feed.json")).latest().await.unwrap_err();
    assert!(matches!(missing, FeedError::Io { .. }), "got {missing:?}");
}

#[tokio::test(start_paused = true)]
async fn simulator_enters_crash_mode_when_a_new_episode_lands() {
    let feed_path = scratch("sim_feed.json");
    let write_feed = |id: &str, title: &str| {
        let json = format!(r#"{{"id":"{id}","title":"{title}","release_date":"2026-04-01"}}"#);
        std::fs::write(&feed_path, json).expect("write feed");
    };
    write_feed("ep-40", "Before");

    let watch = EpisodeWatch::new(FileFeed::new(&feed_path), scratch("sim_state.json"));
    let sim = SimulatedSource::new(Some(11))
        .with_release_log(scratch("sim_releases.json"))
        .with_episode_watch(watch);

    let first = sim.recalc().await.expect("recalc");
    assert!(!first.crash_mode);

    write_feed("ep-41", "After");
    // still inside the interval: not noticed yet
    assert!(!sim.recalc().await.expect("recalc").crash_mode);

    advance(15 * MINUTE).await;
    let crashed = sim.recalc().await.expect("recalc");
    assert!(crashed.crash_mode);
    assert_eq!(crashed.latest_release.map(|r| r.title), Some("After".to_string()));

    let state = sim.terminal_state().await;
    assert_eq!(state.episode_sync.reason, SyncReason::IntervalGuard);
    assert!(state.crash_mode);
    assert_eq!(sim.episode_watch().map(|w| w.state().last_episode_id), Some("ep-41".to_string()));
}
