// File: crates/terminal-demo/src/main.rs
// Summary: Demo runs a few terminal refresh cycles against the simulator (or a replay file) and writes a PNG per frame.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use terminal_app::headlines;
use terminal_app::metrics::TICKER;
use terminal_app::{EpisodeWatch, FileFeed, ReleaseLog, ReplaySource, SimulatedSource, Terminal, TerminalConfig};
use terminal_render_skia::SkiaSurface;

#[derive(Parser, Debug)]
#[command(name = "terminal-demo", version, about = "Render the returns terminal to PNG frames")]
struct Cli {
    /// Initial series: a JSON array of numbers, or a CSV with one value per row
    /// (or a value/close/price column).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Terminal config (JSON). Missing fields take their defaults.
    #[arg(long, env = "TERMINAL_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    #[arg(long)]
    padding: Option<f64>,

    /// Theme preset: terminal, light or high-contrast.
    #[arg(long)]
    theme: Option<String>,

    /// Recalc + news cycles to run after the first frame.
    #[arg(long, default_value_t = 3)]
    refreshes: usize,

    /// Seed for the simulator; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Release log. Any recorded release puts the simulator in crash mode.
    #[arg(long, env = "TERMINAL_RELEASES")]
    releases: Option<PathBuf>,

    /// Record a release dated today before starting (needs --releases).
    #[arg(long, requires = "releases")]
    trigger_crash: Option<String>,

    /// Latest-episode JSON file to watch; a new episode id records a release (needs --releases).
    #[arg(long, requires = "releases")]
    episode_feed: Option<PathBuf>,

    /// Where the episode watch keeps its state. Defaults to a file next to the release log.
    #[arg(long)]
    watch_state: Option<PathBuf>,

    /// Replay recalc payloads from a JSON-lines file instead of simulating them.
    #[arg(long)]
    replay: Option<PathBuf>,

    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let mut log_builder = env_logger::builder();
    if std::env::var_os("RUST_LOG").is_none() {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    if let (Some(path), Some(title)) = (&cli.releases, &cli.trigger_crash) {
        let today = chrono::Utc::now().date_naive().to_string();
        let mut log = ReleaseLog::load(path);
        if log.append_if_missing(&today, title)? {
            log::info!("recorded release {today} \"{title}\"");
        } else {
            log::info!("release {today} \"{title}\" already recorded");
        }
    }

    let mut sim = SimulatedSource::new(cli.seed);
    if let Some(path) = &cli.releases {
        sim = sim.with_release_log(path);
        if let Some(feed) = &cli.episode_feed {
            let state = cli
                .watch_state
                .clone()
                .unwrap_or_else(|| path.with_file_name("episode_watch_state.json"));
            log::info!("watching {} for new episodes", feed.display());
            sim = sim.with_episode_watch(EpisodeWatch::new(FileFeed::new(feed), state));
        }
    }
    let replay = cli
        .replay
        .as_deref()
        .map(ReplaySource::from_jsonl)
        .transpose()
        .context("failed to load replay file")?;

    let options = config.render_options()?;
    let surface = SkiaSurface::with_background(config.canvas_size(), options.theme.background)?;
    let mut term = Terminal::new(&config, surface)?.with_headlines(headlines::seeded());

    let state = sim.terminal_state().await;
    let initial = match &cli.input {
        Some(path) => load_series(path).with_context(|| format!("failed to load '{}'", path.display()))?,
        None => sim.series(state.crash_mode),
    };
    if initial.is_empty() {
        log::warn!("initial series is empty; only gridlines will be drawn");
    }
    term.load(initial);
    term.apply_metrics(&state.metrics);

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;
    write_frame(&mut term, &cli.out_dir, 0)?;

    // A failed refresh keeps the previous frame on screen; the terminal logs why.
    let mut failed = 0usize;
    for frame in 1..=cli.refreshes {
        let recalc = match &replay {
            Some(source) => term.recalc(source).await.map(drop),
            None => term.recalc(&sim).await.map(drop),
        };
        if let Err(e) = recalc {
            log::debug!("frame {frame}: chart kept from previous frame ({e})");
            failed += 1;
        }
        if let Err(e) = term.news(&sim).await {
            log::debug!("frame {frame}: no new headline ({e})");
        }
        write_frame(&mut term, &cli.out_dir, frame)?;
    }
    if failed > 0 {
        log::warn!("{failed} of {} recalcs failed", cli.refreshes);
    }

    print_summary(&term);
    println!();
    println!("{}", serde_json::to_string_pretty(&sim.terminal_state().await)?);
    Ok(())
}

fn build_config(cli: &Cli) -> Result<TerminalConfig> {
    let mut config = match &cli.config {
        Some(path) => TerminalConfig::load(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => TerminalConfig::default(),
    };
    if let Some(w) = cli.width {
        config.width = w;
    }
    if let Some(h) = cli.height {
        config.height = h;
    }
    if let Some(p) = cli.padding {
        config.padding = p;
    }
    if let Some(t) = &cli.theme {
        config.theme.clone_from(t);
    }
    Ok(config)
}

fn write_frame(term: &mut Terminal<SkiaSurface>, dir: &Path, frame: usize) -> Result<()> {
    let out = dir.join(format!("terminal_{frame:03}.png"));
    term.surface_mut().write_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn print_summary(term: &Terminal<SkiaSurface>) {
    let m = term.metrics();
    println!("Net worth       {}", m.net_worth);
    println!("Short interest  {}", m.short_interest);
    println!("P&L             {}", m.pnl);
    println!();
    for item in term.headlines().iter() {
        println!("{}  [{}] {}", item.stamp, item.tag, item.text);
    }
    println!();
    let tape = TICKER
        .iter()
        .map(|q| format!("{} {}", q.symbol, q.value))
        .collect::<Vec<_>>()
        .join("  |  ");
    println!("{tape}");
}

/// JSON arrays go through the same parser as embedded page data; anything else is read as CSV.
fn load_series(path: &Path) -> Result<Vec<f64>> {
    let is_json = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        let raw = std::fs::read_to_string(path)?;
        return Ok(terminal_app::initial_series(Some(raw.as_str()))?);
    }
    load_csv_series(path)
}

/// Single-column CSV, with or without a header row. With a header, the first of
/// value/close/price/y is used, else the first column.
fn load_csv_series(path: &Path) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut column = 0usize;
    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        if row == 0 && !is_numeric(rec.get(0)) {
            let headers = rec.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
            log::debug!("csv headers: {headers:?}");
            column = ["value", "close", "price", "y"]
                .iter()
                .find_map(|want| headers.iter().position(|h| h == want))
                .unwrap_or(0);
            continue;
        }
        match rec.get(column).and_then(|s| s.trim().parse::<f64>().ok()) {
            Some(v) if v.is_finite() => out.push(v),
            _ => log::warn!("skipping row {}: no numeric value in column {column}", row + 1),
        }
    }
    Ok(out)
}

fn is_numeric(field: Option<&str>) -> bool {
    field.map(|s| s.trim().parse::<f64>().is_ok()).unwrap_or(false)
}
