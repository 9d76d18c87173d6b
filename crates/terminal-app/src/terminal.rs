// File: crates/terminal-app/src/terminal.rs
// Summary: Terminal ties the chart, a drawing surface, metric labels, headlines and the toast together.

use terminal_chart::{Chart, ChartLayout, DrawContext};

use crate::config::TerminalConfig;
use crate::error::Result;
use crate::headlines::HeadlineFeed;
use crate::metrics::MetricsPanel;
use crate::payload::{Metrics, NewsItem};
use crate::source::RefreshSource;
use crate::toast::Toast;

/// One on-screen terminal.
///
/// Refreshes borrow the terminal mutably for their whole duration, fetch
/// included, so refresh cycles never overlap. A failed fetch returns before
/// anything on screen is touched.
pub struct Terminal<S: DrawContext> {
    chart: Chart,
    surface: S,
    metrics: MetricsPanel,
    headlines: HeadlineFeed,
    toast: Toast,
}

impl<S: DrawContext> Terminal<S> {
    pub fn new(config: &TerminalConfig, surface: S) -> Result<Self> {
        let chart = Chart::new(config.canvas_size(), config.render_options()?);
        Ok(Self {
            chart,
            surface,
            metrics: MetricsPanel::default(),
            headlines: HeadlineFeed::new(config.headline_capacity),
            toast: Toast::new(config.toast_duration()),
        })
    }

    pub fn with_headlines(mut self, items: impl IntoIterator<Item = NewsItem>) -> Self {
        self.headlines = HeadlineFeed::with_items(self.headlines.capacity(), items);
        self
    }

    /// Initial load: install the embedded series and paint the first frame.
    pub fn load(&mut self, initial: Vec<f64>) -> ChartLayout {
        self.chart.replace(initial);
        self.redraw()
    }

    /// Seed the metric labels without a refresh, as on first page load.
    pub fn apply_metrics(&mut self, metrics: &Metrics) {
        self.metrics.apply(metrics);
    }

    pub fn redraw(&mut self) -> ChartLayout {
        self.chart.redraw(&mut self.surface)
    }

    /// Fetch a new series and metrics, then repaint.
    pub async fn recalc<R: RefreshSource>(&mut self, source: &R) -> Result<ChartLayout> {
        let payload = source.recalc().await.inspect_err(|e| {
            log::warn!("recalc failed, keeping current chart: {e}");
        })?;

        self.metrics.apply(&payload.metrics);
        self.chart.replace(payload.series);
        let layout = self.redraw();
        log::info!(
            "recalc: {} samples, crash_mode={}, net worth {}",
            self.chart.current().len(),
            payload.crash_mode,
            self.metrics.net_worth
        );
        self.toast.show("Recomputed fake returns.");
        Ok(layout)
    }

    /// Fetch one headline and put it at the top of the list.
    pub async fn news<R: RefreshSource>(&mut self, source: &R) -> Result<()> {
        let item = source.news().await.inspect_err(|e| {
            log::warn!("news fetch failed: {e}");
        })?;
        let message = format!("Breaking: {}", item.tag);
        log::info!("headline {} [{}] {}", item.stamp, item.tag, item.text);
        self.headlines.push(item);
        self.toast.show(message);
        Ok(())
    }

    pub fn chart(&self) -> &Chart { &self.chart }
    pub fn metrics(&self) -> &MetricsPanel { &self.metrics }
    pub fn headlines(&self) -> &HeadlineFeed { &self.headlines }
    pub fn toast(&self) -> &Toast { &self.toast }
    pub fn surface(&self) -> &S { &self.surface }
    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }
}
