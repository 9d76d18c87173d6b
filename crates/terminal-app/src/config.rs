// File: crates/terminal-app/src/config.rs
// Summary: Terminal configuration with defaults, optionally loaded from JSON.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use terminal_chart::{theme, CanvasSize, Color, RenderOptions, PADDING};

use crate::error::{FeedError, Result};
use crate::headlines::HEADLINE_CAPACITY;
use crate::toast::TOAST_DURATION;

/// Every field is optional in JSON; missing ones take the defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub width: u32,
    pub height: u32,
    pub padding: f64,
    /// Preset name; unknown names fall back to `terminal`.
    pub theme: String,
    /// Overrides the preset's gridline color (`#rrggbb`, `#rrggbbaa`, `rgba(...)`).
    pub grid_color: Option<String>,
    /// Overrides the preset's series color.
    pub line_color: Option<String>,
    pub toast_ms: u64,
    pub headline_capacity: usize,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        let size = CanvasSize::default();
        Self {
            width: size.width,
            height: size.height,
            padding: PADDING,
            theme: "terminal".to_string(),
            grid_color: None,
            line_color: None,
            toast_ms: TOAST_DURATION.as_millis() as u64,
            headline_capacity: HEADLINE_CAPACITY,
        }
    }
}

impl TerminalConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| FeedError::io(path, e))?;
        Self::from_json(&raw)
    }

    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }

    /// Resolve the theme preset and color overrides.
    pub fn render_options(&self) -> Result<RenderOptions> {
        let mut theme = theme::find(&self.theme);
        if let Some(c) = &self.grid_color {
            theme.grid = c.parse::<Color>()?;
        }
        if let Some(c) = &self.line_color {
            theme.line_stroke = c.parse::<Color>()?;
        }
        Ok(RenderOptions { padding: self.padding, theme, ..RenderOptions::default() })
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}
