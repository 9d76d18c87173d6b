// File: crates/terminal-chart/src/theme.rs
// Summary: Colors and named themes for the gridlines and the series stroke.

use std::fmt;
use std::str::FromStr;

/// 8-bit ARGB color, independent of any drawing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {0:?}: expected #rrggbb, #rrggbbaa or rgba(r,g,b,a)")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `#rrggbb`, `#rrggbbaa` and CSS-style `rgba(r,g,b,a)` with `a` in `0..=1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let t = s.trim();
        if let Some(hex) = t.strip_prefix('#') {
            let byte = |i: usize| {
                hex.get(i..i + 2)
                    .filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()))
                    .and_then(|h| u8::from_str_radix(h, 16).ok())
                    .ok_or_else(err)
            };
            return match hex.len() {
                6 => Ok(Color::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
                8 => Ok(Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
                _ => Err(err()),
            };
        }
        let body = t
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(err());
        }
        let channel = |p: &str| p.parse::<u8>().map_err(|_| err());
        let alpha: f64 = parts[3].parse().map_err(|_| err())?;
        if !(0.0..=1.0).contains(&alpha) {
            return Err(err());
        }
        Ok(Color::from_argb(
            (alpha * 255.0).round() as u8,
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
        ))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Fill used when clearing; transparent lets the host page show through.
    pub background: Color,
    pub grid: Color,
    pub line_stroke: Color,
}

impl Theme {
    /// Dark terminal look: faint off-white grid and a teal series line.
    pub fn terminal() -> Self {
        Self {
            name: "terminal",
            background: Color::TRANSPARENT,
            grid: Color::from_argb(36, 245, 244, 235),
            line_stroke: Color::from_rgb(0x6e, 0xe0, 0xcf),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_rgb(250, 250, 252),
            grid: Color::from_rgb(230, 230, 235),
            line_stroke: Color::from_rgb(32, 120, 200),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: Color::from_rgb(0x00, 0x00, 0x00),
            grid: Color::from_rgb(0x44, 0x44, 0x44),
            line_stroke: Color::from_rgb(0x00, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::terminal() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::terminal(), Theme::light(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to terminal.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_css_rgba() {
        let c: Color = "rgba(245,244,235,0.14)".parse().unwrap();
        assert_eq!(c, Color::from_argb(36, 245, 244, 235));
        assert_eq!(c, Theme::terminal().grid);
    }

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#6ee0cf".parse::<Color>().unwrap(), Theme::terminal().line_stroke);
        assert_eq!("#10203080".parse::<Color>().unwrap(), Color::from_argb(0x80, 0x10, 0x20, 0x30));
        assert!("#12345".parse::<Color>().is_err());
        assert!("rgba(1,2,3,1.5)".parse::<Color>().is_err());
        assert!("teal".parse::<Color>().is_err());
    }

    #[test]
    fn rejects_signed_hex_pairs() {
        assert!("#+1+2+3".parse::<Color>().is_err());
        assert!("#-1ffff".parse::<Color>().is_err());
        assert!("#ff+1ff".parse::<Color>().is_err());
        assert_eq!("#0A0b0C".parse::<Color>().unwrap(), Color::from_rgb(10, 11, 12));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let c = Color::from_argb(0x80, 1, 2, 3);
        assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
    }

    #[test]
    fn unknown_theme_falls_back() {
        assert_eq!(find("LIGHT").name, "light");
        assert_eq!(find("nope").name, "terminal");
    }
}
