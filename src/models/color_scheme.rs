use crate::utils::colors::{GREEN, YELLOW};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    System,
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::System => "system",
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    /// Resolve `System` against the terminal: `COLORFGBG` is "fg;bg",
    /// a background below 7 (or 8) means a dark terminal.
    pub fn resolve(&self) -> ColorScheme {
        match self {
            ColorScheme::System => match std::env::var("COLORFGBG") {
                Ok(v) if terminal_is_dark(&v) => ColorScheme::Dark,
                _ => ColorScheme::Light,
            },
            other => *other,
        }
    }

    /// Accent used for previews: gold-ish on dark, green on light
    pub fn accent(&self) -> &'static str {
        match self.resolve() {
            ColorScheme::Dark => YELLOW,
            _ => GREEN,
        }
    }
}

fn terminal_is_dark(colorfgbg: &str) -> bool {
    colorfgbg
        .rsplit(';')
        .next()
        .and_then(|bg| bg.parse::<u8>().ok())
        .map(|bg| bg < 7 || bg == 8)
        .unwrap_or(false)
}
