//! Render configuration assembled from CLI flags and their env fallbacks.

use crate::palette::{Palette, PaletteError};

pub const DEFAULT_TITLE: &str = "gridbox";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub palette: Palette,
    pub title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { palette: Palette::default(), title: DEFAULT_TITLE.to_owned() }
    }
}

impl RenderConfig {
    /// Build a validated config.
    ///
    /// - `palette`: comma-separated hex colors (`--palette` / `GRIDBOX_PALETTE`);
    ///   the built-in ten-color palette when absent
    /// - `title`: HTML document title; [`DEFAULT_TITLE`] when absent or blank
    ///
    /// # Errors
    ///
    /// Returns a [`PaletteError`] if the palette override does not parse.
    pub fn from_args(palette: Option<&str>, title: Option<&str>) -> Result<Self, PaletteError> {
        let palette = palette.map_or_else(|| Ok(Palette::default()), Palette::parse)?;
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE)
            .to_owned();
        Ok(Self { palette, title })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
