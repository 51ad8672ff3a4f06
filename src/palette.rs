//! Box background colors, indexed round-robin by detection order.

use std::num::NonZeroUsize;

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

/// Default background colors, in assignment order.
pub const DEFAULT_COLORS: [&str; 10] = [
    "#f7a7a7", "#d0f7a7", "#f7d6a7", "#a7e2f7", "#e7bafb", "#fbbadc", "#def5d1", "#f7f1a7", "#b5fdd6", "#fb9387",
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette must contain at least one color")]
    Empty,
    #[error("invalid palette color `{0}` (expected #RGB or #RRGGBB)")]
    InvalidColor(String),
}

/// Non-empty, immutable list of canonical `#rrggbb` colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self { colors: DEFAULT_COLORS.iter().map(|&c| c.to_owned()).collect() }
    }
}

impl Palette {
    /// Parse a comma-separated color list such as `#abc, #A1B2C3`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] when the list has no entries and
    /// [`PaletteError::InvalidColor`] for the first entry that is not hex.
    pub fn parse(list: &str) -> Result<Self, PaletteError> {
        let colors = list
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let (r, g, b) = parse_hex_rgb(entry).ok_or_else(|| PaletteError::InvalidColor(entry.to_owned()))?;
                Ok(format!("#{r:02x}{g:02x}{b:02x}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { colors })
    }

    /// Number of colors; what the extractor cycles over.
    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.colors.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Color for a palette index, wrapping past the end.
    #[must_use]
    pub fn color(&self, index: usize) -> &str {
        self.colors
            .get(index % self.colors.len().max(1))
            .map_or(DEFAULT_COLORS[0], String::as_str)
    }
}

/// Parse `#RGB` or `#RRGGBB` into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| channel(&c.to_string().repeat(2)));
            Some((digits.next()??, digits.next()??, digits.next()??))
        }
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}
