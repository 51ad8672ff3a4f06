//! ASCII box-diagram layout parser.
//!
//! Turns a diagram drawn with `+`, `-` and `|` into an ordered list of
//! rectangle descriptors that a renderer can place on a CSS grid. The crate
//! only computes geometry and palette *indices*; color values and all
//! presentation belong to the caller.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`grid`] | Tokenizer: text to border/interior cells |
//! | [`extract`] | Row-major rectangle detection and probing |
//! | [`rect`] | [`Rect`] descriptors and grid [`Bounds`] |
//! | [`label`] | Text found inside each rectangle |
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! let layout = layout::Layout::parse("+--+\n|  |\n+--+", NonZeroUsize::MIN);
//! assert_eq!(layout.rects.len(), 1);
//! assert_eq!(layout.rects[0].width, 4);
//! ```

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

pub mod extract;
pub mod grid;
pub mod label;
pub mod rect;

pub use extract::extract;
pub use grid::Grid;
pub use rect::{Bounds, Rect};


/// Palette length the default renderer cycles through.
pub const DEFAULT_PALETTE_LEN: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => NonZeroUsize::MIN,
};

/// Result of one full parse: rects, their labels, and the grid extent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub rects: Vec<Rect>,
    /// One entry per rect, same order.
    pub labels: Vec<Option<String>>,
    /// `None` when no rects were found.
    pub bounds: Option<Bounds>,
}

impl Layout {
    /// Tokenize `text`, extract rects colored round-robin over `palette_len`
    /// entries, and collect their labels.
    #[must_use]
    pub fn parse(text: &str, palette_len: NonZeroUsize) -> Self {
        let grid = Grid::parse(text);
        let regions = extract::regions(&grid, palette_len);
        let labels = label::labels(text, &regions);
        let rects: Vec<Rect> = regions.iter().map(|region| region.rect).collect();
        let bounds = Bounds::of(&rects);

        tracing::debug!(rows = grid.height(), rects = rects.len(), "layout parsed");

        Self { rects, labels, bounds }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Rects paired with their labels.
    pub fn boxes(&self) -> impl Iterator<Item = (&Rect, Option<&str>)> {
        self.rects
            .iter()
            .zip(self.labels.iter().map(Option::as_deref))
    }
}
