//! Rectangle descriptors handed to the renderer.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "rect_test.rs"]
mod rect_test;

/// One detected box, in 1-based grid coordinates.
///
/// `width` and `height` count the border column/row on each side, so a box
/// drawn as `+--+` over three lines is 4 wide and 3 high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
    pub color_index: usize,
}

impl Rect {
    /// Last row covered, inclusive.
    #[must_use]
    pub fn bottom(&self) -> usize {
        self.row + self.height - 1
    }

    /// Last column covered, inclusive.
    #[must_use]
    pub fn right(&self) -> usize {
        self.col + self.width - 1
    }
}

/// Extent of the presentation grid needed to hold every rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub max_row: usize,
    pub max_col: usize,
}

impl Bounds {
    /// `None` for an empty slice.
    #[must_use]
    pub fn of(rects: &[Rect]) -> Option<Self> {
        let max_row = rects.iter().map(Rect::bottom).max()?;
        let max_col = rects.iter().map(Rect::right).max()?;
        Some(Self { max_row, max_col })
    }
}
