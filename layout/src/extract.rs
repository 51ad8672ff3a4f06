//! Rectangle extractor: row-major scan for unclaimed interior cells, then
//! greedy width/height probing from each anchor.

use std::num::NonZeroUsize;

use super::grid::Grid;
use super::rect::Rect;

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;

/// Direction of a probe walking away from the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
}

/// Interior cells claimed by one rect: the probed `height × width` block
/// starting at the anchor, in 0-based grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interior {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl Interior {
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.row..self.row + self.height).contains(&row) && (self.col..self.col + self.width).contains(&col)
    }
}

/// A detected rect together with the interior it claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub rect: Rect,
    pub interior: Interior,
}

/// Extract every rectangle from `grid` in row-major anchor order.
///
/// Rect *N* gets `color_index = (N - 1) % palette_len`.
#[must_use]
pub fn extract(grid: &Grid, palette_len: NonZeroUsize) -> Vec<Rect> {
    regions(grid, palette_len).into_iter().map(|region| region.rect).collect()
}

/// Like [`extract`], keeping each rect's claimed interior.
///
/// A cell is skipped once any earlier region's interior covers it, so every
/// box is detected exactly once, from its top-left-most interior cell.
#[must_use]
pub fn regions(grid: &Grid, palette_len: NonZeroUsize) -> Vec<Region> {
    let mut regions: Vec<Region> = Vec::new();

    for (row, cells) in grid.rows().enumerate() {
        for (col, &interior) in cells.iter().enumerate() {
            if !interior || regions.iter().any(|r| r.interior.contains(row, col)) {
                continue;
            }

            let region = measure(grid, row, col, regions.len() % palette_len);
            let rect = region.rect;
            tracing::debug!(
                row = rect.row,
                col = rect.col,
                width = rect.width,
                height = rect.height,
                color_index = rect.color_index,
                "rectangle detected"
            );
            regions.push(region);
        }
    }

    regions
}

/// Build the region anchored at interior cell `(row, col)` (0-based).
fn measure(grid: &Grid, row: usize, col: usize, color_index: usize) -> Region {
    let run_w = probe(grid, row, col, Direction::Right, 1);
    let run_h = probe(grid, row, col, Direction::Down, run_w);

    // The closing border is assumed one past each run. The opening border is
    // the cell before the anchor, absent only on the grid's first row/column.
    let (top, lead_h) = if row == 0 { (1, 0) } else { (row, 1) };
    let (left, lead_w) = if col == 0 { (1, 0) } else { (col, 1) };

    Region {
        rect: Rect {
            row: top,
            col: left,
            width: run_w + 1 + lead_w,
            height: run_h + 1 + lead_h,
            color_index,
        },
        interior: Interior { row, col, width: run_w, height: run_h },
    }
}

/// Count consecutive interior steps from the anchor in `direction`.
///
/// Each step checks a strip of `span` cells laid perpendicular to the
/// direction of travel; the walk stops at the first strip that leaves the
/// grid or touches a border cell.
#[must_use]
pub fn probe(grid: &Grid, row: usize, col: usize, direction: Direction, span: usize) -> usize {
    if span == 0 {
        return 0;
    }

    let strip_is_interior = |step: usize| match direction {
        Direction::Right => (0..span).all(|k| grid.is_interior(row + k, col + step)),
        Direction::Down => (0..span).all(|k| grid.is_interior(row + step, col + k)),
    };

    (0..).take_while(|&step| strip_is_interior(step)).count()
}
