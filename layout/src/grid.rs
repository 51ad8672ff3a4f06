//! Tokenizer: ASCII diagram text to a grid of border/interior cells.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

/// Characters that draw box outlines.
pub const BORDER_CHARS: [char; 3] = ['+', '-', '|'];

/// `true` for interior cells, `false` for border cells.
pub type Cell = bool;

/// Immutable, possibly ragged grid of cells produced by [`Grid::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Tokenize a diagram. Lines are split on every CR or LF; lines that
    /// produce no cells are dropped.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let rows = split_lines(text).map(tokenize_line).collect();
        Self { rows }
    }

    /// Number of non-empty rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `row`, or 0 past the last row.
    #[must_use]
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Cell at `(row, col)`, `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Whether `(row, col)` is in bounds and interior.
    #[must_use]
    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[must_use]
pub fn is_border(ch: char) -> bool {
    BORDER_CHARS.contains(&ch)
}

/// Map each character of one line to a cell.
#[must_use]
pub fn tokenize_line(line: &str) -> Vec<Cell> {
    line.chars().map(|ch| !is_border(ch)).collect()
}

/// Split on CR/LF and drop empty lines. Shared with the labeller so row
/// indices agree with the grid.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n']).filter(|line| !line.is_empty())
}
