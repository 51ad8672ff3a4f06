//! CSS grid rendering for parsed layouts.
//!
//! Every detected box becomes one grid item spanning the rows and columns it
//! covers in the diagram. Neighbouring boxes share their border line, so a
//! box's last row/column is the next box's first.

use std::fmt::Write as _;

use layout::{Bounds, Layout, Rect};
use serde::Serialize;

use crate::config::RenderConfig;
use crate::palette::Palette;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("layout contains no boxes; nothing to place on the grid")]
    EmptyLayout,
}

/// A rect with its palette color and label resolved, for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColoredBox {
    #[serde(flatten)]
    pub rect: Rect,
    pub color: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub boxes: Vec<ColoredBox>,
    pub bounds: Option<Bounds>,
}

/// Resolve palette colors for every box. Empty layouts produce an empty report.
#[must_use]
pub fn report(layout: &Layout, palette: &Palette) -> Report {
    let boxes = layout
        .boxes()
        .map(|(rect, label)| ColoredBox {
            rect: *rect,
            color: palette.color(rect.color_index).to_owned(),
            label: label.map(ToOwned::to_owned),
        })
        .collect();
    Report { boxes, bounds: layout.bounds }
}

/// `:root` custom properties sizing the grid.
#[must_use]
pub fn grid_vars(bounds: Bounds) -> String {
    format!(
        ":root {{\n  --grid-rows: repeat({rows}, 1fr);\n  --grid-cols: repeat({cols}, 1fr);\n  --nrows: {rows};\n}}\n",
        rows = bounds.max_row,
        cols = bounds.max_col,
    )
}

/// One `.box-N` rule per rect, numbered from 1 in detection order.
#[must_use]
pub fn box_css(rects: &[Rect], palette: &Palette) -> String {
    rects.iter().enumerate().fold(String::new(), |mut css, (i, rect)| {
        // Writing into a String cannot fail.
        let _ = write!(
            css,
            ".box-{n} {{\n  grid-area: {row} / {col} / span {hgt} / span {wid};\n  background-color: {color};\n}}\n",
            n = i + 1,
            row = rect.row,
            col = rect.col,
            hgt = rect.height,
            wid = rect.width,
            color = palette.color(rect.color_index),
        );
        css
    })
}

const BASE_CSS: &str = "\
.grid {
  display: grid;
  grid-template-rows: var(--grid-rows);
  grid-template-columns: var(--grid-cols);
  width: 100vw;
  height: 100vh;
}
.grid > div {
  display: flex;
  align-items: center;
  justify-content: center;
  font-family: monospace;
  border: 1px solid rgba(0, 0, 0, 0.2);
}
";

/// Full stylesheet: grid sizing, base grid styles, and box placement.
///
/// # Errors
///
/// Returns [`RenderError::EmptyLayout`] when there is nothing to size the grid by.
pub fn stylesheet(layout: &Layout, palette: &Palette) -> Result<String, RenderError> {
    let bounds = layout.bounds.ok_or(RenderError::EmptyLayout)?;
    Ok(format!("{}{BASE_CSS}{}", grid_vars(bounds), box_css(&layout.rects, palette)))
}

/// Standalone HTML page placing every box on a CSS grid.
///
/// Each cell shows the box label when the diagram has one, otherwise its
/// 1-based number.
///
/// # Errors
///
/// Returns [`RenderError::EmptyLayout`] when the layout has no boxes.
pub fn html_document(layout: &Layout, config: &RenderConfig) -> Result<String, RenderError> {
    let css = stylesheet(layout, &config.palette)?;

    let mut cells = String::new();
    for (i, (rect, label)) in layout.boxes().enumerate() {
        let n = i + 1;
        let text = label.map_or_else(|| n.to_string(), escape_html);
        // Writing into a String cannot fail.
        let _ = writeln!(
            cells,
            "  <div class=\"box-{n}\" style=\"--row: {row}; --col: {col}; --wid: {wid}; --hgt: {hgt}; --bg-color: {color};\">{text}</div>",
            row = rect.row,
            col = rect.col,
            wid = rect.width,
            hgt = rect.height,
            color = config.palette.color(rect.color_index),
        );
    }

    Ok(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{css}</style>\n</head>\n<body>\n<div class=\"grid\">\n{cells}</div>\n</body>\n</html>\n",
        title = escape_html(&config.title),
    ))
}

/// Escape text for use in HTML element content and attribute values.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
