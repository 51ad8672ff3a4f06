use layout::{DEFAULT_PALETTE_LEN, Layout};

use super::*;
use crate::sample::SAMPLE_LAYOUT;

fn sample() -> Layout {
    Layout::parse(SAMPLE_LAYOUT, DEFAULT_PALETTE_LEN)
}

#[test]
fn grid_vars_size_the_grid() {
    assert_eq!(
        grid_vars(Bounds { max_row: 5, max_col: 13 }),
        ":root {\n  --grid-rows: repeat(5, 1fr);\n  --grid-cols: repeat(13, 1fr);\n  --nrows: 5;\n}\n"
    );
}

#[test]
fn box_css_places_each_box() {
    let css = box_css(&sample().rects, &Palette::default());
    assert!(css.starts_with(
        ".box-1 {\n  grid-area: 1 / 1 / span 3 / span 13;\n  background-color: #f7a7a7;\n}\n"
    ));
    assert!(css.contains(".box-2 {\n  grid-area: 3 / 1 / span 3 / span 7;\n  background-color: #d0f7a7;\n}\n"));
    assert!(css.contains(".box-3 {\n  grid-area: 3 / 7 / span 3 / span 7;\n  background-color: #f7d6a7;\n}\n"));
    assert!(!css.contains(".box-4"));
}

#[test]
fn box_css_of_no_rects_is_empty() {
    assert_eq!(box_css(&[], &Palette::default()), "");
}

#[test]
fn stylesheet_orders_vars_base_then_boxes() {
    let css = stylesheet(&sample(), &Palette::default()).unwrap();
    let vars = css.find(":root").unwrap();
    let grid = css.find(".grid {").unwrap();
    let first_box = css.find(".box-1").unwrap();
    assert!(vars < grid && grid < first_box);
}

#[test]
fn stylesheet_rejects_empty_layout() {
    let empty = Layout::parse("", DEFAULT_PALETTE_LEN);
    assert_eq!(stylesheet(&empty, &Palette::default()), Err(RenderError::EmptyLayout));
}

#[test]
fn html_document_renders_labelled_cells() {
    let html = html_document(&sample(), &RenderConfig::default()).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>gridbox</title>"));
    assert!(html.contains(
        "<div class=\"box-1\" style=\"--row: 1; --col: 1; --wid: 13; --hgt: 3; --bg-color: #f7a7a7;\">A</div>"
    ));
    assert!(html.contains(
        "<div class=\"box-3\" style=\"--row: 3; --col: 7; --wid: 7; --hgt: 3; --bg-color: #f7d6a7;\">C</div>"
    ));
}

#[test]
fn html_document_numbers_unlabelled_cells() {
    let layout = Layout::parse("+--+--+\n|  |  |\n+--+--+", DEFAULT_PALETTE_LEN);
    let html = html_document(&layout, &RenderConfig::default()).unwrap();
    assert!(html.contains("\">1</div>"));
    assert!(html.contains("\">2</div>"));
}

#[test]
fn html_document_escapes_labels_and_title() {
    let layout = Layout::parse("+-------+\n| <b>&  |\n+-------+", DEFAULT_PALETTE_LEN);
    let config = RenderConfig::from_args(None, Some("A \"quoted\" <title>")).unwrap();
    let html = html_document(&layout, &config).unwrap();
    assert!(html.contains(">&lt;b&gt;&amp;</div>"));
    assert!(html.contains("<title>A &quot;quoted&quot; &lt;title&gt;</title>"));
}

#[test]
fn html_document_rejects_empty_layout() {
    let empty = Layout::parse("+", DEFAULT_PALETTE_LEN);
    assert_eq!(html_document(&empty, &RenderConfig::default()), Err(RenderError::EmptyLayout));
}

#[test]
fn report_resolves_colors_from_palette() {
    let palette = Palette::parse("#111,#222").unwrap();
    let layout = Layout::parse(SAMPLE_LAYOUT, palette.len());
    let report = report(&layout, &palette);
    let colors: Vec<&str> = report.boxes.iter().map(|b| b.color.as_str()).collect();
    assert_eq!(colors, vec!["#111111", "#222222", "#111111"]);
    assert_eq!(report.bounds, Some(Bounds { max_row: 5, max_col: 13 }));
}

#[test]
fn report_serializes_flat_boxes() {
    let layout = Layout::parse("+--+\n|ok|\n+--+", DEFAULT_PALETTE_LEN);
    let json = serde_json::to_value(report(&layout, &Palette::default())).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "boxes": [{
                "row": 1, "col": 1, "width": 4, "height": 3, "colorIndex": 0,
                "color": "#f7a7a7", "label": "ok"
            }],
            "bounds": {"maxRow": 3, "maxCol": 4}
        })
    );
}

#[test]
fn escape_html_passes_plain_text() {
    assert_eq!(escape_html("Side bar 2"), "Side bar 2");
    assert_eq!(escape_html("a'b"), "a&#39;b");
}

#[test]
fn html_document_emits_one_cell_per_box() {
    let html = html_document(&sample(), &RenderConfig::default()).unwrap();
    assert_eq!(html.matches("<div class=\"box-").count(), 3);
    assert!(html.ends_with("</div>\n</div>\n</body>\n</html>\n"));
}

#[test]
fn box_without_top_left_border_renders_once() {
    let layout = Layout::parse("Nav |\n----+", DEFAULT_PALETTE_LEN);
    let css = box_css(&layout.rects, &Palette::default());
    assert_eq!(css.matches(".box-").count(), 1);
    assert!(css.contains("grid-area: 1 / 1 / span 2 / span 5;"));
}
