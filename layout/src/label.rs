//! Box labels: the text written inside each detected rectangle.

use super::grid::{is_border, split_lines};
use super::extract::{Interior, Region};

#[cfg(test)]
#[path = "label_test.rs"]
mod label_test;

/// Collect the interior text of each region, in the same order as `regions`.
///
/// Rows use the tokenizer's line splitting so coordinates line up with the
/// grid the rects were extracted from. Whitespace runs collapse to a single
/// space; a blank interior yields `None`.
#[must_use]
pub fn labels(text: &str, regions: &[Region]) -> Vec<Option<String>> {
    let lines: Vec<Vec<char>> = split_lines(text).map(|line| line.chars().collect()).collect();
    regions.iter().map(|region| label_of(&lines, &region.interior)).collect()
}

fn label_of(lines: &[Vec<char>], interior: &Interior) -> Option<String> {
    let rows = interior.row..interior.row + interior.height;
    let cols = interior.col..interior.col + interior.width;

    let words: Vec<String> = rows
        .filter_map(|r| lines.get(r))
        .flat_map(|line| {
            let strip: String = cols
                .clone()
                .filter_map(|c| line.get(c))
                .map(|&ch| if is_border(ch) { ' ' } else { ch })
                .collect();
            strip.split_whitespace().map(str::to_owned).collect::<Vec<_>>()
        })
        .collect();

    if words.is_empty() { None } else { Some(words.join(" ")) }
}
