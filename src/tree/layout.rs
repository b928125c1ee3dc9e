//! Fixed-grid arithmetic for slide layouts
//!
//! Slides are laid out by direct computation: equal columns, equal rows
//! and greedy word wrapping. There is no solver.

use super::types::BoundingBox;

pub const SLIDE_WIDTH: f64 = 1280.0;
pub const SLIDE_HEIGHT: f64 = 720.0;

/// Average glyph advance as a fraction of the font size
const CHAR_WIDTH_RATIO: f64 = 0.55;

/// The full slide canvas
pub fn slide_bounds() -> BoundingBox {
    BoundingBox::new(0.0, 0.0, SLIDE_WIDTH, SLIDE_HEIGHT)
}

/// Split an area into `count` equal columns separated by `gap`
pub fn columns(area: BoundingBox, count: usize, gap: f64) -> Vec<BoundingBox> {
    if count == 0 {
        return Vec::new();
    }
    let width = ((area.width - gap * (count - 1) as f64) / count as f64).max(0.0);
    (0..count)
        .map(|i| BoundingBox::new(area.x + i as f64 * (width + gap), area.y, width, area.height))
        .collect()
}

/// Split an area into `count` equal rows separated by `gap`
pub fn rows(area: BoundingBox, count: usize, gap: f64) -> Vec<BoundingBox> {
    if count == 0 {
        return Vec::new();
    }
    let height = ((area.height - gap * (count - 1) as f64) / count as f64).max(0.0);
    (0..count)
        .map(|i| BoundingBox::new(area.x, area.y + i as f64 * (height + gap), area.width, height))
        .collect()
}

/// Stack `count` rows of fixed height, centered vertically in `area`
///
/// Rows shrink to fit when the stack would overflow the area.
pub fn centered_rows(
    area: BoundingBox,
    count: usize,
    row_height: f64,
    gap: f64,
) -> Vec<BoundingBox> {
    if count == 0 {
        return Vec::new();
    }
    let wanted = row_height * count as f64 + gap * (count - 1) as f64;
    if wanted > area.height {
        return rows(area, count, gap);
    }
    let top = area.y + (area.height - wanted) / 2.0;
    rows(BoundingBox::new(area.x, top, area.width, wanted), count, gap)
}

/// Estimated rendered width of a string
pub fn text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * CHAR_WIDTH_RATIO
}

/// Greedy word wrap to fit `max_width` at `font_size`
///
/// Words longer than a line are kept whole on their own line. Empty text
/// yields a single empty line so every text node has at least one line.
pub fn wrap_text(text: &str, max_width: f64, font_size: f64) -> Vec<String> {
    let max_chars = ((max_width / (font_size * CHAR_WIDTH_RATIO)).floor() as usize).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
