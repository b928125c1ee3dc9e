//! Big gradient figures in a single row

use serde_json::json;

use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::templates::{
    block_height, palette_color, slide, text_block, white, Fields, SlideTemplate,
};
use crate::theme::{Theme, ThemeVar};
use crate::tree::{
    columns, slide_bounds, wrap_text, BoundingBox, Node, Paint, TextAnchor, VisualTree,
};

use super::{BACKGROUND, FONT};

pub const ID: &str = "creative-statistics-slide";

/// Value gradients, assigned by position and reused past the fourth stat
pub const GRADIENTS: [[&str; 2]; 4] = [
    ["#667eea", "#764ba2"],
    ["#f093fb", "#f5576c"],
    ["#4fd1c5", "#38b2ac"],
    ["#f6ad55", "#ed8936"],
];

const TOP_BAR: [&str; 4] = ["#667eea", "#f093fb", "#4fd1c5", "#f6ad55"];

fn stat() -> Schema {
    Schema::new()
        .field(
            "value",
            FieldSpec::new(FieldKind::text(1, 20)).describe("Statistic value"),
        )
        .field(
            "label",
            FieldSpec::new(FieldKind::text(3, 40)).describe("Statistic label"),
        )
}

pub fn schema() -> Schema {
    Schema::new()
        .field(
            "title",
            FieldSpec::new(FieldKind::text(3, 60))
                .describe("Section title")
                .with_default("By The Numbers"),
        )
        .field(
            "stats",
            FieldSpec::new(FieldKind::list(FieldKind::record(stat()), 3, 4))
                .describe("Statistics")
                .with_default(json!([
                    { "value": "10M+", "label": "Happy Users" },
                    { "value": "99.9%", "label": "Uptime" },
                    { "value": "150+", "label": "Countries" },
                    { "value": "24/7", "label": "Support" },
                ])),
        )
}

pub fn template() -> SlideTemplate {
    SlideTemplate::new(
        ID,
        "Statistics",
        "Eye-catching statistics with colorful accents.",
        schema(),
        build,
    )
}

fn build(data: &Fields<'_>, theme: &Theme) -> VisualTree {
    let (bar, rest) = slide_bounds().take_top(8.0);
    let content = rest.inset(56.0, 40.0);
    let title = text_block(content, data.text("title"), 48.0, 700, TextAnchor::Middle)
        .with_id("title")
        .with_fill("#ffffff");
    let (_, grid) = content.take_top(title.bounds.height + 64.0);

    let stats = data.items("stats");
    let cells: Vec<Node> = columns(grid, stats.len().max(4), 32.0)
        .into_iter()
        .zip(&stats)
        .enumerate()
        .map(|(i, (cell, stat))| {
            let value_lines = wrap_text(stat.text("value"), cell.width, 72.0);
            let label_lines = wrap_text(stat.text("label"), cell.width, 18.0);
            let stack = block_height(value_lines.len(), 72.0)
                + 16.0
                + block_height(label_lines.len(), 18.0);
            let top = cell.y + ((cell.height - stack) / 2.0).max(0.0);

            let value = text_block(
                BoundingBox::new(cell.x, top, cell.width, 0.0),
                stat.text("value"),
                72.0,
                900,
                TextAnchor::Middle,
            )
            .with_fill(Paint::gradient(135.0, &palette_color(&GRADIENTS, i)));
            let label = text_block(
                BoundingBox::new(cell.x, value.bounds.bottom() + 16.0, cell.width, 0.0),
                stat.text("label"),
                18.0,
                400,
                TextAnchor::Middle,
            )
            .with_letter_spacing(0.9)
            .uppercase()
            .with_fill(white(0.6));
            Node::group(format!("stats[{}]", i), cell, vec![value, label])
        })
        .collect();

    slide(
        ID,
        &FONT,
        theme,
        Paint::solid(theme.resolve(ThemeVar::CardBackground, BACKGROUND)),
        vec![
            Node::rect(bar).with_id("top-bar").with_fill(Paint::gradient(90.0, &TOP_BAR)),
            title,
            Node::group("stats", grid, cells),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_three_stats_render_three_cells() {
        let data = json!({
            "stats": [
                { "value": "1", "label": "One" },
                { "value": "2", "label": "Two" },
                { "value": "3", "label": "Three" },
            ]
        });
        let tree = template().render(Some(&data), &Theme::default());
        let stats = tree.find("stats").expect("stats region");
        assert_eq!(stats.children().len(), 3);
        assert_eq!(
            stats.children()[2].children()[0].style.fill,
            Some(Paint::gradient(135.0, &GRADIENTS[2]))
        );
    }
}
