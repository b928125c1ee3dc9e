//! Two-column before/after comparison

use serde_json::json;

use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::templates::{slide, text_block, white, Fields, SlideTemplate};
use crate::theme::{Theme, ThemeVar};
use crate::tree::{columns, slide_bounds, BoundingBox, Node, Paint, TextAnchor, VisualTree};

use super::{ACCENT, BACKGROUND, BODY, FONT};

pub const ID: &str = "corporate-comparison-slide";

const CROSS: &str = "✕";
const CHECK: &str = "✓";

fn column(
    title: &'static str,
    title_description: &'static str,
    items: serde_json::Value,
    items_description: &'static str,
) -> Schema {
    Schema::new()
        .field(
            "title",
            FieldSpec::new(FieldKind::text(2, 40))
                .describe(title_description)
                .with_default(title),
        )
        .field(
            "items",
            FieldSpec::new(FieldKind::list(FieldKind::text(5, 80), 3, 5))
                .describe(items_description)
                .with_default(items),
        )
}

pub fn schema() -> Schema {
    Schema::new()
        .field(
            "title",
            FieldSpec::new(FieldKind::text(3, 60))
                .describe("Section title")
                .with_default("Solution Comparison"),
        )
        .field(
            "leftColumn",
            FieldSpec::new(FieldKind::record(column(
                "Current State",
                "Left column header",
                json!([
                    "Manual processes taking hours",
                    "Disconnected data sources",
                    "Limited visibility into metrics",
                    "High operational costs",
                ]),
                "Left column items",
            )))
            .describe("Left comparison column"),
        )
        .field(
            "rightColumn",
            FieldSpec::new(FieldKind::record(column(
                "With Our Solution",
                "Right column header",
                json!([
                    "Automated workflows in minutes",
                    "Unified data platform",
                    "Real-time analytics dashboard",
                    "40% cost reduction",
                ]),
                "Right column items",
            )))
            .describe("Right comparison column"),
        )
}

pub fn template() -> SlideTemplate {
    SlideTemplate::new(
        ID,
        "Comparison",
        "Side-by-side comparison layout for options or features.",
        schema(),
        build,
    )
}

/// Colors and marker for one side of the comparison
struct ColumnStyle {
    card: String,
    heading: String,
    text: String,
    marker: &'static str,
    marker_color: &'static str,
}

fn build(data: &Fields<'_>, theme: &Theme) -> VisualTree {
    let accent = theme.resolve(ThemeVar::PrimaryAccent, ACCENT);
    let canvas = slide_bounds();
    let (bar, rest) = canvas.take_top(8.0);
    let content = rest.inset(56.0, 40.0);

    let title = text_block(content, data.text("title"), 48.0, 700, TextAnchor::Start)
        .with_id("title")
        .with_fill(theme.resolve(ThemeVar::TextHeading, ACCENT));
    let (_, grid) = content.take_top(title.bounds.height + 40.0);
    let cells = columns(grid, 2, 32.0);

    let left = ColumnStyle {
        card: "#f9fafb".to_string(),
        heading: theme.resolve(ThemeVar::TextBody, BODY),
        text: theme.resolve(ThemeVar::TextHeading, "#374151"),
        marker: CROSS,
        marker_color: "#ef4444",
    };
    let right = ColumnStyle {
        card: accent.clone(),
        heading: white(0.8),
        text: "#ffffff".to_string(),
        marker: CHECK,
        marker_color: "#4ade80",
    };

    slide(
        ID,
        &FONT,
        theme,
        Paint::solid(theme.resolve(ThemeVar::CardBackground, BACKGROUND)),
        vec![
            Node::rect(bar).with_id("header-bar").with_fill(accent.as_str()),
            title,
            comparison_column("leftColumn", &data.record("leftColumn"), cells[0], &left),
            comparison_column("rightColumn", &data.record("rightColumn"), cells[1], &right),
        ],
    )
}

fn comparison_column(
    id: &str,
    data: &Fields<'_>,
    cell: BoundingBox,
    style: &ColumnStyle,
) -> Node {
    let inner = cell.inset(32.0, 32.0);
    let heading = Node::text(
        BoundingBox::new(inner.x, inner.y, inner.width, 20.0),
        vec![data.text("title").to_string()],
        TextAnchor::Start,
    )
    .with_id(format!("{}.title", id))
    .with_font(20.0, 700)
    .with_letter_spacing(0.5)
    .uppercase()
    .with_fill(style.heading.as_str());

    let (_, list_area) = inner.take_top(20.0 + 24.0);
    let text_x = list_area.x + 32.0;
    let text_width = list_area.width - 32.0;
    let mut y = list_area.y;
    let mut rows = Vec::new();
    for (i, item) in data.strings("items").into_iter().enumerate() {
        let text = text_block(
            BoundingBox::new(text_x, y + 1.0, text_width, 0.0),
            item,
            18.0,
            400,
            TextAnchor::Start,
        )
        .with_fill(style.text.as_str());
        let row = BoundingBox::new(list_area.x, y, list_area.width, text.bounds.height + 1.0);
        rows.push(Node::group(
            format!("{}.items[{}]", id, i),
            row,
            vec![
                Node::text(
                    BoundingBox::new(row.x, y, 20.0, 20.0),
                    vec![style.marker.to_string()],
                    TextAnchor::Start,
                )
                .with_font(20.0, 400)
                .with_fill(style.marker_color),
                text,
            ],
        ));
        y = row.bottom() + 16.0;
    }

    Node::group(
        id,
        cell,
        vec![
            Node::rounded_rect(cell, 8.0).with_fill(style.card.as_str()),
            heading,
            Node::group(format!("{}.items", id), list_area, rows),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markers_per_side() {
        let tree = template().render(None, &Theme::default());
        let left = tree.find("leftColumn.items[0]").expect("left item");
        let right = tree.find("rightColumn.items[0]").expect("right item");
        assert_eq!(left.texts(), vec![CROSS, "Manual processes taking hours"]);
        assert_eq!(right.texts(), vec![CHECK, "Automated workflows in minutes"]);
    }

    #[test]
    fn test_partial_column_keeps_sub_defaults() {
        let data = json!({ "leftColumn": { "title": "Before" } });
        let tree = template().render(Some(&data), &Theme::default());
        assert!(tree.contains_text("Before"));
        assert_eq!(tree.find("leftColumn.items").map(|n| n.children().len()), Some(4));
        assert!(tree.contains_text("With Our Solution"));
    }
}
