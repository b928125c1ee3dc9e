//! Headline figures in a row of bordered cards

use serde_json::json;

use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::templates::{slide, text_block, Fields, SlideTemplate};
use crate::theme::{Theme, ThemeVar};
use crate::tree::{
    columns, slide_bounds, text_width, BoundingBox, Node, Paint, TextAnchor, VisualTree,
};

use super::{ACCENT, BACKGROUND, BODY, FONT, HEADING};

pub const ID: &str = "corporate-data-slide";

const CHANGE_COLOR: &str = "#16a34a";

fn metric() -> Schema {
    Schema::new()
        .field(
            "value",
            FieldSpec::new(FieldKind::text(1, 20)).describe("Metric value"),
        )
        .field(
            "label",
            FieldSpec::new(FieldKind::text(3, 40)).describe("Metric label"),
        )
        .field(
            "change",
            FieldSpec::new(FieldKind::text(1, 20)).describe("Change indicator (e.g., +15%)"),
        )
}

pub fn schema() -> Schema {
    Schema::new()
        .field(
            "title",
            FieldSpec::new(FieldKind::text(3, 60))
                .describe("Section title")
                .with_default("Financial Performance"),
        )
        .field(
            "subtitle",
            FieldSpec::new(FieldKind::text(5, 100))
                .describe("Subtitle")
                .with_default("Year-over-year growth metrics"),
        )
        .field(
            "metrics",
            FieldSpec::new(FieldKind::list(FieldKind::record(metric()), 3, 4))
                .describe("Key metrics")
                .with_default(json!([
                    { "value": "$4.2M", "label": "Total Revenue", "change": "+23%" },
                    { "value": "847", "label": "New Clients", "change": "+18%" },
                    { "value": "94%", "label": "Retention Rate", "change": "+5%" },
                    { "value": "12", "label": "Markets", "change": "+3" },
                ])),
        )
}

pub fn template() -> SlideTemplate {
    SlideTemplate::new(
        ID,
        "Data Overview",
        "Professional data presentation with metrics and charts placeholder.",
        schema(),
        build,
    )
}

fn build(data: &Fields<'_>, theme: &Theme) -> VisualTree {
    let accent = theme.resolve(ThemeVar::PrimaryAccent, ACCENT);
    let heading = theme.resolve(ThemeVar::TextHeading, HEADING);
    let body = theme.resolve(ThemeVar::TextBody, BODY);
    let card = theme.resolve(ThemeVar::CardBackground, "#f8fafc");
    let border = theme.resolve(ThemeVar::PrimaryAccent, "#e2e8f0");

    let (bar, rest) = slide_bounds().take_top(8.0);
    let content = rest.inset(56.0, 40.0);
    let title = text_block(content, data.text("title"), 48.0, 700, TextAnchor::Start)
        .with_id("title")
        .with_fill(theme.resolve(ThemeVar::TextHeading, ACCENT));
    let subtitle = text_block(
        BoundingBox::new(content.x, title.bounds.bottom() + 8.0, content.width, 0.0),
        data.text("subtitle"),
        18.0,
        400,
        TextAnchor::Start,
    )
    .with_id("subtitle")
    .with_fill(body.as_str());
    let (_, grid) = content.take_top(subtitle.bounds.bottom() - content.y + 40.0);

    let metrics = data.items("metrics");
    let cells = columns(grid, metrics.len().max(4), 24.0);
    let cards: Vec<Node> = cells
        .into_iter()
        .zip(&metrics)
        .enumerate()
        .map(|(i, (cell, metric))| {
            let inner = cell.inset(24.0, 24.0);
            let value = metric.text("value");
            let change = metric.text("change");
            let inline = text_width(value, 48.0) + 8.0 + text_width(change, 18.0) <= inner.width;

            let value_node = text_block(inner, value, 48.0, 700, TextAnchor::Start);
            let change_bounds = if inline {
                BoundingBox::new(
                    inner.x + text_width(value, 48.0) + 8.0,
                    value_node.bounds.bottom() - 22.0,
                    text_width(change, 18.0),
                    18.0,
                )
            } else {
                BoundingBox::new(inner.x, value_node.bounds.bottom() + 4.0, inner.width, 18.0)
            };
            let label_y = change_bounds.bottom().max(value_node.bounds.bottom()) + 8.0;
            let label = text_block(
                BoundingBox::new(inner.x, label_y, inner.width, 0.0),
                metric.text("label"),
                14.0,
                400,
                TextAnchor::Start,
            )
            .with_letter_spacing(0.5)
            .uppercase()
            .with_fill(body.as_str());

            // Center the stack vertically in the card
            let stack = label.bounds.bottom() - inner.y;
            let shift = ((inner.height - stack) / 2.0).max(0.0);
            let nodes = vec![
                value_node.with_fill(heading.as_str()),
                Node::text(change_bounds, vec![change.to_string()], TextAnchor::Start)
                    .with_font(18.0, 600)
                    .with_fill(CHANGE_COLOR),
                label,
            ]
            .into_iter()
            .map(|n| shifted(n, shift))
            .collect::<Vec<_>>();

            let mut children = vec![Node::rounded_rect(cell, 8.0)
                .with_fill(card.as_str())
                .with_stroke(border.as_str(), 1.0)];
            children.extend(nodes);
            Node::group(format!("metrics[{}]", i), cell, children)
        })
        .collect();

    slide(
        ID,
        &FONT,
        theme,
        Paint::solid(theme.resolve(ThemeVar::CardBackground, BACKGROUND)),
        vec![
            Node::rect(bar).with_id("header-bar").with_fill(accent.as_str()),
            title,
            subtitle,
            Node::group("metrics", grid, cards),
        ],
    )
}

fn shifted(mut node: Node, dy: f64) -> Node {
    node.bounds.y += dy;
    node
}
