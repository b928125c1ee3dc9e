//! Large light figures, one column per metric

use serde_json::json;

use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::templates::{block_height, fit_font_size, slide, text_block, Fields, SlideTemplate};
use crate::theme::{Theme, ThemeVar};
use crate::tree::{
    columns, slide_bounds, wrap_text, BoundingBox, Node, Paint, TextAnchor, VisualTree,
};

use super::{tight, ACCENT, BACKGROUND, FONT, HEADING};

pub const ID: &str = "minimal-metrics-slide";

const VALUE_SIZE: f64 = 96.0;
const MIN_VALUE_SIZE: f64 = 32.0;
const LABEL_SIZE: f64 = 18.0;

fn metric() -> Schema {
    Schema::new()
        .field(
            "value",
            FieldSpec::new(FieldKind::text(1, 20))
                .describe("Metric value (e.g., 95%, $1.2M, 500+)"),
        )
        .field(
            "label",
            FieldSpec::new(FieldKind::text(3, 50)).describe("Metric label"),
        )
}

pub fn schema() -> Schema {
    Schema::new()
        .field(
            "title",
            FieldSpec::new(FieldKind::text(3, 60))
                .describe("Section title")
                .with_default("Key Metrics"),
        )
        .field(
            "metrics",
            FieldSpec::new(FieldKind::list(FieldKind::record(metric()), 2, 4))
                .describe("List of metrics")
                .with_default(json!([
                    { "value": "95%", "label": "Customer Satisfaction" },
                    { "value": "$2.4M", "label": "Annual Revenue" },
                    { "value": "150+", "label": "Enterprise Clients" },
                ])),
        )
}

pub fn template() -> SlideTemplate {
    SlideTemplate::new(
        ID,
        "Metrics",
        "Display key metrics and numbers with clean minimal styling.",
        schema(),
        build,
    )
}

fn build(data: &Fields<'_>, theme: &Theme) -> VisualTree {
    let accent = theme.resolve(ThemeVar::PrimaryAccent, ACCENT);
    let body = theme.resolve(ThemeVar::TextBody, "#666666");

    let content = slide_bounds().inset(64.0, 56.0);
    let title = text_block(content, data.text("title"), 48.0, 300, TextAnchor::Start)
        .with_id("title")
        .with_letter_spacing(tight(48.0))
        .with_fill(theme.resolve(ThemeVar::TextHeading, HEADING));
    let (_, area) = content.take_top(title.bounds.height + 64.0);

    let metrics = data.items("metrics");
    let cells = columns(area, metrics.len(), 32.0);
    let stack_height = |cell: &BoundingBox, metric: &Fields<'_>, value_size: f64| {
        let value_lines = wrap_text(metric.text("value"), cell.width, value_size).len();
        let label_lines = wrap_text(metric.text("label"), cell.width, LABEL_SIZE).len();
        block_height(value_lines, value_size) + 16.0 + block_height(label_lines, LABEL_SIZE)
    };
    let tallest = |value_size: f64| {
        cells
            .iter()
            .zip(&metrics)
            .map(|(cell, metric)| stack_height(cell, metric, value_size))
            .fold(0.0, f64::max)
    };
    // Every value shares one size; long values shrink it until the tallest stack fits
    let value_size = fit_font_size(VALUE_SIZE, MIN_VALUE_SIZE, |size| {
        tallest(size) <= area.height
    });
    // Cells share one top edge so the values line up
    let top = area.y + ((area.height - tallest(value_size)) / 2.0).max(0.0);

    let items: Vec<Node> = cells
        .into_iter()
        .zip(&metrics)
        .enumerate()
        .map(|(i, (cell, metric))| {
            let value = text_block(
                BoundingBox::new(cell.x, top, cell.width, 0.0),
                metric.text("value"),
                value_size,
                300,
                TextAnchor::Middle,
            )
            .with_fill(accent.as_str());
            let label = text_block(
                BoundingBox::new(cell.x, value.bounds.bottom() + 16.0, cell.width, 0.0),
                metric.text("label"),
                LABEL_SIZE,
                400,
                TextAnchor::Middle,
            )
            .with_letter_spacing(0.1 * LABEL_SIZE)
            .uppercase()
            .with_fill(body.as_str());
            Node::group(format!("metrics[{}]", i), cell, vec![value, label])
        })
        .collect();

    slide(
        ID,
        &FONT,
        theme,
        Paint::solid(theme.resolve(ThemeVar::CardBackground, BACKGROUND)),
        vec![title, Node::group("metrics", area, items)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_columns_match_metric_count() {
        let data = json!({
            "metrics": [
                { "value": "1", "label": "First" },
                { "value": "2", "label": "Second" },
            ]
        });
        let tree = template().render(Some(&data), &Theme::default());
        let metrics = tree.find("metrics").expect("metrics region");
        assert_eq!(metrics.children().len(), 2);
        assert_eq!(metrics.children()[0].bounds.width, (1152.0 - 32.0) / 2.0);
    }

    #[test]
    fn test_values_share_top_edge() {
        let tree = template().render(None, &Theme::default());
        let metrics = tree.find("metrics").expect("metrics region");
        let tops: Vec<f64> = metrics
            .children()
            .iter()
            .map(|m| m.children()[0].bounds.y)
            .collect();
        assert!(tops.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_longest_values_shrink_to_fit() {
        let metric = json!({
            "value": "12 34 56 78 90 12 34",
            "label": "ab ".repeat(17).trim_end(),
        });
        let data = json!({ "title": "t ".repeat(30).trim_end(), "metrics": vec![metric; 4] });
        assert_eq!(template().validate(&data), Ok(()));

        let tree = template().render(Some(&data), &Theme::default());
        let metrics = tree.find("metrics").expect("metrics region");
        for cell in metrics.children() {
            let value = &cell.children()[0];
            let label = &cell.children()[1];
            assert!(value.style.font_size.unwrap_or_default() < VALUE_SIZE);
            assert!(label.bounds.bottom() <= metrics.bounds.bottom());
        }
    }
}
