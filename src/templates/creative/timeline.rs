//! Horizontal milestone track

use serde_json::json;

use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::templates::{
    palette_color, paragraph, slide, text_block, white, Fields, SlideTemplate, RELAXED,
};
use crate::theme::{Theme, ThemeVar};
use crate::tree::{columns, slide_bounds, BoundingBox, Node, Paint, TextAnchor, VisualTree};

use super::{BACKGROUND, FONT};

pub const ID: &str = "creative-timeline-slide";

/// Dot colors, assigned by position and reused past the fifth milestone
pub const PALETTE: [&str; 5] = ["#667eea", "#f093fb", "#4fd1c5", "#f6ad55", "#fc8181"];

const DOT: f64 = 48.0;

fn milestone() -> Schema {
    Schema::new()
        .field(
            "year",
            FieldSpec::new(FieldKind::text(2, 10)).describe("Year or date"),
        )
        .field(
            "title",
            FieldSpec::new(FieldKind::text(3, 40)).describe("Milestone title"),
        )
        .field(
            "description",
            FieldSpec::new(FieldKind::text(10, 80)).describe("Milestone description"),
        )
}

pub fn schema() -> Schema {
    Schema::new()
        .field(
            "title",
            FieldSpec::new(FieldKind::text(3, 60))
                .describe("Section title")
                .with_default("Our Journey"),
        )
        .field(
            "milestones",
            FieldSpec::new(FieldKind::list(FieldKind::record(milestone()), 3, 5))
                .describe("Timeline milestones")
                .with_default(json!([
                    {
                        "year": "2020",
                        "title": "Founded",
                        "description": "Started with a vision to transform the industry",
                    },
                    {
                        "year": "2021",
                        "title": "First Product",
                        "description": "Launched our flagship product to market",
                    },
                    {
                        "year": "2022",
                        "title": "Global Expansion",
                        "description": "Expanded to 50+ countries worldwide",
                    },
                    {
                        "year": "2023",
                        "title": "1M Users",
                        "description": "Reached one million active users milestone",
                    },
                    {
                        "year": "2024",
                        "title": "Series B",
                        "description": "Raised $50M to accelerate growth",
                    },
                ])),
        )
}

pub fn template() -> SlideTemplate {
    SlideTemplate::new(
        ID,
        "Timeline",
        "Colorful timeline for milestones or process steps.",
        schema(),
        build,
    )
}

/// Title and description under one dot, positioned at `y`
fn milestone_text(cell: BoundingBox, y: f64, data: &Fields<'_>) -> (Node, Node) {
    let title = text_block(
        BoundingBox::new(cell.x, y, cell.width, 0.0),
        data.text("title"),
        20.0,
        700,
        TextAnchor::Middle,
    )
    .with_fill("#ffffff");
    let description = paragraph(
        BoundingBox::new(cell.x, title.bounds.bottom() + 8.0, cell.width, 0.0),
        data.text("description"),
        14.0,
        400,
        TextAnchor::Middle,
        RELAXED,
    )
    .with_fill(white(0.6));
    (title, description)
}

fn build(data: &Fields<'_>, theme: &Theme) -> VisualTree {
    let content = slide_bounds().inset(56.0, 40.0);
    let title = text_block(content, data.text("title"), 48.0, 700, TextAnchor::Middle)
        .with_id("title")
        .with_fill("#ffffff");
    let (_, area) = content.take_top(title.bounds.height + 48.0);

    let milestones = data.items("milestones");
    let cells = columns(area, milestones.len(), 16.0);

    // Lay out once at the top to measure, then center the tallest column
    let tallest = cells
        .iter()
        .zip(&milestones)
        .map(|(cell, m)| milestone_text(*cell, cell.y + DOT + 24.0, m).1.bounds.bottom() - cell.y)
        .fold(DOT, f64::max);
    let top = area.y + ((area.height - tallest) / 2.0).max(0.0);

    let track = BoundingBox::new(area.x, top + 22.0, area.width, 4.0);
    let items: Vec<Node> = cells
        .into_iter()
        .zip(&milestones)
        .enumerate()
        .map(|(i, (cell, milestone))| {
            let dot = BoundingBox::new(cell.center().x - DOT / 2.0, top, DOT, DOT);
            let (heading, description) = milestone_text(cell, dot.bottom() + 24.0, milestone);
            Node::group(
                format!("milestones[{}]", i),
                BoundingBox::new(cell.x, top, cell.width, description.bounds.bottom() - top),
                vec![
                    Node::circle(dot).with_fill(palette_color(&PALETTE, i)),
                    Node::text(
                        dot.centered(DOT, 14.0),
                        vec![milestone.text("year").to_string()],
                        TextAnchor::Middle,
                    )
                        .with_font(14.0, 700)
                        .with_fill("#ffffff"),
                    heading,
                    description,
                ],
            )
        })
        .collect();

    slide(
        ID,
        &FONT,
        theme,
        Paint::solid(theme.resolve(ThemeVar::CardBackground, BACKGROUND)),
        vec![
            title,
            Node::group(
                "track",
                track,
                vec![
                    Node::rounded_rect(track, 2.0).with_fill(white(0.2)),
                    Node::rounded_rect(track, 2.0).with_fill(Paint::gradient(90.0, &PALETTE)),
                ],
            ),
            Node::group("milestones", area, items),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_column_per_milestone() {
        let tree = template().render(None, &Theme::default());
        let milestones = tree.find("milestones").expect("milestones region");
        assert_eq!(milestones.children().len(), 5);
        let widths: Vec<f64> = milestones.children().iter().map(|m| m.bounds.width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(
            milestones.children()[0].texts(),
            vec!["2020", "Founded", "Started with a vision to transform the industry"]
        );
    }
}
