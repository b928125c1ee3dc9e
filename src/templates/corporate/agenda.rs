//! Accent side panel with numbered agenda rows

use serde_json::json;

use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::templates::{slide, text_block, white, Fields, SlideTemplate};
use crate::theme::{Theme, ThemeVar};
use crate::tree::{centered_rows, slide_bounds, BoundingBox, Node, Paint, TextAnchor, VisualTree};

use super::{ACCENT, BACKGROUND, BODY, FONT, HEADING};

pub const ID: &str = "corporate-agenda-slide";

const ROW_HEIGHT: f64 = 64.0;
const ROW_GAP: f64 = 16.0;

fn item() -> Schema {
    Schema::new()
        .field(
            "title",
            FieldSpec::new(FieldKind::text(3, 60)).describe("Agenda item title"),
        )
        .field(
            "duration",
            FieldSpec::new(FieldKind::text(2, 20)).describe("Time or duration"),
        )
}

pub fn schema() -> Schema {
    Schema::new()
        .field(
            "title",
            FieldSpec::new(FieldKind::text(3, 40))
                .describe("Section title")
                .with_default("Agenda"),
        )
        .field(
            "items",
            FieldSpec::new(FieldKind::list(FieldKind::record(item()), 3, 6))
                .describe("Agenda items")
                .with_default(json!([
                    { "title": "Introduction & Overview", "duration": "10 min" },
                    { "title": "Q3 Performance Review", "duration": "20 min" },
                    { "title": "Strategic Initiatives", "duration": "25 min" },
                    { "title": "Market Analysis", "duration": "15 min" },
                    { "title": "Q&A Session", "duration": "10 min" },
                ])),
        )
}

pub fn template() -> SlideTemplate {
    SlideTemplate::new(
        ID,
        "Agenda",
        "Professional agenda layout with numbered items.",
        schema(),
        build,
    )
}

fn build(data: &Fields<'_>, theme: &Theme) -> VisualTree {
    let accent = theme.resolve(ThemeVar::PrimaryAccent, ACCENT);
    let heading = theme.resolve(ThemeVar::TextHeading, HEADING);
    let body = theme.resolve(ThemeVar::TextBody, BODY);

    let (panel, right) = slide_bounds().split_left(0.4);
    let panel_content = panel.inset(48.0, 0.0);
    let title = text_block(
        BoundingBox::new(panel_content.x, 0.0, panel_content.width, 0.0),
        data.text("title"),
        60.0,
        700,
        TextAnchor::Start,
    );
    // Title and rule centered as one block
    let block = title.bounds.height + 16.0 + 4.0;
    let top = (panel.height - block) / 2.0;
    let title = Node {
        bounds: BoundingBox::new(panel_content.x, top, panel_content.width, title.bounds.height),
        ..title
    }
    .with_id("title")
    .with_fill("#ffffff");
    let rule = Node::rect(BoundingBox::new(
        panel_content.x,
        title.bounds.bottom() + 16.0,
        64.0,
        4.0,
    ))
    .with_fill(white(0.4));

    let list_area = right.inset(48.0, 48.0);
    let items = data.items("items");
    let last = items.len().saturating_sub(1);
    let rows: Vec<Node> = centered_rows(list_area, items.len(), ROW_HEIGHT, ROW_GAP)
        .into_iter()
        .zip(&items)
        .enumerate()
        .map(|(i, (row, item))| {
            let marker = BoundingBox::new(row.x, row.center().y - 20.0, 40.0, 40.0);
            let mut children = vec![
                Node::circle(marker).with_fill(accent.as_str()),
                Node::text(
                    marker.centered(40.0, 16.0),
                    vec![(i + 1).to_string()],
                    TextAnchor::Middle,
                )
                .with_font(16.0, 700)
                .with_fill("#ffffff"),
                Node::text(
                    BoundingBox::new(
                        marker.right() + 24.0,
                        row.center().y - 10.0,
                        row.width - 184.0,
                        20.0,
                    ),
                    vec![item.text("title").to_string()],
                    TextAnchor::Start,
                )
                .with_font(20.0, 600)
                .with_fill(heading.as_str()),
                Node::text(
                    BoundingBox::new(row.right() - 96.0, row.center().y - 7.0, 96.0, 14.0),
                    vec![item.text("duration").to_string()],
                    TextAnchor::End,
                )
                .with_font(14.0, 500)
                .with_fill(body.as_str()),
            ];
            if i != last {
                children.push(
                    Node::line(BoundingBox::new(row.x, row.bottom(), row.width, 0.0))
                        .with_stroke("#f3f4f6", 1.0),
                );
            }
            Node::group(format!("items[{}]", i), row, children)
        })
        .collect();

    slide(
        ID,
        &FONT,
        theme,
        Paint::solid(theme.resolve(ThemeVar::CardBackground, BACKGROUND)),
        vec![
            Node::group(
                "panel",
                panel,
                vec![Node::rect(panel).with_fill(accent.as_str()), title, rule],
            ),
            Node::group("items", list_area, rows),
        ],
    )
}
