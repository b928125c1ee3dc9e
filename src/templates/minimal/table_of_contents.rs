//! Title panel and a numbered section list

use serde_json::json;

use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::templates::{slide, text_block, Fields, SlideTemplate};
use crate::theme::{Theme, ThemeVar};
use crate::tree::{centered_rows, slide_bounds, BoundingBox, Node, Paint, TextAnchor, VisualTree};

use super::{tight, ACCENT, BACKGROUND, FONT, HEADING};

pub const ID: &str = "minimal-table-of-contents";

const ROW_HEIGHT: f64 = 36.0;
const ROW_GAP: f64 = 24.0;

fn section() -> Schema {
    Schema::new().field(
        "title",
        FieldSpec::new(FieldKind::text(3, 60)).describe("Section title"),
    )
}

pub fn schema() -> Schema {
    Schema::new()
        .field(
            "title",
            FieldSpec::new(FieldKind::text(3, 40))
                .describe("TOC title")
                .with_default("Contents"),
        )
        .field(
            "sections",
            FieldSpec::new(FieldKind::list(FieldKind::record(section()), 3, 8))
                .describe("List of sections")
                .with_default(json!([
                    { "title": "Introduction" },
                    { "title": "Problem Statement" },
                    { "title": "Our Solution" },
                    { "title": "Key Features" },
                    { "title": "Conclusion" },
                ])),
        )
}

pub fn template() -> SlideTemplate {
    SlideTemplate::new(
        ID,
        "Table of Contents",
        "Clean table of contents with numbered sections.",
        schema(),
        build,
    )
}

/// Two-digit section number, counting from one
pub fn section_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

fn build(data: &Fields<'_>, theme: &Theme) -> VisualTree {
    let heading = theme.resolve(ThemeVar::TextHeading, "#333333");
    let number_color = theme.resolve(ThemeVar::PrimaryAccent, "#cccccc");

    let (panel, right) = slide_bounds().split_left(0.4);
    let panel_content = panel.inset(56.0, 0.0);
    let title = text_block(panel_content, data.text("title"), 60.0, 300, TextAnchor::Start)
        .with_letter_spacing(tight(60.0));
    let top = (panel.height - (title.bounds.height + 32.0 + 4.0)) / 2.0;
    let title = Node {
        bounds: BoundingBox { y: top, ..title.bounds },
        ..title
    }
    .with_id("title")
    .with_fill(theme.resolve(ThemeVar::TextHeading, HEADING));
    let accent = Node::rect(BoundingBox::new(
        panel_content.x,
        title.bounds.bottom() + 32.0,
        64.0,
        4.0,
    ))
    .with_fill(theme.resolve(ThemeVar::PrimaryAccent, ACCENT));
    let divider = Node::line(BoundingBox::new(panel.right(), 0.0, 0.0, panel.height))
        .with_stroke("#e5e7eb", 1.0);

    let list_area = right.inset(56.0, 48.0);
    let sections = data.items("sections");
    let rows: Vec<Node> = centered_rows(list_area, sections.len(), ROW_HEIGHT, ROW_GAP)
        .into_iter()
        .zip(&sections)
        .enumerate()
        .map(|(i, (row, section))| {
            let number = BoundingBox::new(row.x, row.center().y - 15.0, 48.0, 30.0);
            Node::group(
                format!("sections[{}]", i),
                row,
                vec![
                    Node::text(number, vec![section_number(i)], TextAnchor::Start)
                        .with_font(30.0, 300)
                        .with_fill(number_color.as_str()),
                    Node::text(
                        BoundingBox::new(
                            number.right() + 24.0,
                            row.center().y - 12.0,
                            row.width - 72.0,
                            24.0,
                        ),
                        vec![section.text("title").to_string()],
                        TextAnchor::Start,
                    )
                    .with_font(24.0, 300)
                    .with_fill(heading.as_str()),
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
            Node::group("panel", panel, vec![title, accent, divider]),
            Node::group("sections", list_area, rows),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_section_numbers_are_zero_padded() {
        assert_eq!(section_number(0), "01");
        assert_eq!(section_number(7), "08");
        assert_eq!(section_number(11), "12");
    }

    #[test]
    fn test_default_sections() {
        let tree = template().render(None, &Theme::default());
        let sections = tree.find("sections").expect("sections region");
        assert_eq!(sections.children().len(), 5);
        assert_eq!(sections.children()[4].texts(), vec!["05", "Conclusion"]);
    }
}
