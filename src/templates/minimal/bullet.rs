//! Dotted bullet list under a light heading

use serde_json::json;

use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::templates::{
    fit_font_size, paragraph, slide, spaced_height, text_block, Fields, SlideTemplate, RELAXED,
};
use crate::theme::{Theme, ThemeVar};
use crate::tree::{slide_bounds, wrap_text, BoundingBox, Node, Paint, TextAnchor, VisualTree};

use super::{tight, ACCENT, BACKGROUND, FONT, HEADING};

pub const ID: &str = "minimal-bullet-slide";

const TEXT_SIZE: f64 = 24.0;
const MIN_TEXT_SIZE: f64 = 16.0;
const BULLET_GAP: f64 = 24.0;

fn bullet() -> Schema {
    Schema::new().field(
        "text",
        FieldSpec::new(FieldKind::text(5, 150)).describe("Bullet point text"),
    )
}

pub fn schema() -> Schema {
    Schema::new()
        .field(
            "title",
            FieldSpec::new(FieldKind::text(3, 60))
                .describe("Section title")
                .with_default("Key Points"),
        )
        .field(
            "bullets",
            FieldSpec::new(FieldKind::list(FieldKind::record(bullet()), 3, 6))
                .describe("List of bullet points")
                .with_default(json!([
                    { "text": "First key point with important information" },
                    { "text": "Second key point explaining the concept" },
                    { "text": "Third key point with additional details" },
                    { "text": "Fourth key point summarizing benefits" },
                ])),
        )
}

pub fn template() -> SlideTemplate {
    SlideTemplate::new(
        ID,
        "Bullet Points",
        "Clean bullet points with minimal styling and generous whitespace.",
        schema(),
        build,
    )
}

fn build(data: &Fields<'_>, theme: &Theme) -> VisualTree {
    let accent = theme.resolve(ThemeVar::PrimaryAccent, ACCENT);
    let body = theme.resolve(ThemeVar::TextBody, "#444444");

    let content = slide_bounds().inset(64.0, 56.0);
    let title = text_block(content, data.text("title"), 48.0, 300, TextAnchor::Start)
        .with_id("title")
        .with_letter_spacing(tight(48.0))
        .with_fill(theme.resolve(ThemeVar::TextHeading, HEADING));
    let (_, area) = content.take_top(title.bounds.height + 48.0);

    // Wrap every bullet first so the list can be centered as a whole
    let bullets = data.items("bullets");
    let text_width = area.width - 32.0;
    let list_height = |size: f64| {
        bullets
            .iter()
            .map(|bullet| {
                let lines = wrap_text(bullet.text("text"), text_width, size).len();
                spaced_height(lines, size, RELAXED)
            })
            .sum::<f64>()
            + BULLET_GAP * bullets.len().saturating_sub(1) as f64
    };
    let text_size = fit_font_size(TEXT_SIZE, MIN_TEXT_SIZE, |size| {
        list_height(size) <= area.height
    });
    let texts: Vec<Node> = bullets
        .iter()
        .map(|bullet| {
            paragraph(
                BoundingBox::new(area.x + 32.0, 0.0, text_width, 0.0),
                bullet.text("text"),
                text_size,
                300,
                TextAnchor::Start,
                RELAXED,
            )
            .with_fill(body.as_str())
        })
        .collect();
    let total = list_height(text_size);
    let mut y = area.y + ((area.height - total) / 2.0).max(0.0);

    let mut rows = Vec::new();
    for (i, mut text) in texts.into_iter().enumerate() {
        text.bounds.y = y;
        let row = BoundingBox::new(area.x, y, area.width, text.bounds.height);
        rows.push(Node::group(
            format!("bullets[{}]", i),
            row,
            vec![
                Node::circle(BoundingBox::new(row.x, y + 8.0, 8.0, 8.0)).with_fill(accent.as_str()),
                text,
            ],
        ));
        y = row.bottom() + BULLET_GAP;
    }

    slide(
        ID,
        &FONT,
        theme,
        Paint::solid(theme.resolve(ThemeVar::CardBackground, BACKGROUND)),
        vec![title, Node::group("bullets", area, rows)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bullets_stack_downwards() {
        let tree = template().render(None, &Theme::default());
        let bullets = tree.find("bullets").expect("bullets region");
        let ys: Vec<f64> = bullets.children().iter().map(|b| b.bounds.y).collect();
        assert_eq!(ys.len(), 4);
        assert!(ys.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(
            bullets.children()[3].texts(),
            vec!["Fourth key point summarizing benefits"]
        );
    }

    #[test]
    fn test_six_long_bullets_shrink_to_fit() {
        let text = "word ".repeat(30).trim_end().to_string();
        let data = json!({
            "title": "A heading long enough to need a second line across the slide",
            "bullets": vec![json!({ "text": text }); 6],
        });
        assert_eq!(template().validate(&data), Ok(()));

        let tree = template().render(Some(&data), &Theme::default());
        let bullets = tree.find("bullets").expect("bullets region");
        let last = bullets.children().last().expect("six bullets");
        assert!(last.children()[1].style.font_size.unwrap_or_default() < TEXT_SIZE);
        assert!(last.bounds.bottom() <= bullets.bounds.bottom());
    }

    #[test]
    fn test_default_bullets_keep_full_size() {
        let tree = template().render(None, &Theme::default());
        let first = &tree.find("bullets[0]").expect("first bullet").children()[1];
        assert_eq!(first.style.font_size, Some(TEXT_SIZE));
    }
}
