//! Gradient title slide with floating circles

use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::templates::{block_height, slide, text_block, white, Fields, SlideTemplate};
use crate::theme::{Theme, ThemeVar};
use crate::tree::{slide_bounds, wrap_text, BoundingBox, Node, Paint, TextAnchor, VisualTree};

use super::FONT;

pub const ID: &str = "creative-intro-slide";

pub const GRADIENT: [&str; 3] = ["#667eea", "#764ba2", "#f093fb"];

pub fn schema() -> Schema {
    Schema::new()
        .field(
            "title",
            FieldSpec::new(FieldKind::text(3, 60))
                .describe("Main title")
                .with_default("Think Different"),
        )
        .field(
            "subtitle",
            FieldSpec::new(FieldKind::text(5, 120))
                .describe("Subtitle")
                .with_default("Innovative ideas that change the world"),
        )
        .field(
            "tagline",
            FieldSpec::new(FieldKind::text(2, 40))
                .describe("Small tagline or date")
                .with_default("2025 Edition"),
        )
}

pub fn template() -> SlideTemplate {
    SlideTemplate::new(
        ID,
        "Creative Intro",
        "Bold, colorful title slide with gradient background.",
        schema(),
        build,
    )
}

fn build(data: &Fields<'_>, theme: &Theme) -> VisualTree {
    let background = match theme.get(ThemeVar::PrimaryAccent.name()) {
        Some(accent) => Paint::gradient(135.0, &[accent, accent, accent]),
        None => Paint::gradient(135.0, &GRADIENT),
    };

    let decorations = Node::group(
        "decorations",
        slide_bounds(),
        vec![
            Node::circle(BoundingBox::new(1060.0, -100.0, 320.0, 320.0)).with_fill(white(0.1)),
            Node::circle(BoundingBox::new(-100.0, 486.0, 384.0, 384.0)).with_fill(white(0.05)),
            Node::circle(BoundingBox::new(800.0, 360.0, 160.0, 160.0)).with_fill(white(0.1)),
        ],
    );

    let content = slide_bounds().inset(64.0, 48.0);
    let subtitle_width = 672.0_f64.min(content.width);
    let title_lines = wrap_text(data.text("title"), content.width, 96.0);
    let subtitle_lines = wrap_text(data.text("subtitle"), subtitle_width, 24.0);
    let stack = 14.0
        + 24.0
        + block_height(title_lines.len(), 96.0)
        + 32.0
        + block_height(subtitle_lines.len(), 24.0)
        + 48.0
        + 4.0;
    let top = content.y + ((content.height - stack) / 2.0).max(0.0);

    let tagline = Node::text(
        BoundingBox::new(content.x, top, content.width, 14.0),
        vec![data.text("tagline").to_string()],
        TextAnchor::Middle,
    )
    .with_id("tagline")
    .with_font(14.0, 400)
    .with_letter_spacing(4.2)
    .uppercase()
    .with_fill(white(0.7));
    let title = text_block(
        BoundingBox::new(content.x, tagline.bounds.bottom() + 24.0, content.width, 0.0),
        data.text("title"),
        96.0,
        900,
        TextAnchor::Middle,
    )
    .with_id("title")
    .with_fill("#ffffff");
    let subtitle = text_block(
        BoundingBox::new(
            content.center().x - subtitle_width / 2.0,
            title.bounds.bottom() + 32.0,
            subtitle_width,
            0.0,
        ),
        data.text("subtitle"),
        24.0,
        300,
        TextAnchor::Middle,
    )
    .with_id("subtitle")
    .with_fill(white(0.8));
    let rule = Node::rounded_rect(
        BoundingBox::new(content.center().x - 48.0, subtitle.bounds.bottom() + 48.0, 96.0, 4.0),
        2.0,
    )
    .with_fill(white(0.4));

    slide(
        ID,
        &FONT,
        theme,
        background,
        vec![decorations, tagline, title, subtitle, rule],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_order() {
        let tree = template().render(None, &Theme::default());
        assert_eq!(
            tree.texts(),
            vec!["2025 Edition", "Think Different", "Innovative ideas that change the world"]
        );
    }

    #[test]
    fn test_three_stop_background() {
        let tree = template().render(None, &Theme::default());
        assert_eq!(tree.background, Paint::gradient(135.0, &GRADIENT));
    }
}
