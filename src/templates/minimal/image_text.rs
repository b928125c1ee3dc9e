//! Half-bleed image beside a title and paragraph

use serde_json::json;

use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::templates::{paragraph, slide, text_block, Fields, SlideTemplate, RELAXED};
use crate::theme::{Theme, ThemeVar};
use crate::tree::{slide_bounds, BoundingBox, Clip, Node, Paint, TextAnchor, VisualTree};

use super::{tight, ACCENT, BACKGROUND, FONT, HEADING};

pub const ID: &str = "minimal-image-text-slide";

pub fn schema() -> Schema {
    Schema::new()
        .field(
            "title",
            FieldSpec::new(FieldKind::text(3, 60))
                .describe("Section title")
                .with_default("About Us"),
        )
        .field(
            "description",
            FieldSpec::new(FieldKind::long_text(20, 400))
                .describe("Main description text")
                .with_default(
                    "We are a team of passionate individuals dedicated to creating innovative solutions that make a difference in peoples lives.",
                ),
        )
        .field(
            "image",
            FieldSpec::new(FieldKind::Image)
                .describe("Supporting image")
                .with_default(json!({
                    "__image_url__": "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&w=1000&q=80",
                    "__image_prompt__": "Modern minimalist office workspace",
                })),
        )
}

pub fn template() -> SlideTemplate {
    SlideTemplate::new(
        ID,
        "Image with Text",
        "Split layout with image on one side and text content on the other.",
        schema(),
        build,
    )
}

fn build(data: &Fields<'_>, theme: &Theme) -> VisualTree {
    let (left, right) = slide_bounds().split_left(0.5);
    let image = data.image("image");
    let alt = if image.prompt.is_empty() {
        data.text("title").to_string()
    } else {
        image.prompt
    };

    let column = right.inset(56.0, 48.0);
    let title = text_block(column, data.text("title"), 48.0, 300, TextAnchor::Start)
        .with_letter_spacing(tight(48.0));
    let description = paragraph(
        column,
        data.text("description"),
        20.0,
        300,
        TextAnchor::Start,
        RELAXED,
    );
    let stack = 4.0 + 32.0 + title.bounds.height + 32.0 + description.bounds.height;
    let top = column.y + ((column.height - stack) / 2.0).max(0.0);

    let accent = Node::rect(BoundingBox::new(column.x, top, 48.0, 4.0))
        .with_id("accent")
        .with_fill(theme.resolve(ThemeVar::PrimaryAccent, ACCENT));
    let title = Node {
        bounds: BoundingBox { y: top + 36.0, ..title.bounds },
        ..title
    }
    .with_id("title")
    .with_fill(theme.resolve(ThemeVar::TextHeading, HEADING));
    let description = Node {
        bounds: BoundingBox { y: title.bounds.bottom() + 32.0, ..description.bounds },
        ..description
    }
    .with_id("description")
    .with_fill(theme.resolve(ThemeVar::TextBody, "#555555"));

    slide(
        ID,
        &FONT,
        theme,
        Paint::solid(theme.resolve(ThemeVar::CardBackground, BACKGROUND)),
        vec![
            Node::image(left, image.url, alt, Clip::None).with_id("image"),
            Node::group("content", column, vec![accent, title, description]),
        ],
    )
}
