//! Centered quote with attribution

use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::templates::{
    block_height, fit_font_size, paragraph, slide, spaced_height, text_block, Fields,
    SlideTemplate, RELAXED,
};
use crate::theme::{Theme, ThemeVar};
use crate::tree::{slide_bounds, wrap_text, BoundingBox, Node, Paint, TextAnchor, VisualTree};

use super::{BACKGROUND, FONT};

pub const ID: &str = "minimal-quote-slide";

const MARK_SIZE: f64 = 128.0;
const QUOTE_SIZE: f64 = 36.0;
const MIN_QUOTE_SIZE: f64 = 20.0;

pub fn schema() -> Schema {
    Schema::new()
        .field(
            "quote",
            FieldSpec::new(FieldKind::long_text(20, 300))
                .describe("The quote text")
                .with_default(
                    "Design is not just what it looks like and feels like. Design is how it works.",
                ),
        )
        .field(
            "author",
            FieldSpec::new(FieldKind::text(2, 50))
                .describe("Quote attribution")
                .with_default("Steve Jobs"),
        )
        .field(
            "role",
            FieldSpec::new(FieldKind::text(2, 80))
                .describe("Author's role or title")
                .with_default("Co-founder, Apple Inc."),
        )
}

pub fn template() -> SlideTemplate {
    SlideTemplate::new(
        ID,
        "Quote",
        "A centered quote with attribution in minimalist style.",
        schema(),
        build,
    )
}

fn build(data: &Fields<'_>, theme: &Theme) -> VisualTree {
    let content = slide_bounds().inset(80.0, 64.0);
    let quote_width = 896.0_f64.min(content.width);
    let role_lines = wrap_text(data.text("role"), content.width, 14.0);
    let stack = |quote_size: f64| {
        let quote_lines = wrap_text(data.text("quote"), quote_width, quote_size);
        MARK_SIZE
            + 16.0
            + spaced_height(quote_lines.len(), quote_size, RELAXED)
            + 40.0
            + 18.0
            + 4.0
            + block_height(role_lines.len(), 14.0)
    };
    // Long quotes step down in size until the stack fits
    let quote_size = fit_font_size(QUOTE_SIZE, MIN_QUOTE_SIZE, |size| {
        stack(size) <= content.height
    });
    let stack = stack(quote_size);
    let top = content.y + ((content.height - stack) / 2.0).max(0.0);

    let mark = Node::text(
        BoundingBox::new(content.x, top, content.width, MARK_SIZE),
        vec!["\u{201C}".to_string()],
        TextAnchor::Middle,
    )
    .with_id("mark")
    .with_font(MARK_SIZE, 400)
    .with_font_family("serif")
    .with_line_height(1.0)
    .with_fill(theme.resolve(ThemeVar::PrimaryAccent, "#e0e0e0"));
    let quote = paragraph(
        BoundingBox::new(
            content.center().x - quote_width / 2.0,
            mark.bounds.bottom() + 16.0,
            quote_width,
            0.0,
        ),
        data.text("quote"),
        quote_size,
        300,
        TextAnchor::Middle,
        RELAXED,
    )
    .with_id("quote")
    .with_fill(theme.resolve(ThemeVar::TextHeading, "#222222"));
    let author = Node::text(
        BoundingBox::new(content.x, quote.bounds.bottom() + 40.0, content.width, 18.0),
        vec![data.text("author").to_string()],
        TextAnchor::Middle,
    )
    .with_id("author")
    .with_font(18.0, 500)
    .with_fill(theme.resolve(ThemeVar::TextHeading, "#333333"));
    let role = text_block(
        BoundingBox::new(content.x, author.bounds.bottom() + 4.0, content.width, 0.0),
        data.text("role"),
        14.0,
        400,
        TextAnchor::Middle,
    )
    .with_id("role")
    .with_letter_spacing(1.4)
    .uppercase()
    .with_fill(theme.resolve(ThemeVar::TextBody, "#888888"));

    slide(
        ID,
        &FONT,
        theme,
        Paint::solid(theme.resolve(ThemeVar::CardBackground, BACKGROUND)),
        vec![mark, quote, author, role],
    )
}
