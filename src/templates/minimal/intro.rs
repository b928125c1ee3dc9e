//! Centered light-weight title slide

use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::templates::{block_height, slide, text_block, Fields, SlideTemplate};
use crate::theme::{Theme, ThemeVar};
use crate::tree::{
    slide_bounds, text_width, wrap_text, BoundingBox, Node, Paint, TextAnchor, VisualTree,
};

use super::{tight, ACCENT, BACKGROUND, FONT, HEADING};

pub const ID: &str = "minimal-intro-slide";

const TITLE_SIZE: f64 = 72.0;
const SUBTITLE_SIZE: f64 = 24.0;
const BYLINE_SIZE: f64 = 14.0;

pub fn schema() -> Schema {
    Schema::new()
        .field(
            "title",
            FieldSpec::new(FieldKind::text(3, 60))
                .describe("Main title of the presentation")
                .with_default("Presentation Title"),
        )
        .field(
            "subtitle",
            FieldSpec::new(FieldKind::text(5, 100))
                .describe("Subtitle or tagline")
                .with_default("A brief description of the topic"),
        )
        .field(
            "presenterName",
            FieldSpec::new(FieldKind::text(2, 50))
                .describe("Name of the presenter")
                .with_default("Presenter Name"),
        )
        .field(
            "presentationDate",
            FieldSpec::new(FieldKind::text(2, 50))
                .describe("Date of the presentation")
                .with_default("2025"),
        )
}

pub fn template() -> SlideTemplate {
    SlideTemplate::new(
        ID,
        "Intro Slide",
        "A minimalist title slide with clean typography and subtle accent.",
        schema(),
        build,
    )
}

fn build(data: &Fields<'_>, theme: &Theme) -> VisualTree {
    let content = slide_bounds().inset(64.0, 48.0);
    let center_x = content.center().x;
    let subtitle_width = 672.0_f64.min(content.width);

    let title_lines = wrap_text(data.text("title"), content.width, TITLE_SIZE);
    let subtitle_lines = wrap_text(data.text("subtitle"), subtitle_width, SUBTITLE_SIZE);
    let stack = 4.0
        + 32.0
        + block_height(title_lines.len(), TITLE_SIZE)
        + 24.0
        + block_height(subtitle_lines.len(), SUBTITLE_SIZE)
        + 48.0
        + BYLINE_SIZE;
    let top = content.y + ((content.height - stack) / 2.0).max(0.0);

    let accent = Node::rect(BoundingBox::new(center_x - 32.0, top, 64.0, 4.0))
        .with_id("accent")
        .with_fill(theme.resolve(ThemeVar::PrimaryAccent, ACCENT));
    let title = text_block(
        BoundingBox::new(content.x, top + 4.0 + 32.0, content.width, 0.0),
        data.text("title"),
        TITLE_SIZE,
        300,
        TextAnchor::Middle,
    )
    .with_id("title")
    .with_letter_spacing(tight(TITLE_SIZE))
    .with_fill(theme.resolve(ThemeVar::TextHeading, HEADING));
    let subtitle = text_block(
        BoundingBox::new(
            center_x - subtitle_width / 2.0,
            title.bounds.bottom() + 24.0,
            subtitle_width,
            0.0,
        ),
        data.text("subtitle"),
        SUBTITLE_SIZE,
        300,
        TextAnchor::Middle,
    )
    .with_id("subtitle")
    .with_fill(theme.resolve(ThemeVar::TextBody, "#666666"));

    // "NAME | DATE", centered as one row
    let name = data.text("presenterName");
    let date = data.text("presentationDate");
    let muted = theme.resolve(ThemeVar::TextBody, "#999999");
    let name_width = text_width(name, BYLINE_SIZE);
    let date_width = text_width(date, BYLINE_SIZE);
    let separator_width = text_width("|", BYLINE_SIZE);
    let row_width = name_width + 12.0 + separator_width + 12.0 + date_width;
    let row = BoundingBox::new(
        center_x - row_width / 2.0,
        subtitle.bounds.bottom() + 48.0,
        row_width,
        BYLINE_SIZE,
    );
    let byline_text = |bounds: BoundingBox, text: &str, color: &str| {
        Node::text(bounds, vec![text.to_string()], TextAnchor::Start)
            .with_font(BYLINE_SIZE, 400)
            .with_letter_spacing(0.1 * BYLINE_SIZE)
            .uppercase()
            .with_fill(color)
    };
    let byline = Node::group(
        "byline",
        row,
        vec![
            byline_text(BoundingBox::new(row.x, row.y, name_width, BYLINE_SIZE), name, &muted)
                .with_id("presenterName"),
            byline_text(
                BoundingBox::new(row.x + name_width + 12.0, row.y, separator_width, BYLINE_SIZE),
                "|",
                &theme.resolve(ThemeVar::TextBody, "#cccccc"),
            ),
            byline_text(
                BoundingBox::new(row.right() - date_width, row.y, date_width, BYLINE_SIZE),
                date,
                &muted,
            )
            .with_id("presentationDate"),
        ],
    );

    slide(
        ID,
        &FONT,
        theme,
        Paint::solid(theme.resolve(ThemeVar::CardBackground, BACKGROUND)),
        vec![accent, title, subtitle, byline],
    )
}
