//! Title slide over a full-bleed photo with a brand badge

use serde_json::json;

use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::templates::{block_height, slide, text_block, white, Fields, SlideTemplate};
use crate::theme::{Theme, ThemeVar};
use crate::tree::{slide_bounds, wrap_text, BoundingBox, Clip, Node, Paint, TextAnchor, VisualTree};

use super::{BACKGROUND, FONT, PADDING};

pub const ID: &str = "corporate-intro-slide";

/// Overlay gradient stops used when the theme sets no accent
pub const OVERLAY: [&str; 2] = ["rgba(30,58,138,0.92)", "rgba(59,130,246,0.85)"];

pub fn schema() -> Schema {
    Schema::new()
        .field(
            "title",
            FieldSpec::new(FieldKind::text(3, 80))
                .describe("Main title")
                .with_default("Annual Business Review"),
        )
        .field(
            "subtitle",
            FieldSpec::new(FieldKind::text(5, 120))
                .describe("Subtitle")
                .with_default("Strategic Planning & Growth Initiatives"),
        )
        .field(
            "companyName",
            FieldSpec::new(FieldKind::text(2, 50))
                .describe("Company name")
                .with_default("Acme Corporation"),
        )
        .field(
            "date",
            FieldSpec::new(FieldKind::text(2, 50))
                .describe("Date or period")
                .with_default("Q4 2025"),
        )
        .field(
            "image",
            FieldSpec::new(FieldKind::Image)
                .describe("Background or supporting image")
                .with_default(json!({
                    "__image_url__": "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?auto=format&fit=crop&w=1000&q=80",
                    "__image_prompt__": "Modern corporate skyscraper building",
                })),
        )
}

pub fn template() -> SlideTemplate {
    SlideTemplate::new(
        ID,
        "Corporate Intro",
        "Professional title slide with company branding area.",
        schema(),
        build,
    )
}

fn build(data: &Fields<'_>, theme: &Theme) -> VisualTree {
    let canvas = slide_bounds();
    let content = canvas.inset(PADDING, 48.0);
    let image = data.image("image");

    let overlay = match theme.get(ThemeVar::PrimaryAccent.name()) {
        Some(accent) => Paint::gradient(135.0, &[accent, accent]),
        None => Paint::gradient(135.0, &OVERLAY),
    };

    // Brand row: monogram badge then the company name
    let company = data.text("companyName");
    let monogram: String = company.chars().take(1).collect();
    let badge = BoundingBox::new(content.x, content.y, 40.0, 40.0);
    let brand = Node::group(
        "brand",
        BoundingBox::new(content.x, content.y, content.width, 40.0),
        vec![
            Node::rounded_rect(badge, 4.0).with_fill(white(0.2)),
            Node::text(badge.centered(40.0, 18.0), vec![monogram], TextAnchor::Middle)
                .with_id("monogram")
                .with_font(18.0, 700)
                .with_fill("#ffffff"),
            Node::text(
                BoundingBox::new(
                    badge.right() + 12.0,
                    content.y + 11.0,
                    content.width - 52.0,
                    18.0,
                ),
                vec![company.to_string()],
                TextAnchor::Start,
            )
            .with_id("companyName")
            .with_font(18.0, 500)
            .with_letter_spacing(0.5)
            .with_fill(white(0.8)),
        ],
    );

    // Title block centered between the brand row and the footer
    let body = BoundingBox::new(content.x, content.y + 40.0, content.width, content.height - 80.0);
    let title_lines = wrap_text(data.text("title"), body.width, 72.0);
    let subtitle_width = 768.0_f64.min(body.width);
    let subtitle_lines = wrap_text(data.text("subtitle"), subtitle_width, 24.0);
    let block = block_height(title_lines.len(), 72.0)
        + 24.0
        + block_height(subtitle_lines.len(), 24.0);
    let top = (body.y + (body.height - block) / 2.0).max(body.y);
    let title = text_block(
        BoundingBox::new(body.x, top, body.width, 0.0),
        data.text("title"),
        72.0,
        700,
        TextAnchor::Start,
    )
    .with_id("title")
    .with_fill("#ffffff");
    let subtitle = text_block(
        BoundingBox::new(body.x, title.bounds.bottom() + 24.0, subtitle_width, 0.0),
        data.text("subtitle"),
        24.0,
        300,
        TextAnchor::Start,
    )
    .with_id("subtitle")
    .with_fill(white(0.8));

    let (_, footer) = content.take_bottom(14.0);
    let footer_nodes = vec![
        Node::text(footer, vec![data.text("date").to_string()], TextAnchor::Start)
            .with_id("date")
            .with_font(14.0, 400)
            .with_letter_spacing(3.0)
            .uppercase()
            .with_fill(white(0.6)),
        Node::rect(BoundingBox::new(footer.right() - 96.0, footer.bottom() - 4.0, 96.0, 4.0))
            .with_fill(white(0.3)),
    ];

    slide(
        ID,
        &FONT,
        theme,
        Paint::solid(BACKGROUND),
        vec![
            Node::image(canvas, image.url, image.prompt, Clip::None).with_id("image"),
            Node::rect(canvas).with_id("overlay").with_fill(overlay),
            brand,
            title,
            subtitle,
            Node::group("footer", footer, footer_nodes),
        ],
    )
}
