//! Centered quote on a fixed gradient

use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::templates::{
    block_height, fit_font_size, paragraph, slide, spaced_height, white, Fields, SlideTemplate,
    RELAXED,
};
use crate::theme::Theme;
use crate::tree::{
    slide_bounds, text_width, wrap_text, BoundingBox, Node, Paint, TextAnchor, VisualTree,
};

use super::FONT;

pub const ID: &str = "creative-quote-slide";

/// Background gradient; not themable
pub const GRADIENT: [&str; 3] = ["#667eea", "#764ba2", "#f093fb"];

const QUOTE_SIZE: f64 = 48.0;
const MIN_QUOTE_SIZE: f64 = 28.0;

pub fn schema() -> Schema {
    Schema::new()
        .field(
            "quote",
            FieldSpec::new(FieldKind::text(20, 250))
                .describe("Quote text")
                .with_default("The only way to do great work is to love what you do."),
        )
        .field(
            "author",
            FieldSpec::new(FieldKind::text(2, 50))
                .describe("Quote author")
                .with_default("Steve Jobs"),
        )
}

pub fn template() -> SlideTemplate {
    SlideTemplate::new(
        ID,
        "Quote",
        "Inspirational quote with gradient styling.",
        schema(),
        build,
    )
}

fn build(data: &Fields<'_>, theme: &Theme) -> VisualTree {
    let canvas = slide_bounds();
    let marks = Node::group(
        "decorations",
        canvas,
        vec![
            Node::text(
                BoundingBox::new(40.0, 40.0, 120.0, 200.0),
                vec!["\u{201C}".into()],
                TextAnchor::Start,
            )
            .with_font(200.0, 400)
            .with_font_family("serif")
            .with_line_height(1.0)
            .with_fill(white(0.1)),
            Node::text(
                BoundingBox::new(canvas.right() - 160.0, canvas.bottom() - 240.0, 120.0, 200.0),
                vec!["\u{201D}".into()],
                TextAnchor::End,
            )
            .with_font(200.0, 400)
            .with_font_family("serif")
            .with_line_height(1.0)
            .with_fill(white(0.1)),
        ],
    );

    let content = canvas.inset(80.0, 64.0);
    let quote_width = 896.0_f64.min(content.width);
    let stack = |size: f64| {
        let lines = wrap_text(data.text("quote"), quote_width, size);
        spaced_height(lines.len(), size, RELAXED) + 40.0 + block_height(1, 20.0)
    };
    let quote_size = fit_font_size(QUOTE_SIZE, MIN_QUOTE_SIZE, |size| {
        stack(size) <= content.height
    });
    let stack = stack(quote_size);
    let top = content.y + ((content.height - stack) / 2.0).max(0.0);

    let quote = paragraph(
        BoundingBox::new(content.center().x - quote_width / 2.0, top, quote_width, 0.0),
        data.text("quote"),
        quote_size,
        500,
        TextAnchor::Middle,
        RELAXED,
    )
    .with_id("quote")
    .with_fill("#ffffff");

    // Author name flanked by two short rules
    let author = data.text("author");
    let name_width = text_width(author, 20.0);
    let row_width = 48.0 + 16.0 + name_width + 16.0 + 48.0;
    let row = BoundingBox::new(
        content.center().x - row_width / 2.0,
        quote.bounds.bottom() + 40.0,
        row_width,
        20.0,
    );
    let rule_y = row.center().y - 1.0;
    let byline = Node::group(
        "byline",
        row,
        vec![
            Node::rect(BoundingBox::new(row.x, rule_y, 48.0, 2.0)).with_fill(white(0.4)),
            Node::text(
                BoundingBox::new(row.x + 64.0, row.y, name_width, 20.0),
                vec![author.to_string()],
                TextAnchor::Middle,
            )
            .with_id("author")
            .with_font(20.0, 500)
            .with_fill(white(0.8)),
            Node::rect(BoundingBox::new(row.right() - 48.0, rule_y, 48.0, 2.0))
                .with_fill(white(0.4)),
        ],
    );

    slide(
        ID,
        &FONT,
        theme,
        Paint::gradient(135.0, &GRADIENT),
        vec![marks, quote, byline],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeVar;

    #[test]
    fn test_background_ignores_theme() {
        let theme = Theme::new().with(ThemeVar::PrimaryAccent, "#000000");
        let tree = template().render(None, &theme);
        assert_eq!(tree.background, Paint::gradient(135.0, &GRADIENT));
    }

    #[test]
    fn test_quote_and_author() {
        let tree = template().render(None, &Theme::default());
        assert_eq!(
            tree.find("quote").and_then(|n| n.text_content()).as_deref(),
            Some("The only way to do great work is to love what you do.")
        );
        assert!(tree.contains_text("Steve Jobs"));
    }

    #[test]
    fn test_longest_quote_keeps_byline_on_the_slide() {
        let quote = "word ".repeat(50).trim_end().to_string();
        let data = serde_json::json!({ "quote": quote });
        assert_eq!(template().validate(&data), Ok(()));

        let tree = template().render(Some(&data), &Theme::default());
        let quote = tree.find("quote").expect("quote");
        let byline = tree.find("byline").expect("byline");
        assert!(quote.style.font_size.unwrap_or_default() < QUOTE_SIZE);
        assert!(byline.bounds.bottom() <= 720.0 - 64.0);
    }
}
