//! Tinted feature cards with icon tiles

use serde_json::json;

use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::templates::{
    palette_color, paragraph, slide, text_block, white, Fields, SlideTemplate, RELAXED,
};
use crate::theme::{Theme, ThemeVar};
use crate::tree::{
    columns, rows, slide_bounds, BoundingBox, Clip, Node, Paint, TextAnchor, VisualTree,
};

use super::{BACKGROUND, FONT};

pub const ID: &str = "creative-feature-slide";

/// Card colors, assigned by position and reused past the sixth card
pub const PALETTE: [&str; 6] = ["#667eea", "#f093fb", "#4fd1c5", "#f6ad55", "#fc8181", "#68d391"];

/// Shown in the icon tile when a feature has no icon url
pub const ICON_GLYPH: &str = "✦";

const GAP: f64 = 24.0;

fn feature() -> Schema {
    Schema::new()
        .field(
            "title",
            FieldSpec::new(FieldKind::text(3, 40)).describe("Feature title"),
        )
        .field(
            "description",
            FieldSpec::new(FieldKind::text(10, 100)).describe("Feature description"),
        )
        .field("icon", FieldSpec::new(FieldKind::Icon).describe("Feature icon"))
}

pub fn schema() -> Schema {
    Schema::new()
        .field(
            "title",
            FieldSpec::new(FieldKind::text(3, 60))
                .describe("Section title")
                .with_default("Amazing Features"),
        )
        .field(
            "features",
            FieldSpec::new(FieldKind::list(FieldKind::record(feature()), 3, 6))
                .describe("Features list")
                .with_default(json!([
                    {
                        "title": "Lightning Fast",
                        "description": "Optimized performance that delivers results in milliseconds",
                        "icon": {
                            "__icon_url__": "/static/icons/placeholder.svg",
                            "__icon_query__": "lightning bolt speed",
                        },
                    },
                    {
                        "title": "Secure & Safe",
                        "description": "Enterprise-grade security protecting your valuable data",
                        "icon": {
                            "__icon_url__": "/static/icons/placeholder.svg",
                            "__icon_query__": "shield security lock",
                        },
                    },
                    {
                        "title": "Easy to Use",
                        "description": "Intuitive interface designed for everyone",
                        "icon": {
                            "__icon_url__": "/static/icons/placeholder.svg",
                            "__icon_query__": "simple interface hand",
                        },
                    },
                    {
                        "title": "Always Available",
                        "description": "99.9% uptime guarantee with global infrastructure",
                        "icon": {
                            "__icon_url__": "/static/icons/placeholder.svg",
                            "__icon_query__": "cloud server globe",
                        },
                    },
                ])),
        )
}

pub fn template() -> SlideTemplate {
    SlideTemplate::new(
        ID,
        "Features Grid",
        "Colorful feature cards with icons.",
        schema(),
        build,
    )
}

/// Grid cells for `count` cards: three across when they fit, else four
fn grid_cells(area: BoundingBox, count: usize) -> Vec<BoundingBox> {
    let per_row = if count <= 3 { 3 } else { 4 };
    let row_count = count.div_ceil(per_row);
    rows(area, row_count, GAP)
        .into_iter()
        .flat_map(|row| columns(row, per_row, GAP))
        .take(count)
        .collect()
}

fn build(data: &Fields<'_>, theme: &Theme) -> VisualTree {
    let content = slide_bounds().inset(56.0, 40.0);
    let title = text_block(content, data.text("title"), 48.0, 700, TextAnchor::Middle)
        .with_id("title")
        .with_fill("#ffffff");
    let (_, grid) = content.take_top(title.bounds.height + 48.0);

    let features = data.items("features");
    let cards: Vec<Node> = grid_cells(grid, features.len())
        .into_iter()
        .zip(&features)
        .enumerate()
        .map(|(i, (cell, feature))| {
            let color = palette_color(&PALETTE, i);
            let inner = cell.inset(24.0, 24.0);
            let tile = BoundingBox::new(inner.x, inner.y, 56.0, 56.0);
            let icon = feature.icon("icon");
            let glyph = if icon.url.is_empty() {
                Node::text(
                    tile.centered(56.0, 24.0),
                    vec![ICON_GLYPH.to_string()],
                    TextAnchor::Middle,
                )
                .with_font(24.0, 400)
                .with_fill("#ffffff")
            } else {
                Node::image(tile.centered(28.0, 28.0), icon.url, icon.query, Clip::None)
            };
            let heading = text_block(
                BoundingBox::new(inner.x, tile.bottom() + 16.0, inner.width, 0.0),
                feature.text("title"),
                20.0,
                700,
                TextAnchor::Start,
            )
            .with_fill("#ffffff");
            let description = paragraph(
                BoundingBox::new(inner.x, heading.bounds.bottom() + 8.0, inner.width, 0.0),
                feature.text("description"),
                14.0,
                400,
                TextAnchor::Start,
                RELAXED,
            )
            .with_fill(white(0.6));

            Node::group(
                format!("features[{}]", i),
                cell,
                vec![
                    Node::rounded_rect(cell, 16.0).with_fill(format!("{}20", color)),
                    Node::rounded_rect(tile, 12.0).with_fill(color),
                    glyph,
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
        vec![title, Node::group("features", grid, cards)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grid_columns() {
        let area = BoundingBox::new(0.0, 0.0, 1000.0, 400.0);
        let three = grid_cells(area, 3);
        assert_eq!(three.len(), 3);
        assert_eq!(three[0].height, 400.0);

        let six = grid_cells(area, 6);
        assert_eq!(six.len(), 6);
        assert_eq!(six[0].width, six[5].width);
        assert_eq!(six[4].x, 0.0);
        assert!(six[4].y > 0.0);
    }

    #[test]
    fn test_card_tint_follows_palette() {
        let tree = template().render(None, &Theme::default());
        let card = tree.find("features[2]").expect("third card");
        assert_eq!(card.children()[0].style.fill, Some(Paint::solid("#4fd1c520")));
        assert_eq!(card.children()[1].style.fill, Some(Paint::solid("#4fd1c5")));
    }

    #[test]
    fn test_missing_icon_url_shows_glyph() {
        let mut data = template().defaults();
        data["features"][0]["icon"]["__icon_url__"] = json!("");
        let tree = template().render(Some(&data), &Theme::default());
        let first = tree.find("features[0]").expect("first card");
        assert_eq!(first.children()[2].text_content().as_deref(), Some(ICON_GLYPH));
        let second = tree.find("features[1]").expect("second card");
        assert!(matches!(second.children()[2].kind, NodeKind::Image { .. }));
    }
}
