//! Portrait grid of team members

use serde_json::json;

use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::templates::{block_height, slide, text_block, Fields, SlideTemplate};
use crate::theme::{Theme, ThemeVar};
use crate::tree::{
    columns, slide_bounds, wrap_text, BoundingBox, Clip, Node, Paint, TextAnchor, VisualTree,
};

use super::{ACCENT, BACKGROUND, BODY, FONT, HEADING};

pub const ID: &str = "corporate-team-slide";

const PORTRAIT: f64 = 144.0;

fn member() -> Schema {
    Schema::new()
        .field(
            "name",
            FieldSpec::new(FieldKind::text(2, 40)).describe("Team member name"),
        )
        .field(
            "role",
            FieldSpec::new(FieldKind::text(2, 60)).describe("Job title or role"),
        )
        .field(
            "image",
            FieldSpec::new(FieldKind::Image).describe("Profile photo"),
        )
}

pub fn schema() -> Schema {
    Schema::new()
        .field(
            "title",
            FieldSpec::new(FieldKind::text(3, 40))
                .describe("Section title")
                .with_default("Leadership Team"),
        )
        .field(
            "members",
            FieldSpec::new(FieldKind::list(FieldKind::record(member()), 3, 4))
                .describe("Team members")
                .with_default(json!([
                    {
                        "name": "Sarah Johnson",
                        "role": "Chief Executive Officer",
                        "image": {
                            "__image_url__": "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&w=200&q=80",
                            "__image_prompt__": "Professional businesswoman portrait",
                        },
                    },
                    {
                        "name": "Michael Chen",
                        "role": "Chief Technology Officer",
                        "image": {
                            "__image_url__": "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&w=200&q=80",
                            "__image_prompt__": "Professional businessman portrait",
                        },
                    },
                    {
                        "name": "Emily Davis",
                        "role": "Chief Financial Officer",
                        "image": {
                            "__image_url__": "https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&w=200&q=80",
                            "__image_prompt__": "Professional woman executive portrait",
                        },
                    },
                ])),
        )
}

pub fn template() -> SlideTemplate {
    SlideTemplate::new(
        ID,
        "Leadership Team",
        "Professional team introduction with photos and titles.",
        schema(),
        build,
    )
}

fn build(data: &Fields<'_>, theme: &Theme) -> VisualTree {
    let accent = theme.resolve(ThemeVar::PrimaryAccent, ACCENT);
    let heading = theme.resolve(ThemeVar::TextHeading, HEADING);
    let body = theme.resolve(ThemeVar::TextBody, BODY);

    let (bar, rest) = slide_bounds().take_top(8.0);
    let content = rest.inset(56.0, 40.0);
    let title = text_block(content, data.text("title"), 48.0, 700, TextAnchor::Middle)
        .with_id("title")
        .with_fill(theme.resolve(ThemeVar::TextHeading, ACCENT));
    let (_, grid) = content.take_top(title.bounds.height + 48.0);

    let members = data.items("members");
    let cells: Vec<Node> = columns(grid, members.len().max(3), 32.0)
        .into_iter()
        .zip(&members)
        .enumerate()
        .map(|(i, (cell, member))| {
            let name_lines = wrap_text(member.text("name"), cell.width, 20.0);
            let role_lines = wrap_text(member.text("role"), cell.width, 14.0);
            let stack = PORTRAIT
                + 16.0
                + block_height(name_lines.len(), 20.0)
                + 4.0
                + block_height(role_lines.len(), 14.0);
            let top = cell.y + ((cell.height - stack) / 2.0).max(0.0);

            let portrait =
                BoundingBox::new(cell.center().x - PORTRAIT / 2.0, top, PORTRAIT, PORTRAIT);
            let image = member.image("image");
            let name = text_block(
                BoundingBox::new(cell.x, portrait.bottom() + 16.0, cell.width, 0.0),
                member.text("name"),
                20.0,
                700,
                TextAnchor::Middle,
            )
            .with_fill(heading.as_str());
            let role = text_block(
                BoundingBox::new(cell.x, name.bounds.bottom() + 4.0, cell.width, 0.0),
                member.text("role"),
                14.0,
                400,
                TextAnchor::Middle,
            )
            .with_fill(body.as_str());

            Node::group(
                format!("members[{}]", i),
                cell,
                vec![
                    Node::image(portrait, image.url, member.text("name"), Clip::Circle),
                    Node::circle(portrait).with_stroke(accent.as_str(), 4.0),
                    name,
                    role,
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
            Node::rect(bar).with_id("header-bar").with_fill(accent.as_str()),
            title,
            Node::group("members", grid, cells),
        ],
    )
}
