//! The slide template catalog
//!
//! Every template is a [`SlideTemplate`] value: an id, display metadata, a
//! [`Schema`], and a build function from normalized data to a
//! [`VisualTree`]. Templates are grouped into three visual families that
//! share a font and a palette.
//!
//! # Example
//!
//! ```rust
//! use slide_templates::templates;
//! use slide_templates::Theme;
//!
//! let agenda = templates::corporate::agenda::template();
//! let tree = agenda.render(None, &Theme::default());
//! assert!(tree.contains_text("Agenda"));
//! assert_eq!(tree.find("items").unwrap().children().len(), 5);
//! ```

pub mod corporate;
pub mod creative;
mod fields;
pub mod minimal;

pub use fields::Fields;

use serde_json::Value;
use tracing::debug;

use crate::error::ValidationError;
use crate::schema::Schema;
use crate::theme::{Theme, ThemeVar};
use crate::tree::{wrap_text, BoundingBox, Node, Paint, TextAnchor, VisualTree};
use crate::tree::{SLIDE_HEIGHT, SLIDE_WIDTH};

/// Maps normalized slide data to a visual tree
pub type BuildFn = fn(&Fields<'_>, &Theme) -> VisualTree;

/// One slide design
#[derive(Debug, Clone)]
pub struct SlideTemplate {
    /// Stable kebab-case identifier, unique in the catalog
    pub id: &'static str,
    /// Display label
    pub name: &'static str,
    /// One-line summary
    pub description: &'static str,
    /// Field contract for this template's data
    pub schema: Schema,
    build: BuildFn,
}

impl SlideTemplate {
    pub fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        schema: Schema,
        build: BuildFn,
    ) -> Self {
        Self {
            id,
            name,
            description,
            schema,
            build,
        }
    }

    /// Render partial data; absent fields come from the schema defaults
    ///
    /// Never fails. Data is normalized but not validated, so out-of-bound
    /// values render as given.
    pub fn render(&self, data: Option<&Value>, theme: &Theme) -> VisualTree {
        debug!(template = self.id, "rendering slide");
        let normalized = self.schema.normalize(data);
        (self.build)(&Fields::new(&normalized), theme)
    }

    /// Check data against the schema without rendering
    pub fn validate(&self, data: &Value) -> Result<(), Vec<ValidationError>> {
        self.schema.validate(data)
    }

    /// The complete default data for this template
    pub fn defaults(&self) -> Value {
        self.schema.defaults()
    }
}

/// Every built-in template, in catalog order
pub fn builtin() -> Vec<SlideTemplate> {
    vec![
        corporate::intro::template(),
        corporate::agenda::template(),
        corporate::comparison::template(),
        corporate::data::template(),
        corporate::team::template(),
        creative::intro::template(),
        creative::feature::template(),
        creative::quote::template(),
        creative::statistics::template(),
        creative::timeline::template(),
        minimal::intro::template(),
        minimal::bullet::template(),
        minimal::image_text::template(),
        minimal::metrics::template(),
        minimal::quote::template(),
        minimal::table_of_contents::template(),
    ]
}

/// A webfont and the stylesheet that loads it
pub(crate) struct FontFace {
    pub family: &'static str,
    pub link: &'static str,
}

/// Assemble a slide from its nodes
pub(crate) fn slide(
    id: &'static str,
    font: &FontFace,
    theme: &Theme,
    background: Paint,
    nodes: Vec<Node>,
) -> VisualTree {
    VisualTree {
        template_id: id.to_string(),
        width: SLIDE_WIDTH,
        height: SLIDE_HEIGHT,
        background,
        font_family: theme.resolve(ThemeVar::HeadingFont, font.family),
        font_links: vec![font.link.to_string()],
        nodes,
    }
}

/// Line height multiple for body text blocks
pub(crate) const LINE_HEIGHT: f64 = 1.3;

/// Looser line height for running prose
pub(crate) const RELAXED: f64 = 1.625;

/// A wrapped text node whose height fits its lines
pub(crate) fn text_block(
    area: BoundingBox,
    content: &str,
    font_size: f64,
    weight: u16,
    anchor: TextAnchor,
) -> Node {
    paragraph(area, content, font_size, weight, anchor, LINE_HEIGHT)
}

/// [`text_block`] with an explicit line height
pub(crate) fn paragraph(
    area: BoundingBox,
    content: &str,
    font_size: f64,
    weight: u16,
    anchor: TextAnchor,
    line_height: f64,
) -> Node {
    let lines = wrap_text(content, area.width, font_size);
    let height = spaced_height(lines.len(), font_size, line_height);
    Node::text(
        BoundingBox::new(area.x, area.y, area.width, height),
        lines,
        anchor,
    )
    .with_font(font_size, weight)
    .with_line_height(line_height)
}

/// Height of `lines` lines of text at `font_size`
pub(crate) fn block_height(lines: usize, font_size: f64) -> f64 {
    spaced_height(lines, font_size, LINE_HEIGHT)
}

pub(crate) fn spaced_height(lines: usize, font_size: f64, line_height: f64) -> f64 {
    if lines == 0 {
        return 0.0;
    }
    font_size + (lines - 1) as f64 * font_size * line_height
}

/// Largest font size from `max` down to `min`, in 2px steps, for which `fits` holds
///
/// Falls back to `min` when no size fits.
pub(crate) fn fit_font_size(max: f64, min: f64, fits: impl Fn(f64) -> bool) -> f64 {
    let mut size = max;
    while size > min && !fits(size) {
        size = (size - 2.0).max(min);
    }
    size
}

/// Palette entry for item `index`, wrapping around
///
/// `palette` must not be empty.
pub(crate) fn palette_color<T: Copy>(palette: &[T], index: usize) -> T {
    palette[index % palette.len()]
}

/// White at the given opacity
pub(crate) fn white(alpha: f64) -> String {
    format!("rgba(255,255,255,{})", alpha)
}
