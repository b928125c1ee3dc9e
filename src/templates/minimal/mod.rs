//! Minimal family: off-white canvas, black accent, Inter

pub mod bullet;
pub mod image_text;
pub mod intro;
pub mod metrics;
pub mod quote;
pub mod table_of_contents;

use super::FontFace;

pub(crate) const FONT: FontFace = FontFace {
    family: "Inter",
    link: "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap",
};

pub(crate) const ACCENT: &str = "#000000";
pub(crate) const HEADING: &str = "#111111";
pub(crate) const BACKGROUND: &str = "#fafafa";

/// Tight tracking used on large light headings
pub(crate) fn tight(font_size: f64) -> f64 {
    -0.025 * font_size
}
