//! Corporate family: white cards, navy accent, Source Sans Pro

pub mod agenda;
pub mod comparison;
pub mod data;
pub mod intro;
pub mod team;

use super::FontFace;

pub(crate) const FONT: FontFace = FontFace {
    family: "Source Sans Pro",
    link: "https://fonts.googleapis.com/css2?family=Source+Sans+Pro:wght@300;400;600;700&display=swap",
};

pub(crate) const ACCENT: &str = "#1e3a8a";
pub(crate) const HEADING: &str = "#1e293b";
pub(crate) const BODY: &str = "#64748b";
pub(crate) const BACKGROUND: &str = "#ffffff";

/// Horizontal page padding
pub(crate) const PADDING: f64 = 64.0;
