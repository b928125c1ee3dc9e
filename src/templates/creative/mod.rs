//! Creative family: dark canvas, vivid gradients, Poppins

pub mod feature;
pub mod intro;
pub mod quote;
pub mod statistics;
pub mod timeline;

use super::FontFace;

pub(crate) const FONT: FontFace = FontFace {
    family: "Poppins",
    link: "https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600;700;800;900&display=swap",
};

pub(crate) const BACKGROUND: &str = "#0f0f23";
