//! The visual tree produced by rendering a slide
//!
//! A tree is a flat list of positioned nodes on a fixed 1280x720 canvas.
//! Named groups mark the regions of a design (`left-panel`, `items`,
//! `items[0]`, ...) so hosts and tests can address them.

pub mod layout;
pub mod types;

pub use layout::{
    centered_rows, columns, rows, slide_bounds, text_width, wrap_text, SLIDE_HEIGHT, SLIDE_WIDTH,
};
pub use types::*;
