//! SVG renderer for visual trees
//!
//! This module takes a VisualTree and produces a standalone SVG string
//! with prefixed CSS classes on every element.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::render_svg;
