//! Slide Templates - a catalog of schema-validated presentation slides
//!
//! Every template pairs a field schema with a pure render function that maps
//! partial slide data to a fixed 1280x720 visual tree. Absent fields fall
//! back to the schema defaults, and the tree serializes to SVG.
//!
//! # Example
//!
//! ```rust
//! use slide_templates::render;
//! use serde_json::json;
//!
//! let svg = render("corporate-agenda-slide", Some(&json!({ "title": "Today" }))).unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("Today"));
//! ```

pub mod assets;
pub mod error;
pub mod registry;
pub mod renderer;
pub mod schema;
pub mod templates;
pub mod theme;
pub mod tree;

pub use assets::{IconRef, ImageRef};
pub use error::{FieldPath, ValidationError, ValidationErrorKind};
pub use registry::{RegistryError, TemplateRegistry};
pub use renderer::{render_svg, SvgConfig};
pub use schema::{FieldKind, FieldSpec, Schema};
pub use templates::SlideTemplate;
pub use theme::{Theme, ThemeError, ThemeVar};
pub use tree::VisualTree;

use std::sync::OnceLock;

use serde_json::Value;
use thiserror::Error;

use error::format_validation_errors;
use registry::format_suggestions;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// No template with this id
    #[error("unknown template: {id}{}", format_suggestions(.suggestions))]
    UnknownTemplate { id: String, suggestions: Vec<String> },

    /// Data failed schema validation
    #[error("invalid data for {id}: {}", format_validation_errors(.errors))]
    Invalid {
        id: String,
        errors: Vec<ValidationError>,
    },

    /// Error while building a registry
    #[error(transparent)]
    Registry(RegistryError),
}

impl From<RegistryError> for RenderError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { id, suggestions } => {
                RenderError::UnknownTemplate { id, suggestions }
            }
            other => RenderError::Registry(other),
        }
    }
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Theme variables overriding template colors and fonts
    pub theme: Theme,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }
}

/// The built-in catalog, registered once per process
pub fn catalog() -> &'static TemplateRegistry {
    static CATALOG: OnceLock<TemplateRegistry> = OnceLock::new();
    CATALOG.get_or_init(|| {
        TemplateRegistry::builtin().expect("built-in template ids are unique")
    })
}

/// Render slide data to SVG with default configuration
///
/// `None` (or `null`, or `{}`) renders the template's defaults. Data is
/// not validated; use [`render_validated`] to reject out-of-bound input.
pub fn render(id: &str, data: Option<&Value>) -> Result<String, RenderError> {
    render_with_config(id, data, RenderConfig::default())
}

/// Render slide data to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use slide_templates::{render_with_config, RenderConfig, SvgConfig, Theme, ThemeVar};
///
/// let config = RenderConfig::new()
///     .with_theme(Theme::new().with(ThemeVar::PrimaryAccent, "#0f766e"))
///     .with_svg(SvgConfig::default().with_standalone(false));
///
/// let svg = render_with_config("corporate-agenda-slide", None, config).unwrap();
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("#0f766e"));
/// ```
pub fn render_with_config(
    id: &str,
    data: Option<&Value>,
    config: RenderConfig,
) -> Result<String, RenderError> {
    let tree = render_tree(id, data, &config.theme)?;
    Ok(render_svg(&tree, &config.svg))
}

/// Validate slide data, then render it to SVG
pub fn render_validated(
    id: &str,
    data: &Value,
    config: RenderConfig,
) -> Result<String, RenderError> {
    validate(id, data)?;
    render_with_config(id, Some(data), config)
}

/// Render slide data to a visual tree
pub fn render_tree(
    id: &str,
    data: Option<&Value>,
    theme: &Theme,
) -> Result<VisualTree, RenderError> {
    let template = catalog().lookup(id)?;
    Ok(template.render(data, theme))
}

/// Validate slide data against a template's schema
pub fn validate(id: &str, data: &Value) -> Result<(), RenderError> {
    let template = catalog().lookup(id)?;
    template
        .validate(data)
        .map_err(|errors| RenderError::Invalid {
            id: id.to_string(),
            errors,
        })
}
