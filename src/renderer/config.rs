//! SVG output options

/// How a rendered slide is written out
///
/// The defaults produce a self-contained, readable file. Hosts that inline
/// several slides into one page turn off `standalone` and give each slide
/// its own `class_prefix` so gradient and clip ids do not collide.
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Emit the `<?xml ...?>` declaration
    pub standalone: bool,
    /// One element per line, nested regions indented
    pub pretty_print: bool,
    /// Prepended to class names and to generated `defs` ids; may be empty
    pub class_prefix: String,
    /// Emit `@import` rules for the template's webfonts
    pub embed_fonts: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            class_prefix: "st-".to_string(),
            embed_fonts: true,
        }
    }
}

impl SvgConfig {
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Leave webfont loading to the host page
    pub fn with_embed_fonts(mut self, embed: bool) -> Self {
        self.embed_fonts = embed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_self_contained() {
        let config = SvgConfig::default();
        assert!(config.standalone && config.embed_fonts);
        assert_eq!(config.class_prefix, "st-");
    }

    #[test]
    fn test_inline_config() {
        let config = SvgConfig::default()
            .with_standalone(false)
            .with_pretty_print(false)
            .with_embed_fonts(false)
            .with_class_prefix("slide-3-");

        assert!(!config.standalone);
        assert!(!config.pretty_print);
        assert!(!config.embed_fonts);
        assert_eq!(config.class_prefix, "slide-3-");
    }
}
