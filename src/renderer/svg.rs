//! SVG generation from visual trees

use crate::tree::{
    BoundingBox, Clip, Gradient, Node, NodeKind, Paint, Style, TextAnchor, VisualTree,
};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    defs: Vec<String>,
    gradients: Vec<Gradient>,
    clip_count: usize,
    styles: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            defs: vec![],
            gradients: vec![],
            clip_count: 0,
            styles: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add `@import` rules for webfont stylesheets
    pub fn add_font_imports(&mut self, links: &[String]) {
        for link in links {
            self.styles
                .push(format!("@import url('{}');", escape_xml(link)));
        }
    }

    /// Resolve a paint to an attribute value, registering gradients in defs
    pub fn paint_ref(&mut self, paint: &Paint) -> String {
        match paint {
            Paint::Solid(color) => escape_xml(color),
            Paint::LinearGradient(gradient) => {
                let prefix = self.prefix();
                let index = match self.gradients.iter().position(|g| g == gradient) {
                    Some(index) => index,
                    None => {
                        let index = self.gradients.len();
                        self.defs
                            .push(gradient_def(&format!("{prefix}gradient-{index}"), gradient));
                        self.gradients.push(gradient.clone());
                        index
                    }
                };
                format!("url(#{prefix}gradient-{index})")
            }
        }
    }

    /// Register a clip path for an image and return its reference
    fn clip_ref(&mut self, bounds: &BoundingBox, clip: Clip) -> Option<String> {
        let shape = match clip {
            Clip::None => return None,
            Clip::Circle => {
                let c = bounds.center();
                format!(
                    r#"<circle cx="{}" cy="{}" r="{}"/>"#,
                    fmt_num(c.x),
                    fmt_num(c.y),
                    fmt_num(bounds.width.min(bounds.height) / 2.0)
                )
            }
            Clip::Rounded(radius) => format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}"/>"#,
                fmt_num(bounds.x),
                fmt_num(bounds.y),
                fmt_num(bounds.width),
                fmt_num(bounds.height),
                fmt_num(radius)
            ),
        };
        let id = format!("{}clip-{}", self.prefix(), self.clip_count);
        self.clip_count += 1;
        self.defs
            .push(format!(r#"<clipPath id="{id}">{shape}</clipPath>"#));
        Some(format!("url(#{id})"))
    }

    fn class_attr(&self, kind: &str) -> String {
        format!(r#" class="{}{}""#, self.prefix(), kind)
    }

    fn push(&mut self, element: String) {
        let line = format!("{}{}", self.indent_str(), element);
        self.elements.push(line);
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, id: Option<&str>, bounds: &BoundingBox, radius: f64, attrs: &str) {
        let rx = if radius > 0.0 {
            format!(r#" rx="{}""#, fmt_num(radius))
        } else {
            String::new()
        };
        let element = format!(
            r#"<rect{}{} x="{}" y="{}" width="{}" height="{}"{}{}/>"#,
            id_attr(id),
            self.class_attr("rect"),
            fmt_num(bounds.x),
            fmt_num(bounds.y),
            fmt_num(bounds.width),
            fmt_num(bounds.height),
            rx,
            attrs
        );
        self.push(element);
    }

    /// Add a circle inscribed in the bounds
    pub fn add_circle(&mut self, id: Option<&str>, bounds: &BoundingBox, attrs: &str) {
        let c = bounds.center();
        let element = format!(
            r#"<circle{}{} cx="{}" cy="{}" r="{}"{}/>"#,
            id_attr(id),
            self.class_attr("circle"),
            fmt_num(c.x),
            fmt_num(c.y),
            fmt_num(bounds.width.min(bounds.height) / 2.0),
            attrs
        );
        self.push(element);
    }

    /// Add a line along the bounds' diagonal
    pub fn add_line(&mut self, id: Option<&str>, bounds: &BoundingBox, attrs: &str) {
        let element = format!(
            r#"<line{}{} x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            id_attr(id),
            self.class_attr("line"),
            fmt_num(bounds.x),
            fmt_num(bounds.y),
            fmt_num(bounds.right()),
            fmt_num(bounds.bottom()),
            attrs
        );
        self.push(element);
    }

    /// Add a text element with one tspan per line
    #[allow(clippy::too_many_arguments)]
    pub fn add_text(
        &mut self,
        id: Option<&str>,
        bounds: &BoundingBox,
        lines: &[String],
        anchor: TextAnchor,
        line_height: f64,
        font_size: f64,
        attrs: &str,
    ) {
        let (x, anchor_str) = match anchor {
            TextAnchor::Start => (bounds.x, "start"),
            TextAnchor::Middle => (bounds.center().x, "middle"),
            TextAnchor::End => (bounds.right(), "end"),
        };
        let x = fmt_num(x);
        let y = fmt_num(bounds.y + font_size);
        let spans = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let dy = if i == 0 { 0.0 } else { font_size * line_height };
                format!(
                    r#"<tspan x="{}" dy="{}">{}</tspan>"#,
                    x,
                    fmt_num(dy),
                    escape_xml(line)
                )
            })
            .collect::<String>();
        let element = format!(
            r#"<text{}{} x="{}" y="{}" text-anchor="{}"{}>{}</text>"#,
            id_attr(id),
            self.class_attr("text"),
            x,
            y,
            anchor_str,
            attrs,
            spans
        );
        self.push(element);
    }

    /// Add an image, optionally clipped
    pub fn add_image(
        &mut self,
        id: Option<&str>,
        bounds: &BoundingBox,
        href: &str,
        alt: &str,
        clip: Clip,
        attrs: &str,
    ) {
        let clip_attr = self
            .clip_ref(bounds, clip)
            .map(|r| format!(r#" clip-path="{r}""#))
            .unwrap_or_default();
        let title = if alt.is_empty() {
            String::new()
        } else {
            format!("<title>{}</title>", escape_xml(alt))
        };
        let element = format!(
            r#"<image{}{} x="{}" y="{}" width="{}" height="{}" href="{}" preserveAspectRatio="xMidYMid slice"{}{}>{}</image>"#,
            id_attr(id),
            self.class_attr("image"),
            fmt_num(bounds.x),
            fmt_num(bounds.y),
            fmt_num(bounds.width),
            fmt_num(bounds.height),
            escape_xml(href),
            clip_attr,
            attrs,
            title
        );
        self.push(element);
    }

    /// Start a group element for a named region
    pub fn start_group(&mut self, id: Option<&str>, attrs: &str) {
        let element = format!("<g{}{}{}>", id_attr(id), self.class_attr("region"), attrs);
        self.push(element);
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.push("</g>".to_string());
    }

    /// Build the final SVG string
    pub fn build(self, width: f64, height: f64, font_family: &str) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{f}">"#,
            w = fmt_num(width),
            h = fmt_num(height),
            f = escape_xml(font_family),
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        if !self.defs.is_empty() {
            svg.push_str("  <defs>");
            svg.push_str(nl);
            for def in &self.defs {
                svg.push_str("    ");
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str("  </defs>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a visual tree to an SVG string
pub fn render_svg(tree: &VisualTree, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    if config.embed_fonts {
        builder.add_font_imports(&tree.font_links);
    }

    let background = builder.paint_ref(&tree.background);
    builder.add_rect(
        Some("background"),
        &tree.bounds(),
        0.0,
        &format!(r#" fill="{}""#, background),
    );

    for node in &tree.nodes {
        render_node(node, &mut builder);
    }

    builder.build(tree.width, tree.height, &tree.font_family)
}

/// Render a single node to the builder
fn render_node(node: &Node, builder: &mut SvgBuilder) {
    let id = node.id.as_deref();

    match &node.kind {
        NodeKind::Group(children) => {
            let attrs = format_styles(&node.style, builder);
            builder.start_group(id, &attrs);
            for child in children {
                render_node(child, builder);
            }
            builder.end_group();
        }
        NodeKind::Rect { radius } => {
            let attrs = format_shape_styles(&node.style, builder);
            builder.add_rect(id, &node.bounds, *radius, &attrs);
        }
        NodeKind::Circle => {
            let attrs = format_shape_styles(&node.style, builder);
            builder.add_circle(id, &node.bounds, &attrs);
        }
        NodeKind::Line => {
            let mut attrs = format_styles(&node.style, builder);
            if node.style.stroke.is_none() {
                attrs.push_str(r##" stroke="#000000""##);
            }
            builder.add_line(id, &node.bounds, &attrs);
        }
        NodeKind::Text {
            lines,
            anchor,
            line_height,
        } => {
            let font_size = node.style.font_size.unwrap_or(16.0);
            let attrs = format_text_styles(&node.style, builder);
            builder.add_text(id, &node.bounds, lines, *anchor, *line_height, font_size, &attrs);
        }
        NodeKind::Image { href, alt, clip } => {
            let attrs = format_styles(&node.style, builder);
            builder.add_image(id, &node.bounds, href, alt, *clip, &attrs);
        }
    }
}

/// Format fill, stroke and opacity as SVG attributes
fn format_styles(style: &Style, builder: &mut SvgBuilder) -> String {
    let mut parts = vec![];
    if let Some(fill) = &style.fill {
        parts.push(format!(r#" fill="{}""#, builder.paint_ref(fill)));
    }
    if let Some(stroke) = &style.stroke {
        parts.push(format!(r#" stroke="{}""#, escape_xml(stroke)));
    }
    if let Some(sw) = style.stroke_width {
        parts.push(format!(r#" stroke-width="{}""#, fmt_num(sw)));
    }
    if let Some(op) = style.opacity {
        if op < 1.0 {
            parts.push(format!(r#" opacity="{}""#, fmt_num(op)));
        }
    }
    parts.join("")
}

/// Shapes without a fill are outlines, not black blobs
fn format_shape_styles(style: &Style, builder: &mut SvgBuilder) -> String {
    let mut attrs = format_styles(style, builder);
    if style.fill.is_none() {
        attrs.push_str(r#" fill="none""#);
    }
    attrs
}

/// Format text styles (paint plus font properties)
fn format_text_styles(style: &Style, builder: &mut SvgBuilder) -> String {
    let mut attrs = format_styles(style, builder);
    if let Some(size) = style.font_size {
        attrs.push_str(&format!(r#" font-size="{}""#, fmt_num(size)));
    }
    if let Some(weight) = style.font_weight {
        attrs.push_str(&format!(r#" font-weight="{}""#, weight));
    }
    if let Some(family) = &style.font_family {
        attrs.push_str(&format!(r#" font-family="{}""#, escape_xml(family)));
    }
    if let Some(spacing) = style.letter_spacing {
        attrs.push_str(&format!(r#" letter-spacing="{}""#, fmt_num(spacing)));
    }
    if style.uppercase {
        attrs.push_str(r#" style="text-transform:uppercase""#);
    }
    attrs
}

fn gradient_def(id: &str, gradient: &Gradient) -> String {
    // CSS angles: 0deg points up, 90deg points right
    let theta = gradient.angle.to_radians();
    let (dx, dy) = (theta.sin(), -theta.cos());
    let stops = gradient
        .stops
        .iter()
        .map(|(offset, color)| {
            format!(
                r#"<stop offset="{}" stop-color="{}"/>"#,
                fmt_num(*offset),
                escape_xml(color)
            )
        })
        .collect::<String>();
    format!(
        r#"<linearGradient id="{}" x1="{}" y1="{}" x2="{}" y2="{}">{}</linearGradient>"#,
        id,
        fmt_num(0.5 - dx / 2.0),
        fmt_num(0.5 - dy / 2.0),
        fmt_num(0.5 + dx / 2.0),
        fmt_num(0.5 + dy / 2.0),
        stops
    )
}

fn id_attr(id: Option<&str>) -> String {
    id.map(|i| format!(r#" id="{}""#, escape_xml(i)))
        .unwrap_or_default()
}

/// Format a coordinate with at most three decimals
fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::slide_bounds;

    fn tree(nodes: Vec<Node>) -> VisualTree {
        VisualTree {
            template_id: "test".to_string(),
            width: 1280.0,
            height: 720.0,
            background: Paint::solid("#ffffff"),
            font_family: "'Source Sans Pro'".to_string(),
            font_links: vec!["https://fonts.example/css?family=A&display=swap".to_string()],
            nodes,
        }
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(1280.0), "1280");
        assert_eq!(fmt_num(0.14644660940672627), "0.146");
        assert_eq!(fmt_num(-0.0000001), "0");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("Q&A Session"), "Q&amp;A Session");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_render_empty_tree() {
        let svg = render_svg(&tree(vec![]), &SvgConfig::default());
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 1280 720""#));
        assert!(svg.contains(r#"font-family="&apos;Source Sans Pro&apos;""#));
        assert!(svg.contains(
            "@import url('https://fonts.example/css?family=A&amp;display=swap');"
        ));
        assert!(svg.contains(r##"id="background""##));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_render_text_lines() {
        let bounds = BoundingBox::new(10.0, 20.0, 300.0, 80.0);
        let node = Node::text(bounds, vec!["First".into(), "Second".into()], TextAnchor::Middle)
            .with_font(20.0, 700)
            .with_fill("#111111");
        let svg = render_svg(&tree(vec![node]), &SvgConfig::default());
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains(r#"<tspan x="160" dy="0">First</tspan>"#));
        assert!(svg.contains(r#"<tspan x="160" dy="26">Second</tspan>"#));
        assert!(svg.contains(r#"font-weight="700""#));
    }

    #[test]
    fn test_gradients_deduplicated() {
        let bounds = slide_bounds();
        let paint = Paint::gradient(135.0, &["#667eea", "#764ba2"]);
        let nodes = vec![
            Node::rect(bounds).with_fill(paint.clone()),
            Node::rect(bounds).with_fill(paint),
        ];
        let svg = render_svg(&tree(nodes), &SvgConfig::default());
        assert_eq!(svg.matches("<linearGradient").count(), 1);
        assert_eq!(svg.matches("url(#st-gradient-0)").count(), 2);
    }

    #[test]
    fn test_circle_clipped_image() {
        let bounds = BoundingBox::new(0.0, 0.0, 144.0, 144.0);
        let node = Node::image(bounds, "https://img/p.jpg", "Portrait", Clip::Circle);
        let svg = render_svg(&tree(vec![node]), &SvgConfig::default());
        assert!(svg.contains(
            r#"<clipPath id="st-clip-0"><circle cx="72" cy="72" r="72"/></clipPath>"#
        ));
        assert!(svg.contains(r#"clip-path="url(#st-clip-0)""#));
        assert!(svg.contains("<title>Portrait</title>"));
    }

    #[test]
    fn test_group_nesting_and_prefix() {
        let bounds = slide_bounds();
        let node = Node::group("items", bounds, vec![Node::circle(bounds).with_fill("#1e3a8a")]);
        let config = SvgConfig::default().with_class_prefix("x-").with_pretty_print(false);
        let svg = render_svg(&tree(vec![node]), &config);
        assert!(svg.contains(r#"<g id="items" class="x-region">"#));
        assert!(svg.contains(r#"class="x-circle""#));
        assert!(!svg.contains('\n'));
    }

    #[test]
    fn test_fonts_can_be_omitted() {
        let config = SvgConfig::default().with_embed_fonts(false);
        let svg = render_svg(&tree(vec![]), &config);
        assert!(!svg.contains("@import"));
    }
}
