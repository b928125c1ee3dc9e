//! Core types for the visual tree

/// A 2D point in slide coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A bounding box representing the spatial extent of a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Check if another box lies entirely inside this one
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        const EPS: f64 = 1e-6;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.right() <= self.right() + EPS
            && other.bottom() <= self.bottom() + EPS
    }

    /// Check if this bounding box intersects another
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom
    pub fn inset(&self, dx: f64, dy: f64) -> BoundingBox {
        BoundingBox::new(
            self.x + dx,
            self.y + dy,
            (self.width - 2.0 * dx).max(0.0),
            (self.height - 2.0 * dy).max(0.0),
        )
    }

    /// Split vertically; the left part takes `fraction` of the width
    pub fn split_left(&self, fraction: f64) -> (BoundingBox, BoundingBox) {
        let left_width = self.width * fraction;
        (
            BoundingBox::new(self.x, self.y, left_width, self.height),
            BoundingBox::new(self.x + left_width, self.y, self.width - left_width, self.height),
        )
    }

    /// Cut a strip of `height` off the top; returns (strip, rest)
    pub fn take_top(&self, height: f64) -> (BoundingBox, BoundingBox) {
        let height = height.min(self.height);
        (
            BoundingBox::new(self.x, self.y, self.width, height),
            BoundingBox::new(self.x, self.y + height, self.width, self.height - height),
        )
    }

    /// Cut a strip of `height` off the bottom; returns (rest, strip)
    pub fn take_bottom(&self, height: f64) -> (BoundingBox, BoundingBox) {
        let height = height.min(self.height);
        (
            BoundingBox::new(self.x, self.y, self.width, self.height - height),
            BoundingBox::new(self.x, self.bottom() - height, self.width, height),
        )
    }

    /// A box of the given size centered on this one
    pub fn centered(&self, width: f64, height: f64) -> BoundingBox {
        let c = self.center();
        BoundingBox::new(c.x - width / 2.0, c.y - height / 2.0, width, height)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

/// How an area is filled
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(String),
    LinearGradient(Gradient),
}

/// A linear gradient with CSS angle semantics (90 = left to right)
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub angle: f64,
    /// (offset in 0..=1, color)
    pub stops: Vec<(f64, String)>,
}

impl Paint {
    pub fn solid(color: impl Into<String>) -> Self {
        Paint::Solid(color.into())
    }

    /// A gradient with evenly spaced stops
    pub fn gradient<S: AsRef<str>>(angle: f64, colors: &[S]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f64;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, c)| (i as f64 / last, c.as_ref().to_string()))
            .collect();
        Paint::LinearGradient(Gradient { angle, stops })
    }
}

impl From<&str> for Paint {
    fn from(color: &str) -> Self {
        Paint::Solid(color.to_string())
    }
}

impl From<String> for Paint {
    fn from(color: String) -> Self {
        Paint::Solid(color)
    }
}

/// Horizontal text alignment relative to the node's bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Clipping applied to an image
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Clip {
    #[default]
    None,
    Circle,
    Rounded(f64),
}

/// Resolved style properties ready for rendering
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub fill: Option<Paint>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
    pub font_size: Option<f64>,
    pub font_weight: Option<u16>,
    pub font_family: Option<String>,
    pub letter_spacing: Option<f64>,
    pub uppercase: bool,
}

/// What a node draws
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A named region containing other nodes
    Group(Vec<Node>),
    Rect {
        radius: f64,
    },
    /// A circle inscribed in the bounds
    Circle,
    /// A line from the top-left to the bottom-right corner of the bounds
    Line,
    /// Pre-wrapped text; `line_height` is a multiple of the font size
    Text {
        lines: Vec<String>,
        anchor: TextAnchor,
        line_height: f64,
    },
    Image {
        href: String,
        alt: String,
        clip: Clip,
    },
}

/// A positioned, styled element of a slide
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: Option<String>,
    pub bounds: BoundingBox,
    pub kind: NodeKind,
    pub style: Style,
}

impl Node {
    fn new(bounds: BoundingBox, kind: NodeKind) -> Self {
        Self {
            id: None,
            bounds,
            kind,
            style: Style::default(),
        }
    }

    pub fn group(id: impl Into<String>, bounds: BoundingBox, children: Vec<Node>) -> Self {
        Self::new(bounds, NodeKind::Group(children)).with_id(id)
    }

    pub fn rect(bounds: BoundingBox) -> Self {
        Self::new(bounds, NodeKind::Rect { radius: 0.0 })
    }

    pub fn rounded_rect(bounds: BoundingBox, radius: f64) -> Self {
        Self::new(bounds, NodeKind::Rect { radius })
    }

    pub fn circle(bounds: BoundingBox) -> Self {
        Self::new(bounds, NodeKind::Circle)
    }

    pub fn line(bounds: BoundingBox) -> Self {
        Self::new(bounds, NodeKind::Line)
    }

    pub fn text(bounds: BoundingBox, lines: Vec<String>, anchor: TextAnchor) -> Self {
        Self::new(
            bounds,
            NodeKind::Text {
                lines,
                anchor,
                line_height: 1.3,
            },
        )
    }

    pub fn image(
        bounds: BoundingBox,
        href: impl Into<String>,
        alt: impl Into<String>,
        clip: Clip,
    ) -> Self {
        Self::new(
            bounds,
            NodeKind::Image {
                href: href.into(),
                alt: alt.into(),
                clip,
            },
        )
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_fill(mut self, paint: impl Into<Paint>) -> Self {
        self.style.fill = Some(paint.into());
        self
    }

    pub fn with_stroke(mut self, color: impl Into<String>, width: f64) -> Self {
        self.style.stroke = Some(color.into());
        self.style.stroke_width = Some(width);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.style.opacity = Some(opacity);
        self
    }

    pub fn with_font(mut self, size: f64, weight: u16) -> Self {
        self.style.font_size = Some(size);
        self.style.font_weight = Some(weight);
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.style.font_family = Some(family.into());
        self
    }

    pub fn with_letter_spacing(mut self, spacing: f64) -> Self {
        self.style.letter_spacing = Some(spacing);
        self
    }

    pub fn with_line_height(mut self, height: f64) -> Self {
        if let NodeKind::Text { line_height, .. } = &mut self.kind {
            *line_height = height;
        }
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.style.uppercase = true;
        self
    }

    /// Child nodes of a group; empty for leaves
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Group(children) => children,
            _ => &[],
        }
    }

    /// Depth-first search for a node by id, including this one
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(id))
    }

    /// The text of a text node, lines joined with a space
    pub fn text_content(&self) -> Option<String> {
        match &self.kind {
            NodeKind::Text { lines, .. } => Some(lines.join(" ")),
            _ => None,
        }
    }

    /// All text under this node in document order
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts(&self, out: &mut Vec<String>) {
        if let Some(text) = self.text_content() {
            out.push(text);
        }
        for child in self.children() {
            child.collect_texts(out);
        }
    }

    /// Depth-first iteration over this node and its descendants
    pub fn walk(&self, visit: &mut dyn FnMut(&Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

/// The complete rendered description of one slide
#[derive(Debug, Clone, PartialEq)]
pub struct VisualTree {
    pub template_id: String,
    pub width: f64,
    pub height: f64,
    pub background: Paint,
    pub font_family: String,
    /// Webfont stylesheet URLs the host should load
    pub font_links: Vec<String>,
    pub nodes: Vec<Node>,
}

impl VisualTree {
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(0.0, 0.0, self.width, self.height)
    }

    /// Find a region by id anywhere in the tree
    pub fn find(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find_map(|n| n.find(id))
    }

    /// All text on the slide in document order
    pub fn texts(&self) -> Vec<String> {
        self.nodes.iter().flat_map(|n| n.texts()).collect()
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.texts().iter().any(|t| t == text)
    }

    pub fn walk(&self, visit: &mut dyn FnMut(&Node)) {
        for node in &self.nodes {
            node.walk(visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_left() {
        let b = BoundingBox::new(0.0, 0.0, 1000.0, 500.0);
        let (l, r) = b.split_left(0.4);
        assert_eq!(l.width, 400.0);
        assert_eq!(r.x, 400.0);
        assert_eq!(r.width, 600.0);
    }

    #[test]
    fn test_inset_and_contains() {
        let b = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let inner = b.inset(10.0, 20.0);
        assert_eq!(inner, BoundingBox::new(10.0, 20.0, 80.0, 60.0));
        assert!(b.contains_box(&inner));
        assert!(!inner.contains_box(&b));
    }

    #[test]
    fn test_gradient_stops_evenly_spaced() {
        let Paint::LinearGradient(g) = Paint::gradient(90.0, &["#000", "#888", "#fff"]) else {
            panic!("expected gradient");
        };
        assert_eq!(g.stops[0], (0.0, "#000".to_string()));
        assert_eq!(g.stops[1], (0.5, "#888".to_string()));
        assert_eq!(g.stops[2], (1.0, "#fff".to_string()));
    }

    #[test]
    fn test_find_and_texts() {
        let bounds = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let tree = Node::group(
            "outer",
            bounds,
            vec![
                Node::text(bounds, vec!["Hello".into()], TextAnchor::Start).with_id("greeting"),
                Node::group(
                    "inner",
                    bounds,
                    vec![Node::text(bounds, vec!["two".into(), "lines".into()], TextAnchor::Start)],
                ),
            ],
        );
        assert!(tree.find("inner").is_some());
        assert_eq!(
            tree.find("greeting").and_then(|n| n.text_content()),
            Some("Hello".to_string())
        );
        assert_eq!(tree.texts(), vec!["Hello", "two lines"]);
    }
}
