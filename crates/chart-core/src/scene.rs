// File: crates/chart-core/src/scene.rs
// Summary: Renderer-agnostic scene graph of marks (circles, rects, lines, text, groups).
// Notes:
// - Nodes carry optional id/class and `data-*` attributes; these are part of the
//   output contract of the SVG writer and are ignored by the raster writer.
// - Hover content is attached per node as a `Tooltip`; the HTML page wires it up.

use crate::theme::{Color, Theme};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    pub fn as_svg(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Clone, Debug)]
pub enum Shape {
    Circle { cx: f32, cy: f32, r: f32 },
    Rect { x: f32, y: f32, width: f32, height: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Text { x: f32, y: f32, content: String, size: f32, anchor: Anchor },
    Group { children: Vec<Node> },
}

/// Hover content for a mark: a bold heading plus plain lines, and attributes
/// copied onto the tooltip element while the mark is hovered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub heading: Option<String>,
    pub lines: Vec<String>,
    pub data: Vec<(String, String)>,
}

impl Tooltip {
    pub fn new() -> Self { Self::default() }

    pub fn heading(mut self, text: impl Into<String>) -> Self {
        self.heading = Some(text.into());
        self
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// Attribute `data-<key>` set on the tooltip element on hover.
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push((key.into(), value.into()));
        self
    }

    pub fn data_value(&self, key: &str) -> Option<&str> {
        self.data.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub shape: Shape,
    pub id: Option<String>,
    pub class: Option<String>,
    pub fill: Option<Color>,
    pub stroke: Option<(Color, f32)>,
    pub translate: Option<(f32, f32)>,
    /// `data-*` attributes, keys without the `data-` prefix.
    pub data: Vec<(String, String)>,
    pub tooltip: Option<Tooltip>,
}

impl Node {
    pub fn new(shape: Shape) -> Self {
        Self { shape, id: None, class: None, fill: None, stroke: None, translate: None, data: Vec::new(), tooltip: None }
    }

    pub fn circle(cx: f32, cy: f32, r: f32) -> Self {
        Self::new(Shape::Circle { cx, cy, r })
    }

    pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Shape::Rect { x, y, width, height })
    }

    pub fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(Shape::Line { x1, y1, x2, y2 })
    }

    pub fn text(x: f32, y: f32, content: impl Into<String>, size: f32, anchor: Anchor) -> Self {
        Self::new(Shape::Text { x, y, content: content.into(), size, anchor })
    }

    pub fn group(children: Vec<Node>) -> Self {
        Self::new(Shape::Group { children })
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn fill(mut self, c: Color) -> Self {
        self.fill = Some(c);
        self
    }

    pub fn stroke(mut self, c: Color, width: f32) -> Self {
        self.stroke = Some((c, width));
        self
    }

    pub fn translate(mut self, dx: f32, dy: f32) -> Self {
        self.translate = Some((dx, dy));
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push((key.into(), value.into()));
        self
    }

    pub fn tooltip(mut self, t: Tooltip) -> Self {
        self.tooltip = Some(t);
        self
    }

    pub fn data_value(&self, key: &str) -> Option<&str> {
        self.data.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class.as_deref().map_or(false, |c| c.split_whitespace().any(|x| x == class))
    }

    pub fn children(&self) -> &[Node] {
        match &self.shape {
            Shape::Group { children } => children,
            _ => &[],
        }
    }

    fn walk<'a>(&'a self, out: &mut Vec<&'a Node>) {
        out.push(self);
        for c in self.children() { c.walk(out); }
    }
}

/// One drawing surface (an `<svg>` element or a PNG).
#[derive(Clone, Debug)]
pub struct Scene {
    pub id: String,
    pub width: f32,
    pub height: f32,
    pub background: Option<Color>,
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn new(id: impl Into<String>, width: f32, height: f32) -> Self {
        Self { id: id.into(), width, height, background: None, nodes: Vec::new() }
    }

    pub fn with_background(mut self, c: Color) -> Self {
        self.background = Some(c);
        self
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Every node, depth-first in document order.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        for n in &self.nodes { n.walk(&mut out); }
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        self.descendants().into_iter().find(|n| n.id.as_deref() == Some(id))
    }

    pub fn by_class(&self, class: &str) -> Vec<&Node> {
        self.descendants().into_iter().filter(|n| n.has_class(class)).collect()
    }

    /// Placeholder drawn in place of a chart whose data could not be loaded.
    pub fn unavailable(id: impl Into<String>, width: f32, height: f32, reason: &str, theme: &Theme) -> Self {
        let mut scene = Scene::new(id, width, height).with_background(theme.background);
        scene.push(
            Node::text(width * 0.5, height * 0.5 - 12.0, "Dataset unavailable", 22.0, Anchor::Middle)
                .with_id("error")
                .fill(theme.error_text),
        );
        scene.push(
            Node::text(width * 0.5, height * 0.5 + 16.0, reason, 13.0, Anchor::Middle)
                .with_class("error-detail")
                .fill(theme.axis_label),
        );
        scene
    }
}
