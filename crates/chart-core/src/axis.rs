// File: crates/chart-core/src/axis.rs
// Summary: Axis model (orientation, tick offsets and labels) and its scene representation.

use crate::scene::{Anchor, Node};
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Pixel offset along the axis.
    pub offset: f32,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub id: String,
    pub orient: Orient,
    /// Pixel extent of the domain line.
    pub range: (f32, f32),
    pub ticks: Vec<Tick>,
    pub tick_size: f32,
    pub font_size: f32,
}

impl Axis {
    pub fn new(id: impl Into<String>, orient: Orient, range: (f32, f32)) -> Self {
        Self { id: id.into(), orient, range, ticks: Vec::new(), tick_size: 6.0, font_size: 10.0 }
    }

    pub fn bottom(id: impl Into<String>, range: (f32, f32)) -> Self {
        Self::new(id, Orient::Bottom, range)
    }

    pub fn left(id: impl Into<String>, range: (f32, f32)) -> Self {
        Self::new(id, Orient::Left, range)
    }

    pub fn with_ticks<I, S>(mut self, ticks: I) -> Self
    where
        I: IntoIterator<Item = (f32, S)>,
        S: Into<String>,
    {
        self.ticks.extend(ticks.into_iter().map(|(offset, label)| Tick { offset, label: label.into() }));
        self
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }

    /// Scene group: a domain line plus one `tick` group per tick, shifted by (dx, dy).
    pub fn to_node(&self, dx: f32, dy: f32, theme: &Theme) -> Node {
        let (r0, r1) = self.range;
        let domain = match self.orient {
            Orient::Bottom => Node::line(r0, 0.0, r1, 0.0),
            Orient::Left => Node::line(0.0, r0, 0.0, r1),
        }
        .with_class("domain")
        .stroke(theme.axis_line, 1.0);

        let mut children = vec![domain];
        for t in &self.ticks {
            let (line, label, tx, ty) = match self.orient {
                Orient::Bottom => (
                    Node::line(0.0, 0.0, 0.0, self.tick_size),
                    Node::text(0.0, self.tick_size + 3.0 + self.font_size, t.label.as_str(), self.font_size, Anchor::Middle),
                    t.offset,
                    0.0,
                ),
                Orient::Left => (
                    Node::line(-self.tick_size, 0.0, 0.0, 0.0),
                    Node::text(-(self.tick_size + 3.0), self.font_size * 0.32, t.label.as_str(), self.font_size, Anchor::End),
                    0.0,
                    t.offset,
                ),
            };
            children.push(
                Node::group(vec![line.stroke(theme.tick, 1.0), label.fill(theme.axis_label)])
                    .with_class("tick")
                    .translate(tx, ty),
            );
        }
        Node::group(children).with_id(self.id.clone()).translate(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_tick_group_per_tick() {
        let axis = Axis::bottom("x-axis", (0.0, 100.0)).with_ticks([(0.0, "a"), (50.0, "b")]);
        let node = axis.to_node(0.0, 40.0, &Theme::light());
        assert_eq!(node.id.as_deref(), Some("x-axis"));
        assert_eq!(node.translate, Some((0.0, 40.0)));
        assert_eq!(node.children().iter().filter(|n| n.has_class("tick")).count(), 2);
        assert_eq!(axis.labels(), vec!["a", "b"]);
    }
}
