// File: crates/chart-core/src/geometry.rs
// Summary: Plot-area rectangle derived from canvas size and insets.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    /// Area of a `width` x `height` canvas left after removing `insets`.
    pub fn inset(width: f32, height: f32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width - insets.right as f32).max(left);
        let bottom = (height - insets.bottom as f32).max(top);
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn x_range(&self) -> (f32, f32) { (self.left, self.right) }
    pub fn y_range(&self) -> (f32, f32) { (self.top, self.bottom) }
}
