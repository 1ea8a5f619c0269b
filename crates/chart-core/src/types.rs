// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (canvas sizes, paddings).

/// Default surface width in pixels.
pub const WIDTH: f32 = 920.0;
/// Default surface height in pixels.
pub const HEIGHT: f32 = 630.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same margin on every side.
    pub const fn uniform(p: u32) -> Self {
        Self::new(p, p, p, p)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(60)
    }
}
