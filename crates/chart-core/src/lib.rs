// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports scales, axes, scene model and the SVG/HTML/PNG writers.

pub mod axis;
pub mod chart;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod html;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{Axis, Orient, Tick};
pub use chart::{render_to_png, render_to_png_bytes, RenderOptions};
pub use error::ChartError;
pub use geometry::PlotRect;
pub use html::HtmlPage;
pub use scale::{BandScale, LinearScale, ScaleTransform, ThresholdScale, TimeScale};
pub use scene::{Anchor, Node, Scene, Shape, Tooltip};
pub use theme::{Color, Theme};
pub use types::Insets;
