// File: crates/chart-core/src/chart.rs
// Summary: Headless PNG rendering of scenes using Skia CPU raster surfaces.

use log::debug;
use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::scene::{Node, Scene, Shape};
use crate::text::TextShaper;
use crate::theme::Color;

pub struct RenderOptions {
    /// Draw text nodes. Off gives font-independent output (snapshots).
    pub draw_labels: bool,
    /// Used when the scene has no background of its own.
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            draw_labels: true,
            background: Color::rgb(250, 250, 252),
        }
    }
}

/// Render `scene` to PNG bytes. Tooltips and `data-*` attributes have no raster form.
pub fn render_to_png_bytes(scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>> {
    let (w, h) = (scene.width.ceil().max(1.0) as i32, scene.height.ceil().max(1.0) as i32);
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or(ChartError::Surface { width: w, height: h })?;
    let canvas = surface.canvas();

    canvas.clear(scene.background.unwrap_or(opts.background).to_skia());

    let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };
    for n in &scene.nodes {
        draw_node(canvas, n, shaper.as_ref());
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(ChartError::Encode)?;
    debug!("rasterised scene '{}' ({}x{}, {} bytes)", scene.id, w, h, data.as_bytes().len());
    Ok(data.as_bytes().to_vec())
}

/// Render `scene` to a PNG file at `output_png_path`, creating parent directories.
pub fn render_to_png(
    scene: &Scene,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(scene, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn fill_paint(c: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(c.to_skia());
    paint
}

fn stroke_paint(c: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(c.to_skia());
    paint
}

fn draw_node(canvas: &skia::Canvas, n: &Node, shaper: Option<&TextShaper>) {
    canvas.save();
    if let Some((dx, dy)) = n.translate {
        canvas.translate((dx, dy));
    }
    match &n.shape {
        Shape::Circle { cx, cy, r } => {
            if let Some(c) = n.fill { canvas.draw_circle((*cx, *cy), *r, &fill_paint(c)); }
            if let Some((c, w)) = n.stroke { canvas.draw_circle((*cx, *cy), *r, &stroke_paint(c, w)); }
        }
        Shape::Rect { x, y, width, height } => {
            let rect = skia::Rect::from_xywh(*x, *y, *width, *height);
            if let Some(c) = n.fill { canvas.draw_rect(rect, &fill_paint(c)); }
            if let Some((c, w)) = n.stroke { canvas.draw_rect(rect, &stroke_paint(c, w)); }
        }
        Shape::Line { x1, y1, x2, y2 } => {
            let (c, w) = n.stroke.unwrap_or((Color::rgb(0, 0, 0), 1.0));
            canvas.draw_line((*x1, *y1), (*x2, *y2), &stroke_paint(c, w));
        }
        Shape::Text { x, y, content, size, anchor } => {
            if let Some(shaper) = shaper {
                let c = n.fill.unwrap_or(Color::rgb(0, 0, 0));
                shaper.draw(canvas, content, *x, *y, *size, c.to_skia(), *anchor);
            }
        }
        Shape::Group { children } => {
            for c in children {
                draw_node(canvas, c, shaper);
            }
        }
    }
    canvas.restore();
}
