// File: crates/chart-core/src/svg.rs
// Summary: SVG writer for scenes; emits ids, classes, `data-*` attributes and tooltip payloads.

use std::fmt::Write as FmtWrite;

use crate::scene::{Node, Scene, Shape, Tooltip};

/// Escape text for use in XML character data and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Coordinates without trailing zeros: 60, 12.5.
fn num(v: f32) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 { "0".to_string() } else { format!("{r}") }
}

/// Tooltip markup: `<strong>heading</strong><br/>line<br/>line`.
pub fn tooltip_html(t: &Tooltip) -> String {
    let mut parts = Vec::with_capacity(t.lines.len() + 1);
    if let Some(h) = &t.heading {
        parts.push(format!("<strong>{}</strong>", escape(h)));
    }
    parts.extend(t.lines.iter().map(|l| escape(l)));
    parts.join("<br/>")
}

/// Standalone SVG document.
pub fn to_svg_document(scene: &Scene) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&to_svg(scene));
    out
}

/// The `<svg>` element for `scene`, suitable for inlining in HTML.
pub fn to_svg(scene: &Scene) -> String {
    let mut out = String::with_capacity(256 + scene.nodes.len() * 160);
    // writing into a String cannot fail
    let _ = write_scene(&mut out, scene);
    out
}

fn write_scene(out: &mut String, scene: &Scene) -> std::fmt::Result {
    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" id=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
        escape(&scene.id),
        num(scene.width),
        num(scene.height),
        num(scene.width),
        num(scene.height)
    )?;
    if let Some(bg) = scene.background {
        writeln!(out, "<rect class=\"background\" width=\"100%\" height=\"100%\" fill=\"{}\"/>", bg.to_css())?;
    }
    for n in &scene.nodes {
        write_node(out, n, 1)?;
    }
    writeln!(out, "</svg>")
}

fn write_common(out: &mut String, n: &Node) -> std::fmt::Result {
    if let Some(id) = &n.id { write!(out, " id=\"{}\"", escape(id))?; }
    if let Some(class) = &n.class { write!(out, " class=\"{}\"", escape(class))?; }
    if let Some((dx, dy)) = n.translate {
        write!(out, " transform=\"translate({}, {})\"", num(dx), num(dy))?;
    }
    if let Some(c) = n.fill { write!(out, " fill=\"{}\"", c.to_css())?; }
    if let Some((c, w)) = n.stroke {
        write!(out, " stroke=\"{}\" stroke-width=\"{}\"", c.to_css(), num(w))?;
    }
    for (k, v) in &n.data {
        write!(out, " data-{}=\"{}\"", escape(k), escape(v))?;
    }
    if let Some(t) = &n.tooltip {
        write!(out, " data-tooltip=\"{}\"", escape(&tooltip_html(t)))?;
        for (k, v) in &t.data {
            write!(out, " data-tooltip-{}=\"{}\"", escape(k), escape(v))?;
        }
    }
    Ok(())
}

fn write_node(out: &mut String, n: &Node, depth: usize) -> std::fmt::Result {
    let pad = "  ".repeat(depth);
    match &n.shape {
        Shape::Circle { cx, cy, r } => {
            write!(out, "{pad}<circle cx=\"{}\" cy=\"{}\" r=\"{}\"", num(*cx), num(*cy), num(*r))?;
            write_common(out, n)?;
            writeln!(out, "/>")
        }
        Shape::Rect { x, y, width, height } => {
            write!(
                out,
                "{pad}<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                num(*x),
                num(*y),
                num(*width),
                num(*height)
            )?;
            write_common(out, n)?;
            writeln!(out, "/>")
        }
        Shape::Line { x1, y1, x2, y2 } => {
            write!(
                out,
                "{pad}<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
                num(*x1),
                num(*y1),
                num(*x2),
                num(*y2)
            )?;
            write_common(out, n)?;
            writeln!(out, "/>")
        }
        Shape::Text { x, y, content, size, anchor } => {
            write!(
                out,
                "{pad}<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"{}\"",
                num(*x),
                num(*y),
                num(*size),
                anchor.as_svg()
            )?;
            write_common(out, n)?;
            writeln!(out, ">{}</text>", escape(content))
        }
        Shape::Group { children } => {
            write!(out, "{pad}<g")?;
            write_common(out, n)?;
            writeln!(out, ">")?;
            for c in children {
                write_node(out, c, depth + 1)?;
            }
            writeln!(out, "{pad}</g>")
        }
    }
}
