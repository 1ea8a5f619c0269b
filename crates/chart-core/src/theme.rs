// File: crates/chart-core/src/theme.rs
// Summary: Colors and light/dark theming shared by the SVG and raster writers.

use skia_safe as skia;

/// RGBA color with an optional CSS keyword used verbatim in SVG output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
    pub name: Option<&'static str>,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255, name: None }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a, name: None }
    }

    pub const fn named(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255, name: Some(name) }
    }

    /// Parse `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let h = hex.strip_prefix('#')?;
        if h.len() != 6 { return None; }
        let byte = |i: usize| u8::from_str_radix(h.get(i..i + 2)?, 16).ok();
        Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?))
    }

    pub const RED: Color = Color::named("red", 255, 0, 0);
    pub const GREEN: Color = Color::named("green", 0, 128, 0);

    pub fn to_css(&self) -> String {
        if let Some(n) = self.name { return n.to_string(); }
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f32 / 255.0)
        }
    }

    pub fn to_skia(&self) -> skia::Color {
        skia::Color::from_argb(self.a, self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub title: Color,
    pub legend_label: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
    pub error_text: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(250, 250, 252),
            axis_line: Color::rgb(60, 60, 70),
            axis_label: Color::rgb(20, 20, 30),
            tick: Color::rgb(100, 100, 110),
            title: Color::rgb(20, 20, 30),
            legend_label: Color::rgb(40, 40, 50),
            tooltip_background: Color::rgba(255, 255, 220, 240),
            tooltip_text: Color::rgb(20, 20, 30),
            error_text: Color::rgb(200, 60, 60),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            axis_line: Color::rgb(180, 180, 190),
            axis_label: Color::rgb(235, 235, 245),
            tick: Color::rgb(150, 150, 160),
            title: Color::rgb(235, 235, 245),
            legend_label: Color::rgb(210, 210, 220),
            tooltip_background: Color::rgba(40, 40, 45, 240),
            tooltip_text: Color::rgb(235, 235, 245),
            error_text: Color::rgb(220, 80, 80),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
