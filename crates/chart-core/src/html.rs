// File: crates/chart-core/src/html.rs
// Summary: Self-contained HTML page hosting one or more SVG scenes plus the hover tooltip.

use std::fmt::Write as FmtWrite;

use crate::scene::Scene;
use crate::svg::{escape, to_svg};
use crate::theme::Theme;

/// Id of the single tooltip element on every page.
pub const TOOLTIP_ID: &str = "tooltip";

/// Fade used when the tooltip is shown or hidden.
pub const TOOLTIP_FADE_MS: u32 = 200;

/// Shows `#tooltip` with a mark's `data-tooltip` markup on mouseover and copies
/// its `data-tooltip-*` attributes onto the tooltip as `data-*`; hides on mouseout.
const TOOLTIP_SCRIPT: &str = r#"(function () {
  var tip = document.getElementById("tooltip");
  if (!tip) { return; }
  document.querySelectorAll("[data-tooltip]").forEach(function (el) {
    el.addEventListener("mouseover", function (ev) {
      tip.innerHTML = el.getAttribute("data-tooltip");
      Array.prototype.forEach.call(el.attributes, function (a) {
        if (a.name.indexOf("data-tooltip-") === 0) {
          tip.setAttribute("data-" + a.name.slice(13), a.value);
        }
      });
      tip.style.left = (ev.pageX + 10) + "px";
      tip.style.top = (ev.pageY - 28) + "px";
      tip.style.opacity = 0.9;
    });
    el.addEventListener("mouseout", function () {
      tip.style.opacity = 0;
    });
  });
})();"#;

enum Block {
    Scene(Scene),
    Error(String),
}

pub struct HtmlPage {
    title: String,
    theme: Theme,
    blocks: Vec<Block>,
}

impl HtmlPage {
    pub fn new(title: impl Into<String>, theme: Theme) -> Self {
        Self { title: title.into(), theme, blocks: Vec::new() }
    }

    pub fn scene(mut self, scene: Scene) -> Self {
        self.blocks.push(Block::Scene(scene));
        self
    }

    /// Visible error notice (`#error`) in place of a chart.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.blocks.push(Block::Error(message.into()));
        self
    }

    pub fn render(&self) -> String {
        let mut html = String::with_capacity(64 * 1024);
        // writing into a String cannot fail
        let _ = self.write(&mut html);
        html
    }

    fn write(&self, html: &mut String) -> std::fmt::Result {
        let t = &self.theme;
        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "<meta charset=\"utf-8\"/>")?;
        writeln!(html, "<title>{}</title>", escape(&self.title))?;
        writeln!(html, "<style>")?;
        writeln!(
            html,
            "body{{font-family:Arial,Helvetica,sans-serif;margin:20px;background:{};color:{};}}",
            t.background.to_css(),
            t.axis_label.to_css()
        )?;
        writeln!(html, "svg{{display:block;margin:12px auto;}}")?;
        writeln!(
            html,
            "#{TOOLTIP_ID}{{position:absolute;opacity:0;pointer-events:none;padding:6px 8px;border-radius:4px;font-size:12px;background:{};color:{};transition:opacity {TOOLTIP_FADE_MS}ms;}}",
            t.tooltip_background.to_css(),
            t.tooltip_text.to_css()
        )?;
        writeln!(html, ".error{{color:{};font-size:18px;text-align:center;margin:40px;}}", t.error_text.to_css())?;
        writeln!(html, "</style>")?;
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        for b in &self.blocks {
            match b {
                Block::Scene(s) => html.push_str(&to_svg(s)),
                Block::Error(msg) => {
                    writeln!(html, "<div id=\"error\" class=\"error\">Dataset unavailable: {}</div>", escape(msg))?
                }
            }
        }
        writeln!(html, "<div id=\"{TOOLTIP_ID}\"></div>")?;
        writeln!(html, "<script>")?;
        writeln!(html, "{TOOLTIP_SCRIPT}")?;
        writeln!(html, "</script>")?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")
    }
}
