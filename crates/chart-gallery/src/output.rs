// File: crates/chart-gallery/src/output.rs
// Summary: Writes rendered charts (or the "dataset unavailable" state) as HTML, SVG or PNG files.

use std::path::{Path, PathBuf};

use chart_core::{render_to_png, svg, HtmlPage, RenderOptions, Scene, Theme};
use clap::ValueEnum;
use log::debug;

use crate::error::RenderError;
use crate::session::RenderOutput;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Interactive page with tooltips.
    Html,
    /// One SVG file per drawing surface.
    Svg,
    /// Static raster, one PNG per drawing surface.
    Png,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Svg => "svg",
            Format::Png => "png",
        }
    }
}

pub struct OutputOptions<'a> {
    pub out_dir: &'a Path,
    pub format: Format,
    pub theme: &'a Theme,
    pub draw_labels: bool,
}

fn write_file(path: &Path, contents: &str) -> Result<(), RenderError> {
    std::fs::write(path, contents).map_err(|source| RenderError::Write { path: path.to_path_buf(), source })
}

/// `<stem>.<ext>` for the first surface, `<stem>-<id>.<ext>` for the rest.
fn scene_path(opts: &OutputOptions<'_>, stem: &str, index: usize, scene: &Scene) -> PathBuf {
    let ext = opts.format.extension();
    if index == 0 {
        opts.out_dir.join(format!("{stem}.{ext}"))
    } else {
        opts.out_dir.join(format!("{stem}-{}.{ext}", scene.id))
    }
}

fn write_scenes(opts: &OutputOptions<'_>, stem: &str, title: &str, scenes: &[Scene]) -> Result<Vec<PathBuf>, RenderError> {
    std::fs::create_dir_all(opts.out_dir)
        .map_err(|source| RenderError::Write { path: opts.out_dir.to_path_buf(), source })?;
    match opts.format {
        Format::Html => {
            let page = scenes
                .iter()
                .cloned()
                .fold(HtmlPage::new(title, *opts.theme), |page, s| page.scene(s));
            let path = opts.out_dir.join(format!("{stem}.html"));
            write_file(&path, &page.render())?;
            Ok(vec![path])
        }
        Format::Svg => scenes
            .iter()
            .enumerate()
            .map(|(i, s)| -> Result<PathBuf, RenderError> {
                let path = scene_path(opts, stem, i, s);
                write_file(&path, &svg::to_svg_document(s))?;
                Ok(path)
            })
            .collect(),
        Format::Png => {
            let render_opts = RenderOptions { draw_labels: opts.draw_labels, background: opts.theme.background };
            scenes
                .iter()
                .enumerate()
                .map(|(i, s)| -> Result<PathBuf, RenderError> {
                    let path = scene_path(opts, stem, i, s);
                    render_to_png(s, &render_opts, &path)?;
                    Ok(path)
                })
                .collect()
        }
    }
}

pub fn write_output(opts: &OutputOptions<'_>, stem: &str, output: &RenderOutput) -> Result<Vec<PathBuf>, RenderError> {
    let files = write_scenes(opts, stem, &output.title, &output.scenes)?;
    debug!("{stem}: wrote {} file(s)", files.len());
    Ok(files)
}

/// Error state written in place of the chart.
pub fn write_unavailable(
    opts: &OutputOptions<'_>,
    stem: &str,
    title: &str,
    size: (f32, f32),
    reason: &str,
) -> Result<Vec<PathBuf>, RenderError> {
    match opts.format {
        Format::Html => {
            std::fs::create_dir_all(opts.out_dir)
                .map_err(|source| RenderError::Write { path: opts.out_dir.to_path_buf(), source })?;
            let path = opts.out_dir.join(format!("{stem}.html"));
            write_file(&path, &HtmlPage::new(title, *opts.theme).error(reason).render())?;
            Ok(vec![path])
        }
        Format::Svg | Format::Png => {
            let scene = Scene::unavailable(stem, size.0, size.1, reason, opts.theme);
            write_scenes(opts, stem, title, &[scene])
        }
    }
}
