use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{SnakeError, SnakeResult};

const MAX_DIM: u32 = 16_384;

/// Parse SVG text into a `usvg` tree.
pub fn parse_svg(svg: &str) -> SnakeResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize the static first frame of `tree` at `scale` into straight-alpha RGBA8.
///
/// Animation elements are ignored by the rasterizer, so every cell is drawn and the
/// body sits at its initial position.
pub fn rasterize_svg(tree: &usvg::Tree, scale: f32) -> SnakeResult<image::RgbaImage> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(SnakeError::render("raster scale must be finite and > 0"));
    }
    let size = tree.size();
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let height = (size.height() * scale).ceil().max(1.0) as u32;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(SnakeError::render(format!(
            "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| SnakeError::render("failed to allocate pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(tree, xform, &mut pixmap.as_mut());

    let mut rgba = pixmap.take();
    demultiply_rgba8_in_place(&mut rgba);
    image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| SnakeError::render("pixmap size does not match image buffer"))
}

/// Encode `img` as PNG at `path`, creating parent directories.
pub fn write_png(img: &image::RgbaImage, path: &Path) -> SnakeResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Parse, rasterize and write an SVG document as a PNG preview. Returns the pixel size.
#[tracing::instrument(skip(svg))]
pub fn render_preview_png(svg: &str, scale: f32, path: &Path) -> SnakeResult<(u32, u32)> {
    let tree = parse_svg(svg)?;
    let img = rasterize_svg(&tree, scale)?;
    write_png(&img, path)?;
    tracing::info!(width = img.width(), height = img.height(), "preview written");
    Ok(img.dimensions())
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
