use std::fmt::Write as _;

use crate::config::engine::EngineConfig;
use crate::engine::snake::SnakeAnimation;
use crate::foundation::error::{SnakeError, SnakeResult};

const CELL_RADIUS: f64 = 2.0;
const LABEL_FONT_SIZE: f64 = 12.0;
const LABEL_BASELINE_GAP: f64 = 10.0;

/// Serialize an animation as a self-contained, looping SVG document.
///
/// Consumed cells fade out through an `opacity` keyframe animation whose key times are
/// the cell's trigger and finish fractions. Every body part follows the path with
/// `animateMotion`, delayed by its lag, tail first so the head paints on top.
#[tracing::instrument(skip_all, fields(user = %anim.username))]
pub fn render_svg(anim: &SnakeAnimation, config: &EngineConfig) -> SnakeResult<String> {
    let mut out = String::with_capacity(64 * 1024);
    write_document(&mut out, anim, config)
        .map_err(|e| SnakeError::render(format!("format svg document: {e}")))?;
    tracing::debug!(bytes = out.len(), "svg rendered");
    Ok(out)
}

fn write_document(
    out: &mut String,
    anim: &SnakeAnimation,
    config: &EngineConfig,
) -> std::fmt::Result {
    let layout = &config.layout;
    let theme = config.theme;
    let width = num(layout.canvas_width());
    let height = num(layout.canvas_height());
    let dur = num(anim.timeline.total_duration);

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    writeln!(
        out,
        r#"<rect width="{width}" height="{height}" fill="{}"/>"#,
        theme.background()
    )?;
    writeln!(
        out,
        r#"<text x="{}" y="{}" fill="{}" font-family="sans-serif" font-size="{}">@{}</text>"#,
        num(layout.margin_left),
        num((layout.margin_top - LABEL_BASELINE_GAP).max(LABEL_FONT_SIZE)),
        theme.label(),
        num(LABEL_FONT_SIZE),
        escape_xml(&anim.username)
    )?;

    writeln!(out, "<g>")?;
    for cell in anim.grid.cells() {
        let level = if cell.active { cell.level.max(1) } else { 0 };
        let fill = theme.level_color(level);
        let size = num(layout.cell_size);
        write!(
            out,
            r#"<rect x="{}" y="{}" width="{size}" height="{size}" rx="{}" fill="{fill}""#,
            num(cell.x),
            num(cell.y),
            num(CELL_RADIUS)
        )?;
        match anim.timeline.get(cell.key()) {
            Some(w) => writeln!(
                out,
                r#"><animate attributeName="opacity" values="1;1;0;0" keyTimes="0;{};{};1" dur="{dur}s" repeatCount="indefinite"/></rect>"#,
                num(w.trigger),
                num(w.finish)
            )?,
            None => writeln!(out, "/>")?,
        }
    }
    writeln!(out, "</g>")?;

    let d = anim.path.svg_path_data();
    let s = config.body.segment_size;
    writeln!(out, "<g>")?;
    for seg in &anim.body {
        writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" opacity="{}"><animateMotion path="{d}" dur="{dur}s" begin="{}s" repeatCount="indefinite"/></rect>"#,
            num(-s / 2.0),
            num(-s / 2.0),
            num(s),
            num(s),
            num(CELL_RADIUS),
            seg.color,
            num(seg.opacity),
            num(seg.lag_secs)
        )?;
    }
    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")
}

/// Shortest decimal form with at most six fractional digits.
fn num(v: f64) -> String {
    let s = format!("{v:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
