use crate::config::engine::BodyConfig;
use crate::foundation::color::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// One trailing body part replaying the head's path `lag_secs` behind it.
pub struct SnakeSegment {
    /// 0 is the head.
    pub index: u32,
    /// Fill color.
    pub color: Rgb,
    /// Fill opacity in `[min_opacity, 1]`.
    pub opacity: f64,
    /// Playback delay relative to the head.
    pub lag_secs: f64,
}

/// Build the body descriptors, tail first so the head is drawn on top.
///
/// Opacity falls from 1 at the head as `1 - index / length` and never drops below
/// `min_opacity`; color ramps from `head_color` to `tail_color`.
pub fn animate_body(body: &BodyConfig) -> Vec<SnakeSegment> {
    let n = body.length;
    let span = f64::from(n.saturating_sub(1).max(1));
    let mut segments: Vec<SnakeSegment> = (0..n)
        .map(|index| {
            let i = f64::from(index);
            SnakeSegment {
                index,
                color: body.head_color.lerp(body.tail_color, i / span),
                opacity: (1.0 - i / f64::from(n)).max(body.min_opacity),
                lag_secs: i * body.lag_secs,
            }
        })
        .collect();
    segments.reverse();
    segments
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/body.rs"]
mod tests;
