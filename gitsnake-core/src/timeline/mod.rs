//! Playback timing for consumed cells and the trailing body.

pub(crate) mod body;
pub(crate) mod synth;
