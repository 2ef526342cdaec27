//! Shared primitives: geometry re-exports, colors, errors and the random-source seam.

pub(crate) mod color;
pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod random;
