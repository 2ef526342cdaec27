//! Engine configuration: grid geometry, timing constants, body shape and theme.

pub(crate) mod engine;
