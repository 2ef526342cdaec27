//! Normalization of daily records into the fixed contribution grid.

pub(crate) mod builder;
