//! End-to-end snake generation.

pub(crate) mod snake;
