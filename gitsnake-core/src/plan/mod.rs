//! Visiting order, axis-aligned routing and first-crossing bookkeeping.

pub(crate) mod collision;
pub(crate) mod path;
pub(crate) mod shuffle;
