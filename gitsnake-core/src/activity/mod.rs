//! Daily contribution records and the sources that provide them.

pub(crate) mod model;
pub(crate) mod source;
