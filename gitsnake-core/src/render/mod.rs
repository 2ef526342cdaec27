//! SVG serialization and PNG previews.

pub(crate) mod raster;
pub(crate) mod svg;
