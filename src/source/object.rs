//! Source objects that can supply copper geometry.

use super::aperture::ApertureTable;
use crate::polygon::Region;

/// Capability of exposing an aperture-indexed geometry table.
///
/// Objects that hold geometry in some other shape return `None` from
/// [`aperture_table`](Self::aperture_table) and are rejected by the collector.
pub trait HasApertureGeometry {
    /// Display name used in status messages.
    fn name(&self) -> &str;

    fn aperture_table(&self) -> Option<&ApertureTable>;
}

/// A parsed Gerber layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GerberObject {
    pub name: String,
    pub apertures: ApertureTable,
}

impl GerberObject {
    pub fn new(name: impl Into<String>, apertures: ApertureTable) -> Self {
        Self {
            name: name.into(),
            apertures,
        }
    }
}

impl HasApertureGeometry for GerberObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn aperture_table(&self) -> Option<&ApertureTable> {
        Some(&self.apertures)
    }
}

/// Plain geometry (e.g. generated toolpaths) with no aperture structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryObject {
    pub name: String,
    pub shapes: Vec<Region<f64>>,
}

impl GeometryObject {
    pub fn new(name: impl Into<String>, shapes: Vec<Region<f64>>) -> Self {
        Self {
            name: name.into(),
            shapes,
        }
    }
}

impl HasApertureGeometry for GeometryObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn aperture_table(&self) -> Option<&ApertureTable> {
        None
    }
}
