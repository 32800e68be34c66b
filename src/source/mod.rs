//! Geometry sources and feature collection.
//!
//! A source is anything implementing [`HasApertureGeometry`]. The
//! [`GeometryCollector`] walks its [`ApertureTable`] and returns the valid
//! solid shapes as [`Feature`]s.

mod aperture;
mod collector;
mod object;

pub use aperture::{Aperture, ApertureTable, GeometryEntry};
pub use collector::{Feature, GeometryCollector};
pub use object::{GeometryObject, GerberObject, HasApertureGeometry};
