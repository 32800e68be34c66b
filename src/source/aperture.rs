//! Aperture-indexed geometry tables.

use crate::polygon::Region;

/// One flash or draw inside an aperture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryEntry {
    /// The filled copper shape, if this entry produced one.
    pub solid: Option<Region<f64>>,
}

impl GeometryEntry {
    pub fn solid(region: Region<f64>) -> Self {
        Self {
            solid: Some(region),
        }
    }

    /// An entry that carries no shape (e.g. a zero-size flash).
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A named class of copper feature.
///
/// `geometry` is `None` for apertures that never produced any geometry, such
/// as unused macro definitions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aperture {
    pub geometry: Option<Vec<GeometryEntry>>,
}

impl Aperture {
    pub fn new(entries: Vec<GeometryEntry>) -> Self {
        Self {
            geometry: Some(entries),
        }
    }

    /// An aperture definition with no geometry list.
    pub fn without_geometry() -> Self {
        Self { geometry: None }
    }

    /// Shorthand for an aperture whose entries are all solid shapes.
    pub fn from_solids(solids: impl IntoIterator<Item = Region<f64>>) -> Self {
        Self::new(solids.into_iter().map(GeometryEntry::solid).collect())
    }
}

/// Apertures keyed by identifier, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApertureTable {
    apertures: Vec<(String, Aperture)>,
}

impl ApertureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an aperture, replacing any existing one with the same id in place.
    pub fn insert(&mut self, id: impl Into<String>, aperture: Aperture) {
        let id = id.into();
        match self.apertures.iter_mut().find(|(key, _)| *key == id) {
            Some((_, slot)) => *slot = aperture,
            None => self.apertures.push((id, aperture)),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Aperture> {
        self.apertures
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, aperture)| aperture)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Aperture)> + '_ {
        self.apertures.iter().map(|(id, a)| (id.as_str(), a))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.apertures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.apertures.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Aperture)> for ApertureTable {
    fn from_iter<I: IntoIterator<Item = (S, Aperture)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (id, aperture) in iter {
            table.insert(id, aperture);
        }
        table
    }
}
