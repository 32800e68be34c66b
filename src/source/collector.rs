//! Extraction of raw features from a source object.

use super::object::HasApertureGeometry;
use crate::error::ScanError;
use crate::polygon::{is_valid, Region};
use crate::scan::CancellationToken;

/// One valid copper shape and the aperture it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub aperture: String,
    pub region: Region<f64>,
}

impl Feature {
    pub fn new(aperture: impl Into<String>, region: Region<f64>) -> Self {
        Self {
            aperture: aperture.into(),
            region,
        }
    }
}

/// Pulls valid solid shapes out of an aperture table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryCollector {
    tolerance: f64,
}

impl Default for GeometryCollector {
    fn default() -> Self {
        Self::new(1e-12)
    }
}

impl GeometryCollector {
    /// `tolerance` is the area below which a shape counts as empty.
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Collects every valid solid, in aperture then entry order.
    ///
    /// Entries without a shape and shapes that fail validation are skipped
    /// silently.
    ///
    /// # Errors
    ///
    /// - [`ScanError::NotFound`] if `source` is `None`
    /// - [`ScanError::InvalidInput`] if the source has no aperture table
    pub fn collect(&self, source: Option<&dyn HasApertureGeometry>) -> Result<Vec<Feature>, ScanError> {
        self.collect_observed(source, &CancellationToken::new(), |_| {})
    }

    /// Like [`collect`](Self::collect), but polls `cancel` before every entry
    /// and calls `on_aperture` with the id of each aperture that has a
    /// geometry list, before its entries are read.
    pub fn collect_observed<P>(
        &self,
        source: Option<&dyn HasApertureGeometry>,
        cancel: &CancellationToken,
        mut on_aperture: P,
    ) -> Result<Vec<Feature>, ScanError>
    where
        P: FnMut(&str),
    {
        let source = source.ok_or(ScanError::NotFound)?;
        let table = source
            .aperture_table()
            .ok_or_else(|| ScanError::InvalidInput(source.name().to_string()))?;

        let mut features = Vec::new();
        let mut skipped = 0usize;

        for (id, aperture) in table.iter() {
            let entries = match &aperture.geometry {
                Some(entries) => entries,
                None => continue,
            };
            on_aperture(id);

            for entry in entries {
                if cancel.is_cancelled() {
                    return Err(ScanError::Cancelled);
                }

                match &entry.solid {
                    Some(solid) if is_valid(solid, self.tolerance) => {
                        features.push(Feature::new(id, solid.clone()));
                    }
                    Some(_) => skipped += 1,
                    None => {}
                }
            }
        }

        log::debug!(
            "collected {} features from `{}` ({} invalid shapes skipped)",
            features.len(),
            source.name(),
            skipped
        );

        Ok(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Polygon;
    use crate::primitives::Point2;
    use crate::source::{Aperture, ApertureTable, GeometryEntry, GeometryObject, GerberObject};

    fn square(x: f64) -> Region<f64> {
        Region::rectangle(Point2::new(x, 0.0), Point2::new(x + 1.0, 1.0))
    }

    fn bowtie() -> Region<f64> {
        Region::from_exterior(Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        ]))
    }

    fn sliver() -> Region<f64> {
        Region::from_exterior(Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ]))
    }

    fn gerber() -> GerberObject {
        let table: ApertureTable = vec![
            (
                "D11",
                Aperture::new(vec![
                    GeometryEntry::solid(square(0.0)),
                    GeometryEntry::empty(),
                    GeometryEntry::solid(bowtie()),
                    GeometryEntry::solid(square(2.0)),
                ]),
            ),
            ("D12", Aperture::without_geometry()),
            ("D10", Aperture::new(vec![GeometryEntry::solid(sliver()), GeometryEntry::solid(square(4.0))])),
        ]
        .into_iter()
        .collect();
        GerberObject::new("top_copper.gbr", table)
    }

    #[test]
    fn test_no_source_is_not_found() {
        let result = GeometryCollector::default().collect(None);
        assert_eq!(result, Err(ScanError::NotFound));
    }

    #[test]
    fn test_non_aperture_source_is_invalid_input() {
        let geometry = GeometryObject::new("paths", vec![square(0.0)]);
        let result = GeometryCollector::default().collect(Some(&geometry));
        assert_eq!(result, Err(ScanError::InvalidInput("paths".into())));
    }

    #[test]
    fn test_skips_missing_and_invalid_entries() {
        let source = gerber();
        let features = GeometryCollector::default().collect(Some(&source)).unwrap();

        let apertures: Vec<&str> = features.iter().map(|f| f.aperture.as_str()).collect();
        assert_eq!(apertures, vec!["D11", "D11", "D10"]);
        assert_eq!(features[0].region, square(0.0));
        assert_eq!(features[1].region, square(2.0));
        assert_eq!(features[2].region, square(4.0));
    }

    #[test]
    fn test_empty_table() {
        let source = GerberObject::new("blank", ApertureTable::new());
        let features = GeometryCollector::default().collect(Some(&source)).unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn test_notifies_apertures_with_geometry_only() {
        let source = gerber();
        let mut seen = Vec::new();
        GeometryCollector::default()
            .collect_observed(Some(&source), &CancellationToken::new(), |id| seen.push(id.to_string()))
            .unwrap();
        assert_eq!(seen, vec!["D11", "D10"]);
    }

    #[test]
    fn test_cancelled_during_collection() {
        let source = gerber();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = GeometryCollector::default().collect_observed(Some(&source), &cancel, |_| {});
        assert_eq!(result, Err(ScanError::Cancelled));
    }
}
