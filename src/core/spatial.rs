//! Spatial-Index (KD-Tree) für schnelle Marker-Abfragen.

use std::collections::HashMap;

use kiddo::{KdTree, SquaredEuclidean};

use super::{GeoPoint, PoiMarker, EARTH_RADIUS_KM};

/// Kilometer pro Breitengrad (R * pi / 180).
const KM_PER_DEGREE: f64 = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Markers
    pub marker_id: u64,
    /// Distanz zum Suchpunkt in Kilometern (equirektangulare Näherung)
    pub distance_km: f64,
}

/// Read-only Spatial-Index über allen Markern eines Stores.
///
/// Die Koordinaten werden equirektangular in ein lokales km-Raster
/// projiziert (Längengrad mit cos(Breite) skaliert). Für stadt- bis
/// landesweite Datensätze ausreichend genau; der Umkreisfilter selbst
/// rechnet unabhängig davon mit exakter Haversine-Distanz.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    marker_ids: Vec<u64>,
    positions: HashMap<u64, GeoPoint>,
}

/// Projiziert eine Koordinate ins lokale km-Raster.
fn project(point: GeoPoint) -> [f64; 2] {
    [
        point.lat * KM_PER_DEGREE,
        point.lon * KM_PER_DEGREE * point.lat.to_radians().cos(),
    ]
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            marker_ids: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Markern.
    /// Marker mit nicht-endlicher Position werden übersprungen: NaN im
    /// KD-Tree würde jede Abfrage vergiften.
    pub fn from_markers(markers: &[PoiMarker]) -> Self {
        let indexable: Vec<&PoiMarker> =
            markers.iter().filter(|m| m.position.is_finite()).collect();

        let marker_ids: Vec<u64> = indexable.iter().map(|m| m.id).collect();
        let entries: Vec<[f64; 2]> = indexable.iter().map(|m| project(m.position)).collect();
        let tree: KdTree<f64, 2> = (&entries).into();

        let positions = indexable.iter().map(|m| (m.id, m.position)).collect();

        Self {
            tree,
            marker_ids,
            positions,
        }
    }

    /// Gibt die Anzahl indexierter Marker zurück.
    pub fn len(&self) -> usize {
        self.marker_ids.len()
    }

    /// Gibt `true` zurück, wenn keine Marker im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.marker_ids.is_empty()
    }

    /// Findet den nächsten Marker zur gegebenen Koordinate.
    pub fn nearest(&self, query: GeoPoint) -> Option<SpatialMatch> {
        if self.is_empty() || !query.is_finite() {
            return None;
        }

        let result = self.tree.nearest_one::<SquaredEuclidean>(&project(query));
        let marker_id = *self.marker_ids.get(result.item as usize)?;

        Some(SpatialMatch {
            marker_id,
            distance_km: result.distance.sqrt(),
        })
    }

    /// Findet alle Marker innerhalb eines Radius (km) um die Query-Position,
    /// aufsteigend nach Distanz sortiert.
    pub fn within_km(&self, query: GeoPoint, radius_km: f64) -> Vec<SpatialMatch> {
        if self.is_empty() || !query.is_finite() || radius_km.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&project(query), radius_km * radius_km)
            .into_iter()
            .filter_map(|entry| {
                let marker_id = *self.marker_ids.get(entry.item as usize)?;
                Some(SpatialMatch {
                    marker_id,
                    distance_km: entry.distance.sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        results
    }

    /// Liefert die indexierte Position eines Markers.
    pub fn position(&self, marker_id: u64) -> Option<GeoPoint> {
        self.positions.get(&marker_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;

    fn marker(id: u64, lat: f64, lon: f64) -> PoiMarker {
        PoiMarker::new(
            id,
            format!("M{id}"),
            GeoPoint::new(lat, lon),
            IndexSet::new(),
        )
    }

    fn sample_markers() -> Vec<PoiMarker> {
        vec![
            marker(1, 48.8566, 2.3522), // Paris Zentrum
            marker(2, 48.8606, 2.3376), // Louvre, ~1.2 km
            marker(3, 48.8049, 2.1204), // Versailles, ~18 km
        ]
    }

    #[test]
    fn nearest_returns_expected_marker() {
        let index = SpatialIndex::from_markers(&sample_markers());
        let nearest = index
            .nearest(GeoPoint::new(48.8610, 2.3380))
            .expect("Treffer erwartet");

        assert_eq!(nearest.marker_id, 2);
        assert!(nearest.distance_km < 0.1);
    }

    #[test]
    fn radius_query_returns_sorted_matches() {
        let index = SpatialIndex::from_markers(&sample_markers());
        let matches = index.within_km(GeoPoint::new(48.8566, 2.3522), 5.0);

        let ids: Vec<u64> = matches.into_iter().map(|m| m.marker_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn non_finite_markers_are_skipped() {
        let mut markers = sample_markers();
        markers.push(marker(4, f64::NAN, 2.0));

        let index = SpatialIndex::from_markers(&markers);
        assert_eq!(index.len(), 3);
        assert!(index.position(4).is_none());
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = SpatialIndex::empty();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.nearest(GeoPoint::new(0.0, 0.0)).is_none());
        assert!(index.within_km(GeoPoint::new(0.0, 0.0), 10.0).is_empty());
    }
}
