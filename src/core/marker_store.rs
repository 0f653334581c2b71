//! Die zentrale Marker-Sammlung mit Spatial-Index.

use indexmap::{IndexMap, IndexSet};

use super::{GeoPoint, PoiMarker, SpatialIndex, SpatialMatch};

/// Container für alle POI-Marker einer Session.
///
/// Marker werden einmalig beim Laden (oder per Nutzer-Aktion) angelegt und
/// während der Session nie zerstört; es mutieren nur Sichtbarkeit und Tags.
/// Die Iterationsreihenfolge ist die Einfüge-Reihenfolge, deterministisch
/// für Tests und die Tag-Auswahl-UI.
#[derive(Debug, Clone)]
pub struct MarkerStore {
    markers: Vec<PoiMarker>,
    next_id: u64,
    /// Persistenter Spatial-Index fuer schnelle Nearest-Abfragen
    spatial_index: SpatialIndex,
}

impl MarkerStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            next_id: 1,
            spatial_index: SpatialIndex::empty(),
        }
    }

    /// Fügt einen Marker hinzu und gibt seine ID zurück.
    /// Neue Marker starten sichtbar; `pinned` folgt aus den Tags.
    pub fn add(&mut self, name: &str, position: GeoPoint, tags: IndexSet<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.markers
            .push(PoiMarker::new(id, name.to_string(), position, tags));
        self.rebuild_spatial_index();
        id
    }

    /// Baut einen Store aus vielen Datensätzen auf einmal (Import-Pfad);
    /// der Spatial-Index wird nur einmal am Ende aufgebaut.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, GeoPoint, IndexSet<String>)>,
    {
        let mut store = Self::new();
        for (name, position, tags) in records {
            let id = store.next_id;
            store.next_id += 1;
            store.markers.push(PoiMarker::new(id, name, position, tags));
        }
        store.rebuild_spatial_index();
        store
    }

    /// Read-only Sicht auf alle Marker in Einfüge-Reihenfolge.
    pub fn all(&self) -> &[PoiMarker] {
        &self.markers
    }

    /// Mutable Iteration für die Filter-Pässe. Positionen sind fix;
    /// veränderlich sind nur Sichtbarkeit und Tags.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PoiMarker> {
        self.markers.iter_mut()
    }

    /// Alle Marker, deren Tag-Set `tag` enthält.
    pub fn find_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a PoiMarker> {
        self.markers.iter().filter(move |m| m.has_tag(tag))
    }

    /// Findet einen Marker per ID.
    pub fn get(&self, id: u64) -> Option<&PoiMarker> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// Findet einen Marker per ID (mutable).
    pub fn get_mut(&mut self, id: u64) -> Option<&mut PoiMarker> {
        self.markers.iter_mut().find(|m| m.id == id)
    }

    /// Ersetzt die Tags eines Markers; gibt `false` zurück wenn die ID
    /// unbekannt ist.
    pub fn retag(&mut self, id: u64, tags: IndexSet<String>) -> bool {
        match self.get_mut(id) {
            Some(marker) => {
                marker.set_tags(tags);
                true
            }
            None => false,
        }
    }

    /// Zählt Marker pro Tag, in stabiler Erst-Vorkommens-Reihenfolge.
    /// Datengrundlage der Tag-Auswahl-UI.
    pub fn tag_summary(&self) -> IndexMap<String, usize> {
        let mut summary: IndexMap<String, usize> = IndexMap::new();
        for marker in &self.markers {
            for tag in &marker.tags {
                *summary.entry(tag.clone()).or_default() += 1;
            }
        }
        summary
    }

    /// Gibt die Anzahl der Marker zurück.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Gibt `true` zurück, wenn der Store leer ist.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Zählt die aktuell sichtbaren Marker.
    pub fn visible_count(&self) -> usize {
        self.markers.iter().filter(|m| m.visible).count()
    }

    /// Baut den persistenten Spatial-Index aus den aktuellen Markern neu auf.
    pub fn rebuild_spatial_index(&mut self) {
        self.spatial_index = SpatialIndex::from_markers(&self.markers);
    }

    /// Findet den nächstgelegenen Marker zur Koordinate.
    pub fn nearest(&self, query: GeoPoint) -> Option<SpatialMatch> {
        self.spatial_index.nearest(query)
    }

    /// Findet alle Marker innerhalb eines Radius (km).
    pub fn within_km(&self, query: GeoPoint, radius_km: f64) -> Vec<SpatialMatch> {
        self.spatial_index.within_km(query, radius_km)
    }
}

impl Default for MarkerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HERE_TAG;

    fn tags(values: &[&str]) -> IndexSet<String> {
        values.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn add_assigns_sequential_ids_and_keeps_order() {
        let mut store = MarkerStore::new();
        let a = store.add("A", GeoPoint::new(48.0, 2.0), tags(&["Favorites"]));
        let b = store.add("B", GeoPoint::new(49.0, 3.0), tags(&["Other"]));

        assert_eq!((a, b), (1, 2));
        assert_eq!(store.len(), 2);
        let names: Vec<&str> = store.all().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn new_markers_start_visible() {
        let mut store = MarkerStore::new();
        store.add("A", GeoPoint::new(48.0, 2.0), tags(&["Favorites"]));

        assert_eq!(store.visible_count(), 1);
    }

    #[test]
    fn find_by_tag_matches_tag_set_membership() {
        let mut store = MarkerStore::new();
        store.add("A", GeoPoint::new(48.0, 2.0), tags(&["Favorites", "Parks"]));
        store.add("B", GeoPoint::new(49.0, 3.0), tags(&["Other"]));
        store.add("C", GeoPoint::new(50.0, 4.0), tags(&["Favorites"]));

        let ids: Vec<u64> = store.find_by_tag("Favorites").map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(store.find_by_tag("Unbekannt").count(), 0);
    }

    #[test]
    fn duplicate_positions_and_tags_are_legal() {
        let mut store = MarkerStore::new();
        store.add("A", GeoPoint::new(48.0, 2.0), tags(&["Favorites"]));
        store.add("A2", GeoPoint::new(48.0, 2.0), tags(&["Favorites"]));

        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_tag("Favorites").count(), 2);
    }

    #[test]
    fn retag_rederives_pinned_flag() {
        let mut store = MarkerStore::new();
        let id = store.add("Standort", GeoPoint::new(48.0, 2.0), tags(&["Other"]));
        assert!(!store.get(id).expect("Marker erwartet").pinned);

        assert!(store.retag(id, tags(&[HERE_TAG])));
        assert!(store.get(id).expect("Marker erwartet").pinned);

        assert!(!store.retag(999, tags(&["x"])));
    }

    #[test]
    fn tag_summary_counts_in_first_seen_order() {
        let mut store = MarkerStore::new();
        store.add("A", GeoPoint::new(48.0, 2.0), tags(&["Parks", "Favorites"]));
        store.add("B", GeoPoint::new(49.0, 3.0), tags(&["Favorites"]));

        let summary = store.tag_summary();
        let entries: Vec<(&str, usize)> =
            summary.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(entries, vec![("Parks", 1), ("Favorites", 2)]);
    }

    #[test]
    fn nearest_uses_rebuilt_index_after_add() {
        let mut store = MarkerStore::new();
        store.add("A", GeoPoint::new(48.8566, 2.3522), tags(&[]));
        let b = store.add("B", GeoPoint::new(48.8606, 2.3376), tags(&[]));

        let hit = store
            .nearest(GeoPoint::new(48.8610, 2.3380))
            .expect("Treffer erwartet");
        assert_eq!(hit.marker_id, b);
    }
}
