//! Repräsentiert einen POI-Marker auf der Karte.

use indexmap::IndexSet;

use super::GeoPoint;

/// Tag des Standort-Markers ("Du bist hier"). Ein Marker mit diesem Tag
/// gilt als angepinnt und ist von jeder Ausblend-Logik ausgenommen.
pub const HERE_TAG: &str = "Here";

/// Beschreibt einen Point-of-Interest mit Position, Tags und Sichtbarkeit.
#[derive(Debug, Clone)]
pub struct PoiMarker {
    /// Vom Store vergebene, sessionstabile ID
    pub id: u64,
    /// Anzeigename
    pub name: String,
    /// Geo-Position (unveränderlich nach Erstellung)
    pub position: GeoPoint,
    /// Klassifikations-Tags in stabiler Einfüge-Reihenfolge
    pub tags: IndexSet<String>,
    /// Angepinnt (Standort-Marker): immer sichtbar
    pub pinned: bool,
    /// Aktuelle Sichtbarkeit; wird ausschließlich von den Filter-Pässen gesetzt
    pub visible: bool,
}

impl PoiMarker {
    /// Erstellt einen neuen Marker. `pinned` wird aus den Tags abgeleitet,
    /// die Sichtbarkeit startet auf `true`.
    pub fn new(id: u64, name: String, position: GeoPoint, tags: IndexSet<String>) -> Self {
        let pinned = tags.contains(HERE_TAG);
        Self {
            id,
            name,
            position,
            tags,
            pinned,
            visible: true,
        }
    }

    /// Prüft ob der Marker ein bestimmtes Tag trägt.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Ersetzt die Tags und leitet `pinned` neu ab.
    pub fn set_tags(&mut self, tags: IndexSet<String>) {
        self.pinned = tags.contains(HERE_TAG);
        self.tags = tags;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> IndexSet<String> {
        values.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn marker_starts_visible() {
        let marker = PoiMarker::new(
            1,
            "Louvre".to_string(),
            GeoPoint::new(48.8606, 2.3376),
            tags(&["Museen"]),
        );
        assert!(marker.visible);
        assert!(!marker.pinned);
    }

    #[test]
    fn here_tag_pins_marker() {
        let marker = PoiMarker::new(
            2,
            "Standort".to_string(),
            GeoPoint::new(48.8559, 2.3315),
            tags(&[HERE_TAG]),
        );
        assert!(marker.pinned);
    }

    #[test]
    fn set_tags_rederives_pinned() {
        let mut marker = PoiMarker::new(
            3,
            "Cafe".to_string(),
            GeoPoint::new(48.85, 2.33),
            tags(&["Favorites"]),
        );
        assert!(!marker.pinned);

        marker.set_tags(tags(&["Favorites", HERE_TAG]));
        assert!(marker.pinned);

        marker.set_tags(tags(&["Favorites"]));
        assert!(!marker.pinned);
    }
}
