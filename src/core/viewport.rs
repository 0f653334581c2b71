//! Karten-Viewport: Zentrum und Zoomstufe.

use super::GeoPoint;

/// Aktueller Kartenausschnitt (Web-Map-Konvention: höherer Zoom = näher dran).
///
/// Der Viewport wird vom externen Karten-Widget gemeldet; der Core hält nur
/// die letzte bekannte Sicht, um den Umkreisfilter darauf auszuwerten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    /// Zentrum des Ausschnitts
    pub center: GeoPoint,
    /// Zoomstufe (auf [ZOOM_MIN, ZOOM_MAX] geklemmt)
    pub zoom: f32,
}

impl MapViewport {
    /// Minimale Zoomstufe (ganze Welt).
    pub const ZOOM_MIN: f32 = 0.0;
    /// Maximale Zoomstufe.
    pub const ZOOM_MAX: f32 = 21.0;
    /// Start-Zoomstufe einer neuen Session.
    pub const DEFAULT_ZOOM: f32 = 12.0;

    /// Erstellt den Standard-Viewport.
    pub fn new() -> Self {
        Self {
            center: GeoPoint::new(0.0, 0.0),
            zoom: Self::DEFAULT_ZOOM,
        }
    }

    /// Zentriert den Viewport auf einen Punkt (Zoom unverändert).
    pub fn look_at(&mut self, target: GeoPoint) {
        self.center = target;
    }

    /// Setzt die Zoomstufe (geklemmt).
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Übernimmt Zentrum und Zoom aus einer Widget-Meldung.
    pub fn move_to(&mut self, center: GeoPoint, zoom: f32) {
        self.center = center;
        self.set_zoom(zoom);
    }
}

impl Default for MapViewport {
    fn default() -> Self {
        Self::new()
    }
}
