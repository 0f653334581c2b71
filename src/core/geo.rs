//! Geodätische Grundtypen: Koordinaten, Großkreis-Distanz, Bounding-Box.

use serde::{Deserialize, Serialize};

/// Mittlerer Erdradius in Kilometern.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Geographische Koordinate in Dezimalgrad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad (Nord positiv)
    pub lat: f64,
    /// Längengrad (Ost positiv)
    pub lon: f64,
}

impl GeoPoint {
    /// Erstellt eine Koordinate aus Breiten- und Längengrad.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Gibt `true` zurück, wenn beide Komponenten endlich sind.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// Großkreis-Distanz zwischen zwei Koordinaten in Kilometern (Haversine).
///
/// Das Ergebnis wird auf zwei Nachkommastellen gerundet. Nicht-endliche
/// Eingaben propagieren NaN statt zu panicken; NaN-Vergleiche im Aufrufer
/// sind immer `false`, ein solcher Marker fällt also aus jedem Umkreis.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    round_two_places(EARTH_RADIUS_KM * c)
}

/// Rundet auf zwei Nachkommastellen (10-Meter-Auflösung). NaN bleibt NaN.
fn round_two_places(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

/// Axis-aligned Bounding-Box über Koordinaten (süd/west/nord/ost).
///
/// Dient als Seed für das "fit bounds"-Kommando an das Karten-Widget.
/// Keine Sonderbehandlung der Datumsgrenze.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Erstellt eine Punkt-Box aus einer einzelnen Koordinate.
    pub fn from_point(point: GeoPoint) -> Self {
        Self {
            south: point.lat,
            west: point.lon,
            north: point.lat,
            east: point.lon,
        }
    }

    /// Baut die Box über alle Punkte auf; `None` bei leerer Eingabe.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::from_point(first);
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Erweitert die Box um eine Koordinate.
    /// `f64::min`/`max` ignorieren NaN, eine defekte Koordinate kollabiert
    /// die Box also nicht.
    pub fn extend(&mut self, point: GeoPoint) {
        self.south = self.south.min(point.lat);
        self.west = self.west.min(point.lon);
        self.north = self.north.max(point.lat);
        self.east = self.east.max(point.lon);
    }

    /// Gibt den Mittelpunkt der Box zurück.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// Prüft ob eine Koordinate innerhalb der Box liegt (inklusive Rand).
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lon >= self.west
            && point.lon <= self.east
    }
}
