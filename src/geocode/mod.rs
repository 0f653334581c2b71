//! Schnittstelle zum externen Geocoding-Dienst plus Ergebnis-Cache.
//!
//! Der Core ruft den Dienst nie direkt auf: ein Cache-Miss landet als
//! offene Anfrage im `GeocodeState`, der Host führt den (asynchronen)
//! Dienst-Aufruf aus und speist das Ergebnis als normales Event zurück.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::core::GeoPoint;

/// Schnittstelle zu einem externen Geocoding-Dienst.
///
/// Timeout oder "keine Treffer" liefern `Ok(None)`; `Err` ist für
/// Transport-Fehler reserviert. Implementierungen leben beim Host.
pub trait Geocoder {
    /// Löst eine Adresse in eine Koordinate auf.
    fn geocode(&self, address: &str) -> anyhow::Result<Option<GeoPoint>>;

    /// Löst eine Koordinate in eine Adresse auf.
    fn reverse_geocode(&self, position: GeoPoint) -> anyhow::Result<Option<String>>;
}

/// Cache für aufgelöste Adressen und Rück-Auflösungen.
///
/// Vorwärts-Schlüssel sind normalisierte Adress-Strings, Rückwärts-Schlüssel
/// Mikrograd-quantisierte Koordinaten (1e-6 Grad ≈ 0.1 m, deutlich feiner
/// als jede Dienst-Auflösung).
#[derive(Debug, Clone, Default)]
pub struct GeocodeCache {
    forward: HashMap<String, GeoPoint>,
    reverse: HashMap<(i64, i64), String>,
}

/// Quantisiert eine Koordinate auf Mikrograd für den Rückwärts-Schlüssel.
fn quantize(position: GeoPoint) -> Option<(i64, i64)> {
    if !position.is_finite() {
        return None;
    }
    Some((
        (position.lat * 1e6).round() as i64,
        (position.lon * 1e6).round() as i64,
    ))
}

fn normalize(address: &str) -> String {
    address.trim().to_lowercase()
}

impl GeocodeCache {
    /// Erstellt einen leeren Cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Liefert eine gecachte Koordinate zur Adresse.
    pub fn get(&self, address: &str) -> Option<GeoPoint> {
        self.forward.get(&normalize(address)).copied()
    }

    /// Legt ein aufgelöstes Adress-Ergebnis ab.
    pub fn insert(&mut self, address: &str, position: GeoPoint) {
        self.forward.insert(normalize(address), position);
    }

    /// Liefert eine gecachte Adresse zur Koordinate.
    pub fn get_reverse(&self, position: GeoPoint) -> Option<&str> {
        quantize(position)
            .and_then(|key| self.reverse.get(&key))
            .map(String::as_str)
    }

    /// Legt ein Rückwärts-Ergebnis ab. Nicht-endliche Koordinaten werden
    /// ignoriert.
    pub fn insert_reverse(&mut self, position: GeoPoint, address: String) {
        if let Some(key) = quantize(position) {
            self.reverse.insert(key, address);
        }
    }

    /// Anzahl gecachter Vorwärts-Einträge.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Gibt `true` zurück, wenn keine Vorwärts-Einträge vorliegen.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

static COORDINATE_RE: OnceLock<Regex> = OnceLock::new();

/// Erkennt direkte Koordinaten-Eingaben der Form "48.8559, 2.3315".
///
/// Solche Eingaben umgehen den Geocoding-Dienst komplett. Werte außerhalb
/// der gültigen Breiten-/Längengrad-Bereiche liefern `None`.
pub fn parse_coordinate(input: &str) -> Option<GeoPoint> {
    let re = COORDINATE_RE.get_or_init(|| {
        Regex::new(r"^\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*$")
            .expect("statisches Pattern")
    });

    let captures = re.captures(input)?;
    let lat: f64 = captures.get(1)?.as_str().parse().ok()?;
    let lon: f64 = captures.get(2)?.as_str().parse().ok()?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return None;
    }

    Some(GeoPoint::new(lat, lon))
}
