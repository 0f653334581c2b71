//! Handler für Geocoding-Anfragen und -Antworten.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeoPoint;

/// Legt eine Adress-Anfrage in die Host-Outbox.
pub fn request_geocode(state: &mut AppState, query: &str) {
    use_cases::geocoding::request_geocode(state, query);
}

/// Übernimmt ein aufgelöstes Geocoding-Ergebnis.
pub fn resolve_geocode(state: &mut AppState, query: &str, result: Option<GeoPoint>) {
    use_cases::geocoding::resolve_geocode(state, query, result);
}

/// Legt ein Rückwärts-Geocoding-Ergebnis ab.
pub fn store_resolved_address(state: &mut AppState, position: GeoPoint, address: Option<String>) {
    use_cases::geocoding::store_resolved_address(state, position, address);
}
