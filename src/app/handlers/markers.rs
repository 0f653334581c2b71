//! Handler für Marker-Operationen und Selektion.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeoPoint;

/// Legt einen neuen Marker an.
pub fn add_marker(state: &mut AppState, name: &str, position: GeoPoint, tags: Vec<String>) {
    use_cases::markers::add_marker(state, name, position, tags);
}

/// Ersetzt die Tags eines Markers.
pub fn retag_marker(state: &mut AppState, marker_id: u64, tags: Vec<String>) {
    use_cases::markers::retag_marker(state, marker_id, tags);
}

/// Selektiert den nächsten sichtbaren Marker zur Position.
pub fn select_nearest(state: &mut AppState, at: GeoPoint, max_distance_km: f64) {
    use_cases::markers::select_nearest(state, at, max_distance_km);
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    use_cases::markers::clear_selection(state);
}
