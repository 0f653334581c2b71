//! Handler für Viewport und Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeoPoint;
use crate::shared::MapOptions;

/// Übernimmt Zentrum und Zoom aus einer Widget-Meldung.
pub fn set_viewport(state: &mut AppState, center: GeoPoint, zoom: f32) {
    use_cases::viewport::set_viewport(state, center, zoom);
}

/// Zentriert den Viewport auf einen Punkt.
pub fn center_on_point(state: &mut AppState, point: GeoPoint) {
    use_cases::viewport::center_on(state, point);
}

/// Setzt den Viewport auf den Startzustand zurück.
pub fn reset_viewport(state: &mut AppState) {
    use_cases::viewport::reset(state);
}

/// Übernimmt geänderte Laufzeit-Optionen.
pub fn apply_options(state: &mut AppState, options: MapOptions) {
    use_cases::viewport::apply_options(state, options);
}
