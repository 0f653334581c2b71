//! Use-Case-Funktionen für Viewport und Optionen.

use crate::app::AppState;
use crate::core::{GeoPoint, MapViewport};
use crate::shared::MapOptions;

/// Übernimmt Zentrum und Zoom aus einer Widget-Meldung.
pub fn set_viewport(state: &mut AppState, center: GeoPoint, zoom: f32) {
    state.view.viewport.move_to(center, zoom);
}

/// Zentriert den Viewport auf einen Punkt (Zoom unverändert).
pub fn center_on(state: &mut AppState, point: GeoPoint) {
    state.view.viewport.look_at(point);
    log::info!(
        "Viewport zentriert auf ({:.4}, {:.4})",
        point.lat,
        point.lon
    );
}

/// Setzt den Viewport auf den Startzustand zurück.
pub fn reset(state: &mut AppState) {
    state.view.viewport = MapViewport::default();
    log::info!("Viewport zurückgesetzt");
}

/// Übernimmt geänderte Laufzeit-Optionen.
pub fn apply_options(state: &mut AppState, options: MapOptions) {
    state.options = options;
    log::info!(
        "Optionen übernommen (Umkreis {:.1} km, Zoom-Schwelle {:.1})",
        state.options.proximity_threshold_km,
        state.options.zoom_show_all_threshold
    );
}
