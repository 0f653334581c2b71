//! Baut den Szenen-Schnappschuss für das externe Karten-Widget.
//!
//! Die Szene enthält nur sichtbare Marker plus das optional ausstehende
//! "fit bounds"-Kommando; das Widget besitzt Rendering und Popups.

use serde::Serialize;

use crate::core::{GeoBounds, GeoPoint};

use super::AppState;

/// Ein sichtbarer Marker aus Sicht des Widgets.
#[derive(Debug, Clone, Serialize)]
pub struct SceneMarker {
    pub id: u64,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub tags: Vec<String>,
    pub pinned: bool,
}

/// Vollständiger Szenen-Schnappschuss für das Karten-Widget.
#[derive(Debug, Clone, Serialize)]
pub struct MapScene {
    /// Letzter bekannter Viewport
    pub center: GeoPoint,
    pub zoom: f32,
    /// Label der aktiven Tag-Auswahl (leer = nie gewählt)
    pub active_tag: String,
    /// Nur die sichtbaren Marker, in Store-Reihenfolge
    pub markers: Vec<SceneMarker>,
    /// Einmaliges Fit-Kommando; `None` lässt den Viewport unverändert
    pub fit_bounds: Option<GeoBounds>,
    /// ID des selektierten Markers (falls vorhanden)
    pub selected_marker: Option<u64>,
}

/// Baut die Szene aus dem aktuellen AppState.
/// Entnimmt das ausstehende Fit-Kommando (einmalige Zustellung).
pub fn build(state: &mut AppState) -> MapScene {
    let markers = state
        .markers
        .all()
        .iter()
        .filter(|m| m.visible)
        .map(|m| SceneMarker {
            id: m.id,
            name: m.name.clone(),
            lat: m.position.lat,
            lon: m.position.lon,
            tags: m.tags.iter().cloned().collect(),
            pinned: m.pinned,
        })
        .collect();

    MapScene {
        center: state.view.viewport.center,
        zoom: state.view.viewport.zoom,
        active_tag: state.filter.active_tag.label().to_string(),
        markers,
        fit_bounds: state.view.take_pending_fit(),
        selected_marker: state.selection.selected_marker,
    }
}
