//! Use-Cases für die Marker-Sichtbarkeit: Tag-Filter und Umkreisfilter.
//!
//! Pro Viewport-Event besitzt genau ein Pass die Sichtbarkeit: solange ein
//! konkretes Tag gewählt ist, fasst der Umkreisfilter keine Marker an.

use crate::app::state::TagSelection;
use crate::app::AppState;
use crate::core::{distance_km, GeoBounds, GeoPoint};

/// Ergebnis eines Tag-Filter-Passes.
#[derive(Debug, Clone, PartialEq)]
pub struct TagFilterOutcome {
    /// Anzahl sichtbarer Marker nach dem Pass
    pub visible: usize,
    /// Bounding-Box der Treffer als Fit-Seed für das Widget
    pub bounds: Option<GeoBounds>,
}

/// Wendet den Tag-Filter auf den gesamten Store an.
///
/// - `All`: alle Marker sichtbar, Fit-Seed über alle Positionen.
/// - `Tag(t)`: sichtbar ist, wer `t` trägt oder angepinnt ist; der Fit-Seed
///   umfasst nur die Treffer von `t`, damit der Ausschnitt die Tag-Gruppe
///   rahmt und nicht den Standort-Marker.
///
/// Ein Tag ohne Treffer ist kein Fehler: sichtbar bleiben nur angepinnte
/// Marker, das Fit-Kommando entfällt (leerer Seed = Viewport unverändert).
pub fn apply_tag_filter(state: &mut AppState, selection: TagSelection) -> TagFilterOutcome {
    let total = state.markers.len();

    let seed: Vec<GeoPoint> = match &selection {
        TagSelection::None => {
            // Kommt über das Intent-Mapping nicht vor; defensiv kein Pass
            log::warn!("Tag-Filter ohne Auswahl ignoriert");
            return TagFilterOutcome {
                visible: state.markers.visible_count(),
                bounds: None,
            };
        }
        TagSelection::All => {
            for marker in state.markers.iter_mut() {
                marker.visible = true;
            }
            state.markers.all().iter().map(|m| m.position).collect()
        }
        TagSelection::Tag(tag) => {
            for marker in state.markers.iter_mut() {
                marker.visible = marker.pinned || marker.has_tag(tag);
            }
            state
                .markers
                .find_by_tag(tag)
                .map(|m| m.position)
                .collect()
        }
    };

    let bounds = GeoBounds::from_points(seed);
    state.view.pending_fit = bounds;
    state.filter.active_tag = selection;

    let visible = state.markers.visible_count();
    log::info!(
        "Tag-Filter '{}': {} von {} Markern sichtbar",
        state.filter.active_tag.label(),
        visible,
        total
    );

    TagFilterOutcome { visible, bounds }
}

/// Wertet den Umkreisfilter über den gesamten Store neu aus.
///
/// Sichtbar ist, wer angepinnt ist, wer bei ausreichend kleiner Zoomstufe
/// ohnehin gezeigt wird, oder wer innerhalb des Umkreises um das
/// Viewport-Zentrum liegt. Eine NaN-Distanz vergleicht `false` und kann
/// einen Marker daher nur verstecken, nie zeigen.
///
/// No-op, solange ein konkretes Tag die Sichtbarkeit besitzt.
pub fn apply_proximity_filter(state: &mut AppState) {
    if state.filter.tag_filter_active() {
        log::debug!(
            "Umkreisfilter übersprungen: Tag-Filter '{}' besitzt die Sichtbarkeit",
            state.filter.active_tag.label()
        );
        return;
    }

    let center = state.view.viewport.center;
    let zoom = state.view.viewport.zoom;
    let show_all = zoom >= state.options.zoom_show_all_threshold;
    let threshold_km = state.options.proximity_threshold_km;

    for marker in state.markers.iter_mut() {
        marker.visible =
            marker.pinned || show_all || distance_km(center, marker.position) <= threshold_km;
    }

    log::debug!(
        "Umkreisfilter: {} von {} Markern sichtbar (Zoom {:.1})",
        state.markers.visible_count(),
        state.markers.len(),
        zoom
    );
}
