//! Use-Cases für Marker-Operationen und Selektion.

use indexmap::IndexSet;

use crate::app::state::TagSelection;
use crate::app::use_cases::filtering;
use crate::app::AppState;
use crate::core::GeoPoint;

/// Legt einen neuen Marker an und ordnet ihn dem aktuell gültigen
/// Sichtbarkeits-Regime unter.
pub fn add_marker(state: &mut AppState, name: &str, position: GeoPoint, tags: Vec<String>) {
    let tags: IndexSet<String> = tags.into_iter().collect();
    let id = state.markers.add(name, position, tags);
    log::info!(
        "Marker {} angelegt: '{}' ({:.4}, {:.4})",
        id,
        name,
        position.lat,
        position.lon
    );

    apply_current_regime(state, id);
}

/// Ersetzt die Tags eines Markers und bewertet seine Sichtbarkeit neu.
pub fn retag_marker(state: &mut AppState, marker_id: u64, tags: Vec<String>) {
    let tags: IndexSet<String> = tags.into_iter().collect();
    if !state.markers.retag(marker_id, tags) {
        log::warn!("Kein Marker mit ID {}", marker_id);
        return;
    }
    log::info!("Marker {} neu getaggt", marker_id);

    apply_current_regime(state, marker_id);
}

/// Wendet das aktive Sichtbarkeits-Regime auf einen einzelnen Marker an,
/// ohne einen vollen Filter-Pass (und damit ein neues Fit-Kommando)
/// auszulösen.
fn apply_current_regime(state: &mut AppState, marker_id: u64) {
    match state.filter.active_tag.clone() {
        TagSelection::Tag(tag) => {
            if let Some(marker) = state.markers.get_mut(marker_id) {
                marker.visible = marker.pinned || marker.has_tag(&tag);
            }
        }
        // Ohne aktiven Tag-Filter besitzt der Umkreisfilter die Sichtbarkeit
        TagSelection::None | TagSelection::All => filtering::apply_proximity_filter(state),
    }
}

/// Selektiert den nächsten sichtbaren Marker zur Klick-Position.
/// Außerhalb des Pick-Radius (oder bei leerem Store) wird die Selektion
/// aufgehoben.
pub fn select_nearest(state: &mut AppState, at: GeoPoint, max_distance_km: f64) {
    let Some(hit) = state.markers.nearest(at) else {
        log::debug!("Pick ohne Treffer: Store leer oder Position ungültig");
        state.selection.clear();
        return;
    };

    let candidate = state.markers.get(hit.marker_id);
    let pickable = hit.distance_km <= max_distance_km
        && candidate.map(|m| m.visible).unwrap_or(false);

    if !pickable {
        log::debug!(
            "Pick verworfen: Marker {} in {:.2} km (Radius {:.2} km)",
            hit.marker_id,
            hit.distance_km,
            max_distance_km
        );
        state.selection.clear();
        return;
    }

    state.selection.selected_marker = Some(hit.marker_id);
    // Bereits bekannte Adresse direkt annotieren; sonst bleibt es beim Host,
    // eine Rückwärts-Auflösung anzustoßen
    state.selection.selected_address = candidate
        .and_then(|m| state.geocode.cache.get_reverse(m.position))
        .map(str::to_string);

    log::info!(
        "Marker {} selektiert ({:.2} km entfernt)",
        hit.marker_id,
        hit.distance_km
    );
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::filtering::apply_tag_filter;
    use crate::core::HERE_TAG;

    fn state_with_tag_filter() -> AppState {
        let mut state = AppState::new();
        state.markers.add(
            "A",
            GeoPoint::new(48.8566, 2.3522),
            [String::from("Favorites")].into_iter().collect(),
        );
        state.markers.add(
            "H",
            GeoPoint::new(48.8559, 2.3315),
            [String::from(HERE_TAG)].into_iter().collect(),
        );
        apply_tag_filter(&mut state, TagSelection::Tag("Favorites".to_string()));
        state
    }

    #[test]
    fn added_marker_respects_active_tag_filter() {
        let mut state = state_with_tag_filter();

        add_marker(
            &mut state,
            "Neu-Anderes",
            GeoPoint::new(48.86, 2.34),
            vec!["Other".to_string()],
        );
        add_marker(
            &mut state,
            "Neu-Favorit",
            GeoPoint::new(48.87, 2.35),
            vec!["Favorites".to_string()],
        );

        let other = state.markers.get(3).expect("Marker erwartet");
        let favorite = state.markers.get(4).expect("Marker erwartet");
        assert!(!other.visible);
        assert!(favorite.visible);
        // Kein neues Fit-Kommando durch das Nachziehen einzelner Marker
        assert!(state.view.pending_fit.is_some());
    }

    #[test]
    fn retag_updates_visibility_under_tag_filter() {
        let mut state = state_with_tag_filter();
        add_marker(
            &mut state,
            "Wandler",
            GeoPoint::new(48.86, 2.34),
            vec!["Other".to_string()],
        );
        assert!(!state.markers.get(3).expect("Marker erwartet").visible);

        retag_marker(&mut state, 3, vec!["Favorites".to_string()]);

        assert!(state.markers.get(3).expect("Marker erwartet").visible);
    }

    #[test]
    fn retag_unknown_id_is_harmless() {
        let mut state = state_with_tag_filter();
        retag_marker(&mut state, 999, vec!["Favorites".to_string()]);
        assert_eq!(state.markers.len(), 2);
    }

    #[test]
    fn pick_selects_nearest_visible_marker() {
        let mut state = state_with_tag_filter();

        select_nearest(&mut state, GeoPoint::new(48.8567, 2.3523), 1.0);

        assert_eq!(state.selection.selected_marker, Some(1));
    }

    #[test]
    fn pick_outside_radius_clears_selection() {
        let mut state = state_with_tag_filter();
        state.selection.selected_marker = Some(1);

        select_nearest(&mut state, GeoPoint::new(49.9, 3.0), 1.0);

        assert_eq!(state.selection.selected_marker, None);
    }

    #[test]
    fn pick_ignores_hidden_markers() {
        let mut state = state_with_tag_filter();
        // "Other"-Marker ist unter dem Favorites-Filter unsichtbar
        add_marker(
            &mut state,
            "Versteckt",
            GeoPoint::new(48.9000, 2.4000),
            vec!["Other".to_string()],
        );

        select_nearest(&mut state, GeoPoint::new(48.9000, 2.4000), 1.0);

        assert_eq!(state.selection.selected_marker, None);
    }

    #[test]
    fn pick_annotates_cached_address() {
        let mut state = state_with_tag_filter();
        let position = state.markers.get(1).expect("Marker erwartet").position;
        state
            .geocode
            .cache
            .insert_reverse(position, "Rue de Rivoli, Paris".to_string());

        select_nearest(&mut state, position, 1.0);

        assert_eq!(
            state.selection.selected_address.as_deref(),
            Some("Rue de Rivoli, Paris")
        );
    }
}
