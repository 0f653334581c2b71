//! Use-Cases für den Geocoding-Datenfluss (Outbox + Cache).

use crate::app::AppState;
use crate::core::GeoPoint;

/// Legt eine Adress-Anfrage in die Host-Outbox.
///
/// Cache-Treffer und direkte Koordinaten-Eingaben fängt das Intent-Mapping
/// vorher ab; hier landet nur der echte Dienst-Fall. Eine noch offene
/// Anfrage wird überschrieben, es zählt die letzte Nutzer-Eingabe.
pub fn request_geocode(state: &mut AppState, query: &str) {
    if let Some(previous) = &state.geocode.pending_request {
        log::debug!("Offene Geocoding-Anfrage '{}' verworfen", previous);
    }
    state.geocode.pending_request = Some(query.to_string());
    log::info!("Geocoding angefragt: '{}'", query);
}

/// Übernimmt ein aufgelöstes Geocoding-Ergebnis in den Cache.
/// Das Zentrieren des Viewports läuft als separater Command.
pub fn resolve_geocode(state: &mut AppState, query: &str, result: Option<GeoPoint>) {
    match result {
        Some(point) => {
            state.geocode.cache.insert(query, point);
            log::info!(
                "Geocoding '{}' aufgelöst: ({:.4}, {:.4})",
                query,
                point.lat,
                point.lon
            );
        }
        None => log::warn!("Geocoding '{}' ohne Treffer", query),
    }
}

/// Legt ein Rückwärts-Geocoding-Ergebnis ab und annotiert die Selektion,
/// falls sie zu dieser Position gehört.
pub fn store_resolved_address(state: &mut AppState, position: GeoPoint, address: Option<String>) {
    let Some(address) = address else {
        log::debug!(
            "Rückwärts-Geocoding ohne Treffer für ({:.4}, {:.4})",
            position.lat,
            position.lon
        );
        return;
    };

    state.geocode.cache.insert_reverse(position, address.clone());

    let selected_position = state
        .selection
        .selected_marker
        .and_then(|id| state.markers.get(id))
        .map(|m| m.position);
    if selected_position == Some(position) {
        state.selection.selected_address = Some(address);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_lands_in_outbox() {
        let mut state = AppState::new();

        request_geocode(&mut state, "Paris");

        assert_eq!(state.geocode.pending_request.as_deref(), Some("Paris"));
        assert_eq!(state.geocode.take_pending_request().as_deref(), Some("Paris"));
        assert!(state.geocode.pending_request.is_none());
    }

    #[test]
    fn newer_request_replaces_pending_one() {
        let mut state = AppState::new();
        request_geocode(&mut state, "Paris");
        request_geocode(&mut state, "Lyon");

        assert_eq!(state.geocode.pending_request.as_deref(), Some("Lyon"));
    }

    #[test]
    fn resolved_result_is_cached() {
        let mut state = AppState::new();

        resolve_geocode(&mut state, "Paris", Some(GeoPoint::new(48.8566, 2.3522)));

        assert!(state.geocode.cache.get("Paris").is_some());
    }

    #[test]
    fn failed_result_is_not_cached() {
        let mut state = AppState::new();

        resolve_geocode(&mut state, "Nirgendwo", None);

        assert!(state.geocode.cache.get("Nirgendwo").is_none());
    }

    #[test]
    fn resolved_address_annotates_matching_selection() {
        let mut state = AppState::new();
        let position = GeoPoint::new(48.8566, 2.3522);
        let id = state
            .markers
            .add("A", position, std::iter::empty::<String>().collect());
        state.selection.selected_marker = Some(id);

        store_resolved_address(&mut state, position, Some("Rue de Rivoli".to_string()));

        assert_eq!(
            state.selection.selected_address.as_deref(),
            Some("Rue de Rivoli")
        );
        assert_eq!(state.geocode.cache.get_reverse(position), Some("Rue de Rivoli"));
    }

    #[test]
    fn resolved_address_for_other_position_only_fills_cache() {
        let mut state = AppState::new();
        let id = state.markers.add(
            "A",
            GeoPoint::new(48.8566, 2.3522),
            std::iter::empty::<String>().collect(),
        );
        state.selection.selected_marker = Some(id);

        let elsewhere = GeoPoint::new(52.52, 13.405);
        store_resolved_address(&mut state, elsewhere, Some("Berlin".to_string()));

        assert!(state.selection.selected_address.is_none());
        assert_eq!(state.geocode.cache.get_reverse(elsewhere), Some("Berlin"));
    }
}
