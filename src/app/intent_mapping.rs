//! Mapping von UI-Intents auf mutierende App-Commands.

use crate::geocode::parse_coordinate;

use super::state::TagSelection;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::TagSelected { tag } => vec![AppCommand::ApplyTagFilter {
            selection: TagSelection::from_ui(&tag),
        }],
        AppIntent::ViewportMoved { center, zoom } => vec![
            AppCommand::SetViewport { center, zoom },
            AppCommand::RefreshProximityFilter,
        ],
        AppIntent::ResetViewRequested => vec![
            AppCommand::ResetViewport,
            AppCommand::RefreshProximityFilter,
        ],
        AppIntent::MarkerPickRequested { at } => vec![AppCommand::SelectNearestMarker {
            at,
            max_distance_km: state.options.pick_radius_km,
        }],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::AddMarkerRequested {
            name,
            position,
            tags,
        } => vec![AppCommand::AddMarker {
            name,
            position,
            tags,
        }],
        AppIntent::RetagMarkerRequested { marker_id, tags } => {
            vec![AppCommand::RetagMarker { marker_id, tags }]
        }
        AppIntent::GeocodeRequested { query } => {
            // Direkte Koordinaten-Eingaben und Cache-Treffer brauchen den
            // Dienst nicht; nur echte Misses landen in der Host-Outbox.
            if let Some(point) = parse_coordinate(&query) {
                vec![
                    AppCommand::CenterOnPoint { point },
                    AppCommand::RefreshProximityFilter,
                ]
            } else if let Some(point) = state.geocode.cache.get(&query) {
                vec![
                    AppCommand::CenterOnPoint { point },
                    AppCommand::RefreshProximityFilter,
                ]
            } else {
                vec![AppCommand::RequestGeocode { query }]
            }
        }
        AppIntent::GeocodeResolved { query, result } => match result {
            Some(point) => vec![
                AppCommand::ResolveGeocode {
                    query,
                    result: Some(point),
                },
                AppCommand::CenterOnPoint { point },
                AppCommand::RefreshProximityFilter,
            ],
            None => vec![AppCommand::ResolveGeocode {
                query,
                result: None,
            }],
        },
        AppIntent::ReverseGeocodeResolved { position, address } => {
            vec![AppCommand::StoreResolvedAddress { position, address }]
        }
        AppIntent::ImportGpxRequested { path } => vec![AppCommand::ImportGpx { path }],
        AppIntent::ExportGpxRequested { path } => vec![AppCommand::ExportGpx { path }],
        AppIntent::OptionsChanged { options } => vec![
            AppCommand::ApplyOptions { options },
            AppCommand::RefreshProximityFilter,
        ],
    }
}
