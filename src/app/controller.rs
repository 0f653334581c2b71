//! Application Controller für zentrale Event-Verarbeitung.
//!
//! Jeder Intent wird vollständig abgearbeitet, bevor das nächste Event
//! verarbeitet wird; zwischen zwei Markern eines Filter-Passes ist nie ein
//! Teilzustand beobachtbar.

use super::scene::{self, MapScene};
use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Sichtbarkeits-Filter ===
            AppCommand::ApplyTagFilter { selection } => {
                handlers::filtering::apply_tag_filter(state, selection)
            }
            AppCommand::RefreshProximityFilter => {
                handlers::filtering::refresh_proximity_filter(state)
            }

            // === Viewport ===
            AppCommand::SetViewport { center, zoom } => {
                handlers::view::set_viewport(state, center, zoom)
            }
            AppCommand::CenterOnPoint { point } => handlers::view::center_on_point(state, point),
            AppCommand::ResetViewport => handlers::view::reset_viewport(state),

            // === Marker & Selektion ===
            AppCommand::SelectNearestMarker {
                at,
                max_distance_km,
            } => handlers::markers::select_nearest(state, at, max_distance_km),
            AppCommand::ClearSelection => handlers::markers::clear_selection(state),
            AppCommand::AddMarker {
                name,
                position,
                tags,
            } => handlers::markers::add_marker(state, &name, position, tags),
            AppCommand::RetagMarker { marker_id, tags } => {
                handlers::markers::retag_marker(state, marker_id, tags)
            }

            // === Geocoding ===
            AppCommand::RequestGeocode { query } => {
                handlers::geocoding::request_geocode(state, &query)
            }
            AppCommand::ResolveGeocode { query, result } => {
                handlers::geocoding::resolve_geocode(state, &query, result)
            }
            AppCommand::StoreResolvedAddress { position, address } => {
                handlers::geocoding::store_resolved_address(state, position, address)
            }

            // === Datei-I/O ===
            AppCommand::ImportGpx { path } => handlers::file_io::import_gpx(state, &path)?,
            AppCommand::ExportGpx { path } => handlers::file_io::export_gpx(state, &path)?,

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::view::apply_options(state, options),
        }

        Ok(())
    }

    /// Baut den Szenen-Schnappschuss für das Karten-Widget aus dem
    /// aktuellen AppState (entnimmt das ausstehende Fit-Kommando).
    pub fn build_scene(&self, state: &mut AppState) -> MapScene {
        scene::build(state)
    }
}
