use crate::app::CommandLog;
use crate::core::MarkerStore;
use crate::shared::MapOptions;

use super::{FilterState, GeocodeState, SelectionState, ViewState};

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Alle bekannten POI-Marker
    pub markers: MarkerStore,
    /// View-State (Viewport + ausstehendes Fit-Kommando)
    pub view: ViewState,
    /// Filter-State (aktive Tag-Auswahl)
    pub filter: FilterState,
    /// Selektions-State
    pub selection: SelectionState,
    /// Geocoding-State (Outbox + Cache)
    pub geocode: GeocodeState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Filter-Schwellwerte, Pick-Radius)
    pub options: MapOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State.
    pub fn new() -> Self {
        Self {
            markers: MarkerStore::new(),
            view: ViewState::new(),
            filter: FilterState::new(),
            selection: SelectionState::new(),
            geocode: GeocodeState::new(),
            command_log: CommandLog::new(),
            options: MapOptions::default(),
        }
    }

    /// Gibt die Anzahl der Marker zurück (für UI-Anzeige).
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Gibt die Anzahl aktuell sichtbarer Marker zurück (für UI-Anzeige).
    pub fn visible_count(&self) -> usize {
        self.markers.visible_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
