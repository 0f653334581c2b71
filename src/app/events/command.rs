use crate::app::state::TagSelection;
use crate::core::GeoPoint;
use crate::shared::MapOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Tag-Filter anwenden und Fit-Kommando für das Widget erzeugen
    ApplyTagFilter { selection: TagSelection },
    /// Umkreisfilter über den gesamten Store neu auswerten
    /// (No-op solange ein Tag-Filter die Sichtbarkeit besitzt)
    RefreshProximityFilter,
    /// Viewport aus Widget-Meldung übernehmen
    SetViewport { center: GeoPoint, zoom: f32 },
    /// Viewport auf einen Punkt zentrieren (Zoom unverändert)
    CenterOnPoint { point: GeoPoint },
    /// Viewport auf den Startzustand zurücksetzen
    ResetViewport,
    /// Nächsten Marker zur Position selektieren
    SelectNearestMarker { at: GeoPoint, max_distance_km: f64 },
    /// Selektion aufheben
    ClearSelection,
    /// Neuen Marker anlegen
    AddMarker {
        name: String,
        position: GeoPoint,
        tags: Vec<String>,
    },
    /// Tags eines Markers ersetzen
    RetagMarker { marker_id: u64, tags: Vec<String> },
    /// Adress-Anfrage in die Host-Outbox legen
    RequestGeocode { query: String },
    /// Geocoding-Ergebnis in den Cache übernehmen
    ResolveGeocode {
        query: String,
        result: Option<GeoPoint>,
    },
    /// Rückwärts-Geocoding-Ergebnis ablegen (Cache + Selektions-Annotation)
    StoreResolvedAddress {
        position: GeoPoint,
        address: Option<String>,
    },
    /// GPX-Datei importieren
    ImportGpx { path: String },
    /// GPX-Datei exportieren
    ExportGpx { path: String },
    /// Optionen übernehmen
    ApplyOptions { options: MapOptions },
}
