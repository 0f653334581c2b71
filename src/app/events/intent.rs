use crate::core::GeoPoint;
use crate::shared::MapOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/Widget/Host ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Tag in der Auswahl-UI gewählt (roher String, Sentinel "all" = alles zeigen)
    TagSelected { tag: String },
    /// Karten-Widget meldet neuen Ausschnitt (nach Pan oder Zoom)
    ViewportMoved { center: GeoPoint, zoom: f32 },
    /// Viewport auf den Startzustand zurücksetzen
    ResetViewRequested,
    /// Marker nahe einer Klick-Position selektieren
    MarkerPickRequested { at: GeoPoint },
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Neuen Marker anlegen
    AddMarkerRequested {
        name: String,
        position: GeoPoint,
        tags: Vec<String>,
    },
    /// Tags eines bestehenden Markers ersetzen
    RetagMarkerRequested { marker_id: u64, tags: Vec<String> },
    /// Such-Eingabe abgeschickt (Adresse oder direkte "lat, lon"-Koordinate)
    GeocodeRequested { query: String },
    /// Asynchrone Geocoding-Antwort des Hosts (None = kein Treffer/Timeout)
    GeocodeResolved {
        query: String,
        result: Option<GeoPoint>,
    },
    /// Asynchrone Rückwärts-Geocoding-Antwort des Hosts
    ReverseGeocodeResolved {
        position: GeoPoint,
        address: Option<String>,
    },
    /// GPX-Datei als Marker-Quelle importieren
    ImportGpxRequested { path: String },
    /// Aktuelle Marker als GPX-Datei exportieren
    ExportGpxRequested { path: String },
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: MapOptions },
}
