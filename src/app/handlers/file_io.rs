//! Handler für GPX-Import und -Export.

use crate::app::use_cases;
use crate::app::AppState;

/// Importiert eine GPX-Datei und propagiert Fehler an den Aufrufer.
pub fn import_gpx(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    use_cases::file_io::import_gpx(state, path)
}

/// Exportiert die aktuellen Marker als GPX-Datei.
pub fn export_gpx(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    use_cases::file_io::export_gpx(state, path)
}
