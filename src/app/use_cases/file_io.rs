//! Use-Cases für GPX-Import und -Export.

use anyhow::Context;

use crate::app::state::TagSelection;
use crate::app::use_cases::filtering;
use crate::app::AppState;
use crate::gpx;

/// Importiert eine GPX-Datei als neuen Marker-Bestand.
///
/// Der bisherige Store wird ersetzt, die Selektion aufgehoben und das
/// aktive Sichtbarkeits-Regime auf den neuen Bestand angewendet.
pub fn import_gpx(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("GPX-Datei nicht lesbar: {path}"))?;
    let store = gpx::parse_gpx(&content)?;

    log::info!("{} Marker aus {} geladen", store.len(), path);
    state.markers = store;
    state.selection.clear();

    match state.filter.active_tag.clone() {
        TagSelection::None => filtering::apply_proximity_filter(state),
        selection => {
            filtering::apply_tag_filter(state, selection);
        }
    }

    Ok(())
}

/// Exportiert den aktuellen Marker-Bestand als GPX-Datei.
pub fn export_gpx(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let content = gpx::write_gpx(&state.markers)?;
    std::fs::write(path, content)
        .with_context(|| format!("GPX-Datei nicht schreibbar: {path}"))?;

    log::info!("{} Marker nach {} exportiert", state.markers.len(), path);
    Ok(())
}
