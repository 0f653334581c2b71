//! Zentrale Konfiguration für den POI-Map-Explorer.
//!
//! `MapOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Sichtbarkeits-Filter ────────────────────────────────────────────

/// Umkreis in Kilometern, innerhalb dessen Marker ohne Tag-Filter sichtbar sind.
pub const PROXIMITY_THRESHOLD_KM: f64 = 10.0;
/// Zoomstufe, ab der der Umkreisfilter alle Marker zeigt.
pub const ZOOM_SHOW_ALL_THRESHOLD: f32 = 2.0;

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius in Kilometern für Klick-Selektion des nächsten Markers.
pub const PICK_RADIUS_KM: f64 = 1.0;

/// Alle zur Laufzeit änderbaren Explorer-Optionen.
/// Wird als `poi_map_explorer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    // ── Umkreisfilter ───────────────────────────────────────────
    /// Sichtbarkeits-Umkreis in Kilometern
    pub proximity_threshold_km: f64,
    /// Zoomstufe, ab der alle Marker gezeigt werden
    pub zoom_show_all_threshold: f32,

    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Radius in Kilometern für Marker-Selektion
    #[serde(default = "default_pick_radius_km")]
    pub pick_radius_km: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            proximity_threshold_km: PROXIMITY_THRESHOLD_KM,
            zoom_show_all_threshold: ZOOM_SHOW_ALL_THRESHOLD,
            pick_radius_km: PICK_RADIUS_KM,
        }
    }
}

/// Serde-Default für `pick_radius_km` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_pick_radius_km() -> f64 {
    PICK_RADIUS_KM
}

impl MapOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("poi_map_explorer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("poi_map_explorer.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let opts = MapOptions::default();
        assert_eq!(opts.proximity_threshold_km, PROXIMITY_THRESHOLD_KM);
        assert_eq!(opts.zoom_show_all_threshold, ZOOM_SHOW_ALL_THRESHOLD);
        assert_eq!(opts.pick_radius_km, PICK_RADIUS_KM);
    }

    #[test]
    fn toml_roundtrip_preserves_options() {
        let mut opts = MapOptions::default();
        opts.proximity_threshold_km = 25.0;
        opts.zoom_show_all_threshold = 4.0;

        let text = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let reparsed: MapOptions = toml::from_str(&text).expect("Parsen erwartet");
        assert_eq!(reparsed, opts);
    }

    #[test]
    fn missing_pick_radius_falls_back_to_default() {
        // Ältere Options-Datei ohne pick_radius_km
        let text = "proximity_threshold_km = 12.0\nzoom_show_all_threshold = 3.0\n";
        let opts: MapOptions = toml::from_str(text).expect("Parsen erwartet");

        assert_eq!(opts.proximity_threshold_km, 12.0);
        assert_eq!(opts.pick_radius_km, PICK_RADIUS_KM);
    }
}
