//! Writer für GPX-Wegpunkt-Dateien.

use anyhow::Result;

use crate::core::MarkerStore;

/// Schreibt den Marker-Bestand als GPX-1.1-Dokument.
///
/// `<type>` trägt die Tags kommagetrennt. Marker mit nicht-endlicher
/// Position werden ausgelassen, sie wären beim Re-Import ungültig.
pub fn write_gpx(store: &MarkerStore) -> Result<String> {
    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    output.push_str(
        "<gpx version=\"1.1\" creator=\"POI-Map-Explorer\" xmlns=\"http://www.topografix.com/GPX/1/1\">\n",
    );

    for marker in store.all() {
        if !marker.position.is_finite() {
            log::warn!(
                "Marker {} ('{}') mit ungültiger Position beim Export übersprungen",
                marker.id,
                marker.name
            );
            continue;
        }

        output.push_str(&format!(
            "    <wpt lat=\"{}\" lon=\"{}\">\n",
            marker.position.lat, marker.position.lon
        ));
        output.push_str(&format!(
            "        <name>{}</name>\n",
            escape_xml(&marker.name)
        ));
        if !marker.tags.is_empty() {
            let joined = marker
                .tags
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(",");
            output.push_str(&format!(
                "        <type>{}</type>\n",
                escape_xml(&joined)
            ));
        }
        output.push_str("    </wpt>\n");
    }

    output.push_str("</gpx>\n");
    Ok(output)
}

/// Escaped die fünf XML-Sonderzeichen.
fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;
    use indexmap::IndexSet;

    fn tags(values: &[&str]) -> IndexSet<String> {
        values.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn writes_waypoints_with_tags() {
        let mut store = MarkerStore::new();
        store.add("Louvre", GeoPoint::new(48.8606, 2.3376), tags(&["Museen"]));

        let output = write_gpx(&store).expect("Export fehlgeschlagen");

        assert!(output.contains("<wpt lat=\"48.8606\" lon=\"2.3376\">"));
        assert!(output.contains("<name>Louvre</name>"));
        assert!(output.contains("<type>Museen</type>"));
    }

    #[test]
    fn escapes_special_characters_in_names() {
        let mut store = MarkerStore::new();
        store.add(
            "Café \"Chez<P&P>\"",
            GeoPoint::new(48.0, 2.0),
            tags(&[]),
        );

        let output = write_gpx(&store).expect("Export fehlgeschlagen");

        assert!(output.contains("Caf\u{e9} &quot;Chez&lt;P&amp;P&gt;&quot;"));
        assert!(!output.contains("<type>"));
    }

    #[test]
    fn skips_markers_with_non_finite_position() {
        let mut store = MarkerStore::new();
        store.add("OK", GeoPoint::new(48.0, 2.0), tags(&[]));
        store.add("Kaputt", GeoPoint::new(f64::NAN, 2.0), tags(&[]));

        let output = write_gpx(&store).expect("Export fehlgeschlagen");

        assert!(output.contains("<name>OK</name>"));
        assert!(!output.contains("Kaputt"));
    }
}
