//! Parser für GPX-Wegpunkt-Dateien.
//!
//! Gelesen wird die Wegpunkt-Teilmenge von GPX 1.1: `<wpt lat lon>` mit
//! optionalem `<name>` und `<type>`; `<type>` trägt kommagetrennte Tags.
//! Routen und Tracks werden ignoriert.

use anyhow::{bail, Context, Result};
use indexmap::IndexSet;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::core::{GeoPoint, MarkerStore};

/// Parsed eine GPX-Datei aus einem XML-String in einen Marker-Store.
pub fn parse_gpx(xml_content: &str) -> Result<MarkerStore> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);

    let mut buffer = Vec::new();

    let mut saw_gpx_root = false;
    let mut in_gpx = false;
    let mut in_wpt = false;
    let mut current_tag: Option<String> = None;

    let mut wpt_index = 0u32;
    let mut wpt_position: Option<GeoPoint> = None;
    let mut wpt_name = String::new();
    let mut wpt_type = String::new();

    let mut records: Vec<(String, GeoPoint, IndexSet<String>)> = Vec::new();

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) => {
                let name = e.name();
                let tag = reader.decoder().decode(name.as_ref())?;

                if tag == "gpx" {
                    saw_gpx_root = true;
                    in_gpx = true;
                } else if tag == "wpt" {
                    if !in_gpx {
                        bail!("<wpt> außerhalb des <gpx>-Wurzelelements");
                    }
                    in_wpt = true;
                    wpt_index += 1;
                    wpt_name.clear();
                    wpt_type.clear();

                    let mut lat: Option<f64> = None;
                    let mut lon: Option<f64> = None;
                    for attr in e.attributes().with_checks(false) {
                        let attr = attr?;
                        let key = reader.decoder().decode(attr.key.as_ref())?;
                        let value = attr.unescape_value()?.into_owned();
                        if key == "lat" {
                            lat = Some(value.trim().parse::<f64>().with_context(|| {
                                format!("Ungueltige Breite in <wpt> #{wpt_index}: '{value}'")
                            })?);
                        } else if key == "lon" {
                            lon = Some(value.trim().parse::<f64>().with_context(|| {
                                format!("Ungueltige Laenge in <wpt> #{wpt_index}: '{value}'")
                            })?);
                        }
                    }

                    let lat = lat
                        .with_context(|| format!("<wpt> #{wpt_index} ohne lat-Attribut"))?;
                    let lon = lon
                        .with_context(|| format!("<wpt> #{wpt_index} ohne lon-Attribut"))?;
                    wpt_position = Some(GeoPoint::new(lat, lon));
                } else if in_wpt {
                    current_tag = Some(tag.to_string());
                }
            }
            Ok(Event::Empty(ref e)) => {
                // Selbstschließende Elemente innerhalb eines Wegpunkts
                // (z.B. <extensions/>) sind erlaubt und tragen nichts bei
                let _name = e.name();
            }
            Ok(Event::Text(e)) => {
                let text = e.xml_content()?.into_owned();

                if in_wpt {
                    match current_tag.as_deref() {
                        Some("name") => wpt_name.push_str(&text),
                        Some("type") => wpt_type.push_str(&text),
                        _ => {}
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();
                let tag = reader.decoder().decode(name.as_ref())?;

                if tag == "gpx" {
                    in_gpx = false;
                } else if tag == "wpt" {
                    in_wpt = false;
                    current_tag = None;

                    let position = wpt_position
                        .take()
                        .with_context(|| format!("<wpt> #{wpt_index} ohne Position"))?;
                    let display_name = if wpt_name.trim().is_empty() {
                        format!("Wegpunkt {wpt_index}")
                    } else {
                        wpt_name.trim().to_string()
                    };
                    records.push((display_name, position, parse_tags(&wpt_type)));
                } else if current_tag.as_deref() == Some(tag.as_ref()) {
                    current_tag = None;
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err).context("Fehler beim Parsen des GPX"),
            _ => {}
        }

        buffer.clear();
    }

    if !saw_gpx_root {
        bail!("Kein <gpx>-Wurzelelement gefunden");
    }

    Ok(MarkerStore::from_records(records))
}

/// Zerlegt den `<type>`-Inhalt in ein Tag-Set (kommagetrennt, getrimmt).
fn parse_tags(text: &str) -> IndexSet<String> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HERE_TAG;

    #[test]
    fn parses_waypoints_with_names_and_tags() {
        let xml = r#"
        <gpx version="1.1" creator="test">
            <wpt lat="48.8606" lon="2.3376">
                <name>Louvre</name>
                <type>Museen,Favorites</type>
            </wpt>
            <wpt lat="48.8559" lon="2.3315">
                <name>Standort</name>
                <type>Here</type>
            </wpt>
        </gpx>
        "#;

        let store = parse_gpx(xml).expect("Parsing fehlgeschlagen");
        assert_eq!(store.len(), 2);

        let louvre = store.get(1).expect("Marker 1 erwartet");
        assert_eq!(louvre.name, "Louvre");
        assert!(louvre.has_tag("Museen"));
        assert!(louvre.has_tag("Favorites"));
        assert!(!louvre.pinned);

        let here = store.get(2).expect("Marker 2 erwartet");
        assert!(here.has_tag(HERE_TAG));
        assert!(here.pinned);
    }

    #[test]
    fn missing_name_gets_numbered_fallback() {
        let xml = r#"
        <gpx version="1.1" creator="test">
            <wpt lat="48.0" lon="2.0">
                <type>Other</type>
            </wpt>
        </gpx>
        "#;

        let store = parse_gpx(xml).expect("Parsing fehlgeschlagen");
        assert_eq!(store.get(1).expect("Marker erwartet").name, "Wegpunkt 1");
    }

    #[test]
    fn rejects_waypoint_without_lat() {
        let xml = r#"
        <gpx version="1.1" creator="test">
            <wpt lon="2.0"><name>Kaputt</name></wpt>
        </gpx>
        "#;

        let err = parse_gpx(xml).expect_err("Parser sollte fehlschlagen");
        let msg = format!("{err:#}");
        assert!(msg.contains("ohne lat-Attribut"));
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        let xml = r#"
        <gpx version="1.1" creator="test">
            <wpt lat="abc" lon="2.0"><name>Kaputt</name></wpt>
        </gpx>
        "#;

        let err = parse_gpx(xml).expect_err("Parser sollte fehlschlagen");
        let msg = format!("{err:#}");
        assert!(msg.contains("Ungueltige Breite"));
    }

    #[test]
    fn rejects_missing_gpx_root() {
        let err = parse_gpx("<other/>").expect_err("Parser sollte fehlschlagen");
        assert!(format!("{err:#}").contains("Kein <gpx>-Wurzelelement"));
    }

    #[test]
    fn unknown_elements_are_ignored() {
        let xml = r#"
        <gpx version="1.1" creator="test">
            <metadata><author>wer auch immer</author></metadata>
            <wpt lat="48.0" lon="2.0">
                <name>A</name>
                <ele>35.0</ele>
                <type>Parks</type>
            </wpt>
        </gpx>
        "#;

        let store = parse_gpx(xml).expect("Parsing fehlgeschlagen");
        assert_eq!(store.len(), 1);
        let marker = store.get(1).expect("Marker erwartet");
        assert_eq!(marker.name, "A");
        assert!(marker.has_tag("Parks"));
        assert_eq!(marker.tags.len(), 1);
    }

    #[test]
    fn empty_type_yields_no_tags() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
        let tags = parse_tags(" Parks , Favorites ");
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("Parks"));
    }
}
