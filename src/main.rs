//! POI-Map-Explorer (Shell).
//!
//! Headless-Host für den Explorer-Core: liest zeilenweise Befehle, übersetzt
//! sie in Intents und druckt Szenen-Schnappschüsse als JSON. Über dieses
//! Format erhält ein angebundenes Karten-Widget die sichtbaren Marker.

use std::io::BufRead;

use poi_map_explorer::{AppController, AppIntent, AppState, GeoPoint, MapOptions};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "POI-Map-Explorer v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = MapOptions::config_path();
    let options = MapOptions::load_from_file(&config_path);

    let mut state = AppState::new();
    state.options = options;
    let mut controller = AppController::new();

    // Optionaler Startbestand: GPX-Pfad als erstes Argument
    if let Some(path) = std::env::args().nth(1) {
        controller.handle_intent(&mut state, AppIntent::ImportGpxRequested { path })?;
    }

    print_help();

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "quit" || trimmed == "exit" {
            break;
        }

        match parse_command(trimmed) {
            Some(ShellCommand::Intent(intent)) => {
                if let Err(e) = controller.handle_intent(&mut state, intent) {
                    log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
                }
                drain_geocode_outbox(&mut controller, &mut state);
            }
            Some(ShellCommand::Scene) => {
                let scene = controller.build_scene(&mut state);
                println!("{}", serde_json::to_string_pretty(&scene)?);
            }
            Some(ShellCommand::Tags) => {
                for (tag, count) in state.markers.tag_summary() {
                    println!("  {tag}: {count}");
                }
            }
            Some(ShellCommand::Help) => print_help(),
            None => log::warn!("Unbekannter Befehl: '{}'", trimmed),
        }
    }

    Ok(())
}

/// Befehle der Shell: entweder ein Core-Intent oder lokale Ausgabe.
enum ShellCommand {
    Intent(AppIntent),
    Scene,
    Tags,
    Help,
}

/// Übersetzt eine Eingabezeile in einen Shell-Befehl.
fn parse_command(line: &str) -> Option<ShellCommand> {
    let mut parts = line.split_whitespace();
    let verb = parts.next()?;

    let intent = match verb {
        "scene" => return Some(ShellCommand::Scene),
        "tags" => return Some(ShellCommand::Tags),
        "help" => return Some(ShellCommand::Help),
        "reset" => AppIntent::ResetViewRequested,
        "tag" => AppIntent::TagSelected {
            tag: parts.next()?.to_string(),
        },
        "view" => AppIntent::ViewportMoved {
            center: GeoPoint::new(
                parts.next()?.parse().ok()?,
                parts.next()?.parse().ok()?,
            ),
            zoom: parts.next()?.parse().ok()?,
        },
        "pick" => AppIntent::MarkerPickRequested {
            at: GeoPoint::new(parts.next()?.parse().ok()?, parts.next()?.parse().ok()?),
        },
        "goto" => {
            let query = line.strip_prefix("goto")?.trim();
            if query.is_empty() {
                return None;
            }
            AppIntent::GeocodeRequested {
                query: query.to_string(),
            }
        }
        // add <lat> <lon> <tags,csv> <name...>
        "add" => {
            let position = GeoPoint::new(parts.next()?.parse().ok()?, parts.next()?.parse().ok()?);
            let tags = split_tags(parts.next()?);
            let name = parts.collect::<Vec<_>>().join(" ");
            if name.is_empty() {
                return None;
            }
            AppIntent::AddMarkerRequested {
                name,
                position,
                tags,
            }
        }
        // retag <id> <tags,csv>
        "retag" => AppIntent::RetagMarkerRequested {
            marker_id: parts.next()?.parse().ok()?,
            tags: split_tags(parts.next()?),
        },
        "load" => AppIntent::ImportGpxRequested {
            path: parts.next()?.to_string(),
        },
        "save" => AppIntent::ExportGpxRequested {
            path: parts.next()?.to_string(),
        },
        _ => return None,
    };

    Some(ShellCommand::Intent(intent))
}

fn split_tags(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Ohne angebundenen Geocoding-Dienst wird jede offene Anfrage sofort als
/// ergebnislos zurückgemeldet. Das ist derselbe Event-Pfad, den ein echter
/// Host nach seinem asynchronen Dienst-Aufruf nimmt.
fn drain_geocode_outbox(controller: &mut AppController, state: &mut AppState) {
    if let Some(query) = state.geocode.take_pending_request() {
        log::warn!("Kein Geocoding-Dienst verbunden: '{}' bleibt ohne Treffer", query);
        if let Err(e) = controller.handle_intent(
            state,
            AppIntent::GeocodeResolved {
                query,
                result: None,
            },
        ) {
            log::error!("Geocoding-Rückmeldung fehlgeschlagen: {:#}", e);
        }
    }
}

fn print_help() {
    println!("Befehle:");
    println!("  tag <name|all>              Tag-Filter anwenden");
    println!("  view <lat> <lon> <zoom>     Viewport-Meldung simulieren");
    println!("  goto <adresse|lat, lon>     Zentrum per Geocoding/Koordinate");
    println!("  pick <lat> <lon>            Nächsten Marker selektieren");
    println!("  add <lat> <lon> <tags> <name>   Marker anlegen (Tags kommagetrennt)");
    println!("  retag <id> <tags>           Tags eines Markers ersetzen");
    println!("  load <pfad> / save <pfad>   GPX importieren/exportieren");
    println!("  scene | tags | reset | help | quit");
}
