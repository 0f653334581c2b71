//! Zustand des Tag-Filters.

/// Aktive Tag-Auswahl des Filters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagSelection {
    /// Noch nie ein Filter gewählt (Initialzustand einer Session)
    #[default]
    None,
    /// Explizit "alles zeigen" gewählt
    All,
    /// Konkretes Tag
    Tag(String),
}

impl TagSelection {
    /// UI-Sentinel der Tag-Auswahl für "alles zeigen".
    pub const ALL_SENTINEL: &'static str = "all";

    /// Übersetzt den rohen UI-String (Sentinel oder Tag-Name).
    pub fn from_ui(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case(Self::ALL_SENTINEL) {
            Self::All
        } else {
            Self::Tag(raw.to_string())
        }
    }

    /// Anzeige-Label für die Tag-Auswahl-UI.
    pub fn label(&self) -> &str {
        match self {
            Self::None => "",
            Self::All => Self::ALL_SENTINEL,
            Self::Tag(tag) => tag,
        }
    }
}

/// Filter-Zustand: welcher Pass besitzt aktuell die Marker-Sichtbarkeit.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Zuletzt getroffene Auswahl; die Tag-Auswahl-UI spiegelt auch `All`
    pub active_tag: TagSelection,
}

impl FilterState {
    /// Erstellt den Initialzustand (kein Filter gewählt).
    pub fn new() -> Self {
        Self::default()
    }

    /// `true`, solange ein konkretes Tag die Sichtbarkeit besitzt.
    ///
    /// `All` gibt die Sichtbarkeit an den Umkreisfilter zurück: "alles
    /// zeigen" ist eine explizite Auswahl, aber keine Einschränkung.
    pub fn tag_filter_active(&self) -> bool {
        matches!(self.active_tag, TagSelection::Tag(_))
    }
}
