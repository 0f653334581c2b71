/// Selektions-Zustand: aktuell gewählter Marker plus Adress-Annotation.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// ID des zuletzt angewählten Markers
    pub selected_marker: Option<u64>,
    /// Rückwärts-geocodierte Adresse zur Selektion (falls aufgelöst)
    pub selected_address: Option<String>,
}

impl SelectionState {
    /// Erstellt eine leere Selektion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.selected_marker = None;
        self.selected_address = None;
    }
}
