use crate::geocode::GeocodeCache;

/// Geocoding-Zustand: offene Anfrage (Host-Outbox) plus Ergebnis-Cache.
///
/// Der Core blockiert nie auf dem Dienst: eine offene Anfrage wird vom Host
/// entnommen, asynchron aufgelöst und als `GeocodeResolved`-Event
/// zurückgespeist.
#[derive(Debug, Clone, Default)]
pub struct GeocodeState {
    /// Vom Host abzuholende Adress-Anfrage
    pub pending_request: Option<String>,
    /// Cache aufgelöster Anfragen
    pub cache: GeocodeCache,
}

impl GeocodeState {
    /// Erstellt den leeren Geocoding-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entnimmt die offene Anfrage (einmalige Zustellung an den Host).
    pub fn take_pending_request(&mut self) -> Option<String> {
        self.pending_request.take()
    }
}
