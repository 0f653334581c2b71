use crate::core::{GeoBounds, MapViewport};

/// View-bezogener Anwendungszustand.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Letzter vom Karten-Widget gemeldeter Ausschnitt
    pub viewport: MapViewport,
    /// Ausstehendes "fit bounds"-Kommando an das Widget.
    /// `None` bedeutet: Viewport unverändert lassen.
    pub pending_fit: Option<GeoBounds>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport: MapViewport::new(),
            pending_fit: None,
        }
    }

    /// Entnimmt das ausstehende Fit-Kommando (einmalige Zustellung).
    pub fn take_pending_fit(&mut self) -> Option<GeoBounds> {
        self.pending_fit.take()
    }
}
