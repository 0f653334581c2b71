//! Handler für die Sichtbarkeits-Filter.

use crate::app::state::TagSelection;
use crate::app::use_cases;
use crate::app::AppState;

/// Wendet den Tag-Filter an.
pub fn apply_tag_filter(state: &mut AppState, selection: TagSelection) {
    use_cases::filtering::apply_tag_filter(state, selection);
}

/// Wertet den Umkreisfilter neu aus (No-op bei aktivem Tag-Filter).
pub fn refresh_proximity_filter(state: &mut AppState) {
    use_cases::filtering::apply_proximity_filter(state);
}
