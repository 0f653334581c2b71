//! Application State: Store, View, Filter, Selektion, Geocoding.

mod app_state;
mod filter;
mod geocode;
mod selection;
mod view;

pub use app_state::AppState;
pub use filter::{FilterState, TagSelection};
pub use geocode::GeocodeState;
pub use selection::SelectionState;
pub use view::ViewState;
