//! Core-Domänentypen: Koordinaten, Marker, Store, Viewport, Spatial-Index.

pub mod geo;
pub mod marker;
pub mod marker_store;
pub mod spatial;
pub mod viewport;

pub use geo::{distance_km, GeoBounds, GeoPoint, EARTH_RADIUS_KM};
pub use marker::{PoiMarker, HERE_TAG};
pub use marker_store::MarkerStore;
pub use spatial::{SpatialIndex, SpatialMatch};
pub use viewport::MapViewport;
