//! POI-Map-Explorer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod geocode;
pub mod gpx;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, FilterState, MapScene, SceneMarker,
    TagSelection,
};
pub use core::{
    distance_km, GeoBounds, GeoPoint, MapViewport, MarkerStore, PoiMarker, SpatialIndex,
    SpatialMatch, HERE_TAG,
};
pub use geocode::{parse_coordinate, GeocodeCache, Geocoder};
pub use gpx::{parse_gpx, write_gpx};
pub use shared::MapOptions;
