//! Use-Case-Funktionen: die eigentliche Mutationslogik auf dem AppState.

pub mod file_io;
pub mod filtering;
pub mod geocoding;
pub mod markers;
pub mod viewport;
