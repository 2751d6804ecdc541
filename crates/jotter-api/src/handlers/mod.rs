//! HTTP handler modules for jotter-api.

pub mod health;
pub mod notes;

pub use health::{health_check, HealthResponse};
pub use notes::{create_note, delete_note, get_note, list_notes, update_note};
