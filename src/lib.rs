//! Studyflow - Studieplaneringskärna
//!
//! Datamodell, lagring och beräknade vyer för en studieplanerare.
//! All rendering sköts av ett UI-lager utanför denna crate.

#![allow(dead_code)]

pub mod models;
pub mod store;
pub mod storage;
pub mod services;
pub mod utils;

// Re-exports
pub use models::*;
pub use storage::Storage;
pub use store::{AppData, Store};
