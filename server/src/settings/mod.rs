//! Vendor settings subsystem
//!
//! # Architecture
//!
//! - **Seed** (`seed.rs`): the fixed 16-category default catalog
//! - **Sanitize** (`sanitize.rs`): allow-listed field table, value
//!   sanitization and boundary validation
//! - **Service** (`service.rs`): view building, lazy seeding, partial
//!   update routing on top of the injected `SettingsAdapter`
//! - **Handler** (`handler.rs`): HTTP API endpoints
//! - **Types** (`types.rs`): the structured settings view
//!
//! The store holds one opaque JSON payload per (vendor, category). All
//! field-level sanitization happens here at the API boundary; the store
//! only ever sees already-sanitized full-replacement payloads.

pub mod handler;
pub mod sanitize;
pub mod seed;
pub mod service;
pub mod types;

pub use seed::{SeedOverrides, default_categories};
pub use service::SettingsService;
pub use types::SettingsView;

// vim: ts=4
