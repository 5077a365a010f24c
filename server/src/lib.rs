//! Vendora is a multi-tenant marketplace backend.
//!
//! This crate hosts the vendor settings service: a fixed catalog of
//! per-vendor configuration categories with lazy default seeding,
//! transactional multi-category updates, and a small REST surface
//! returning a uniform JSON envelope. Storage is injected through the
//! `SettingsAdapter` trait from `vendora-types`.

#![forbid(unsafe_code)]

pub mod app;
pub mod prelude;
pub mod routes;
pub mod settings;

pub use crate::app::{App, AppBuilder, AppState};

// vim: ts=4
