//! Signup service for school and club activities.
//!
//! The whole directory lives in process memory: a fixed set of activities,
//! each with a participant list that grows through signups and shrinks
//! through removals. Three JSON endpoints expose it, next to a static
//! front end served from disk.

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;
