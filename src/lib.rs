//! Stay pricing engine for resort and hotel bookings
//!
//! This crate resolves nightly rates against seasonal rate adjustments and
//! prices single stays and multi-room group bookings, including occupancy
//! surcharges and add-ons. An HTTP API serves quotes from a YAML catalog.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
