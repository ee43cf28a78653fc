//! Configuration loading and management for the stay pricing service.
//!
//! This module loads a resort catalog (accommodation types, add-ons and rate
//! adjustments) from YAML files, and reads the HTTP server settings from the
//! environment.
//!
//! # Example
//!
//! ```no_run
//! use stay_pricing::config::CatalogLoader;
//!
//! let catalog = CatalogLoader::load("./config/sample_resort").unwrap();
//! println!("Loaded resort: {}", catalog.resort().name);
//! ```

mod loader;
mod settings;
mod types;

pub use loader::CatalogLoader;
pub use settings::{CATALOG_VAR, HOST_VAR, LOG_VAR, PORT_VAR, ServerSettings};
pub use types::{
    AccommodationTypesConfig, AddonsConfig, RateAdjustmentsConfig, ResortCatalog, ResortMetadata,
};
