//! Application state for the pricing API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::CatalogLoader;

/// Shared application state.
///
/// Holds the resort catalog, read-only, for every request handler. Each
/// request prices against the catalog as loaded at start-up.
#[derive(Clone)]
pub struct AppState {
    /// The loaded resort catalog.
    catalog: Arc<CatalogLoader>,
}

impl AppState {
    /// Creates a new application state with the given catalog.
    pub fn new(catalog: CatalogLoader) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Returns a reference to the catalog.
    pub fn catalog(&self) -> &CatalogLoader {
        &self.catalog
    }
}
