//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading a resort
//! catalog from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{AccommodationType, Addon, AddonSelection, RateAdjustment};

use super::types::{
    AccommodationTypesConfig, AddonsConfig, RateAdjustmentsConfig, ResortCatalog, ResortMetadata,
};

/// Loads and provides access to a resort catalog.
///
/// # Directory Structure
///
/// ```text
/// config/sample_resort/
/// ├── resort.yaml               # Resort metadata and currency
/// ├── accommodation_types.yaml  # Rentable unit categories
/// ├── addons.yaml               # Purchasable extras
/// └── rate_adjustments.yaml     # Discounts, surcharges, overrides (priority order)
/// ```
///
/// # Example
///
/// ```no_run
/// use stay_pricing::config::CatalogLoader;
///
/// let loader = CatalogLoader::load("./config/sample_resort").unwrap();
/// let cottage = loader.get_accommodation_type("deluxe_cottage").unwrap();
/// println!("{} sleeps {}", cottage.name, cottage.max_pax);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: ResortCatalog,
}

impl CatalogLoader {
    /// Loads a catalog from the specified directory.
    ///
    /// Returns an error if any file is missing or contains invalid YAML, or
    /// if accommodation type or add-on ids repeat.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ResortMetadata>(&path.join("resort.yaml"))?;
        let types = Self::load_yaml::<AccommodationTypesConfig>(&path.join("accommodation_types.yaml"))?;
        let addons = Self::load_yaml::<AddonsConfig>(&path.join("addons.yaml"))?;
        let adjustments =
            Self::load_yaml::<RateAdjustmentsConfig>(&path.join("rate_adjustments.yaml"))?;

        let catalog = ResortCatalog::new(
            metadata,
            types.accommodation_types,
            addons.addons,
            adjustments.rate_adjustments,
        )?;

        Ok(Self { catalog })
    }

    /// Wraps an already-built catalog.
    pub fn from_catalog(catalog: ResortCatalog) -> Self {
        Self { catalog }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying catalog.
    pub fn catalog(&self) -> &ResortCatalog {
        &self.catalog
    }

    /// Returns the resort metadata.
    pub fn resort(&self) -> &ResortMetadata {
        self.catalog.resort()
    }

    /// Gets an accommodation type by its id.
    pub fn get_accommodation_type(&self, id: &str) -> EngineResult<&AccommodationType> {
        self.catalog
            .accommodation_types()
            .get(id)
            .ok_or_else(|| EngineError::AccommodationTypeNotFound { id: id.to_string() })
    }

    /// Gets an add-on by its id.
    pub fn get_addon(&self, id: &str) -> EngineResult<&Addon> {
        self.catalog
            .addons()
            .get(id)
            .ok_or_else(|| EngineError::AddonNotFound { id: id.to_string() })
    }

    /// Resolves `(addon_id, quantity)` pairs into selections.
    pub fn select_addons<'a, I>(&self, choices: I) -> EngineResult<Vec<AddonSelection>>
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        choices
            .into_iter()
            .map(|(id, quantity)| -> EngineResult<AddonSelection> {
                Ok(AddonSelection::new(self.get_addon(id)?.clone(), quantity))
            })
            .collect()
    }

    /// Returns the resort's rate adjustments, active and inactive, in priority order.
    pub fn rate_adjustments(&self) -> &[RateAdjustment] {
        self.catalog.rate_adjustments()
    }
}
