//! Catalog types for resort configuration.
//!
//! This module contains the strongly-typed structures deserialized from the
//! resort catalog YAML files, and the [`ResortCatalog`] that indexes them.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::format::CurrencyFormat;
use crate::models::{AccommodationType, Addon, RateAdjustment};

/// Metadata about the resort.
#[derive(Debug, Clone, Deserialize)]
pub struct ResortMetadata {
    /// Short code identifying the resort (tenant).
    pub code: String,
    /// The human-readable name of the resort.
    pub name: String,
    /// The currency prices are displayed in.
    #[serde(default)]
    pub currency: CurrencyFormat,
}

/// Structure of `accommodation_types.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccommodationTypesConfig {
    /// Every accommodation type offered by the resort.
    pub accommodation_types: Vec<AccommodationType>,
}

/// Structure of `addons.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddonsConfig {
    /// Every add-on offered by the resort.
    #[serde(default)]
    pub addons: Vec<Addon>,
}

/// Structure of `rate_adjustments.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RateAdjustmentsConfig {
    /// Rate adjustments, in priority order.
    #[serde(default)]
    pub rate_adjustments: Vec<RateAdjustment>,
}

/// The complete catalog of one resort.
///
/// Accommodation types and add-ons are indexed by id. Rate adjustments keep
/// their file order, since the first matching adjustment wins.
#[derive(Debug, Clone)]
pub struct ResortCatalog {
    metadata: ResortMetadata,
    accommodation_types: HashMap<String, AccommodationType>,
    addons: HashMap<String, Addon>,
    rate_adjustments: Vec<RateAdjustment>,
}

impl ResortCatalog {
    /// Builds a catalog from its component parts.
    ///
    /// Fails with [`EngineError::DuplicateCatalogEntry`] if two accommodation
    /// types or two add-ons share an id.
    pub fn new(
        metadata: ResortMetadata,
        accommodation_types: Vec<AccommodationType>,
        addons: Vec<Addon>,
        rate_adjustments: Vec<RateAdjustment>,
    ) -> EngineResult<Self> {
        let accommodation_types = index_by_id(accommodation_types, "accommodation type", |t| &t.id)?;
        let addons = index_by_id(addons, "add-on", |a| &a.id)?;

        Ok(Self {
            metadata,
            accommodation_types,
            addons,
            rate_adjustments,
        })
    }

    /// Returns the resort metadata.
    pub fn resort(&self) -> &ResortMetadata {
        &self.metadata
    }

    /// Returns all accommodation types by id.
    pub fn accommodation_types(&self) -> &HashMap<String, AccommodationType> {
        &self.accommodation_types
    }

    /// Returns all add-ons by id.
    pub fn addons(&self) -> &HashMap<String, Addon> {
        &self.addons
    }

    /// Returns all rate adjustments, in priority order.
    pub fn rate_adjustments(&self) -> &[RateAdjustment] {
        &self.rate_adjustments
    }
}

fn index_by_id<T>(
    records: Vec<T>,
    kind: &str,
    id_of: impl Fn(&T) -> &String,
) -> EngineResult<HashMap<String, T>> {
    let mut indexed = HashMap::with_capacity(records.len());
    for record in records {
        let id = id_of(&record).clone();
        if indexed.contains_key(&id) {
            return Err(EngineError::DuplicateCatalogEntry {
                kind: kind.to_string(),
                id,
            });
        }
        indexed.insert(id, record);
    }
    Ok(indexed)
}
