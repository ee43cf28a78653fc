//! Request types for the pricing API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/calculate/multi-room` endpoints. Requests refer to catalog records by
//! id; the API resolves them against the loaded catalog and validates the
//! inputs the engine deliberately leaves unchecked.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::CatalogLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{AddonSelection, RoomEntry};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Departure date.
    pub check_out: NaiveDate,
    /// The accommodation type being booked.
    pub accommodation_type_id: String,
    /// Adults in the party.
    pub num_adults: u32,
    /// Children in the party.
    #[serde(default)]
    pub num_children: u32,
    /// Add-ons chosen for the stay.
    #[serde(default)]
    pub addons: Vec<AddonChoice>,
}

/// Request body for the `/calculate/multi-room` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiRoomQuoteRequest {
    /// First night of the stay, shared by every room.
    pub check_in: NaiveDate,
    /// Departure date, shared by every room.
    pub check_out: NaiveDate,
    /// The rooms being booked.
    pub rooms: Vec<RoomRequest>,
    /// Add-ons charged once for the whole group.
    #[serde(default)]
    pub group_addons: Vec<AddonChoice>,
}

/// One room in a multi-room request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRequest {
    /// Identifier of the room within the request.
    pub room_id: String,
    /// The room's accommodation type.
    pub accommodation_type_id: String,
    /// Adults in the room.
    pub num_adults: u32,
    /// Children in the room.
    #[serde(default)]
    pub num_children: u32,
    /// Add-ons chosen for this room only.
    #[serde(default)]
    pub addons: Vec<AddonChoice>,
}

/// An add-on chosen by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonChoice {
    /// The add-on's catalog id.
    pub addon_id: String,
    /// How many were selected.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Longest stay a single quote may cover.
pub const MAX_STAY_NIGHTS: i64 = 365;

/// Most rooms a multi-room quote may contain.
pub const MAX_ROOMS_PER_QUOTE: usize = 50;

fn default_quantity() -> u32 {
    1
}

fn validate_dates(check_in: NaiveDate, check_out: NaiveDate) -> EngineResult<()> {
    if check_out <= check_in {
        return Err(EngineError::InvalidRequest {
            field: "check_out".to_string(),
            message: format!("must be after check_in ({})", check_in),
        });
    }

    let nights = check_out.signed_duration_since(check_in).num_days();
    if nights > MAX_STAY_NIGHTS {
        return Err(EngineError::InvalidRequest {
            field: "check_out".to_string(),
            message: format!(
                "stay of {} nights exceeds the maximum of {}",
                nights, MAX_STAY_NIGHTS
            ),
        });
    }
    Ok(())
}

fn validate_adults(field: &str, num_adults: u32) -> EngineResult<()> {
    if num_adults < 1 {
        return Err(EngineError::InvalidRequest {
            field: field.to_string(),
            message: "at least one adult is required".to_string(),
        });
    }
    Ok(())
}

fn select_addons(catalog: &CatalogLoader, choices: &[AddonChoice]) -> EngineResult<Vec<AddonSelection>> {
    catalog.select_addons(choices.iter().map(|c| (c.addon_id.as_str(), c.quantity)))
}

impl QuoteRequest {
    /// Checks the date order, stay length and guest count.
    pub fn validate(&self) -> EngineResult<()> {
        validate_dates(self.check_in, self.check_out)?;
        validate_adults("num_adults", self.num_adults)
    }

    /// Resolves the chosen add-ons against the catalog.
    pub fn addon_selections(&self, catalog: &CatalogLoader) -> EngineResult<Vec<AddonSelection>> {
        select_addons(catalog, &self.addons)
    }
}

impl MultiRoomQuoteRequest {
    /// Checks the date order and stay length, that between one and
    /// [`MAX_ROOMS_PER_QUOTE`] rooms are present with unique ids, and that
    /// every room has an adult.
    pub fn validate(&self) -> EngineResult<()> {
        validate_dates(self.check_in, self.check_out)?;

        if self.rooms.is_empty() {
            return Err(EngineError::InvalidRequest {
                field: "rooms".to_string(),
                message: "at least one room is required".to_string(),
            });
        }

        if self.rooms.len() > MAX_ROOMS_PER_QUOTE {
            return Err(EngineError::InvalidRequest {
                field: "rooms".to_string(),
                message: format!(
                    "{} rooms exceeds the maximum of {}",
                    self.rooms.len(),
                    MAX_ROOMS_PER_QUOTE
                ),
            });
        }

        let mut seen = HashSet::new();
        for room in &self.rooms {
            if !seen.insert(room.room_id.as_str()) {
                return Err(EngineError::InvalidRequest {
                    field: "rooms".to_string(),
                    message: format!("duplicate room_id '{}'", room.room_id),
                });
            }
            validate_adults(&format!("rooms[{}].num_adults", room.room_id), room.num_adults)?;
        }
        Ok(())
    }

    /// Resolves every room's accommodation type against the catalog.
    pub fn room_entries(&self, catalog: &CatalogLoader) -> EngineResult<Vec<RoomEntry>> {
        self.rooms
            .iter()
            .map(|room| room.to_room_entry(catalog))
            .collect()
    }

    /// Resolves every room's own add-ons, keyed by room id.
    pub fn room_addon_selections(
        &self,
        catalog: &CatalogLoader,
    ) -> EngineResult<HashMap<String, Vec<AddonSelection>>> {
        self.rooms
            .iter()
            .map(|room| -> EngineResult<(String, Vec<AddonSelection>)> {
                Ok((room.room_id.clone(), select_addons(catalog, &room.addons)?))
            })
            .collect()
    }

    /// Resolves the group add-ons against the catalog.
    pub fn group_addon_selections(
        &self,
        catalog: &CatalogLoader,
    ) -> EngineResult<Vec<AddonSelection>> {
        select_addons(catalog, &self.group_addons)
    }
}

impl RoomRequest {
    /// Builds the engine's room entry from the catalog.
    pub fn to_room_entry(&self, catalog: &CatalogLoader) -> EngineResult<RoomEntry> {
        let accommodation_type = catalog.get_accommodation_type(&self.accommodation_type_id)?;
        Ok(RoomEntry {
            room_id: self.room_id.clone(),
            accommodation_type: accommodation_type.clone(),
            num_adults: self.num_adults,
            num_children: self.num_children,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_room(room_id: &str, num_adults: u32) -> RoomRequest {
        RoomRequest {
            room_id: room_id.to_string(),
            accommodation_type_id: "deluxe_cottage".to_string(),
            num_adults,
            num_children: 0,
            addons: vec![],
        }
    }

    fn create_multi_room_request(rooms: Vec<RoomRequest>) -> MultiRoomQuoteRequest {
        MultiRoomQuoteRequest {
            check_in: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
            rooms,
            group_addons: vec![],
        }
    }

    #[test]
    fn test_deserialize_quote_request_with_defaults() {
        let json = r#"{
            "check_in": "2026-01-12",
            "check_out": "2026-01-14",
            "accommodation_type_id": "deluxe_cottage",
            "num_adults": 2,
            "addons": [{ "addon_id": "airport_transfer" }]
        }"#;

        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.num_children, 0);
        assert_eq!(request.addons[0].quantity, 1);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_check_out_before_check_in_is_invalid() {
        let json = r#"{
            "check_in": "2026-01-14",
            "check_out": "2026-01-14",
            "accommodation_type_id": "deluxe_cottage",
            "num_adults": 2
        }"#;

        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        match request.validate() {
            Err(EngineError::InvalidRequest { field, .. }) => assert_eq!(field, "check_out"),
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_adults_is_invalid() {
        let json = r#"{
            "check_in": "2026-01-12",
            "check_out": "2026-01-14",
            "accommodation_type_id": "deluxe_cottage",
            "num_adults": 0,
            "num_children": 2
        }"#;

        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_multi_room_requires_rooms() {
        assert!(create_multi_room_request(vec![]).validate().is_err());
    }

    #[test]
    fn test_multi_room_rejects_duplicate_room_ids() {
        let request = create_multi_room_request(vec![create_room("r1", 2), create_room("r1", 2)]);
        match request.validate() {
            Err(EngineError::InvalidRequest { message, .. }) => assert!(message.contains("r1")),
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_multi_room_rejects_room_without_adults() {
        let request = create_multi_room_request(vec![create_room("r1", 2), create_room("r2", 0)]);
        match request.validate() {
            Err(EngineError::InvalidRequest { field, .. }) => {
                assert_eq!(field, "rooms[r2].num_adults")
            }
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_multi_room_request() {
        let request = create_multi_room_request(vec![create_room("r1", 2), create_room("r2", 1)]);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_stay_of_max_length_is_valid() {
        let mut request = create_multi_room_request(vec![create_room("r1", 2)]);
        request.check_out = request.check_in + chrono::Days::new(MAX_STAY_NIGHTS as u64);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_stay_longer_than_max_is_invalid() {
        let json = r#"{
            "check_in": "2026-01-01",
            "check_out": "+262000-01-01",
            "accommodation_type_id": "deluxe_cottage",
            "num_adults": 2
        }"#;

        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        match request.validate() {
            Err(EngineError::InvalidRequest { field, message }) => {
                assert_eq!(field, "check_out");
                assert!(message.contains("maximum"));
            }
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_too_many_rooms_is_invalid() {
        let rooms = (0..=MAX_ROOMS_PER_QUOTE)
            .map(|i| create_room(&format!("r{}", i), 2))
            .collect();
        match create_multi_room_request(rooms).validate() {
            Err(EngineError::InvalidRequest { field, .. }) => assert_eq!(field, "rooms"),
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }
}
