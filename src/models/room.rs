//! Room entry model for group bookings.

use serde::{Deserialize, Serialize};

use super::AccommodationType;

/// One room of a group booking, with its own type and guest counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomEntry {
    /// Identifier of the room within the booking request.
    pub room_id: String,
    /// The room's accommodation type.
    pub accommodation_type: AccommodationType,
    /// Adults staying in the room.
    pub num_adults: u32,
    /// Children staying in the room.
    #[serde(default)]
    pub num_children: u32,
}

impl RoomEntry {
    /// Returns every guest in the room, children included.
    pub fn total_guests(&self) -> u32 {
        self.num_adults.saturating_add(self.num_children)
    }
}
