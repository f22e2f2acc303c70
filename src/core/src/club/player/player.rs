use crate::club::player::capabilities::PlayerCapabilities;
use crate::club::player::positions::PlayerPosition;
use serde::{Deserialize, Serialize};

/// Immutable player descriptor as supplied by the roster-building
/// collaborator. Match-scoped mutable state lives on `MatchPlayer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub capabilities: PlayerCapabilities,
    pub position: PlayerPosition,
}

impl Player {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        capabilities: PlayerCapabilities,
        position: PlayerPosition,
    ) -> Self {
        Player {
            id,
            name: name.into(),
            capabilities,
            position,
        }
    }
}
