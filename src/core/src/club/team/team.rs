use crate::club::player::{Player, PlayerCapabilities, PlayerPosition};
use crate::club::team::tactics::TacticWeights;
use crate::r#match::error::SimulationError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub const ROSTER_SIZE: usize = 11;

/// Mapping from position to headcount. The slot order is the order players
/// are assigned when a roster is built from capability vectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
    slots: Vec<(PlayerPosition, u8)>,
}

impl Formation {
    pub fn new(slots: Vec<(PlayerPosition, u8)>) -> Self {
        Formation { slots }
    }

    /// Classic 4-4-2 with wide midfield replaced by wingers.
    pub fn four_four_two() -> Self {
        Formation::new(vec![
            (PlayerPosition::Goalkeeper, 1),
            (PlayerPosition::LeftBack, 1),
            (PlayerPosition::CentreBack, 2),
            (PlayerPosition::RightBack, 1),
            (PlayerPosition::LeftWinger, 1),
            (PlayerPosition::CentreMidfielder, 2),
            (PlayerPosition::RightWinger, 1),
            (PlayerPosition::Striker, 2),
        ])
    }

    pub fn four_three_three() -> Self {
        Formation::new(vec![
            (PlayerPosition::Goalkeeper, 1),
            (PlayerPosition::LeftBack, 1),
            (PlayerPosition::CentreBack, 2),
            (PlayerPosition::RightBack, 1),
            (PlayerPosition::CentreMidfielder, 3),
            (PlayerPosition::LeftWinger, 1),
            (PlayerPosition::RightWinger, 1),
            (PlayerPosition::Striker, 1),
        ])
    }

    pub fn count(&self, position: PlayerPosition) -> u8 {
        self.slots
            .iter()
            .filter(|(p, _)| *p == position)
            .map(|(_, c)| *c)
            .sum()
    }

    pub fn total(&self) -> u8 {
        self.slots.iter().map(|(_, c)| *c).sum()
    }

    /// Expanded position list, one entry per player slot.
    pub fn positions(&self) -> Vec<PlayerPosition> {
        self.slots
            .iter()
            .flat_map(|(position, count)| std::iter::repeat(*position).take(*count as usize))
            .collect()
    }

    /// "4-4-2"-style description (defenders-midfielders-forwards).
    pub fn description(&self) -> String {
        let positions = self.positions();
        [
            positions.iter().filter(|p| p.is_defender()).count(),
            positions.iter().filter(|p| p.is_midfielder()).count(),
            positions.iter().filter(|p| p.is_forward()).count(),
        ]
        .iter()
        .map(|c| c.to_string())
        .join("-")
    }
}

/// Validated 11-player roster, the engine's input for one side of a fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRoster {
    pub id: u32,
    pub name: String,
    pub players: Vec<Player>,
    pub tactic_weights: TacticWeights,
}

impl TeamRoster {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        players: Vec<Player>,
        tactic_weights: TacticWeights,
    ) -> Result<Self, SimulationError> {
        let name = name.into();

        if players.len() != ROSTER_SIZE {
            return Err(SimulationError::MalformedRoster(format!(
                "team {} has {} players, expected {}",
                name,
                players.len(),
                ROSTER_SIZE
            )));
        }

        if !players.iter().any(|p| p.position.is_goalkeeper()) {
            return Err(SimulationError::MalformedRoster(format!(
                "team {} has no goalkeeper",
                name
            )));
        }

        Ok(TeamRoster {
            id,
            name,
            players,
            tactic_weights,
        })
    }

    /// Build a roster by dealing capability vectors into a formation's slots,
    /// in slot order. A short capability list is cycled, so a single vector
    /// yields a uniform squad. Ids are derived from `base_id`.
    pub fn from_formation(
        id: u32,
        name: impl Into<String>,
        formation: &Formation,
        base_id: u32,
        capabilities: &[PlayerCapabilities],
    ) -> Result<Self, SimulationError> {
        let name = name.into();
        let positions = formation.positions();

        if capabilities.is_empty() {
            return Err(SimulationError::MalformedRoster(format!(
                "team {} supplied no capability vectors",
                name
            )));
        }

        let players = positions
            .iter()
            .zip(capabilities.iter().cycle())
            .enumerate()
            .map(|(index, (position, capability))| {
                Player::new(
                    base_id + index as u32,
                    format!("{} #{}", name, index + 1),
                    *capability,
                    *position,
                )
            })
            .collect();

        TeamRoster::new(id, name, players, TacticWeights::default())
    }
}
