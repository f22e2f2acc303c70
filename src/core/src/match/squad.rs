use crate::club::{
    Capability, PlayerCapabilities, PlayerMatchStatistics, PlayerPosition, TacticWeights,
    TeamRoster,
};
use crate::r#match::random::RandomSource;
use crate::r#match::statistics::TeamMatchStatistics;
use itertools::Itertools;
use serde::Serialize;

/// Match-scoped copy of a player: immutable identity and capabilities plus
/// the mutable position and running counters.
#[derive(Debug, Clone, Serialize)]
pub struct MatchPlayer {
    pub id: u32,
    pub name: String,
    pub capabilities: PlayerCapabilities,
    pub position: PlayerPosition,
    pub statistics: PlayerMatchStatistics,
}

impl MatchPlayer {
    pub fn capability(&self, capability: Capability) -> f32 {
        self.capabilities.get(capability)
    }
}

/// One side of a live match. Owns its eleven players and all counters for
/// the lifetime of the match; nothing here is shared across matches.
#[derive(Debug, Clone)]
pub struct MatchTeam {
    pub id: u32,
    pub name: String,
    pub tactic_weights: TacticWeights,
    pub players: Vec<MatchPlayer>,
    pub score: u8,
    pub statistics: TeamMatchStatistics,
}

impl MatchTeam {
    pub fn from_roster(roster: &TeamRoster) -> Self {
        MatchTeam {
            id: roster.id,
            name: roster.name.clone(),
            tactic_weights: roster.tactic_weights,
            players: roster
                .players
                .iter()
                .map(|player| MatchPlayer {
                    id: player.id,
                    name: player.name.clone(),
                    capabilities: player.capabilities,
                    position: player.position,
                    statistics: PlayerMatchStatistics::default(),
                })
                .collect(),
            score: 0,
            statistics: TeamMatchStatistics::default(),
        }
    }

    /// Indices of players currently occupying any of the given positions.
    pub fn players_at(&self, positions: &[PlayerPosition]) -> Vec<usize> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, player)| positions.contains(&player.position))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn goalkeeper(&self) -> Option<usize> {
        self.players
            .iter()
            .position(|player| player.position.is_goalkeeper())
    }

    pub fn average_capability(&self, capability: Capability) -> f32 {
        self.players
            .iter()
            .map(|player| player.capability(capability))
            .sum::<f32>()
            / self.players.len() as f32
    }

    /// Re-deal the outfield positions among the outfield players. The
    /// goalkeeper never moves and formation counts are preserved.
    pub fn reshuffle_positions(&mut self, random: &mut RandomSource) {
        let outfield: Vec<usize> = (0..self.players.len())
            .filter(|&i| !self.players[i].position.is_goalkeeper())
            .collect();

        let mut positions: Vec<PlayerPosition> =
            outfield.iter().map(|&i| self.players[i].position).collect();
        random.shuffle(&mut positions);

        for (&index, position) in outfield.iter().zip(positions) {
            self.players[index].position = position;
        }
    }

    /// Player indices ranked by shooting capability, best first. Drives the
    /// penalty shootout rotation.
    pub fn shooters_ranked(&self) -> Vec<usize> {
        (0..self.players.len())
            .sorted_by(|&a, &b| {
                self.players[b]
                    .capability(Capability::Shooting)
                    .total_cmp(&self.players[a].capability(Capability::Shooting))
            })
            .collect()
    }

    pub fn goals_scored(&self) -> u16 {
        self.players
            .iter()
            .map(|player| player.statistics.goals)
            .sum()
    }
}
