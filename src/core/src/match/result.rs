use crate::club::{PlayerMatchStatistics, PlayerPosition};
use crate::r#match::commentary::CommentaryEntry;
use crate::r#match::squad::MatchTeam;
use crate::r#match::statistics::TeamMatchStatistics;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn opposite(&self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinalScore {
    pub home: u8,
    pub away: u8,
}

impl FinalScore {
    pub fn is_draw(&self) -> bool {
        self.home == self.away
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
    DecidedOnPenalties { winner: TeamSide },
}

/// One scored goal: who, for which side, on which turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalRecord {
    pub player_id: u32,
    pub team: TeamSide,
    pub turn: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShootoutScore {
    pub home: u8,
    pub away: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMatchResult {
    pub id: u32,
    pub name: String,
    pub position: PlayerPosition,
    pub statistics: PlayerMatchStatistics,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMatchResult {
    pub id: u32,
    pub name: String,
    pub score: u8,
    pub statistics: TeamMatchStatistics,
    pub players: Vec<PlayerMatchResult>,
}

impl TeamMatchResult {
    pub fn from_team(team: &MatchTeam) -> Self {
        TeamMatchResult {
            id: team.id,
            name: team.name.clone(),
            score: team.score,
            statistics: team.statistics,
            players: team
                .players
                .iter()
                .map(|player| PlayerMatchResult {
                    id: player.id,
                    name: player.name.clone(),
                    position: player.position,
                    statistics: player.statistics,
                })
                .collect(),
        }
    }
}

/// Immutable record of a finished match, ready for a collaborator to
/// persist or render. The engine itself is discarded after producing it.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub created_time: NaiveDateTime,
    pub season: Option<String>,
    pub score: FinalScore,
    pub outcome: MatchOutcome,
    pub home: TeamMatchResult,
    pub away: TeamMatchResult,
    pub goal_record: Vec<GoalRecord>,
    pub shootout: Option<ShootoutScore>,
    pub transcript: Vec<CommentaryEntry>,
}
