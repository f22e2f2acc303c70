use crate::club::{PlayerPosition, TacticKind};
use crate::r#match::error::SimulationError;
use crate::r#match::random::RandomSource;
use crate::r#match::squad::MatchTeam;

/// Upper bound on weighted draws before the selection gives up. Formations
/// with no wingers, no wide backs and no central midfielders can never
/// satisfy any prerequisite, so the loop must not run unbounded.
pub const MAX_TACTIC_DRAWS: u32 = 50;

pub struct TacticSelector;

impl TacticSelector {
    /// Weighted pick of a tactic the team can actually field. A tactic whose
    /// position prerequisite fails is redrawn; a middle-attack miss first
    /// reshuffles the team's positions, matching the original behaviour of
    /// the turn loop.
    pub fn select(
        team: &mut MatchTeam,
        counter_attack_permitted: bool,
        random: &mut RandomSource,
    ) -> Result<TacticKind, SimulationError> {
        for _ in 0..MAX_TACTIC_DRAWS {
            let candidates: Vec<(TacticKind, f32)> = TacticKind::ALL
                .iter()
                .filter(|tactic| {
                    counter_attack_permitted || **tactic != TacticKind::CounterAttack
                })
                .map(|tactic| (*tactic, team.tactic_weights.get(*tactic)))
                .collect();

            let tactic = random.weighted_choice(&candidates)?;

            if Self::prerequisite_met(team, tactic) {
                return Ok(tactic);
            }

            if tactic == TacticKind::MiddleAttack {
                team.reshuffle_positions(random);
            }
        }

        Err(SimulationError::NoEligibleTactic {
            attempts: MAX_TACTIC_DRAWS,
        })
    }

    fn prerequisite_met(team: &MatchTeam, tactic: TacticKind) -> bool {
        match tactic {
            TacticKind::WingCross => !team
                .players_at(&[
                    PlayerPosition::LeftWinger,
                    PlayerPosition::RightWinger,
                    PlayerPosition::LeftBack,
                    PlayerPosition::RightBack,
                ])
                .is_empty(),
            TacticKind::UnderCutting | TacticKind::PullBack => !team
                .players_at(&[PlayerPosition::LeftWinger, PlayerPosition::RightWinger])
                .is_empty(),
            TacticKind::MiddleAttack => !team
                .players_at(&[PlayerPosition::CentreMidfielder])
                .is_empty(),
            TacticKind::CounterAttack => true,
        }
    }
}
