use crate::club::TeamRoster;
use crate::r#match::commentary::CommentaryLog;
use crate::r#match::engine::resolver::{AttackContext, AttackResolver};
use crate::r#match::engine::state::{MatchState, StateManager};
use crate::r#match::engine::tactics::TacticSelector;
use crate::r#match::error::SimulationError;
use crate::r#match::random::RandomSource;
use crate::r#match::result::{
    FinalScore, GoalRecord, MatchOutcome, MatchResult, ShootoutScore, TeamMatchResult, TeamSide,
};
use crate::r#match::squad::MatchTeam;
use chrono::NaiveDateTime;
use log::debug;

/// Penalty kicks each side takes before the shootout goes to sudden death.
const SHOOTOUT_REGULATION_ROUNDS: u8 = 5;

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Attacks played across the two halves.
    pub regular_turns: u32,
    /// Attacks played in extra time when the match is level.
    pub extra_time_turns: u32,
    /// Whether the kickoff attack may already be a counter attack. After
    /// the first attack the flag follows possession exchanges.
    pub counter_attack_at_kickoff: bool,
    /// Whether a drawn match continues into extra time and, if still level,
    /// a penalty shootout.
    pub extra_time_enabled: bool,
    pub season: Option<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            regular_turns: 50,
            extra_time_turns: 10,
            counter_attack_at_kickoff: true,
            extra_time_enabled: true,
            season: None,
        }
    }
}

/// Plays a single match to completion. The engine owns everything a match
/// needs and is consumed by `play`, leaving only the `MatchResult`.
pub struct MatchEngine {
    home: MatchTeam,
    away: MatchTeam,
    config: MatchConfig,
    random: RandomSource,
    log: CommentaryLog,
    goals: Vec<GoalRecord>,
    turn: u32,
    possession: TeamSide,
    counter_attack_permitted: bool,
}

impl MatchEngine {
    pub fn new(
        home: &TeamRoster,
        away: &TeamRoster,
        config: MatchConfig,
        random: RandomSource,
    ) -> Self {
        let counter_attack_permitted = config.counter_attack_at_kickoff;
        MatchEngine {
            home: MatchTeam::from_roster(home),
            away: MatchTeam::from_roster(away),
            config,
            random,
            log: CommentaryLog::new(),
            goals: Vec::new(),
            turn: 0,
            possession: TeamSide::Home,
            counter_attack_permitted,
        }
    }

    pub fn play(mut self, created_time: NaiveDateTime) -> Result<MatchResult, SimulationError> {
        self.log.declaration(format!(
            "The match between {} and {} kicks off",
            self.home.name, self.away.name
        ));

        let first_half_turns = self.config.regular_turns / 2;
        let second_half_turns = self.config.regular_turns - first_half_turns;

        let mut manager = StateManager::new();
        let mut shootout = None;

        while let Some(state) = manager.next(self.is_drawn(), self.config.extra_time_enabled) {
            match state {
                MatchState::FirstHalf => {
                    self.play_turns(first_half_turns)?;
                    self.log.declaration(format!(
                        "Half time: {} {}:{} {}",
                        self.home.name, self.home.score, self.away.score, self.away.name
                    ));
                }
                MatchState::SecondHalf => {
                    self.play_turns(second_half_turns)?;
                    self.log.declaration(format!(
                        "The referee blows for full time: {} {}:{} {}",
                        self.home.name, self.home.score, self.away.score, self.away.name
                    ));
                }
                MatchState::ExtraTime => {
                    self.log.declaration("The match goes to extra time");
                    self.play_turns(self.config.extra_time_turns)?;
                    self.log.declaration(format!(
                        "End of extra time: {} {}:{} {}",
                        self.home.name, self.home.score, self.away.score, self.away.name
                    ));
                }
                MatchState::PenaltyShootout => {
                    shootout = Some(self.penalty_shootout()?);
                }
                MatchState::NotStarted | MatchState::Finished => unreachable!(),
            }
        }

        let score = FinalScore {
            home: self.home.score,
            away: self.away.score,
        };
        let outcome = match shootout {
            Some(shootout) => MatchOutcome::DecidedOnPenalties {
                winner: if shootout.home > shootout.away {
                    TeamSide::Home
                } else {
                    TeamSide::Away
                },
            },
            None if score.home > score.away => MatchOutcome::HomeWin,
            None if score.away > score.home => MatchOutcome::AwayWin,
            None => MatchOutcome::Draw,
        };

        debug!(
            "match finished: {} {}:{} {} ({:?})",
            self.home.name, score.home, score.away, self.away.name, outcome
        );

        Ok(MatchResult {
            created_time,
            season: self.config.season.clone(),
            score,
            outcome,
            home: TeamMatchResult::from_team(&self.home),
            away: TeamMatchResult::from_team(&self.away),
            goal_record: self.goals,
            shootout,
            transcript: self.log.into_entries(),
        })
    }

    fn is_drawn(&self) -> bool {
        self.home.score == self.away.score
    }

    fn play_turns(&mut self, turns: u32) -> Result<(), SimulationError> {
        for _ in 0..turns {
            self.turn += 1;
            let side = self.possession;
            let (attacker, defender) = match side {
                TeamSide::Home => (&mut self.home, &mut self.away),
                TeamSide::Away => (&mut self.away, &mut self.home),
            };

            let tactic =
                TacticSelector::select(attacker, self.counter_attack_permitted, &mut self.random)?;
            debug!("turn {}: {} attack with {}", self.turn, attacker.name, tactic);

            let mut ctx = AttackContext {
                attacker,
                defender,
                side,
                turn: self.turn,
                random: &mut self.random,
                log: &mut self.log,
                goals: &mut self.goals,
            };
            let exchanged = AttackResolver::resolve(tactic, &mut ctx)?;

            // A counter attack is only on next turn if this attack ended
            // with the ball changing hands.
            self.counter_attack_permitted = exchanged;
            if exchanged {
                self.possession = side.opposite();
            }
        }

        Ok(())
    }

    /// Five rounds a side, best shooters first, then sudden death. The
    /// taker order wraps around once the whole team has kicked.
    fn penalty_shootout(&mut self) -> Result<ShootoutScore, SimulationError> {
        self.log.declaration("The match goes to a penalty shootout");

        let home_order = self.home.shooters_ranked();
        let away_order = self.away.shooters_ranked();
        // Roster validation guarantees a goalkeeper on both sides.
        let home_keeper = self
            .home
            .goalkeeper()
            .expect("roster validation guarantees a goalkeeper");
        let away_keeper = self
            .away
            .goalkeeper()
            .expect("roster validation guarantees a goalkeeper");

        let mut score = ShootoutScore::default();
        let mut round: usize = 0;

        loop {
            let home_taker = penalty_taker(&home_order, round);
            if AttackResolver::penalty_kick(
                &self.home,
                &self.away,
                home_taker,
                away_keeper,
                &mut self.random,
                &mut self.log,
            )? {
                score.home += 1;
            }

            let away_taker = penalty_taker(&away_order, round);
            if AttackResolver::penalty_kick(
                &self.away,
                &self.home,
                away_taker,
                home_keeper,
                &mut self.random,
                &mut self.log,
            )? {
                score.away += 1;
            }

            round += 1;
            self.log.narration(format!(
                "Shootout after round {}: {} {}:{} {}",
                round, self.home.name, score.home, score.away, self.away.name
            ));

            if round >= SHOOTOUT_REGULATION_ROUNDS as usize && score.home != score.away {
                break;
            }
        }

        Ok(score)
    }
}

/// Kick order wraps around once every ranked taker has been up.
fn penalty_taker(order: &[usize], round: usize) -> usize {
    order[round % order.len()]
}
