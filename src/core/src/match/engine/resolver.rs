use crate::club::{Capability, PlayerPosition, TacticKind};
use crate::r#match::commentary::CommentaryLog;
use crate::r#match::error::SimulationError;
use crate::r#match::random::RandomSource;
use crate::r#match::result::{GoalRecord, TeamSide};
use crate::r#match::squad::MatchTeam;
use itertools::Itertools;

/// Shooting bonus applied to a penalty taker at the spot.
pub const PENALTY_SHOOTING_BONUS: f32 = 30.0;

/// Rounds of midfield passing a middle attack has to survive.
const MIDDLE_ATTACK_PASS_ROUNDS: usize = 10;

/// Bound on flank re-draws in a wing cross; the tactic prerequisite makes
/// the loop terminate almost surely, this guards the pathological rest.
const MAX_FLANK_DRAWS: u32 = 100;

/// Everything an attack needs: both sides, the match random source, the
/// transcript and the running goal record. Teams are looked up through this
/// context, never through back-pointers.
pub struct AttackContext<'a> {
    pub attacker: &'a mut MatchTeam,
    pub defender: &'a mut MatchTeam,
    pub side: TeamSide,
    pub turn: u32,
    pub random: &'a mut RandomSource,
    pub log: &'a mut CommentaryLog,
    pub goals: &'a mut Vec<GoalRecord>,
}

/// Resolves one attack into "possession switches" (`true`) or "attacker
/// keeps the ball" (`false`), mutating player and team counters on the way.
pub struct AttackResolver;

impl AttackResolver {
    pub fn resolve(
        tactic: TacticKind,
        ctx: &mut AttackContext<'_>,
    ) -> Result<bool, SimulationError> {
        ctx.attacker.statistics.record_attempt(tactic);

        match tactic {
            TacticKind::WingCross => Self::wing_cross(ctx),
            TacticKind::UnderCutting => Self::under_cutting(ctx),
            TacticKind::PullBack => Self::pull_back(ctx),
            TacticKind::MiddleAttack => Self::middle_attack(ctx),
            TacticKind::CounterAttack => Self::counter_attack(ctx),
        }
    }

    /// Beat the full-back out wide, cross long, win the header, shoot. A
    /// defensive clearance triggers one more possession contest.
    fn wing_cross(ctx: &mut AttackContext<'_>) -> Result<bool, SimulationError> {
        ctx.log
            .declaration(format!("{} look to cross from the wing", ctx.attacker.name));

        // Coin flip picks the flank; re-flip until the attacking side has
        // someone wide there. The tactic prerequisite guarantees one flank
        // is populated.
        let mut flank = None;
        for _ in 0..MAX_FLANK_DRAWS {
            let left = ctx.random.coin_flip();
            let wings = if left {
                ctx.attacker
                    .players_at(&[PlayerPosition::LeftWinger, PlayerPosition::LeftBack])
            } else {
                ctx.attacker
                    .players_at(&[PlayerPosition::RightWinger, PlayerPosition::RightBack])
            };

            if !wings.is_empty() {
                let full_backs = if left {
                    ctx.defender.players_at(&[PlayerPosition::LeftBack])
                } else {
                    ctx.defender.players_at(&[PlayerPosition::RightBack])
                };
                flank = Some((wings, full_backs));
                break;
            }
        }

        let (wings, full_backs) = flank.ok_or(SimulationError::NoEligibleTactic {
            attempts: MAX_FLANK_DRAWS,
        })?;

        let (past_full_back, carrier) = Self::sprint_duel(
            ctx.attacker,
            ctx.defender,
            wings,
            full_backs,
            ctx.random,
            ctx.log,
        )?;
        if !past_full_back {
            return Ok(true);
        }

        ctx.log.commentary(format!(
            "{} whips in a cross",
            ctx.attacker.players[carrier].name
        ));
        let crossed = Self::pass_contest(
            ctx.attacker,
            carrier,
            ctx.defender.average_capability(Capability::Passing),
            true,
            ctx.random,
        )?;
        if !crossed {
            ctx.log
                .commentary(format!("{} come away with the ball", ctx.defender.name));
            return Ok(true);
        }

        let assister = carrier;
        let strikers = ctx.attacker.players_at(&[PlayerPosition::Striker]);
        if strikers.is_empty() {
            return Ok(true);
        }
        let centre_backs = ctx.defender.players_at(&[PlayerPosition::CentreBack]);

        let (won_header, carrier) = Self::aerial_duel(
            ctx.attacker,
            ctx.defender,
            strikers,
            centre_backs,
            ctx.random,
            ctx.log,
        )?;

        if won_header {
            if Self::shot_contest(ctx, carrier, Some(assister))? {
                ctx.attacker.statistics.record_success(TacticKind::WingCross);
            }
            return Ok(true);
        }

        // The defence headed it away; one more ball-recovery contest
        // decides who restarts.
        ctx.log.commentary(format!(
            "{} heads it clear",
            ctx.defender.players[carrier].name
        ));
        let cleared = Self::pass_contest(
            ctx.defender,
            carrier,
            ctx.attacker.average_capability(Capability::Passing),
            true,
            ctx.random,
        )?;
        if cleared {
            ctx.log
                .commentary(format!("{} take over possession", ctx.defender.name));
            Ok(true)
        } else {
            ctx.log.commentary("The attacking side keep the ball");
            Ok(false)
        }
    }

    /// A single winger beats the opposite full-back, then up to two centre
    /// backs one-on-one, and finishes without an assist.
    fn under_cutting(ctx: &mut AttackContext<'_>) -> Result<bool, SimulationError> {
        ctx.log
            .declaration(format!("{} try to cut inside", ctx.attacker.name));

        let wingers = ctx
            .attacker
            .players_at(&[PlayerPosition::LeftWinger, PlayerPosition::RightWinger]);
        // The selector only picks this tactic with a winger on the pitch.
        let wing = wingers[ctx.random.index(wingers.len())];

        let full_backs = if ctx.attacker.players[wing].position == PlayerPosition::LeftWinger {
            ctx.defender.players_at(&[PlayerPosition::RightBack])
        } else {
            ctx.defender.players_at(&[PlayerPosition::LeftBack])
        };

        ctx.log.commentary(format!(
            "{} picks up the ball and takes on his man",
            ctx.attacker.players[wing].name
        ));
        let (past_full_back, carrier) = Self::sprint_duel(
            ctx.attacker,
            ctx.defender,
            vec![wing],
            full_backs,
            ctx.random,
            ctx.log,
        )?;
        if !past_full_back {
            return Ok(true);
        }

        ctx.log.commentary(format!(
            "{} cuts inside",
            ctx.attacker.players[carrier].name
        ));

        let mut centre_backs = ctx.defender.players_at(&[PlayerPosition::CentreBack]);
        while centre_backs.len() > 2 {
            let drop = ctx.random.index(centre_backs.len());
            centre_backs.remove(drop);
        }

        let mut through = true;
        for centre_back in centre_backs {
            through = Self::dribble_contest(
                ctx.attacker,
                ctx.defender,
                carrier,
                centre_back,
                ctx.random,
                ctx.log,
            )?;
            if !through {
                break;
            }
        }

        if through && Self::shot_contest(ctx, carrier, None)? {
            ctx.attacker
                .statistics
                .record_success(TacticKind::UnderCutting);
        }

        Ok(true)
    }

    /// Winger beats the full-back and one centre-back, then squares it for
    /// a late-arriving striker or midfielder; the winger gets the assist.
    fn pull_back(ctx: &mut AttackContext<'_>) -> Result<bool, SimulationError> {
        ctx.log
            .declaration(format!("{} try a pull-back", ctx.attacker.name));

        let wingers = ctx
            .attacker
            .players_at(&[PlayerPosition::LeftWinger, PlayerPosition::RightWinger]);
        let wing = wingers[ctx.random.index(wingers.len())];

        let full_backs = if ctx.attacker.players[wing].position == PlayerPosition::LeftWinger {
            ctx.defender.players_at(&[PlayerPosition::RightBack])
        } else {
            ctx.defender.players_at(&[PlayerPosition::LeftBack])
        };

        ctx.log.commentary(format!(
            "{} picks up the ball and takes on his man",
            ctx.attacker.players[wing].name
        ));
        let (past_full_back, carrier) = Self::sprint_duel(
            ctx.attacker,
            ctx.defender,
            vec![wing],
            full_backs,
            ctx.random,
            ctx.log,
        )?;
        if !past_full_back {
            return Ok(true);
        }

        let assister = carrier;
        ctx.log.commentary(format!(
            "{} cuts inside",
            ctx.attacker.players[carrier].name
        ));

        let centre_backs = ctx.defender.players_at(&[PlayerPosition::CentreBack]);
        let through = if centre_backs.is_empty() {
            true
        } else {
            let centre_back = centre_backs[ctx.random.index(centre_backs.len())];
            Self::dribble_contest(
                ctx.attacker,
                ctx.defender,
                carrier,
                centre_back,
                ctx.random,
                ctx.log,
            )?
        };
        if !through {
            return Ok(true);
        }

        ctx.log.commentary(format!(
            "{} pulls the ball back across the box",
            ctx.attacker.players[carrier].name
        ));
        let squared = Self::pass_contest(
            ctx.attacker,
            carrier,
            ctx.defender.average_capability(Capability::Passing),
            false,
            ctx.random,
        )?;
        if !squared {
            return Ok(true);
        }

        let shooters = ctx
            .attacker
            .players_at(&[PlayerPosition::Striker, PlayerPosition::CentreMidfielder]);
        if shooters.is_empty() {
            return Ok(true);
        }
        let shooter = shooters[ctx.random.index(shooters.len())];

        if Self::shot_contest(ctx, shooter, Some(assister))? {
            ctx.attacker.statistics.record_success(TacticKind::PullBack);
        }

        Ok(true)
    }

    /// Survive ten rounds of midfield passing, then win the header up front
    /// and shoot; the busiest passer is credited with the assist.
    fn middle_attack(ctx: &mut AttackContext<'_>) -> Result<bool, SimulationError> {
        ctx.log.declaration(format!(
            "{} work the ball through the middle",
            ctx.attacker.name
        ));

        let mut pass_counts = vec![0u32; ctx.attacker.players.len()];
        for _ in 0..MIDDLE_ATTACK_PASS_ROUNDS {
            let mut midfielders = ctx
                .attacker
                .players_at(&[PlayerPosition::CentreMidfielder]);
            loop {
                if midfielders.is_empty() {
                    ctx.log
                        .commentary(format!("{} lose possession", ctx.attacker.name));
                    return Ok(true);
                }

                let passer = midfielders[ctx.random.index(midfielders.len())];
                let completed = Self::pass_contest(
                    ctx.attacker,
                    passer,
                    ctx.defender.average_capability(Capability::Passing),
                    false,
                    ctx.random,
                )?;
                if completed {
                    pass_counts[passer] += 1;
                    break;
                }
                midfielders.retain(|&index| index != passer);
            }
        }

        let assister = pass_counts
            .iter()
            .position_max()
            .expect("roster always has players");

        let strikers = ctx.attacker.players_at(&[PlayerPosition::Striker]);
        if strikers.is_empty() {
            return Ok(true);
        }
        let centre_backs = ctx.defender.players_at(&[PlayerPosition::CentreBack]);

        let (won_header, carrier) = Self::aerial_duel(
            ctx.attacker,
            ctx.defender,
            strikers,
            centre_backs,
            ctx.random,
            ctx.log,
        )?;

        if won_header {
            if Self::shot_contest(ctx, carrier, Some(assister))? {
                ctx.attacker
                    .statistics
                    .record_success(TacticKind::MiddleAttack);
            }
            return Ok(true);
        }

        // Cleared by the defence: a long ball out may flip possession for
        // good if their strikers out-jump our centre-backs upfield.
        ctx.log.commentary(format!(
            "{} clears the ball",
            ctx.defender.players[carrier].name
        ));
        let cleared = Self::pass_contest(
            ctx.defender,
            carrier,
            ctx.attacker.average_capability(Capability::Passing),
            true,
            ctx.random,
        )?;
        if cleared {
            let own_centre_backs = ctx.attacker.players_at(&[PlayerPosition::CentreBack]);
            if own_centre_backs.is_empty() {
                return Ok(true);
            }

            let opposing_strikers = ctx.defender.players_at(&[PlayerPosition::Striker]);
            let lost_upfield = if opposing_strikers.is_empty() {
                false
            } else {
                let (opponents_won, _) = Self::aerial_duel(
                    ctx.defender,
                    ctx.attacker,
                    opposing_strikers,
                    own_centre_backs,
                    ctx.random,
                    ctx.log,
                )?;
                opponents_won
            };

            if lost_upfield {
                return Ok(true);
            }
        }

        ctx.log.commentary("The attacking side keep the ball");
        Ok(false)
    }

    /// A long ball from the back releases the strikers against the centre
    /// backs. No strikers up front forfeits possession immediately.
    fn counter_attack(ctx: &mut AttackContext<'_>) -> Result<bool, SimulationError> {
        ctx.log
            .declaration(format!("{} spring a counter attack", ctx.attacker.name));

        let outlets = ctx
            .attacker
            .players_at(&[PlayerPosition::Goalkeeper, PlayerPosition::CentreBack]);
        // Roster validation guarantees at least the goalkeeper.
        let passer = outlets[ctx.random.index(outlets.len())];

        let released = Self::pass_contest(
            ctx.attacker,
            passer,
            ctx.defender.average_capability(Capability::Passing),
            true,
            ctx.random,
        )?;
        if !released {
            ctx.log.commentary(format!(
                "{}'s long ball is cut out",
                ctx.attacker.players[passer].name
            ));
            ctx.log
                .commentary(format!("{} take over", ctx.defender.name));
            return Ok(true);
        }

        ctx.log.commentary(format!(
            "{} launches a long ball downfield",
            ctx.attacker.players[passer].name
        ));

        let assister = passer;
        let strikers = ctx.attacker.players_at(&[PlayerPosition::Striker]);
        if strikers.is_empty() {
            ctx.log.commentary(format!(
                "No striker is up to receive it and {} collect the ball",
                ctx.defender.name
            ));
            return Ok(true);
        }

        let centre_backs = ctx.defender.players_at(&[PlayerPosition::CentreBack]);
        let (broke_through, carrier) = Self::sprint_duel(
            ctx.attacker,
            ctx.defender,
            strikers,
            centre_backs,
            ctx.random,
            ctx.log,
        )?;

        if broke_through && Self::shot_contest(ctx, carrier, Some(assister))? {
            ctx.attacker
                .statistics
                .record_success(TacticKind::CounterAttack);
        }

        Ok(true)
    }

    /// Many-vs-many elimination on dribbling+pace against interception+pace.
    /// Each round eliminates the loser's representative; the side whose pool
    /// empties first loses the duel. An initially empty pool concedes the
    /// duel without any contest or counter increments.
    ///
    /// Returns whether the attackers won and the index of the final ball
    /// carrier within the winning team.
    pub fn sprint_duel(
        attacking: &mut MatchTeam,
        defending: &mut MatchTeam,
        mut attackers: Vec<usize>,
        mut defenders: Vec<usize>,
        random: &mut RandomSource,
        log: &mut CommentaryLog,
    ) -> Result<(bool, usize), SimulationError> {
        if defenders.is_empty() {
            return Ok((true, attackers[random.index(attackers.len())]));
        }
        if attackers.is_empty() {
            return Ok((false, defenders[random.index(defenders.len())]));
        }

        loop {
            let attacker = attackers[random.index(attackers.len())];
            let defender = defenders[random.index(defenders.len())];

            attacking.players[attacker].statistics.dribbles += 1;
            defending.players[defender].statistics.tackles += 1;

            let attack_weight = attacking.players[attacker].capability(Capability::Dribbling)
                + attacking.players[attacker].capability(Capability::Pace);
            let defence_weight = defending.players[defender].capability(Capability::Interception)
                + defending.players[defender].capability(Capability::Pace);

            let attacker_won =
                random.weighted_choice(&[(true, attack_weight), (false, defence_weight)])?;

            if attacker_won {
                attacking.players[attacker].statistics.dribble_success += 1;
                defenders.retain(|&index| index != defender);
                if defenders.is_empty() {
                    log.commentary(format!(
                        "{} breaks past {}",
                        attacking.players[attacker].name, defending.players[defender].name
                    ));
                    return Ok((true, attacker));
                }
            } else {
                defending.players[defender].statistics.tackle_success += 1;
                attackers.retain(|&index| index != attacker);
                if attackers.is_empty() {
                    log.commentary(format!(
                        "{} wins the ball",
                        defending.players[defender].name
                    ));
                    return Ok((false, defender));
                }
            }
        }
    }

    /// Elimination duel in the air, keyed on anticipation+strength. Both
    /// participants of a round accrue an aerial attempt, the round winner an
    /// aerial success, whichever side he is on.
    pub fn aerial_duel(
        attacking: &mut MatchTeam,
        defending: &mut MatchTeam,
        mut attackers: Vec<usize>,
        mut defenders: Vec<usize>,
        random: &mut RandomSource,
        log: &mut CommentaryLog,
    ) -> Result<(bool, usize), SimulationError> {
        if defenders.is_empty() {
            return Ok((true, attackers[random.index(attackers.len())]));
        }
        if attackers.is_empty() {
            return Ok((false, defenders[random.index(defenders.len())]));
        }

        log.commentary("The players go up for the header");

        loop {
            let attacker = attackers[random.index(attackers.len())];
            let defender = defenders[random.index(defenders.len())];

            attacking.players[attacker].statistics.aerials += 1;
            defending.players[defender].statistics.aerials += 1;

            let attack_weight = attacking.players[attacker].capability(Capability::Anticipation)
                + attacking.players[attacker].capability(Capability::Strength);
            let defence_weight = defending.players[defender].capability(Capability::Anticipation)
                + defending.players[defender].capability(Capability::Strength);

            let attacker_won =
                random.weighted_choice(&[(true, attack_weight), (false, defence_weight)])?;

            if attacker_won {
                attacking.players[attacker].statistics.aerial_success += 1;
                defenders.retain(|&index| index != defender);
                if defenders.is_empty() {
                    log.commentary(format!(
                        "{} comes away with possession",
                        attacking.players[attacker].name
                    ));
                    return Ok((true, attacker));
                }
            } else {
                defending.players[defender].statistics.aerial_success += 1;
                attackers.retain(|&index| index != attacker);
                if attackers.is_empty() {
                    return Ok((false, defender));
                }
            }
        }
    }

    /// One-on-one take-on: dribbling against interception.
    pub fn dribble_contest(
        attacking: &mut MatchTeam,
        defending: &mut MatchTeam,
        attacker: usize,
        defender: usize,
        random: &mut RandomSource,
        log: &mut CommentaryLog,
    ) -> Result<bool, SimulationError> {
        attacking.players[attacker].statistics.dribbles += 1;
        defending.players[defender].statistics.tackles += 1;

        let attacker_won = random.weighted_choice(&[
            (
                true,
                attacking.players[attacker].capability(Capability::Dribbling),
            ),
            (
                false,
                defending.players[defender].capability(Capability::Interception),
            ),
        ])?;

        if attacker_won {
            attacking.players[attacker].statistics.dribble_success += 1;
            log.commentary(format!(
                "{} slips past {}",
                attacking.players[attacker].name, defending.players[defender].name
            ));
        } else {
            defending.players[defender].statistics.tackle_success += 1;
            log.commentary(format!(
                "{} shuts down {}",
                defending.players[defender].name, attacking.players[attacker].name
            ));
        }

        Ok(attacker_won)
    }

    /// Pass against the defending side's average passing. A long ball
    /// halves both weights.
    pub fn pass_contest(
        team: &mut MatchTeam,
        passer: usize,
        defending_average: f32,
        long_pass: bool,
        random: &mut RandomSource,
    ) -> Result<bool, SimulationError> {
        team.players[passer].statistics.passes += 1;

        let (pass_weight, defence_weight) = if long_pass {
            (
                team.players[passer].capability(Capability::Passing) / 2.0,
                defending_average / 2.0,
            )
        } else {
            (
                team.players[passer].capability(Capability::Passing),
                defending_average,
            )
        };

        let completed = random.weighted_choice(&[(true, pass_weight), (false, defence_weight)])?;
        if completed {
            team.players[passer].statistics.pass_success += 1;
        }

        Ok(completed)
    }

    /// One-on-one with the keeper. Scoring bumps the team score, the goal
    /// record and the milestone lines; a missing keeper concedes outright.
    pub fn shot_contest(
        ctx: &mut AttackContext<'_>,
        shooter: usize,
        assister: Option<usize>,
    ) -> Result<bool, SimulationError> {
        ctx.log.commentary(format!(
            "{} shoots!",
            ctx.attacker.players[shooter].name
        ));

        ctx.attacker.players[shooter].statistics.shots += 1;

        let keeper = ctx.defender.goalkeeper();
        let scored = match keeper {
            Some(keeper) => {
                ctx.defender.players[keeper].statistics.saves += 1;
                ctx.random.weighted_choice(&[
                    (
                        true,
                        ctx.attacker.players[shooter].capability(Capability::Shooting),
                    ),
                    (
                        false,
                        ctx.defender.players[keeper].capability(Capability::Goalkeeping),
                    ),
                ])?
            }
            None => true,
        };

        if scored {
            ctx.attacker.score += 1;
            ctx.attacker.players[shooter].statistics.goals += 1;
            if let Some(assister) = assister {
                ctx.attacker.players[assister].statistics.assists += 1;
            }
            ctx.goals.push(GoalRecord {
                player_id: ctx.attacker.players[shooter].id,
                team: ctx.side,
                turn: ctx.turn,
            });

            let (home_name, home_score, away_score, away_name) = match ctx.side {
                TeamSide::Home => (
                    &ctx.attacker.name,
                    ctx.attacker.score,
                    ctx.defender.score,
                    &ctx.defender.name,
                ),
                TeamSide::Away => (
                    &ctx.defender.name,
                    ctx.defender.score,
                    ctx.attacker.score,
                    &ctx.attacker.name,
                ),
            };
            ctx.log.narration(format!(
                "Goal! {} {}:{} {}",
                home_name, home_score, away_score, away_name
            ));

            let shooter_name = &ctx.attacker.players[shooter].name;
            match ctx.attacker.players[shooter].statistics.goals {
                2 => ctx.log.narration(format!("{} has a brace!", shooter_name)),
                3 => ctx
                    .log
                    .narration(format!("{} completes a hat-trick!", shooter_name)),
                4 => ctx
                    .log
                    .narration(format!("{} has four goals!", shooter_name)),
                _ => {}
            }
        } else if let Some(keeper) = keeper {
            ctx.defender.players[keeper].statistics.save_success += 1;
            ctx.log.commentary(format!(
                "{} pulls off a superb save",
                ctx.defender.players[keeper].name
            ));
        }

        Ok(scored)
    }

    /// Penalty kick at the spot: shooter with a flat bonus against the
    /// keeper. No running counters are touched, mirroring how shootouts are
    /// kept out of match statistics.
    pub fn penalty_kick(
        shooting: &MatchTeam,
        defending: &MatchTeam,
        shooter: usize,
        keeper: usize,
        random: &mut RandomSource,
        log: &mut CommentaryLog,
    ) -> Result<bool, SimulationError> {
        log.narration(format!(
            "{} steps up to the spot",
            shooting.players[shooter].name
        ));

        let scored = random.weighted_choice(&[
            (
                true,
                shooting.players[shooter].capability(Capability::Shooting)
                    + PENALTY_SHOOTING_BONUS,
            ),
            (
                false,
                defending.players[keeper].capability(Capability::Goalkeeping),
            ),
        ])?;

        if scored {
            log.narration(format!("{} scores!", shooting.players[shooter].name));
        } else {
            log.narration(format!(
                "Saved by {}!",
                defending.players[keeper].name
            ));
        }

        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Formation, Player, PlayerCapabilities, TacticWeights, TeamRoster};

    fn team(id: u32, name: &str, capabilities: PlayerCapabilities) -> MatchTeam {
        let players = Formation::four_four_two()
            .positions()
            .into_iter()
            .enumerate()
            .map(|(i, position)| {
                Player::new(
                    id * 100 + i as u32,
                    format!("{} {}", name, i),
                    capabilities,
                    position,
                )
            })
            .collect();

        let roster = TeamRoster::new(id, name, players, TacticWeights::default()).unwrap();
        MatchTeam::from_roster(&roster)
    }

    fn context<'a>(
        attacker: &'a mut MatchTeam,
        defender: &'a mut MatchTeam,
        random: &'a mut RandomSource,
        log: &'a mut CommentaryLog,
        goals: &'a mut Vec<GoalRecord>,
    ) -> AttackContext<'a> {
        AttackContext {
            attacker,
            defender,
            side: TeamSide::Home,
            turn: 1,
            random,
            log,
            goals,
        }
    }

    #[test]
    fn test_sprint_duel_empty_defenders_wins_without_stats() {
        let mut attacking = team(1, "Home", PlayerCapabilities::uniform(50.0));
        let mut defending = team(2, "Away", PlayerCapabilities::uniform(50.0));
        let mut random = RandomSource::from_seed(8);
        let mut log = CommentaryLog::new();

        let attackers = attacking.players_at(&[PlayerPosition::Striker]);
        let (won, carrier) = AttackResolver::sprint_duel(
            &mut attacking,
            &mut defending,
            attackers.clone(),
            Vec::new(),
            &mut random,
            &mut log,
        )
        .unwrap();

        assert!(won);
        assert!(attackers.contains(&carrier));
        assert!(log.is_empty());
        for player in attacking.players.iter().chain(defending.players.iter()) {
            assert!(player.statistics.is_empty());
        }
    }

    #[test]
    fn test_sprint_duel_eliminates_until_one_side_empties() {
        let mut attacking = team(1, "Home", PlayerCapabilities::uniform(50.0));
        let mut defending = team(2, "Away", PlayerCapabilities::uniform(50.0));
        let mut random = RandomSource::from_seed(21);
        let mut log = CommentaryLog::new();

        let attackers = attacking.players_at(&[PlayerPosition::Striker]);
        let defenders = defending.players_at(&[PlayerPosition::CentreBack]);

        let (won, carrier) = AttackResolver::sprint_duel(
            &mut attacking,
            &mut defending,
            attackers.clone(),
            defenders.clone(),
            &mut random,
            &mut log,
        )
        .unwrap();

        if won {
            assert!(attackers.contains(&carrier));
        } else {
            assert!(defenders.contains(&carrier));
        }

        let dribbles: u16 = attacking.players.iter().map(|p| p.statistics.dribbles).sum();
        let tackles: u16 = defending.players.iter().map(|p| p.statistics.tackles).sum();
        assert!(dribbles >= 1);
        assert_eq!(dribbles, tackles);
        assert!(!log.is_empty());
    }

    #[test]
    fn test_aerial_duel_credits_all_participants() {
        let mut attacking = team(1, "Home", PlayerCapabilities::uniform(50.0));
        let mut defending = team(2, "Away", PlayerCapabilities::uniform(50.0));
        let mut random = RandomSource::from_seed(4);
        let mut log = CommentaryLog::new();

        let strikers = attacking.players_at(&[PlayerPosition::Striker]);
        let centre_backs = defending.players_at(&[PlayerPosition::CentreBack]);

        AttackResolver::aerial_duel(
            &mut attacking,
            &mut defending,
            strikers,
            centre_backs,
            &mut random,
            &mut log,
        )
        .unwrap();

        let attempts: u16 = attacking
            .players
            .iter()
            .chain(defending.players.iter())
            .map(|p| p.statistics.aerials)
            .sum();
        let successes: u16 = attacking
            .players
            .iter()
            .chain(defending.players.iter())
            .map(|p| p.statistics.aerial_success)
            .sum();

        assert!(attempts >= 2);
        // one success per contested round, two attempts per round
        assert_eq!(attempts, successes * 2);
    }

    #[test]
    fn test_shot_without_keeper_always_scores() {
        let mut attacking = team(1, "Home", PlayerCapabilities::uniform(50.0));
        let mut defending = team(2, "Away", PlayerCapabilities::uniform(50.0));
        // strip the goalkeeper role entirely
        for player in defending.players.iter_mut() {
            if player.position.is_goalkeeper() {
                player.position = PlayerPosition::CentreBack;
            }
        }

        let mut random = RandomSource::from_seed(17);
        let mut log = CommentaryLog::new();
        let mut goals = Vec::new();

        let shooter = attacking.players_at(&[PlayerPosition::Striker])[0];
        let mut ctx = context(
            &mut attacking,
            &mut defending,
            &mut random,
            &mut log,
            &mut goals,
        );
        let scored = AttackResolver::shot_contest(&mut ctx, shooter, None).unwrap();

        assert!(scored);
        assert_eq!(attacking.score, 1);
        assert_eq!(goals.len(), 1);
    }

    #[test]
    fn test_hat_trick_line_appears_exactly_once_at_third_goal() {
        let mut attacking = team(1, "Home", PlayerCapabilities::uniform(50.0));
        let mut defending = team(2, "Away", PlayerCapabilities::uniform(50.0));
        // keeper with zero goalkeeping never wins the weighted choice
        let keeper = defending.goalkeeper().unwrap();
        defending.players[keeper].capabilities.goalkeeping = 0.0;

        let mut random = RandomSource::from_seed(30);
        let mut log = CommentaryLog::new();
        let mut goals = Vec::new();

        let shooter = attacking.players_at(&[PlayerPosition::Striker])[0];

        for goal in 1..=4u16 {
            let mut ctx = context(
                &mut attacking,
                &mut defending,
                &mut random,
                &mut log,
                &mut goals,
            );
            assert!(AttackResolver::shot_contest(&mut ctx, shooter, None).unwrap());

            let hat_tricks = log
                .entries()
                .iter()
                .filter(|entry| entry.text.contains("hat-trick"))
                .count();
            assert_eq!(hat_tricks, if goal >= 3 { 1 } else { 0 });
        }

        assert_eq!(attacking.players[shooter].statistics.goals, 4);
        assert_eq!(
            log.entries()
                .iter()
                .filter(|entry| entry.text.contains("four goals"))
                .count(),
            1
        );
    }

    #[test]
    fn test_assister_credited_on_goal() {
        let mut attacking = team(1, "Home", PlayerCapabilities::uniform(50.0));
        let mut defending = team(2, "Away", PlayerCapabilities::uniform(50.0));
        let keeper = defending.goalkeeper().unwrap();
        defending.players[keeper].capabilities.goalkeeping = 0.0;

        let mut random = RandomSource::from_seed(14);
        let mut log = CommentaryLog::new();
        let mut goals = Vec::new();

        let shooter = attacking.players_at(&[PlayerPosition::Striker])[0];
        let assister = attacking.players_at(&[PlayerPosition::LeftWinger])[0];

        let mut ctx = context(
            &mut attacking,
            &mut defending,
            &mut random,
            &mut log,
            &mut goals,
        );
        AttackResolver::shot_contest(&mut ctx, shooter, Some(assister)).unwrap();

        assert_eq!(attacking.players[assister].statistics.assists, 1);
    }

    #[test]
    fn test_pass_with_zero_passing_never_completes() {
        let mut team_a = team(1, "Home", PlayerCapabilities::uniform(50.0));
        let mut random = RandomSource::from_seed(2);

        let passer = team_a.players_at(&[PlayerPosition::CentreMidfielder])[0];
        team_a.players[passer].capabilities.passing = 0.0;

        for _ in 0..50 {
            let completed =
                AttackResolver::pass_contest(&mut team_a, passer, 40.0, false, &mut random)
                    .unwrap();
            assert!(!completed);
        }
        assert_eq!(team_a.players[passer].statistics.passes, 50);
        assert_eq!(team_a.players[passer].statistics.pass_success, 0);
    }

    #[test]
    fn test_every_tactic_resolves_and_keeps_counters_consistent() {
        let mut random = RandomSource::from_seed(77);

        for tactic in TacticKind::ALL {
            let mut attacking = team(1, "Home", PlayerCapabilities::uniform(50.0));
            let mut defending = team(2, "Away", PlayerCapabilities::uniform(50.0));
            let mut log = CommentaryLog::new();
            let mut goals = Vec::new();

            let mut ctx = context(
                &mut attacking,
                &mut defending,
                &mut random,
                &mut log,
                &mut goals,
            );
            AttackResolver::resolve(tactic, &mut ctx).unwrap();

            assert_eq!(attacking.statistics.attempts, 1);
            assert_eq!(attacking.statistics.attempts_of(tactic), 1);
            for player in attacking.players.iter().chain(defending.players.iter()) {
                assert!(player.statistics.is_consistent());
            }
        }
    }

    #[test]
    fn test_counter_attack_without_strikers_forfeits_possession() {
        let mut attacking = team(1, "Home", PlayerCapabilities::uniform(50.0));
        let mut defending = team(2, "Away", PlayerCapabilities::uniform(50.0));
        for player in attacking.players.iter_mut() {
            if player.position == PlayerPosition::Striker {
                player.position = PlayerPosition::CentreMidfielder;
            }
        }
        // make the launch pass a guaranteed completion
        let outlets =
            attacking.players_at(&[PlayerPosition::Goalkeeper, PlayerPosition::CentreBack]);
        for &outlet in &outlets {
            attacking.players[outlet].capabilities.passing = 1_000_000.0;
        }

        let mut random = RandomSource::from_seed(9);
        let mut log = CommentaryLog::new();
        let mut goals = Vec::new();

        let mut ctx = context(
            &mut attacking,
            &mut defending,
            &mut random,
            &mut log,
            &mut goals,
        );
        let exchanged = AttackResolver::resolve(TacticKind::CounterAttack, &mut ctx).unwrap();

        assert!(exchanged);
        assert_eq!(attacking.score, 0);
        assert!(log
            .entries()
            .iter()
            .any(|entry| entry.text.contains("No striker")));
    }
}
