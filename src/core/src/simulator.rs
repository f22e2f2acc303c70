use crate::club::TeamRoster;
use crate::r#match::{MatchConfig, MatchEngine, MatchResult, RandomSource, SimulationError};
use chrono::NaiveDateTime;
use log::info;
use rayon::prelude::*;

/// A scheduled pairing of two rosters with its own seed, so every fixture
/// of a batch replays identically on its own.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub home: TeamRoster,
    pub away: TeamRoster,
    pub seed: u64,
}

impl Fixture {
    pub fn new(home: TeamRoster, away: TeamRoster, seed: u64) -> Self {
        Fixture { home, away, seed }
    }
}

pub struct Simulator;

impl Simulator {
    pub fn simulate(
        fixture: &Fixture,
        config: MatchConfig,
        created_time: NaiveDateTime,
    ) -> Result<MatchResult, SimulationError> {
        let engine = MatchEngine::new(
            &fixture.home,
            &fixture.away,
            config,
            RandomSource::from_seed(fixture.seed),
        );

        let result = engine.play(created_time)?;

        info!(
            "simulated {} {}:{} {}",
            result.home.name, result.score.home, result.score.away, result.away.name
        );

        Ok(result)
    }

    /// Simulates a batch of independent fixtures in parallel. Fixture order
    /// is preserved in the output.
    pub fn simulate_batch(
        fixtures: &[Fixture],
        config: &MatchConfig,
        created_time: NaiveDateTime,
    ) -> Vec<Result<MatchResult, SimulationError>> {
        fixtures
            .par_iter()
            .map(|fixture| Self::simulate(fixture, config.clone(), created_time))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Formation, PlayerCapabilities};
    use chrono::NaiveDate;

    fn roster(id: u32, name: &str) -> TeamRoster {
        TeamRoster::from_formation(
            id,
            name,
            &Formation::four_three_three(),
            id * 100,
            &[PlayerCapabilities::uniform(55.0)],
        )
        .unwrap()
    }

    fn kickoff_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 15)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_batch_preserves_order_and_determinism() {
        let fixtures: Vec<Fixture> = (0..4)
            .map(|i| {
                Fixture::new(
                    roster(i * 2 + 1, &format!("Home {}", i)),
                    roster(i * 2 + 2, &format!("Away {}", i)),
                    1000 + i as u64,
                )
            })
            .collect();

        let config = MatchConfig::default();
        let first = Simulator::simulate_batch(&fixtures, &config, kickoff_time());
        let second = Simulator::simulate_batch(&fixtures, &config, kickoff_time());

        assert_eq!(first.len(), fixtures.len());
        for (index, (a, b)) in first.iter().zip(second.iter()).enumerate() {
            let a = a.as_ref().unwrap();
            let b = b.as_ref().unwrap();
            assert_eq!(a.home.name, format!("Home {}", index));
            assert_eq!(a.score, b.score);
            assert_eq!(a.outcome, b.outcome);
        }
    }

    #[test]
    fn test_result_serializes_to_json() {
        let fixture = Fixture::new(roster(1, "Home"), roster(2, "Away"), 7);
        let result =
            Simulator::simulate(&fixture, MatchConfig::default(), kickoff_time()).unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["score"]["home"].is_number());
        assert!(json["transcript"].as_array().unwrap().len() > 1);
    }
}
