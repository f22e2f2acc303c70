use chrono::Utc;
use env_logger::Env;
use football_core::club::{Formation, PlayerCapabilities, TeamRoster};
use football_core::r#match::{CommentaryTag, MatchConfig, MatchOutcome};
use football_core::simulator::{Fixture, Simulator};
use log::info;
use std::env;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let seed = env::var("SEED")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(2026);

    let home = TeamRoster::from_formation(
        1,
        "Red United",
        &Formation::four_four_two(),
        100,
        &[
            PlayerCapabilities::uniform(62.0),
            PlayerCapabilities::uniform(55.0),
        ],
    )?;
    let away = TeamRoster::from_formation(
        2,
        "Blue City",
        &Formation::four_three_three(),
        200,
        &[
            PlayerCapabilities::uniform(58.0),
            PlayerCapabilities::uniform(60.0),
        ],
    )?;

    let fixture = Fixture::new(home.clone(), away.clone(), seed);
    let config = MatchConfig {
        season: Some(String::from("2026/27")),
        ..MatchConfig::default()
    };

    let result = Simulator::simulate(&fixture, config.clone(), Utc::now().naive_utc())?;

    for entry in &result.transcript {
        match entry.tag {
            CommentaryTag::Declaration => println!("== {}", entry.text),
            CommentaryTag::Narration => println!(" * {}", entry.text),
            CommentaryTag::Commentary => println!("   {}", entry.text),
        }
    }

    println!(
        "\nFinal score: {} {}:{} {}",
        result.home.name, result.score.home, result.score.away, result.away.name
    );
    if let MatchOutcome::DecidedOnPenalties { winner } = result.outcome {
        println!("Decided on penalties, {:?} side wins", winner);
    }

    let fixtures: Vec<Fixture> = (0..8)
        .map(|round| Fixture::new(home.clone(), away.clone(), seed + round))
        .collect();

    let results = Simulator::simulate_batch(&fixtures, &config, Utc::now().naive_utc());
    for result in results {
        let result = result?;
        info!(
            "replay: {} {}:{} {} ({:?})",
            result.home.name, result.score.home, result.score.away, result.away.name, result.outcome
        );
    }

    Ok(())
}
