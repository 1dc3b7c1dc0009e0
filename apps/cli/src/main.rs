#![deny(warnings)]

//! Headless CLI: load a league configuration, play weeks of a season and
//! print a league table.

use anyhow::{Context, Result};
use league_core::{club_label, league_label, LeagueConfig, LeagueNumber, StaticNames, World};
use league_runtime::{generate_world_records, Season};
use persistence::{save_snapshot, MemoryStore};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    season: u32,
    weeks: Option<u32>,
    seed: u64,
    league: u32,
    snapshot: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        seed: 42,
        ..Args::default()
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        let mut value = |name: &str| it.next().with_context(|| format!("{name} needs a value"));
        match arg.as_str() {
            "--config" => args.config = Some(PathBuf::from(value("--config")?)),
            "--season" => args.season = value("--season")?.parse()?,
            "--weeks" => args.weeks = Some(value("--weeks")?.parse()?),
            "--seed" => args.seed = value("--seed")?.parse()?,
            "--league" => args.league = value("--league")?.parse()?,
            "--snapshot" => args.snapshot = Some(PathBuf::from(value("--snapshot")?)),
            other => anyhow::bail!("unknown argument {other}"),
        }
    }
    Ok(args)
}

fn load_config(path: Option<&PathBuf>) -> Result<LeagueConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Ok(LeagueConfig::from_yaml_str(&text)?)
        }
        None => Ok(LeagueConfig::default()),
    }
}

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .init();

    let args = parse_args()?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        git = env!("GIT_SHA"),
        built = env!("BUILD_DATE"),
        ?args,
        "starting CLI"
    );

    let world = World::new(load_config(args.config.as_ref())?)?;
    let mut store = MemoryStore::new();
    generate_world_records(&world, &mut store)?;

    let mut season = Season::new(&world, args.season, args.seed)?;
    let weeks = args.weeks.unwrap_or_else(|| season.weeks());
    let played = season.play_weeks(weeks, &mut store)?;

    let league = LeagueNumber(args.league);
    let names = StaticNames::default();
    let table = season
        .table(league)
        .with_context(|| format!("no league {}", args.league))?;

    println!(
        "{} | season {} | weeks played: {}/{}",
        league_label(&names, league),
        args.season,
        played.len(),
        season.weeks()
    );
    println!(
        "{:>3}  {:<10} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5} {:>4}",
        "#", "Club", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
    );
    for (pos, row) in table.standings().iter().enumerate() {
        println!(
            "{:>3}  {:<10} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5} {:>4}",
            pos + 1,
            club_label(&names, row.club),
            row.played,
            row.won,
            row.drawn,
            row.lost,
            row.goals_for,
            row.goals_against,
            row.goal_difference(),
            row.points
        );
    }

    let counts = store.counts();
    println!(
        "Records | leagues: {} | clubs: {} | players: {} | matches: {} | player logs: {}",
        counts.leagues, counts.clubs, counts.players, counts.matches, counts.player_logs
    );

    if let Some(path) = args.snapshot {
        save_snapshot(&path, &store)?;
    }
    Ok(())
}
