#![deny(warnings)]

use persistence::{default_snapshot_path, load_snapshot};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default_snapshot_path()));
    let store = load_snapshot(&path)?;
    let counts = store.counts();
    println!("snapshot {}", path.display());
    println!(
        "leagues={} clubs={} players={} matches={} player_logs={}",
        counts.leagues, counts.clubs, counts.players, counts.matches, counts.player_logs
    );
    Ok(())
}
