#![deny(warnings)]

//! Persistence layer: an in-memory record store and bincode snapshots of it.
//!
//! Records arrive through [`RecordSink`] and are kept verbatim under their
//! entity number or fixture key. Writing the same record twice is a no-op;
//! writing a different record under an occupied key is a conflict.

use league_core::{
    ClubNumber, ClubRecord, FixtureKey, LeagueNumber, LeagueRecord, MatchResult, PlayerMatchLog,
    PlayerNumber, PlayerRecord, RecordSink,
};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Layout version written into every snapshot.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Returns the default path used for local snapshots.
pub fn default_snapshot_path() -> &'static str {
    "./saves/league.snapshot"
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("conflicting {kind} record for {key}")]
    Conflict { kind: &'static str, key: String },
    #[error("snapshot encoding failed: {0}")]
    Encode(#[source] bincode::Error),
    #[error("snapshot decoding failed: {0}")]
    Decode(#[source] bincode::Error),
    #[error("unsupported snapshot version {found}, expected {expected}")]
    Version { found: u32, expected: u32 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn insert_once<K, V>(
    map: &mut BTreeMap<K, V>,
    key: K,
    value: V,
    kind: &'static str,
) -> Result<(), StoreError>
where
    K: Ord + Debug,
    V: PartialEq,
{
    match map.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(value);
            Ok(())
        }
        Entry::Occupied(slot) if *slot.get() == value => Ok(()),
        Entry::Occupied(slot) => Err(StoreError::Conflict {
            kind,
            key: format!("{:?}", slot.key()),
        }),
    }
}

/// Record counts of a store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreCounts {
    pub leagues: usize,
    pub clubs: usize,
    pub players: usize,
    pub matches: usize,
    pub player_logs: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    leagues: BTreeMap<LeagueNumber, LeagueRecord>,
    clubs: BTreeMap<ClubNumber, ClubRecord>,
    players: BTreeMap<PlayerNumber, PlayerRecord>,
    matches: BTreeMap<FixtureKey, MatchResult>,
    logs: BTreeMap<(FixtureKey, PlayerNumber), PlayerMatchLog>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            leagues: self.leagues.len(),
            clubs: self.clubs.len(),
            players: self.players.len(),
            matches: self.matches.len(),
            player_logs: self.logs.len(),
        }
    }

    pub fn league(&self, number: LeagueNumber) -> Option<&LeagueRecord> {
        self.leagues.get(&number)
    }

    pub fn club(&self, number: ClubNumber) -> Option<&ClubRecord> {
        self.clubs.get(&number)
    }

    pub fn player(&self, number: PlayerNumber) -> Option<&PlayerRecord> {
        self.players.get(&number)
    }

    pub fn match_result(&self, key: &FixtureKey) -> Option<&MatchResult> {
        self.matches.get(key)
    }

    /// Results of one league and season, in week and fixture order.
    pub fn league_results(
        &self,
        season: u32,
        league: LeagueNumber,
    ) -> impl Iterator<Item = &MatchResult> + '_ {
        self.matches
            .values()
            .filter(move |r| r.key.season == season && r.key.league == league)
    }

    /// Box scores of one fixture, by player number.
    pub fn fixture_logs(&self, key: FixtureKey) -> impl Iterator<Item = &PlayerMatchLog> + '_ {
        self.logs
            .range((key, PlayerNumber(0))..=(key, PlayerNumber(u32::MAX)))
            .map(|(_, log)| log)
    }

    /// Every box score of one player, in fixture order.
    pub fn player_logs(&self, player: PlayerNumber) -> impl Iterator<Item = &PlayerMatchLog> + '_ {
        self.logs.values().filter(move |l| l.player == player)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            leagues: self.leagues.values().cloned().collect(),
            clubs: self.clubs.values().cloned().collect(),
            players: self.players.values().cloned().collect(),
            matches: self.matches.values().cloned().collect(),
            logs: self.logs.values().cloned().collect(),
        }
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, StoreError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StoreError::Version {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        let mut store = Self::new();
        for r in snapshot.leagues {
            store.put_league(r)?;
        }
        for r in snapshot.clubs {
            store.put_club(r)?;
        }
        for r in snapshot.players {
            store.put_player(r)?;
        }
        for r in snapshot.matches {
            store.put_match(r)?;
        }
        for r in snapshot.logs {
            store.put_player_log(r)?;
        }
        Ok(store)
    }
}

impl RecordSink for MemoryStore {
    type Error = StoreError;

    fn put_club(&mut self, record: ClubRecord) -> Result<(), StoreError> {
        insert_once(&mut self.clubs, record.club.number, record, "club")
    }

    fn put_player(&mut self, record: PlayerRecord) -> Result<(), StoreError> {
        insert_once(&mut self.players, record.player.number, record, "player")
    }

    fn put_league(&mut self, record: LeagueRecord) -> Result<(), StoreError> {
        insert_once(&mut self.leagues, record.league.number, record, "league")
    }

    fn put_match(&mut self, result: MatchResult) -> Result<(), StoreError> {
        insert_once(&mut self.matches, result.key, result, "match")
    }

    fn put_player_log(&mut self, log: PlayerMatchLog) -> Result<(), StoreError> {
        insert_once(&mut self.logs, (log.key, log.player), log, "player log")
    }
}

/// Flat, versioned image of a [`MemoryStore`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub leagues: Vec<LeagueRecord>,
    pub clubs: Vec<ClubRecord>,
    pub players: Vec<PlayerRecord>,
    pub matches: Vec<MatchResult>,
    pub logs: Vec<PlayerMatchLog>,
}

pub fn encode_snapshot(snapshot: &Snapshot) -> Result<Vec<u8>, StoreError> {
    bincode::serialize(snapshot).map_err(StoreError::Encode)
}

pub fn decode_snapshot(bytes: &[u8]) -> Result<Snapshot, StoreError> {
    bincode::deserialize(bytes).map_err(StoreError::Decode)
}

/// Write `store` to `path`, creating parent directories.
pub fn save_snapshot(path: &Path, store: &MemoryStore) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let bytes = encode_snapshot(&store.snapshot())?;
    std::fs::write(path, &bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "snapshot saved");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<MemoryStore, StoreError> {
    let bytes = std::fs::read(path)?;
    let store = MemoryStore::from_snapshot(decode_snapshot(&bytes)?)?;
    info!(path = %path.display(), matches = store.matches.len(), "snapshot loaded");
    Ok(store)
}
