//! The validated league universe and the hierarchy it addresses.
//!
//! Every entity is a value reconstructed from its integer key:
//! country -> league -> club -> player. Nothing is stored per entity.

use crate::config::{validate_config, AttributeRange, LeagueConfig, ValidationError};
use crate::ids::{ClubNumber, CountryIndex, LeagueNumber, PlayerNumber};
use crate::ranges::{adjust_range, AdjustedRange};
use crate::skills::PositionGroup;
use crate::wages::WageCurve;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Identifier outside the configured universe.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("country {index} out of range [0, {limit})")]
    Country { index: u32, limit: u32 },
    #[error("league {number} out of range [0, {limit})")]
    League { number: u32, limit: u32 },
    #[error("club {number} out of range [0, {limit})")]
    Club { number: u32, limit: u32 },
    #[error("player {number} out of range [0, {limit})")]
    Player { number: u32, limit: u32 },
    #[error("club address {0:?} out of range")]
    Address(ClubAddress),
}

/// A country and the blocks of leagues and clubs it owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub index: CountryIndex,
    pub first_league: LeagueNumber,
    pub league_count: u32,
    pub first_club: ClubNumber,
    pub club_count: u32,
}

impl Country {
    pub fn leagues(&self) -> impl Iterator<Item = LeagueNumber> {
        let start = self.first_league.0;
        (start..start + self.league_count).map(LeagueNumber)
    }
}

/// One division of a country. Level 0 is the top division.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomesticLeague {
    pub number: LeagueNumber,
    pub country: CountryIndex,
    pub level: u32,
    pub first_club: ClubNumber,
    pub club_count: u32,
}

impl DomesticLeague {
    /// Contiguous member clubs in schedule order.
    pub fn clubs(&self) -> impl Iterator<Item = ClubNumber> {
        let start = self.first_club.0;
        (start..start + self.club_count).map(ClubNumber)
    }

    /// Global club number for a schedule slot of this league.
    pub fn club_at(&self, schedule_number: u32) -> ClubNumber {
        ClubNumber(self.first_club.0 + schedule_number)
    }
}

/// Hierarchical coordinates of a club.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClubAddress {
    pub country: CountryIndex,
    pub level: u32,
    pub schedule_number: u32,
}

/// A club decomposed from its number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub number: ClubNumber,
    pub country: CountryIndex,
    pub league: LeagueNumber,
    /// Division level within the country.
    pub level: u32,
    /// Fixed slot used by the scheduler.
    pub schedule_number: u32,
}

impl Club {
    pub const fn address(&self) -> ClubAddress {
        ClubAddress {
            country: self.country,
            level: self.level,
            schedule_number: self.schedule_number,
        }
    }
}

/// A player decomposed from its number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub number: PlayerNumber,
    pub club: ClubNumber,
    /// Position inside the club's block, `0..squad_size`.
    pub squad_rank: u32,
    pub group: PositionGroup,
    /// Rank inside the position group; 0 is the group's best-paid player.
    pub group_rank: u32,
    pub age: u32,
    pub contract_years: u32,
}

/// Validated configuration plus the caller-owned wage table.
#[derive(Clone, Debug)]
pub struct World {
    config: LeagueConfig,
    wage_curve: WageCurve,
}

impl World {
    /// Validate `config` and build the derivation context.
    pub fn new(config: LeagueConfig) -> Result<Self, ValidationError> {
        validate_config(&config)?;
        let wage_curve = WageCurve::new(config.players_per_outfield_group as usize);
        debug!(
            countries = config.countries,
            leagues = config.total_leagues(),
            clubs = config.total_clubs(),
            players = config.total_players(),
            "league universe validated"
        );
        Ok(Self { config, wage_curve })
    }

    pub fn config(&self) -> &LeagueConfig {
        &self.config
    }

    pub fn wage_curve(&self) -> &WageCurve {
        &self.wage_curve
    }

    pub fn country(&self, index: CountryIndex) -> Result<Country, AddressError> {
        let limit = self.config.countries;
        if index.0 >= limit {
            return Err(AddressError::Country { index: index.0, limit });
        }
        let lpc = self.config.leagues_per_country;
        let cpc = self.config.clubs_per_country();
        Ok(Country {
            index,
            first_league: LeagueNumber(index.0 * lpc),
            league_count: lpc,
            first_club: ClubNumber(index.0 * cpc),
            club_count: cpc,
        })
    }

    pub fn league(&self, number: LeagueNumber) -> Result<DomesticLeague, AddressError> {
        let limit = self.config.total_leagues();
        if number.0 >= limit {
            return Err(AddressError::League { number: number.0, limit });
        }
        let lpc = self.config.leagues_per_country;
        let cpl = self.config.clubs_per_league;
        Ok(DomesticLeague {
            number,
            country: CountryIndex(number.0 / lpc),
            level: number.0 % lpc,
            first_club: ClubNumber(number.0 * cpl),
            club_count: cpl,
        })
    }

    pub fn club(&self, number: ClubNumber) -> Result<Club, AddressError> {
        let limit = self.config.total_clubs();
        if number.0 >= limit {
            return Err(AddressError::Club { number: number.0, limit });
        }
        let cpl = self.config.clubs_per_league;
        let league = number.0 / cpl;
        Ok(Club {
            number,
            country: CountryIndex(number.0 / self.config.clubs_per_country()),
            league: LeagueNumber(league),
            level: league % self.config.leagues_per_country,
            schedule_number: number.0 % cpl,
        })
    }

    /// Inverse of [`World::club`]'s decomposition.
    pub fn recompose(&self, address: ClubAddress) -> Result<ClubNumber, AddressError> {
        if address.country.0 >= self.config.countries
            || address.level >= self.config.leagues_per_country
            || address.schedule_number >= self.config.clubs_per_league
        {
            return Err(AddressError::Address(address));
        }
        Ok(ClubNumber(
            address.country.0 * self.config.clubs_per_country()
                + address.level * self.config.clubs_per_league
                + address.schedule_number,
        ))
    }

    pub fn player(&self, number: PlayerNumber) -> Result<Player, AddressError> {
        let limit = self.config.total_players();
        if number.0 >= limit {
            return Err(AddressError::Player { number: number.0, limit });
        }
        let squad = self.config.squad_size;
        let club = self.club(ClubNumber(number.0 / squad))?;
        let squad_rank = number.0 % squad;
        let per_group = self.config.players_per_outfield_group;
        let group_index = squad_rank / per_group;
        // validation guarantees the goalkeeper group is the only one past the outfield groups
        let group = PositionGroup::from_index(group_index).unwrap_or(PositionGroup::Goalkeeper);
        let group_rank = squad_rank - group_index * per_group;
        let period = u64::from(squad);
        let ages = &self.config.player_ranges.age;
        let contracts = &self.config.player_ranges.contract_years;
        let age_slot = u64::from((squad_rank + club.schedule_number) % squad);
        let contract_slot = u64::from((squad_rank * 3 + club.schedule_number) % squad);
        Ok(Player {
            number,
            club: club.number,
            squad_rank,
            group,
            group_rank,
            age: self.value_in(ages, club.level, age_slot, period) as u32,
            contract_years: self.value_in(contracts, club.level, contract_slot, period) as u32,
        })
    }

    /// Player numbers of a club's squad, in squad order.
    pub fn squad(&self, club: ClubNumber) -> impl Iterator<Item = PlayerNumber> {
        let squad = self.config.squad_size;
        let start = club.0 * squad;
        (start..start + squad).map(PlayerNumber)
    }

    pub fn countries(&self) -> impl Iterator<Item = CountryIndex> {
        (0..self.config.countries).map(CountryIndex)
    }

    pub fn leagues(&self) -> impl Iterator<Item = LeagueNumber> {
        (0..self.config.total_leagues()).map(LeagueNumber)
    }

    pub fn clubs(&self) -> impl Iterator<Item = ClubNumber> {
        (0..self.config.total_clubs()).map(ClubNumber)
    }

    /// Base range adjusted for a division level.
    pub fn adjusted(&self, range: &AttributeRange, level: u32) -> AdjustedRange {
        adjust_range(range, &self.config.division_multipliers, level)
    }

    /// Cyclic value of `range` for `slot` in `0..period` at division `level`.
    pub fn value_in(&self, range: &AttributeRange, level: u32, slot: u64, period: u64) -> u64 {
        self.adjusted(range, level).value_at(slot, range.cycles, period)
    }

    /// Cyclic value of a club attribute, swept across the club's division.
    pub fn club_value(&self, range: &AttributeRange, club: &Club) -> u64 {
        self.value_in(
            range,
            club.level,
            u64::from(club.schedule_number),
            u64::from(self.config.clubs_per_league),
        )
    }
}
