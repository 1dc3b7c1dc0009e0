//! Display names supplied by an external naming table.
//!
//! Names are presentation only; no derivation reads them.

use crate::ids::{ClubNumber, CountryIndex, LeagueNumber};

/// Lookup of human-readable names by identifier.
pub trait NameSource {
    fn country_name(&self, index: CountryIndex) -> Option<&str>;
    fn league_name(&self, number: LeagueNumber) -> Option<&str>;
    fn club_name(&self, number: ClubNumber) -> Option<&str>;
}

/// Names held in ordered lists, indexed by identifier.
#[derive(Clone, Debug, Default)]
pub struct StaticNames {
    pub countries: Vec<String>,
    pub leagues: Vec<String>,
    pub clubs: Vec<String>,
}

impl NameSource for StaticNames {
    fn country_name(&self, index: CountryIndex) -> Option<&str> {
        self.countries.get(index.0 as usize).map(String::as_str)
    }

    fn league_name(&self, number: LeagueNumber) -> Option<&str> {
        self.leagues.get(number.0 as usize).map(String::as_str)
    }

    fn club_name(&self, number: ClubNumber) -> Option<&str> {
        self.clubs.get(number.0 as usize).map(String::as_str)
    }
}

/// Club name, or a numbered placeholder when the table has none.
pub fn club_label(names: &dyn NameSource, number: ClubNumber) -> String {
    names
        .club_name(number)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Club {}", number.0))
}

/// League name, or a numbered placeholder.
pub fn league_label(names: &dyn NameSource, number: LeagueNumber) -> String {
    names
        .league_name(number)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("League {}", number.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_numbers() {
        let names = StaticNames {
            clubs: vec!["Athletic".to_string()],
            ..StaticNames::default()
        };
        assert_eq!(club_label(&names, ClubNumber(0)), "Athletic");
        assert_eq!(club_label(&names, ClubNumber(17)), "Club 17");
        assert_eq!(league_label(&names, LeagueNumber(3)), "League 3");
        assert_eq!(names.country_name(CountryIndex(0)), None);
    }
}
