//! Team strength from the starting line-up.

use crate::{MatchError, MatchSquad};
use league_core::PositionGroup;
use serde::{Deserialize, Serialize};

/// Attack and defense ratings of one side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    pub attack: f64,
    pub defense: f64,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Strength of `squad`'s starters.
///
/// Attack is the mean attacking average of the outfield starters. Defense
/// blends the lone goalkeeper's goalkeeping average (weight
/// `goalkeeper_weight`) with the mean defending average of the defenders.
pub fn team_strength(squad: &MatchSquad, goalkeeper_weight: f64) -> Result<Strength, MatchError> {
    let starters = squad.starters();
    let mut keepers = starters
        .iter()
        .filter(|m| m.group == PositionGroup::Goalkeeper);
    let keeper = match (keepers.next(), keepers.next()) {
        (Some(k), None) => k,
        _ => {
            let count = starters
                .iter()
                .filter(|m| m.group == PositionGroup::Goalkeeper)
                .count();
            return Err(MatchError::GoalkeeperCount {
                club: squad.club(),
                count,
            });
        }
    };
    let attack = mean(
        starters
            .iter()
            .filter(|m| m.group.is_outfield())
            .map(|m| m.skills.attacking()),
    )
    .ok_or(MatchError::NoOutfieldStarters(squad.club()))?;
    let defending = mean(
        starters
            .iter()
            .filter(|m| m.group == PositionGroup::Defender)
            .map(|m| m.skills.defending()),
    )
    .ok_or(MatchError::NoDefenders(squad.club()))?;
    let defense =
        goalkeeper_weight * keeper.skills.goalkeeping() + (1.0 - goalkeeper_weight) * defending;
    Ok(Strength { attack, defense })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SquadMember;
    use league_core::{ClubNumber, PlayerNumber, Skill, Skills};

    fn member(n: u32, group: PositionGroup, skills: Skills) -> SquadMember {
        SquadMember {
            player: PlayerNumber(n),
            group,
            skills,
        }
    }

    #[test]
    fn keeper_contributes_minority_share() {
        let mut keeper = Skills::uniform(10);
        keeper.set(Skill::Handling, 90);
        keeper.set(Skill::Reflexes, 70);
        let members = vec![
            member(0, PositionGroup::Defender, Skills::uniform(60)),
            member(1, PositionGroup::Defender, Skills::uniform(40)),
            member(2, PositionGroup::Attacker, Skills::uniform(80)),
            member(3, PositionGroup::Goalkeeper, keeper),
        ];
        let squad = MatchSquad::new(ClubNumber(0), members, 4).unwrap();
        let s = team_strength(&squad, 0.05).unwrap();
        // outfield attacking: (60 + 40 + 80) / 3
        assert!((s.attack - 60.0).abs() < 1e-9);
        // 0.05 * 80 + 0.95 * 50
        assert!((s.defense - 51.5).abs() < 1e-9);
    }

    #[test]
    fn bench_is_ignored() {
        let members = vec![
            member(0, PositionGroup::Defender, Skills::uniform(50)),
            member(1, PositionGroup::Goalkeeper, Skills::uniform(50)),
            member(2, PositionGroup::Attacker, Skills::uniform(99)),
        ];
        let squad = MatchSquad::new(ClubNumber(0), members, 2).unwrap();
        let s = team_strength(&squad, 0.05).unwrap();
        assert!((s.attack - 50.0).abs() < 1e-9);
    }

    #[test]
    fn line_up_needs_one_keeper_and_a_defender() {
        let two_keepers = vec![
            member(0, PositionGroup::Defender, Skills::uniform(50)),
            member(1, PositionGroup::Goalkeeper, Skills::uniform(50)),
            member(2, PositionGroup::Goalkeeper, Skills::uniform(50)),
        ];
        let squad = MatchSquad::new(ClubNumber(4), two_keepers, 3).unwrap();
        assert_eq!(
            team_strength(&squad, 0.05),
            Err(MatchError::GoalkeeperCount {
                club: ClubNumber(4),
                count: 2
            })
        );

        let no_defenders = vec![
            member(0, PositionGroup::Attacker, Skills::uniform(50)),
            member(1, PositionGroup::Goalkeeper, Skills::uniform(50)),
        ];
        let squad = MatchSquad::new(ClubNumber(4), no_defenders, 2).unwrap();
        assert_eq!(
            team_strength(&squad, 0.05),
            Err(MatchError::NoDefenders(ClubNumber(4)))
        );
    }

    #[test]
    fn keeper_alone_has_no_attack() {
        let keeper_only = vec![
            member(0, PositionGroup::Goalkeeper, Skills::uniform(70)),
            member(1, PositionGroup::Defender, Skills::uniform(50)),
        ];
        let squad = MatchSquad::new(ClubNumber(9), keeper_only, 1).unwrap();
        let err = team_strength(&squad, 0.05).unwrap_err();
        assert_eq!(err, MatchError::NoOutfieldStarters(ClubNumber(9)));
        assert_eq!(err.to_string(), "club#9 starts no outfield players");
    }
}
