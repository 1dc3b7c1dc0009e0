//! Match-day squad selection.

use crate::RuntimeError;
use league_core::{ClubNumber, Player, PositionGroup, World};
use league_match::{MatchSquad, SquadMember};

/// Pick `club`'s match-day squad.
///
/// Each group's formation slots go to its lowest group ranks, in group
/// order. The bench takes the next `bench_size` unselected players in
/// squad order.
pub fn match_squad(world: &World, club: ClubNumber) -> Result<MatchSquad, RuntimeError> {
    let view = world.club(club)?;
    let engine = &world.config().match_engine;
    let players = world
        .squad(club)
        .map(|n| world.player(n))
        .collect::<Result<Vec<Player>, _>>()?;

    let mut picked = vec![false; players.len()];
    let mut order = Vec::with_capacity(players.len());
    for group in PositionGroup::ALL {
        let wanted = engine.formation.count(group) as usize;
        for (i, _) in players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.group == group)
            .take(wanted)
        {
            picked[i] = true;
            order.push(i);
        }
    }
    let starters = order.len();
    order.extend(
        (0..players.len())
            .filter(|i| !picked[*i])
            .take(engine.bench_size as usize),
    );

    let members = order
        .into_iter()
        .map(|i| {
            let player = &players[i];
            SquadMember {
                player: player.number,
                group: player.group,
                skills: world.player_skills(player, &view),
            }
        })
        .collect();
    Ok(MatchSquad::new(club, members, starters)?)
}
