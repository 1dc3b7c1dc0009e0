//! Box scores: spreading a side's goals, minutes and tackles over its squad.

use crate::SquadMember;
use league_core::PlayerNumber;
use serde::{Deserialize, Serialize};

/// One player's share of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxScore {
    pub player: PlayerNumber,
    pub starts: u32,
    pub minutes: u32,
    pub goals: u32,
    pub tackles: u32,
}

/// Attribute `goals` over `members` (starters first) in one ordered pass.
///
/// At 1-based position `p` a player gets `bench_size / p` starts,
/// `starts * match_length` minutes, `starts * p` tackles and
/// `max(0, remaining - starts)` goals, where `remaining` is the team total
/// minus the goals handed out so far. The last player takes whatever is
/// still unassigned, so the goals always add up to `goals`.
pub fn attribute_goals(
    members: &[SquadMember],
    goals: u32,
    bench_size: u32,
    match_length: u32,
) -> Vec<BoxScore> {
    let mut scores = Vec::with_capacity(members.len());
    let mut remaining = goals;
    let last = members.len().saturating_sub(1);
    for (i, member) in members.iter().enumerate() {
        let position = i as u32 + 1;
        let starts = bench_size / position;
        let scored = if i == last {
            remaining
        } else {
            remaining.saturating_sub(starts)
        };
        remaining -= scored;
        scores.push(BoxScore {
            player: member.player,
            starts,
            minutes: starts.saturating_mul(match_length),
            goals: scored,
            tackles: starts * position,
        });
    }
    scores
}
