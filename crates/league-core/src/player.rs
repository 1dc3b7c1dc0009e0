//! Player wages and skills.

use crate::club::ClubFinances;
use crate::skills::{Skill, Skills};
use crate::world::{Club, Player, World};
use rust_decimal::Decimal;

impl World {
    /// Wage of `player` given the finances of the club that owns them.
    ///
    /// The club's wage bill is split by position group and then along the
    /// pentagonal curve inside the group.
    pub fn player_wage(&self, player: &Player, finances: &ClubFinances) -> Decimal {
        let cfg = self.config();
        let group_share = cfg
            .group_wage_shares
            .get(player.group.index())
            .copied()
            .unwrap_or(Decimal::ZERO);
        let share = self
            .wage_curve()
            .share_decimal(player.group_rank, cfg.group_size(player.group))
            .unwrap_or(Decimal::ZERO);
        (finances.wage_bill * group_share * share).round_dp(2)
    }

    /// Skill vector of `player`, playing for `club`.
    pub fn player_skills(&self, player: &Player, club: &Club) -> Skills {
        let cfg = self.config();
        let range = &cfg.player_ranges.skill;
        let full = self.adjusted(range, club.level);
        let off_focus = full.lower_half();
        let period = u64::from(cfg.squad_size);
        let focus = player.group.focus();
        let mut skills = Skills::default();
        for skill in Skill::ALL {
            let slot = u64::from(player.group_rank + club.schedule_number + skill.index() as u32)
                % period;
            let r = if focus.contains(&skill) { full } else { off_focus };
            let value = r.value_at(slot, range.cycles, period);
            skills.set(skill, u8::try_from(value).unwrap_or(u8::MAX));
        }
        skills
    }
}
