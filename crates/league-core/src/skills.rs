//! Position groups and the skill vector the match engine reads.

use serde::{Deserialize, Serialize};

/// Squad section a player belongs to. Goalkeepers form the last, smaller group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PositionGroup {
    Defender,
    Midfielder,
    Attacker,
    Goalkeeper,
}

impl PositionGroup {
    pub const ALL: [Self; 4] = [
        Self::Defender,
        Self::Midfielder,
        Self::Attacker,
        Self::Goalkeeper,
    ];
    pub const OUTFIELD: [Self; 3] = [Self::Defender, Self::Midfielder, Self::Attacker];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Group for a squad-order group index.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub const fn is_outfield(self) -> bool {
        !matches!(self, Self::Goalkeeper)
    }

    /// Skills this group is trained in; others are derived from a weaker range.
    pub fn focus(self) -> &'static [Skill] {
        match self {
            Self::Defender => &Skill::DEFENDING,
            Self::Midfielder => &[Skill::Passing, Skill::Dribbling, Skill::Tackling],
            Self::Attacker => &Skill::ATTACKING,
            Self::Goalkeeper => &Skill::GOALKEEPING,
        }
    }
}

/// Individual skill attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    Finishing,
    Dribbling,
    Passing,
    Tackling,
    Marking,
    Positioning,
    Handling,
    Reflexes,
}

impl Skill {
    pub const COUNT: usize = 8;
    pub const ALL: [Self; Self::COUNT] = [
        Self::Finishing,
        Self::Dribbling,
        Self::Passing,
        Self::Tackling,
        Self::Marking,
        Self::Positioning,
        Self::Handling,
        Self::Reflexes,
    ];
    /// Subset averaged into attack strength.
    pub const ATTACKING: [Self; 3] = [Self::Finishing, Self::Dribbling, Self::Passing];
    /// Subset averaged into the outfield part of defense strength.
    pub const DEFENDING: [Self; 3] = [Self::Tackling, Self::Marking, Self::Positioning];
    /// Subset averaged into the goalkeeper part of defense strength.
    pub const GOALKEEPING: [Self; 2] = [Self::Handling, Self::Reflexes];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One rating per [`Skill`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skills(pub [u8; Skill::COUNT]);

impl Skills {
    /// Same rating in every skill.
    pub const fn uniform(value: u8) -> Self {
        Self([value; Skill::COUNT])
    }

    pub const fn get(&self, skill: Skill) -> u8 {
        self.0[skill.index()]
    }

    pub fn set(&mut self, skill: Skill, value: u8) {
        self.0[skill.index()] = value;
    }

    /// Mean rating over `subset`; zero for an empty subset.
    pub fn average(&self, subset: &[Skill]) -> f64 {
        if subset.is_empty() {
            return 0.0;
        }
        let sum: u32 = subset.iter().map(|s| u32::from(self.get(*s))).sum();
        f64::from(sum) / subset.len() as f64
    }

    pub fn attacking(&self) -> f64 {
        self.average(&Skill::ATTACKING)
    }

    pub fn defending(&self) -> f64 {
        self.average(&Skill::DEFENDING)
    }

    pub fn goalkeeping(&self) -> f64 {
        self.average(&Skill::GOALKEEPING)
    }
}
