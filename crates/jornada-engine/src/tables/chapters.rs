//! The campaign's chapter sequence.

use super::roles::Role;

/// Base stats for a chapter's enemy, before role scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyTemplate {
    /// Display name.
    pub name: &'static str,
    /// HP before role scaling.
    pub base_hp: i32,
    /// Attack range, inclusive.
    pub attack: (i32, i32),
    /// Experience granted on defeat.
    pub xp: u32,
}

/// One stage of the campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chapter {
    /// Narration read before the encounter.
    pub text: &'static str,
    /// The chapter's enemy.
    pub enemy: EnemyTemplate,
}

/// Name of the final boss. Defeating it unlocks the boss achievement.
pub const FINAL_BOSS: &str = "Enemy commander";

/// Chapter indices that offer a rest/shop interlude before the fight.
pub const INTERLUDE_CHAPTERS: [usize; 4] = [2, 5, 8, 10];

const fn chapter(
    text: &'static str,
    name: &'static str,
    base_hp: i32,
    attack: (i32, i32),
    xp: u32,
) -> Chapter {
    Chapter {
        text,
        enemy: EnemyTemplate {
            name,
            base_hp,
            attack,
            xp,
        },
    }
}

/// All chapters in play order.
pub const CHAPTERS: [Chapter; 12] = [
    chapter(
        "A grey sky and the murmur of sirens warn you that nothing about today will be normal.",
        "Rival lookouts",
        60,
        (8, 12),
        30,
    ),
    chapter(
        "Near the main avenue a convoy blocks the road and the noise keeps growing.",
        "Light convoy",
        85,
        (10, 15),
        45,
    ),
    chapter(
        "You slip into the side streets; a motorbike circles with a suspicious attitude.",
        "Hitman on a motorbike",
        70,
        (12, 16),
        40,
    ),
    chapter(
        "A truck cuts across the street and several hooded figures jump out in a hurry.",
        "Street blockade",
        95,
        (12, 18),
        55,
    ),
    chapter(
        "On a corner you spot a cell moving between stalls and stranded cars.",
        "Armed cell",
        110,
        (14, 20),
        70,
    ),
    chapter(
        "The facades hide watching eyes; something is off and you brace for the worst.",
        "Neighbourhood ambush",
        120,
        (15, 22),
        80,
    ),
    chapter(
        "From a nearby building, a precise shot breaks the silence for a second.",
        "Hidden sniper",
        90,
        (18, 26),
        90,
    ),
    chapter(
        "A makeshift vehicle plated with sheet metal roars down the next avenue.",
        "Improvised armour",
        140,
        (16, 24),
        110,
    ),
    chapter(
        "Footsteps and tense voices reach you in a dead-end alley.",
        "Armed civilians",
        130,
        (14, 22),
        95,
    ),
    chapter(
        "A patrol zigzags through the streets as if looking for a reaction.",
        "Aggressive patrol",
        135,
        (16, 25),
        110,
    ),
    chapter(
        "At the end of the urban corridor, someone barks orders in a commanding voice.",
        "Local boss",
        160,
        (18, 28),
        140,
    ),
    chapter(
        "Everything leads to a makeshift courtyard turned into an enemy barracks.",
        FINAL_BOSS,
        190,
        (20, 30),
        180,
    ),
];

impl EnemyTemplate {
    /// HP of this enemy when fought by the given role.
    pub fn hp_for(&self, role: Role) -> i32 {
        role.scale_enemy_hp(self.base_hp)
    }

    /// Whether this is the final boss.
    pub fn is_boss(&self) -> bool {
        self.name == FINAL_BOSS
    }
}

/// Whether the chapter at `index` offers an interlude.
pub fn has_interlude(index: usize) -> bool {
    INTERLUDE_CHAPTERS.contains(&index)
}
