//! Static game data: roles, items, achievements, and the chapter sequence.
//!
//! Every table is keyed by an enum, so lookups are total. Free-text keys
//! (role names and ids from save files) go through the `parse` functions,
//! which report unknown keys explicitly.

pub mod achievements;
pub mod chapters;
pub mod items;
pub mod roles;

pub use achievements::Achievement;
pub use chapters::{CHAPTERS, Chapter, EnemyTemplate, INTERLUDE_CHAPTERS};
pub use items::{Item, ItemEffect};
pub use roles::{Role, RoleDefinition};

/// Experience needed for one level-up.
pub const XP_PER_LEVEL: u32 = 100;

/// Max HP gained per level above 1.
pub const HP_PER_LEVEL: i32 = 20;

/// Attack bounds gained per level-up, as (min, max).
pub const ATTACK_PER_LEVEL: (i32, i32) = (1, 2);

/// Damage a single shield charge can absorb.
pub const SHIELD_ABSORB_CAP: i32 = 6;

/// Bonus added to both attack bounds while a buff is active.
pub const BUFF_ATTACK_BONUS: i32 = 5;

/// Inventory total that unlocks the collector achievement.
pub const COLLECTOR_THRESHOLD: u32 = 6;

/// Probability that a basic attack is critical.
pub const CRIT_CHANCE: f64 = 0.15;

/// Chapters cleared in one session that unlock the milestone achievement.
pub const SESSION_MILESTONE: u32 = 3;

/// HP restored by resting, inclusive.
pub const REST_HEAL: (i32, i32) = (20, 35);

/// Probability of finding a medkit while resting.
pub const REST_BONUS_CHANCE: f64 = 0.25;

/// Loot bands after a victory: cumulative upper bound and the item dropped.
/// A roll at or above the last bound drops nothing.
pub const LOOT_TABLE: [(f64, Item); 3] = [
    (0.35, Item::Medkit),
    (0.55, Item::Grenade),
    (0.70, Item::Molotov),
];

/// Resolve a loot roll in `[0, 1)` against [`LOOT_TABLE`].
pub fn loot_for(roll: f64) -> Option<Item> {
    LOOT_TABLE
        .iter()
        .find(|(bound, _)| roll < *bound)
        .map(|(_, item)| *item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loot_bands() {
        assert_eq!(loot_for(0.0), Some(Item::Medkit));
        assert_eq!(loot_for(0.349), Some(Item::Medkit));
        assert_eq!(loot_for(0.35), Some(Item::Grenade));
        assert_eq!(loot_for(0.549), Some(Item::Grenade));
        assert_eq!(loot_for(0.55), Some(Item::Molotov));
        assert_eq!(loot_for(0.699), Some(Item::Molotov));
        assert_eq!(loot_for(0.70), None);
        assert_eq!(loot_for(0.999), None);
    }
}
