//! Structured combat log entries.

use crate::character::Hit;
use crate::economy::ItemOutcome;
use crate::tables::{Achievement, Item};

/// Something that happened during an encounter, for rendering and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    /// The encounter began.
    Engaged {
        /// Enemy name.
        enemy: String,
        /// Enemy starting HP.
        enemy_hp: i32,
    },
    /// A basic attack landed.
    Attacked {
        /// Weapon named in the narration.
        weapon: String,
        /// Damage dealt.
        damage: i32,
        /// Whether the critical multiplier applied.
        critical: bool,
        /// Enemy HP afterwards.
        enemy_hp: i32,
    },
    /// The heal action used a medkit.
    Healed {
        /// HP restored.
        amount: i32,
        /// HP afterwards.
        hp: i32,
    },
    /// The heal action found no medkit; the turn is lost.
    NoMedkit,
    /// A special item was used.
    ItemUsed(ItemOutcome),
    /// Item selection was backed out of; no turn spent.
    ItemCancelled,
    /// No special item was available; the turn is lost.
    NoSpecialItems,
    /// Bleed or burn damage hit the enemy.
    StatusDamage {
        /// Damage dealt.
        amount: i32,
        /// Enemy HP afterwards.
        enemy_hp: i32,
    },
    /// The enemy counterattacked.
    Counterattack {
        /// Enemy name.
        enemy: String,
        /// Raw roll before defense and shield.
        raw: i32,
        /// What the character actually took.
        hit: Hit,
        /// Character HP afterwards.
        hp: i32,
    },
    /// The attack buff wore off.
    BuffExpired,
    /// The enemy fell.
    EnemyDefeated {
        /// Enemy name.
        enemy: String,
    },
    /// Experience was granted.
    ExperienceGained {
        /// Amount granted.
        amount: u32,
        /// Levels gained by the grant.
        levels_gained: u32,
        /// Level afterwards.
        level: u32,
    },
    /// An achievement was unlocked.
    AchievementUnlocked(Achievement),
    /// Loot was found after the fight.
    LootFound(Item),
    /// The character fell and was patched up.
    PlayerDefeated {
        /// HP after recovery.
        recovered_hp: i32,
    },
}
