//! The character/progression model.
//!
//! A [`Character`] owns combat stats, inventory, status effects, and
//! campaign progress. All mutation goes through methods that keep
//! `hp_max = base + 20 * (level - 1)` and `hp <= hp_max` intact; only
//! [`Character::apply_damage`] may drive HP to zero or below, and callers
//! treat that as defeat.

pub mod inventory;

pub use inventory::Inventory;

use std::collections::BTreeSet;

use crate::dice::Dice;
use crate::error::{EngineError, EngineResult};
use crate::tables::{
    ATTACK_PER_LEVEL, Achievement, BUFF_ATTACK_BONUS, CHAPTERS, COLLECTOR_THRESHOLD,
    HP_PER_LEVEL, Item, Role, SHIELD_ABSORB_CAP, XP_PER_LEVEL,
};

/// The result of an incoming hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// HP actually subtracted.
    pub dealt: i32,
    /// Damage soaked by a shield charge (0 if none was active).
    pub absorbed: i32,
    /// Shield charges left after the hit.
    pub charges_left: u32,
}

/// What happened during an experience grant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    /// Number of levels gained.
    pub levels_gained: u32,
    /// Level after the grant.
    pub level: u32,
    /// Achievements unlocked by the grant.
    pub unlocked: Vec<Achievement>,
}

/// A player character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub(crate) name: String,
    pub(crate) role: Role,
    pub(crate) level: u32,
    pub(crate) xp: u32,
    pub(crate) hp: i32,
    pub(crate) hp_max: i32,
    pub(crate) attack: (i32, i32),
    pub(crate) base_defense: i32,
    pub(crate) bonus_defense: i32,
    pub(crate) arsenal: Vec<String>,
    pub(crate) inventory: Inventory,
    pub(crate) buff_turns: u32,
    pub(crate) shield_charges: u32,
    pub(crate) chapter: usize,
    pub(crate) achievements: BTreeSet<Achievement>,
}

/// Max HP for a role at a level.
pub fn hp_max_for(role: Role, level: u32) -> i32 {
    let extra = i32::try_from(level.saturating_sub(1)).unwrap_or(i32::MAX);
    role.definition()
        .base_hp
        .saturating_add(HP_PER_LEVEL.saturating_mul(extra))
}

impl Character {
    /// Create a level-1 character with the role's defaults.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        let def = role.definition();
        let hp_max = hp_max_for(role, 1);
        let mut character = Self {
            name: name.into(),
            role,
            level: 1,
            xp: 0,
            hp: hp_max,
            hp_max,
            attack: def.attack,
            base_defense: def.defense,
            bonus_defense: 0,
            arsenal: def.arsenal.iter().map(|w| (*w).to_string()).collect(),
            inventory: Inventory::starting(),
            buff_turns: 0,
            shield_charges: 0,
            chapter: 0,
            achievements: BTreeSet::new(),
        };
        character.check_collector();
        character
    }

    /// Create a character after validating the name.
    pub fn register(name: &str, role: Role) -> EngineResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::EmptyName);
        }
        Ok(Self::new(name, role))
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the character. Empty names are rejected.
    pub fn rename(&mut self, name: &str) -> EngineResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::EmptyName);
        }
        self.name = name.to_string();
        Ok(())
    }

    /// Role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Current level (1-based).
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Experience toward the next level. Doubles as shop credits.
    pub fn xp(&self) -> u32 {
        self.xp
    }

    /// Current HP.
    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Max HP.
    pub fn hp_max(&self) -> i32 {
        self.hp_max
    }

    /// Attack range without buffs.
    pub fn attack(&self) -> (i32, i32) {
        self.attack
    }

    /// Passive defense from the role.
    pub fn base_defense(&self) -> i32 {
        self.base_defense
    }

    /// Defense from equipment.
    pub fn bonus_defense(&self) -> i32 {
        self.bonus_defense
    }

    /// Weapons named in narration.
    pub fn arsenal(&self) -> &[String] {
        &self.arsenal
    }

    /// Held items.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Remaining buffed turns.
    pub fn buff_turns(&self) -> u32 {
        self.buff_turns
    }

    /// Remaining shield charges.
    pub fn shield_charges(&self) -> u32 {
        self.shield_charges
    }

    /// Index of the next chapter to play.
    pub fn chapter(&self) -> usize {
        self.chapter
    }

    /// Whether every chapter has been cleared.
    pub fn campaign_finished(&self) -> bool {
        self.chapter >= CHAPTERS.len()
    }

    /// Achievements held.
    pub fn achievements(&self) -> &BTreeSet<Achievement> {
        &self.achievements
    }

    /// Whether an achievement is held.
    pub fn has_achievement(&self, achievement: Achievement) -> bool {
        self.achievements.contains(&achievement)
    }

    /// HP at or below zero.
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Grant an achievement. Returns true only if it was newly granted.
    pub fn grant(&mut self, achievement: Achievement) -> bool {
        let fresh = self.achievements.insert(achievement);
        if fresh {
            tracing::info!(character = %self.name, %achievement, "achievement unlocked");
        }
        fresh
    }

    /// Take a hit of `raw` damage through defense and any shield charge.
    pub fn apply_damage(&mut self, raw: i32) -> Hit {
        let mut damage = raw
            .saturating_sub(self.base_defense)
            .saturating_sub(self.bonus_defense)
            .max(0);
        let mut absorbed = 0;
        if self.shield_charges > 0 {
            absorbed = damage.min(SHIELD_ABSORB_CAP);
            damage -= absorbed;
            self.shield_charges -= 1;
        }
        self.hp = self.hp.saturating_sub(damage);
        Hit {
            dealt: damage,
            absorbed,
            charges_left: self.shield_charges,
        }
    }

    /// Heal a random amount in `lo..=hi`, capped at max HP.
    /// Returns the HP actually restored.
    pub fn heal(&mut self, lo: i32, hi: i32, dice: &mut impl Dice) -> i32 {
        let roll = dice.roll(lo, hi);
        let before = self.hp;
        self.hp = self.hp.saturating_add(roll).min(self.hp_max);
        self.hp.saturating_sub(before).max(0)
    }

    /// Attack range including any active buff.
    pub fn effective_attack(&self) -> (i32, i32) {
        let (lo, hi) = self.attack;
        if self.buff_turns > 0 {
            (
                lo.saturating_add(BUFF_ATTACK_BONUS),
                hi.saturating_add(BUFF_ATTACK_BONUS),
            )
        } else {
            (lo, hi)
        }
    }

    /// Roll base attack damage.
    pub fn roll_attack(&self, dice: &mut impl Dice) -> i32 {
        let (lo, hi) = self.effective_attack();
        dice.roll(lo, hi)
    }

    /// Add experience, levelling up as many times as it covers.
    pub fn gain_experience(&mut self, amount: u32) -> Progress {
        let mut progress = Progress {
            level: self.level,
            ..Progress::default()
        };
        self.xp = self.xp.saturating_add(amount);
        let levels = self.xp / XP_PER_LEVEL;
        if levels > 0 {
            self.xp %= XP_PER_LEVEL;
            self.level = self.level.saturating_add(levels);
            self.hp_max = hp_max_for(self.role, self.level);
            self.hp = self.hp_max;
            let gained = i32::try_from(levels).unwrap_or(i32::MAX);
            self.attack.0 = self
                .attack
                .0
                .saturating_add(ATTACK_PER_LEVEL.0.saturating_mul(gained));
            self.attack.1 = self
                .attack
                .1
                .saturating_add(ATTACK_PER_LEVEL.1.saturating_mul(gained));
            progress.levels_gained = levels;
            tracing::debug!(character = %self.name, level = self.level, "level up");
            if self.level >= 3 && self.grant(Achievement::Level3) {
                progress.unlocked.push(Achievement::Level3);
            }
        }
        progress.level = self.level;
        progress
    }

    /// Spend experience as shop credits. Fails without mutating if short.
    pub fn spend_xp(&mut self, amount: u32) -> bool {
        if self.xp < amount {
            return false;
        }
        self.xp -= amount;
        true
    }

    /// Add items. Returns the collector achievement if this unlocked it.
    pub fn add_item(&mut self, item: Item, n: u32) -> Option<Achievement> {
        self.inventory.add(item, n);
        self.check_collector()
    }

    /// Remove items. Fails without mutating if fewer than `n` are held.
    pub fn remove_item(&mut self, item: Item, n: u32) -> bool {
        self.inventory.remove(item, n)
    }

    /// Add shield charges on top of any remaining.
    pub fn add_shield_charges(&mut self, charges: u32) {
        self.shield_charges = self.shield_charges.saturating_add(charges);
    }

    /// Set the remaining buff duration.
    pub fn set_buff(&mut self, turns: u32) {
        self.buff_turns = turns;
    }

    /// Count down an active buff. Returns true when it just ran out.
    pub fn decay_buff(&mut self) -> bool {
        if self.buff_turns == 0 {
            return false;
        }
        self.buff_turns -= 1;
        self.buff_turns == 0
    }

    /// Restore HP after a lost fight to half of max (at least 1).
    /// Returns the new HP.
    pub fn recover_from_defeat(&mut self) -> i32 {
        self.hp = (self.hp_max / 2).max(1);
        self.hp
    }

    /// Restore HP directly, capped at max. Returns the HP restored.
    pub(crate) fn restore_hp(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.hp_max);
        self.hp.saturating_sub(before).max(0)
    }

    /// Move to the next chapter. Returns the new index.
    pub(crate) fn advance_chapter(&mut self) -> usize {
        if self.chapter < CHAPTERS.len() {
            self.chapter += 1;
        }
        self.chapter
    }

    fn check_collector(&mut self) -> Option<Achievement> {
        if self.inventory.total() >= COLLECTOR_THRESHOLD && self.grant(Achievement::Collector) {
            Some(Achievement::Collector)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, level {}) HP {}/{}",
            self.name, self.role, self.level, self.hp, self.hp_max
        )
    }
}
