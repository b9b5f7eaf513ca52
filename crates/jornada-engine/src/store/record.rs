//! On-disk character records and the field default policy.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::character::{Character, Inventory, hp_max_for};
use crate::tables::{Achievement, CHAPTERS, Item, Role, XP_PER_LEVEL};

/// Newest schema version this build writes.
pub const SAVE_VERSION: u32 = 1;

/// Highest level accepted from a save file.
pub const MAX_LOADED_LEVEL: u32 = 999;

/// Bound for attack and defense values read from a save file.
pub const MAX_LOADED_STAT: i32 = 9_999;

/// Bound for item counts, buff turns and shield charges read from a save file.
pub const MAX_LOADED_COUNT: u32 = 999;

/// One character as stored. Every field is optional on read; missing
/// fields fall back to the role's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Display name. Records without one are skipped.
    pub name: Option<String>,
    /// Role name; unknown names fall back to the default role.
    pub role: Option<String>,
    /// Level, at least 1.
    pub level: Option<u32>,
    /// Experience toward the next level.
    pub xp: Option<u32>,
    /// Current HP.
    pub hp: Option<i32>,
    /// Max HP. Always recomputed from role and level on load.
    pub hp_max: Option<i32>,
    /// Lower attack bound.
    pub attack_min: Option<i32>,
    /// Upper attack bound.
    pub attack_max: Option<i32>,
    /// Defense from the role.
    pub base_defense: Option<i32>,
    /// Defense from equipment.
    pub bonus_defense: Option<i32>,
    /// Weapon names for narration.
    pub arsenal: Option<Vec<String>>,
    /// Item id to count.
    pub inventory: Option<BTreeMap<String, u32>>,
    /// Buffed turns remaining.
    pub buff_turns: Option<u32>,
    /// Shield charges remaining.
    pub shield_charges: Option<u32>,
    /// Index of the next chapter.
    pub chapter: Option<usize>,
    /// Achievement ids held.
    pub achievements: Option<Vec<String>>,
}

/// The versioned save file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFile {
    /// Schema version.
    pub version: u32,
    /// When the snapshot was written.
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
    /// Characters in roster order.
    #[serde(default)]
    pub characters: Vec<CharacterRecord>,
}

/// Any save layout this build can read.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum AnySave {
    Versioned(SaveFile),
    /// The unversioned layout: a bare array of records.
    Legacy(Vec<CharacterRecord>),
}

impl AnySave {
    pub(crate) fn into_file(self) -> SaveFile {
        match self {
            Self::Versioned(file) => file,
            Self::Legacy(characters) => SaveFile {
                version: 0,
                saved_at: None,
                characters,
            },
        }
    }
}

impl From<&Character> for CharacterRecord {
    fn from(c: &Character) -> Self {
        Self {
            name: Some(c.name().to_string()),
            role: Some(c.role().name().to_string()),
            level: Some(c.level()),
            xp: Some(c.xp()),
            hp: Some(c.hp()),
            hp_max: Some(c.hp_max()),
            attack_min: Some(c.attack().0),
            attack_max: Some(c.attack().1),
            base_defense: Some(c.base_defense()),
            bonus_defense: Some(c.bonus_defense()),
            arsenal: Some(c.arsenal().to_vec()),
            inventory: Some(
                c.inventory()
                    .iter()
                    .map(|(item, n)| (item.id().to_string(), n))
                    .collect(),
            ),
            buff_turns: Some(c.buff_turns()),
            shield_charges: Some(c.shield_charges()),
            chapter: Some(c.chapter()),
            achievements: Some(c.achievements().iter().map(|a| a.id().to_string()).collect()),
        }
    }
}

impl CharacterRecord {
    /// Rebuild a character, applying the default policy to every missing
    /// or out-of-range field. Returns `None` for a record with no name.
    pub fn into_character(self) -> Option<Character> {
        let Some(name) = self.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()) else {
            tracing::warn!("skipping saved character without a name");
            return None;
        };
        let role = self
            .role
            .as_deref()
            .map(Role::parse_or_default)
            .unwrap_or_default();
        let def = role.definition();

        let level = self.level.unwrap_or(1).clamp(1, MAX_LOADED_LEVEL);
        if self.level.is_some_and(|stored| stored != level) {
            tracing::warn!(%name, level, "saved level out of range; clamped");
        }
        let hp_max = hp_max_for(role, level);
        if let Some(stored) = self.hp_max.filter(|stored| *stored != hp_max) {
            tracing::warn!(%name, stored, hp_max, "recomputed max HP");
        }

        let arsenal = match self.arsenal {
            Some(arsenal) if !arsenal.is_empty() => arsenal,
            _ => def.arsenal.iter().map(|w| (*w).to_string()).collect(),
        };

        let mut inventory = Inventory::new();
        for (id, count) in self.inventory.unwrap_or_default() {
            match Item::parse(&id) {
                Ok(item) => inventory.add(item, count.min(MAX_LOADED_COUNT)),
                Err(err) => tracing::warn!(%name, "{err}; dropped"),
            }
        }

        let mut achievements = BTreeSet::new();
        for id in self.achievements.unwrap_or_default() {
            match Achievement::parse(&id) {
                Some(achievement) => {
                    achievements.insert(achievement);
                }
                None => tracing::warn!(%name, %id, "unknown achievement dropped"),
            }
        }

        let xp = self.xp.unwrap_or(0);
        if xp >= XP_PER_LEVEL {
            tracing::warn!(%name, xp, "saved experience past a level-up; clamped");
        }
        let attack_min = self
            .attack_min
            .unwrap_or(def.attack.0)
            .clamp(0, MAX_LOADED_STAT);
        let attack_max = self
            .attack_max
            .unwrap_or(def.attack.1)
            .clamp(attack_min, MAX_LOADED_STAT);

        let mut character = Character {
            name,
            role,
            level,
            xp: xp.min(XP_PER_LEVEL - 1),
            hp: self.hp.unwrap_or(hp_max).clamp(0, hp_max),
            hp_max,
            attack: (attack_min, attack_max),
            base_defense: self
                .base_defense
                .unwrap_or(def.defense)
                .clamp(0, MAX_LOADED_STAT),
            bonus_defense: self.bonus_defense.unwrap_or(0).clamp(0, MAX_LOADED_STAT),
            arsenal,
            inventory,
            buff_turns: self.buff_turns.unwrap_or(0).min(MAX_LOADED_COUNT),
            shield_charges: self.shield_charges.unwrap_or(0).min(MAX_LOADED_COUNT),
            chapter: self.chapter.unwrap_or(0).min(CHAPTERS.len()),
            achievements,
        };
        if character.is_defeated() {
            let hp = character.recover_from_defeat();
            tracing::warn!(name = %character.name, hp, "saved without HP; recovered");
        }
        Some(character)
    }
}
