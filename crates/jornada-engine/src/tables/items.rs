//! Item definitions and their effects.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inventory item. Serialized as its snake_case id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    /// Primary healing item.
    Medkit,
    /// Thrown explosive.
    Grenade,
    /// Incendiary that keeps burning.
    Molotov,
    /// Body armour with limited charges.
    Vest,
    /// Temporary attack boost.
    Stimulant,
    /// Reusable quick strike.
    Knife,
}

/// What an item does when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    /// Restore HP in the range.
    Heal {
        /// Inclusive heal range.
        range: (i32, i32),
    },
    /// Direct damage to the enemy.
    FixedDamage {
        /// Inclusive damage range.
        range: (i32, i32),
    },
    /// Immediate damage plus a lasting bleed on the enemy.
    DamageOverTime {
        /// Inclusive immediate damage range.
        range: (i32, i32),
        /// Added to the enemy's bleed accumulator.
        bleed: i32,
    },
    /// Shield charges on the character.
    DamageAbsorption {
        /// Charges granted, stacking with any remaining.
        charges: u32,
    },
    /// Attack boost for a number of turns.
    AttackBuff {
        /// Buff duration; overwrites the remaining turns.
        turns: u32,
    },
    /// Damage without consuming the item.
    QuickStrike {
        /// Inclusive damage range.
        range: (i32, i32),
    },
}

impl Item {
    /// All items in menu order.
    pub const ALL: [Item; 6] = [
        Item::Medkit,
        Item::Grenade,
        Item::Molotov,
        Item::Vest,
        Item::Stimulant,
        Item::Knife,
    ];

    /// Items sold at the shop, in menu order.
    pub const SHOP_STOCK: [Item; 5] = [
        Item::Medkit,
        Item::Grenade,
        Item::Molotov,
        Item::Vest,
        Item::Stimulant,
    ];

    /// Persisted id.
    pub fn id(self) -> &'static str {
        match self {
            Self::Medkit => "medkit",
            Self::Grenade => "grenade",
            Self::Molotov => "molotov",
            Self::Vest => "vest",
            Self::Stimulant => "stimulant",
            Self::Knife => "knife",
        }
    }

    /// Parse a persisted id (case-insensitive).
    pub fn parse(s: &str) -> EngineResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|i| i.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| EngineError::UnknownItem(s.to_string()))
    }

    /// The item's effect.
    pub fn effect(self) -> ItemEffect {
        match self {
            Self::Medkit => ItemEffect::Heal { range: (30, 45) },
            Self::Grenade => ItemEffect::FixedDamage { range: (35, 45) },
            Self::Molotov => ItemEffect::DamageOverTime {
                range: (25, 35),
                bleed: 2,
            },
            Self::Vest => ItemEffect::DamageAbsorption { charges: 3 },
            Self::Stimulant => ItemEffect::AttackBuff { turns: 3 },
            Self::Knife => ItemEffect::QuickStrike { range: (12, 18) },
        }
    }

    /// Human-readable effect summary.
    pub fn description(self) -> &'static str {
        match self {
            Self::Medkit => "Heals 30-45 HP.",
            Self::Grenade => "Deals 35-45 damage to the enemy.",
            Self::Molotov => "Deals 25-35 damage and sets the enemy burning (2 per turn).",
            Self::Vest => "Absorbs up to 6 damage from each of the next 3 hits.",
            Self::Stimulant => "Raises attack by 5 for 3 turns.",
            Self::Knife => "Quick strike for 12-18 damage; never used up.",
        }
    }

    /// Shop price in credits, or `None` if the shop does not sell it.
    pub fn price(self) -> Option<u32> {
        match self {
            Self::Medkit => Some(30),
            Self::Grenade => Some(40),
            Self::Molotov => Some(35),
            Self::Vest => Some(50),
            Self::Stimulant => Some(45),
            Self::Knife => None,
        }
    }

    /// Whether using the item removes it from the inventory.
    pub fn is_consumable(self) -> bool {
        !matches!(self.effect(), ItemEffect::QuickStrike { .. })
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_parse() {
        for item in Item::ALL {
            assert_eq!(Item::parse(item.id()).unwrap(), item);
        }
        assert!(Item::parse("bazooka").is_err());
    }

    #[test]
    fn serde_uses_ids() {
        let json = serde_json::to_string(&Item::Stimulant).unwrap();
        assert_eq!(json, "\"stimulant\"");
        let back: Item = serde_json::from_str("\"vest\"").unwrap();
        assert_eq!(back, Item::Vest);
    }

    #[test]
    fn knife_is_the_only_reusable_item() {
        let reusable: Vec<Item> = Item::ALL
            .into_iter()
            .filter(|i| !i.is_consumable())
            .collect();
        assert_eq!(reusable, vec![Item::Knife]);
    }

    #[test]
    fn every_shop_item_has_a_price() {
        for item in Item::SHOP_STOCK {
            assert!(item.price().is_some(), "{item} missing price");
        }
        assert_eq!(Item::Knife.price(), None);
    }
}
