//! Resolving an item against its targets.

use crate::character::Character;
use crate::combat::Enemy;
use crate::dice::Dice;
use crate::tables::{Item, ItemEffect};

/// The observable result of using an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    /// The character recovered HP.
    Healed {
        /// Item used.
        item: Item,
        /// HP actually restored.
        amount: i32,
    },
    /// The enemy took direct damage.
    Damaged {
        /// Item used.
        item: Item,
        /// Damage dealt.
        damage: i32,
    },
    /// The enemy took damage and is now bleeding or burning.
    Ignited {
        /// Item used.
        item: Item,
        /// Immediate damage dealt.
        damage: i32,
        /// Enemy's bleed per turn after this use.
        bleed: i32,
    },
    /// The character gained shield charges.
    Shielded {
        /// Item used.
        item: Item,
        /// Total charges after this use.
        charges: u32,
    },
    /// The character's attack is boosted.
    Buffed {
        /// Item used.
        item: Item,
        /// Buffed turns remaining.
        turns: u32,
    },
}

/// Items the character can use right now, in table order.
pub fn usable_items(character: &Character) -> Vec<Item> {
    Item::ALL
        .into_iter()
        .filter(|item| character.inventory().has(*item))
        .collect()
}

/// Use an item. Consumables are removed from the inventory first; returns
/// `None` (and changes nothing) if the item is not held.
pub fn use_item(
    character: &mut Character,
    enemy: &mut Enemy,
    item: Item,
    dice: &mut impl Dice,
) -> Option<ItemOutcome> {
    if item.is_consumable() {
        if !character.remove_item(item, 1) {
            return None;
        }
    } else if !character.inventory().has(item) {
        return None;
    }

    let outcome = match item.effect() {
        ItemEffect::Heal { range: (lo, hi) } => ItemOutcome::Healed {
            item,
            amount: character.heal(lo, hi, dice),
        },
        ItemEffect::FixedDamage { range: (lo, hi) }
        | ItemEffect::QuickStrike { range: (lo, hi) } => {
            let damage = dice.roll(lo, hi);
            enemy.take_damage(damage);
            ItemOutcome::Damaged { item, damage }
        }
        ItemEffect::DamageOverTime {
            range: (lo, hi),
            bleed,
        } => {
            let damage = dice.roll(lo, hi);
            enemy.take_damage(damage);
            enemy.add_bleed(bleed);
            ItemOutcome::Ignited {
                item,
                damage,
                bleed: enemy.bleed(),
            }
        }
        ItemEffect::DamageAbsorption { charges } => {
            character.add_shield_charges(charges);
            ItemOutcome::Shielded {
                item,
                charges: character.shield_charges(),
            }
        }
        ItemEffect::AttackBuff { turns } => {
            character.set_buff(turns);
            ItemOutcome::Buffed { item, turns }
        }
    };
    tracing::debug!(character = %character.name(), ?outcome, "item used");
    Some(outcome)
}
