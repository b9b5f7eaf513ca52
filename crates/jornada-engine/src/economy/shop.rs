//! The experience-for-supplies shop and the rest stop.

use crate::character::Character;
use crate::dice::Dice;
use crate::tables::{Achievement, Item, REST_BONUS_CHANCE, REST_HEAL};

/// Result of a purchase attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purchase {
    /// The item was bought.
    Bought {
        /// Item added to the inventory.
        item: Item,
        /// Credits (experience) left.
        credits_left: u32,
        /// Achievement unlocked by the new item, if any.
        unlocked: Option<Achievement>,
    },
    /// Not enough credits; nothing changed.
    Insufficient {
        /// Price of the item.
        price: u32,
        /// Credits held.
        credits: u32,
    },
    /// The shop does not stock this item.
    NotForSale(Item),
}

/// Result of resting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestOutcome {
    /// HP restored.
    pub healed: i32,
    /// Bonus item found while resting.
    pub found: Option<Item>,
    /// Achievement unlocked by the bonus item, if any.
    pub unlocked: Option<Achievement>,
}

/// Buy one unit of `item` with experience.
pub fn purchase(character: &mut Character, item: Item) -> Purchase {
    let Some(price) = item.price() else {
        return Purchase::NotForSale(item);
    };
    if !character.spend_xp(price) {
        return Purchase::Insufficient {
            price,
            credits: character.xp(),
        };
    }
    let unlocked = character.add_item(item, 1);
    tracing::info!(character = %character.name(), %item, price, "shop purchase");
    Purchase::Bought {
        item,
        credits_left: character.xp(),
        unlocked,
    }
}

/// Rest: heal a random amount, with a chance of finding a medkit.
pub fn rest(character: &mut Character, dice: &mut impl Dice) -> RestOutcome {
    let (lo, hi) = REST_HEAL;
    let roll = dice.roll(lo, hi);
    let healed = character.restore_hp(roll);
    let (found, unlocked) = if dice.chance() < REST_BONUS_CHANCE {
        (Some(Item::Medkit), character.add_item(Item::Medkit, 1))
    } else {
        (None, None)
    };
    RestOutcome {
        healed,
        found,
        unlocked,
    }
}
