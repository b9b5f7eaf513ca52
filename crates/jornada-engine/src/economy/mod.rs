//! Item effects, the shop, and resting.
//!
//! Item use resolves an [`Item`]'s [`ItemEffect`](crate::tables::ItemEffect)
//! against the character and the current enemy. The shop trades experience
//! for items at a 1:1 credit rate; resting heals and may turn up a medkit.

pub mod effect;
pub mod shop;

pub use effect::{ItemOutcome, usable_items, use_item};
pub use shop::{Purchase, RestOutcome, purchase, rest};

use crate::tables::Item;

/// The player's answer when asked which special item to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemChoice {
    /// Use this item.
    Use(Item),
    /// Back out to the action menu without spending the turn.
    Cancel,
}
