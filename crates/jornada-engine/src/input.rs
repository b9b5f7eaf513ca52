//! The boundary to the presentation/input layer.
//!
//! The engine never prints or reads. It asks a [`PlayerInput`] for each
//! decision and reports what happened as [`GameEvent`]s.

use crate::campaign::CampaignEvent;
use crate::character::Character;
use crate::combat::{CombatEvent, Enemy};
use crate::economy::ItemChoice;
use crate::tables::{Chapter, Item};

/// The three options offered every combat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionChoice {
    /// Basic attack.
    Attack,
    /// Use a medkit.
    Heal,
    /// Pick a special item.
    SpecialItem,
}

/// The options offered before an interlude chapter's fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interlude {
    /// Go straight to the fight.
    Proceed,
    /// Heal up, maybe find a medkit.
    Rest,
    /// Trade experience for items.
    Shop,
}

/// Anything the engine reports to the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A combat log entry.
    Combat(CombatEvent),
    /// A campaign-level entry.
    Campaign(CampaignEvent),
}

/// Supplies player decisions. Implementations may block on user input.
pub trait PlayerInput {
    /// Pick this turn's action.
    fn choose_action(&mut self, character: &Character, enemy: &Enemy, turn: u32) -> ActionChoice;

    /// Pick a special item from `available` (never empty), or cancel.
    fn choose_item(&mut self, character: &Character, available: &[Item]) -> ItemChoice;

    /// Decide what to do before an interlude chapter.
    fn choose_interlude(&mut self, character: &Character, chapter: &Chapter) -> Interlude;

    /// Pick an item to buy from `stock`, or `None` to leave the shop.
    fn choose_purchase(&mut self, character: &Character, stock: &[Item]) -> Option<Item>;

    /// Receive an event as it happens.
    fn observe(&mut self, _event: &GameEvent) {}
}
