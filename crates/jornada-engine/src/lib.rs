//! Turn-based combat and campaign engine for the Jornada console RPG.
//!
//! Provides the static configuration tables (roles, items, achievements,
//! chapters), the character/progression model, the item and shop economy,
//! a combat resolver, the chapter campaign controller, and JSON roster
//! persistence. Rendering and input live behind the [`PlayerInput`] trait.

pub mod campaign;
pub mod character;
pub mod combat;
pub mod config;
pub mod dice;
pub mod economy;
pub mod error;
pub mod input;
pub mod roster;
pub mod store;
pub mod tables;

pub use campaign::{Campaign, CampaignEvent, SessionOutcome, SessionReport};
pub use character::{Character, Hit, Progress};
pub use combat::{CombatAction, CombatEvent, CombatState, Encounter, Enemy, ItemSelection};
pub use config::GameConfig;
pub use dice::Dice;
pub use economy::{ItemChoice, ItemOutcome, Purchase, RestOutcome};
pub use error::{EngineError, EngineResult};
pub use input::{ActionChoice, GameEvent, Interlude, PlayerInput};
pub use roster::Roster;
pub use store::SaveStore;
pub use tables::{Achievement, Chapter, Item, ItemEffect, Role, RoleDefinition};
