//! The interactive player: engine decisions answered from the console.

use std::io::BufRead;

use colored::Colorize;

use jornada_engine::{
    ActionChoice, Character, Chapter, Enemy, GameEvent, Interlude, Item, ItemChoice, PlayerInput,
};

use crate::prompt::Console;
use crate::render;

/// Answers engine prompts from a [`Console`]. When input runs out it
/// falls back to attacking, cancelling, proceeding, and leaving shops.
pub struct TerminalPlayer<'a, R> {
    console: &'a mut Console<R>,
}

impl<'a, R: BufRead> TerminalPlayer<'a, R> {
    pub fn new(console: &'a mut Console<R>) -> Self {
        Self { console }
    }
}

impl<R: BufRead> PlayerInput for TerminalPlayer<'_, R> {
    fn choose_action(&mut self, character: &Character, enemy: &Enemy, turn: u32) -> ActionChoice {
        let mut status = format!(
            "Turn {turn} | {} {}/{} HP | {} {} HP",
            character.name().bold(),
            character.hp(),
            character.hp_max(),
            enemy.name(),
            enemy.hp()
        );
        if character.buff_turns() > 0 {
            status.push_str(&format!(" | buff {}", character.buff_turns()));
        }
        if character.shield_charges() > 0 {
            status.push_str(&format!(" | shield {}", character.shield_charges()));
        }
        println!();
        println!("{}", status.dimmed());
        println!(
            "  1) Attack  2) Heal (medkits: {})  3) Special item",
            character.inventory().count(Item::Medkit)
        );
        match self.console.ask_int("Action:", 1, 3) {
            Some(2) => ActionChoice::Heal,
            Some(3) => ActionChoice::SpecialItem,
            _ => ActionChoice::Attack,
        }
    }

    fn choose_item(&mut self, character: &Character, available: &[Item]) -> ItemChoice {
        for (i, item) in available.iter().enumerate() {
            println!(
                "  {}) {item} x{}: {}",
                i + 1,
                character.inventory().count(*item),
                item.description()
            );
        }
        let back = available.len() + 1;
        println!("  {back}) Back");
        match self.console.ask_int("Item:", 1, back) {
            Some(n) if n < back => ItemChoice::Use(available[n - 1]),
            _ => ItemChoice::Cancel,
        }
    }

    fn choose_interlude(&mut self, character: &Character, _chapter: &Chapter) -> Interlude {
        println!(
            "A quiet moment. {}/{} HP, {} XP to spend.",
            character.hp(),
            character.hp_max(),
            character.xp()
        );
        println!("  1) Move on  2) Rest  3) Visit the shop");
        match self.console.ask_int("Choice:", 1, 3) {
            Some(2) => Interlude::Rest,
            Some(3) => Interlude::Shop,
            _ => Interlude::Proceed,
        }
    }

    fn choose_purchase(&mut self, character: &Character, stock: &[Item]) -> Option<Item> {
        println!("Credits: {}", character.xp());
        for (i, item) in stock.iter().enumerate() {
            let price = item.price().unwrap_or_default();
            println!("  {}) {item} ({price}): {}", i + 1, item.description());
        }
        let leave = stock.len() + 1;
        println!("  {leave}) Leave");
        match self.console.ask_int("Buy:", 1, leave) {
            Some(n) if n < leave => Some(stock[n - 1]),
            _ => None,
        }
    }

    fn observe(&mut self, event: &GameEvent) {
        render::print_event(event);
    }
}
