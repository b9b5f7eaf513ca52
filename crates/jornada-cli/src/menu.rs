//! The main menu loop.

use std::io::{self, BufRead};

use colored::Colorize;

use jornada_engine::{Campaign, Character, Dice, GameConfig, Role, Roster, SaveStore};

use crate::prompt::Console;
use crate::render;
use crate::terminal::TerminalPlayer;

const MENU: &str = "\
  1) Create character
  2) List characters
  3) Play campaign with one character
  4) Play campaign with all characters
  5) Rename character
  6) Delete character
  7) Save and exit";

/// Run the game until the player exits or input ends, then save.
pub fn run(config: &GameConfig) -> Result<(), String> {
    let store = SaveStore::new(&config.save_path);
    let mut roster = store.load();
    let mut campaign = Campaign::new(config.rng());
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock());

    println!("{}", "JORNADA".bold());
    println!("{} character(s) loaded.", roster.len());

    loop {
        println!();
        println!("{MENU}");
        let Some(choice) = console.ask_int("Option:", 1, 7) else {
            break;
        };
        let changed = match choice {
            1 => create(&mut console, &mut roster),
            2 => {
                list(&roster);
                false
            }
            3 => play_one(&mut console, &mut roster, &mut campaign),
            4 => play_all(&mut console, &mut roster, &mut campaign),
            5 => rename(&mut console, &mut roster),
            6 => delete(&mut console, &mut roster),
            _ => break,
        };
        if changed {
            autosave(&store, &roster);
        }
    }

    store
        .save(&roster)
        .map_err(|e| format!("could not save {}: {e}", store.path().display()))?;
    println!("Progress saved to {}. See you next time.", store.path().display());
    Ok(())
}

fn autosave(store: &SaveStore, roster: &Roster) {
    if let Err(e) = store.save(roster) {
        println!("{}", format!("warning: autosave failed: {e}").yellow());
    }
}

fn create<R: BufRead>(console: &mut Console<R>, roster: &mut Roster) -> bool {
    let Some(name) = console.ask_name("Name:") else {
        return false;
    };
    for (i, role) in Role::ALL.iter().enumerate() {
        let def = role.definition();
        println!(
            "  {}) {:<9} HP {:>3}  attack {}-{}  defense {}",
            i + 1,
            def.name,
            def.base_hp,
            def.attack.0,
            def.attack.1,
            def.defense
        );
    }
    let Some(pick) = console.ask_int("Role:", 1, Role::ALL.len()) else {
        return false;
    };
    match Character::register(&name, Role::ALL[pick - 1]) {
        Ok(character) => {
            println!("{}", format!("{character} joins the roster.").green());
            roster.add(character);
            true
        }
        Err(e) => {
            println!("{}", e.to_string().yellow());
            false
        }
    }
}

fn list(roster: &Roster) {
    if roster.is_empty() {
        println!("No characters yet.");
        return;
    }
    println!("{}", render::roster_table(roster));
}

/// Show the roster and ask for a position. Returns a zero-based index.
fn pick<R: BufRead>(console: &mut Console<R>, roster: &Roster) -> Option<usize> {
    if roster.is_empty() {
        println!("No characters yet.");
        return None;
    }
    list(roster);
    console
        .ask_int("Character #:", 1, roster.len())
        .map(|n| n - 1)
}

fn play_one<R: BufRead>(
    console: &mut Console<R>,
    roster: &mut Roster,
    campaign: &mut Campaign<impl Dice>,
) -> bool {
    let Some(index) = pick(console, roster) else {
        return false;
    };
    let Some(character) = roster.get_mut(index) else {
        return false;
    };
    let report = campaign.play(character, &mut TerminalPlayer::new(console));
    println!();
    println!("{}", render::report_line(&report));
    true
}

fn play_all<R: BufRead>(
    console: &mut Console<R>,
    roster: &mut Roster,
    campaign: &mut Campaign<impl Dice>,
) -> bool {
    if roster.is_empty() {
        println!("No characters yet.");
        return false;
    }
    let reports = campaign.play_all(roster, &mut TerminalPlayer::new(console));
    println!();
    for report in &reports {
        println!("{}", render::report_line(report));
    }
    true
}

fn rename<R: BufRead>(console: &mut Console<R>, roster: &mut Roster) -> bool {
    let Some(index) = pick(console, roster) else {
        return false;
    };
    let Some(name) = console.ask_name("New name:") else {
        return false;
    };
    match roster.rename(index, &name) {
        Ok(()) => {
            println!("Renamed to {name}.");
            true
        }
        Err(e) => {
            println!("{}", e.to_string().yellow());
            false
        }
    }
}

fn delete<R: BufRead>(console: &mut Console<R>, roster: &mut Roster) -> bool {
    let Some(index) = pick(console, roster) else {
        return false;
    };
    match roster.remove(index) {
        Ok(removed) => {
            println!("{} has left the roster.", removed.name());
            true
        }
        Err(e) => {
            println!("{}", e.to_string().yellow());
            false
        }
    }
}
