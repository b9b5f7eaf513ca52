//! Turning engine data into terminal text.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use jornada_engine::tables::CHAPTERS;
use jornada_engine::{
    Achievement, CampaignEvent, Character, CombatEvent, GameEvent, ItemOutcome, Purchase, Roster,
    SessionOutcome, SessionReport,
};

/// Print everything an event has to say.
pub fn print_event(event: &GameEvent) {
    for line in event_lines(event) {
        println!("{line}");
    }
}

/// The narration lines for one event.
pub fn event_lines(event: &GameEvent) -> Vec<String> {
    match event {
        GameEvent::Combat(e) => combat_lines(e),
        GameEvent::Campaign(e) => campaign_lines(e),
    }
}

fn combat_lines(event: &CombatEvent) -> Vec<String> {
    let line = match event {
        CombatEvent::Engaged { enemy, enemy_hp } => {
            format!("{} appears ({enemy_hp} HP).", enemy.red().bold())
        }
        CombatEvent::Attacked {
            weapon,
            damage,
            critical,
            enemy_hp,
        } => {
            let crit = if *critical {
                format!(" {}", "Critical hit!".yellow().bold())
            } else {
                String::new()
            };
            format!("You strike with your {weapon} for {damage} damage.{crit} Enemy HP: {enemy_hp}")
        }
        CombatEvent::Healed { amount, hp } => {
            format!("You patch yourself up: +{amount} HP ({hp}).")
                .green()
                .to_string()
        }
        CombatEvent::NoMedkit => "No medkits left. The turn is lost.".yellow().to_string(),
        CombatEvent::ItemUsed(outcome) => item_line(outcome),
        CombatEvent::ItemCancelled => "Back to the action menu.".dimmed().to_string(),
        CombatEvent::NoSpecialItems => "No special items available. The turn is lost."
            .yellow()
            .to_string(),
        CombatEvent::StatusDamage { amount, enemy_hp } => {
            format!("The flames burn for {amount}. Enemy HP: {enemy_hp}")
        }
        CombatEvent::Counterattack { enemy, hit, hp, .. } => {
            let shield = if hit.absorbed > 0 {
                format!(
                    " (vest absorbed {}, {} charges left)",
                    hit.absorbed, hit.charges_left
                )
            } else {
                String::new()
            };
            format!("{enemy} hits you for {}{shield}. Your HP: {hp}", hit.dealt)
        }
        CombatEvent::BuffExpired => "The stimulant wears off.".dimmed().to_string(),
        CombatEvent::EnemyDefeated { enemy } => format!("{enemy} is down!").green().bold().to_string(),
        CombatEvent::ExperienceGained {
            amount,
            levels_gained,
            level,
        } => {
            let mut line = format!("+{amount} XP.");
            if *levels_gained > 0 {
                line.push_str(&format!(" {}", format!("Level up! Now level {level}.").cyan().bold()));
            }
            line
        }
        CombatEvent::AchievementUnlocked(a) => achievement_line(*a),
        CombatEvent::LootFound(item) => format!("You found a {item} among the debris."),
        CombatEvent::PlayerDefeated { recovered_hp } => {
            format!("You go down... and come to, patched up with {recovered_hp} HP.")
                .red()
                .to_string()
        }
    };
    vec![line]
}

fn item_line(outcome: &ItemOutcome) -> String {
    match *outcome {
        ItemOutcome::Healed { item, amount } => {
            format!("You use a {item}: +{amount} HP.").green().to_string()
        }
        ItemOutcome::Damaged { item, damage } => format!("Your {item} deals {damage} damage."),
        ItemOutcome::Ignited {
            item,
            damage,
            bleed,
        } => format!("Your {item} deals {damage} damage and sets the enemy ablaze ({bleed} per turn)."),
        ItemOutcome::Shielded { item, charges } => {
            format!("You strap on a {item}: {charges} shield charges.")
        }
        ItemOutcome::Buffed { item, turns } => {
            format!("The {item} kicks in: stronger attacks for {turns} turns.")
        }
    }
}

fn achievement_line(achievement: Achievement) -> String {
    format!("Achievement unlocked: {}", achievement.description())
        .yellow()
        .bold()
        .to_string()
}

fn campaign_lines(event: &CampaignEvent) -> Vec<String> {
    let total = CHAPTERS.len();
    match event {
        CampaignEvent::Intro { name, role, text } => vec![
            String::new(),
            format!("{} the {role}", name.bold()),
            text.italic().to_string(),
        ],
        CampaignEvent::Started => vec!["Your story begins.".to_string()],
        CampaignEvent::Resumed { chapter } => {
            vec![format!("Resuming at chapter {}/{total}.", chapter + 1)]
        }
        CampaignEvent::AlreadyComplete => {
            vec!["This character has already finished the campaign.".dimmed().to_string()]
        }
        CampaignEvent::ChapterOpened { index, text, .. } => vec![
            String::new(),
            format!("Chapter {}/{total}", index + 1).bold().underline().to_string(),
            (*text).to_string(),
        ],
        CampaignEvent::Rested(rest) => {
            let mut lines = vec![format!("You rest and recover {} HP.", rest.healed).green().to_string()];
            if let Some(item) = rest.found {
                lines.push(format!("While resting you find a {item}."));
            }
            lines
        }
        CampaignEvent::ShopOpened { credits } => {
            vec![format!("The shop is open. Credits: {credits}").cyan().to_string()]
        }
        CampaignEvent::Purchased(purchase) => vec![match *purchase {
            Purchase::Bought {
                item, credits_left, ..
            } => format!("Bought a {item}. Credits left: {credits_left}").green().to_string(),
            Purchase::Insufficient { price, credits } => {
                format!("Not enough credits ({credits}/{price}).").yellow().to_string()
            }
            Purchase::NotForSale(item) => format!("The {item} is not for sale.").yellow().to_string(),
        }],
        CampaignEvent::ChapterCleared { index, .. } => {
            vec![format!("Chapter {} cleared.", index + 1).green().to_string()]
        }
        CampaignEvent::Retreated { index } => vec![
            format!("You retreat. Chapter {} will be waiting.", index + 1)
                .red()
                .to_string(),
        ],
        CampaignEvent::AchievementUnlocked(a) => vec![achievement_line(*a)],
        CampaignEvent::CampaignCompleted => {
            vec!["The campaign is complete!".green().bold().to_string()]
        }
    }
}

/// A one-line summary of a finished session.
pub fn report_line(report: &SessionReport) -> String {
    let outcome = match report.outcome {
        SessionOutcome::Completed => "finished the campaign".green(),
        SessionOutcome::Retreated => "retreated".red(),
        SessionOutcome::AlreadyComplete => "had nothing left to play".dimmed(),
    };
    format!(
        "{}: {outcome}, cleared {} chapter(s), now at {}.",
        report.name.bold(),
        report.cleared,
        chapter_label(report.end_chapter)
    )
}

fn chapter_label(chapter: usize) -> String {
    if chapter >= CHAPTERS.len() {
        "the end".to_string()
    } else {
        format!("chapter {}/{}", chapter + 1, CHAPTERS.len())
    }
}

/// The roster as a table.
pub fn roster_table(roster: &Roster) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "#",
        "Name",
        "Role",
        "Level",
        "XP",
        "HP",
        "Progress",
        "Inventory",
        "Achievements",
    ]);

    for (i, c) in roster.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            c.name().to_string(),
            c.role().to_string(),
            c.level().to_string(),
            c.xp().to_string(),
            format!("{}/{}", c.hp(), c.hp_max()),
            chapter_label(c.chapter()),
            c.inventory().to_string(),
            achievements_cell(c),
        ]);
    }
    table
}

fn achievements_cell(c: &Character) -> String {
    if c.achievements().is_empty() {
        return "-".to_string();
    }
    c.achievements()
        .iter()
        .map(|a| a.id())
        .collect::<Vec<_>>()
        .join(", ")
}
