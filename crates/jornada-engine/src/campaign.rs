//! The chapter campaign controller.
//!
//! A session starts at the character's stored chapter index and plays
//! chapters in order until the character loses a fight or the campaign
//! runs out. Some chapters open with an interlude where the player may
//! rest or shop first. The chapter index only ever moves forward.

use crate::character::Character;
use crate::combat::{CombatState, Encounter, Enemy};
use crate::dice::Dice;
use crate::economy::{self, Purchase, RestOutcome};
use crate::input::{GameEvent, Interlude, PlayerInput};
use crate::roster::Roster;
use crate::tables::chapters::has_interlude;
use crate::tables::{Achievement, CHAPTERS, Item, Role, SESSION_MILESTONE};

/// Campaign-level narration and outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampaignEvent {
    /// A session opened with the role's intro narration.
    Intro {
        /// Character name.
        name: String,
        /// Character role.
        role: Role,
        /// Narration text.
        text: String,
    },
    /// The character starts from the first chapter.
    Started,
    /// The character picks up where they left off.
    Resumed {
        /// Zero-based index of the next chapter.
        chapter: usize,
    },
    /// Every chapter has already been cleared.
    AlreadyComplete,
    /// A chapter's narration, read before its fight.
    ChapterOpened {
        /// Zero-based chapter index.
        index: usize,
        /// Narration text.
        text: &'static str,
        /// The enemy about to be fought.
        enemy: &'static str,
    },
    /// The character rested during an interlude.
    Rested(RestOutcome),
    /// The shop opened with this many credits available.
    ShopOpened {
        /// Experience available to spend.
        credits: u32,
    },
    /// A purchase was attempted.
    Purchased(Purchase),
    /// The chapter's enemy was beaten.
    ChapterCleared {
        /// Zero-based index of the cleared chapter.
        index: usize,
        /// Chapters cleared so far this session.
        cleared: u32,
    },
    /// The character lost and the session ends on this chapter.
    Retreated {
        /// Zero-based index of the chapter to retry.
        index: usize,
    },
    /// An achievement was unlocked outside combat.
    AchievementUnlocked(Achievement),
    /// The final chapter was cleared.
    CampaignCompleted,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The last chapter was cleared.
    Completed,
    /// The character lost a fight.
    Retreated,
    /// There was nothing left to play.
    AlreadyComplete,
}

/// Summary of one campaign session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// Character name.
    pub name: String,
    /// Chapter index when the session began.
    pub start_chapter: usize,
    /// Chapter index when the session ended.
    pub end_chapter: usize,
    /// Chapters cleared this session.
    pub cleared: u32,
    /// How the session ended.
    pub outcome: SessionOutcome,
}

/// Sequences chapters for one character at a time.
#[derive(Debug)]
pub struct Campaign<D> {
    dice: D,
}

impl<D: Dice> Campaign<D> {
    /// Create a controller drawing from `dice`.
    pub fn new(dice: D) -> Self {
        Self { dice }
    }

    /// Play one session for `character`.
    pub fn play(&mut self, character: &mut Character, input: &mut impl PlayerInput) -> SessionReport {
        let start_chapter = character.chapter();
        emit(
            input,
            CampaignEvent::Intro {
                name: character.name().to_string(),
                role: character.role(),
                text: character.role().intro_line(),
            },
        );

        if character.campaign_finished() {
            emit(input, CampaignEvent::AlreadyComplete);
            return self.report(character, start_chapter, 0, SessionOutcome::AlreadyComplete);
        }
        emit(
            input,
            if start_chapter == 0 {
                CampaignEvent::Started
            } else {
                CampaignEvent::Resumed {
                    chapter: start_chapter,
                }
            },
        );

        let mut cleared = 0;
        while let Some(chapter) = CHAPTERS.get(character.chapter()) {
            let index = character.chapter();
            emit(
                input,
                CampaignEvent::ChapterOpened {
                    index,
                    text: chapter.text,
                    enemy: chapter.enemy.name,
                },
            );
            if has_interlude(index) {
                self.interlude(character, input, index);
            }

            let enemy = Enemy::from_template(&chapter.enemy, character.role());
            let state = Encounter::new(character, enemy).run(input, &mut self.dice);
            if state != CombatState::Victory {
                emit(input, CampaignEvent::Retreated { index });
                return self.report(character, start_chapter, cleared, SessionOutcome::Retreated);
            }

            character.advance_chapter();
            cleared += 1;
            emit(input, CampaignEvent::ChapterCleared { index, cleared });
            if cleared >= SESSION_MILESTONE {
                grant(character, input, Achievement::ThreeChapters);
            }
        }

        grant(character, input, Achievement::CampaignComplete);
        emit(input, CampaignEvent::CampaignCompleted);
        self.report(character, start_chapter, cleared, SessionOutcome::Completed)
    }

    /// Play one full session per character, in roster order.
    pub fn play_all(&mut self, roster: &mut Roster, input: &mut impl PlayerInput) -> Vec<SessionReport> {
        roster
            .iter_mut()
            .map(|character| self.play(character, input))
            .collect()
    }

    fn interlude(&mut self, character: &mut Character, input: &mut impl PlayerInput, index: usize) {
        match input.choose_interlude(character, &CHAPTERS[index]) {
            Interlude::Proceed => {}
            Interlude::Rest => {
                let outcome = economy::rest(character, &mut self.dice);
                emit(input, CampaignEvent::Rested(outcome));
                if let Some(achievement) = outcome.unlocked {
                    emit(input, CampaignEvent::AchievementUnlocked(achievement));
                }
            }
            Interlude::Shop => {
                emit(
                    input,
                    CampaignEvent::ShopOpened {
                        credits: character.xp(),
                    },
                );
                while let Some(item) = input.choose_purchase(character, &Item::SHOP_STOCK) {
                    let result = economy::purchase(character, item);
                    emit(input, CampaignEvent::Purchased(result));
                    if let Purchase::Bought {
                        unlocked: Some(achievement),
                        ..
                    } = result
                    {
                        emit(input, CampaignEvent::AchievementUnlocked(achievement));
                    }
                }
            }
        }
    }

    fn report(
        &self,
        character: &Character,
        start_chapter: usize,
        cleared: u32,
        outcome: SessionOutcome,
    ) -> SessionReport {
        tracing::info!(
            character = %character.name(),
            start_chapter,
            end_chapter = character.chapter(),
            cleared,
            ?outcome,
            "session finished"
        );
        SessionReport {
            name: character.name().to_string(),
            start_chapter,
            end_chapter: character.chapter(),
            cleared,
            outcome,
        }
    }
}

fn emit(input: &mut impl PlayerInput, event: CampaignEvent) {
    input.observe(&GameEvent::Campaign(event));
}

fn grant(character: &mut Character, input: &mut impl PlayerInput, achievement: Achievement) {
    if character.grant(achievement) {
        emit(input, CampaignEvent::AchievementUnlocked(achievement));
    }
}
