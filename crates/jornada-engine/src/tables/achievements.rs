//! Achievement definitions.

use serde::{Deserialize, Serialize};

/// An idempotent milestone flag. Serialized as its snake_case id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    /// First combat victory.
    FirstVictory,
    /// Reached level 3.
    #[serde(rename = "level_3")]
    Level3,
    /// Held six or more items at once.
    Collector,
    /// Cleared three chapters in a single session.
    ThreeChapters,
    /// Defeated the final boss.
    BossDefeated,
    /// Cleared every chapter.
    CampaignComplete,
}

impl Achievement {
    /// All achievements.
    pub const ALL: [Achievement; 6] = [
        Achievement::FirstVictory,
        Achievement::Level3,
        Achievement::Collector,
        Achievement::ThreeChapters,
        Achievement::BossDefeated,
        Achievement::CampaignComplete,
    ];

    /// Persisted id.
    pub fn id(self) -> &'static str {
        match self {
            Self::FirstVictory => "first_victory",
            Self::Level3 => "level_3",
            Self::Collector => "collector",
            Self::ThreeChapters => "three_chapters",
            Self::BossDefeated => "boss_defeated",
            Self::CampaignComplete => "campaign_complete",
        }
    }

    /// Parse a persisted id.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == s.trim())
    }

    /// Description shown when unlocked.
    pub fn description(self) -> &'static str {
        match self {
            Self::FirstVictory => "Your first victory in combat.",
            Self::Level3 => "You reached level 3.",
            Self::Collector => "You gathered 6+ items in your inventory.",
            Self::ThreeChapters => "You cleared 3 chapters in a single push.",
            Self::BossDefeated => "You took down an enemy commander.",
            Self::CampaignComplete => "You made it through the whole day.",
        }
    }
}

impl std::fmt::Display for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
