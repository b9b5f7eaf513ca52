//! Playable roles and their base statistics.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A playable role. [`Role::Vecino`] is the baseline used for unknown names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    /// Government operative: tanky, armoured.
    Gobierno,
    /// Cartel gunman: hardest hitter.
    Narco,
    /// Lookout: light and fragile.
    Puntero,
    /// Civilian caught in the crossfire.
    #[default]
    Vecino,
}

/// Static definition of a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleDefinition {
    /// Display name, also the persisted key.
    pub name: &'static str,
    /// Max HP at level 1.
    pub base_hp: i32,
    /// Attack damage range at level 1, inclusive.
    pub attack: (i32, i32),
    /// Passive damage reduction.
    pub defense: i32,
    /// Starting weapons, used for narration only.
    pub arsenal: &'static [&'static str],
    /// Opening narration.
    pub intro: &'static str,
    /// Role-specific line appended to the intro.
    pub flavor: &'static str,
    /// Enemy HP scaling for this role, in percent.
    pub enemy_hp_percent: i32,
}

const GOBIERNO: RoleDefinition = RoleDefinition {
    name: "Gobierno",
    base_hp: 120,
    attack: (14, 22),
    defense: 3,
    arsenal: &["Assault rifle", "Pistol"],
    intro: "You are part of an operation trying to hold the city together on a chaotic day.",
    flavor: "You coordinate with your unit over the radio and call for backup when you can.",
    enemy_hp_percent: 100,
};

const NARCO: RoleDefinition = RoleDefinition {
    name: "Narco",
    base_hp: 100,
    attack: (16, 24),
    defense: 1,
    arsenal: &["AK-47", "Pistol"],
    intro: "You are the armed wing of a faction out to take back its turf and its cargo.",
    flavor: "Your bosses want results and little attention; discretion is not always an option.",
    enemy_hp_percent: 105,
};

const PUNTERO: RoleDefinition = RoleDefinition {
    name: "Puntero",
    base_hp: 85,
    attack: (12, 18),
    defense: 0,
    arsenal: &["Pistol", "Radio"],
    intro: "You are a lookout: eyes and ears at the city gates, surviving however you can.",
    flavor: "You have eyes all over the city, but few resources if things go wrong.",
    enemy_hp_percent: 95,
};

const VECINO: RoleDefinition = RoleDefinition {
    name: "Vecino",
    base_hp: 80,
    attack: (10, 16),
    defense: 0,
    arsenal: &["Kitchen knife", "Rock"],
    intro: "You are a civilian caught in the crossfire; staying alive comes first, helping if you can.",
    flavor: "Your priority is to survive and help without drawing attention.",
    enemy_hp_percent: 90,
};

impl Role {
    /// All roles in menu order.
    pub const ALL: [Role; 4] = [Role::Gobierno, Role::Narco, Role::Puntero, Role::Vecino];

    /// The static definition for this role.
    pub fn definition(self) -> &'static RoleDefinition {
        match self {
            Self::Gobierno => &GOBIERNO,
            Self::Narco => &NARCO,
            Self::Puntero => &PUNTERO,
            Self::Vecino => &VECINO,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        self.definition().name
    }

    /// Parse a role name (case-insensitive).
    pub fn parse(s: &str) -> EngineResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EngineError::UnknownRole(s.to_string()))
    }

    /// Parse a role name, substituting the baseline role when unknown.
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|err| {
            tracing::warn!("{err}; using {}", Self::default().name());
            Self::default()
        })
    }

    /// Intro narration with the role-specific line appended.
    pub fn intro_line(self) -> String {
        let def = self.definition();
        format!("{} {}", def.intro, def.flavor)
    }

    /// Scale a base enemy HP value for this role (truncating).
    pub fn scale_enemy_hp(self, base: i32) -> i32 {
        base * self.definition().enemy_hp_percent / 100
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Role::parse("narco").unwrap(), Role::Narco);
        assert_eq!(Role::parse(" GOBIERNO ").unwrap(), Role::Gobierno);
    }

    #[test]
    fn unknown_role_errors_or_falls_back() {
        assert!(matches!(
            Role::parse("Pirata"),
            Err(EngineError::UnknownRole(name)) if name == "Pirata"
        ));
        assert_eq!(Role::parse_or_default("Pirata"), Role::Vecino);
    }

    #[test]
    fn enemy_scaling_truncates() {
        assert_eq!(Role::Vecino.scale_enemy_hp(60), 54);
        assert_eq!(Role::Puntero.scale_enemy_hp(85), 80);
        assert_eq!(Role::Narco.scale_enemy_hp(190), 199);
        assert_eq!(Role::Gobierno.scale_enemy_hp(95), 95);
    }

    #[test]
    fn vecino_baseline() {
        let def = Role::Vecino.definition();
        assert_eq!(def.base_hp, 80);
        assert_eq!(def.attack, (10, 16));
        assert_eq!(def.defense, 0);
    }
}
