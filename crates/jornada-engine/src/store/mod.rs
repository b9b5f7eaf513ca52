//! JSON persistence for the roster.
//!
//! [`SaveStore::load`] never fails: a missing, unreadable, or malformed
//! file yields an empty roster. [`SaveStore::save`] writes a complete
//! snapshot to a temporary file beside the target and renames it into
//! place, so an interrupted or failed write leaves the old file intact.

pub mod record;

pub use record::{CharacterRecord, SAVE_VERSION, SaveFile};

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use tempfile::NamedTempFile;

use crate::error::{EngineError, EngineResult};
use crate::roster::Roster;
use record::AnySave;

/// A roster save file on disk.
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    /// A store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the roster, falling back to an empty one on any failure.
    pub fn load(&self) -> Roster {
        match self.try_load() {
            Ok(roster) => roster,
            Err(EngineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no save file yet");
                Roster::new()
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "{err}; starting with an empty roster");
                Roster::new()
            }
        }
    }

    /// Load the roster, reporting why it could not be read.
    pub fn try_load(&self) -> EngineResult<Roster> {
        let text = std::fs::read_to_string(&self.path)?;
        let file = serde_json::from_str::<AnySave>(&text)?.into_file();
        if file.version > SAVE_VERSION {
            return Err(EngineError::UnsupportedVersion {
                found: file.version,
                supported: SAVE_VERSION,
            });
        }

        let characters: Vec<_> = file
            .characters
            .into_iter()
            .filter_map(CharacterRecord::into_character)
            .collect();
        tracing::info!(
            path = %self.path.display(),
            version = file.version,
            count = characters.len(),
            "roster loaded"
        );
        Ok(Roster::from(characters))
    }

    /// Write the whole roster atomically.
    pub fn save(&self, roster: &Roster) -> EngineResult<()> {
        let snapshot = SaveFile {
            version: SAVE_VERSION,
            saved_at: Some(Utc::now()),
            characters: roster.iter().map(CharacterRecord::from).collect(),
        };

        self.write_atomically(|out| {
            serde_json::to_writer_pretty(&mut *out, &snapshot)?;
            out.write_all(b"\n")?;
            Ok(())
        })?;

        tracing::info!(path = %self.path.display(), count = roster.len(), "roster saved");
        Ok(())
    }

    /// Fill a temporary file beside the target, then rename it over the
    /// target. If `fill` fails the temporary file is discarded.
    fn write_atomically(
        &self,
        fill: impl FnOnce(&mut NamedTempFile) -> EngineResult<()>,
    ) -> EngineResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        fill(&mut tmp)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|err| EngineError::Io(err.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Character;
    use crate::tables::{Achievement, Item, Role};
    use tempfile::tempdir;

    fn sample_roster() -> Roster {
        let mut roster = Roster::new();
        let mut ana = Character::new("Ana", Role::Gobierno);
        ana.gain_experience(260);
        ana.apply_damage(40);
        ana.add_item(Item::Vest, 1);
        ana.add_shield_charges(3);
        ana.advance_chapter();
        ana.grant(Achievement::FirstVictory);
        roster.add(ana);
        roster.add(Character::new("Beto", Role::Puntero));
        roster
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let dir = tempdir().unwrap();
        let store = SaveStore::new(dir.path().join("players.json"));
        let roster = sample_roster();
        store.save(&roster).unwrap();
        assert_eq!(store.try_load().unwrap(), roster);
    }

    #[test]
    fn saved_file_is_versioned() {
        let dir = tempdir().unwrap();
        let store = SaveStore::new(dir.path().join("players.json"));
        store.save(&sample_roster()).unwrap();
        let text = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["version"], 1);
        assert!(value["saved_at"].is_string());
        assert_eq!(value["characters"][0]["name"], "Ana");
        assert_eq!(value["characters"][0]["inventory"]["vest"], 1);
    }

    #[test]
    fn missing_or_corrupt_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = SaveStore::new(dir.path().join("players.json"));
        assert!(store.load().is_empty());
        assert!(matches!(store.try_load(), Err(EngineError::Io(_))));

        std::fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().is_empty());
        assert!(matches!(store.try_load(), Err(EngineError::Json(_))));
    }

    #[test]
    fn legacy_array_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("players.json");
        std::fs::write(
            &path,
            r#"[{"name": "Ana", "role": "Narco", "level": 2, "xp": 10}, {"role": "Vecino"}]"#,
        )
        .unwrap();
        let roster = SaveStore::new(path).load();
        assert_eq!(roster.len(), 1);
        let ana = roster.get(0).unwrap();
        assert_eq!(ana.role(), Role::Narco);
        assert_eq!(ana.hp_max(), 120);
        assert_eq!(ana.xp(), 10);
    }

    #[test]
    fn newer_version_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("players.json");
        std::fs::write(&path, r#"{"version": 9, "characters": []}"#).unwrap();
        let store = SaveStore::new(path);
        assert!(matches!(
            store.try_load(),
            Err(EngineError::UnsupportedVersion {
                found: 9,
                supported: 1
            })
        ));
        assert!(store.load().is_empty());
    }

    #[test]
    fn failed_save_leaves_no_partial_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("players.json");
        std::fs::create_dir(&target).unwrap();
        let store = SaveStore::new(&target);
        assert!(store.save(&sample_roster()).is_err());
        assert!(target.is_dir());
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn failed_write_keeps_existing_save() {
        let dir = tempdir().unwrap();
        let store = SaveStore::new(dir.path().join("players.json"));
        store.save(&sample_roster()).unwrap();
        let before = std::fs::read(store.path()).unwrap();

        let result = store.write_atomically(|out| {
            out.write_all(br#"{"version": 1, "charac"#)?;
            Err(EngineError::Io(io::Error::other("disk full")))
        });
        assert!(result.is_err());
        assert_eq!(std::fs::read(store.path()).unwrap(), before);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
        assert_eq!(store.try_load().unwrap(), sample_roster());
    }

    #[test]
    fn corrupt_numbers_load_without_panicking() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("players.json");
        std::fs::write(
            &path,
            r#"[{"name": "Ana", "level": 200000000}, {"name": "Beto", "xp": 4294967290, "hp": 0}]"#,
        )
        .unwrap();
        let mut roster = SaveStore::new(path).load();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(0).unwrap().level(), record::MAX_LOADED_LEVEL);
        let beto = roster.get_mut(1).unwrap();
        assert_eq!(beto.hp(), 40);
        beto.gain_experience(30);
        assert_eq!(beto.level(), 2);
    }

    #[test]
    fn save_replaces_existing_file_completely() {
        let dir = tempdir().unwrap();
        let store = SaveStore::new(dir.path().join("players.json"));
        store.save(&sample_roster()).unwrap();
        let mut smaller = sample_roster();
        smaller.remove(0).unwrap();
        store.save(&smaller).unwrap();
        assert_eq!(store.try_load().unwrap(), smaller);
    }
}
