use crate::models::{BirthProfile, TrackedPerson, MAX_TRACKED_PEOPLE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// People store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read store file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write store file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed store file {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Person not found: {0}")]
    NotFound(String),

    #[error("Roster is full ({max} people)")]
    RosterFull { max: usize },

    #[error("A person named {0} already exists")]
    Duplicate(String),
}

/// Serialized document: people plus the ids included in comparison
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleDocument {
    pub people: Vec<TrackedPerson>,
    pub active: Vec<String>,
}

/// On-disk people roster
///
/// A single JSON document owned by the CLI layer; core computations receive
/// plain slices from [`PeopleStore::active_people`] and never touch storage.
#[derive(Debug)]
pub struct PeopleStore {
    path: PathBuf,
    doc: PeopleDocument,
}

impl PeopleStore {
    /// Default store location under the platform data directory
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vitalrs")
            .join("people.json")
    }

    /// Open a store, starting empty when the file does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let doc = match fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|source| StoreError::Malformed {
                    path: path.clone(),
                    source,
                })?
            }
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "people store missing, starting empty");
                PeopleDocument::default()
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.clone(),
                    source,
                })
            }
        };

        Ok(PeopleStore { path, doc })
    }

    /// Persist the current document
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        let contents = serde_json::to_string_pretty(&self.doc).map_err(|source| {
            StoreError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;

        fs::write(&self.path, contents).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn people(&self) -> &[TrackedPerson] {
        &self.doc.people
    }

    /// Find a person by id or (case-insensitive) name
    pub fn find(&self, key: &str) -> Option<&TrackedPerson> {
        self.doc
            .people
            .iter()
            .find(|p| p.id == key || p.name().eq_ignore_ascii_case(key))
    }

    /// Add a person, assigning id and the first unused palette color
    ///
    /// The roster cap is this layer's policy; the aggregator itself accepts
    /// any number of people.
    pub fn add(&mut self, profile: BirthProfile) -> Result<&TrackedPerson, StoreError> {
        if self.doc.people.len() >= MAX_TRACKED_PEOPLE {
            return Err(StoreError::RosterFull {
                max: MAX_TRACKED_PEOPLE,
            });
        }
        if self
            .doc
            .people
            .iter()
            .any(|p| p.name().eq_ignore_ascii_case(&profile.name))
        {
            return Err(StoreError::Duplicate(profile.name));
        }

        let person = TrackedPerson::new(profile, &self.doc.people);
        debug!(name = person.name(), id = %person.id, "adding person");
        self.doc.people.push(person);
        Ok(self.doc.people.last().expect("just pushed"))
    }

    /// Remove a person and drop them from the active set
    pub fn remove(&mut self, key: &str) -> Result<TrackedPerson, StoreError> {
        let index = self
            .doc
            .people
            .iter()
            .position(|p| p.id == key || p.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;

        let person = self.doc.people.remove(index);
        self.doc.active.retain(|id| *id != person.id);
        Ok(person)
    }

    /// Include or exclude a person from comparison
    pub fn set_active(&mut self, key: &str, active: bool) -> Result<(), StoreError> {
        let id = self
            .find(key)
            .map(|p| p.id.clone())
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;

        if active {
            if !self.doc.active.contains(&id) {
                self.doc.active.push(id);
            }
        } else {
            self.doc.active.retain(|existing| *existing != id);
        }
        Ok(())
    }

    /// Is this person currently part of the comparison?
    pub fn is_active(&self, person: &TrackedPerson) -> bool {
        self.doc.active.contains(&person.id)
    }

    /// Active people in roster order
    pub fn active_people(&self) -> Vec<TrackedPerson> {
        self.doc
            .people
            .iter()
            .filter(|p| self.doc.active.contains(&p.id))
            .cloned()
            .collect()
    }
}
