//! One-shot person repository.
//!
//! The archive is loaded exactly once — from a file, a JSON string, or a
//! pre-parsed record list — and is immutable afterwards. All lookups are by
//! id; relationship resolution is lenient by contract: a dangling id
//! resolves to nothing rather than an error, everywhere.

use std::collections::HashMap;
use std::path::Path;

use crate::models::{FamilyDocument, Person, PersonId};

/// Errors that can occur while building the archive.
///
/// These are construction-time failures only: once an [`Archive`] exists it
/// cannot fail. Content-level oddities (dangling relationship ids, missing
/// dates) are not errors anywhere in this crate.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("failed to read archive file: {0}")]
    Io(#[from] std::io::Error),
    #[error("archive document is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate person id {0}")]
    DuplicateId(PersonId),
}

/// In-memory person repository.
#[derive(Debug)]
pub struct Archive {
    people: Vec<Person>,
    by_id: HashMap<PersonId, usize>,
}

impl Archive {
    /// Build the archive from already-parsed records, indexing them by id.
    /// Fails only on a duplicate id, the one structural invariant the
    /// repository owns.
    pub fn from_records(people: Vec<Person>) -> Result<Self, ArchiveError> {
        let mut by_id = HashMap::with_capacity(people.len());
        for (index, person) in people.iter().enumerate() {
            if by_id.insert(person.id, index).is_some() {
                return Err(ArchiveError::DuplicateId(person.id));
            }
        }
        Ok(Self { people, by_id })
    }

    /// Parse a `{ "familyData": [...] }` document and build the archive.
    pub fn from_json_str(json: &str) -> Result<Self, ArchiveError> {
        let document: FamilyDocument = serde_json::from_str(json)?;
        Self::from_records(document.family_data)
    }

    /// Load the archive document from disk. The file is read exactly once;
    /// there is no reload path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArchiveError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn find_by_id(&self, id: PersonId) -> Option<&Person> {
        self.by_id.get(&id).map(|&index| &self.people[index])
    }

    /// Every person, in document order.
    pub fn all(&self) -> &[Person] {
        &self.people
    }

    /// Resolve a list of relationship ids, omitting any that reference
    /// nobody in the archive. Order of the survivors is preserved.
    pub fn resolve<'a>(&'a self, ids: &[PersonId]) -> Vec<&'a Person> {
        ids.iter().filter_map(|&id| self.find_by_id(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
