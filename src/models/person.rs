use serde::{Deserialize, Serialize};

use super::era;

/// Stable identifier for a person in the archive.
///
/// Opaque to every consumer: used only for lookup and equality, never
/// interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u32);

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One member of the family archive.
///
/// Records are loaded once from the family document and never mutated.
/// Relationship lists hold ids that may dangle; consumers resolve them
/// through the archive and silently omit the misses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    /// Free text, e.g. `"Mos Espa, Tatooine"`. Cards show only the part
    /// before the first comma.
    pub location: String,
    /// Era-date string; `None` means unknown.
    pub date_of_birth: Option<String>,
    /// Era-date string; `None` means still living.
    pub date_of_death: Option<String>,
    /// Grouping key for the tree view. 1 is the most recent generation,
    /// larger numbers are earlier ancestors. Gaps are allowed.
    pub generation: u32,
    pub parent_ids: Vec<PersonId>,
    pub sibling_ids: Vec<PersonId>,
    pub children_ids: Vec<PersonId>,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The part of `location` before the first comma.
    pub fn short_location(&self) -> &str {
        match self.location.split_once(',') {
            Some((head, _)) => head,
            None => &self.location,
        }
    }

    /// `"19 BBY - 4 ABY"`, with `"Present"` standing in for a missing death
    /// date.
    pub fn lifespan(&self) -> String {
        let birth = era::format_for_display(self.date_of_birth.as_deref());
        match &self.date_of_death {
            Some(death) => format!("{} - {}", birth, death),
            None => format!("{} - Present", birth),
        }
    }
}

/// Top-level wire shape of the archive document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyDocument {
    #[serde(rename = "familyData")]
    pub family_data: Vec<Person>,
}

/// Human-readable name for a generation number.
///
/// Total over all inputs: numbers without a named tier fall back to
/// `"Generation {n}"` rather than failing.
pub fn generation_label(generation: u32) -> String {
    match generation {
        1 => "Current Generation".to_string(),
        2 => "Parents".to_string(),
        3 => "Grandparents".to_string(),
        4 => "Great-grandparents".to_string(),
        n => format!("Generation {}", n),
    }
}
