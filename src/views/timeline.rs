use serde::{Deserialize, Serialize};

use crate::archive::Archive;
use crate::models::{
    compare_epoch, extract_display_year, format_for_display, generation_label, Person, PersonId,
    SortDirection,
};

/// One entry on the chronological timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: PersonId,
    /// Year label next to the entry, e.g. `"19 BBY"`, or `"Unknown"`.
    pub display_year: String,
    pub first_name: String,
    pub last_name: String,
    pub display_birth: String,
    pub display_death: String,
    /// Full location string; the timeline card shows all of it, unlike the
    /// tree card.
    pub location: String,
    pub generation_label: String,
}

impl From<&Person> for TimelineEntry {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id,
            display_year: extract_display_year(person.date_of_birth.as_deref()),
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            display_birth: format_for_display(person.date_of_birth.as_deref()),
            display_death: format_for_display(person.date_of_death.as_deref()),
            location: person.location.clone(),
            generation_label: generation_label(person.generation),
        }
    }
}

/// Project the archive into birth order, oldest first. Entries without a
/// usable birth date sort to the end; the sort is stable.
pub fn build_timeline(archive: &Archive) -> Vec<TimelineEntry> {
    let mut people: Vec<&Person> = archive.all().iter().collect();
    people.sort_by(|a, b| {
        compare_epoch(
            a.date_of_birth.as_deref(),
            b.date_of_birth.as_deref(),
            SortDirection::Ascending,
        )
    });
    people.into_iter().map(TimelineEntry::from).collect()
}
