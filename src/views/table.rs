use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::archive::Archive;
use crate::models::{compare_epoch, format_for_display, generation_label, Person, PersonId, SortDirection};

/// Column the table projection can be sorted on.
///
/// Wire values are the attribute names the rendering surface puts in its
/// column headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    FirstName,
    LastName,
    Location,
    DateOfBirth,
    DateOfDeath,
    Generation,
}

impl SortColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Location => "location",
            Self::DateOfBirth => "dateOfBirth",
            Self::DateOfDeath => "dateOfDeath",
            Self::Generation => "generation",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "firstName" => Some(Self::FirstName),
            "lastName" => Some(Self::LastName),
            "location" => Some(Self::Location),
            "dateOfBirth" => Some(Self::DateOfBirth),
            "dateOfDeath" => Some(Self::DateOfDeath),
            "generation" => Some(Self::Generation),
            _ => None,
        }
    }
}

/// One row of the table view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub display_birth: String,
    pub display_death: String,
    pub generation_label: String,
}

impl From<&Person> for TableRow {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id,
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            location: person.location.clone(),
            display_birth: format_for_display(person.date_of_birth.as_deref()),
            display_death: format_for_display(person.date_of_death.as_deref()),
            generation_label: generation_label(person.generation),
        }
    }
}

/// Project the whole archive into sorted table rows.
///
/// The sort is stable: rows that compare equal keep their document order.
pub fn build_table(
    archive: &Archive,
    column: SortColumn,
    direction: SortDirection,
) -> Vec<TableRow> {
    let mut people: Vec<&Person> = archive.all().iter().collect();
    people.sort_by(|a, b| compare_by_column(a, b, column, direction));
    people.into_iter().map(TableRow::from).collect()
}

fn compare_by_column(
    a: &Person,
    b: &Person,
    column: SortColumn,
    direction: SortDirection,
) -> Ordering {
    match column {
        SortColumn::DateOfBirth => compare_epoch(
            a.date_of_birth.as_deref(),
            b.date_of_birth.as_deref(),
            direction,
        ),
        SortColumn::DateOfDeath => compare_epoch(
            a.date_of_death.as_deref(),
            b.date_of_death.as_deref(),
            direction,
        ),
        SortColumn::FirstName => directed(a.first_name.cmp(&b.first_name), direction),
        SortColumn::LastName => directed(a.last_name.cmp(&b.last_name), direction),
        SortColumn::Location => directed(a.location.cmp(&b.location), direction),
        SortColumn::Generation => directed(a.generation.cmp(&b.generation), direction),
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
