use serde::{Deserialize, Serialize};

use crate::archive::Archive;
use crate::models::{format_for_display, generation_label, PersonId};

/// A resolved relationship entry: enough for the overlay to show a name and
/// navigate to that person on click.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedPerson {
    pub id: PersonId,
    pub name: String,
}

/// Everything the detail overlay shows for one person.
///
/// Each relationship list holds only ids that resolved; an empty list means
/// the overlay hides that section entirely. The field is always present, so
/// "empty" is unambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetail {
    pub id: PersonId,
    pub name: String,
    pub location: String,
    pub display_birth: String,
    pub display_death: String,
    pub generation_label: String,
    pub parents: Vec<RelatedPerson>,
    pub siblings: Vec<RelatedPerson>,
    pub children: Vec<RelatedPerson>,
}

/// Build the detail view-model for one person, or `None` when the id is
/// unknown.
pub fn build_detail(archive: &Archive, id: PersonId) -> Option<PersonDetail> {
    let person = archive.find_by_id(id)?;

    let related = |ids: &[PersonId]| -> Vec<RelatedPerson> {
        archive
            .resolve(ids)
            .into_iter()
            .map(|person| RelatedPerson {
                id: person.id,
                name: person.full_name(),
            })
            .collect()
    };

    Some(PersonDetail {
        id: person.id,
        name: person.full_name(),
        location: person.location.clone(),
        display_birth: format_for_display(person.date_of_birth.as_deref()),
        display_death: format_for_display(person.date_of_death.as_deref()),
        generation_label: generation_label(person.generation),
        parents: related(&person.parent_ids),
        siblings: related(&person.sibling_ids),
        children: related(&person.children_ids),
    })
}
