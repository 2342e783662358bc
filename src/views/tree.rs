use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::archive::Archive;
use crate::models::{generation_label, Person, PersonId};

/// Render-ready model of the generational tree: generation rows from the
/// oldest generation present down to the current one, plus the logical
/// parent-child edges the rendering surface connects after layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeViewModel {
    pub generations: Vec<GenerationGroup>,
    pub edges: Vec<ConnectorEdge>,
}

/// One generation row. Generations with no members are omitted entirely,
/// so gaps in the numbering never produce empty rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationGroup {
    pub generation: u32,
    pub label: String,
    pub members: Vec<TreeCard>,
}

/// What a person card in the tree shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeCard {
    pub id: PersonId,
    pub name: String,
    pub lifespan: String,
    pub short_location: String,
}

impl From<&Person> for TreeCard {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id,
            name: person.full_name(),
            lifespan: person.lifespan(),
            short_location: person.short_location().to_string(),
        }
    }
}

/// A logical parent-child connection. Only pairs where the parent actually
/// exists in the archive become edges; dangling parent ids are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorEdge {
    pub child_id: PersonId,
    pub parent_id: PersonId,
}

/// Build the tree view-model.
///
/// Grouping is a single bucketing pass; within a generation, members order
/// by `(last name, first name)` independently of document order.
pub fn build_tree(archive: &Archive) -> TreeViewModel {
    // BTreeMap keeps generation numbers ordered, so the reversed walk
    // yields oldest ancestors first.
    let mut buckets: BTreeMap<u32, Vec<&Person>> = BTreeMap::new();
    for person in archive.all() {
        buckets.entry(person.generation).or_default().push(person);
    }

    let generations = buckets
        .into_iter()
        .rev()
        .map(|(generation, mut members)| {
            members.sort_by(|a, b| name_order(a, b));
            GenerationGroup {
                generation,
                label: generation_label(generation),
                members: members.into_iter().map(TreeCard::from).collect(),
            }
        })
        .collect();

    let edges = archive
        .all()
        .iter()
        .flat_map(|person| {
            person
                .parent_ids
                .iter()
                .filter(|&&parent_id| archive.find_by_id(parent_id).is_some())
                .map(|&parent_id| ConnectorEdge {
                    child_id: person.id,
                    parent_id,
                })
        })
        .collect();

    TreeViewModel { generations, edges }
}

// Deterministic name ordering: Unicode-lowercased comparison with the raw
// strings as tiebreak, so equal-ignoring-case names still order the same
// way on every run.
fn name_order(a: &Person, b: &Person) -> Ordering {
    a.last_name
        .to_lowercase()
        .cmp(&b.last_name.to_lowercase())
        .then_with(|| a.first_name.to_lowercase().cmp(&b.first_name.to_lowercase()))
        .then_with(|| a.last_name.cmp(&b.last_name))
        .then_with(|| a.first_name.cmp(&b.first_name))
}

/// Container-relative bounding box of an already-placed person card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardBounds {
    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

/// Bent connector between a parent's bottom-center and a child's
/// top-center: down to the midpoint between the two generation rows,
/// across, then down again.
///
/// Pure function of two placed boxes. The rendering surface calls this per
/// edge after layout settles and again whenever layout changes; whether the
/// four points become an SVG path or positioned line segments is its
/// choice.
pub fn connector_path(parent: &CardBounds, child: &CardBounds) -> [PathPoint; 4] {
    let start_x = parent.center_x();
    let start_y = parent.bottom();
    let end_x = child.center_x();
    let end_y = child.top;
    let mid_y = start_y + (end_y - start_y) / 2.0;

    [
        PathPoint { x: start_x, y: start_y },
        PathPoint { x: start_x, y: mid_y },
        PathPoint { x: end_x, y: mid_y },
        PathPoint { x: end_x, y: end_y },
    ]
}
