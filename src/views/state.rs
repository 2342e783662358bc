use crate::models::SortDirection;

use super::SortColumn;

/// Which of the three interchangeable views is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Table,
    Tree,
    Timeline,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Tree => "tree",
            Self::Timeline => "timeline",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "table" => Some(Self::Table),
            "tree" => Some(Self::Tree),
            "timeline" => Some(Self::Timeline),
            _ => None,
        }
    }
}

/// Interaction state of the rendering surface, modeled as an explicit
/// value: every transition consumes the current state and returns the next
/// one, so the table, tree, and timeline subsystems share nothing mutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub active: ViewKind,
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
    /// Whether the tree view has been built at least once. The surface
    /// builds it lazily the first time it becomes visible.
    pub tree_initialized: bool,
    pub timeline_initialized: bool,
}

impl Default for ViewState {
    /// Startup state: table view, sorted by first name ascending, neither
    /// lazy view built yet.
    fn default() -> Self {
        Self {
            active: ViewKind::Table,
            sort_column: SortColumn::FirstName,
            sort_direction: SortDirection::Ascending,
            tree_initialized: false,
            timeline_initialized: false,
        }
    }
}

impl ViewState {
    /// Switch the active view, recording the first time the tree or
    /// timeline becomes visible.
    #[must_use]
    pub fn switch_to(self, view: ViewKind) -> Self {
        Self {
            active: view,
            tree_initialized: self.tree_initialized || view == ViewKind::Tree,
            timeline_initialized: self.timeline_initialized || view == ViewKind::Timeline,
            ..self
        }
    }

    /// Header-click rule: clicking the current sort column flips the
    /// direction, clicking a new column sorts it ascending.
    #[must_use]
    pub fn toggle_sort(self, column: SortColumn) -> Self {
        if column == self.sort_column {
            Self {
                sort_direction: self.sort_direction.flipped(),
                ..self
            }
        } else {
            Self {
                sort_column: column,
                sort_direction: SortDirection::Ascending,
                ..self
            }
        }
    }
}
