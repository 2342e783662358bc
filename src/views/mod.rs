//! Pure view-model builders.
//!
//! Each builder projects the archive into a render-ready structure and has
//! no side effects: same archive in, deep-equal view-model out, every time.
//! The builders depend only on the archive and the era codec — never on
//! each other, and never on the rendering surface that consumes them.
//!
//! - [`build_table`]: sorted row projection for the table view.
//! - [`build_tree`]: generation groups plus logical parent-child edges for
//!   the tree view, with the shared connector geometry helper.
//! - [`build_timeline`]: chronological projection for the timeline view.
//! - [`build_detail`]: one person with resolved relationship lists, backing
//!   the detail overlay.
//! - [`ViewState`]: the interaction state of the surface as an explicit
//!   value with pure transitions.

mod detail;
mod state;
mod table;
mod timeline;
mod tree;

pub use detail::*;
pub use state::*;
pub use table::*;
pub use timeline::*;
pub use tree::*;
