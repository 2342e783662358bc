//! Domain models for the lineage archive.
//!
//! # Core Concepts
//!
//! - [`Person`]: one member of the archive, loaded once from the family
//!   document and never mutated. Relationship lists hold ids that may
//!   dangle (reference nobody in the archive); every consumer resolves them
//!   leniently and omits the misses.
//! - Era dates: birth and death markers use the dual-epoch `"<N> BBY"` /
//!   `"<N> ABY"` notation. The codec maps the notation onto a single signed
//!   timeline for ordering and produces the display fallbacks (`"N/A"`,
//!   `"Unknown"`) for missing values.

mod era;
mod person;

pub use era::*;
pub use person::*;
