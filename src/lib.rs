//! Lineage: a genealogical archive served as render-ready view-models.
//!
//! The archive is a small, static set of people loaded once at startup.
//! Everything downstream of the load is a pure projection: a sortable
//! table, a generational tree with logical parent-child edges, a
//! chronological timeline, and a per-person detail view. The HTTP layer in
//! [`api`] hands those projections to whatever rendering surface asks for
//! them.

pub mod api;
pub mod archive;
pub mod models;
pub mod views;
