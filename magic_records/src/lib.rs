//! # Magic Records
//!
//! The record model crate - contains every record kind, mechanic enum, and the
//! layered source catalog the derivation pipelines read from.
//! This crate is the single source of truth for record data and does not contain any
//! derivation logic.

pub mod catalog;
pub mod mechanics;
pub mod records;

pub use catalog::*;
pub use mechanics::*;
pub use records::*;
