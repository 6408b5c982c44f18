//! # Derivation Core
//!
//! Turns the staves and scrolls of the participating layers into derived records: each
//! staff gets a channeling enchantment wired to template hooks, lens and gating perk,
//! and each scroll gets a free-cast amplifier gated on knowing its spell.
//!
//! ## Core Components
//!
//! - **classifier**: Maps a base effect onto one of the supported categories
//! - **templates**: Per-category template bundles from the template layer
//! - **synthesis**: Builds the staff and scroll record graphs
//! - **output**: The output set and the per-item drafts committed into it
//! - **membership**: Shared membership lists and the aggregation pass that fills them
//! - **pipeline**: Runs candidates through synthesis and collects reports
//! - **settings**: TOML run settings
//!
//! ## Guarantees
//!
//! - **Atomic**: A rejected item leaves nothing behind in the output
//! - **Deterministic**: The same load order always yields the same ids and names
//! - **Read-only sources**: Source records are never modified, only overridden

pub mod classifier;
pub mod diagnostics;
pub mod error;
pub mod known;
pub mod membership;
pub mod output;
pub mod pipeline;
pub mod settings;
pub mod synthesis;
pub mod templates;

#[cfg(test)]
mod fixtures;

pub use diagnostics::{Diagnostic, Diagnostics, Level};
pub use error::{Stage, SynthesisError};
pub use output::OutputSet;
pub use pipeline::{derive, run_pipeline, Derivation, PipelineReport};
pub use settings::Settings;
