//! Synthesis errors and the pipeline stages they are raised in.

use magic_records::RecordId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diagnostics::Level;

/// Steps of the staff and scroll pipelines, used to locate diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    // Shared
    Commit,
    Aggregate,

    // Staff graph
    Container,
    Classify,
    Behavior,
    HookAbility,
    HookEffect,
    ScriptSlots,
    Lens,
    GatingPerk,
    PerkConditions,

    // Scroll graph
    BaseEffect,
    SpellMatch,
    Amplifier,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Commit => "commit",
            Stage::Aggregate => "aggregate",
            Stage::Container => "container",
            Stage::Classify => "classify",
            Stage::Behavior => "behavior",
            Stage::HookAbility => "hook-ability",
            Stage::HookEffect => "hook-effect",
            Stage::ScriptSlots => "script-slots",
            Stage::Lens => "lens",
            Stage::GatingPerk => "gating-perk",
            Stage::PerkConditions => "perk-conditions",
            Stage::BaseEffect => "base-effect",
            Stage::SpellMatch => "spell-match",
            Stage::Amplifier => "amplifier",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons an item is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthesisError {
    /// A required reference could not be resolved.
    #[error("[{stage}] failed to resolve {what} {reference} on {record}")]
    ResolutionFailure {
        stage: Stage,
        what: &'static str,
        record: RecordId,
        reference: String,
    },

    /// A record exists but lacks an expected slot, entry, or shape.
    #[error("[{stage}] {record}: {detail}")]
    ShapeMismatch {
        stage: Stage,
        record: RecordId,
        detail: String,
    },

    /// No category rule matched the behavior record.
    #[error("[{stage}] no category matches {effect}", stage = Stage::Classify)]
    ClassificationMiss { effect: RecordId },

    /// The paired spell search was exhausted.
    #[error("[{stage}] no spell pairs with base effect {base_effect}", stage = Stage::SpellMatch)]
    MatchNotFound { base_effect: RecordId },
}

impl SynthesisError {
    /// A reference on `record` that did not resolve; `reference` is the link as stored.
    pub fn unresolved(
        stage: Stage,
        what: &'static str,
        record: &RecordId,
        reference: Option<&RecordId>,
    ) -> Self {
        SynthesisError::ResolutionFailure {
            stage,
            what,
            record: record.clone(),
            reference: reference
                .map(|id| id.to_string())
                .unwrap_or_else(|| "<none>".to_string()),
        }
    }

    pub fn shape(stage: Stage, record: &RecordId, detail: impl Into<String>) -> Self {
        SynthesisError::ShapeMismatch {
            stage,
            record: record.clone(),
            detail: detail.into(),
        }
    }

    /// The stage the error was raised in.
    pub fn stage(&self) -> Stage {
        match self {
            SynthesisError::ResolutionFailure { stage, .. } => *stage,
            SynthesisError::ShapeMismatch { stage, .. } => *stage,
            SynthesisError::ClassificationMiss { .. } => Stage::Classify,
            SynthesisError::MatchNotFound { .. } => Stage::SpellMatch,
        }
    }

    /// Severity the rejection is reported at.
    pub fn level(&self) -> Level {
        match self {
            SynthesisError::MatchNotFound { .. } => Level::Warn,
            _ => Level::Error,
        }
    }
}

/// A non-fatal disagreement found while synthesizing an item.
#[derive(Debug, Clone, PartialEq)]
pub struct SoftMismatch {
    pub stage: Stage,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_message() {
        let err = SynthesisError::unresolved(
            Stage::HookAbility,
            "equip ability",
            &RecordId::new("Patch.esp", 0x801),
            None,
        );
        assert_eq!(
            err.to_string(),
            "[hook-ability] failed to resolve equip ability <none> on 000801:Patch.esp"
        );
        assert_eq!(err.stage(), Stage::HookAbility);
        assert_eq!(err.level(), Level::Error);
    }

    #[test]
    fn test_match_not_found_is_warning() {
        let err = SynthesisError::MatchNotFound {
            base_effect: RecordId::new("Skyrim.esm", 0x12E4F),
        };
        assert_eq!(err.level(), Level::Warn);
        assert_eq!(err.stage(), Stage::SpellMatch);
        assert!(err.to_string().starts_with("[spell-match]"));
    }

    #[test]
    fn test_classification_miss_stage() {
        let err = SynthesisError::ClassificationMiss {
            effect: RecordId::new("Skyrim.esm", 0x1),
        };
        assert_eq!(err.stage(), Stage::Classify);
        assert_eq!(err.level(), Level::Error);
    }
}
