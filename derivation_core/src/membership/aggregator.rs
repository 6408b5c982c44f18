//! Second pass: fill every cached list with the spells that use its behavior.

use magic_records::{RecordOrder, SourceCatalog, Spell};
use serde::Serialize;

use super::MembershipCache;

/// Counts from one aggregation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregationSummary {
    /// Winning spells examined.
    pub spells_scanned: usize,
    /// Spells newly added to a list.
    pub memberships_added: usize,
    /// Spells that matched a list they were already in.
    pub already_listed: usize,
}

/// Add each winning spell to the list of the first of its effects that has one.
///
/// Spells are scanned highest-priority layer first. Running the pass again adds nothing.
pub fn aggregate(catalog: &dyn SourceCatalog, cache: &mut MembershipCache) -> AggregationSummary {
    let mut summary = AggregationSummary::default();

    for spell in catalog.winning::<Spell>(RecordOrder::Priority) {
        summary.spells_scanned += 1;

        let key = spell
            .effects
            .iter()
            .filter_map(|effect| effect.base_effect.as_ref())
            .find(|base| cache.contains_key(base));

        let Some(list) = key.and_then(|key| cache.get_mut(key)) else {
            continue;
        };

        if list.add_unique(spell.id.clone()) {
            summary.memberships_added += 1;
        } else {
            summary.already_listed += 1;
        }
    }

    tracing::debug!(
        scanned = summary.spells_scanned,
        added = summary.memberships_added,
        "aggregation pass complete"
    );
    summary
}
