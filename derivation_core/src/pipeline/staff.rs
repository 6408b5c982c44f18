//! Staff pipeline: every staff from a participating layer gets a derived graph, then
//! the shared membership lists are filled from the winning spells.

use magic_records::{RecordOrder, SourceCatalog, Weapon};

use super::{ParticipatingLayers, Pipeline, PipelineReport};
use crate::error::{Stage, SynthesisError};
use crate::known::skyrim;
use crate::membership::{aggregate, MembershipCache};
use crate::output::Draft;
use crate::synthesis::{synthesize_staff, StaffGraph};

#[derive(Debug, Clone, Copy, Default)]
pub struct StaffPipeline;

impl Pipeline for StaffPipeline {
    const NAME: &'static str = "staves";
    const ITEM: &'static str = "staff";

    type Item = Weapon;
    type Graph = StaffGraph;

    fn candidates<'c>(
        &self,
        catalog: &'c dyn SourceCatalog,
        layers: &ParticipatingLayers,
    ) -> Vec<&'c Weapon> {
        let staff_keyword = skyrim::WEAP_TYPE_STAFF.id();
        catalog
            .winning::<Weapon>(RecordOrder::Listed)
            .into_iter()
            .filter(|weapon| weapon.has_keyword(&staff_keyword))
            .filter(|weapon| layers.includes_origin_of(catalog, &weapon.id))
            .collect()
    }

    fn synthesize(&self, draft: &mut Draft<'_>, staff: &Weapon) -> Result<StaffGraph, SynthesisError> {
        let graph = synthesize_staff(draft, staff)?;
        tracing::debug!(staff = %graph.staff, category = %graph.category, "staff graph built");
        Ok(graph)
    }

    fn finish(
        &self,
        catalog: &dyn SourceCatalog,
        cache: &mut MembershipCache,
        report: &mut PipelineReport,
    ) {
        let summary = aggregate(catalog, cache);
        tracing::info!(
            pipeline = Self::NAME,
            stage = %Stage::Aggregate,
            lists = cache.len(),
            added = summary.memberships_added,
            "membership lists filled"
        );
        report.aggregation = Some(summary);
    }
}
