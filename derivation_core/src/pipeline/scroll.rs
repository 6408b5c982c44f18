//! Scroll pipeline: every fire-and-forget scroll from a participating layer is paired with
//! its spell and turned into a free-cast amplifier.

use magic_records::{CastType, RecordOrder, Scroll, SourceCatalog};

use super::{ParticipatingLayers, Pipeline};
use crate::error::{SoftMismatch, SynthesisError};
use crate::output::Draft;
use crate::synthesis::{synthesize_scroll, ScrollGraph};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollPipeline;

impl Pipeline for ScrollPipeline {
    const NAME: &'static str = "scrolls";
    const ITEM: &'static str = "scroll";

    type Item = Scroll;
    type Graph = ScrollGraph;

    fn candidates<'c>(
        &self,
        catalog: &'c dyn SourceCatalog,
        layers: &ParticipatingLayers,
    ) -> Vec<&'c Scroll> {
        catalog
            .winning::<Scroll>(RecordOrder::Listed)
            .into_iter()
            .filter(|scroll| scroll.cast_type == CastType::FireAndForget)
            .filter(|scroll| layers.includes_origin_of(catalog, &scroll.id))
            .collect()
    }

    fn synthesize(&self, draft: &mut Draft<'_>, scroll: &Scroll) -> Result<ScrollGraph, SynthesisError> {
        let graph = synthesize_scroll(draft, scroll)?;
        tracing::debug!(
            scroll = %graph.scroll,
            spell = %graph.spell,
            charges = graph.charges,
            "scroll graph built"
        );
        Ok(graph)
    }

    fn soft_mismatches<'g>(&self, graph: &'g ScrollGraph) -> &'g [SoftMismatch] {
        &graph.soft_mismatches
    }
}
