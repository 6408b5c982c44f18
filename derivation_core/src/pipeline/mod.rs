//! Pipelines - filter candidates, synthesize each one into a draft, commit the drafts
//! that succeed, then run whatever pass needs every item done.

mod scroll;
mod staff;

pub use scroll::*;
pub use staff::*;

use std::collections::HashSet;

use magic_records::{LayerId, RecordData, RecordId, SourceCatalog};
use serde::Serialize;

use crate::diagnostics::Diagnostics;
use crate::error::{SoftMismatch, Stage, SynthesisError};
use crate::membership::{AggregationSummary, MembershipCache};
use crate::output::{Draft, OutputSet};
use crate::settings::Settings;

/// Layers whose records are eligible for derivation.
#[derive(Debug, Clone, Default)]
pub struct ParticipatingLayers {
    layers: HashSet<LayerId>,
}

impl ParticipatingLayers {
    pub fn new<S: Into<String>>(layers: impl IntoIterator<Item = S>) -> Self {
        layers.into_iter().map(LayerId::new).collect()
    }

    pub fn contains(&self, layer: &LayerId) -> bool {
        self.layers.contains(layer)
    }

    /// Check if the layer that first defined a record participates.
    pub fn includes_origin_of(&self, catalog: &dyn SourceCatalog, id: &RecordId) -> bool {
        catalog
            .origin_layer(id)
            .is_some_and(|origin| self.contains(origin))
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl FromIterator<LayerId> for ParticipatingLayers {
    fn from_iter<I: IntoIterator<Item = LayerId>>(iter: I) -> Self {
        Self {
            layers: iter.into_iter().collect(),
        }
    }
}

/// One derivation pipeline: which items it takes and how it builds their graphs.
pub trait Pipeline {
    /// Name used in logs and reports.
    const NAME: &'static str;

    /// What a single item is called in the per-item log line.
    const ITEM: &'static str;

    type Item: RecordData;
    type Graph;

    /// Items to process, in a stable order.
    fn candidates<'c>(
        &self,
        catalog: &'c dyn SourceCatalog,
        layers: &ParticipatingLayers,
    ) -> Vec<&'c Self::Item>;

    fn synthesize(
        &self,
        draft: &mut Draft<'_>,
        item: &Self::Item,
    ) -> Result<Self::Graph, SynthesisError>;

    /// Non-fatal findings recorded while building a graph.
    fn soft_mismatches<'g>(&self, _graph: &'g Self::Graph) -> &'g [SoftMismatch] {
        &[]
    }

    /// Runs once after every item has been processed.
    fn finish(
        &self,
        _catalog: &dyn SourceCatalog,
        _cache: &mut MembershipCache,
        _report: &mut PipelineReport,
    ) {
    }
}

/// What happened to one item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemOutcome {
    pub item: RecordId,
    pub editor_id: Option<String>,
    pub success: bool,
    /// Stage the item was rejected at.
    pub rejected_at: Option<Stage>,
}

/// Summary of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub pipeline: &'static str,
    pub outcomes: Vec<ItemOutcome>,
    pub diagnostics: Diagnostics,
    pub aggregation: Option<AggregationSummary>,
}

impl PipelineReport {
    pub fn new(pipeline: &'static str) -> Self {
        Self {
            pipeline,
            outcomes: Vec::new(),
            diagnostics: Diagnostics::new(),
            aggregation: None,
        }
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn outcome(&self, item: &RecordId) -> Option<&ItemOutcome> {
        self.outcomes.iter().find(|o| &o.item == item)
    }
}

/// Run a pipeline over the catalog, committing successful items into `output`.
pub fn run_pipeline<P: Pipeline>(
    pipeline: &P,
    catalog: &dyn SourceCatalog,
    layers: &ParticipatingLayers,
    output: &mut OutputSet,
) -> PipelineReport {
    let mut report = PipelineReport::new(P::NAME);
    let mut cache = MembershipCache::new();

    let candidates = pipeline.candidates(catalog, layers);
    tracing::info!(pipeline = P::NAME, candidates = candidates.len(), "pipeline started");

    for item in candidates {
        let id = item.id();
        let mut draft = Draft::new(catalog, output, &cache);

        let rejected_at = match pipeline.synthesize(&mut draft, item) {
            Ok(graph) => {
                for mismatch in pipeline.soft_mismatches(&graph) {
                    report.diagnostics.warn(id, mismatch.stage, mismatch.message.clone());
                }
                let staged = draft.finish();
                cache.absorb(output.commit(staged));
                None
            }
            Err(err) => {
                report
                    .diagnostics
                    .record(err.level(), id, err.stage(), err.to_string());
                Some(err.stage())
            }
        };

        let success = rejected_at.is_none();
        report.diagnostics.info(
            id,
            Stage::Commit,
            format!(
                "Patching {}: {} - success: {}",
                P::ITEM,
                describe(item),
                success
            ),
        );
        report.outcomes.push(ItemOutcome {
            item: id.clone(),
            editor_id: item.editor_id().map(str::to_string),
            success,
            rejected_at,
        });
    }

    pipeline.finish(catalog, &mut cache, &mut report);
    output.extend_lists(cache.into_lists());

    tracing::info!(
        pipeline = P::NAME,
        succeeded = report.succeeded(),
        failed = report.failed(),
        "pipeline finished"
    );
    report
}

fn describe<T: RecordData>(item: &T) -> String {
    match item.editor_id() {
        Some(editor_id) => format!("{} <{}>", editor_id, item.id()),
        None => format!("<{}>", item.id()),
    }
}

/// Everything one run produced.
#[derive(Debug, Clone, Serialize)]
pub struct Derivation {
    pub output: OutputSet,
    pub reports: Vec<PipelineReport>,
}

/// Run the enabled pipelines, staves first, into a fresh output set.
pub fn derive(catalog: &dyn SourceCatalog, settings: &Settings) -> Derivation {
    let layers = ParticipatingLayers::new(settings.participating_layers.iter().cloned());
    let mut output = OutputSet::new(settings.output_layer.clone());
    let mut reports = Vec::new();

    if settings.pipelines.staves {
        reports.push(run_pipeline(&StaffPipeline, catalog, &layers, &mut output));
    }
    if settings.pipelines.scrolls {
        reports.push(run_pipeline(&ScrollPipeline, catalog, &layers, &mut output));
    }

    Derivation { output, reports }
}
