use std::collections::BTreeSet;
use std::time::Instant;

use crate::config::EngineConfig;

use super::detection;
use super::report::aggregate;
use super::store::KnowledgeBase;
use super::types::{
    InteractionChecker, InteractionError, InteractionMatch, InteractionReport,
};

/// Default implementation of the interaction checker.
///
/// Wraps a built, immutable [`KnowledgeBase`]; every query is a pure read,
/// so one engine instance serves any number of concurrent callers.
pub struct DefaultInteractionEngine {
    kb: KnowledgeBase,
    config: EngineConfig,
}

impl DefaultInteractionEngine {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self::with_config(kb, EngineConfig::default())
    }

    pub fn with_config(kb: KnowledgeBase, config: EngineConfig) -> Self {
        Self { kb, config }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Bound the worst-case O(n²) pairing work. Counts distinct ids, since
    /// duplicates are collapsed before pairing anyway.
    fn enforce_selection_cap<S: AsRef<str>>(
        &self,
        selection: &[S],
    ) -> Result<(), InteractionError> {
        if let Some(max) = self.config.max_selection_size {
            let distinct = selection
                .iter()
                .map(|s| s.as_ref())
                .collect::<BTreeSet<_>>()
                .len();
            if distinct > max {
                return Err(InteractionError::SelectionTooLarge {
                    size: distinct,
                    max,
                });
            }
        }
        Ok(())
    }
}

impl InteractionChecker for DefaultInteractionEngine {
    fn check_pair(&self, drug_x: &str, drug_y: &str) -> Option<InteractionMatch> {
        let found = detection::check_pair(&self.kb, drug_x, drug_y);
        tracing::debug!(
            drug_x,
            drug_y,
            matched = found.is_some(),
            "Pair interaction check"
        );
        found
    }

    fn check_selection<S: AsRef<str>>(
        &self,
        selection: &[S],
    ) -> Result<InteractionReport, InteractionError> {
        self.enforce_selection_cap(selection)?;

        let start = Instant::now();
        let (matches, pairs_examined) = detection::check_all_pairs(&self.kb, selection);
        let processing_time_ms = start.elapsed().as_millis() as u64;

        let report = aggregate(matches, pairs_examined, processing_time_ms);

        tracing::info!(
            selection = selection.len(),
            pairs_examined = report.pairs_examined,
            matched = report.matches.len(),
            high = report.counts.high,
            processing_ms = report.processing_time_ms,
            "Selection interaction check complete"
        );

        Ok(report)
    }
}
