use std::collections::BTreeSet;

use super::store::{KnowledgeBase, PairKey};
use super::types::InteractionMatch;

/// Check one unordered pair against the knowledge base.
///
/// Pure function of its inputs: no side effects, symmetric in its
/// arguments. The returned match carries the drugs in canonical order.
pub fn check_pair(
    kb: &KnowledgeBase,
    drug_x: &str,
    drug_y: &str,
) -> Option<InteractionMatch> {
    let key = PairKey::new(drug_x, drug_y)?;
    kb.lookup(drug_x, drug_y).map(|record| InteractionMatch {
        drug_a: key.lo().to_string(),
        drug_b: key.hi().to_string(),
        record: record.clone(),
    })
}

/// Check every unordered pair within a selection.
///
/// The selection is collapsed to distinct ids first (an id paired with
/// itself is meaningless and is never checked), then all `n*(n-1)/2` pairs
/// are enumerated. Returns the raw matches plus the number of pairs
/// examined; ordering of the matches is the aggregator's job.
///
/// Cost is O(n²) pair enumerations with an O(1) lookup each. Fine for
/// realistic selections (tens of drugs); a caller with much larger n
/// should prefilter rather than rely on this exhaustive enumeration.
pub fn check_all_pairs<S: AsRef<str>>(
    kb: &KnowledgeBase,
    selection: &[S],
) -> (Vec<InteractionMatch>, usize) {
    // BTreeSet both deduplicates and fixes the iteration order, so the
    // result is independent of how the caller ordered the selection.
    let distinct: BTreeSet<&str> = selection.iter().map(|s| s.as_ref()).collect();
    if distinct.len() < 2 {
        return (Vec::new(), 0);
    }

    let drugs: Vec<&str> = distinct.into_iter().collect();
    let pairs_examined = drugs.len() * (drugs.len() - 1) / 2;

    let mut matches = Vec::new();
    for i in 0..drugs.len() {
        for j in (i + 1)..drugs.len() {
            if let Some(found) = check_pair(kb, drugs[i], drugs[j]) {
                matches.push(found);
            }
        }
    }

    (matches, pairs_examined)
}
