use std::cmp::Reverse;
use std::collections::HashSet;

use super::store::PairKey;
use super::types::{InteractionMatch, InteractionReport, Severity, SeverityCounts};

/// Sort key for a match: severity descending, evidence ascending with
/// unrated records last, then the canonical pair for full determinism.
fn ordering_key(m: &InteractionMatch) -> (Reverse<Severity>, u8, Option<PairKey>) {
    let evidence_rank = match m.record.evidence_level {
        Some(level) => level as u8,
        // Unrated evidence sorts after D.
        None => u8::MAX,
    };
    (
        Reverse(m.record.severity),
        evidence_rank,
        PairKey::new(&m.drug_a, &m.drug_b),
    )
}

/// Turn raw detection output into a stable, presentable report.
///
/// Deduplicates defensively by record id (the combinatorial checker already
/// collapses its input, so duplicates here indicate a caller feeding the
/// same match twice), orders deterministically, and computes the severity
/// summary after dedup.
pub fn aggregate(
    matches: Vec<InteractionMatch>,
    pairs_examined: usize,
    processing_time_ms: u64,
) -> InteractionReport {
    let mut seen: HashSet<String> = HashSet::with_capacity(matches.len());
    let mut deduped: Vec<InteractionMatch> = matches
        .into_iter()
        .filter(|m| seen.insert(m.record.id.clone()))
        .collect();

    deduped.sort_by(|a, b| ordering_key(a).cmp(&ordering_key(b)));

    let mut counts = SeverityCounts::default();
    for m in &deduped {
        counts.bump(m.record.severity);
    }

    InteractionReport {
        matches: deduped,
        counts,
        pairs_examined,
        processing_time_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{EvidenceLevel, InteractionRecord, Severity};

    fn a_match(
        id: &str,
        a: &str,
        b: &str,
        severity: Severity,
        evidence: Option<EvidenceLevel>,
    ) -> InteractionMatch {
        InteractionMatch {
            drug_a: a.to_string(),
            drug_b: b.to_string(),
            record: InteractionRecord {
                id: id.to_string(),
                drug_a: a.to_string(),
                drug_b: b.to_string(),
                severity,
                effect: "effect".into(),
                mechanism: None,
                management: None,
                evidence_level: evidence,
            },
        }
    }

    #[test]
    fn orders_by_severity_descending() {
        let report = aggregate(
            vec![
                a_match("ix-low", "a", "b", Severity::Low, None),
                a_match("ix-high", "c", "d", Severity::High, None),
                a_match("ix-mod", "e", "f", Severity::Moderate, None),
            ],
            3,
            0,
        );
        let ids: Vec<&str> = report.matches.iter().map(|m| m.record.id.as_str()).collect();
        assert_eq!(ids, vec!["ix-high", "ix-mod", "ix-low"]);
    }

    #[test]
    fn evidence_breaks_severity_ties_strongest_first() {
        let report = aggregate(
            vec![
                a_match("ix-d", "a", "b", Severity::High, Some(EvidenceLevel::D)),
                a_match("ix-none", "c", "d", Severity::High, None),
                a_match("ix-a", "e", "f", Severity::High, Some(EvidenceLevel::A)),
            ],
            3,
            0,
        );
        let ids: Vec<&str> = report.matches.iter().map(|m| m.record.id.as_str()).collect();
        // A before D, unrated last.
        assert_eq!(ids, vec!["ix-a", "ix-d", "ix-none"]);
    }

    #[test]
    fn pair_key_breaks_full_ties() {
        let report = aggregate(
            vec![
                a_match("ix-2", "c", "d", Severity::High, Some(EvidenceLevel::A)),
                a_match("ix-1", "a", "b", Severity::High, Some(EvidenceLevel::A)),
            ],
            2,
            0,
        );
        assert_eq!(report.matches[0].record.id, "ix-1");
        assert_eq!(report.matches[1].record.id, "ix-2");
    }

    #[test]
    fn deduplicates_by_record_id() {
        let report = aggregate(
            vec![
                a_match("ix-1", "a", "b", Severity::High, None),
                a_match("ix-1", "a", "b", Severity::High, None),
            ],
            1,
            0,
        );
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.counts.high, 1);
        assert_eq!(report.counts.total(), 1);
    }

    #[test]
    fn counts_computed_after_dedup() {
        let report = aggregate(
            vec![
                a_match("ix-1", "a", "b", Severity::High, None),
                a_match("ix-1", "a", "b", Severity::High, None),
                a_match("ix-2", "c", "d", Severity::Low, None),
            ],
            3,
            0,
        );
        assert_eq!(report.counts.high, 1);
        assert_eq!(report.counts.low, 1);
        assert_eq!(report.counts.total(), 2);
    }

    #[test]
    fn preserves_pairs_examined() {
        let report = aggregate(Vec::new(), 10, 0);
        assert_eq!(report.pairs_examined, 10);
        assert!(report.matches.is_empty());
    }
}
