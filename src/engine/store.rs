use std::collections::HashMap;

use super::types::{InteractionError, InteractionRecord};

// ---------------------------------------------------------------------------
// PairKey
// ---------------------------------------------------------------------------

/// Canonical key for an unordered drug pair: the two ids sorted, so
/// `(A, B)` and `(B, A)` produce the same key. Doubles as the final
/// tie-break in report ordering, which is why it carries `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    lo: String,
    hi: String,
}

impl PairKey {
    /// Build the canonical key. `None` for a self-pair — no drug interacts
    /// with itself in this model, so a self-pair can never be a key.
    pub fn new(drug_x: &str, drug_y: &str) -> Option<Self> {
        if drug_x == drug_y {
            return None;
        }
        let (lo, hi) = if drug_x < drug_y {
            (drug_x, drug_y)
        } else {
            (drug_y, drug_x)
        };
        Some(Self {
            lo: lo.to_string(),
            hi: hi.to_string(),
        })
    }

    pub fn lo(&self) -> &str {
        &self.lo
    }

    pub fn hi(&self) -> &str {
        &self.hi
    }
}

// ---------------------------------------------------------------------------
// KnowledgeBase
// ---------------------------------------------------------------------------

/// Immutable interaction knowledge base.
///
/// Built once from catalog records, validated at build time, then read-only:
/// lookups are O(1) average via the canonical-pair index, and the instance
/// may be shared freely across threads. Updates go through [`extended`],
/// which produces a fresh validated instance rather than mutating this one.
///
/// [`extended`]: KnowledgeBase::extended
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    index: HashMap<PairKey, InteractionRecord>,
}

impl KnowledgeBase {
    /// Validate and index a set of interaction records.
    ///
    /// Fails fast on malformed input so queries never have to: a record
    /// pairing a drug with itself is `SelfPair`, and two records covering
    /// the same unordered pair are `DuplicateRecord` (the catalog must
    /// decide which is authoritative — the engine never merges silently).
    pub fn build(records: Vec<InteractionRecord>) -> Result<Self, InteractionError> {
        let mut index: HashMap<PairKey, InteractionRecord> =
            HashMap::with_capacity(records.len());

        for record in records {
            let key = PairKey::new(&record.drug_a, &record.drug_b)
                .ok_or_else(|| InteractionError::SelfPair(record.id.clone()))?;

            if let Some(existing) = index.get(&key) {
                return Err(InteractionError::DuplicateRecord {
                    first: existing.id.clone(),
                    second: record.id,
                });
            }
            index.insert(key, record);
        }

        tracing::debug!(records = index.len(), "Interaction knowledge base built");
        Ok(Self { index })
    }

    /// Order-independent pair lookup.
    ///
    /// `None` for self-pairs and for pairs with no record. Unknown drug ids
    /// are not an error here — they simply match nothing; callers that need
    /// to distinguish "unknown drug" validate against the catalog first.
    pub fn lookup(&self, drug_x: &str, drug_y: &str) -> Option<&InteractionRecord> {
        let key = PairKey::new(drug_x, drug_y)?;
        self.index.get(&key)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Copy-on-write update: a new knowledge base containing this one's
    /// records plus `additional`, re-validated as a whole. The shared
    /// instance is never touched, so in-flight queries cannot observe a
    /// half-updated index.
    pub fn extended(
        &self,
        additional: Vec<InteractionRecord>,
    ) -> Result<Self, InteractionError> {
        let mut records: Vec<InteractionRecord> = self.index.values().cloned().collect();
        records.extend(additional);
        Self::build(records)
    }
}
