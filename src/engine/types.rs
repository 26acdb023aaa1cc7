use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Clinical severity of a known interaction.
///
/// Declaration order drives `Ord`: `Low < Moderate < High`. Reports sort
/// severity descending, so `High` interactions surface first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Minor effect, usually no intervention needed.
    Low,
    /// Clinically relevant, monitoring recommended.
    Moderate,
    /// Serious effect, combination usually avoided.
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }

    /// Localized display label for the given language tag.
    /// The engine itself never renders these; they exist so callers do not
    /// re-invent the source vocabulary.
    pub fn label(&self, lang: &str) -> &'static str {
        match lang {
            "zh" => match self {
                Self::Low => "轻度",
                Self::Moderate => "中度",
                Self::High => "严重",
            },
            _ => match self {
                Self::Low => "Low",
                Self::Moderate => "Moderate",
                Self::High => "High",
            },
        }
    }
}

// ---------------------------------------------------------------------------
// EvidenceLevel
// ---------------------------------------------------------------------------

/// Strength of the evidence behind an interaction record.
///
/// `A` is the strongest. Declaration order drives `Ord`, so ascending sort
/// puts the best-supported records first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EvidenceLevel {
    A,
    B,
    C,
    D,
}

impl EvidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

// ---------------------------------------------------------------------------
// InteractionRecord
// ---------------------------------------------------------------------------

/// A knowledge-base fact: two distinct drugs are known to interact.
///
/// The `(drug_a, drug_b)` pair is unordered — a record for (A, B) is the
/// same fact as one for (B, A). The knowledge base enforces `drug_a !=
/// drug_b` and at most one record per unordered pair at build time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionRecord {
    /// Unique record identifier, assigned by the catalog.
    pub id: String,
    pub drug_a: String,
    pub drug_b: String,
    pub severity: Severity,
    /// Clinical effect of combining the two drugs.
    pub effect: String,
    /// Pharmacological mechanism, when documented.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanism: Option<String>,
    /// Suggested management of the combination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub management: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_level: Option<EvidenceLevel>,
}

// ---------------------------------------------------------------------------
// InteractionMatch
// ---------------------------------------------------------------------------

/// One detected interaction: the record plus the concrete pair that
/// triggered it, with the drugs in canonical (sorted) order so a match is
/// identical regardless of how the caller ordered its arguments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionMatch {
    pub drug_a: String,
    pub drug_b: String,
    pub record: InteractionRecord,
}

impl InteractionMatch {
    pub fn severity(&self) -> Severity {
        self.record.severity
    }
}

// ---------------------------------------------------------------------------
// SeverityCounts & InteractionReport
// ---------------------------------------------------------------------------

/// Match counts per severity tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub low: usize,
    pub moderate: usize,
    pub high: usize,
}

impl SeverityCounts {
    pub fn total(&self) -> usize {
        self.low + self.moderate + self.high
    }

    pub fn bump(&mut self, severity: Severity) {
        match severity {
            Severity::Low => self.low += 1,
            Severity::Moderate => self.moderate += 1,
            Severity::High => self.high += 1,
        }
    }
}

/// Aggregated result of checking a drug selection.
///
/// `matches` is deduplicated and deterministically ordered: severity
/// descending, then evidence level ascending (strongest first, unrated
/// last), then the canonical drug pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionReport {
    pub matches: Vec<InteractionMatch>,
    pub counts: SeverityCounts,
    /// `n*(n-1)/2` for the deduplicated selection of size n — the "found K
    /// interactions among M pairs" figure for callers.
    pub pairs_examined: usize,
    pub processing_time_ms: u64,
}

impl InteractionReport {
    /// Empty report for selections with fewer than two distinct drugs.
    pub fn empty() -> Self {
        Self {
            matches: Vec::new(),
            counts: SeverityCounts::default(),
            pairs_examined: 0,
            processing_time_ms: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// InteractionError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum InteractionError {
    /// Two catalog records describe the same unordered drug pair. The
    /// catalog must resolve which one is authoritative; the engine never
    /// silently picks.
    #[error("Records {first} and {second} describe the same drug pair")]
    DuplicateRecord { first: String, second: String },

    #[error("Record {0} pairs a drug with itself")]
    SelfPair(String),

    #[error("Selection of {size} drugs exceeds the configured maximum of {max}")]
    SelectionTooLarge { size: usize, max: usize },

    #[error("Catalog load failed ({0}): {1}")]
    CatalogLoad(String, String),

    #[error("Catalog parse failed ({0}): {1}")]
    CatalogParse(String, String),
}

// ---------------------------------------------------------------------------
// InteractionChecker trait
// ---------------------------------------------------------------------------

/// The public query surface.
///
/// Both operations are pure reads over an immutable knowledge base and are
/// safe to call concurrently.
pub trait InteractionChecker {
    /// Check a single unordered pair. `None` means "no recorded
    /// interaction" — which is not proof of safety, only absence of a
    /// record. Self-pairs and unknown ids yield `None`, never an error.
    fn check_pair(&self, drug_x: &str, drug_y: &str) -> Option<InteractionMatch>;

    /// Check every unordered pair within a selection and aggregate the
    /// results. Duplicate ids in the selection are collapsed before
    /// pairing; fewer than two distinct ids yields an empty report.
    fn check_selection<S: AsRef<str>>(
        &self,
        selection: &[S],
    ) -> Result<InteractionReport, InteractionError>;
}
