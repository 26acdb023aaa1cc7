//! Drug-drug interaction detection engine.
//!
//! Given a catalog of known pairwise interactions, answers two questions:
//! do these two drugs interact, and which pairs within a selection of
//! drugs interact — aggregated into a deduplicated, severity-ranked
//! report. The knowledge base is validated and indexed once at build time
//! and is immutable afterward, so queries are pure reads that can be
//! served concurrently without locking.
//!
//! ```
//! use rxcheck::{DefaultInteractionEngine, DrugCatalog, InteractionChecker, KnowledgeBase};
//!
//! let catalog = DrugCatalog::load_test();
//! let kb = KnowledgeBase::build(catalog.interactions).unwrap();
//! let engine = DefaultInteractionEngine::new(kb);
//!
//! assert!(engine.check_pair("aspirin", "warfarin").is_some());
//!
//! let report = engine
//!     .check_selection(&["aspirin", "warfarin", "metformin"])
//!     .unwrap();
//! assert_eq!(report.pairs_examined, 3);
//! assert_eq!(report.matches.len(), 1);
//! ```
//!
//! Absence of a recorded interaction is not proof of safety — consumers
//! must present "no known interaction" with that caveat.

pub mod catalog;
pub mod config;
pub mod engine;

pub use catalog::{CatalogMetadata, Drug, DrugCatalog};
pub use config::{EngineConfig, DEFAULT_MAX_SELECTION};
pub use engine::{
    DefaultInteractionEngine, EvidenceLevel, InteractionChecker, InteractionError,
    InteractionMatch, InteractionRecord, InteractionReport, KnowledgeBase, PairKey,
    Severity, SeverityCounts,
};
