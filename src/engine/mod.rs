pub mod detection;
pub mod engine;
pub mod report;
pub mod store;
pub mod types;

pub use engine::DefaultInteractionEngine;
pub use store::{KnowledgeBase, PairKey};
pub use types::{
    EvidenceLevel, InteractionChecker, InteractionError, InteractionMatch,
    InteractionRecord, InteractionReport, Severity, SeverityCounts,
};
