use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::types::{InteractionError, InteractionRecord};

/// A drug in the catalog. Matching is by `id`; the display name exists for
/// the consuming UI only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Drug {
    pub id: String,
    pub display_name: String,
}

/// Provenance of a catalog release.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogMetadata {
    pub version: String,
    pub published: NaiveDate,
}

/// The external interaction catalog: the drug list and interaction records
/// the knowledge base is built from.
///
/// The engine never fetches or refreshes this data itself; whatever loads
/// the catalog (bundled file, database, remote service) hands it over once
/// and the knowledge base is built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugCatalog {
    pub metadata: CatalogMetadata,
    pub drugs: Vec<Drug>,
    pub interactions: Vec<InteractionRecord>,
}

impl DrugCatalog {
    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, InteractionError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            InteractionError::CatalogLoad(path.display().to_string(), e.to_string())
        })?;
        serde_json::from_str(&json).map_err(|e| {
            InteractionError::CatalogParse(path.display().to_string(), e.to_string())
        })
    }

    /// Whether a drug id exists in the catalog.
    ///
    /// The engine itself treats unknown ids as "no match"; callers that
    /// want to tell "unknown drug" apart from "known drug, no interaction"
    /// run this check before querying.
    pub fn contains_drug(&self, id: &str) -> bool {
        self.drugs.iter().any(|d| d.id == id)
    }

    /// Ids from a selection that the catalog does not know about.
    pub fn unknown_ids<'a>(&self, selection: &'a [String]) -> Vec<&'a str> {
        selection
            .iter()
            .map(String::as_str)
            .filter(|id| !self.contains_drug(id))
            .collect()
    }

    /// In-memory catalog for tests (no file I/O).
    pub fn load_test() -> Self {
        use crate::engine::types::{EvidenceLevel, Severity};

        fn drug(id: &str, name: &str) -> Drug {
            Drug {
                id: id.into(),
                display_name: name.into(),
            }
        }

        Self {
            metadata: CatalogMetadata {
                version: "2026.02".into(),
                published: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            },
            drugs: vec![
                drug("aspirin", "Aspirin"),
                drug("warfarin", "Warfarin"),
                drug("amlodipine", "Amlodipine"),
                drug("grapefruit-juice", "Grapefruit juice"),
                drug("metformin", "Metformin"),
                drug("simvastatin", "Simvastatin"),
                drug("clarithromycin", "Clarithromycin"),
            ],
            interactions: vec![
                InteractionRecord {
                    id: "ix-asp-war".into(),
                    drug_a: "aspirin".into(),
                    drug_b: "warfarin".into(),
                    severity: Severity::High,
                    effect: "Markedly increased bleeding risk".into(),
                    mechanism: Some(
                        "Additive platelet inhibition and anticoagulation".into(),
                    ),
                    management: Some(
                        "Avoid combination; monitor INR closely if unavoidable".into(),
                    ),
                    evidence_level: Some(EvidenceLevel::A),
                },
                InteractionRecord {
                    id: "ix-aml-gfj".into(),
                    drug_a: "amlodipine".into(),
                    drug_b: "grapefruit-juice".into(),
                    severity: Severity::Low,
                    effect: "Modestly increased amlodipine exposure".into(),
                    mechanism: Some("Intestinal CYP3A4 inhibition".into()),
                    management: None,
                    evidence_level: Some(EvidenceLevel::C),
                },
                InteractionRecord {
                    id: "ix-sim-cla".into(),
                    drug_a: "simvastatin".into(),
                    drug_b: "clarithromycin".into(),
                    severity: Severity::High,
                    effect: "Greatly increased statin exposure; myopathy risk".into(),
                    mechanism: Some("Strong CYP3A4 inhibition".into()),
                    management: Some("Suspend simvastatin during the course".into()),
                    evidence_level: Some(EvidenceLevel::B),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::engine::KnowledgeBase;

    #[test]
    fn test_catalog_builds_knowledge_base() {
        let catalog = DrugCatalog::load_test();
        let kb = KnowledgeBase::build(catalog.interactions.clone()).unwrap();
        assert_eq!(kb.len(), 3);
        assert!(kb.lookup("warfarin", "aspirin").is_some());
    }

    #[test]
    fn contains_drug_by_id() {
        let catalog = DrugCatalog::load_test();
        assert!(catalog.contains_drug("aspirin"));
        assert!(!catalog.contains_drug("Aspirin")); // ids, not display names
        assert!(!catalog.contains_drug("unknown"));
    }

    #[test]
    fn unknown_ids_filters_selection() {
        let catalog = DrugCatalog::load_test();
        let selection = vec![
            "aspirin".to_string(),
            "mystery-drug".to_string(),
            "warfarin".to_string(),
        ];
        assert_eq!(catalog.unknown_ids(&selection), vec!["mystery-drug"]);
    }

    #[test]
    fn load_round_trips_through_json_file() {
        let catalog = DrugCatalog::load_test();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string_pretty(&catalog).unwrap().as_bytes())
            .unwrap();

        let loaded = DrugCatalog::load(file.path()).unwrap();
        assert_eq!(loaded.metadata.version, "2026.02");
        assert_eq!(loaded.drugs.len(), catalog.drugs.len());
        assert_eq!(loaded.interactions, catalog.interactions);
    }

    #[test]
    fn load_missing_file_is_load_error() {
        let result = DrugCatalog::load(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(
            result.unwrap_err(),
            InteractionError::CatalogLoad(..)
        ));
    }

    #[test]
    fn load_malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let result = DrugCatalog::load(file.path());
        assert!(matches!(
            result.unwrap_err(),
            InteractionError::CatalogParse(..)
        ));
    }
}
