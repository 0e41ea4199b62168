/// Core record types for the exoplanet catalog.
/// Raw records mirror the backend payload; display records are what the
/// dashboard renders after normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Classification label
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Confirmed,
    Candidate,
    #[serde(rename = "False Positive")]
    FalsePositive,
    Unknown,
}

impl Classification {
    /// Parse a backend label string. The ML backend and older dataset dumps
    /// disagree on spelling ("Confirmed" vs "Confirmed Exoplanet" vs the
    /// archive codes), so parsing is permissive; anything unrecognized maps
    /// to `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "CONFIRMED" | "CONFIRMED EXOPLANET" | "CP" | "KP" => Classification::Confirmed,
            "CANDIDATE" | "PC" | "APC"                        => Classification::Candidate,
            "FALSE POSITIVE" | "FALSE_POSITIVE" | "FP"        => Classification::FalsePositive,
            _                                                 => Classification::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Confirmed     => "Confirmed",
            Classification::Candidate     => "Candidate",
            Classification::FalsePositive => "False Positive",
            Classification::Unknown       => "Unknown",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Raw record (wire format)
// ---------------------------------------------------------------------------

/// A single observation as the backend emits it. Every field is optional:
/// the API mixes NASA-archive column names (`pl_name`, `pl_orbper`, ...) with
/// the flat training-feature names (`orbital_period`, `label`, ...) depending
/// on which endpoint produced the row, and rows are routinely incomplete.
/// The aliases absorb both key sets; unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "pl_name")]
    pub name: Option<String>,
    #[serde(default, alias = "pl_orbper")]
    pub orbital_period: Option<f64>,
    #[serde(default, alias = "pl_trandur")]
    pub transit_duration: Option<f64>,
    #[serde(default, alias = "pl_rade", alias = "planet_radius")]
    pub planetary_radius: Option<f64>,
    #[serde(default, alias = "st_rad")]
    pub stellar_radius: Option<f64>,
    #[serde(default, alias = "st_teff", alias = "stellar_temp")]
    pub effective_temperature: Option<f64>,
    #[serde(default, alias = "disc_year")]
    pub discovery_year: Option<i32>,
    #[serde(default, alias = "disposition", alias = "label")]
    pub classification: Option<String>,
    #[serde(default, alias = "prob_exoplanet")]
    pub confidence: Option<f64>,
}

// ---------------------------------------------------------------------------
// Display record
// ---------------------------------------------------------------------------

/// A fully-populated catalog entry ready for rendering. Produced from a
/// `RawRecord` by the pipeline's normalizer; never constructed with missing
/// fields. Confidence is the one deliberate exception: an absent upstream
/// confidence stays absent rather than being invented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exoplanet {
    pub id: String,
    pub name: String,
    /// Days.
    pub orbital_period: f64,
    /// Hours.
    pub transit_duration: f64,
    /// Earth radii.
    pub planetary_radius: f64,
    /// Solar radii.
    pub stellar_radius: f64,
    /// Kelvin.
    pub effective_temperature: f64,
    pub discovery_year: i32,
    pub classification: Classification,
    pub confidence: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_parse_variants() {
        assert_eq!(Classification::parse("Confirmed"), Classification::Confirmed);
        assert_eq!(Classification::parse("Confirmed Exoplanet"), Classification::Confirmed);
        assert_eq!(Classification::parse("CONFIRMED"), Classification::Confirmed);
        assert_eq!(Classification::parse("false positive"), Classification::FalsePositive);
        assert_eq!(Classification::parse("PC"), Classification::Candidate);
        assert_eq!(Classification::parse("???"), Classification::Unknown);
        assert_eq!(Classification::parse(""), Classification::Unknown);
    }

    #[test]
    fn test_raw_record_archive_keys() {
        let json = r#"{
            "pl_name": "Kepler-452b",
            "pl_orbper": 384.8,
            "pl_trandur": 2.5,
            "pl_rade": 1.6,
            "st_rad": 1.05,
            "st_teff": 5757.0,
            "disposition": "Confirmed",
            "disc_year": 2015
        }"#;
        let raw: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(raw.name.as_deref(), Some("Kepler-452b"));
        assert_eq!(raw.orbital_period, Some(384.8));
        assert_eq!(raw.effective_temperature, Some(5757.0));
        assert_eq!(raw.discovery_year, Some(2015));
        assert_eq!(raw.classification.as_deref(), Some("Confirmed"));
    }

    #[test]
    fn test_raw_record_training_keys() {
        let json = r#"{
            "orbital_period": 42.0,
            "transit_duration": 0.1,
            "planet_radius": 0.8,
            "stellar_temp": 5000.0,
            "stellar_radius": 0.9,
            "label": "Candidate",
            "prob_exoplanet": 0.61
        }"#;
        let raw: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(raw.orbital_period, Some(42.0));
        assert_eq!(raw.planetary_radius, Some(0.8));
        assert_eq!(raw.effective_temperature, Some(5000.0));
        assert_eq!(raw.classification.as_deref(), Some("Candidate"));
        assert_eq!(raw.confidence, Some(0.61));
    }

    #[test]
    fn test_raw_record_empty_object() {
        let raw: RawRecord = serde_json::from_str("{}").unwrap();
        assert!(raw.id.is_none());
        assert!(raw.name.is_none());
        assert!(raw.confidence.is_none());
    }

    #[test]
    fn test_raw_record_ignores_unknown_keys() {
        let json = r#"{"pl_name": "X", "hostname": "Y", "sy_snum": 1}"#;
        let raw: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(raw.name.as_deref(), Some("X"));
    }
}
