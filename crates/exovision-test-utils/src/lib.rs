//! exovision-test-utils — Shared fixtures for workspace tests.
//!
//! The fixture catalog is the set of well-known planets the dashboard's mock
//! data source ships with, so pipeline tests and page tests agree on what
//! the data looks like.

use exovision_common::record::{Classification, Exoplanet, RawRecord};

/// Minimal display record with the given name and orbital period; everything
/// else zeroed/unknown. Handy for targeted sort/pagination assertions.
pub fn planet(name: &str, orbital_period: f64) -> Exoplanet {
    Exoplanet {
        id: format!("test-{name}"),
        name: name.to_string(),
        orbital_period,
        transit_duration: 0.0,
        planetary_radius: 0.0,
        stellar_radius: 0.0,
        effective_temperature: 0.0,
        discovery_year: 0,
        classification: Classification::Unknown,
        confidence: None,
    }
}

fn catalog_row(
    id: &str,
    name: &str,
    orbital_period: f64,
    transit_duration: f64,
    planetary_radius: f64,
    stellar_radius: f64,
    effective_temperature: f64,
    discovery_year: i32,
    classification: Classification,
    confidence: f64,
) -> Exoplanet {
    Exoplanet {
        id: id.to_string(),
        name: name.to_string(),
        orbital_period,
        transit_duration,
        planetary_radius,
        stellar_radius,
        effective_temperature,
        discovery_year,
        classification,
        confidence: Some(confidence),
    }
}

/// Five well-known planets, fully populated.
pub fn sample_catalog() -> Vec<Exoplanet> {
    vec![
        catalog_row("1", "Kepler-452b", 384.8, 2.5, 1.6, 1.05, 5757.0, 2015, Classification::Confirmed, 0.95),
        catalog_row("2", "TOI-715b", 19.3, 1.2, 1.55, 0.6, 3450.0, 2024, Classification::Candidate, 0.78),
        catalog_row("3", "K2-18b", 33.0, 2.1, 2.37, 0.41, 3457.0, 2015, Classification::Confirmed, 0.92),
        catalog_row("4", "TESS-1234b", 12.4, 0.8, 0.8, 0.9, 5200.0, 2021, Classification::FalsePositive, 0.65),
        catalog_row("5", "Kepler-1649c", 19.5, 1.1, 1.06, 0.23, 3240.0, 2020, Classification::Confirmed, 0.88),
    ]
}

/// The same catalog as the backend would emit it: raw, partial records under
/// NASA-archive key names, including one record with most fields missing.
pub fn raw_catalog() -> Vec<RawRecord> {
    serde_json::from_str(RAW_CATALOG_JSON).expect("fixture JSON is valid")
}

pub const RAW_CATALOG_JSON: &str = r#"[
    {"id": "1", "pl_name": "Kepler-452b", "pl_orbper": 384.8, "pl_trandur": 2.5, "pl_rade": 1.6,
     "st_rad": 1.05, "st_teff": 5757.0, "disc_year": 2015, "disposition": "Confirmed", "confidence": 0.95},
    {"id": "2", "pl_name": "TOI-715b", "pl_orbper": 19.3, "pl_trandur": 1.2, "pl_rade": 1.55,
     "st_rad": 0.6, "st_teff": 3450.0, "disc_year": 2024, "disposition": "Candidate", "confidence": 0.78},
    {"id": "3", "pl_name": "K2-18b", "pl_orbper": 33.0, "pl_trandur": 2.1, "pl_rade": 2.37,
     "st_rad": 0.41, "st_teff": 3457.0, "disc_year": 2015, "disposition": "Confirmed", "confidence": 0.92},
    {"pl_name": "TESS-1234b", "pl_orbper": 12.4, "disposition": "False Positive"},
    {}
]"#;
