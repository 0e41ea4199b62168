//! Field normalization: partial raw records in, fully-populated display
//! records out.
//!
//! Normalization is total by design. Upstream payloads are routinely
//! incomplete and must never block rendering, so every missing field gets an
//! explicit default instead of surfacing as an error.

use exovision_common::record::{Classification, Exoplanet, RawRecord};

/// Map one raw record to a display record. `index` is the record's position
/// in the source payload and is used only for fallback identifiers and names.
///
/// Defaults: `id` → `"exoplanet-<index>"`, `name` → `"Exoplanet <index+1>"`,
/// numeric fields → 0, classification → `Unknown`. A missing confidence is
/// kept absent; the UI renders it as "—" rather than a fabricated value.
pub fn display_record(raw: &RawRecord, index: usize) -> Exoplanet {
    Exoplanet {
        id: raw
            .id
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("exoplanet-{index}")),
        name: raw
            .name
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("Exoplanet {}", index + 1)),
        orbital_period: raw.orbital_period.unwrap_or(0.0),
        transit_duration: raw.transit_duration.unwrap_or(0.0),
        planetary_radius: raw.planetary_radius.unwrap_or(0.0),
        stellar_radius: raw.stellar_radius.unwrap_or(0.0),
        effective_temperature: raw.effective_temperature.unwrap_or(0.0),
        discovery_year: raw.discovery_year.unwrap_or(0),
        classification: raw
            .classification
            .as_deref()
            .map(Classification::parse)
            .unwrap_or(Classification::Unknown),
        confidence: raw.confidence,
    }
}

/// Normalize a whole payload, assigning positional indices in input order.
pub fn catalog(raws: &[RawRecord]) -> Vec<Exoplanet> {
    raws.iter()
        .enumerate()
        .map(|(index, raw)| display_record(raw, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_gets_all_defaults() {
        let record = display_record(&RawRecord::default(), 3);
        assert_eq!(record.id, "exoplanet-3");
        assert_eq!(record.name, "Exoplanet 4");
        assert_eq!(record.orbital_period, 0.0);
        assert_eq!(record.transit_duration, 0.0);
        assert_eq!(record.planetary_radius, 0.0);
        assert_eq!(record.stellar_radius, 0.0);
        assert_eq!(record.effective_temperature, 0.0);
        assert_eq!(record.discovery_year, 0);
        assert_eq!(record.classification, Classification::Unknown);
        assert_eq!(record.confidence, None);
    }

    #[test]
    fn test_present_fields_pass_through() {
        let raw = RawRecord {
            id: Some("koi-7016".to_string()),
            name: Some("Kepler-452b".to_string()),
            orbital_period: Some(384.8),
            classification: Some("Confirmed".to_string()),
            confidence: Some(0.95),
            ..RawRecord::default()
        };
        let record = display_record(&raw, 0);
        assert_eq!(record.id, "koi-7016");
        assert_eq!(record.name, "Kepler-452b");
        assert_eq!(record.orbital_period, 384.8);
        assert_eq!(record.classification, Classification::Confirmed);
        assert_eq!(record.confidence, Some(0.95));
    }

    #[test]
    fn test_empty_strings_treated_as_absent() {
        let raw = RawRecord {
            id: Some(String::new()),
            name: Some(String::new()),
            ..RawRecord::default()
        };
        let record = display_record(&raw, 0);
        assert_eq!(record.id, "exoplanet-0");
        assert_eq!(record.name, "Exoplanet 1");
    }

    #[test]
    fn test_catalog_indices_follow_input_order() {
        let raws = vec![RawRecord::default(), RawRecord::default(), RawRecord::default()];
        let records = catalog(&raws);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, "exoplanet-0");
        assert_eq!(records[2].id, "exoplanet-2");
        assert_eq!(records[2].name, "Exoplanet 3");
    }

    #[test]
    fn test_renormalizing_is_pure() {
        let raw = RawRecord {
            name: Some("TOI-715b".to_string()),
            ..RawRecord::default()
        };
        assert_eq!(display_record(&raw, 7), display_record(&raw, 7));
    }
}
