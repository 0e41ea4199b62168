//! Catalog sorting.
//!
//! The comparator is selected by matching the `SortField` enum, so each
//! column's comparison is fixed at compile time: text columns compare
//! case-insensitively, numeric columns by value. A comparison that cannot be
//! decided (NaN, absent confidence) resolves to `Equal`, and the underlying
//! sort is stable, so such records keep their input order.

use std::cmp::Ordering;

use exovision_common::record::Exoplanet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    OrbitalPeriod,
    TransitDuration,
    PlanetaryRadius,
    StellarRadius,
    EffectiveTemperature,
    DiscoveryYear,
    Classification,
    Confidence,
}

impl SortField {
    /// Resolve an untrusted key string (query parameter). Unknown keys return
    /// `None`; callers treat that as a no-op ordering.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "name"                  => Some(SortField::Name),
            "orbital_period"        => Some(SortField::OrbitalPeriod),
            "transit_duration"      => Some(SortField::TransitDuration),
            "planetary_radius"      => Some(SortField::PlanetaryRadius),
            "stellar_radius"        => Some(SortField::StellarRadius),
            "effective_temperature" => Some(SortField::EffectiveTemperature),
            "discovery_year"        => Some(SortField::DiscoveryYear),
            "classification"        => Some(SortField::Classification),
            "confidence"            => Some(SortField::Confidence),
            _                       => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name                 => "name",
            SortField::OrbitalPeriod        => "orbital_period",
            SortField::TransitDuration      => "transit_duration",
            SortField::PlanetaryRadius      => "planetary_radius",
            SortField::StellarRadius        => "stellar_radius",
            SortField::EffectiveTemperature => "effective_temperature",
            SortField::DiscoveryYear        => "discovery_year",
            SortField::Classification       => "classification",
            SortField::Confidence           => "confidence",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" | "ascending"   => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _                     => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending  => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending  => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// The single active (field, direction) pair driving the sorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Name,
            direction: SortDirection::Ascending,
        }
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn cmp_num(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn compare(a: &Exoplanet, b: &Exoplanet, field: SortField) -> Ordering {
    match field {
        SortField::Name                 => cmp_text(&a.name, &b.name),
        SortField::Classification       => cmp_text(a.classification.as_str(), b.classification.as_str()),
        SortField::OrbitalPeriod        => cmp_num(a.orbital_period, b.orbital_period),
        SortField::TransitDuration      => cmp_num(a.transit_duration, b.transit_duration),
        SortField::PlanetaryRadius      => cmp_num(a.planetary_radius, b.planetary_radius),
        SortField::StellarRadius        => cmp_num(a.stellar_radius, b.stellar_radius),
        SortField::EffectiveTemperature => cmp_num(a.effective_temperature, b.effective_temperature),
        SortField::DiscoveryYear        => a.discovery_year.cmp(&b.discovery_year),
        // Absent confidence compares equal to everything.
        SortField::Confidence           => match (a.confidence, b.confidence) {
            (Some(x), Some(y)) => cmp_num(x, y),
            _                  => Ordering::Equal,
        },
    }
}

/// Sort records in place. Stable: records comparing equal keep their input
/// order, which also makes sorting idempotent.
pub fn sort_records(records: &mut [Exoplanet], spec: SortSpec) {
    records.sort_by(|a, b| {
        let ord = compare(a, b, spec.field);
        match spec.direction {
            SortDirection::Ascending  => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

/// Sort by an untrusted key string. An unknown key leaves the order
/// untouched (no-op ordering).
pub fn sort_records_by_key(records: &mut [Exoplanet], key: &str, direction: SortDirection) {
    if let Some(field) = SortField::parse(key) {
        sort_records(records, SortSpec { field, direction });
    }
}
