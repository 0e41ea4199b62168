//! Pairwise Pearson correlation over the catalog's numeric features.
//!
//! The matrix is square and symmetric by construction (only the upper
//! triangle is computed, then mirrored), the diagonal is pinned to exactly
//! 1.0 without evaluating the formula, and a zero-variance feature or an
//! empty dataset yields coefficient 0.0 instead of NaN so the result is
//! always renderable.

use exovision_common::record::Exoplanet;
use serde::{Deserialize, Serialize};

/// Numeric features the correlation view can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    OrbitalPeriod,
    TransitDuration,
    PlanetaryRadius,
    StellarRadius,
    EffectiveTemperature,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::OrbitalPeriod,
        Feature::TransitDuration,
        Feature::PlanetaryRadius,
        Feature::StellarRadius,
        Feature::EffectiveTemperature,
    ];

    /// Extract this feature from a display record. Normalized records always
    /// carry a value, so there is no absent case left to default here.
    pub fn value(&self, record: &Exoplanet) -> f64 {
        match self {
            Feature::OrbitalPeriod        => record.orbital_period,
            Feature::TransitDuration      => record.transit_duration,
            Feature::PlanetaryRadius      => record.planetary_radius,
            Feature::StellarRadius        => record.stellar_radius,
            Feature::EffectiveTemperature => record.effective_temperature,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Feature::OrbitalPeriod        => "Orbital Period",
            Feature::TransitDuration      => "Transit Duration",
            Feature::PlanetaryRadius      => "Planetary Radius",
            Feature::StellarRadius        => "Stellar Radius",
            Feature::EffectiveTemperature => "Effective Temperature",
        }
    }
}

/// Pearson product-moment correlation coefficient in sum form:
/// r = (n·ΣXY − ΣX·ΣY) / sqrt((n·ΣX² − (ΣX)²)·(n·ΣY² − (ΣY)²)).
/// Zero variance in either input, or an empty input, yields 0.0. The result
/// is clamped into [-1, 1] so the bound also holds under floating-point
/// rounding.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let len = xs.len().min(ys.len());
    if len == 0 {
        return 0.0;
    }
    let n = len as f64;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_y2 = 0.0;
    for i in 0..len {
        let (x, y) = (xs[i], ys[i]);
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
        sum_y2 += y * y;
    }

    let var_x = n * sum_x2 - sum_x * sum_x;
    let var_y = n * sum_y2 - sum_y * sum_y;
    if var_x <= 0.0 || var_y <= 0.0 {
        return 0.0;
    }

    let r = (n * sum_xy - sum_x * sum_y) / (var_x * var_y).sqrt();
    r.clamp(-1.0, 1.0)
}

/// Symmetric feature-pair coefficient table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    features: Vec<Feature>,
    /// Row-major, `features.len() × features.len()`.
    values: Vec<f64>,
}

impl CorrelationMatrix {
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Matrix dimension (number of features).
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.len() && col < self.len() {
            self.values.get(row * self.len() + col).copied()
        } else {
            None
        }
    }

    /// Coefficient at (row, col); 0.0 for an out-of-range index, keeping the
    /// accessor total.
    pub fn coefficient(&self, row: usize, col: usize) -> f64 {
        self.get(row, col).unwrap_or(0.0)
    }
}

/// Compute the correlation matrix for `features` over `records`.
pub fn matrix(records: &[Exoplanet], features: &[Feature]) -> CorrelationMatrix {
    let k = features.len();
    let mut values = vec![0.0; k * k];

    let columns: Vec<Vec<f64>> = features
        .iter()
        .map(|f| records.iter().map(|r| f.value(r)).collect())
        .collect();

    for i in 0..k {
        // Diagonal pinned to 1.0; the formula would hit 0/0 for a constant
        // feature compared against itself.
        values[i * k + i] = 1.0;
        for j in (i + 1)..k {
            let r = pearson(&columns[i], &columns[j]);
            values[i * k + j] = r;
            values[j * k + i] = r;
        }
    }

    CorrelationMatrix {
        features: features.to_vec(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exovision_test_utils::{planet, sample_catalog};

    #[test]
    fn test_perfect_positive_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert!((pearson(&x, &y) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_negative_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let z = [4.0, 3.0, 2.0, 1.0];
        assert!((pearson(&x, &z) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_feature_is_zero() {
        let constant = [1.0, 1.0, 1.0, 1.0];
        let varying = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(pearson(&constant, &varying), 0.0);
        assert_eq!(pearson(&varying, &constant), 0.0);
        assert_eq!(pearson(&constant, &constant), 0.0);
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(pearson(&[], &[]), 0.0);
    }

    #[test]
    fn test_matrix_symmetry_and_unit_diagonal() {
        let records = sample_catalog();
        let m = matrix(&records, &Feature::ALL);
        assert_eq!(m.len(), 5);
        for i in 0..m.len() {
            assert_eq!(m.coefficient(i, i), 1.0);
            for j in 0..m.len() {
                assert_eq!(m.coefficient(i, j), m.coefficient(j, i));
                assert!(m.coefficient(i, j).abs() <= 1.0);
            }
        }
    }

    #[test]
    fn test_matrix_diagonal_is_one_even_for_constant_feature() {
        // Every record has the same stellar radius: off-diagonal entries for
        // that feature are 0, but the diagonal stays exactly 1.
        let records: Vec<_> = [1.0, 2.0, 3.0]
            .iter()
            .map(|&p| {
                let mut r = planet("x", p);
                r.stellar_radius = 0.9;
                r
            })
            .collect();
        let m = matrix(&records, &[Feature::StellarRadius, Feature::OrbitalPeriod]);
        assert_eq!(m.coefficient(0, 0), 1.0);
        assert_eq!(m.coefficient(0, 1), 0.0);
        assert_eq!(m.coefficient(1, 0), 0.0);
        assert_eq!(m.coefficient(1, 1), 1.0);
    }

    #[test]
    fn test_matrix_on_empty_catalog() {
        let m = matrix(&[], &Feature::ALL);
        for i in 0..m.len() {
            for j in 0..m.len() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m.coefficient(i, j), expected);
            }
        }
    }

    #[test]
    fn test_single_feature_matrix() {
        let records = sample_catalog();
        let m = matrix(&records, &[Feature::OrbitalPeriod]);
        assert_eq!(m.len(), 1);
        assert_eq!(m.coefficient(0, 0), 1.0);
    }

    #[test]
    fn test_out_of_range_coefficient_is_zero() {
        let m = matrix(&sample_catalog(), &Feature::ALL);
        assert_eq!(m.coefficient(0, 99), 0.0);
        assert_eq!(m.get(99, 0), None);
    }

    #[test]
    fn test_matrix_is_deterministic() {
        let records = sample_catalog();
        assert_eq!(matrix(&records, &Feature::ALL), matrix(&records, &Feature::ALL));
    }
}
