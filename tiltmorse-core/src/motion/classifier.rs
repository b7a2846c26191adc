//! Gyro triple → Morse symbol
//!
//! The three rotation rates are reduced to one scalar. A device held flat
//! reads close to zero; the calibrated band `(-0.5, 0.0)` on the plain sum
//! selects a dot, anything outside selects a dash.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::morse::Symbol;

/// How the three axes are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Reduction {
    #[default]
    Sum,
    Mean,
    Product,
}

/// Threshold classifier for the current tilt
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PositionClassifier {
    /// Axis combination
    pub reduction: Reduction,
    /// Exclusive lower bound of the dot band
    pub flat_min: f32,
    /// Exclusive upper bound of the dot band
    pub flat_max: f32,
}

impl Default for PositionClassifier {
    fn default() -> Self {
        Self {
            reduction: Reduction::Sum,
            flat_min: -0.5,
            flat_max: 0.0,
        }
    }
}

impl PositionClassifier {
    /// Combine the triple into one scalar
    pub fn reduce(&self, gyro: [f32; 3]) -> f32 {
        let [x, y, z] = gyro;
        match self.reduction {
            Reduction::Sum => x + y + z,
            Reduction::Mean => (x + y + z) / 3.0,
            Reduction::Product => x * y * z,
        }
    }

    /// Pick dot or dash for the given rates
    pub fn classify(&self, gyro: [f32; 3]) -> Symbol {
        let value = self.reduce(gyro);
        if value > self.flat_min && value < self.flat_max {
            Symbol::Dot
        } else {
            Symbol::Dash
        }
    }

    /// Check that the band is usable
    pub fn is_valid(&self) -> bool {
        self.flat_min.is_finite() && self.flat_max.is_finite() && self.flat_min < self.flat_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_band() {
        let c = PositionClassifier::default();
        assert_eq!(c.classify([-0.1, -0.1, 0.0]), Symbol::Dot);
        assert_eq!(c.classify([0.0, 0.0, 0.0]), Symbol::Dash);
        assert_eq!(c.classify([-0.25, -0.25, 0.0]), Symbol::Dash);
        assert_eq!(c.classify([40.0, -3.0, 1.0]), Symbol::Dash);
    }

    #[test]
    fn test_nan_is_dash() {
        let c = PositionClassifier::default();
        assert_eq!(c.classify([f32::NAN, 0.0, 0.0]), Symbol::Dash);
    }

    #[test]
    fn test_reductions() {
        let mut c = PositionClassifier::default();
        c.reduction = Reduction::Mean;
        assert_eq!(c.reduce([3.0, 3.0, 3.0]), 3.0);
        c.reduction = Reduction::Product;
        assert_eq!(c.reduce([2.0, 3.0, -1.0]), -6.0);
    }

    #[test]
    fn test_validity() {
        assert!(PositionClassifier::default().is_valid());
        let inverted = PositionClassifier {
            flat_min: 1.0,
            flat_max: -1.0,
            ..Default::default()
        };
        assert!(!inverted.is_valid());
        let nan = PositionClassifier {
            flat_min: f32::NAN,
            ..Default::default()
        };
        assert!(!nan.is_valid());
    }

    proptest! {
        #[test]
        fn prop_dot_iff_inside_band(x in -100.0f32..100.0, y in -100.0f32..100.0, z in -100.0f32..100.0) {
            let c = PositionClassifier::default();
            let sum = x + y + z;
            let expected = if sum > -0.5 && sum < 0.0 { Symbol::Dot } else { Symbol::Dash };
            prop_assert_eq!(c.classify([x, y, z]), expected);
        }
    }
}
