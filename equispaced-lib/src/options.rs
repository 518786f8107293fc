use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ResampleError;

pub const DEFAULT_NUMBER_OF_POINTS: usize = 100;

/// Resampling policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Average of the piecewise-linear interpolant over each bin.
    #[default]
    Smooth,
    /// Mean of the samples falling in each bin.
    Slot,
    /// Sum of the samples falling in each bin.
    Unit,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Smooth => "smooth",
            Variant::Slot => "slot",
            Variant::Unit => "unit",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ResampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "smooth" => Ok(Variant::Smooth),
            "slot" => Ok(Variant::Slot),
            "unit" => Ok(Variant::Unit),
            _ => Err(ResampleError::UnknownVariant(s.to_string())),
        }
    }
}

/// Options for [`resample`](crate::resample).
///
/// `from` and `to` default to the first and last input x. They may be given
/// high-to-low, in which case the output runs in that direction too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResampleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<f64>,
    pub number_of_points: usize,
    pub variant: Variant,
}

impl ResampleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(mut self, from: f64, to: f64) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn number_of_points(mut self, number_of_points: usize) -> Self {
        self.number_of_points = number_of_points;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}

impl Default for ResampleOptions {
    fn default() -> Self {
        ResampleOptions {
            from: None,
            to: None,
            number_of_points: DEFAULT_NUMBER_OF_POINTS,
            variant: Variant::Smooth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_str() {
        assert_eq!("slot".parse::<Variant>().unwrap(), Variant::Slot);
        assert_eq!("UNIT".parse::<Variant>().unwrap(), Variant::Unit);
        assert_eq!(" Smooth ".parse::<Variant>().unwrap(), Variant::Smooth);
        assert_eq!(
            "spline".parse::<Variant>(),
            Err(ResampleError::UnknownVariant("spline".to_string()))
        );
    }

    #[test]
    fn test_variant_display_round_trips() {
        for v in [Variant::Smooth, Variant::Slot, Variant::Unit] {
            assert_eq!(v.to_string().parse::<Variant>().unwrap(), v);
        }
    }

    #[test]
    fn test_defaults() {
        let opts = ResampleOptions::default();
        assert_eq!(opts.number_of_points, 100);
        assert_eq!(opts.variant, Variant::Smooth);
        assert!(opts.from.is_none() && opts.to.is_none());
    }

    #[test]
    fn test_builder() {
        let opts = ResampleOptions::new()
            .range(4.0, 1.0)
            .number_of_points(7)
            .variant(Variant::Unit);
        assert_eq!(opts.from, Some(4.0));
        assert_eq!(opts.to, Some(1.0));
        assert_eq!(opts.number_of_points, 7);
        assert_eq!(opts.variant, Variant::Unit);
    }
}
