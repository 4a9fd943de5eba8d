//! Interpolation configuration of curves.
//!
//! The enums parse from and display as their upper-snake names
//! (`"LOG_OF_VALUE_PER_TIME"`), both through [`FromStr`] and through serde,
//! so curve set-ups can be read from configuration files.

use sc_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn normalize(s: &str) -> String {
    s.trim().to_ascii_uppercase().replace([' ', '-'], "_")
}

/// Interpolation scheme applied to the transformed curve values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterpolationMethod {
    /// Piecewise linear.
    #[default]
    Linear,
    /// Natural cubic spline.
    CubicSpline,
    /// Akima spline.
    Akima,
    /// Akima spline with continuous weights.
    AkimaContinuous,
    /// Fritsch–Butland harmonic spline.
    HarmonicSpline,
    /// Harmonic spline with monotonic filtering of the end slopes.
    HarmonicSplineWithMonotonicFiltering,
    /// Value of the left knot of the enclosing interval.
    PiecewiseConstantLeftpoint,
    /// Value of the right knot of the enclosing interval.
    PiecewiseConstantRightpoint,
}

impl InterpolationMethod {
    /// `true` for the spline family, which is evaluated path by path.
    pub fn is_spline(self) -> bool {
        matches!(
            self,
            Self::CubicSpline
                | Self::Akima
                | Self::AkimaContinuous
                | Self::HarmonicSpline
                | Self::HarmonicSplineWithMonotonicFiltering
        )
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Linear => "LINEAR",
            Self::CubicSpline => "CUBIC_SPLINE",
            Self::Akima => "AKIMA",
            Self::AkimaContinuous => "AKIMA_CONTINUOUS",
            Self::HarmonicSpline => "HARMONIC_SPLINE",
            Self::HarmonicSplineWithMonotonicFiltering => {
                "HARMONIC_SPLINE_WITH_MONOTONIC_FILTERING"
            }
            Self::PiecewiseConstantLeftpoint => "PIECEWISE_CONSTANT_LEFTPOINT",
            Self::PiecewiseConstantRightpoint => "PIECEWISE_CONSTANT_RIGHTPOINT",
        };
        f.write_str(s)
    }
}

impl FromStr for InterpolationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "LINEAR" => Ok(Self::Linear),
            "CUBIC_SPLINE" => Ok(Self::CubicSpline),
            "AKIMA" => Ok(Self::Akima),
            "AKIMA_CONTINUOUS" => Ok(Self::AkimaContinuous),
            "HARMONIC_SPLINE" => Ok(Self::HarmonicSpline),
            "HARMONIC_SPLINE_WITH_MONOTONIC_FILTERING" => {
                Ok(Self::HarmonicSplineWithMonotonicFiltering)
            }
            "PIECEWISE_CONSTANT_LEFTPOINT" => Ok(Self::PiecewiseConstantLeftpoint),
            "PIECEWISE_CONSTANT_RIGHTPOINT" => Ok(Self::PiecewiseConstantRightpoint),
            _ => Err(Error::InvalidArgument(format!(
                "unknown interpolation method '{s}'"
            ))),
        }
    }
}

/// Behaviour outside the range of the stored points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtrapolationMethod {
    /// Hold the nearest boundary value.
    #[default]
    Constant,
    /// Extend the boundary segment.
    Linear,
}

impl fmt::Display for ExtrapolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Constant => "CONSTANT",
            Self::Linear => "LINEAR",
        })
    }
}

impl FromStr for ExtrapolationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "CONSTANT" => Ok(Self::Constant),
            "LINEAR" => Ok(Self::Linear),
            _ => Err(Error::InvalidArgument(format!(
                "unknown extrapolation method '{s}'"
            ))),
        }
    }
}

/// Transform applied to stored values before interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterpolationEntity {
    /// Interpolate the values themselves.
    Value,
    /// Interpolate `ln(value)`.
    LogOfValue,
    /// Interpolate `ln(value) / time`.
    #[default]
    LogOfValuePerTime,
}

impl fmt::Display for InterpolationEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Value => "VALUE",
            Self::LogOfValue => "LOG_OF_VALUE",
            Self::LogOfValuePerTime => "LOG_OF_VALUE_PER_TIME",
        })
    }
}

impl FromStr for InterpolationEntity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "VALUE" => Ok(Self::Value),
            "LOG_OF_VALUE" => Ok(Self::LogOfValue),
            "LOG_OF_VALUE_PER_TIME" => Ok(Self::LogOfValuePerTime),
            _ => Err(Error::InvalidArgument(format!(
                "unknown interpolation entity '{s}'"
            ))),
        }
    }
}

/// How a forward maps into the stored points of a forward curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterpolationEntityForward {
    /// Store the forward at its fixing time.
    #[default]
    Forward,
    /// Store forward × discount factor at the fixing time.
    ForwardTimesDiscountfactor,
    /// Store a zero rate at the payment time.
    Zero,
    /// Store a discount factor at the payment time.
    Discountfactor,
}

impl fmt::Display for InterpolationEntityForward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Forward => "FORWARD",
            Self::ForwardTimesDiscountfactor => "FORWARD_TIMES_DISCOUNTFACTOR",
            Self::Zero => "ZERO",
            Self::Discountfactor => "DISCOUNTFACTOR",
        })
    }
}

impl FromStr for InterpolationEntityForward {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "FORWARD" => Ok(Self::Forward),
            "FORWARD_TIMES_DISCOUNTFACTOR" => Ok(Self::ForwardTimesDiscountfactor),
            "ZERO" => Ok(Self::Zero),
            "DISCOUNTFACTOR" => Ok(Self::Discountfactor),
            _ => Err(Error::InvalidArgument(format!(
                "unknown forward interpolation entity '{s}'"
            ))),
        }
    }
}

/// Interpolation set-up of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Interpolation scheme.
    pub interpolation_method: InterpolationMethod,
    /// Extrapolation scheme.
    pub extrapolation_method: ExtrapolationMethod,
    /// Transform applied before interpolating.
    pub interpolation_entity: InterpolationEntity,
}

impl CurveConfig {
    /// Explicit configuration.
    pub fn new(
        interpolation_method: InterpolationMethod,
        extrapolation_method: ExtrapolationMethod,
        interpolation_entity: InterpolationEntity,
    ) -> Self {
        Self {
            interpolation_method,
            extrapolation_method,
            interpolation_entity,
        }
    }
}

impl fmt::Display for CurveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.interpolation_method, self.extrapolation_method, self.interpolation_entity
        )
    }
}

/// Interpolation set-up of a forward curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ForwardCurveConfig {
    /// Base interpolation configuration.
    #[serde(flatten)]
    pub curve: CurveConfig,
    /// Mapping of forwards into stored points.
    pub forward_entity: InterpolationEntityForward,
}

impl Default for ForwardCurveConfig {
    fn default() -> Self {
        Self {
            curve: CurveConfig::new(
                InterpolationMethod::Linear,
                ExtrapolationMethod::Constant,
                InterpolationEntity::Value,
            ),
            forward_entity: InterpolationEntityForward::Forward,
        }
    }
}

impl ForwardCurveConfig {
    /// Explicit configuration.
    pub fn new(curve: CurveConfig, forward_entity: InterpolationEntityForward) -> Self {
        Self {
            curve,
            forward_entity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configs() {
        let c = CurveConfig::default();
        assert_eq!(c.interpolation_method, InterpolationMethod::Linear);
        assert_eq!(c.extrapolation_method, ExtrapolationMethod::Constant);
        assert_eq!(c.interpolation_entity, InterpolationEntity::LogOfValuePerTime);
        assert_eq!(c.to_string(), "LINEAR/CONSTANT/LOG_OF_VALUE_PER_TIME");

        let f = ForwardCurveConfig::default();
        assert_eq!(f.curve.interpolation_entity, InterpolationEntity::Value);
        assert_eq!(f.forward_entity, InterpolationEntityForward::Forward);
    }

    #[test]
    fn names_round_trip() {
        for m in [
            InterpolationMethod::Linear,
            InterpolationMethod::CubicSpline,
            InterpolationMethod::Akima,
            InterpolationMethod::AkimaContinuous,
            InterpolationMethod::HarmonicSpline,
            InterpolationMethod::HarmonicSplineWithMonotonicFiltering,
            InterpolationMethod::PiecewiseConstantLeftpoint,
            InterpolationMethod::PiecewiseConstantRightpoint,
        ] {
            assert_eq!(m.to_string().parse::<InterpolationMethod>(), Ok(m));
        }
        for e in [
            InterpolationEntityForward::Forward,
            InterpolationEntityForward::ForwardTimesDiscountfactor,
            InterpolationEntityForward::Zero,
            InterpolationEntityForward::Discountfactor,
        ] {
            assert_eq!(e.to_string().parse::<InterpolationEntityForward>(), Ok(e));
        }
        assert_eq!("log of value".parse(), Ok(InterpolationEntity::LogOfValue));
        assert_eq!("linear".parse(), Ok(ExtrapolationMethod::Linear));
        assert!("quadratic".parse::<InterpolationMethod>().is_err());
    }

    #[test]
    fn spline_family() {
        assert!(InterpolationMethod::AkimaContinuous.is_spline());
        assert!(!InterpolationMethod::Linear.is_spline());
        assert!(!InterpolationMethod::PiecewiseConstantRightpoint.is_spline());
    }
}
