//! Wind spiral radii
//!
//! The wind spiral is built from the nominal turn circle by displacing, at every
//! step angle of the turn, the point of application by the distance the wind has
//! blown the aircraft since the start of the turn.

use std::ops::Deref;

/// Default angular step between two spiral construction points [deg]
pub const STEP_ANGLE: f64 = 45.;
/// Smallest step angle [deg]
pub const MIN_STEP_ANGLE: f64 = 1.;
const SECONDS_PER_HOUR: f64 = 3600.;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SpiralError {
    #[error("step angle {0}° is outside [1,180]")]
    StepAngle(f64),
    #[error("rate of turn {0}°/s must be strictly positive")]
    RateOfTurn(f64),
    #[error("wind speed {0}kt must be positive")]
    WindSpeed(f64),
}
type Result<T> = std::result::Result<T, SpiralError>;

/// Wind effect radii [NM], one per construction point
#[derive(Debug, Clone, PartialEq)]
pub struct OctantRadii(Vec<f64>);
impl Deref for OctantRadii {
    type Target = Vec<f64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl OctantRadii {
    /// Returns the largest wind effect radius
    pub fn max(&self) -> f64 {
        self.iter().cloned().fold(0f64, f64::max)
    }
}

/// Wind spiral construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSpiral {
    step_angle: f64,
}
impl Default for WindSpiral {
    fn default() -> Self {
        Self {
            step_angle: STEP_ANGLE,
        }
    }
}
impl WindSpiral {
    /// Creates a spiral construction with a given step angle [deg], at least 1°
    pub fn new(step_angle: f64) -> Result<Self> {
        if (MIN_STEP_ANGLE..=180.).contains(&step_angle) {
            Ok(Self { step_angle })
        } else {
            Err(SpiralError::StepAngle(step_angle))
        }
    }
    /// Step angle [deg]
    pub fn step_angle(&self) -> f64 {
        self.step_angle
    }
    /// Number of construction points after the start of the turn: `360/step - 1`
    pub fn octant_count(&self) -> usize {
        (360. / self.step_angle).floor() as usize - 1
    }
    /// Angle [rad] turned at the construction point `i` (0 based)
    pub fn boundary_angle(&self, i: usize) -> f64 {
        ((i + 1) as f64 * self.step_angle).to_radians()
    }
    /// Returns the wind effect radii [NM] for the `rate` of turn [°/s] and the `wind` speed [kt]
    ///
    /// The radius at the construction point `i` is the distance covered at the wind speed
    /// during the time needed to turn `i` step angles
    pub fn wind_effect_radii(&self, rate: f64, wind: f64) -> Result<OctantRadii> {
        if !(rate > 0. && rate.is_finite()) {
            return Err(SpiralError::RateOfTurn(rate));
        }
        if !(wind >= 0. && wind.is_finite()) {
            return Err(SpiralError::WindSpeed(wind));
        }
        let radii: Vec<f64> = (1..=self.octant_count())
            .map(|i| (self.step_angle * i as f64 / rate) * (wind / SECONDS_PER_HOUR))
            .collect();
        log::debug!("wind effect radii: {:.3?}", radii);
        Ok(OctantRadii(radii))
    }
}
