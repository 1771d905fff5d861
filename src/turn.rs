//! Rate and radius of turn

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use crate::atmosphere::{self, AtmosphereError};

const RATE_FACTOR: f64 = 3431.;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TurnError {
    #[error("bank angle {0}rad is outside ]0,π/2[")]
    BankAngle(f64),
    #[error("true airspeed {0}kt must be strictly positive")]
    TrueAirspeed(f64),
    #[error("rate of turn {0}°/s must be strictly positive")]
    RateOfTurn(f64),
    #[error("failed to compute the true airspeed")]
    Atmosphere(#[from] AtmosphereError),
}
type Result<T> = std::result::Result<T, TurnError>;

fn check_tas(tas: f64) -> Result<()> {
    if tas > 0. && tas.is_finite() {
        Ok(())
    } else {
        Err(TurnError::TrueAirspeed(tas))
    }
}

/// Returns the rate of turn [°/s] for the true airspeed `tas` [kt] and the `bank` angle [rad]
pub fn rate_of_turn(tas: f64, bank: f64) -> Result<f64> {
    if !(bank > 0. && bank < FRAC_PI_2) {
        return Err(TurnError::BankAngle(bank));
    }
    check_tas(tas)?;
    Ok(RATE_FACTOR * bank.tan() / (PI * tas))
}

/// Returns the radius of turn [NM] for the true airspeed `tas` [kt] and the `rate` of turn [°/s]
pub fn radius_of_turn(tas: f64, rate: f64) -> Result<f64> {
    check_tas(tas)?;
    if !(rate > 0. && rate.is_finite()) {
        return Err(TurnError::RateOfTurn(rate));
    }
    Ok(tas / (20. * rate * PI))
}

/// Aircraft turn performance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedKinematics {
    /// true airspeed [kt]
    pub tas: f64,
    /// rate of turn [°/s]
    pub rate_of_turn: f64,
    /// radius of turn [NM]
    pub radius: f64,
}
impl DerivedKinematics {
    /// Computes the turn performance from the indicated airspeed [kt], the bank angle [rad],
    /// the altitude [ft] and the temperature deviation [°C]
    pub fn new(ias: f64, bank: f64, altitude: f64, deviation: f64) -> Result<Self> {
        let tas = atmosphere::true_airspeed(ias, altitude, deviation)?;
        let rate_of_turn = rate_of_turn(tas, bank)?;
        let radius = radius_of_turn(tas, rate_of_turn)?;
        Ok(Self {
            tas,
            rate_of_turn,
            radius,
        })
    }
}
impl fmt::Display for DerivedKinematics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TAS: {:6.2}kt, ROT: {:5.2}°/s, radius: {:5.3}NM",
            self.tas, self.rate_of_turn, self.radius
        )
    }
}
