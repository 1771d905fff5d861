//! Indicated to true airspeed conversion

/// ISA sea level temperature [K] as used by the PANS-OPS conversion
pub const SEA_LEVEL_TEMPERATURE: f64 = 288.;
/// Temperature lapse rate [K/ft]
pub const LAPSE_RATE: f64 = 0.00198;
/// Standard temperature deviation [°C] applied to turn computations
pub const STANDARD_DEVIATION: f64 = 15.;
const TAS_FACTOR: f64 = 171233.;
const PRESSURE_EXPONENT: f64 = 2.628;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AtmosphereError {
    #[error("altitude {0}ft is above the standard atmosphere model ceiling")]
    Ceiling(f64),
    #[error("temperature deviation {deviation}°C at {altitude}ft gives a negative absolute temperature")]
    Temperature { altitude: f64, deviation: f64 },
    #[error("true airspeed is not finite for IAS {ias}kt at {altitude}ft")]
    NotFinite { ias: f64, altitude: f64 },
}
type Result<T> = std::result::Result<T, AtmosphereError>;

/// Returns the true airspeed [kt] from the indicated airspeed `ias` [kt]
/// at `altitude` [ft] for the temperature `deviation` [°C]
///
/// TAS = IAS 171233 (288 + ΔT - 0.00198 h)^0.5 / (288 - 0.00198 h)^2.628
pub fn true_airspeed(ias: f64, altitude: f64, deviation: f64) -> Result<f64> {
    let base = SEA_LEVEL_TEMPERATURE - LAPSE_RATE * altitude;
    if !(base > 0.) {
        return Err(AtmosphereError::Ceiling(altitude));
    }
    let temperature = base + deviation;
    if !(temperature >= 0.) {
        return Err(AtmosphereError::Temperature {
            altitude,
            deviation,
        });
    }
    let tas = ias * TAS_FACTOR * temperature.sqrt() / base.powf(PRESSURE_EXPONENT);
    if tas.is_finite() {
        Ok(tas)
    } else {
        Err(AtmosphereError::NotFinite { ias, altitude })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cat_c_tas() {
        let tas = true_airspeed(160., 4000., STANDARD_DEVIATION).unwrap();
        assert!((tas - 174.269).abs() < 1e-2, "TAS: {tas}");
    }

    #[test]
    fn tas_increases_with_ias() {
        let tas: Vec<f64> = (1..=30)
            .map(|i| true_airspeed(10. * i as f64, 4000., STANDARD_DEVIATION).unwrap())
            .collect();
        assert!(tas.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn tas_increases_with_altitude() {
        let tas: Vec<f64> = (0..=40)
            .map(|i| true_airspeed(160., 1000. * i as f64, STANDARD_DEVIATION).unwrap())
            .collect();
        assert!(tas.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn ceiling() {
        assert_eq!(
            true_airspeed(160., 150_000., STANDARD_DEVIATION),
            Err(AtmosphereError::Ceiling(150_000.))
        );
        assert!(true_airspeed(160., 145_455., 0.).is_err());
    }

    #[test]
    fn not_finite() {
        assert!(matches!(
            true_airspeed(f64::NAN, 4000., STANDARD_DEVIATION),
            Err(AtmosphereError::NotFinite { altitude, .. }) if altitude == 4000.
        ));
        assert!(true_airspeed(f64::INFINITY, 0., STANDARD_DEVIATION).is_err());
    }

    #[test]
    fn negative_temperature() {
        assert!(matches!(
            true_airspeed(160., 0., -300.),
            Err(AtmosphereError::Temperature { .. })
        ));
    }
}
