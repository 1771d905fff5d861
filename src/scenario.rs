//! Aircraft turn scenario
//!
//! A [Scenario] runs the whole wind spiral construction for one aircraft configuration:
//! true airspeed, rate and radius of turn, wind effect radii, wind corrected
//! construction points and the spiral arcs joining them.

use std::fmt;

use itertools::Itertools;
use nalgebra::{Rotation2, Vector2};
use rayon::prelude::*;
use strum_macros::EnumIter;

use crate::{
    arc::{interpolate_arc, Point2D, ARC_SAMPLES},
    atmosphere::STANDARD_DEVIATION,
    renderer::{self, SpiralRenderer},
    spiral::{OctantRadii, SpiralError, WindSpiral},
    turn::{DerivedKinematics, TurnError},
};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ScenarioError {
    #[error("turn kinematics failed")]
    Turn(#[from] TurnError),
    #[error("wind spiral radii failed")]
    Spiral(#[from] SpiralError),
    #[error("wind speed {wind}kt exceeds the true airspeed {tas}kt, no wind correction angle")]
    WindCorrection { wind: f64, tas: f64 },
}
type Result<T> = std::result::Result<T, ScenarioError>;

/// Aircraft configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightParameters {
    /// indicated airspeed [kt]
    pub ias: f64,
    /// bank angle [rad]
    pub bank: f64,
    /// altitude [ft]
    pub altitude: f64,
    /// wind speed [kt]
    pub wind: f64,
    /// temperature deviation from standard [°C]
    pub temperature_deviation: f64,
}
impl FlightParameters {
    pub fn new(ias: f64, bank: f64, altitude: f64, wind: f64) -> Self {
        Self {
            ias,
            bank,
            altitude,
            wind,
            temperature_deviation: STANDARD_DEVIATION,
        }
    }
    pub fn temperature_deviation(self, temperature_deviation: f64) -> Self {
        Self {
            temperature_deviation,
            ..self
        }
    }
}
impl fmt::Display for FlightParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IAS {}kt, bank {:.1}°, altitude {}ft, wind {}kt",
            self.ias,
            self.bank.to_degrees(),
            self.altitude,
            self.wind
        )
    }
}

/// Reference aircraft
#[derive(EnumIter, Debug, Clone, Copy, PartialEq)]
pub enum Fixture {
    /// CAT C aircraft at 160kt with a maximum bank angle of 25°
    CatC160,
    /// CAT B aircraft at 120kt with a maximum bank angle of 25°
    CatB120,
    /// CAT B aircraft at 90kt with a maximum bank angle of 25°
    CatB90,
}
impl Fixture {
    pub fn parameters(&self) -> FlightParameters {
        let ias = match self {
            Fixture::CatC160 => 160.,
            Fixture::CatB120 => 120.,
            Fixture::CatB90 => 90.,
        };
        FlightParameters::new(ias, 25f64.to_radians(), 4000., 30.)
    }
    /// Figure file stem
    pub fn name(&self) -> &'static str {
        match self {
            Fixture::CatC160 => "cat-c_160kt",
            Fixture::CatB120 => "cat-b_120kt",
            Fixture::CatB90 => "cat-b_90kt",
        }
    }
}
impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fixture::CatC160 => write!(f, "CAT C {}", self.parameters()),
            Fixture::CatB120 | Fixture::CatB90 => write!(f, "CAT B {}", self.parameters()),
        }
    }
}

/// Figure annotations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
    pub ias: f64,
    pub tas: f64,
    pub altitude: f64,
    /// bank angle truncated to the degree
    pub bank: i64,
    pub wind: f64,
    pub rate_of_turn: f64,
    pub radius: f64,
}
impl Label {
    /// Text annotations and their positions [NM]
    pub fn annotations(&self) -> Vec<(Point2D, String)> {
        vec![
            (
                Point2D::new(-1.75, 1.75),
                format!("IAS: {:3}", self.ias.trunc() as i64),
            ),
            (Point2D::new(-0.875, 1.75), format!("TAS: {:5.2}", self.tas)),
            (
                Point2D::new(0., 1.75),
                format!("Altitude: {:4}", self.altitude.trunc() as i64),
            ),
            (Point2D::new(0.875, 1.75), format!("Bank: {:2}", self.bank)),
            (
                Point2D::new(-1.75, 1.5),
                format!("Wind: {:3}", self.wind.trunc() as i64),
            ),
            (
                Point2D::new(-0.875, 1.5),
                format!("ROT: {:5.2}", self.rate_of_turn),
            ),
            (Point2D::new(0., 1.5), format!("Radius: {:5.2}", self.radius)),
        ]
    }
}
impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}, {}, {}, {}]",
            self.ias, self.tas, self.altitude, self.bank, self.wind, self.rate_of_turn, self.radius
        )
    }
}

/// Construction of one spiral point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Construction {
    /// point of application on the nominal turn circle
    pub application: Point2D,
    /// end of the wind effect radius along the turn radius
    pub inner: Point2D,
    /// end of the wind effect radius rotated by the wind correction angle, on the spiral
    pub corrected: Point2D,
    /// wind effect radius [NM]
    pub radius: f64,
}

/// Wind spiral geometry ready to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct SpiralPlot {
    pub parameters: FlightParameters,
    pub kinematics: DerivedKinematics,
    /// wind correction angle [rad]
    pub wind_correction: f64,
    pub radii: OctantRadii,
    pub constructions: Vec<Construction>,
    /// spiral points starting on the negative x axis
    pub spiral: Vec<Point2D>,
    /// arcs between consecutive spiral points
    pub arcs: Vec<Vec<Point2D>>,
    pub label: Label,
}

/// Wind spiral computation for one aircraft configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    parameters: FlightParameters,
    spiral: WindSpiral,
    arc_samples: usize,
}
impl From<FlightParameters> for Scenario {
    fn from(parameters: FlightParameters) -> Self {
        Self {
            parameters,
            spiral: WindSpiral::default(),
            arc_samples: ARC_SAMPLES,
        }
    }
}
impl From<Fixture> for Scenario {
    fn from(fixture: Fixture) -> Self {
        fixture.parameters().into()
    }
}
impl Scenario {
    /// Creates a scenario from the indicated airspeed [kt], the bank angle [rad],
    /// the altitude [ft] and the wind speed [kt]
    pub fn new(ias: f64, bank: f64, altitude: f64, wind: f64) -> Self {
        FlightParameters::new(ias, bank, altitude, wind).into()
    }
    /// Sets the spiral step angle [deg]
    pub fn step_angle(self, step_angle: f64) -> Result<Self> {
        Ok(Self {
            spiral: WindSpiral::new(step_angle)?,
            ..self
        })
    }
    /// Sets the number of samples per arc
    pub fn arc_samples(self, arc_samples: usize) -> Self {
        Self {
            arc_samples,
            ..self
        }
    }
    pub fn parameters(&self) -> &FlightParameters {
        &self.parameters
    }
    /// Computes the wind spiral geometry
    pub fn run(&self) -> Result<SpiralPlot> {
        let parameters = self.parameters;
        log::info!("wind spiral: {parameters}");
        let kinematics = DerivedKinematics::new(
            parameters.ias,
            parameters.bank,
            parameters.altitude,
            parameters.temperature_deviation,
        )?;
        log::debug!("{kinematics}");
        let DerivedKinematics { tas, radius, .. } = kinematics;
        let wind = parameters.wind;
        if !(wind.abs() <= tas) {
            return Err(ScenarioError::WindCorrection { wind, tas });
        }
        let wind_correction = (wind / tas).asin();
        let radii = self
            .spiral
            .wind_effect_radii(kinematics.rate_of_turn, wind)?;

        let rotation = Rotation2::new(wind_correction);
        let constructions: Vec<_> = radii
            .iter()
            .enumerate()
            .map(|(i, &e)| {
                let (sin, cos) = self.spiral.boundary_angle(i).sin_cos();
                let u = Vector2::new(-cos, sin);
                let application = Point2D::from(u * radius);
                Construction {
                    application,
                    inner: application + u * e,
                    corrected: application + rotation * (u * e),
                    radius: e,
                }
            })
            .collect();

        let spiral: Vec<_> = std::iter::once(Point2D::new(-radius, 0.))
            .chain(constructions.iter().map(|c| c.corrected))
            .collect();
        let arcs: Vec<_> = spiral
            .iter()
            .tuple_windows()
            .map(|(p1, p2)| interpolate_arc(p1, p2, self.arc_samples))
            .collect();

        let label = Label {
            ias: parameters.ias,
            tas,
            altitude: parameters.altitude,
            bank: parameters.bank.to_degrees() as i64,
            wind,
            rate_of_turn: kinematics.rate_of_turn,
            radius,
        };
        log::info!("... {} spiral points, {} arcs", spiral.len(), arcs.len());
        Ok(SpiralPlot {
            parameters,
            kinematics,
            wind_correction,
            radii,
            constructions,
            spiral,
            arcs,
            label,
        })
    }
    /// Computes the wind spiral geometry and draws it with the renderer
    pub fn run_with<R: SpiralRenderer + ?Sized>(&self, renderer: &mut R) -> crate::Result<SpiralPlot> {
        let plot = self.run()?;
        renderer::draw(&plot, renderer)?;
        Ok(plot)
    }
}

/// Computes independent scenarios in parallel, the results are in the order of the scenarios
pub fn run_batch(scenarios: &[Scenario]) -> Vec<Result<SpiralPlot>> {
    scenarios
        .par_iter()
        .map(|scenario| {
            let plot = scenario.run();
            if let Err(e) = &plot {
                log::warn!("{}: {e}", scenario.parameters);
            }
            plot
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::renderer::{Primitive, Recorder, Style};

    #[test]
    fn cat_c() -> std::result::Result<(), Box<dyn Error>> {
        let plot = Scenario::from(Fixture::CatC160).run()?;
        let k = plot.kinematics;
        assert!((k.tas - 174.269).abs() < 0.5, "TAS: {}", k.tas);
        assert!((k.rate_of_turn - 2.922).abs() < 0.05, "ROT: {}", k.rate_of_turn);
        assert!((k.radius - 0.9491).abs() < 0.01, "radius: {}", k.radius);
        assert_eq!(plot.radii.len(), 7);
        assert!(plot.radii[0] < plot.radii[6]);
        let extent = k.radius + plot.radii.max();
        assert!(plot
            .spiral
            .iter()
            .all(|p| p.coords.norm() <= extent + 1e-12));
        Ok(())
    }

    #[test]
    fn fixtures() -> std::result::Result<(), Box<dyn Error>> {
        let expected = [(174.269, 0.9491), (130.702, 0.5339), (98.026, 0.3003)];
        for (fixture, (tas, radius)) in Fixture::iter().zip(expected) {
            let plot = Scenario::from(fixture).run()?;
            println!("{fixture}: {}", plot.label);
            assert!((plot.kinematics.tas - tas).abs() < 1e-2);
            assert!((plot.kinematics.radius - radius).abs() < 1e-3);
        }
        Ok(())
    }

    #[test]
    fn spiral_points() -> std::result::Result<(), Box<dyn Error>> {
        let plot = Scenario::from(Fixture::CatC160).run()?;
        let r = plot.kinematics.radius;
        assert_eq!(plot.spiral.len(), 8);
        assert_eq!(plot.spiral[0], Point2D::new(-r, 0.));
        let wca = (30. / plot.kinematics.tas).asin();
        assert!((plot.wind_correction - wca).abs() < 1e-15);
        for (i, c) in plot.constructions.iter().enumerate() {
            let angle = ((i + 1) as f64 * 45f64).to_radians();
            let e = plot.radii[i];
            assert!((c.application - Point2D::new(-r * angle.cos(), r * angle.sin())).norm() < 1e-12);
            let expected = Point2D::new(
                c.application.x - e * (angle - wca).cos(),
                c.application.y + e * (angle - wca).sin(),
            );
            assert!((c.corrected - expected).norm() < 1e-12);
            assert!(((c.inner - c.application).norm() - e).abs() < 1e-12);
            assert_eq!(plot.spiral[i + 1], c.corrected);
        }
        Ok(())
    }

    #[test]
    fn arcs_join_spiral_points() -> std::result::Result<(), Box<dyn Error>> {
        let plot = Scenario::from(Fixture::CatB120).run()?;
        assert_eq!(plot.arcs.len(), 7);
        for (arc, start) in plot.arcs.iter().zip(&plot.spiral) {
            assert_eq!(arc.len(), ARC_SAMPLES);
            assert_eq!(arc[0], *start);
        }
        Ok(())
    }

    #[test]
    fn calm_spiral_is_the_turn_circle() -> std::result::Result<(), Box<dyn Error>> {
        let plot = Scenario::new(160., 25f64.to_radians(), 4000., 0.)
            .arc_samples(10)
            .run()?;
        let r = plot.kinematics.radius;
        assert_eq!(plot.wind_correction, 0.);
        assert!(plot
            .arcs
            .iter()
            .flatten()
            .all(|p| (p.coords.norm() - r).abs() < 1e-12));
        Ok(())
    }

    #[test]
    fn label() -> std::result::Result<(), Box<dyn Error>> {
        let plot = Scenario::from(Fixture::CatC160).run()?;
        let texts: Vec<_> = plot.label.annotations().into_iter().map(|(_, t)| t).collect();
        assert_eq!(
            texts,
            vec![
                "IAS: 160",
                "TAS: 174.27",
                "Altitude: 4000",
                "Bank: 25",
                "Wind:  30",
                "ROT:  2.92",
                "Radius:  0.95",
            ]
        );
        let line = plot.label.to_string();
        assert!(line.starts_with("[160, 174.2689"), "{line}");
        assert!(line.contains(", 4000, 25, 30, 2.922"), "{line}");
        let plot = Scenario::from(Fixture::CatB90).run()?;
        assert_eq!(plot.label.annotations()[0].1, "IAS:  90");
        Ok(())
    }

    #[test]
    fn wind_exceeding_tas() {
        // 50kt IAS at sea level is about 51kt TAS
        let scenario = Scenario::new(50., 25f64.to_radians(), 0., 60.);
        assert!(matches!(
            scenario.run(),
            Err(ScenarioError::WindCorrection { wind, .. }) if wind == 60.
        ));
    }

    #[test]
    fn bank_out_of_range() {
        for bank in [0., -0.2, std::f64::consts::FRAC_PI_2, 1.7] {
            assert_eq!(
                Scenario::new(160., bank, 4000., 30.).run(),
                Err(ScenarioError::Turn(TurnError::BankAngle(bank)))
            );
        }
    }

    #[test]
    fn ceiling() {
        assert!(matches!(
            Scenario::new(160., 0.4, 200_000., 30.).run(),
            Err(ScenarioError::Turn(TurnError::Atmosphere(_)))
        ));
    }

    #[test]
    fn temperature_deviation() -> std::result::Result<(), Box<dyn Error>> {
        let bank = 25f64.to_radians();
        let cold = FlightParameters::new(160., bank, 4000., 30.).temperature_deviation(-15.);
        let plot = Scenario::from(cold).run()?;
        let tas = crate::atmosphere::true_airspeed(160., 4000., -15.)?;
        assert_eq!(plot.kinematics.tas, tas);
        let standard = Scenario::from(Fixture::CatC160).run()?;
        assert!(plot.kinematics.tas < standard.kinematics.tas);
        assert!(plot.kinematics.radius < standard.kinematics.radius);
        assert!(plot.radii[6] < standard.radii[6]);
        Ok(())
    }

    #[test]
    fn nan_airspeed() {
        assert!(matches!(
            Scenario::new(f64::NAN, 0.4, 4000., 30.).run(),
            Err(ScenarioError::Turn(TurnError::Atmosphere(
                crate::atmosphere::AtmosphereError::NotFinite { .. }
            )))
        ));
    }

    #[test]
    fn custom_step_angle() -> std::result::Result<(), Box<dyn Error>> {
        let plot = Scenario::from(Fixture::CatC160)
            .step_angle(30.)?
            .arc_samples(20)
            .run()?;
        assert_eq!(plot.spiral.len(), 12);
        assert_eq!(plot.arcs.len(), 11);
        assert!(plot.arcs.iter().all(|arc| arc.len() == 20));
        Ok(())
    }

    #[test]
    fn batch() {
        let mut scenarios: Vec<Scenario> = Fixture::iter().map(Scenario::from).collect();
        scenarios.insert(1, Scenario::new(50., 0.4, 0., 60.));
        let plots = run_batch(&scenarios);
        assert_eq!(plots.len(), 4);
        assert!(plots[1].is_err());
        for (plot, scenario) in plots.iter().zip(&scenarios).filter(|(p, _)| p.is_ok()) {
            assert_eq!(plot.as_ref().unwrap(), &scenario.run().unwrap());
        }
    }

    #[test]
    fn render() -> std::result::Result<(), Box<dyn Error>> {
        let mut recorder = Recorder::default();
        let plot = Scenario::from(Fixture::CatC160).run_with(&mut recorder)?;
        assert!(recorder.presented);
        // main circle and one sub-circle per octant
        assert_eq!(recorder.circles().count(), 8);
        // axes and 3 segments per octant
        assert_eq!(recorder.segments().count(), 2 + 3 * 7);
        assert_eq!(recorder.polylines().count(), 7);
        assert_eq!(recorder.texts().count(), 7);
        assert_eq!(
            recorder.primitives[0],
            Primitive::Circle {
                center: Point2D::origin(),
                radius: plot.kinematics.radius,
                style: Style::GUIDE
            }
        );
        assert!(recorder.polylines().all(|p| matches!(
            p,
            Primitive::Polyline { points, style } if points.len() == ARC_SAMPLES && *style == Style::SPIRAL
        )));
        Ok(())
    }

    #[test]
    fn no_render_on_error() {
        let mut recorder = Recorder::default();
        assert!(Scenario::new(50., 0.4, 0., 60.)
            .run_with(&mut recorder)
            .is_err());
        assert!(recorder.primitives.is_empty());
        assert!(!recorder.presented);
    }
}
