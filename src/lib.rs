//! # ICAO PANS-OPS wind spiral
//!
//! Computes the wind spiral of a turn: the envelope of the aircraft positions
//! during a 360° turn when the aircraft drifts with the wind.
//!
//! The construction goes through the following stages:
//!  - [atmosphere]: indicated to true airspeed,
//!  - [turn]: rate and radius of turn,
//!  - [spiral]: wind effect radii, one every 45° of turn,
//!  - [arc]: the spiral arcs between the wind corrected construction points,
//!  - [scenario]: the whole construction for one aircraft configuration,
//!  - [renderer]: the figure.
//!
//! ```no_run
//! use wind_spiral::{renderer::Recorder, Scenario};
//!
//! let mut figure = Recorder::default();
//! let plot = Scenario::new(160., 25f64.to_radians(), 4000., 30.).run_with(&mut figure)?;
//! println!("{}", plot.label);
//! # Ok::<(), wind_spiral::Error>(())
//! ```

pub mod arc;
pub mod atmosphere;
pub mod clearance;
mod error;
pub mod renderer;
pub mod scenario;
pub mod spiral;
pub mod turn;

pub use arc::{interpolate_arc, Point2D};
pub use error::{Error, Result};
pub use scenario::{run_batch, Fixture, FlightParameters, Scenario, SpiralPlot};
