use std::path::{Path, PathBuf};

use structopt::StructOpt;
use strum::IntoEnumIterator;
use wind_spiral::{renderer::Format, run_batch, Fixture, FlightParameters, Scenario, SpiralPlot};

#[derive(Debug, StructOpt)]
#[structopt(name = "wind-spiral", about = "ICAO PANS-OPS wind spiral")]
struct Opt {
    /// Indicated airspeed [kt], runs the reference aircraft if omitted
    #[structopt(long)]
    ias: Option<f64>,
    /// Bank angle [deg]
    #[structopt(long, default_value = "25")]
    bank: f64,
    /// Altitude [ft]
    #[structopt(long, default_value = "4000")]
    altitude: f64,
    /// Wind speed [kt]
    #[structopt(long, default_value = "30")]
    wind: f64,
    /// Temperature deviation from standard [°C]
    #[structopt(long, default_value = "15")]
    temperature: f64,
    /// Write the figures in this directory
    #[structopt(long)]
    plot: Option<PathBuf>,
    /// Figure format
    #[structopt(long, default_value = "svg", possible_values = &["svg", "png"])]
    format: Format,
}

#[cfg(feature = "plot")]
fn render(plot: &SpiralPlot, path: &Path) -> wind_spiral::Result<()> {
    use wind_spiral::renderer::{self, Chart, ChartConfig};
    let mut chart = Chart::new(ChartConfig::default().filename(path)?);
    renderer::draw(plot, &mut chart)?;
    Ok(())
}
#[cfg(not(feature = "plot"))]
fn render(_plot: &SpiralPlot, path: &Path) -> wind_spiral::Result<()> {
    log::warn!("{path:?} not written, `plot` feature is disabled");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let runs: Vec<(String, Scenario)> = match opt.ias {
        Some(ias) => {
            let parameters =
                FlightParameters::new(ias, opt.bank.to_radians(), opt.altitude, opt.wind)
                    .temperature_deviation(opt.temperature);
            vec![(format!("ias-{ias}kt"), Scenario::from(parameters))]
        }
        None => Fixture::iter()
            .map(|fixture| (fixture.name().to_string(), Scenario::from(fixture)))
            .collect(),
    };
    let (names, scenarios): (Vec<String>, Vec<Scenario>) = runs.into_iter().unzip();

    let mut n_failed = 0;
    for (name, plot) in names.iter().zip(run_batch(&scenarios)) {
        let result = plot.map_err(wind_spiral::Error::from).and_then(|plot| {
            println!("{}", plot.label);
            match &opt.plot {
                Some(dir) => render(&plot, &dir.join(format!("{name}.{}", opt.format))),
                None => Ok(()),
            }
        });
        if let Err(e) = result {
            n_failed += 1;
            eprintln!("{name}: {:?}", anyhow::Error::from(e));
        }
    }
    if n_failed > 0 {
        anyhow::bail!("{n_failed} scenario(s) failed");
    }
    Ok(())
}
