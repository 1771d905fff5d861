use std::{
    f64::consts::TAU,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use plotters::{coord::Shift, prelude::*};

use super::{
    Color as StyleColor, Format, Primitive, Recorder, RenderError, Result, SpiralRenderer, Style,
};
use crate::arc::Point2D;

// number of segments approximating a circle
const CIRCLE_RESOLUTION: usize = 360;

fn backend<E: Display>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

/// Chart settings
#[derive(Debug, Clone)]
pub struct ChartConfig {
    filename: PathBuf,
    format: Format,
    size: (u32, u32),
    range: f64,
    title: String,
}
impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            filename: PathBuf::from("wind-spiral.svg"),
            format: Format::Svg,
            size: (768, 768),
            range: 2.,
            title: String::from("Wind Spiral and Computed Data"),
        }
    }
}
impl ChartConfig {
    /// Sets the figure file name, the extension (`svg` or `png`) selects the backend
    pub fn filename<P: AsRef<Path>>(self, filename: P) -> Result<Self> {
        let format = Format::from_path(&filename)?;
        Ok(Self {
            filename: filename.as_ref().to_path_buf(),
            format,
            ..self
        })
    }
    /// Sets the figure size in pixels
    pub fn size(self, width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..self
        }
    }
    /// Sets the half width of both axes [NM]
    pub fn range(self, range: f64) -> Self {
        Self { range, ..self }
    }
    pub fn title(self, title: impl ToString) -> Self {
        Self {
            title: title.to_string(),
            ..self
        }
    }
    pub fn path(&self) -> &Path {
        &self.filename
    }
    pub fn format(&self) -> Format {
        self.format
    }
}

/// `plotters` renderer
///
/// Primitives are buffered in a [Recorder] and drawn all at once when the chart is presented
#[derive(Debug, Default)]
pub struct Chart {
    config: ChartConfig,
    recorder: Recorder,
}
impl Chart {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }
    fn draw_on<DB: DrawingBackend>(&self, root: DrawingArea<DB, Shift>) -> Result<()> {
        root.fill(&WHITE).map_err(backend)?;
        let r = self.config.range;
        let mut chart = ChartBuilder::on(&root)
            .caption(&self.config.title, ("sans", 20))
            .set_label_area_size(LabelAreaPosition::Left, 50)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .margin(10)
            .build_cartesian_2d(-r..r, -r..r)
            .map_err(backend)?;
        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc("Relative Distance Along Latitude (NM)")
            .y_desc("Relative Distance Along Longitude (NM)")
            .draw()
            .map_err(backend)?;

        for primitive in &self.recorder.primitives {
            match primitive {
                Primitive::Circle {
                    center,
                    radius,
                    style,
                } => {
                    chart
                        .draw_series(LineSeries::new(
                            (0..=CIRCLE_RESOLUTION).map(|i| {
                                let (sin, cos) = (TAU * i as f64 / CIRCLE_RESOLUTION as f64).sin_cos();
                                (center.x + radius * cos, center.y + radius * sin)
                            }),
                            shape(style),
                        ))
                        .map_err(backend)?;
                }
                Primitive::Segment { from, to, style } => {
                    chart
                        .draw_series(LineSeries::new(
                            [(from.x, from.y), (to.x, to.y)],
                            shape(style),
                        ))
                        .map_err(backend)?;
                }
                Primitive::Polyline { points, style } => {
                    chart
                        .draw_series(LineSeries::new(
                            points.iter().map(|p| (p.x, p.y)),
                            shape(style),
                        ))
                        .map_err(backend)?;
                }
                Primitive::Text { position, text } => {
                    chart
                        .draw_series(std::iter::once(Text::new(
                            text.clone(),
                            (position.x, position.y),
                            ("sans", 12.).into_font(),
                        )))
                        .map_err(backend)?;
                }
            }
        }
        root.present().map_err(backend)
    }
}

fn shape(style: &Style) -> ShapeStyle {
    let color = match style.color {
        StyleColor::Grey => RGBColor(128, 128, 128),
        StyleColor::Black => BLACK,
        StyleColor::Blue => BLUE,
    };
    color.stroke_width((style.width.ceil() as u32).max(1))
}

impl SpiralRenderer for Chart {
    fn circle(&mut self, center: Point2D, radius: f64, style: Style) -> Result<()> {
        self.recorder.circle(center, radius, style)
    }
    fn segment(&mut self, from: Point2D, to: Point2D, style: Style) -> Result<()> {
        self.recorder.segment(from, to, style)
    }
    fn polyline(&mut self, points: &[Point2D], style: Style) -> Result<()> {
        self.recorder.polyline(points, style)
    }
    fn text(&mut self, position: Point2D, text: &str) -> Result<()> {
        self.recorder.text(position, text)
    }
    fn present(&mut self) -> Result<()> {
        if self.recorder.presented {
            return Err(RenderError::Presented);
        }
        let path = self.config.filename.as_path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        log::info!("making figure: {path:?}");
        match self.config.format {
            Format::Png => {
                self.draw_on(BitMapBackend::new(path, self.config.size).into_drawing_area())?
            }
            Format::Svg => {
                self.draw_on(SVGBackend::new(path, self.config.size).into_drawing_area())?
            }
        }
        self.recorder.present()
    }
}
