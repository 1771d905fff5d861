//! Wind spiral rendering
//!
//! The geometry is handed over to a [SpiralRenderer] as plain primitives: circles,
//! segments, polylines and text annotations, followed by a single call to
//! [SpiralRenderer::present].
//! [Recorder] keeps the primitives in memory, [Chart] (feature `plot`) draws them with `plotters`.

use std::path::Path;

use strum_macros::{Display, EnumString};

use crate::{arc::Point2D, scenario::SpiralPlot};

#[cfg(feature = "plot")]
mod chart;
#[cfg(feature = "plot")]
pub use chart::{Chart, ChartConfig};

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("plotting backend failed: {0}")]
    Backend(String),
    #[error("the figure has already been presented")]
    Presented,
    #[error("figure format of {0:?} is not supported, expected svg or png")]
    Format(String),
    #[error("failed to create the figure directory")]
    Io(#[from] std::io::Error),
}
pub type Result<T> = std::result::Result<T, RenderError>;

/// Figure file format
#[derive(EnumString, Display, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    Svg,
    Png,
}
impl Format {
    /// Returns the format matching the file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.to_lowercase().parse().ok())
            .ok_or_else(|| RenderError::Format(path.display().to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Grey,
    Black,
    Blue,
}

/// Line style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Color,
    pub width: f64,
}
impl Style {
    /// Construction lines
    pub const GUIDE: Style = Style {
        color: Color::Grey,
        width: 0.5,
    };
    /// Sub-circles
    pub const SUB_CIRCLE: Style = Style {
        color: Color::Black,
        width: 0.5,
    };
    /// Wind corrected radii
    pub const WIND: Style = Style {
        color: Color::Black,
        width: 1.,
    };
    /// Spiral arcs
    pub const SPIRAL: Style = Style {
        color: Color::Blue,
        width: 2.,
    };
}

/// Graphical primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Circle {
        center: Point2D,
        radius: f64,
        style: Style,
    },
    Segment {
        from: Point2D,
        to: Point2D,
        style: Style,
    },
    Polyline {
        points: Vec<Point2D>,
        style: Style,
    },
    Text {
        position: Point2D,
        text: String,
    },
}

/// Sink for the wind spiral primitives
///
/// A renderer is not reentrant: a figure is built by one caller and finalized by [present](SpiralRenderer::present)
pub trait SpiralRenderer {
    /// Adds an unfilled circle
    fn circle(&mut self, center: Point2D, radius: f64, style: Style) -> Result<()>;
    /// Adds a line segment
    fn segment(&mut self, from: Point2D, to: Point2D, style: Style) -> Result<()>;
    /// Adds a polyline
    fn polyline(&mut self, points: &[Point2D], style: Style) -> Result<()>;
    /// Adds a text annotation
    fn text(&mut self, position: Point2D, text: &str) -> Result<()>;
    /// Finalizes the figure
    fn present(&mut self) -> Result<()>;
}

/// Headless renderer keeping a record of all the primitives
#[derive(Debug, Default)]
pub struct Recorder {
    pub primitives: Vec<Primitive>,
    pub presented: bool,
}
impl Recorder {
    fn push(&mut self, primitive: Primitive) -> Result<()> {
        if self.presented {
            return Err(RenderError::Presented);
        }
        self.primitives.push(primitive);
        Ok(())
    }
    pub fn circles(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { .. }))
    }
    pub fn segments(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Segment { .. }))
    }
    pub fn polylines(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Polyline { .. }))
    }
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
impl SpiralRenderer for Recorder {
    fn circle(&mut self, center: Point2D, radius: f64, style: Style) -> Result<()> {
        self.push(Primitive::Circle {
            center,
            radius,
            style,
        })
    }
    fn segment(&mut self, from: Point2D, to: Point2D, style: Style) -> Result<()> {
        self.push(Primitive::Segment { from, to, style })
    }
    fn polyline(&mut self, points: &[Point2D], style: Style) -> Result<()> {
        self.push(Primitive::Polyline {
            points: points.to_vec(),
            style,
        })
    }
    fn text(&mut self, position: Point2D, text: &str) -> Result<()> {
        self.push(Primitive::Text {
            position,
            text: text.to_string(),
        })
    }
    fn present(&mut self) -> Result<()> {
        if self.presented {
            return Err(RenderError::Presented);
        }
        self.presented = true;
        Ok(())
    }
}

/// Draws the wind spiral figure into the renderer and presents it
pub fn draw<R: SpiralRenderer + ?Sized>(plot: &SpiralPlot, renderer: &mut R) -> Result<()> {
    let origin = Point2D::origin();
    let r = plot.kinematics.radius;
    renderer.circle(origin, r, Style::GUIDE)?;
    renderer.segment(Point2D::new(0., r), Point2D::new(0., -r), Style::GUIDE)?;
    renderer.segment(Point2D::new(r, 0.), Point2D::new(-r, 0.), Style::GUIDE)?;
    for construction in &plot.constructions {
        let application = construction.application;
        renderer.segment(origin, application, Style::GUIDE)?;
        renderer.segment(application, construction.inner, Style::GUIDE)?;
        renderer.segment(application, construction.corrected, Style::WIND)?;
        renderer.circle(application, construction.radius, Style::SUB_CIRCLE)?;
    }
    for arc in &plot.arcs {
        renderer.polyline(arc, Style::SPIRAL)?;
    }
    for (position, text) in plot.label.annotations() {
        renderer.text(position, &text)?;
    }
    renderer.present()
}
