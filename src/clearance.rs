//! Minimum obstacle clearance across the secondary protection area
//!
//! Not part of the wind spiral construction.

/// Default protection area semi-width [NM]
pub const SEMI_WIDTH: f64 = 2.5;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ClearanceError {
    #[error("secondary area width {0}NM must be strictly positive")]
    SecondaryWidth(f64),
    #[error("distance {distance}NM is outside the secondary area [0,{width}]NM")]
    Distance { distance: f64, width: f64 },
}
type Result<T> = std::result::Result<T, ClearanceError>;

/// Primary and secondary protection areas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProtectionArea {
    /// primary area width [NM]
    pub primary: f64,
    /// secondary area width [NM]
    pub secondary: f64,
}
impl Default for ProtectionArea {
    fn default() -> Self {
        Self::new(SEMI_WIDTH)
    }
}
impl ProtectionArea {
    /// Splits the area semi-width [NM]: the secondary area is the semi-width less half the primary area
    pub fn new(semi_width: f64) -> Self {
        let primary = semi_width;
        Self {
            primary,
            secondary: semi_width - 0.5 * primary,
        }
    }
    /// Returns the MOC [ft] at the distance `x` [NM] from the inner edge of the secondary area,
    /// linearly decreasing from `moc` to zero at the outer edge
    pub fn secondary_moc(&self, moc: f64, x: f64) -> Result<f64> {
        let width = self.secondary;
        if !(width > 0.) {
            return Err(ClearanceError::SecondaryWidth(width));
        }
        if !(0. ..=width).contains(&x) {
            return Err(ClearanceError::Distance { distance: x, width });
        }
        Ok(moc * (1. - x / width))
    }
}
