use crate::{
    atmosphere::AtmosphereError, clearance::ClearanceError, renderer::RenderError,
    scenario::ScenarioError, spiral::SpiralError, turn::TurnError,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error in the `atmosphere` module")]
    Atmosphere(#[from] AtmosphereError),
    #[error("Error in the `turn` module")]
    Turn(#[from] TurnError),
    #[error("Error in the `spiral` module")]
    Spiral(#[from] SpiralError),
    #[error("Error in the `scenario` module")]
    Scenario(#[from] ScenarioError),
    #[error("Error in the `renderer` module")]
    Render(#[from] RenderError),
    #[error("Error in the `clearance` module")]
    Clearance(#[from] ClearanceError),
}
pub type Result<T> = std::result::Result<T, Error>;
