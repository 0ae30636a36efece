//! Includes commonly used library components.

pub use crate::{
    simulate,
    ComputeDescriptor,
    Error,
    Frame,
    History,
    Playback,
    RunDescriptor,
    Simulation,
    SimulationDescriptor,
    SimulationParameters,
    SimulationState,
    Solver,
};
pub use crate::fdtd::{Coefficients, Medium, Source};
