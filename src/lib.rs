//! A one-dimensional finite-difference time-domain solver for the coupled
//! `Ex`/`Hy` fields of a plane wave.
//!
//! The solver advances both fields with Yee leapfrog updates, injects a soft
//! source at a fixed node, absorbs outgoing waves at both ends of the grid and
//! can model a lossy dielectric half-space. Every completed step is recorded in
//! a [`History`] that a renderer pulls frames from at its own pace.
//!
//! To get started, refer to the `demos` directory in the main repository.

mod history;
mod simulation;

pub mod fdtd;
pub mod prelude;

pub use history::{Frame, Frames, History, Playback, Viewport, FIELD_RANGE};
pub use simulation::{
    simulate, RunDescriptor, Simulation, SimulationDescriptor, SimulationParameters,
    SimulationState, DEFAULT_NPOINTS, DEFAULT_NSTEPS,
};

/// Represents an error in the simulation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Init {array_name} array does not have expected length \
        ( {array_name} array length: {input_length}, \
        expected length: {expected_length} )")]
    BadInit {
        array_name: String,
        input_length: usize,
        expected_length: usize,
    },
    #[error("Grid needs at least 3 nodes to have an interior ( got {npoints} )")]
    GridTooSmall { npoints: usize },
    #[error("Injection node {node} is not an interior node of a {npoints} node grid")]
    BadInjectionNode { node: usize, npoints: usize },
    #[error("Relative permittivity must be positive ( got {0} )")]
    BadPermittivity(f64),
    #[error("The {component} uses {found} m cells but the simulation uses {expected} m cells")]
    CellSizeMismatch {
        component: String,
        found: f64,
        expected: f64,
    },
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}

/// Manages actual computations.
pub trait Solver {
    /// Advances `desc.state` by `desc.nsteps` time steps, recording every step.
    fn compute(&mut self, desc: ComputeDescriptor) -> Result<History, Error>;

    fn npoints(&self) -> usize;

    /// The cell size [m] the solver's components were built for, if any of them fix one.
    fn cell_size(&self) -> Option<f64> {
        None
    }
}

/// Describes how a `Solver` should do computations.
pub struct ComputeDescriptor<'a> {
    pub state: &'a mut SimulationState,
    pub nsteps: usize,
    pub bar: &'a Option<indicatif::ProgressBar>,
}
