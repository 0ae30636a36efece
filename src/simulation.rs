use crate::{ComputeDescriptor, Error, History, Solver};
use crate::fdtd::{check_cell_size, time_step, FdtdSolver, FdtdSolverDescriptor, Medium, Source};
use crate::fdtd::components::AbsorbingBoundary;

/// Number of grid nodes of the reference setup.
pub const DEFAULT_NPOINTS: usize = 200;
/// Number of time steps of the reference setup.
pub const DEFAULT_NSTEPS: usize = 500;

/// Simulation specific parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationParameters {
    /// The physical size of each spacial step along the grid.
    pub delta_x: f64,
    /// The length of each temperal step in the simulation.
    pub delta_t: f64,
}

impl SimulationParameters {
    /// Parameters for cells of size `delta_x` [m], stepped at the scheme's Courant number.
    pub fn from_cell_size(delta_x: f64) -> Self {
        Self { delta_x, delta_t: time_step(delta_x) }
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::from_cell_size(0.01)
    }
}

/// Describes the field state after the last completed time step.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState {
    /// The number of completed time steps.
    pub time_step: usize,
    /// The electric field at each node.
    pub ex: ndarray::Array1<f64>,
    /// The magnetic field, half a cell after each node.
    pub hy: ndarray::Array1<f64>,
    pub low_boundary: AbsorbingBoundary,
    pub high_boundary: AbsorbingBoundary,
}

impl SimulationState {
    /// A field free grid at time step zero.
    pub fn zeros(npoints: usize) -> Self {
        Self {
            time_step: 0,
            ex: ndarray::Array1::zeros(npoints),
            hy: ndarray::Array1::zeros(npoints),
            low_boundary: AbsorbingBoundary::default(),
            high_boundary: AbsorbingBoundary::default(),
        }
    }
}

/// Describes a simulation.
pub struct SimulationDescriptor<S: Solver> {
    /// The `Solver` for the simulation.
    pub solver: S,
    /// The parameters for the simulation.
    pub sim_params: SimulationParameters,
    /// The state that the simulation starts in.
    pub init_state: Option<SimulationState>,
}

/// Describes a simulation run.
pub struct RunDescriptor {
    /// How many time steps the run should take.
    pub nsteps: usize,
    /// Whether or not to print information to the console.
    pub verbose: bool,
}

impl Default for RunDescriptor {
    fn default() -> Self {
        Self { nsteps: DEFAULT_NSTEPS, verbose: false }
    }
}

/// The main `struct` of the framework.
pub struct Simulation<S: Solver> {
    solver: S,
    sim_params: SimulationParameters,
    state: SimulationState,
}

impl<S: Solver> Simulation<S> {
    /// Creates a new `Simulation` instance.
    #[inline]
    pub fn new(desc: SimulationDescriptor<S>) -> Result<Self, Error> {
        let npoints = desc.solver.npoints();
        check_cell_size("solver", desc.solver.cell_size(), desc.sim_params.delta_x)?;

        let state = desc.init_state.unwrap_or_else(|| SimulationState::zeros(npoints));
        if state.ex.len() != npoints {
            return Err(Error::BadInit {
                array_name: "Ex".to_string(),
                input_length: state.ex.len(),
                expected_length: npoints,
            })
        }
        if state.hy.len() != npoints {
            return Err(Error::BadInit {
                array_name: "Hy".to_string(),
                input_length: state.hy.len(),
                expected_length: npoints,
            })
        }

        Ok(Self {
            state,
            solver: desc.solver,
            sim_params: desc.sim_params,
        })
    }

    /// Does a computational run, returning every step it took.
    #[inline]
    pub fn run(&mut self, desc: RunDescriptor) -> Result<History, Error> {
        tracing::info!(
            nsteps = desc.nsteps,
            start = self.state.time_step,
            npoints = self.solver.npoints(),
            "starting run"
        );

        // setup output if verbose
        let bar = if desc.verbose {
            println!("# of time steps: {}", desc.nsteps);
            Some(indicatif::ProgressBar::new(desc.nsteps as u64))
        } else {
            None
        };

        let history = self.solver.compute(ComputeDescriptor {
            state: &mut self.state,
            nsteps: desc.nsteps,
            bar: &bar,
        })?;

        if let Some(ref bar) = bar {
            bar.finish();
        }

        tracing::info!(time_step = self.state.time_step, "finished run");
        Ok(history)
    }

    /// The state after the last completed step.
    #[inline]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    #[inline]
    pub fn sim_params(&self) -> SimulationParameters {
        self.sim_params
    }

    /// Simulated time [s] since time step zero.
    #[inline]
    pub fn elapsed_time(&self) -> f64 {
        self.state.time_step as f64 * self.sim_params.delta_t
    }
}

/// Runs `nsteps` time steps on a grid of `npoints` nodes starting from `ex` and `hy`,
/// with `source` injected at node 1 and `medium` (vacuum if `None`) filling the grid.
///
/// The time step follows the cell size of the source or medium, `0.01` m if neither fixes one.
pub fn simulate(
    npoints: usize,
    ex: ndarray::Array1<f64>,
    hy: ndarray::Array1<f64>,
    source: Box<dyn Source>,
    medium: Option<Box<dyn Medium>>,
    nsteps: usize,
) -> Result<History, Error> {
    let solver = FdtdSolver::new(FdtdSolverDescriptor {
        medium,
        ..FdtdSolverDescriptor::new(npoints, source)
    })?;

    let sim_params = solver
        .cell_size()
        .map(SimulationParameters::from_cell_size)
        .unwrap_or_default();

    let mut simulation = Simulation::new(SimulationDescriptor {
        solver,
        sim_params,
        init_state: Some(SimulationState { ex, hy, ..SimulationState::zeros(0) }),
    })?;

    simulation.run(RunDescriptor { nsteps, verbose: false })
}
