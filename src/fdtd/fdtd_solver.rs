use ndarray::{s, Array1, Zip};

use crate::{ComputeDescriptor, Error, History, SimulationState, Solver};
use crate::fdtd::{check_cell_size, Coefficients, Medium, Source, COURANT_NUMBER};

/// Describes the composition of an `FdtdSolver`.
pub struct FdtdSolverDescriptor {
    /// Number of `Ex` and `Hy` nodes.
    pub npoints: usize,
    pub source: Box<dyn Source>,
    /// The material filling the grid, vacuum if `None`.
    pub medium: Option<Box<dyn Medium>>,
    /// The `Ex` node the source is added to.
    pub injection_node: usize,
}

impl FdtdSolverDescriptor {
    /// A vacuum filled grid driven at node 1.
    pub fn new(npoints: usize, source: Box<dyn Source>) -> Self {
        Self { npoints, source, medium: None, injection_node: 1 }
    }
}

/// Does single threaded computations on the CPU.
pub struct FdtdSolver {
    npoints: usize,
    source: Box<dyn Source>,
    coefficients: Coefficients,
    injection_node: usize,
    cell_size: Option<f64>,
}

impl FdtdSolver {
    pub fn new(desc: FdtdSolverDescriptor) -> Result<Self, Error> {
        let npoints = desc.npoints;
        if npoints < 3 {
            return Err(Error::GridTooSmall { npoints });
        }
        if desc.injection_node == 0 || desc.injection_node > npoints - 2 {
            return Err(Error::BadInjectionNode { node: desc.injection_node, npoints });
        }

        // source and medium must agree on the grid they were built for
        let mut cell_size = desc.source.cell_size();
        let coefficients = match desc.medium {
            Some(medium) => {
                if let Some(source_cell_size) = cell_size {
                    check_cell_size("medium", medium.cell_size(), source_cell_size)?;
                }
                cell_size = cell_size.or(medium.cell_size());
                medium.coefficients(npoints)?
            }
            None => Coefficients::vacuum(npoints),
        };
        coefficients.check_len(npoints)?;

        tracing::debug!(npoints, injection_node = desc.injection_node, "built FDTD solver");

        Ok(Self {
            npoints,
            source: desc.source,
            coefficients,
            injection_node: desc.injection_node,
            cell_size,
        })
    }

    #[inline]
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    #[inline]
    pub fn injection_node(&self) -> usize {
        self.injection_node
    }

    /// Advances `state` by a single time step.
    fn step(&self, state: &mut SimulationState) {
        let t = state.time_step + 1;

        self.update_ex(&mut state.ex, &state.hy);
        state.ex[self.injection_node] += self.source.excitation(t);
        absorb(state);
        update_hy(&mut state.hy, &state.ex);

        state.time_step = t;
    }

    /// Updates interior `Ex` nodes from the surrounding `Hy` nodes.
    fn update_ex(&self, ex: &mut Array1<f64>, hy: &Array1<f64>) {
        let n = self.npoints;
        Zip::from(ex.slice_mut(s![1..(n - 1)]))
            .and(self.coefficients.ca.slice(s![1..(n - 1)]))
            .and(self.coefficients.cb.slice(s![1..(n - 1)]))
            .and(hy.slice(s![0..(n - 1)]).windows(2))
            .for_each(|e, &ca, &cb, h| {
                *e = ca * *e + cb * (h[0] - h[1]);
            });
    }
}

/// Sets both boundary `Ex` nodes from their neighbours two steps back.
fn absorb(state: &mut SimulationState) {
    let n = state.ex.len();
    state.ex[0] = state.low_boundary.exchange(state.ex[1]);
    state.ex[n - 1] = state.high_boundary.exchange(state.ex[n - 2]);
}

/// Updates `Hy` from the `Ex` nodes on either side; the last node is never driven.
fn update_hy(hy: &mut Array1<f64>, ex: &Array1<f64>) {
    let n = hy.len();
    Zip::from(hy.slice_mut(s![0..(n - 1)]))
        .and(ex.windows(2))
        .for_each(|h, e| {
            *h += COURANT_NUMBER * (e[0] - e[1]);
        });
}

impl Solver for FdtdSolver {
    fn compute(&mut self, desc: ComputeDescriptor) -> Result<History, Error> {
        let state = desc.state;
        for (array_name, array) in [("Ex", &state.ex), ("Hy", &state.hy)] {
            if array.len() != self.npoints {
                return Err(Error::BadInit {
                    array_name: array_name.to_string(),
                    input_length: array.len(),
                    expected_length: self.npoints,
                });
            }
        }

        let mut history = History::new(self.npoints, state.time_step + 1);
        tracing::debug!(first_step = history.first_step(), nsteps = desc.nsteps, "computing");

        // loop through time
        for _ in 0..desc.nsteps {
            self.step(state);
            history.push(state.ex.view(), state.hy.view())?;

            if let Some(ref bar) = desc.bar {
                bar.inc(1)
            }
        }

        Ok(history)
    }

    #[inline]
    fn npoints(&self) -> usize {
        self.npoints
    }

    #[inline]
    fn cell_size(&self) -> Option<f64> {
        self.cell_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fdtd::components::{GaussianPulse, LossyDielectric, Sinusoid};

    fn solver(npoints: usize, source: Box<dyn Source>) -> FdtdSolver {
        FdtdSolver::new(FdtdSolverDescriptor::new(npoints, source)).unwrap()
    }

    fn run(solver: &mut FdtdSolver, state: &mut SimulationState, nsteps: usize) -> History {
        solver.compute(ComputeDescriptor { state, nsteps, bar: &None }).unwrap()
    }

    #[test]
    fn rejects_small_grids() {
        for npoints in 0..3 {
            let result = FdtdSolver::new(FdtdSolverDescriptor::new(npoints, Box::new(|_: usize| 1.0)));
            assert!(matches!(result, Err(Error::GridTooSmall { .. })));
        }
        assert!(FdtdSolver::new(FdtdSolverDescriptor::new(3, Box::new(|_: usize| 1.0))).is_ok());
    }

    #[test]
    fn rejects_boundary_injection() {
        for node in [0, 9, 10, 50] {
            let result = FdtdSolver::new(FdtdSolverDescriptor {
                injection_node: node,
                ..FdtdSolverDescriptor::new(10, Box::new(|_: usize| 1.0))
            });
            assert!(matches!(result, Err(Error::BadInjectionNode { .. })));
        }
    }

    #[test]
    fn rejects_mismatched_medium() {
        let result = FdtdSolver::new(FdtdSolverDescriptor {
            medium: Some(Box::new(Coefficients::vacuum(12))),
            ..FdtdSolverDescriptor::new(10, Box::new(|_: usize| 1.0))
        });
        assert!(matches!(result, Err(Error::BadInit { .. })));

        let result = FdtdSolver::new(FdtdSolverDescriptor {
            medium: Some(Box::new(LossyDielectric { epsr: -1.0, ..Default::default() })),
            ..FdtdSolverDescriptor::new(10, Box::new(|_: usize| 1.0))
        });
        assert!(matches!(result, Err(Error::BadPermittivity(_))));
    }

    #[test]
    fn source_and_medium_share_cell_size() {
        let result = FdtdSolver::new(FdtdSolverDescriptor {
            medium: Some(Box::new(LossyDielectric { delta_x: 0.01, ..Default::default() })),
            ..FdtdSolverDescriptor::new(10, Box::new(Sinusoid { delta_x: 0.02, frequency: 700e6 }))
        });
        match result {
            Err(Error::CellSizeMismatch { component, found, expected }) => {
                assert_eq!(component, "medium");
                assert_eq!(found, 0.01);
                assert_eq!(expected, 0.02);
            }
            _ => panic!("expected CellSizeMismatch"),
        }

        let built = FdtdSolver::new(FdtdSolverDescriptor {
            medium: Some(Box::new(LossyDielectric { delta_x: 0.02, ..Default::default() })),
            ..FdtdSolverDescriptor::new(10, Box::new(GaussianPulse::default()))
        })
        .unwrap();
        assert_eq!(built.cell_size(), Some(0.02));
        assert_eq!(solver(10, Box::new(GaussianPulse::default())).cell_size(), None);
    }

    #[test]
    fn rejects_mismatched_state() {
        let mut solver = solver(10, Box::new(|_: usize| 1.0));
        let mut state = SimulationState::zeros(10);
        state.hy = Array1::zeros(9);
        let result = solver.compute(ComputeDescriptor { state: &mut state, nsteps: 1, bar: &None });
        assert!(matches!(
            result,
            Err(Error::BadInit { input_length: 9, expected_length: 10, .. })
        ));
    }

    #[test]
    fn first_step_by_hand() {
        let mut solver = solver(5, Box::new(|_: usize| 1.0));
        let mut state = SimulationState::zeros(5);
        let history = run(&mut solver, &mut state, 1);

        assert_eq!(history.ex().row(0), ndarray::array![0.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(history.hy().row(0), ndarray::array![-0.5, 0.5, 0.0, 0.0, 0.0]);
        assert_eq!(state.time_step, 1);
        assert_eq!(state.low_boundary.memory(), [0.0, 1.0]);
    }

    #[test]
    fn source_is_added_after_ex_update() {
        let mut solver = solver(200, Box::new(GaussianPulse::default()));
        let mut state = SimulationState::zeros(200);
        run(&mut solver, &mut state, 39);

        solver.update_ex(&mut state.ex, &state.hy);
        let before = state.ex[1];
        let mut stepped = SimulationState::zeros(200);
        let history = run(&mut solver, &mut stepped, 40);

        assert_eq!(history.ex()[[39, 1]], before + 1.0);
    }

    #[test]
    fn clock_continues_across_runs() {
        let mut solver = solver(50, Box::new(|t: usize| t as f64));
        let mut state = SimulationState::zeros(50);
        let first = run(&mut solver, &mut state, 3);
        let second = run(&mut solver, &mut state, 2);

        assert_eq!(first.first_step(), 1);
        assert_eq!(second.first_step(), 4);
        assert_eq!(state.time_step, 5);

        let mut whole_state = SimulationState::zeros(50);
        let whole = run(&mut solver, &mut whole_state, 5);
        assert_eq!(whole.ex().row(4), second.ex().row(1));
        assert_eq!(whole.hy().row(4), second.hy().row(1));
    }

    #[test]
    fn last_hy_node_is_undriven() {
        let mut solver = solver(20, Box::new(|_: usize| 1.0));
        let mut state = SimulationState::zeros(20);
        state.hy[19] = 0.25;
        let history = run(&mut solver, &mut state, 100);
        assert!(history.hy().column(19).iter().all(|&h| h == 0.25));
    }

    #[test]
    fn injection_node_is_configurable() {
        let mut solver = FdtdSolver::new(FdtdSolverDescriptor {
            injection_node: 100,
            ..FdtdSolverDescriptor::new(200, Box::new(GaussianPulse::default()))
        })
        .unwrap();
        let mut state = SimulationState::zeros(200);
        let history = run(&mut solver, &mut state, 1);
        let row = history.ex().row(0);
        assert!(row[100] > 0.0);
        assert_eq!(row.iter().filter(|&&e| e != 0.0).count(), 1);
    }
}
