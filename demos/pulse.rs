use fd1d::prelude::*;
use fd1d::fdtd::*;

use std::time::Duration;

fn main() {
    tracing_subscriber::fmt::init();

    let npoints = fd1d::DEFAULT_NPOINTS;
    let sim_params = SimulationParameters::from_cell_size(0.01);

    // a 700 MHz wave hitting a lossy dielectric half-space
    let solver = FdtdSolver::new(FdtdSolverDescriptor {
        npoints,
        source: Box::new(components::Sinusoid { delta_x: sim_params.delta_x, frequency: 700e6 }),
        medium: Some(Box::new(components::LossyDielectric {
            epsr: 4.0,
            sigma: 0.04,
            delta_x: sim_params.delta_x,
        })),
        injection_node: 1,
    })
    .unwrap();
    let profile = solver.coefficients().material_profile();

    let mut simulation = Simulation::new(SimulationDescriptor {
        solver,
        sim_params,
        init_state: None,
    })
    .unwrap();

    println!(
        "\n-- General Simulation Info --\n\
        # of points:  {}\n\
        Δx:           {:<9.2e} m\n\
        Δt:           {:<9.2e} s\n",
        npoints,
        sim_params.delta_x,
        sim_params.delta_t,
    );

    let history = simulation.run(RunDescriptor { verbose: true, ..Default::default() }).unwrap();
    let interface = profile.iter().position(|&p| p > -1.5).unwrap_or(npoints);
    println!("dielectric starts at node {}", interface);

    // stand-in for a renderer ticking every 50 ms
    let viewport = history.viewport();
    let mut playback = history.playback();
    while let Some(frame) = playback.next_frame() {
        if frame.step % 50 == 0 {
            println!("step {:>4}: {}", frame.step, sparkline(frame.ex, viewport.y));
            std::thread::sleep(Duration::from_millis(50));
        }
    }
}

/// Draws one row of field values as a line of characters.
fn sparkline(values: ndarray::ArrayView1<f64>, range: (f64, f64)) -> String {
    const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    values
        .iter()
        .step_by(2)
        .map(|&v| {
            let level = ((v - range.0) / (range.1 - range.0) * 7.0).round();
            LEVELS[level.clamp(0.0, 7.0) as usize]
        })
        .collect()
}
