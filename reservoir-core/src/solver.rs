use crate::config::SolverConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::history::FieldHistory;

/// Temperature added at the center cell per unit of injection rate, per step.
pub const INJECTION_GAIN: f64 = 5.0;

/// Explicit finite-difference heat solver for the reservoir cross-section.
///
/// Holds a validated configuration and the initial field. The initial field
/// is never mutated; every call to [`compute_history`](Self::compute_history)
/// starts from it again.
#[derive(Debug, Clone)]
pub struct DiffusionSolver {
    config: SolverConfig,
    initial: Grid,
}

impl DiffusionSolver {
    pub fn new(config: SolverConfig) -> Result<DiffusionSolver, ConfigError> {
        config.validate()?;

        if !config.is_stable() {
            log::warn!(
                "stability number {:.4} exceeds {}; explicit update may oscillate",
                config.stability_number(),
                crate::config::STABILITY_LIMIT
            );
        }
        log::debug!(
            "solver {}x{} dx={} dt={} alpha={} nsteps={} injection={}",
            config.nx,
            config.ny,
            config.dx,
            config.dt,
            config.alpha,
            config.nsteps,
            config.injection_rate
        );

        Ok(DiffusionSolver {
            initial: Grid::reservoir_initial(config.nx, config.ny),
            config,
        })
    }

    /// Same configuration with a different injection rate, built from scratch.
    pub fn with_injection_rate(&self, rate: f64) -> Result<DiffusionSolver, ConfigError> {
        DiffusionSolver::new(self.config.with_injection_rate(rate))
    }

    // ---- Accessors ----

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn initial_grid(&self) -> &Grid {
        &self.initial
    }

    // ---- Core ----

    /// Runs all `nsteps` and returns `nsteps + 1` snapshots, the first being
    /// the initial grid.
    pub fn compute_history(&self) -> FieldHistory {
        let mut frames = Vec::with_capacity(self.config.nsteps + 1);
        frames.push(self.initial.clone());

        // Boundary cells are never written, so both buffers keep them.
        let mut field = self.initial.clone();
        let mut next = self.initial.clone();

        for _ in 0..self.config.nsteps {
            self.explicit_step(field.as_slice(), next.as_mut_slice());
            next[self.config.center()] += self.config.injection_rate * INJECTION_GAIN;

            std::mem::swap(&mut field, &mut next);
            frames.push(field.clone());
        }

        log::debug!("computed {} frames", frames.len());
        FieldHistory::from_frames(frames)
    }

    // ---- Internal numeric routines ----

    /// 5-point stencil over interior cells, reading only `field`. Both second
    /// derivatives divide by `dx^2`.
    fn explicit_step(&self, field: &[f64], next: &mut [f64]) {
        let SolverConfig {
            nx, ny, dx, dt, alpha, ..
        } = self.config;
        let dx2 = dx * dx;

        for i in 1..(nx - 1) {
            let row = i * ny;
            for j in 1..(ny - 1) {
                let k = row + j;

                let u = field[k];
                let up = field[k - ny];
                let down = field[k + ny];
                let left = field[k - 1];
                let right = field[k + 1];

                let d2x = (down - 2.0 * u + up) / dx2;
                let d2y = (right - 2.0 * u + left) / dx2;
                next[k] = u + alpha * dt * (d2x + d2y);
            }
        }
    }
}
