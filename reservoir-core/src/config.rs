use crate::error::ConfigError;

/// Parameters of one simulation run.
///
/// Both axes share the spacing `dx`; cells are assumed square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub nx: usize,
    pub ny: usize,
    pub dx: f64,
    pub dt: f64,
    pub alpha: f64,
    pub nsteps: usize,
    pub injection_rate: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            nx: 50,
            ny: 50,
            dx: 1.0,
            dt: 0.2,
            alpha: 0.1,
            nsteps: 200,
            injection_rate: 0.0,
        }
    }
}

impl SolverConfig {
    // ---- Builders ----

    pub fn with_grid(mut self, nx: usize, ny: usize) -> Self {
        self.nx = nx;
        self.ny = ny;
        self
    }

    pub fn with_dx(mut self, dx: f64) -> Self {
        self.dx = dx;
        self
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_nsteps(mut self, nsteps: usize) -> Self {
        self.nsteps = nsteps;
        self
    }

    pub fn with_injection_rate(mut self, rate: f64) -> Self {
        self.injection_rate = rate;
        self
    }

    // ---- Derived quantities ----

    /// `alpha * dt / dx^2`. The 5-point explicit update stays a convex
    /// combination of neighbours while this is <= [`STABILITY_LIMIT`].
    pub fn stability_number(&self) -> f64 {
        self.alpha * self.dt / (self.dx * self.dx)
    }

    pub fn is_stable(&self) -> bool {
        self.stability_number() <= STABILITY_LIMIT
    }

    /// Cell receiving the injection source.
    pub fn center(&self) -> (usize, usize) {
        (self.nx / 2, self.ny / 2)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nx < 3 || self.ny < 3 {
            return Err(ConfigError::GridTooSmall {
                nx: self.nx,
                ny: self.ny,
            });
        }
        // NaN fails the comparison and is rejected with the negatives.
        if !(self.injection_rate >= 0.0) || self.injection_rate.is_infinite() {
            return Err(ConfigError::NegativeInjection(self.injection_rate));
        }
        if !(self.dx.is_finite() && self.dx > 0.0) {
            return Err(ConfigError::InvalidSpacing(self.dx));
        }
        for (name, value) in [("dt", self.dt), ("alpha", self.alpha)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

pub const STABILITY_LIMIT: f64 = 0.25;
