//! Explicit finite-difference heat diffusion over a 2-D geothermal reservoir
//! cross-section with a point injection source at the center.
//!
//! ```
//! use reservoir_core::{DiffusionSolver, SolverConfig};
//!
//! let config = SolverConfig::default().with_nsteps(20).with_injection_rate(0.5);
//! let solver = DiffusionSolver::new(config)?;
//! let history = solver.compute_history();
//! assert_eq!(history.len(), 21);
//! # Ok::<(), reservoir_core::ConfigError>(())
//! ```

mod config;
mod error;
mod grid;
mod history;
mod input;
mod solver;

pub use config::{STABILITY_LIMIT, SolverConfig};
pub use error::{ConfigError, InputError};
pub use grid::{COLD_EDGE, Grid, HOT_EDGE};
pub use history::{FieldHistory, FrameStats};
pub use input::parse_injection_rate;
pub use solver::{DiffusionSolver, INJECTION_GAIN};
