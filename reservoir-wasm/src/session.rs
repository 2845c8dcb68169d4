use crate::playback::Playback;
use reservoir_core::{
    ConfigError, DiffusionSolver, FieldHistory, Grid, InputError, SolverConfig,
    parse_injection_rate,
};

#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    #[error("invalid injection rate: {0}")]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The active solver, its computed history and the frame cursor.
///
/// A failed re-parameterization leaves all three untouched.
pub struct Session {
    solver: DiffusionSolver,
    history: FieldHistory,
    playback: Playback,
}

impl Session {
    pub fn new(config: SolverConfig) -> Result<Session, ConfigError> {
        let solver = DiffusionSolver::new(config)?;
        let history = solver.compute_history();
        Ok(Session {
            playback: Playback::new(history.len()),
            solver,
            history,
        })
    }

    /// Parses `text`, rebuilds the solver with that rate and recomputes the
    /// whole history. Returns the accepted rate.
    pub fn apply_injection(&mut self, text: &str) -> Result<f64, ApplyError> {
        let rate = parse_injection_rate(text)?;
        let solver = self.solver.with_injection_rate(rate)?;

        self.history = solver.compute_history();
        self.solver = solver;
        self.playback.reload(self.history.len());
        Ok(rate)
    }

    pub fn injection_rate(&self) -> f64 {
        self.solver.config().injection_rate
    }

    pub fn config(&self) -> &SolverConfig {
        self.solver.config()
    }

    pub fn history(&self) -> &FieldHistory {
        &self.history
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut Playback {
        &mut self.playback
    }

    pub fn current_frame(&self) -> Option<&Grid> {
        self.history.get(self.playback.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Session {
        Session::new(SolverConfig::default().with_grid(9, 9).with_nsteps(10)).unwrap()
    }

    #[test]
    fn starts_on_first_frame() {
        let s = small();
        assert_eq!(s.playback().len(), 11);
        assert_eq!(s.current_frame(), s.history().first());
        assert_eq!(s.injection_rate(), 0.0);
    }

    #[test]
    fn apply_recomputes_and_rewinds() {
        let mut s = small();
        s.playback_mut().seek(6);
        let before = s.history().frames()[1][(4, 4)];

        assert_eq!(s.apply_injection(" 2.0 ").unwrap(), 2.0);
        assert_eq!(s.injection_rate(), 2.0);
        assert_eq!(s.playback().current(), 0);
        assert!(s.history().frames()[1][(4, 4)] > before);
    }

    #[test]
    fn failed_apply_keeps_previous_history() {
        let mut s = small();
        s.apply_injection("1.0").unwrap();
        s.playback_mut().seek(3);
        let kept = s.history().clone();

        assert!(matches!(
            s.apply_injection("hot"),
            Err(ApplyError::Input(InputError::Parse { .. }))
        ));
        assert!(matches!(
            s.apply_injection("-0.5"),
            Err(ApplyError::Input(InputError::Negative(_)))
        ));
        assert_eq!(s.history(), &kept);
        assert_eq!(s.injection_rate(), 1.0);
        assert_eq!(s.playback().current(), 3);
    }
}
