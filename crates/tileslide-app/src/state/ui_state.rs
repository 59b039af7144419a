use tileslide_solver::SolverError;

// UiState holds ephemeral UI-only state (hint, solver feedback, timer clock). It is not persisted.
#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) hint: Option<usize>,
    pub(crate) solver_error: Option<SolverError>,
    pub(crate) last_tick: Option<f64>,
}

impl UiState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn clear_hint(&mut self) {
        self.hint = None;
        self.solver_error = None;
    }
}
