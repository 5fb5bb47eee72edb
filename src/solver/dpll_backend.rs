use crate::cnf::cnf::ClauseSet;
use crate::error::Result;
use crate::sat::dpll::{dpll_with_stats, DpllOutcome};
use crate::sat::interpretation::Interpretation;
use crate::solver::{SolveResult, Solver, SolverStats};

#[derive(Debug, Clone, Default)]
pub struct DpllBackend {
    last_model: Option<Interpretation>,
    last_vector: Option<u32>,
    stats: SolverStats,
}

impl DpllBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for DpllBackend {
    fn solve(&mut self, clauses: &ClauseSet) -> Result<SolveResult> {
        self.stats.solve_calls += 1;
        let (outcome, run) = dpll_with_stats(clauses);
        self.stats.decisions += run.decisions;
        self.stats.propagations += run.propagations;
        self.stats.pure_literals += run.pure_literals;
        self.stats.conflicts += run.conflicts;

        match outcome {
            DpllOutcome::Sat(model) => {
                // wider witnesses have no single-word encoding
                self.last_vector = model.to_vector(&clauses.atoms()).ok();
                self.last_model = Some(model);
                Ok(SolveResult::Sat)
            }
            DpllOutcome::Unsat => {
                self.last_vector = None;
                self.last_model = None;
                Ok(SolveResult::Unsat)
            }
        }
    }

    fn model(&self) -> Option<&Interpretation> {
        self.last_model.as_ref()
    }

    fn model_vector(&self) -> Option<u32> {
        self.last_vector
    }

    fn stats(&self) -> SolverStats {
        self.stats
    }

    fn backend_name(&self) -> &'static str {
        "dpll"
    }
}
