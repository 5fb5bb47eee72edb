use crate::cnf::cnf::ClauseSet;
use crate::error::Result;
use crate::sat::brute::{brute_force, brute_force_unit};
use crate::sat::enumerate::enumerate;
use crate::sat::interpretation::Interpretation;
use crate::solver::{SolveResult, Solver, SolverStats};

#[derive(Debug, Clone)]
pub struct BruteForceBackend {
    use_units: bool,
    last_vector: Option<u32>,
    last_model: Option<Interpretation>,
    stats: SolverStats,
}

impl BruteForceBackend {
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn with_units() -> Self {
        Self::new(true)
    }

    fn new(use_units: bool) -> Self {
        Self {
            use_units,
            last_vector: None,
            last_model: None,
            stats: SolverStats::default(),
        }
    }
}

impl Solver for BruteForceBackend {
    fn solve(&mut self, clauses: &ClauseSet) -> Result<SolveResult> {
        self.stats.solve_calls += 1;
        self.last_vector = None;
        self.last_model = None;

        let space = enumerate(&clauses.atoms());
        let outcome = if self.use_units {
            brute_force_unit(clauses, &space)?
        } else {
            brute_force(clauses, &space)?
        };
        self.stats.candidates += outcome.visited;
        self.last_vector = outcome.vector;
        self.last_model = outcome.interpretation(&space);
        Ok(if outcome.is_sat() {
            SolveResult::Sat
        } else {
            SolveResult::Unsat
        })
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
        if self.use_units {
            "brute-force-unit"
        } else {
            "brute-force"
        }
    }
}
