pub mod brute;
pub mod dpll;
pub mod enumerate;
pub mod interpretation;

pub use brute::{brute_force, brute_force_unit, BruteForceOutcome};
pub use dpll::{dpll, DpllOutcome};
pub use enumerate::{enumerate, BitVectorSpace, WORD_BITS};
pub use interpretation::{clause_satisfied, Interpretation};
