use indexmap::IndexMap;
use log::{debug, trace};

use super::enumerate::BitVectorSpace;
use super::interpretation::Interpretation;
use crate::cnf::cnf::{Atom, ClauseSet};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BruteForceOutcome {
    /// First satisfying vector found, `None` when every candidate failed.
    pub vector: Option<u32>,
    pub visited: u64,
}

impl BruteForceOutcome {
    pub fn is_sat(&self) -> bool {
        self.vector.is_some()
    }

    /// The vector as an integer, `-1` when unsatisfiable.
    pub fn code(&self) -> i64 {
        self.vector.map_or(-1, i64::from)
    }

    pub fn interpretation(&self, space: &BitVectorSpace) -> Option<Interpretation> {
        self.vector
            .map(|v| Interpretation::from_vector(&space.atoms, v))
    }
}

/// Tests every vector from all-ones down to zero inclusive.
pub fn brute_force(clauses: &ClauseSet, space: &BitVectorSpace) -> Result<BruteForceOutcome> {
    let start = space.low_word()?;
    debug!(
        "brute force over {} atoms, {} clauses",
        space.num_atoms(),
        clauses.len()
    );

    let mut visited = 0u64;
    for vector in (0..=start).rev() {
        visited += 1;
        let interp = Interpretation::from_vector(&space.atoms, vector);
        if interp.satisfies(clauses) {
            debug!("brute force: sat at {:#b} after {} candidates", vector, visited);
            return Ok(BruteForceOutcome {
                vector: Some(vector),
                visited,
            });
        }
    }

    debug!("brute force: unsat after {} candidates", visited);
    Ok(BruteForceOutcome {
        vector: None,
        visited,
    })
}

/// Atom values forced by unit clauses. A later unit overrides an earlier one
/// on the same atom.
pub fn forced_units(clauses: &ClauseSet) -> IndexMap<Atom, bool> {
    let mut forced = IndexMap::new();
    for lit in clauses.unit_literals() {
        forced.insert(lit.atom, !lit.negated);
    }
    forced
}

/// Forced-false bits are cleared and forced-true bits set before enumeration;
/// only the remaining free bits are counted down, so at most
/// `2^(n - forced)` candidates are tested.
pub fn brute_force_unit(
    clauses: &ClauseSet,
    space: &BitVectorSpace,
) -> Result<BruteForceOutcome> {
    // capacity check only; the free bits are enumerated separately
    space.low_word()?;
    let forced = forced_units(clauses);

    let mut fixed_true = 0u32;
    let mut fixed_false = 0u32;
    let mut free_bits = Vec::with_capacity(space.num_atoms());
    for (bit, atom) in space.atoms.iter().enumerate() {
        match forced.get(atom) {
            Some(true) => fixed_true |= 1 << bit,
            Some(false) => fixed_false |= 1 << bit,
            None => free_bits.push(bit),
        }
    }
    debug!(
        "brute force with units: {} forced (true {:#b}, false {:#b}), {} free",
        forced.len(),
        fixed_true,
        fixed_false,
        free_bits.len()
    );

    let free_start = (1u32 << free_bits.len()) - 1;
    let mut visited = 0u64;
    for counter in (0..=free_start).rev() {
        visited += 1;
        let vector = scatter(counter, &free_bits) | fixed_true;
        trace!("candidate {:#b}", vector);
        let interp = Interpretation::from_vector(&space.atoms, vector);
        if interp.satisfies(clauses) {
            debug!(
                "brute force with units: sat at {:#b} after {} candidates",
                vector, visited
            );
            return Ok(BruteForceOutcome {
                vector: Some(vector),
                visited,
            });
        }
    }

    debug!("brute force with units: unsat after {} candidates", visited);
    Ok(BruteForceOutcome {
        vector: None,
        visited,
    })
}

fn scatter(counter: u32, bits: &[usize]) -> u32 {
    bits.iter()
        .enumerate()
        .filter(|(i, _)| (counter >> i) & 1 == 1)
        .fold(0u32, |acc, (_, &b)| acc | (1 << b))
}
