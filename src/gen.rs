use anyhow::{bail, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cnf::cnf::{Atom, Literal};

pub const ATOM_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub fn atoms(n: usize) -> Result<Vec<Atom>> {
    let available = ATOM_ALPHABET.chars().count();
    if n == 0 {
        bail!("at least one atom is required");
    }
    if n > available {
        bail!("{} atoms requested, only {} names available", n, available);
    }
    Ok(ATOM_ALPHABET.chars().take(n).filter_map(Atom::new).collect())
}

/// `(not A) and (not B) and ...`: satisfied only by the all-false vector, the
/// last candidate plain brute force reaches.
pub fn worst_case(n: usize) -> Result<String> {
    let clauses = atoms(n)?
        .into_iter()
        .map(|a| clause_text(&[Literal::negative(a)]))
        .collect::<Vec<_>>();
    Ok(clauses.join(" and "))
}

/// `(A) and (not A or B) and ... and (not Z)`: unsatisfiable, and every
/// brute-force candidate has to be rejected.
pub fn unsat_chain(n: usize) -> Result<String> {
    let atoms = atoms(n)?;
    let mut clauses = vec![clause_text(&[Literal::positive(atoms[0])])];
    for pair in atoms.windows(2) {
        clauses.push(clause_text(&[
            Literal::negative(pair[0]),
            Literal::positive(pair[1]),
        ]));
    }
    clauses.push(clause_text(&[Literal::negative(atoms[n - 1])]));
    Ok(clauses.join(" and "))
}

pub fn random_3sat(n: usize, num_clauses: usize, seed: u64) -> Result<String> {
    if num_clauses == 0 {
        bail!("at least one clause is required");
    }
    let atoms = atoms(n)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let clauses = (0..num_clauses)
        .map(|_| {
            let lits = (0..3)
                .map(|_| {
                    let atom = atoms[rng.random_range(0..atoms.len())];
                    if rng.random::<bool>() {
                        Literal::positive(atom)
                    } else {
                        Literal::negative(atom)
                    }
                })
                .collect::<Vec<_>>();
            clause_text(&lits)
        })
        .collect::<Vec<_>>();
    Ok(clauses.join(" and "))
}

pub fn clause_text(lits: &[Literal]) -> String {
    let body = lits
        .iter()
        .map(|l| {
            if l.negated {
                format!("not {}", l.atom)
            } else {
                l.atom.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" or ");
    format!("({})", body)
}
