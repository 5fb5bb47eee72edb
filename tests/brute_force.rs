use propsat::gen;
use propsat::sat::brute::{brute_force, brute_force_unit, forced_units};
use propsat::sat::enumerate::{enumerate, WORD_BITS};
use propsat::{Atom, Clause, ClauseSet, Formula, FormulaError, Literal};

fn clauses(text: &str) -> ClauseSet {
    Formula::parse(text)
        .expect("formula")
        .clause_set()
        .expect("cnf")
        .clone()
}

#[test]
fn enumeration_starts_at_all_ones() {
    let set = clauses("(A or B) and (C)");
    let space = enumerate(&set.atoms());
    assert_eq!(space.words, vec![0b111]);
    assert_eq!(space.low_word().expect("fits"), 0b111);
    assert_eq!(space.bit_of(Atom::new('C').expect("atom")), Some(2));
}

#[test]
fn full_words_have_no_trailing_padding() {
    let atoms: indexmap::IndexSet<Atom> = gen::atoms(31).expect("atoms").into_iter().collect();
    let space = enumerate(&atoms);
    assert_eq!(space.words, vec![0x7fff_ffff]);
    assert_eq!(space.low_word().expect("fits"), 0x7fff_ffff);

    let atoms: indexmap::IndexSet<Atom> = gen::atoms(62).expect("atoms").into_iter().collect();
    assert_eq!(enumerate(&atoms).words, vec![0x7fff_ffff, 0x7fff_ffff]);
}

#[test]
fn enumeration_spills_into_more_words() {
    let atoms: indexmap::IndexSet<Atom> = gen::atoms(33).expect("atoms").into_iter().collect();
    let space = enumerate(&atoms);
    assert_eq!(space.words, vec![0x7fff_ffff, 0b11]);
    assert!(!space.fits_one_word());
    assert_eq!(
        space.low_word(),
        Err(FormulaError::CapacityExceeded {
            atoms: 33,
            limit: WORD_BITS
        })
    );
}

#[test]
fn first_candidate_is_all_true() {
    let set = clauses("(A or B)");
    let space = enumerate(&set.atoms());
    let out = brute_force(&set, &space).expect("within capacity");
    assert_eq!(out.vector, Some(0b11));
    assert_eq!(out.visited, 1);
    assert_eq!(out.code(), 3);
}

#[test]
fn all_false_vector_is_tried() {
    let set = clauses(&gen::worst_case(3).expect("formula"));
    let space = enumerate(&set.atoms());
    let out = brute_force(&set, &space).expect("within capacity");
    assert_eq!(out.vector, Some(0));
    assert_eq!(out.visited, 8);

    let interp = out.interpretation(&space).expect("sat");
    assert!(interp.iter().all(|(_, v)| !v));
}

#[test]
fn unsat_returns_sentinel() {
    let set = clauses("A and not A");
    let space = enumerate(&set.atoms());
    let out = brute_force(&set, &space).expect("within capacity");
    assert_eq!(out.vector, None);
    assert_eq!(out.code(), -1);
    assert_eq!(out.visited, 2);

    let unit = brute_force_unit(&set, &space).expect("within capacity");
    assert_eq!(unit.code(), -1);
    assert_eq!(unit.visited, 1);
}

#[test]
fn unit_clauses_prune_the_search() {
    let set = clauses("(A) and (B or C) and (not C)");
    let space = enumerate(&set.atoms());

    let forced = forced_units(&set);
    assert_eq!(forced.len(), 2);

    let plain = brute_force(&set, &space).expect("within capacity");
    let unit = brute_force_unit(&set, &space).expect("within capacity");
    assert_eq!(plain.vector, Some(0b011));
    assert_eq!(plain.visited, 5);
    assert_eq!(unit.vector, Some(0b011));
    assert_eq!(unit.visited, 1);
}

#[test]
fn forced_atoms_only_unit_search_visits_once() {
    let set = clauses(&gen::worst_case(5).expect("formula"));
    let space = enumerate(&set.atoms());
    let unit = brute_force_unit(&set, &space).expect("within capacity");
    assert_eq!(unit.vector, Some(0));
    assert_eq!(unit.visited, 1);
}

#[test]
fn empty_clause_set_is_satisfiable() {
    let set = ClauseSet::default();
    let space = enumerate(&set.atoms());
    assert_eq!(brute_force(&set, &space).expect("ok").vector, Some(0));
    assert_eq!(brute_force_unit(&set, &space).expect("ok").vector, Some(0));
}

#[test]
fn empty_clause_is_unsatisfiable() {
    let set = ClauseSet::new([Clause::Empty]);
    let space = enumerate(&set.atoms());
    assert_eq!(brute_force(&set, &space).expect("ok").vector, None);
    assert_eq!(brute_force_unit(&set, &space).expect("ok").vector, None);
}

#[test]
fn too_many_atoms_is_a_capacity_error() {
    let set = ClauseSet::new(
        gen::atoms(32)
            .expect("atoms")
            .into_iter()
            .map(|a| Clause::unit(Literal::positive(a))),
    );
    let space = enumerate(&set.atoms());
    for result in [brute_force(&set, &space), brute_force_unit(&set, &space)] {
        assert_eq!(
            result,
            Err(FormulaError::CapacityExceeded {
                atoms: 32,
                limit: 31
            })
        );
    }
}
