use propsat::cnf::extract::{analyze, CnfViolation};
use propsat::{Atom, Clause, ClauseSet, Formula, FormulaError, Literal};

fn atom(c: char) -> Atom {
    Atom::new(c).expect("atom")
}

fn p(c: char) -> Literal {
    Literal::positive(atom(c))
}

fn n(c: char) -> Literal {
    Literal::negative(atom(c))
}

fn clauses_of(text: &str) -> ClauseSet {
    let analysis = analyze(text);
    assert!(analysis.is_cnf, "{text}: {:?}", analysis.diagnostics);
    analysis.clauses.expect("cnf analysis carries clauses")
}

fn violations_of(text: &str) -> Vec<CnfViolation> {
    let analysis = analyze(text);
    assert!(!analysis.is_cnf, "{text} accepted as cnf");
    assert!(analysis.clauses.is_none());
    analysis.diagnostics
}

#[test]
fn extracts_one_clause_per_span() {
    let set = clauses_of("(A or B) and (not A or C)");
    assert_eq!(
        set,
        ClauseSet::new([Clause::new([p('A'), p('B')]), Clause::new([n('A'), p('C')])])
    );
    assert_eq!(set.to_string(), "{A,B},{-A,C}");
}

#[test]
fn bare_literals_form_unit_clauses() {
    assert_eq!(clauses_of("A and not A").to_string(), "{A},{-A}");
    assert_eq!(clauses_of("A").to_string(), "{A}");
    assert_eq!(clauses_of("not A").to_string(), "{-A}");
    assert_eq!(clauses_of("(A or B) and C").to_string(), "{A,B},{C}");
}

#[test]
fn doubled_outer_parens_are_trimmed() {
    assert_eq!(clauses_of("((A or B))").to_string(), "{A,B}");
    assert_eq!(clauses_of("(A or B)").to_string(), "{A,B}");
}

#[test]
fn duplicate_literals_collapse() {
    assert_eq!(clauses_of("(A or A or B)").to_string(), "{A,B}");
    assert_eq!(clauses_of("(not A or not A)").to_string(), "{-A}");
    assert_eq!(clauses_of("(A or not A)").to_string(), "{A,-A}");
}

#[test]
fn nested_groups_inside_a_span_stay_one_clause() {
    assert_eq!(clauses_of("(A or (B or C))").to_string(), "{A,B,C}");
}

#[test]
fn implies_and_equivalent_are_rejected() {
    let diags = violations_of("A implies B");
    assert!(diags.contains(&CnfViolation::ForbiddenConnective("implies".into())));
    let diags = violations_of("(A) equivalent (B)");
    assert!(diags.contains(&CnfViolation::ForbiddenConnective("equivalent".into())));
}

#[test]
fn or_between_clauses_is_rejected() {
    assert_eq!(
        violations_of("(A or B) or (C)"),
        vec![CnfViolation::OrBetweenClauses, CnfViolation::MissingAnd]
    );
    assert!(violations_of("A or B").contains(&CnfViolation::OrBetweenClauses));
}

#[test]
fn and_inside_clause_is_rejected() {
    assert_eq!(
        violations_of("(A and B)"),
        vec![CnfViolation::ConnectiveInsideClause("and".into())]
    );
}

#[test]
fn not_must_precede_an_atom() {
    assert_eq!(
        violations_of("not (A or B)"),
        vec![CnfViolation::NotWithoutAtom("(A".into())]
    );
    assert_eq!(
        violations_of("(not not A)"),
        vec![CnfViolation::NotWithoutAtom("not".into())]
    );
    assert_eq!(violations_of("A and not"), vec![CnfViolation::TrailingNot]);
}

#[test]
fn every_violation_is_listed() {
    let diags = violations_of("(A and B) or (C implies D)");
    assert_eq!(
        diags,
        vec![
            CnfViolation::ConnectiveInsideClause("and".into()),
            CnfViolation::OrBetweenClauses,
            CnfViolation::MissingAnd,
            CnfViolation::ForbiddenConnective("implies".into()),
            CnfViolation::ConnectiveInsideClause("implies".into()),
        ]
    );
}

#[test]
fn structural_errors() {
    assert!(violations_of("(A or B").contains(&CnfViolation::UnbalancedParens));
    assert!(violations_of("A or B)").contains(&CnfViolation::UnbalancedParens));
    assert!(violations_of("and (A)").contains(&CnfViolation::MisplacedAnd));
    assert!(violations_of("(A) and").contains(&CnfViolation::MisplacedAnd));
    assert!(violations_of("(A) (B)").contains(&CnfViolation::MissingAnd));
    assert_eq!(violations_of(""), vec![CnfViolation::NoClauses]);
}

#[test]
fn temporal_words_are_not_cnf() {
    assert!(violations_of("(always A)").contains(&CnfViolation::UnexpectedWord("always".into())));
}

#[test]
fn analysis_converts_into_result() {
    let set = analyze("(A or B)").into_result().expect("cnf");
    assert_eq!(set.len(), 1);
    match analyze("A implies B").into_result() {
        Err(FormulaError::NotCnf(diags)) => assert!(!diags.is_empty()),
        other => panic!("expected NotCnf, got {other:?}"),
    }
}

#[test]
fn formula_pipeline_tags_each_stage() {
    match Formula::parse("A B") {
        Err(FormulaError::MalformedSyntax(diags)) => assert_eq!(diags.len(), 1),
        other => panic!("expected MalformedSyntax, got {other:?}"),
    }
    assert_eq!(Formula::parse("").err(), Some(FormulaError::Empty));

    let temporal = Formula::parse("always A implies A").expect("valid syntax");
    assert!(!temporal.is_propositional());
    assert_eq!(
        temporal.clause_set().err(),
        Some(FormulaError::NotPropositional {
            words: vec!["always".into()]
        })
    );

    let implication = Formula::parse("A implies B").expect("valid syntax");
    assert!(implication.is_propositional());
    assert!(!implication.is_cnf());
    assert!(matches!(
        implication.clause_set(),
        Err(FormulaError::NotCnf(_))
    ));
}

#[test]
fn formula_caches_its_analysis() {
    let f: Formula = "((A or B) and (C))".parse().expect("formula");
    assert_eq!(f.text(), "(A or B) and (C)");
    let first = f.analyze_cnf().expect("propositional");
    let second = f.analyze_cnf().expect("propositional");
    assert!(std::ptr::eq(first, second));
    assert_eq!(f.clause_set().expect("cnf").to_string(), "{A,B},{C}");
}

#[test]
fn atoms_follow_first_appearance() {
    let set = clauses_of("(C or not A) and (B or C) and (not D)");
    let atoms = set.atoms().into_iter().map(Atom::name).collect::<String>();
    assert_eq!(atoms, "CABD");
}

#[test]
fn doubled_parens_on_first_clause_break_after_trimming() {
    let formula: Formula = "((A or B)) and (C)".parse().expect("valid syntax");
    assert!(!formula.is_cnf());
    match formula.clause_set() {
        Err(FormulaError::NotCnf(v)) => assert!(v.contains(&CnfViolation::UnbalancedParens)),
        other => panic!("expected NotCnf, got {other:?}"),
    }
}

#[test]
fn detached_parens_are_not_clause_syntax() {
    let v = violations_of("( A )");
    assert!(v.contains(&CnfViolation::UnexpectedWord("(".into())));
    assert!(v.contains(&CnfViolation::UnexpectedWord(")".into())));
    assert!(!v.contains(&CnfViolation::UnbalancedParens));
}
