#![cfg(feature = "tptp")]

use proplog::role::{falsum, verum, Problem, RoleMap};
use proplog::szs::NoSuccessKind;
use proplog::{check, tptp, Formula};

fn at(name: &str) -> Formula {
    Formula::atom(name)
}

fn parse(input: &str) -> Result<Problem, NoSuccessKind> {
    let mut forms = RoleMap::default();
    tptp::parse(input.as_bytes(), &mut forms, |_, _| Err(NoSuccessKind::InputError))?;
    forms.join().map_err(|_| NoSuccessKind::SyntaxError)
}

#[test]
fn modus_ponens() {
    let input = "
        fof(pq, axiom, p => q).
        fof(p, axiom, p).
        fof(q, conjecture, q).
    ";
    let problem = parse(input).unwrap();
    assert_eq!(problem.kb, [Formula::imp(at("p"), at("q")), at("p")]);
    assert_eq!(problem.query, Some(at("q")));
    assert_eq!(check::entails(&problem.kb, &problem.goal()), Ok(true));
}

#[test]
fn connectives() {
    let input = "
        fof(a1, axiom, (p <=> q) & ~r).
        fof(a2, axiom, p <~> q).
        fof(a3, axiom, p <= q).
        fof(a4, axiom, $true | $false).
    ";
    let (p, q, r) = (at("p"), at("q"), at("r"));
    let problem = parse(input).unwrap();
    let expected = [
        Formula::iff(p.clone(), q.clone()) & -r,
        Formula::xor(p.clone(), q.clone()),
        Formula::imp(q, p),
        verum() | falsum(),
    ];
    assert_eq!(problem.kb, expected);
    assert_eq!(problem.query, None);
}

#[test]
fn clauses() {
    let input = "
        cnf(c1, axiom, p | ~q).
        cnf(c2, negated_conjecture, q).
        cnf(c3, negated_conjecture, ~p).
    ";
    let problem = parse(input).unwrap();
    assert_eq!(problem.kb, [at("p") | -at("q"), at("q"), -at("p")]);
    // without conjecture, the goal is falsity
    assert_eq!(problem.goal(), falsum());
    assert_eq!(check::entails(&problem.kb, &problem.goal()), Ok(true));
}

#[test]
fn inappropriate() {
    let quantified = "fof(a, axiom, ![X]: p(X)).";
    assert_eq!(parse(quantified), Err(NoSuccessKind::Inappropriate));
    let arguments = "fof(a, axiom, p(c)).";
    assert_eq!(parse(arguments), Err(NoSuccessKind::Inappropriate));
    let equality = "cnf(a, axiom, c = d).";
    assert_eq!(parse(equality), Err(NoSuccessKind::Inappropriate));
    let typed = "tff(a, axiom, p).";
    assert_eq!(parse(typed), Err(NoSuccessKind::Inappropriate));
}

#[test]
fn syntax_error() {
    assert_eq!(parse("fof(a, axiom, p &)."), Err(NoSuccessKind::SyntaxError));
}
