use proplog::check::{self, ModelChecker, Verdict};
use proplog::prover::Outcome;
use proplog::quant::{predicate, Quantifier};
use proplog::resolution::{resolve_pair, Normalizer, Opt, Resolution, Resolvent};
use proplog::{cnf, extract_symbols, prove, refute, Clause, Error, Formula, Model, OpA, ProofResult, Rule};

fn at(name: &str) -> Formula {
    Formula::atom(name)
}

fn model(assignment: &[(&str, bool)]) -> Model {
    assignment.iter().map(|(a, v)| (a.to_string(), *v)).collect()
}

#[test]
fn arity() {
    assert_eq!(Formula::and([]), Err(Error::InvalidArity(OpA::Conj, 0)));
    assert_eq!(Formula::or([]), Err(Error::InvalidArity(OpA::Disj, 0)));
    assert_eq!(Formula::and([at("P")]), Err(Error::InvalidArity(OpA::Conj, 1)));
    assert!(Formula::or([at("P"), at("Q"), at("R")]).is_ok());
}

#[test]
fn evaluate() {
    let (p, q) = (at("P"), at("Q"));
    for (vp, vq) in [(true, true), (true, false), (false, true), (false, false)] {
        let m = model(&[("P", vp), ("Q", vq)]);
        let imp = Formula::imp(p.clone(), q.clone());
        assert_eq!(imp.evaluate(&m), Ok(!vp || vq));
        assert_eq!(Formula::iff(p.clone(), q.clone()).evaluate(&m), Ok(vp == vq));
        assert_eq!(Formula::xor(p.clone(), q.clone()).evaluate(&m), Ok(vp != vq));
        assert_eq!((-p.clone()).evaluate(&m), Ok(!vp));
    }
}

#[test]
fn unknown_symbol() {
    let m = model(&[("P", true)]);
    assert_eq!(at("Z").evaluate(&m), Err(Error::UnknownSymbol("Z".to_string())));
    assert!((at("P") & at("Z")).evaluate(&m).is_err());
    // the first operand decides, so Z is never looked up
    assert_eq!((at("P") | at("Z")).evaluate(&m), Ok(true));
    assert_eq!((-at("P") & at("Z")).evaluate(&m), Ok(false));
}

#[test]
fn symbols() {
    let kb = [at("P") & at("Q"), at("Q") | -at("R")];
    let mut symbols: Vec<_> = extract_symbols(&kb).into_iter().collect();
    symbols.sort();
    assert_eq!(symbols, ["P", "Q", "R"]);
}

#[test]
fn entails() {
    let (p, q) = (at("P"), at("Q"));
    let kb = [Formula::imp(p.clone(), q.clone()), p.clone()];
    assert_eq!(check::entails(&kb, &q), Ok(true));
    assert_eq!(check::entails(&[], &(p.clone() | -p.clone())), Ok(true));
    assert_eq!(check::entails(&[], &p), Ok(false));
    assert_eq!(check::entails(&[q.clone()], &p), Ok(false));
    // an inconsistent knowledge base entails everything
    assert_eq!(check::entails(&[p.clone(), -p.clone()], &q), Ok(true));
    assert_eq!(check::is_tautology(&Formula::iff(p.clone(), p)), Ok(true));
}

#[test]
fn counter_model() {
    let (p, q) = (at("P"), at("Q"));
    let mut checker = ModelChecker::default();
    let counter = checker.counter_model(&[p.clone() | q], &p);
    assert_eq!(counter, Ok(Some(model(&[("P", false), ("Q", true)]))));
    // models are enumerated from all true: TT, TF, FT
    assert_eq!(checker.models(), 3);
}

#[test]
fn satisfiable() {
    let (p, q) = (at("P"), at("Q"));
    let mut checker = ModelChecker::default();
    assert_eq!(checker.satisfiable(&[p.clone(), -p.clone()]), Ok(false));
    let m = checker.model(&[-p, q]);
    assert_eq!(m, Ok(Some(model(&[("P", false), ("Q", true)]))));
}

#[test]
fn classify() {
    let suspects = ["mustard", "plum", "scarlet"].map(at);
    let culprit = Formula::or(suspects.clone()).unwrap();
    let [mustard, plum, scarlet] = suspects;

    let mut checker = ModelChecker::default();
    let kb = [culprit.clone(), -mustard.clone(), -plum.clone()];
    assert_eq!(checker.classify(&kb, &scarlet), Ok(Verdict::Yes));
    assert_eq!(checker.classify(&kb, &mustard), Ok(Verdict::No));

    let kb = [culprit, -mustard];
    assert_eq!(checker.classify(&kb, &plum), Ok(Verdict::Maybe));
    assert_eq!(Verdict::Maybe.to_string(), "MAYBE");
}

#[test]
fn model_budget() {
    let (p, q) = (at("P"), at("Q"));
    let mut checker = ModelChecker::new(Some(2));
    let taut = (p.clone() | -p) & (q.clone() | -q);
    assert_eq!(checker.entails(&[], &taut), Err(Error::BudgetExhausted(2)));
}

#[test]
fn to_cnf() {
    let (a, b, c) = (at("A"), at("B"), at("C"));
    let kb = [
        Formula::iff(a.clone(), b.clone()),
        Formula::imp(a.clone(), b.clone()),
        -(a.clone() & b.clone()),
        -(a.clone() | b.clone()),
        a.clone() & (b.clone() | c.clone()),
    ];
    let expected = [
        Formula::imp(a.clone(), b.clone()) & Formula::imp(b.clone(), a.clone()),
        -a.clone() | b.clone(),
        -a.clone() | -b.clone(),
        -a.clone() & -b.clone(),
        (a.clone() & b.clone()) | (a.clone() & c.clone()),
    ];
    assert_eq!(cnf::to_cnf(&kb), expected);

    // a single pass does not rewrite subformulas
    let nested = [Formula::imp(a.clone(), Formula::imp(b.clone(), c.clone()))];
    assert_eq!(cnf::to_cnf(&nested), [-a.clone() | Formula::imp(b, c)]);

    // exclusive disjunction has no single-pass rule
    let xor = [Formula::xor(a.clone(), a)];
    assert_eq!(cnf::to_cnf(&xor), xor);
}

#[test]
fn to_cnf_clause() {
    let pqr = Formula::or([at("P"), at("Q"), -at("R")]).unwrap();
    let clauses = [at("P"), -at("P"), at("P") | -at("Q"), pqr];
    assert_eq!(cnf::to_cnf(&clauses), clauses);
}

#[test]
fn demorgan_nary() {
    let fms = Formula::and([at("A"), at("B"), at("C")]).unwrap();
    let expected = Formula::or([-at("A"), -at("B"), -at("C")]).unwrap();
    assert_eq!(cnf::to_cnf(&[-fms]), [expected]);
}

#[test]
fn clausify() {
    let (p, q, r) = (at("P"), at("Q"), at("R"));
    let kb = Vec::from([Formula::iff(p.clone(), q.clone()), -(q.clone() | r.clone())]);
    let expected = [-p.clone() | q.clone(), -q.clone() | p, -q, -r];
    assert_eq!(cnf::clausify(kb), expected);
}

#[test]
fn clausify_splits_before_distribution() {
    let (p, q, r) = (at("P"), at("Q"), at("R"));
    let kb = Vec::from([p.clone() & (q.clone() | r.clone())]);
    assert_eq!(cnf::clausify(kb), [p.clone(), q.clone() | r]);

    let kb = [p.clone() & (-p | q.clone())];
    assert_eq!(check::entails(&kb, &q), Ok(true));
    assert_eq!(refute(&kb, &q), Ok(ProofResult::Contradiction));
}

#[test]
fn full_cnf() {
    let (a, b, c, d) = (at("a"), at("b"), at("c"), at("d"));

    // cnf((a & b) | (c & d)) = (a | c) & (a | d) & (b | c) & (b | d)
    let abcd = (a.clone() & b.clone()) | (c.clone() & d.clone());
    let expected = [
        a.clone() | c.clone(),
        a.clone() | d.clone(),
        b.clone() | c.clone(),
        b.clone() | d.clone(),
    ];
    assert_eq!(abcd.clauses(), expected);

    // cnf((a | b) | c) = a | b | c
    let abc = (a.clone() | b.clone()) | c.clone();
    let expected = Formula::or([a.clone(), b.clone(), c.clone()]).unwrap();
    assert_eq!(abc.cnf(), expected);

    // cnf(¬(a ⇒ ¬¬b)) = a ∧ ¬b
    let fm = -Formula::imp(a.clone(), -(-b.clone()));
    assert_eq!(fm.clauses(), [a.clone(), -b.clone()]);

    // cnf(a ⊕ b) = (a ∨ b) ∧ (¬a ∨ ¬b)
    let fm = Formula::xor(a.clone(), b.clone());
    assert_eq!(fm.clauses(), [a.clone() | b.clone(), -a | -b]);
}

#[test]
fn resolve() {
    let (p, q, r) = (at("P"), at("Q"), at("R"));
    let resolvent = resolve_pair(&(p.clone() | q.clone()), &-p.clone());
    assert_eq!(resolvent, Some(Resolvent::Clause(q.clone())));

    let c1 = Formula::or([p.clone(), q.clone(), r.clone()]).unwrap();
    let c2 = -q.clone() | r.clone();
    assert_eq!(resolve_pair(&c1, &c2), Some(Resolvent::Clause(p.clone() | r.clone())));

    assert_eq!(resolve_pair(&(p.clone() | q.clone()), &r), None);
    assert_eq!(resolve_pair(&-r.clone(), &r), Some(Resolvent::Empty));

    // complementary pairs on two atoms yield a tautology
    let resolvent = Clause::from(&(p.clone() | q.clone())).resolve(&Clause::from(&(-p | -q)));
    assert!(resolvent.unwrap().is_trivial());
}

#[test]
fn refutation() {
    let (p, q) = (at("P"), at("Q"));
    let kb = [p.clone() | q.clone(), -p.clone()];
    assert_eq!(refute(&kb, &q), Ok(ProofResult::Contradiction));

    let opt = Opt {
        normalizer: Normalizer::Full,
        ..Opt::default()
    };
    let kb = [p.clone() | q.clone()];
    let result = Resolution::new(&kb, &p, &opt).run();
    match result {
        Ok(ProofResult::Saturated(clauses)) => {
            assert!(clauses.contains(&q));
            assert!(!clauses.contains(&p));
        }
        _ => panic!("expected saturation, got {:?}", result),
    }
}

#[test]
fn refutation_full() {
    let (p, q, r) = (at("P"), at("Q"), at("R"));
    // nested implications are only unfolded by the full normaliser
    let kb = [Formula::imp(p.clone(), Formula::imp(q.clone(), r.clone())), p, q];
    let opt = Opt {
        normalizer: Normalizer::Full,
        ..Opt::default()
    };
    let mut search = Resolution::new(&kb, &r, &opt);
    assert_eq!(search.run(), Ok(ProofResult::Contradiction));
    assert!(search.inferences() > 0);
    let derivation = search.derivation().to_string();
    assert!(derivation.lines().last().unwrap().contains("⊥"));
}

#[test]
fn skip_tautologies() {
    let (p, q, r) = (at("P"), at("Q"), at("R"));
    let kb = [p.clone() | q.clone(), -p | -q];
    let opt = Opt {
        normalizer: Normalizer::Full,
        ..Opt::default()
    };
    let mut search = Resolution::new(&kb, &r, &opt);
    match search.run() {
        Ok(ProofResult::Saturated(clauses)) => {
            assert_eq!(clauses.len(), 3);
            assert!(clauses.iter().all(|cl| !Clause::from(cl).is_trivial()));
        }
        result => panic!("expected saturation, got {:?}", result),
    }
    // the resolvent of the first two clauses was computed, but not kept
    assert_eq!(search.inferences(), 1);
}

#[test]
fn resolution_budget() {
    let (p, q) = (at("P"), at("Q"));
    let kb = [p.clone() | q.clone(), -p];
    let opt = Opt {
        lim: Some(1),
        ..Opt::default()
    };
    assert_eq!(Resolution::new(&kb, &q, &opt).run(), Err(Error::BudgetExhausted(1)));
}

#[test]
fn rules() {
    let (p, q) = (at("P"), at("Q"));
    let pq = Formula::imp(p.clone(), q.clone());
    let kb = [pq.clone(), p.clone()];

    assert_eq!(Rule::ModusPonens(pq.clone()).apply(&kb), Ok(vec![q.clone()]));
    assert_eq!(Rule::ModusPonens(pq.clone()).apply(&[pq.clone()]), Ok(vec![]));
    let mismatch = Error::RuleApplication("Modus Ponens", p.clone());
    assert_eq!(Rule::ModusPonens(p.clone()).apply(&kb), Err(mismatch));

    let ie = Rule::ImplicationElimination(pq.clone());
    assert_eq!(ie.apply(&kb), Ok(vec![q.clone() | -p.clone()]));

    let conj = p.clone() & q.clone();
    let ae = Rule::AndElimination(conj.clone());
    assert_eq!(ae.apply(&[conj]), Ok(vec![p.clone(), q.clone()]));
    assert_eq!(ae.apply(&kb), Ok(vec![]));

    let dneg = -(-p.clone());
    let dne = Rule::DoubleNegationElimination(dneg.clone());
    assert_eq!(dne.apply(&[dneg]), Ok(vec![p.clone()]));
    assert!(Rule::DoubleNegationElimination(-p.clone()).apply(&kb).is_err());

    let iff = Formula::iff(p.clone(), q.clone());
    let be = Rule::BiconditionalElimination(iff.clone());
    let expected = pq & Formula::imp(q, p);
    assert_eq!(be.apply(&[iff]), Ok(vec![expected]));
}

#[test]
fn distribution() {
    let (a, b, c) = (at("A"), at("B"), at("C"));
    let conj = a.clone() & (b.clone() | c.clone());
    let dist = Rule::Distribution(conj.clone());
    let expected = (a.clone() & b.clone()) | (a.clone() & c.clone());
    assert_eq!(dist.apply(&[conj]), Ok(vec![expected]));

    let disj = a.clone() | (b.clone() & c.clone());
    let dist = Rule::Distribution(disj.clone());
    let expected = (a.clone() | b.clone()) & (a.clone() | c.clone());
    assert_eq!(dist.apply(&[disj]), Ok(vec![expected]));
    assert_eq!(dist.apply(&[a.clone()]), Ok(vec![]));

    let flat = a.clone() & b.clone();
    let mismatch = Error::RuleApplication("Distribution", flat.clone());
    assert_eq!(Rule::Distribution(flat.clone()).apply(&[flat]), Err(mismatch));
    assert!(Rule::Distribution(-a.clone()).apply(&[]).is_err());
}

#[test]
fn de_morgan() {
    let (p, q) = (at("P"), at("Q"));
    let nand = -(p.clone() & q.clone());
    let dm = Rule::DeMorgan(nand.clone());
    assert_eq!(dm.apply(&[nand]), Ok(vec![-p.clone() | -q.clone()]));
    assert_eq!(dm.apply(&[p.clone()]), Ok(vec![]));

    let nor = -(p.clone() | q.clone());
    assert_eq!(Rule::DeMorgan(nor.clone()).apply(&[nor.clone()]), Ok(vec![-p.clone() & -q.clone()]));
    let goal = -p.clone() & -q.clone();
    assert!(prove(&[nor.clone()], &[Rule::DeMorgan(nor)], &goal).success);

    let mismatch = Error::RuleApplication("De Morgan", -p.clone());
    assert_eq!(Rule::DeMorgan(-p.clone()).apply(&[-p]), Err(mismatch));
}

#[test]
fn modus_ponens_proof() {
    let (p, q) = (at("P"), at("Q"));
    let pq = Formula::imp(p.clone(), q.clone());
    let proof = prove(&[pq.clone(), p.clone()], &[Rule::ModusPonens(pq.clone())], &q);
    assert!(proof.success);
    assert_eq!(proof.steps.len(), 1);
    assert_eq!(proof.steps[0].outcome, Outcome::Derived(vec![q.clone()]));
    assert_eq!(proof.steps[0].kb_size, 3);
    assert_eq!(proof.kb, [pq, p, q]);
}

#[test]
fn failed_step() {
    let (p, q, r) = (at("P"), at("Q"), at("R"));
    let pq = Formula::imp(p.clone(), q.clone());
    let rules = [
        Rule::AndElimination(p.clone()),
        Rule::ModusPonens(Formula::imp(q.clone(), r.clone())),
        Rule::ModusPonens(pq.clone()),
        Rule::DoubleNegationElimination(-(-p.clone())),
    ];
    let proof = prove(&[pq, p], &rules, &q);
    assert!(proof.success);
    // the goal is reached before the last rule
    assert_eq!(proof.steps.len(), 3);
    assert!(matches!(proof.steps[0].outcome, Outcome::Failed(_)));
    assert_eq!(proof.steps[1].outcome, Outcome::Derived(vec![]));
    assert_eq!(proof.steps[2].kb_size, 3);
}

#[test]
fn unproved() {
    let (p, q) = (at("P"), at("Q"));
    let pq = Formula::imp(p, q.clone());
    let proof = prove(&[pq.clone()], &[Rule::ModusPonens(pq.clone())], &q);
    assert!(!proof.success);
    assert_eq!(proof.kb, [pq]);
    assert!(proof.to_string().ends_with("not proved"));
}

#[test]
fn goal_in_kb() {
    let p = at("P");
    let proof = prove(&[p.clone()], &[Rule::AndElimination(p.clone())], &p);
    assert!(proof.success);
    assert!(proof.steps.is_empty());
}

#[test]
fn quantifiers() {
    let people = ["harry", "hermione", "ron"];
    let all = Quantifier::Forall.over(people, "is_wizard").unwrap();
    let some = Quantifier::Exists.over(people, "is_wizard").unwrap();
    let harry = predicate("harry", "is_wizard");
    assert_eq!(some, Formula::or(people.map(|e| predicate(e, "is_wizard"))).unwrap());

    assert_eq!(check::entails(&[all.clone()], &harry), Ok(true));
    assert_eq!(check::entails(&[some.clone()], &harry), Ok(false));
    assert_eq!(check::entails(&[all], &some), Ok(true));

    assert_eq!(Quantifier::Forall.over(["harry"], "is_wizard"), Ok(harry));
    let empty: [&str; 0] = [];
    assert_eq!(Quantifier::Forall.over(empty, "is_wizard"), Err(Error::InvalidArity(OpA::Conj, 0)));
    assert_eq!(-Quantifier::Forall, Quantifier::Exists);
}
