use clap::Parser;
use log::info;
use plprove::cli::Engine;
use plprove::{parse, Cli, Error, Stats};
use proplog::check::ModelChecker;
use proplog::resolution::{Normalizer, Opt, Resolution};
use proplog::{sorted_symbols, szs, Formula, Model, ProofResult};
use std::fmt::{self, Display};
use std::fs::File;

fn main() {
    use env_logger::Env;
    // log warnings and errors by default, do not print timestamps
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        print!("{}", szs::Status(e.get_kind()));
        if let Some(e) = e.get_error() {
            if let Err(e) = cli.output(e) {
                eprintln!("{}", e)
            }
        };
        std::process::exit(1);
    }
}

/// Truth assignment, one atom per line.
struct Assignment<'a>(&'a Model);

impl<'a> Display for Assignment<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut atoms: Vec<_> = self.0.iter().collect();
        atoms.sort();
        atoms
            .into_iter()
            .try_for_each(|(a, v)| writeln!(f, "{}: {}", a, v))
    }
}

struct Clauses<'a>(&'a [Formula]);

impl<'a> Display for Clauses<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|cl| writeln!(f, "{}", cl))
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let problem = parse::parse(&cli.file)?.join()?;
    let conjecture = problem.query.is_some();
    let goal = problem.goal();
    let kb = problem.kb;
    info!("knowledge base: {} formulas", kb.len());
    info!("goal: {}", goal);

    let symbols = sorted_symbols(kb.iter().chain(std::iter::once(&goal))).len();
    let mut stats = Stats::new(cli.engine, kb.len(), symbols);

    let result = match cli.engine {
        Engine::Models => models(cli, &kb, &goal, conjecture, &mut stats),
        Engine::Resolution => resolution(cli, &kb, &goal, conjecture, &mut stats),
    };

    if let Some(file) = &cli.stats {
        serde_json::to_writer(File::create(file)?, &stats)?;
    }
    result
}

fn models(
    cli: &Cli,
    kb: &[Formula],
    goal: &Formula,
    conjecture: bool,
    stats: &mut Stats,
) -> Result<(), Error> {
    let mut checker = ModelChecker::new(cli.lim);
    let counter = checker.counter_model(kb, goal);
    stats.models = Some(checker.models());
    let counter = counter?;
    info!("examined {} models", checker.models());

    let status = szs::SuccessKind::of_entailment(counter.is_none(), conjecture);
    print!("{}", szs::Status(status));
    if let Some(model) = counter {
        cli.output(Assignment(&model))?;
    }
    Ok(())
}

fn resolution(
    cli: &Cli,
    kb: &[Formula],
    goal: &Formula,
    conjecture: bool,
    stats: &mut Stats,
) -> Result<(), Error> {
    let opt = Opt {
        lim: cli.lim,
        normalizer: cli.cnf,
    };
    let mut search = Resolution::new(kb, goal, &opt);
    let result = search.run();
    stats.normalizer = Some(cli.cnf);
    stats.inferences = Some(search.inferences());
    stats.clauses = Some(search.clauses().len());
    info!("{} inferences", search.inferences());

    match result? {
        ProofResult::Contradiction => {
            let status = szs::SuccessKind::of_entailment(true, conjecture);
            print!("{}", szs::Status(status));
            cli.output(search.derivation())?;
        }
        ProofResult::Saturated(clauses) => {
            if cli.cnf == Normalizer::Pass && !clauses.iter().all(|cl| cl.is_clause()) {
                return Err(Error::new(
                    szs::GaveUp,
                    "saturated with formulas that are not clauses".into(),
                ));
            }
            let status = szs::SuccessKind::of_entailment(false, conjecture);
            print!("{}", szs::Status(status));
            cli.output(Clauses(&clauses))?;
        }
    }
    Ok(())
}
