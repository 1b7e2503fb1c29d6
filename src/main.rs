use std::{fs::File, path::PathBuf, process::ExitCode};

use clap::Parser;
use sat_reducer::{
    generate::{self, GeneratorConfig},
    io,
    reducer::DEFAULT_DECOMPOSITION_LIMIT,
    Assignment, ClauseSet, Reducer, ReducerConfig, Result,
};
use tracing::{info, Level};

/// Simplifies a 3-CNF formula by applying rewrite rules to a fixed point.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// DIMACS CNF file; a random formula is generated when omitted
    input: Option<PathBuf>,

    #[arg(long)]
    random: bool,

    #[arg(long, default_value_t = GeneratorConfig::default().var_count)]
    vars: usize,

    #[arg(long, default_value_t = GeneratorConfig::default().clause_count)]
    clauses: usize,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Also reduce variable-disjoint components independently (exponential)
    #[arg(long)]
    decompose: bool,

    /// Largest clause count the decomposition is attempted on
    #[arg(long, default_value_t = DEFAULT_DECOMPOSITION_LIMIT)]
    decompose_limit: usize,

    #[arg(long)]
    check: bool,

    #[arg(long)]
    dimacs: bool,

    /// -v debug, -vv trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// rule firings are logged at info, so they show up by default
fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose))
        .with_writer(std::io::stderr)
        .init();
}

fn load(args: &Args) -> Result<ClauseSet<usize>> {
    match &args.input {
        Some(path) if !args.random => {
            info!("reading {}", path.display());
            let mut file = File::open(path)?;
            io::read_formula(&mut file)
        }
        _ => {
            let config = GeneratorConfig {
                var_count: args.vars,
                clause_count: args.clauses,
                seed: args.seed,
            };
            info!("generating random formula: {config:?}");
            Ok(generate::random_formula(&config))
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut clauses = load(args)?;
    let initial = clauses.len();

    let reducer = Reducer::new(ReducerConfig {
        decomposition: args.decompose,
        decomposition_limit: args.decompose_limit,
    });
    let stats = reducer.reduce_with_stats(&mut clauses);
    info!("{stats:?}");

    let mut output = std::io::stdout();
    if args.dimacs {
        io::write_formula(&mut output, &clauses)?;
    } else {
        println!("{clauses}");
    }

    println!(
        "c {} of {} clauses left after {} rule firings",
        clauses.len(),
        initial,
        stats.firings()
    );

    if args.check {
        let assignment = Assignment::new(clauses.variables());
        let valid = clauses.valid(&assignment)?;
        println!("c all-true assignment satisfies the result: {valid}");
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("sat-reducer: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tracing::Level;

    use super::{log_level, Args};

    #[test]
    fn default_level_shows_firings() {
        let args = Args::parse_from(["sat-reducer"]);
        assert_eq!(log_level(args.verbose), Level::INFO);

        let args = Args::parse_from(["sat-reducer", "-vv"]);
        assert_eq!(log_level(args.verbose), Level::TRACE);
        assert_eq!(log_level(1), Level::DEBUG);
    }
}
