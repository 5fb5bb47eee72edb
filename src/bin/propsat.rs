use std::io;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use propsat::gen::{random_3sat, unsat_chain, worst_case};
use propsat::solver::{solve_all, Algorithm};
use propsat::{analyze, is_propositional, validate, Formula};

#[derive(Debug, Parser)]
#[command(name = "propsat")]
#[command(about = "Propositional formula validator and SAT solver")]
struct Cli {
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    Check {
        formula: String,
    },
    Solve {
        formula: String,
        #[arg(long, default_value = "all")]
        algorithm: String,
        #[arg(long)]
        show_clauses: bool,
    },
    Gen {
        #[arg(long)]
        atoms: usize,
        #[arg(long)]
        random: bool,
        #[arg(long)]
        unsat: bool,
        #[arg(long, default_value_t = 0)]
        clauses: usize,
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[arg(long)]
        solve: bool,
        #[arg(long, default_value = "all")]
        algorithm: String,
    },
}

#[derive(Debug, Clone)]
struct SolveOptions {
    algorithms: Vec<Algorithm>,
    show_clauses: bool,
}

impl SolveOptions {
    fn from_args(algorithm: &str, show_clauses: bool) -> Result<Self> {
        let algorithms = match algorithm {
            "all" => Algorithm::ALL.to_vec(),
            other => other
                .split(',')
                .map(|s| s.trim().parse::<Algorithm>())
                .collect::<Result<Vec<Algorithm>>>()?,
        };
        Ok(Self {
            algorithms,
            show_clauses,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Cmd::Check { formula } => check_cmd(&formula)?,
        Cmd::Solve {
            formula,
            algorithm,
            show_clauses,
        } => solve_cmd(&formula, &SolveOptions::from_args(&algorithm, show_clauses)?)?,
        Cmd::Gen {
            atoms,
            random,
            unsat,
            clauses,
            seed,
            solve,
            algorithm,
        } => {
            let text = if random {
                let clauses = if clauses == 0 { atoms * 4 } else { clauses };
                random_3sat(atoms, clauses, seed)?
            } else if unsat {
                unsat_chain(atoms)?
            } else {
                worst_case(atoms)?
            };
            println!("{}", text);
            if solve {
                solve_cmd(&text, &SolveOptions::from_args(&algorithm, false)?)?;
            }
        }
    }
    Ok(())
}

fn check_cmd(text: &str) -> Result<()> {
    let validity = validate(text)?;
    if !validity.valid {
        println!("syntax: invalid");
        for v in &validity.diagnostics {
            println!("  {}", v);
        }
        return Ok(());
    }
    println!("syntax: valid");

    if !is_propositional(text) {
        println!("propositional: no");
        return Ok(());
    }
    println!("propositional: yes");

    let analysis = analyze(text);
    match &analysis.clauses {
        Some(clauses) if analysis.is_cnf => {
            println!("cnf: yes");
            println!("clauses: {}", clauses);
        }
        _ => {
            println!("cnf: no");
            for v in &analysis.diagnostics {
                println!("  {}", v);
            }
        }
    }
    Ok(())
}

fn solve_cmd(text: &str, opts: &SolveOptions) -> Result<()> {
    let formula = Formula::parse(text).with_context(|| format!("rejected formula '{}'", text))?;
    let clauses = formula.clause_set()?;
    if opts.show_clauses {
        println!("clauses: {}", clauses);
    }
    if opts.algorithms.is_empty() {
        bail!("no algorithm selected");
    }

    solve_all(clauses, &opts.algorithms, &mut io::stdout().lock())
}
