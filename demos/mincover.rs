use clap::Parser;
use color_eyre::eyre::{bail, WrapErr};

use qm_rs::config::{Config, TieBreak};
use qm_rs::cost::CostModel;
use qm_rs::minimize::{Minimizer, Problem};
use qm_rs::trace::{LogObserver, NoTrace, TraceObserver};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Pairs of `<n> <minterms>`, minterms as `a,b,c` or `a,b,c/d,e` (after `/` are don't-cares).
    #[arg(value_name = "N MINTERMS")]
    input: Vec<String>,

    /// Log the state after every stage.
    #[clap(long)]
    detail: bool,

    /// Skip dominance reduction and use only Petrick's method.
    #[clap(long)]
    petrick_only: bool,

    /// Order a free bit before a fixed 1 (`0 < - < 1`) when sorting cubes.
    #[clap(long)]
    one_precedes_dash: bool,

    /// Cost of a single literal.
    #[clap(long, value_name = "INT", default_value = "1")]
    input_cost: u32,

    /// Cost of a single product term.
    #[clap(long, value_name = "INT", default_value = "1")]
    output_cost: u32,
}

struct Case {
    description: String,
    width: u32,
    minterms: Vec<i64>,
    dont_cares: Vec<i64>,
    petrick_only: bool,
}

impl Case {
    fn new(width: u32, description: &str, minterms: &[i64], dont_cares: &[i64]) -> Self {
        Self {
            description: description.to_string(),
            width,
            minterms: minterms.to_vec(),
            dont_cares: dont_cares.to_vec(),
            petrick_only: false,
        }
    }
}

fn builtin_cases() -> Vec<Case> {
    vec![
        Case::new(3, "single cube", &[0, 1, 2, 3], &[]),
        Case::new(4, "class material #1", &[0, 4, 8, 10, 11, 12], &[13, 15]),
        Case::new(3, "class material #2, cyclic", &[0, 1, 2, 5, 6, 7], &[]),
        Case {
            petrick_only: true,
            ..Case::new(3, "class material #2, cyclic, only Petrick's method", &[0, 1, 2, 5, 6, 7], &[])
        },
        Case::new(4, "class material #3", &[0, 2, 5, 6, 7, 8, 10, 12, 13, 14, 15], &[]),
        Case::new(4, "class material #4", &[0, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13], &[]),
        Case::new(4, "class material #5", &[2, 3, 7, 9, 11, 13], &[1, 10, 15]),
        Case::new(4, "wikipedia example", &[4, 8, 10, 11, 12, 15], &[9, 14]),
    ]
}

fn parse_terms(s: &str) -> color_eyre::Result<Vec<i64>> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<i64>().wrap_err_with(|| format!("Bad term '{}'", t)))
        .collect()
}

fn parse_cases(input: &[String], petrick_only: bool) -> color_eyre::Result<Vec<Case>> {
    if input.len() % 2 != 0 {
        bail!("Expected pairs of <n> <minterms>, got {} arguments", input.len());
    }
    input
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let width = pair[0]
                .parse::<u32>()
                .wrap_err_with(|| format!("Bad number of variables '{}'", pair[0]))?;
            let (minterms, dont_cares) = match pair[1].split_once('/') {
                Some((m, d)) => (parse_terms(m)?, parse_terms(d)?),
                None => (parse_terms(&pair[1])?, Vec::new()),
            };
            Ok(Case {
                description: format!("user input #{}", i + 1),
                width,
                minterms,
                dont_cares,
                petrick_only,
            })
        })
        .collect()
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    println!("args = {:?}", args);

    let tie_break = if args.one_precedes_dash {
        TieBreak::FreeBetween
    } else {
        TieBreak::FreeLast
    };

    let cases = if args.input.is_empty() {
        builtin_cases()
    } else {
        parse_cases(&args.input, args.petrick_only)?
    };

    for (i, case) in cases.iter().enumerate() {
        println!("----------------------------------");
        println!(
            "Case {}: n={}, minterms={:?}, dont_cares={:?}, petrick_only={}",
            i + 1,
            case.width,
            case.minterms,
            case.dont_cares,
            case.petrick_only
        );
        println!("{}", case.description);

        let time_case = std::time::Instant::now();
        let problem = Problem::new(
            case.width,
            case.minterms.iter().copied(),
            case.dont_cares.iter().copied(),
        )?;
        let config = Config {
            cost: CostModel::new(args.input_cost, args.output_cost),
            petrick_only: case.petrick_only,
            tie_break,
            ..Config::default()
        };
        let minimizer = Minimizer::new(config);
        let mut observer: Box<dyn TraceObserver> = if args.detail {
            Box::new(LogObserver { tie_break })
        } else {
            Box::new(NoTrace)
        };
        match minimizer.minimize_traced(&problem, observer.as_mut()) {
            Ok(solution) => {
                println!(">> {}", solution.render(tie_break));
                println!("cost = {}", solution.total_cost(&minimizer.config().cost));
            }
            Err(e) => println!(">> error: {}", e),
        }
        println!("elapsed time: {:.3?}", time_case.elapsed());
    }

    println!("----------------------------------");
    println!("Ran total {} cases in {:.3?}", cases.len(), time_total.elapsed());

    Ok(())
}
