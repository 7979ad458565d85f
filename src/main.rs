use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use cpu_schedule::config::SchedulerConfig;
use cpu_schedule::loader::load_batch;
use cpu_schedule::models::ProcessBatch;
use cpu_schedule::report;
use cpu_schedule::scheduler::{Discipline, ScheduleError};
use cpu_schedule::workload::WorkloadSpec;

/// Non-preemptive CPU scheduling simulator (FCFS, SJF).
#[derive(Parser, Debug)]
#[command(name = "cpu-schedule", version)]
struct Cli {
    /// Process table: header line, then `pid arrival burst priority` rows
    #[arg(long, default_value = "processes.txt")]
    input: PathBuf,

    /// Scheduling algorithm (fcfs, sjf, 1, 2); prompts when omitted
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Dispatch FCFS by arrival time instead of table order
    #[arg(long)]
    sort_by_arrival: bool,

    /// Schedule degenerate processes instead of rejecting them
    #[arg(long)]
    no_validate: bool,

    /// Generate N random processes instead of reading --input
    #[arg(long, value_name = "N")]
    generate: Option<usize>,

    /// Seed for --generate
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ScheduleError>() {
                Some(ScheduleError::EmptyBatch) => print!("{}", report::render_empty()),
                Some(ScheduleError::InvalidDiscipline(_)) => println!("Invalid choice!"),
                _ => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let batch = match cli.generate {
        Some(count) => WorkloadSpec::new(count).generate(cli.seed),
        None => load_batch(&cli.input)
            .with_context(|| format!("cannot load processes from {}", cli.input.display()))?,
    };
    if batch.is_empty() {
        return Err(ScheduleError::EmptyBatch.into());
    }

    let discipline = match &cli.algorithm {
        Some(choice) => choice.parse::<Discipline>()?,
        None => prompt_discipline()?,
    };

    let config = SchedulerConfig::new(discipline)
        .with_sort_by_arrival(cli.sort_by_arrival)
        .with_validation(!cli.no_validate);

    print_result(&batch, &config, cli.json)
}

fn prompt_discipline() -> Result<Discipline> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "\n{}", report::render_menu())?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read algorithm choice")?;
    Ok(line.parse::<Discipline>()?)
}

fn print_result(batch: &ProcessBatch, config: &SchedulerConfig, json: bool) -> Result<()> {
    let result = config.run(batch)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("\n{}", report::render(&result));
    }
    Ok(())
}
