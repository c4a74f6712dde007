mod config;
mod error;
mod generate;
mod types;

use std::io::{ self, Write };
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use config::{ build_command, GenerationConfig };
use error::{ GraphError, Result };
use types::Graph;

fn init_logging() {
    // Logs go to stderr so the printed matrices stay clean on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn report<E: Write>(err: &mut E, e: &GraphError) -> io::Result<()> {
    if e.is_invalid_argument() {
        writeln!(err, "Invalid argument: {}", e)?;
    } else {
        writeln!(err, "Error: {}", e)?;
    }

    return Ok(());
}

/// Runs the demonstration: prints the empty matrix, generates edges and prints the result.
///
/// Rejected generation parameters are reported on `err` and the run carries on with
/// the untouched matrix. Any other failure is returned to the caller.
fn run<W: Write, E: Write>(config: &GenerationConfig, out: &mut W, err: &mut E) -> Result<()> {
    writeln!(out, "Random weighted adjacency matrix generator")?;

    let mut graph = Graph::new(config.size)?;
    writeln!(out, "After initialization:")?;
    graph.display(out)?;

    writeln!(out, "\nAfter generate:")?;
    let mut rng = config.build_rng();
    match graph.generate_edges(&config.edge_params(), &mut rng) {
        Ok(summary) => writeln!(out, "{}", summary.target_edges)?,
        Err(e) => report(err, &e)?,
    }

    if config.json {
        writeln!(out, "{}", graph.to_json()?)?;
    } else {
        graph.display(out)?;
    }

    return Ok(());
}

fn main() -> ExitCode {
    init_logging();

    let matches = build_command().get_matches();
    let config = GenerationConfig::from_matches(&matches);

    let mut out = io::stdout().lock();
    let mut err = io::stderr();
    match run(&config, &mut out, &mut err) {
        Ok(()) => {
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = report(&mut err, &e);
            return ExitCode::FAILURE;
        }
    }
}
