//! # factoryplan-cli: the binary front end
//!
//! Wires the library crates together end to end: load a config
//! ([`factoryplan_io`]), build and solve the LP and extract the solution
//! graph ([`factoryplan_algo::plan`]), render it to DOT ([`factoryplan_viz`]).
//! [`run`] holds this pipeline so `main.rs` stays a thin wrapper around
//! argument parsing, logging setup, and the process exit code.

pub mod cli;

use cli::Cli;
use factoryplan_core::FactoryError;
use std::io::Write;
use tracing::{debug, info};

/// Runs the load -> plan -> render pipeline for the parsed CLI arguments,
/// writing the DOT document to `--output` or stdout. Returns the error
/// verbatim on config-parse, target-unreachable, or solver failures; `main`
/// turns any `Err` into a nonzero exit code, never catching and ignoring it.
pub fn run(cli: &Cli) -> Result<(), FactoryError> {
    info!(path = %cli.factory_config.display(), "loading factory config");
    let config = factoryplan_io::load_factory_config(&cli.factory_config)?;
    debug!(
        recipes = config.recipes.len(),
        targets = config.targets.len(),
        "config loaded"
    );

    let (system, index) = factoryplan_algo::builder::build(&config);
    debug!(
        variables = system.vars.len(),
        constraints = system.constraints.len(),
        "constraint system built"
    );

    let result = factoryplan_algo::solver::solve(&system)?;
    let graph = match result.status {
        factoryplan_algo::solver::SolveStatus::Optimal => {
            factoryplan_algo::extractor::extract(&config, &index, &result.values)
        }
        factoryplan_algo::solver::SolveStatus::Infeasible => {
            let target = config.targets.first();
            return Err(FactoryError::TargetUnreachable {
                item: target
                    .map(|t| config.items.name(t.item).to_string())
                    .unwrap_or_else(|| "<no target configured>".to_string()),
                quantity_per_second: target.map(|t| t.quantity_per_second).unwrap_or(0.0),
            });
        }
        factoryplan_algo::solver::SolveStatus::Unbounded => {
            return Err(FactoryError::SolverError(
                "linear program is unbounded".to_string(),
            ));
        }
    };
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "solution graph extracted"
    );

    let dot = factoryplan_viz::render_dot(&graph, &config.items);
    match &cli.output {
        Some(path) => {
            std::fs::write(path, dot)?;
            info!(path = %path.display(), "wrote DOT output");
        }
        None => {
            print!("{dot}");
            std::io::stdout().flush().ok();
        }
    }

    Ok(())
}
