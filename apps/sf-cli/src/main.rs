use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sf_project::{CompiledConfig, ProjectError, load_yaml};
use sf_solver::{SolveOutcome, solve};

#[derive(Parser)]
#[command(name = "sf-cli")]
#[command(about = "SankeyFlow CLI - flow network constraint solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate configuration file syntax and topology
    Check {
        /// Path to the configuration YAML file
        config_path: PathBuf,
    },
    /// Solve the flow network and print the result
    Solve {
        /// Path to the configuration YAML file
        config_path: PathBuf,
    },
}

fn main() -> Result<ExitCode, ProjectError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { config_path } => cmd_check(&config_path),
        Commands::Solve { config_path } => cmd_solve(&config_path),
    }
}

fn cmd_check(config_path: &Path) -> Result<ExitCode, ProjectError> {
    println!("Checking configuration: {}", config_path.display());
    let compiled = load_yaml(config_path)?;
    println!(
        "✓ Configuration is valid ({} nodes, {} flows, {} constraints)",
        compiled.topology.nodes().len(),
        compiled.topology.flows().len(),
        compiled.constraints.len()
    );
    Ok(ExitCode::SUCCESS)
}

fn cmd_solve(config_path: &Path) -> Result<ExitCode, ProjectError> {
    let CompiledConfig {
        topology,
        parameters,
        constraints,
    } = load_yaml(config_path)?;

    let outcome = solve(&topology, &parameters, &constraints);
    Ok(render_outcome(&outcome))
}

fn render_outcome(outcome: &SolveOutcome) -> ExitCode {
    match outcome {
        SolveOutcome::Solved { flows } => {
            println!("✓ Solved ({} flows)", flows.len());
            print_flows(flows);
            ExitCode::SUCCESS
        }
        SolveOutcome::Underdetermined {
            flows,
            undetermined,
        } => {
            println!("✗ Underdetermined: {} flows have no value", undetermined.len());
            if !flows.is_empty() {
                println!("\nDetermined so far:");
                print_flows(flows);
            }
            println!("\nUndetermined:");
            for name in undetermined {
                println!("  {}", name);
            }
            println!("\nAdd constraints for the flows above and re-run.");
            ExitCode::FAILURE
        }
        SolveOutcome::Contradictory { violations } => {
            println!("✗ Contradictory: conservation violated at {} node(s)", violations.len());
            for v in violations {
                println!(
                    "  {}: inputs {} != outputs {} (difference {})",
                    v.node, v.sum_inputs, v.sum_outputs, v.difference
                );
            }
            ExitCode::FAILURE
        }
        SolveOutcome::EvaluationFailed { message } => {
            println!("✗ Constraint evaluation failed");
            println!("  {}", message);
            ExitCode::FAILURE
        }
    }
}

fn print_flows(flows: &[(String, f64)]) {
    let width = flows.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
    for (name, value) in flows {
        println!("  {:<width$}  {}", name, value, width = width);
    }
}
