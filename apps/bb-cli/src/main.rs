use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use bb_circuit::{CircuitConfig, NodeMerging, ValidationPolicy};
use bb_project::{ProjectResult, build_board};

#[derive(Parser)]
#[command(name = "bb-cli")]
#[command(about = "Breadboard CLI - circuit node and ground bookkeeping", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate board file syntax and structure
    Validate {
        /// Path to the board file (YAML, or JSON by extension)
        board_path: PathBuf,
    },
    /// List circuits with their nodes and ground as written in the file
    Show {
        /// Path to the board file
        board_path: PathBuf,
    },
    /// Place every circuit on a board and report the resolved nodes
    Check {
        /// Path to the board file
        board_path: PathBuf,
        /// Report usage errors but keep going
        #[arg(long)]
        lenient: bool,
        /// Treat repeated positions as the same node
        #[arg(long)]
        merge_positions: bool,
    },
}

fn main() -> ProjectResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { board_path } => cmd_validate(&board_path),
        Commands::Show { board_path } => cmd_show(&board_path),
        Commands::Check {
            board_path,
            lenient,
            merge_positions,
        } => cmd_check(&board_path, override_config(lenient, merge_positions)),
    }
}

/// CLI flags only override the file when at least one is given.
fn override_config(lenient: bool, merge_positions: bool) -> Option<CircuitConfig> {
    if !lenient && !merge_positions {
        return None;
    }
    Some(CircuitConfig {
        policy: if lenient {
            ValidationPolicy::Lenient
        } else {
            ValidationPolicy::Strict
        },
        merging: if merge_positions {
            NodeMerging::ByPosition
        } else {
            NodeMerging::Distinct
        },
    })
}

fn cmd_validate(board_path: &Path) -> ProjectResult<()> {
    println!("Validating board: {}", board_path.display());
    bb_project::load(board_path)?;
    println!("✓ Board is valid");
    Ok(())
}

fn cmd_show(board_path: &Path) -> ProjectResult<()> {
    let project = bb_project::load(board_path)?;

    if project.circuits.is_empty() {
        println!("No circuits found in board");
        return Ok(());
    }

    println!("Circuits on {}:", project.name);
    for circuit in &project.circuits {
        println!(
            "  {} - {} ({} nodes, ground {})",
            circuit.id,
            circuit.display_name(),
            circuit.nodes.len(),
            circuit.ground.as_deref().unwrap_or("<none>")
        );
        for node in &circuit.nodes {
            println!("      {}", node);
        }
    }
    Ok(())
}

fn cmd_check(board_path: &Path, config: Option<CircuitConfig>) -> ProjectResult<()> {
    // validated by build_board, with the override applied
    let project = bb_project::read(board_path)?;
    let board = build_board(&project, config)?;

    println!("✓ Placed {} circuit(s) on {}", board.len(), board.name());
    for (id, circuit) in board.iter() {
        let ground = circuit
            .ground
            .map(|g| g.to_string())
            .unwrap_or_else(|| "<none>".to_string());
        println!(
            "  [{}] {}: {} node(s), ground {}",
            id,
            circuit.name.as_deref().unwrap_or("<unnamed>"),
            circuit.nodes.len(),
            ground
        );
        for node in &circuit.nodes {
            println!("      n{} @ {}", node.id, node.position);
        }
    }
    Ok(())
}
