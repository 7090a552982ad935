//! Boardgrid is a CLI tool for building and reshaping game boards.
//!
//! It creates an empty board, either from the shape in the user's `config.toml` or
//! from `--rows`/`--columns`, applies the given operations in order and prints the
//! resulting board.

use boardgrid_core::{
    cli::{BoardOp, OP_GRAMMAR, render_board, run_script, valid_op},
    configs::{ConfigOverride, get_config, initialize_config},
};
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use miette::{Context, IntoDiagnostic};
use std::io::{self, Write};
use tracing::{Level, event, span};

#[derive(Parser)]
#[command(name = "boardgrid", version, about, long_about = None)]
#[command(next_line_help = true)]
#[command(propagate_version = true)]
struct Cli {
    /// Operations to apply to the board, in order.
    ///
    /// For example `set=0,1,B insert-rows=1 find=B`.
    /// To see every operation, use `boardgrid list-ops`.
    #[arg(value_parser = valid_op)]
    ops: Vec<BoardOp>,
    /// Number of rows of the new board, overrides `config.toml`.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    rows: Option<u32>,
    /// Number of columns of the new board, overrides `config.toml`.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    columns: Option<u32>,
    /// Glyph drawn for empty slots, overrides `config.toml`.
    #[arg(short, long)]
    empty: Option<String>,
    /// Write debug output to `./tracing.txt`
    #[arg(short, long)]
    debug: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Lists all board operations
    ListOps,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let _guard = if cli.debug {
        let file = std::fs::File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open("./tracing.txt")
            .into_diagnostic()?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_writer(non_blocking)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .into_diagnostic()
            .wrap_err("Failed to set subscriber")?;
        Some(guard)
    } else {
        None
    };

    let span = span!(Level::TRACE, "Main");
    let _enter = span.enter();

    let mut stdout = io::stdout();

    if let Some(Commands::ListOps) = cli.command {
        writeln!(stdout, "{}", "Valid operations:".bold())
            .into_diagnostic()
            .wrap_err("Failed to write to stdout.".red())?;
        for (op, description) in OP_GRAMMAR {
            writeln!(stdout, "  {op:<22}{description}")
                .into_diagnostic()
                .wrap_err("Failed to write to stdout.".red())?;
        }
        return Ok(());
    }

    initialize_config(ConfigOverride {
        rows: cli.rows.map(|r| r as usize),
        columns: cli.columns.map(|c| c as usize),
        empty: cli.empty,
    })?;
    let board_config = &get_config().board;

    event!(Level::INFO, steps = cli.ops.len(), "running board script");
    let board = run_script(&mut stdout, board_config.rows, board_config.columns, &cli.ops)?;

    writeln!(stdout, "{}", render_board(&board))
        .into_diagnostic()
        .wrap_err("Failed to write to stdout.".red())?;
    Ok(())
}
