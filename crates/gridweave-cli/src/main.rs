//! Terminal front end for rendering number-place puzzles.
//!
//! Decodes puzzle strings, renders them as markup-annotated tables, and
//! reports rule conflicts. Output is meant for a markup-aware terminal
//! printer; the markup is passed through as-is.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use gridweave_core::{Board, BoardError, find_conflicts};
use gridweave_render::{
    Align, CellContent, ConflictHighlight, FilledValues, RenderError, RenderOptions, render,
};

#[derive(Debug, Parser)]
#[command(name = "gridweave", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a puzzle as a box-drawn table.
    Show(ShowArgs),
    /// List conflicting cell pairs in a puzzle.
    Check(PuzzleArgs),
}

#[derive(Debug, Args)]
struct PuzzleArgs {
    /// Puzzle string: one character per cell in row-major order, with `0`
    /// or `.` for an empty cell.
    puzzle: String,

    /// Block width in cells.
    #[arg(long, default_value_t = 3)]
    block_width: u8,

    /// Block height in cells.
    #[arg(long, default_value_t = 3)]
    block_height: u8,
}

impl PuzzleArgs {
    fn decode(&self) -> Result<Board, BoardError> {
        Board::decode(&self.puzzle, self.block_width, self.block_height)
    }
}

#[derive(Debug, Args)]
struct ShowArgs {
    #[command(flatten)]
    puzzle: PuzzleArgs,

    /// Show candidates of unfilled cells.
    #[arg(short, long)]
    candidates: bool,

    /// Prefix marking a field as candidate text.
    #[arg(long, default_value = "*")]
    prefix: String,

    /// Align cell content to the left instead of the right.
    #[arg(long)]
    left: bool,

    /// Style tag for candidate text.
    #[arg(long, default_value = "green not bold")]
    candidate_style: String,

    /// Style tag for index labels.
    #[arg(long, default_value = "yellow not b")]
    index_style: String,

    /// Style tag for filled values.
    #[arg(long)]
    value_style: Option<String>,

    /// Prior puzzle state; its cells render in the --given-style tag and
    /// take priority over current values.
    #[arg(long)]
    given: Option<String>,

    /// Style tag for cells of the prior state.
    #[arg(long, default_value = "bold")]
    given_style: String,

    /// Highlight conflicting cells.
    #[arg(long)]
    conflicts: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum AppError {
    #[display("invalid puzzle: {_0}")]
    Board(#[from] BoardError),
    #[display("cannot render: {_0}")]
    Render(#[from] RenderError),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Command::Show(args) => show(args),
        Command::Check(args) => check(args),
    }
}

fn show(args: &ShowArgs) -> Result<(), AppError> {
    let board = args.puzzle.decode()?;
    let given = args
        .given
        .as_deref()
        .map(|text| Board::decode(text, args.puzzle.block_width, args.puzzle.block_height))
        .transpose()?;
    log::debug!(
        "decoded {size}x{size} board, {filled} cells filled",
        size = board.size(),
        filled = board.filled_count()
    );

    let conflict_provider = args
        .conflicts
        .then(|| ConflictHighlight::new(&board, find_conflicts(&board)));
    let given_provider = given
        .as_ref()
        .map(|given| FilledValues::styled(given, args.given_style.as_str()));
    let filled_provider = match &args.value_style {
        Some(tag) => FilledValues::styled(&board, tag.as_str()),
        None => FilledValues::new(&board),
    };

    let mut providers: Vec<&dyn CellContent> = Vec::new();
    if let Some(provider) = &conflict_provider {
        providers.push(provider);
    }
    if let Some(provider) = &given_provider {
        providers.push(provider);
    }
    providers.push(&filled_provider);

    let options = RenderOptions {
        include_candidates: args.candidates,
        candidate_prefix: args.prefix.clone(),
        align: if args.left { Align::Left } else { Align::Right },
        candidate_style: Some(args.candidate_style.clone()),
        index_style: Some(args.index_style.clone()),
    };

    println!("{}", render(&board, &providers, &options)?);

    let total = usize::from(board.size()) * usize::from(board.size());
    println!("Filled: [{}]/{total}", board.filled_count());
    Ok(())
}

fn check(args: &PuzzleArgs) -> Result<(), AppError> {
    let board = args.decode()?;
    let conflicts = find_conflicts(&board);

    for conflict in &conflicts {
        println!(
            "({}, {}) <== [bold red]Conflict[/bold red] ==> ({}, {}) [Both {}]",
            conflict.a.x() + 1,
            conflict.a.y() + 1,
            conflict.b.x() + 1,
            conflict.b.y() + 1,
            conflict.value,
        );
    }
    if conflicts.is_empty() {
        println!("[green]No conflict detected![/green]");
        if board.is_filled() {
            println!("[green bold]The puzzle is complete![/green bold]");
        }
    }
    Ok(())
}
