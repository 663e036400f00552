use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use chess_suggest::board::{parse_fen, Move, Position, Side, StdoutLogger};
use chess_suggest::engine::{MoveSuggestionService, SuggestConfig};

/// Suggest a move for a board position
#[derive(Parser, Debug)]
#[command(name = "chess_suggest", version)]
struct Cli {
    /// Position in FEN; the side field, if present, picks the side to move
    #[arg(long, conflicts_with = "board")]
    fen: Option<String>,
    /// File in the board text format (8 rows of `.` / `white_rook` tokens)
    #[arg(long)]
    board: Option<PathBuf>,
    /// Side to move, overriding the FEN side field
    #[arg(short, long)]
    side: Option<ArgSide>,
    /// Moves in coordinate notation applied before searching, sides alternating
    #[arg(short, long, num_args = 1..)]
    moves: Vec<String>,
    /// Search depth in plies
    #[arg(short, long)]
    depth: Option<u32>,
    /// Extra settings as name=value (depth, pruning, perspective)
    #[arg(short = 'o', long = "option")]
    options: Vec<String>,
    /// Print the search summary line
    #[arg(long)]
    info: bool,
    /// Write the searched position to this file in the board text format
    #[arg(long)]
    save: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum ArgSide {
    White,
    Black,
}

impl ArgSide {
    fn to_side(self) -> Side {
        match self {
            ArgSide::White => Side::White,
            ArgSide::Black => Side::Black,
        }
    }
}

fn load_position(cli: &Cli) -> Result<(Position, Side), Box<dyn std::error::Error>> {
    let (position, side) = match (&cli.fen, &cli.board) {
        (Some(fen), _) => parse_fen(fen)?,
        (None, Some(path)) => {
            let text = std::fs::read_to_string(path)?;
            (Position::from_board_text(&text)?, Side::White)
        }
        (None, None) => (Position::starting(), Side::White),
    };
    let mut side = cli.side.map_or(side, ArgSide::to_side);

    let mut position = position;
    for text in &cli.moves {
        let mv: Move = text.parse()?;
        position = position.try_apply(mv)?;
        log::debug!("applied {mv} for {side}");
        side = side.opponent();
    }
    Ok((position, side))
}

fn build_config(cli: &Cli) -> Result<SuggestConfig, Box<dyn std::error::Error>> {
    let mut config = SuggestConfig::default();
    for option in &cli.options {
        config.apply_assignment(option)?;
    }
    if let Some(depth) = cli.depth {
        config.apply_option("depth", Some(&depth.to_string()))?;
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (position, side) = load_position(cli)?;
    let config = build_config(cli)?;

    if let Some(path) = &cli.save {
        std::fs::write(path, position.to_board_text())?;
        log::info!("board written to {}", path.display());
    }

    let mut service = MoveSuggestionService::new(config);
    if cli.info {
        service = service.with_logger(StdoutLogger);
    }

    match service.suggest(&position, side) {
        Some(mv) => println!("{mv}"),
        None => println!("none"),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
