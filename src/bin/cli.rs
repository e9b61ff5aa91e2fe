//! Terminal front-end: play the engine from stdin, or watch it play itself.

use std::io::{self, BufRead, Write};

use checkers::rules::{check_outcome_with_blocking, legal_moves};
use checkers::search::{minimax, SearchStats};
use checkers::{AIEngine, Board, GameOutcome, Move, Pos, Side, WinReason, DEFAULT_DEPTH};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play checkers against the alpha-beta engine", long_about = None)]
struct Args {
    /// Search depth in plies
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: i8,

    /// Let the engine play both sides
    #[arg(short, long)]
    watch: bool,

    /// Stop after this many plies
    #[arg(short, long, default_value_t = 200)]
    max_moves: usize,

    /// Also run unpruned minimax for every engine move and report the saving
    #[arg(long)]
    pruning_gains: bool,
}

/// What the human typed
enum Input {
    Move(Move),
    Quit,
}

fn main() {
    let args = Args::parse();

    let mut board = Board::new();
    let mut engine = AIEngine::with_depth(args.depth);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Checkers: you are P (moving up), the AI is A (moving down).");
    println!("Enter moves as `fromRow fromCol toRow toCol`, `moves` to list them, `quit` to leave.");
    println!();
    println!("{board}");

    let mut plies = 0;
    let outcome = loop {
        if let Some(outcome) = check_outcome_with_blocking(&board) {
            break Some(outcome);
        }
        if plies >= args.max_moves {
            break None;
        }

        let side = board.turn();
        let mv = if args.watch || side == Side::Ai {
            match engine_move(&mut engine, &board, side, args.pruning_gains) {
                Some(mv) => mv,
                None => break None,
            }
        } else {
            match read_player_move(&board, &mut lines) {
                Input::Move(mv) => mv,
                Input::Quit => {
                    println!("Bye.");
                    return;
                }
            }
        };

        if !board.make_move(mv) {
            eprintln!("warn: engine produced illegal move {mv}");
            break None;
        }
        plies += 1;

        println!("{} plays {mv}", side.name());
        println!("{board}");
        println!("Player: {}  AI: {}", board.player_score(), board.ai_score());
        println!();
    };

    report(outcome, plies, engine.session_stats());
}

/// Search for `side` and print the result with its statistics
fn engine_move(engine: &mut AIEngine, board: &Board, side: Side, pruning_gains: bool) -> Option<Move> {
    let result = engine.get_move_with_stats(board, side);

    println!(
        "{} searched depth {}: score {}  nodes {}  prunes {}  {}ms",
        side.name(),
        engine.max_depth(),
        result.score,
        result.nodes,
        result.prunes,
        result.time_ms,
    );

    if pruning_gains {
        let mut full = SearchStats::new();
        let (_, score) = minimax(board, engine.max_depth(), side == Side::Ai, &mut full);
        if score != result.score {
            eprintln!("warn: minimax score {score} differs from alpha-beta {}", result.score);
        }
        let saved = if full.nodes_expanded == 0 {
            0.0
        } else {
            100.0 * (1.0 - result.nodes as f64 / full.nodes_expanded as f64)
        };
        println!("  minimax nodes {}  pruning saved {saved:.1}%", full.nodes_expanded);
    }

    result.best_move
}

/// Prompt until a legal move or a quit command is entered. End of input quits.
fn read_player_move<I>(board: &Board, lines: &mut I) -> Input
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        print!("your move> ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("warn: failed to read stdin: {e}");
                return Input::Quit;
            }
            None => return Input::Quit,
        };

        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" | "q" => return Input::Quit,
            "moves" => {
                let moves: Vec<String> = legal_moves(board, Side::Player).iter().map(Move::to_string).collect();
                println!("{}", moves.join("  "));
                continue;
            }
            _ => {}
        }

        match parse_move(line) {
            Ok(mv) if board.get(mv.from).side() != Some(Side::Player) => {
                eprintln!("warn: no piece of yours on {}", mv.from)
            }
            Ok(mv) if board.is_legal(mv) => return Input::Move(mv),
            Ok(mv) => eprintln!("warn: illegal move {mv}"),
            Err(msg) => eprintln!("warn: {msg}"),
        }
    }
}

/// Parse `fromRow fromCol toRow toCol`
fn parse_move(line: &str) -> Result<Move, String> {
    let coords = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i32>().map_err(|_| format!("not a number: {s:?}")))
        .collect::<Result<Vec<_>, _>>()?;

    let &[from_row, from_col, to_row, to_col] = coords.as_slice() else {
        return Err(format!("expected 4 numbers, got {}", coords.len()));
    };

    let from = Pos::from_signed(from_row, from_col).ok_or_else(|| format!("square ({from_row},{from_col}) is off the board"))?;
    let to = Pos::from_signed(to_row, to_col).ok_or_else(|| format!("square ({to_row},{to_col}) is off the board"))?;
    Ok(Move::new(from, to))
}

fn report(outcome: Option<GameOutcome>, plies: usize, session: &SearchStats) {
    match outcome {
        Some(GameOutcome { winner, reason: WinReason::AllCaptured }) => {
            println!("{} wins: every opposing piece captured", winner.name());
        }
        Some(GameOutcome { winner, reason: WinReason::Blocked }) => {
            println!("{} wins: opponent has no legal move", winner.name());
        }
        None => println!("Stopped after {plies} plies without a result"),
    }

    println!(
        "Engine totals: nodes {}  prunes {} ({:.1}%)  time {}ms  {} nodes/s",
        session.nodes_expanded,
        session.prunes,
        session.prune_rate(),
        session.elapsed.as_millis(),
        session.nodes_per_second(),
    );
}
