//! The text console for the rules engine.
//!
//! Squares are typed in coordinate notation (`e3`, rank 0 on Red's side).
//! A lone square behaves like a click on it; a four character move such as
//! `h2e2` plays directly for the side to move.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use xiangqi_rules::{Config, Game, Move, SelectionState, Side, Square};

pub struct Options {
    pub auto_black: bool,
    pub seed: Option<u64>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Click(Square),
    Play(Move),
    Moves,
    Board,
    Reset,
    Help,
    Exit,
}

/// Runs the read-eval-print loop until `exit` or end of input.
pub fn run(config: Config, options: Options) -> io::Result<()> {
    let mut game = Game::with_config(config);
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let stdin = io::stdin();
    let mut out = io::stdout();

    writeln!(out, "--- Xiangqi rules engine ---")?;
    print_help(&mut out)?;
    if options.auto_black {
        auto_black_turn(&mut game, &mut rng, &mut out)?;
    }
    writeln!(out, "{}", render_board(&game))?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                writeln!(out, "{msg}")?;
                continue;
            }
        };

        let outcome = match command {
            Command::Exit => break,
            Command::Help => {
                print_help(&mut out)?;
                continue;
            }
            Command::Board => Ok(()),
            Command::Reset => {
                game.reset();
                Ok(())
            }
            Command::Moves => {
                let moves: Vec<String> = game.all_legal_moves().iter().map(Move::to_string).collect();
                writeln!(out, "{} to move, {} moves: {}", game.side_to_move(), moves.len(), moves.join(" "))?;
                continue;
            }
            Command::Click(sq) => game
                .click(sq.col() as i32, sq.row() as i32)
                .map(|_| ()),
            Command::Play(mv) => game.play(mv).map(|_| ()),
        };

        if let Err(err) = outcome {
            writeln!(out, "Rejected: {err}")?;
            continue;
        }

        if options.auto_black {
            auto_black_turn(&mut game, &mut rng, &mut out)?;
        }
        writeln!(out, "{}", render_board(&game))?;
    }

    Ok(())
}

/// Plays one random Black move if it is Black's turn. Also runs before the
/// first prompt, so a Black-first game does not wait on Red.
fn auto_black_turn<R: Rng>(game: &mut Game, rng: &mut R, out: &mut impl Write) -> io::Result<()> {
    if game.side_to_move() != Side::Black {
        return Ok(());
    }
    match game.random_move(rng) {
        Some(mv) => {
            game.play(mv).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            info!("automatic opponent played {mv}");
            writeln!(out, "Black plays {mv}")
        }
        None => writeln!(out, "Black has no legal move."),
    }
}

fn parse_command(input: &str) -> Result<Option<Command>, String> {
    let input = input.trim();
    let command = match input {
        "" => return Ok(None),
        "exit" | "quit" => Command::Exit,
        "help" | "?" => Command::Help,
        "moves" => Command::Moves,
        "board" => Command::Board,
        "reset" => Command::Reset,
        _ if input.len() == 2 => Command::Click(input.parse()?),
        _ if input.len() == 4 => Command::Play(input.parse()?),
        _ => return Err(format!("Unknown command '{input}'. Type 'help'.")),
    };
    Ok(Some(command))
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Enter a square (e3) to select or to move there, a move (h2e2) to play it,")?;
    writeln!(out, "'moves' to list legal moves, 'board', 'reset', or 'exit'.")
}

fn render_board(game: &Game) -> String {
    let config = game.config();
    let (selected, destinations) = match game.selection() {
        SelectionState::PieceSelected { square, moves } => (Some(*square), moves.as_slice().to_vec()),
        SelectionState::Idle => (None, Vec::new()),
    };

    let mut text = String::new();
    text.push_str(&format!("{} to move\n", game.side_to_move()));
    for sq in Square::all() {
        if sq.col() == 0 {
            text.push_str(&format!("{} ", 9 - sq.row()));
        }
        let cell = match game.board()[sq] {
            Some(piece) => piece.label(config.label_language).to_string(),
            None if destinations.contains(&sq) => "+".to_string(),
            None => "·".to_string(),
        };
        let cell = match game.board()[sq] {
            _ if !config.colored_output => cell,
            _ if Some(sq) == selected => cell.reverse().to_string(),
            _ if destinations.contains(&sq) => cell.green().to_string(),
            Some(piece) if piece.side == Side::Red => cell.red().to_string(),
            _ => cell,
        };
        text.push_str(&cell);
        text.push(' ');
        if sq.col() == 8 {
            text.push('\n');
            if sq.row() == 4 {
                text.push_str("  ~~~~~~~~~~~~~~~~~\n");
            }
        }
    }
    text.push_str("  a b c d e f g h i");
    text
}
