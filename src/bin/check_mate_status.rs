use std::env;
use std::process::ExitCode;

use chess_rules::{Game, Move};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut game = Game::new();
    for text in &args {
        let mv: Move = match text.parse() {
            Ok(mv) => mv,
            Err(err) => {
                eprintln!("{text}: {err}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(err) = game.play(mv.from, mv.to) {
            eprintln!("{text}: {err}");
            return ExitCode::FAILURE;
        }
        if let Some(piece) = mv.promotion {
            if let Err(err) = game.promote(piece) {
                eprintln!("{text}: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let legal_moves = game.board().clone().legal_moves();
    println!("side_to_move: {}", game.side_to_move());
    println!("status: {}", game.status());
    println!("history: {}", game.history());
    println!("legal_moves: {}", legal_moves.len());
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
