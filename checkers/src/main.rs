mod interactive;

use checkers_agents::{search, MinimaxAgent, RandomAgent};
use checkers_core::{perft, perft_divide, positions, Board, Col, Color, Piece, Row, Square, SIZE};
use std::env;
use std::fs;

fn display_board(board: &Board) {
    println!("\n  a b c d e f g h");
    println!("  ---------------");

    for row_idx in 0..SIZE {
        let row = Row::new(row_idx).unwrap();
        print!("{} ", SIZE - row_idx);

        for col_idx in 0..SIZE {
            let col = Col::new(col_idx).unwrap();
            let square = Square::new(row, col);

            match board.piece_at(square) {
                Some(piece) => print!("{} ", piece_symbol(piece)),
                None => print!(". "),
            }
        }

        println!("| {}", SIZE - row_idx);
    }

    println!("  ---------------");
    println!("  a b c d e f g h\n");

    println!(
        "Light: {} pieces, {} kings | Dark: {} pieces, {} kings",
        board.remaining(Color::Light),
        board.kings(Color::Light),
        board.remaining(Color::Dark),
        board.kings(Color::Dark)
    );
}

fn piece_symbol(piece: Piece) -> char {
    match (piece.color, piece.king) {
        (Color::Light, false) => '⛀',
        (Color::Light, true) => '⛁',
        (Color::Dark, false) => '⛂',
        (Color::Dark, true) => '⛃',
    }
}

/// Loads a board from a layout file, or the starting position if no path
/// was given. Returns None after printing the error.
fn load_board(path: Option<&str>) -> Option<Board> {
    match path {
        None => Some(Board::starting_position()),
        Some(path) => {
            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("Error reading {}: {}", path, e);
                    return None;
                }
            };
            match Board::from_layout(&text) {
                Ok(board) => Some(board),
                Err(e) => {
                    eprintln!("Error parsing layout: {}", e);
                    None
                }
            }
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "play" {
        let engine: Box<dyn checkers_agents::Agent> =
            if args.len() > 2 && args[2] == "random" {
                Box::new(RandomAgent::new())
            } else {
                Box::new(MinimaxAgent::new(interactive::ENGINE_DEPTH))
            };

        let mut game = interactive::InteractiveGame::new(engine);
        if let Err(e) = game.run() {
            eprintln!("Terminal error: {}", e);
        }
    } else if args.len() > 1 && args[1] == "eval" {
        let Some(board) = load_board(args.get(2).map(String::as_str)) else {
            return;
        };

        display_board(&board);
        println!("Evaluation: {} (+ = Light, - = Dark)", board.evaluate());

        match board.winner() {
            Some(color) => println!("Game over: {} wins", color),
            None => println!("Game in progress"),
        }
    } else if args.len() > 1 && args[1] == "search" {
        let depth: u8 = args
            .get(2)
            .and_then(|s| s.parse().ok())
            .unwrap_or(interactive::ENGINE_DEPTH);
        let Some(board) = load_board(args.get(3).map(String::as_str)) else {
            return;
        };

        println!("Searching to depth {} for Light...", depth);

        let start = std::time::Instant::now();
        let result = search(&board, depth, Color::Light);
        let elapsed = start.elapsed();

        display_board(&result.board);
        println!("Value: {}", result.value);
        println!("Nodes: {}", result.nodes);
        println!("Time: {:.2}s", elapsed.as_secs_f64());
    } else if args.len() > 1 && args[1] == "perft" {
        if args.len() < 3 {
            println!("Usage: {} perft <depth> [layout-file]", args[0]);
            return;
        }

        let depth: u8 = args[2].parse().unwrap_or(1);
        let Some(board) = load_board(args.get(3).map(String::as_str)) else {
            return;
        };

        println!("Running perft({}) for Dark to move...", depth);

        if depth <= 3 {
            // Show move breakdown for shallow depths
            let results = perft_divide(&board, Color::Dark, depth);
            let mut total = 0;

            for (mv, count) in &results {
                println!("{}: {}", mv, count);
                total += count;
            }

            println!("\nTotal: {}", total);
        } else {
            let start = std::time::Instant::now();
            let nodes = perft(&board, Color::Dark, depth);
            let elapsed = start.elapsed();

            println!("Nodes: {}", nodes);
            println!("Time: {:.2}s", elapsed.as_secs_f64());
        }
    } else if args.len() > 1 && args[1] == "layout" {
        // Print the starting layout as a template for position files.
        println!("{}", positions::STARTING);
    } else {
        println!("Checkers engine");
        println!("Commands:");
        println!("  play [random]          - Play against the engine (or a random mover)");
        println!("  eval [layout-file]     - Evaluate a position");
        println!("  search [depth] [layout-file] - Search for Light's best move");
        println!("  perft <depth> [layout-file]  - Count turn sequences from a position");
        println!("  layout                 - Print the starting layout as a template");
    }
}
