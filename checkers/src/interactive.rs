use checkers_agents::Agent;
use checkers_core::{legal_moves, Board, Col, Color, MoveMap, Piece, Row, Square, SIZE};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent},
    style::{Color as TermColor, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
    ExecutableCommand,
};
use std::io::{self, Write};

/// Fixed lookahead for the automated opponent.
pub const ENGINE_DEPTH: u8 = 3;

/// The human plays Dark and moves first; the engine answers as Light.
const HUMAN: Color = Color::Dark;
const ENGINE: Color = Color::Light;

pub struct InteractiveGame {
    board: Board,
    turn: Color,
    cursor: (u8, u8), // (row, col) in 0-7 range
    selected: Option<Square>,
    destinations: MoveMap,
    message: String,
    engine: Box<dyn Agent>,
}

impl InteractiveGame {
    pub fn new(engine: Box<dyn Agent>) -> Self {
        Self {
            board: Board::starting_position(),
            turn: HUMAN,
            cursor: (5, 0), // Start on a Dark man
            selected: None,
            destinations: MoveMap::new(),
            message: String::from("Use hjkl to move, Enter to select/move, q to quit"),
            engine,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(Hide)?;
        stdout.execute(Clear(ClearType::All))?;

        let result = self.game_loop();

        // Cleanup
        stdout.execute(Show)?;
        terminal::disable_raw_mode()?;
        stdout.execute(Clear(ClearType::All))?;
        stdout.execute(MoveTo(0, 0))?;

        result
    }

    fn game_loop(&mut self) -> io::Result<()> {
        loop {
            self.draw_board()?;

            if let Some(winner) = self.board.winner() {
                self.message = format!("{} wins! Press any key to exit.", winner);
                self.draw_board()?;
                event::read()?; // Wait for any key
                break;
            }

            if self.turn == ENGINE {
                self.engine_turn()?;
                continue;
            }

            // Handle input
            if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('h') | KeyCode::Left => self.move_cursor(0, -1),
                    KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1, 0),
                    KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1, 0),
                    KeyCode::Char('l') | KeyCode::Right => self.move_cursor(0, 1),
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        if self.handle_selection() {
                            // Player made a move, the engine answers
                            self.turn = ENGINE;
                        }
                    }
                    KeyCode::Char('n') => self.new_game(),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn move_cursor(&mut self, drow: i8, dcol: i8) {
        let new_row = self.cursor.0 as i8 + drow;
        let new_col = self.cursor.1 as i8 + dcol;

        if new_row >= 0 && new_row < SIZE as i8 && new_col >= 0 && new_col < SIZE as i8 {
            self.cursor = (new_row as u8, new_col as u8);
        }
    }

    /// Selects a piece or commits a move, returning true once a move was
    /// played. A press on a highlighted destination plays the move; any
    /// other square becomes the new selection attempt.
    fn handle_selection(&mut self) -> bool {
        let square = Square::new(
            Row::new(self.cursor.0).unwrap(),
            Col::new(self.cursor.1).unwrap(),
        );

        if let Some(from) = self.selected {
            if self.destinations.contains_key(&square) {
                match self.board.play(HUMAN, from, square) {
                    Ok(mv) => {
                        self.selected = None;
                        self.destinations.clear();
                        self.message = format!("You played {}", mv);
                        return true;
                    }
                    Err(e) => {
                        self.selected = None;
                        self.destinations.clear();
                        self.message = e.to_string();
                        return false;
                    }
                }
            }
        }

        // Try to select (or re-select) one of the player's pieces.
        self.selected = None;
        self.destinations.clear();

        if let Some(piece) = self.board.piece_at(square) {
            if piece.color == HUMAN {
                self.selected = Some(square);
                self.destinations = legal_moves(&self.board, square);
                self.message = format!(
                    "Selected {} at {}",
                    if piece.king { "king" } else { "man" },
                    square
                );
            }
        }

        false
    }

    fn engine_turn(&mut self) -> io::Result<()> {
        self.message = format!("{} thinking...", self.engine.name());
        self.draw_board()?;

        if let Some(next) = self.engine.take_turn(&self.board, ENGINE) {
            self.board = next;
            self.message = format!("{} moved", self.engine.name());
        }

        self.turn = HUMAN;
        Ok(())
    }

    fn new_game(&mut self) {
        self.board = Board::starting_position();
        self.turn = HUMAN;
        self.selected = None;
        self.destinations.clear();
        self.cursor = (5, 0);
        self.message = String::from("New game started!");
    }

    fn draw_board(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.execute(MoveTo(0, 0))?;

        // Title
        println!("Checkers - Interactive Mode (vim keys: hjkl)\r");
        println!("Commands: Enter=select/move, n=new, q=quit\r");
        println!("\r");

        // Board with coordinates
        println!("  a b c d e f g h  \r");
        println!(" ┌─────────────────┐\r");

        for row_idx in 0..SIZE {
            print!("{}│ ", SIZE - row_idx);

            for col_idx in 0..SIZE {
                let square =
                    Square::new(Row::new(row_idx).unwrap(), Col::new(col_idx).unwrap());

                let is_cursor = self.cursor == (row_idx, col_idx);
                let is_selected = self.selected == Some(square);
                let is_destination = self.destinations.contains_key(&square);

                // Set background color
                if is_cursor {
                    stdout.execute(SetBackgroundColor(TermColor::Yellow))?;
                } else if is_selected {
                    stdout.execute(SetBackgroundColor(TermColor::Green))?;
                } else if is_destination {
                    stdout.execute(SetBackgroundColor(TermColor::Blue))?;
                } else if square.is_playable() {
                    stdout.execute(SetBackgroundColor(TermColor::DarkGrey))?;
                } else {
                    stdout.execute(SetBackgroundColor(TermColor::Black))?;
                }

                // Draw piece or empty square
                if let Some(piece) = self.board.piece_at(square) {
                    let symbol = match piece {
                        Piece {
                            color: Color::Light,
                            king: false,
                        } => '⛀',
                        Piece {
                            color: Color::Light,
                            king: true,
                        } => '⛁',
                        Piece {
                            color: Color::Dark,
                            king: false,
                        } => '⛂',
                        Piece {
                            color: Color::Dark,
                            king: true,
                        } => '⛃',
                    };

                    if piece.color == Color::Light {
                        stdout.execute(SetForegroundColor(TermColor::White))?;
                    } else {
                        stdout.execute(SetForegroundColor(TermColor::Red))?;
                    }

                    print!("{} ", symbol);
                } else {
                    print!("  ");
                }

                stdout.execute(ResetColor)?;
            }

            println!("│{}\r", SIZE - row_idx);
        }

        println!(" └─────────────────┘\r");
        println!("  a b c d e f g h  \r");
        println!("\r");

        // Game info
        println!(
            "{} to move | Light {} v Dark {}\r",
            self.turn,
            self.board.remaining(Color::Light),
            self.board.remaining(Color::Dark)
        );

        // Status message
        println!("\r");
        println!("{}\r", self.message);

        stdout.flush()?;
        Ok(())
    }
}
