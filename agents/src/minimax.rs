use crate::{search::search, Agent};
use checkers_core::{has_any_move, Board, Color};

/// Agent that plays the move chosen by a fixed-depth minimax search.
pub struct MinimaxAgent {
    name: String,
    depth: u8,
}

impl MinimaxAgent {
    pub fn new(depth: u8) -> Self {
        MinimaxAgent {
            name: format!("Minimax(depth={})", depth),
            depth,
        }
    }
}

impl Agent for MinimaxAgent {
    fn take_turn(&mut self, board: &Board, color: Color) -> Option<Board> {
        if !has_any_move(board, color) {
            return None;
        }

        let result = search(board, self.depth, color);
        Some(result.board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_a_move_from_the_start() {
        let board = Board::starting_position();
        let mut agent = MinimaxAgent::new(2);

        let next = agent.take_turn(&board, Color::Light).unwrap();
        assert_ne!(next, board);
        assert_eq!(next.remaining(Color::Light), 12);
    }

    #[test]
    fn test_no_move_when_eliminated() {
        let board = Board::empty();
        let mut agent = MinimaxAgent::new(3);

        assert!(agent.take_turn(&board, Color::Dark).is_none());
    }
}
