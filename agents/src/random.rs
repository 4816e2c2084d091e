use crate::Agent;
use checkers_core::{all_moves, Board, Color};
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Agent that plays a uniformly random legal move.
pub struct RandomAgent {
    name: String,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            name: "Random".to_string(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn take_turn(&mut self, board: &Board, color: Color) -> Option<Board> {
        let moves = all_moves(board, color);

        let mut rng = thread_rng();
        moves.choose(&mut rng).map(|mv| {
            let mut next = board.clone();
            next.apply_move(mv.from, mv.to);
            next.remove_captured(&mv.captured);
            next
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
