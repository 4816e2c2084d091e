pub mod minimax;
pub mod random;
pub mod search;

use checkers_core::{Board, Color};

/// Core trait for checkers agents
pub trait Agent {
    /// Produce the board after this agent's turn, or None if the agent has
    /// no legal move (which loses the game).
    fn take_turn(&mut self, board: &Board, color: Color) -> Option<Board>;

    /// Get the agent's name
    fn name(&self) -> &str;
}

pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
pub use search::*;
