use crate::board::Board;
use crate::move_gen::all_moves;
use crate::types::{Color, Move};

/// Counts complete turn sequences of the given length, sides alternating
/// starting with `color`. A multi-jump is one turn. Used to validate the
/// move generator against hand-counted positions.
pub fn perft(board: &Board, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_moves(board, color);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in &moves {
        let mut next = board.clone();
        next.apply_move(mv.from, mv.to);
        next.remove_captured(&mv.captured);
        nodes += perft(&next, color.opponent(), depth - 1);
    }

    nodes
}

/// Perft with a per-root-move breakdown.
pub fn perft_divide(board: &Board, color: Color, depth: u8) -> Vec<(Move, u64)> {
    let mut results = Vec::new();

    for mv in all_moves(board, color) {
        let mut next = board.clone();
        next.apply_move(mv.from, mv.to);
        next.remove_captured(&mv.captured);

        let nodes = if depth <= 1 {
            1
        } else {
            perft(&next, color.opponent(), depth - 1)
        };
        results.push((mv, nodes));
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::positions;

    #[test]
    fn test_perft_starting_position() {
        let board = Board::starting_position();

        // Each side has 7 opening moves and the first two plies
        // cannot interact.
        assert_eq!(perft(&board, Color::Dark, 1), 7);
        assert_eq!(perft(&board, Color::Dark, 2), 49);
    }

    #[test]
    fn test_perft_counts_chains_as_single_turns() {
        let board = Board::from_layout(positions::DOUBLE_JUMP).unwrap();

        // The lone Dark man can stop after one jump or take the full chain.
        assert_eq!(perft(&board, Color::Dark, 1), 2);
    }

    #[test]
    fn test_perft_divide_matches_perft() {
        let board = Board::starting_position();
        let results = perft_divide(&board, Color::Dark, 2);

        assert_eq!(results.len(), 7);
        assert_eq!(
            results.iter().map(|(_, n)| n).sum::<u64>(),
            perft(&board, Color::Dark, 2)
        );
    }
}
