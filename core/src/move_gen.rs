use crate::board::Board;
use crate::types::*;
use std::collections::BTreeMap;

/// Every destination reachable by one piece in a single turn, mapped to the
/// squares of the pieces captured on the way there (empty for a plain step).
///
/// A BTreeMap keeps iteration in square order, so enumerating moves is
/// deterministic, and inserting a destination twice keeps the later chain
/// (two capture chains can converge on the same landing square).
pub type MoveMap = BTreeMap<Square, Vec<Square>>;

/// Computes all legal moves for the piece on `from`.
///
/// Men move and capture along their two forward diagonals; kings along all
/// four. Each direction is walked outward: an adjacent empty square is a
/// plain step, an enemy piece with an empty square behind it is a jump, and
/// every jump landing recurses to extend the capture chain.
///
/// Returns an empty map if the square is vacant.
pub fn legal_moves(board: &Board, from: Square) -> MoveMap {
    let mut moves = MoveMap::new();

    let Some(piece) = board.piece_at(from) else {
        return moves;
    };

    let forward = piece.color.forward();
    for col_step in [-1, 1] {
        traverse(board, piece, from, forward, col_step, &[], &mut moves);
        if piece.king {
            traverse(board, piece, from, -forward, col_step, &[], &mut moves);
        }
    }

    moves
}

/// Walks one diagonal direction from `start`, recording the step or jump it
/// finds and recursing from every jump landing.
///
/// `skipped` holds the captures that led to `start`; it is non-empty exactly
/// when the walk is extending a chain, in which case plain steps are not
/// destinations. Each recursion gets a fresh copy of the chain so sibling
/// branches never see each other's captures.
fn traverse(
    board: &Board,
    piece: Piece,
    start: Square,
    row_step: i8,
    col_step: i8,
    skipped: &[Square],
    moves: &mut MoveMap,
) {
    // A man looks at most one jump ahead per leg; a king walks until the
    // board edge, though each leg is still a step or a step-then-land jump.
    let max_steps = if piece.king { SIZE } else { 2 };

    let mut last: Option<Square> = None;
    let mut current = start;

    for _ in 0..max_steps {
        current = match current.offset(row_step, col_step) {
            Some(square) => square,
            None => break,
        };

        match board.piece_at(current) {
            None => {
                if let Some(captured) = last {
                    let mut chain = skipped.to_vec();
                    chain.push(captured);
                    moves.insert(current, chain.clone());

                    // Chain further jumps from the landing square, continuing
                    // in the same row direction but fanning out by column.
                    traverse(board, piece, current, row_step, -1, &chain, moves);
                    traverse(board, piece, current, row_step, 1, &chain, moves);
                } else if skipped.is_empty() {
                    moves.insert(current, Vec::new());
                }
                break;
            }
            Some(other) if other.color == piece.color => break,
            Some(_) => {
                // Two enemy pieces in a row block the diagonal.
                if last.is_some() {
                    break;
                }
                last = Some(current);
            }
        }
    }
}

/// Flattens the legal moves of every piece of `color` into one list, pieces
/// in row-major order and destinations in square order. Search and the
/// agents rely on this enumeration order being deterministic.
pub fn all_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();

    for (from, _) in board.pieces(color) {
        for (to, captured) in legal_moves(board, from) {
            moves.push(Move { from, to, captured });
        }
    }

    moves
}

/// Returns true if any piece of `color` has at least one legal move.
pub fn has_any_move(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .iter()
        .any(|&(from, _)| !legal_moves(board, from).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(Row::new(row).unwrap(), Col::new(col).unwrap())
    }

    #[test]
    fn test_opening_move_counts() {
        let board = Board::starting_position();
        assert_eq!(all_moves(&board, Color::Dark).len(), 7);
        assert_eq!(all_moves(&board, Color::Light).len(), 7);
    }

    #[test]
    fn test_man_steps_forward_only() {
        let mut board = Board::empty();
        board.set_piece(sq(5, 2), Some(Piece::man(Color::Dark)));

        let moves = legal_moves(&board, sq(5, 2));
        assert_eq!(moves.len(), 2);
        assert_eq!(moves.get(&sq(4, 1)), Some(&vec![]));
        assert_eq!(moves.get(&sq(4, 3)), Some(&vec![]));
        // Nothing backward.
        assert!(!moves.contains_key(&sq(6, 1)));
        assert!(!moves.contains_key(&sq(6, 3)));
    }

    #[test]
    fn test_vacant_square_has_no_moves() {
        let board = Board::empty();
        assert!(legal_moves(&board, sq(4, 3)).is_empty());
    }

    #[test]
    fn test_single_capture() {
        let mut board = Board::empty();
        board.set_piece(sq(4, 3), Some(Piece::man(Color::Dark)));
        board.set_piece(sq(3, 2), Some(Piece::man(Color::Light)));

        let moves = legal_moves(&board, sq(4, 3));

        // The jump lands behind the enemy piece and captures exactly it.
        assert_eq!(moves.get(&sq(2, 1)), Some(&vec![sq(3, 2)]));
        // The occupied square itself is not a destination.
        assert!(!moves.contains_key(&sq(3, 2)));
        // The other diagonal is still a plain step.
        assert_eq!(moves.get(&sq(3, 4)), Some(&vec![]));
    }

    #[test]
    fn test_own_piece_blocks() {
        let mut board = Board::empty();
        board.set_piece(sq(5, 0), Some(Piece::man(Color::Dark)));
        board.set_piece(sq(4, 1), Some(Piece::man(Color::Dark)));

        assert!(legal_moves(&board, sq(5, 0)).is_empty());
    }

    #[test]
    fn test_two_enemies_in_a_row_block() {
        let mut board = Board::empty();
        board.set_piece(sq(5, 0), Some(Piece::man(Color::Dark)));
        board.set_piece(sq(4, 1), Some(Piece::man(Color::Light)));
        board.set_piece(sq(3, 2), Some(Piece::man(Color::Light)));

        assert!(legal_moves(&board, sq(5, 0)).is_empty());
    }

    #[test]
    fn test_double_jump_chain() {
        let mut board = Board::empty();
        board.set_piece(sq(5, 0), Some(Piece::man(Color::Dark)));
        board.set_piece(sq(4, 1), Some(Piece::man(Color::Light)));
        board.set_piece(sq(2, 3), Some(Piece::man(Color::Light)));

        let moves = legal_moves(&board, sq(5, 0));

        // Stopping after the first jump is allowed...
        assert_eq!(moves.get(&sq(3, 2)), Some(&vec![sq(4, 1)]));
        // ...and the full chain accumulates both captures in route order.
        assert_eq!(moves.get(&sq(1, 4)), Some(&vec![sq(4, 1), sq(2, 3)]));
    }

    #[test]
    fn test_chain_applies_cleanly() {
        let mut board = Board::empty();
        board.set_piece(sq(5, 0), Some(Piece::man(Color::Dark)));
        board.set_piece(sq(4, 1), Some(Piece::man(Color::Light)));
        board.set_piece(sq(2, 3), Some(Piece::man(Color::Light)));

        let mv = board.play(Color::Dark, sq(5, 0), sq(1, 4)).unwrap();
        assert_eq!(mv.captured.len(), 2);
        assert!(board.piece_at(sq(4, 1)).is_none());
        assert!(board.piece_at(sq(2, 3)).is_none());
        assert_eq!(board.remaining(Color::Light), 0);
        assert_eq!(board.piece_at(sq(1, 4)), Some(Piece::man(Color::Dark)));
    }

    #[test]
    fn test_converging_chains_keep_later_one() {
        // Two double jumps from c3 converge on c7; the chain enumerated
        // later (the right-hand one) overwrites the earlier entry.
        let mut board = Board::empty();
        board.set_piece(sq(5, 2), Some(Piece::man(Color::Dark)));
        board.set_piece(sq(4, 1), Some(Piece::man(Color::Light)));
        board.set_piece(sq(2, 1), Some(Piece::man(Color::Light)));
        board.set_piece(sq(4, 3), Some(Piece::man(Color::Light)));
        board.set_piece(sq(2, 3), Some(Piece::man(Color::Light)));

        let moves = legal_moves(&board, sq(5, 2));
        assert_eq!(moves.get(&sq(1, 2)), Some(&vec![sq(4, 3), sq(2, 3)]));
    }

    #[test]
    fn test_king_moves_all_directions() {
        let mut board = Board::empty();
        board.set_piece(sq(4, 3), Some(Piece::king(Color::Dark)));

        let moves = legal_moves(&board, sq(4, 3));
        assert_eq!(moves.len(), 4);
        for dest in [sq(3, 2), sq(3, 4), sq(5, 2), sq(5, 4)] {
            assert_eq!(moves.get(&dest), Some(&vec![]));
        }
    }

    #[test]
    fn test_king_captures_backward() {
        let mut board = Board::empty();
        board.set_piece(sq(4, 3), Some(Piece::king(Color::Light)));
        board.set_piece(sq(3, 2), Some(Piece::man(Color::Dark)));

        // Light's forward is down the board; a king takes upward too.
        let moves = legal_moves(&board, sq(4, 3));
        assert_eq!(moves.get(&sq(2, 1)), Some(&vec![sq(3, 2)]));
    }

    #[test]
    fn test_man_near_edge_keeps_both_forward_steps() {
        let mut board = Board::empty();
        board.set_piece(sq(1, 2), Some(Piece::man(Color::Dark)));

        let moves = legal_moves(&board, sq(1, 2));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains_key(&sq(0, 1)));
        assert!(moves.contains_key(&sq(0, 3)));
    }

    #[test]
    fn test_has_any_move() {
        let mut board = Board::empty();
        board.set_piece(sq(5, 0), Some(Piece::man(Color::Dark)));
        board.set_piece(sq(4, 1), Some(Piece::man(Color::Dark)));
        assert!(has_any_move(&board, Color::Dark));

        // Boxed in: both men blocked by the edge and the Light wall.
        let mut boxed = Board::empty();
        boxed.set_piece(sq(7, 0), Some(Piece::man(Color::Dark)));
        boxed.set_piece(sq(6, 1), Some(Piece::man(Color::Dark)));
        boxed.set_piece(sq(5, 0), Some(Piece::man(Color::Light)));
        boxed.set_piece(sq(5, 2), Some(Piece::man(Color::Light)));
        boxed.set_piece(sq(4, 3), Some(Piece::man(Color::Light)));
        assert!(!has_any_move(&boxed, Color::Dark));
        assert_eq!(boxed.winner(), Some(Color::Light));
    }
}
