//! 走法生成

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::piece::{Cell, PlayerId, Position};

/// 走法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// 无子可动时跳过本回合
    Pass,
    /// 从 `from` 走到 `to`（单步或跳吃）
    Step { from: Position, to: Position },
}

impl Move {
    pub fn step(from: Position, to: Position) -> Self {
        Move::Step { from, to }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pass => write!(f, "pass"),
            Move::Step { from, to } => write!(f, "{} -> {}", from, to),
        }
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成指定玩家的所有合法走法
    ///
    /// 按起点行优先排序，同一起点先单步后跳吃。没有任何走法时返回 `[Move::Pass]`，
    /// 因此结果永不为空。
    pub fn legal_moves(board: &Board, player: PlayerId) -> Vec<Move> {
        let mut moves = Self::step_moves(board, player);
        if moves.is_empty() {
            moves.push(Move::Pass);
        }
        moves
    }

    /// 指定玩家是否有非 Pass 的走法
    pub fn has_moves(board: &Board, player: PlayerId) -> bool {
        board
            .pieces(player)
            .into_iter()
            .any(|pos| {
                Self::simple_target(board, pos, player).is_some()
                    || Self::jump_target(board, pos, player).is_some()
            })
    }

    /// 生成所有非 Pass 走法
    fn step_moves(board: &Board, player: PlayerId) -> Vec<Move> {
        let mut moves = Vec::new();

        for pos in board.pieces(player) {
            if let Some(to) = Self::simple_target(board, pos, player) {
                moves.push(Move::step(pos, to));
            }
            if let Some(to) = Self::jump_target(board, pos, player) {
                moves.push(Move::step(pos, to));
            }
        }

        moves
    }

    /// 单步：前方相邻格为空
    fn simple_target(board: &Board, pos: Position, player: PlayerId) -> Option<Position> {
        let (dr, dc) = player.direction();
        let to = pos.offset(dr, dc, board.size())?;
        Self::is_empty(board, to).then_some(to)
    }

    /// 跳吃：前方相邻格是对手棋子，再前一格为空
    ///
    /// 被跳过的对手棋子不会被移除。
    fn jump_target(board: &Board, pos: Position, player: PlayerId) -> Option<Position> {
        let (dr, dc) = player.direction();
        let over = pos.offset(dr, dc, board.size())?;
        if board.get(over) != Some(Cell::from(player.opponent())) {
            return None;
        }
        let to = pos.offset(2 * dr, 2 * dc, board.size())?;
        Self::is_empty(board, to).then_some(to)
    }

    fn is_empty(board: &Board, pos: Position) -> bool {
        board.get(pos).is_some_and(|cell| cell.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;

    #[test]
    fn test_initial_moves_n2() {
        let board = Board::initial(2);
        let moves = MoveGenerator::legal_moves(&board, PlayerId::Player1);

        assert_eq!(
            moves,
            vec![
                Move::step(Position::new(1, 0), Position::new(1, 1)),
                Move::step(Position::new(2, 0), Position::new(2, 1)),
            ]
        );
    }

    #[test]
    fn test_initial_moves_n1() {
        let board = Board::initial(1);
        let moves = MoveGenerator::legal_moves(&board, PlayerId::Player1);

        assert_eq!(moves, vec![Move::step(Position::new(1, 0), Position::new(1, 1))]);
    }

    #[test]
    fn test_player2_moves_down() {
        let board = Board::initial(2);
        let moves = MoveGenerator::legal_moves(&board, PlayerId::Player2);

        assert_eq!(
            moves,
            vec![
                Move::step(Position::new(0, 1), Position::new(1, 1)),
                Move::step(Position::new(0, 2), Position::new(1, 2)),
            ]
        );
    }

    #[test]
    fn test_jump_over_opponent() {
        // 玩家二在 (0,1)，正下方 (1,1) 是玩家一，(2,1) 为空
        let state = Layout::parse(".2../.1../..../.... 2").unwrap();
        let moves = MoveGenerator::legal_moves(state.board(), PlayerId::Player2);
        assert_eq!(moves, vec![Move::step(Position::new(0, 1), Position::new(2, 1))]);
    }

    #[test]
    fn test_jump_blocked_by_occupied_landing() {
        let state = Layout::parse("..../12../..../.... 1").unwrap();
        let moves = MoveGenerator::legal_moves(state.board(), PlayerId::Player1);
        assert_eq!(moves, vec![Move::step(Position::new(1, 0), Position::new(1, 2))]);

        // 落点被占，不能跳
        let state = Layout::parse("..../122./..../.... 1").unwrap();
        let moves = MoveGenerator::legal_moves(state.board(), PlayerId::Player1);
        assert_eq!(moves, vec![Move::Pass]);
    }

    #[test]
    fn test_jump_does_not_cross_own_piece() {
        let state = Layout::parse("..../11../..../.... 1").unwrap();
        let moves = MoveGenerator::legal_moves(state.board(), PlayerId::Player1);

        // 只有前面那枚可以走，后面那枚被自己人挡住
        assert_eq!(moves, vec![Move::step(Position::new(1, 1), Position::new(1, 2))]);
    }

    #[test]
    fn test_edge_of_board_yields_no_move() {
        // 已在目标线上的棋子无路可走
        let state = Layout::parse("..../...1/..../.... 1").unwrap();
        let moves = MoveGenerator::legal_moves(state.board(), PlayerId::Player1);

        assert_eq!(moves, vec![Move::Pass]);
        assert!(!MoveGenerator::has_moves(state.board(), PlayerId::Player1));
    }

    #[test]
    fn test_jump_out_of_bounds() {
        // 对手在目标线上，跳过去会越界
        let state = Layout::parse("..../..12/..../.... 1").unwrap();
        let moves = MoveGenerator::legal_moves(state.board(), PlayerId::Player1);

        assert_eq!(moves, vec![Move::Pass]);
    }

    #[test]
    fn test_row_major_order() {
        let state = Layout::parse("..../.1../1.../.... 1").unwrap();
        let moves = MoveGenerator::legal_moves(state.board(), PlayerId::Player1);

        assert_eq!(
            moves,
            vec![
                Move::step(Position::new(1, 1), Position::new(1, 2)),
                Move::step(Position::new(2, 0), Position::new(2, 1)),
            ]
        );
    }

    #[test]
    fn test_has_moves_matches_legal_moves() {
        let board = Board::initial(3);
        assert!(MoveGenerator::has_moves(&board, PlayerId::Player1));
        assert!(MoveGenerator::has_moves(&board, PlayerId::Player2));
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::Pass.to_string(), "pass");
        assert_eq!(
            Move::step(Position::new(1, 0), Position::new(1, 1)).to_string(),
            "(1, 0) -> (1, 1)"
        );
    }
}
