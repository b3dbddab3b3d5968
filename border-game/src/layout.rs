//! 局面文本格式解析和生成
//!
//! 格式：`<棋盘> <走子方>`
//!
//! 棋盘按行用 `/` 分隔，每格一个字符：`.` 空，`1` 玩家一，`2` 玩家二，边框格也要写出。
//! 走子方为 `1` 或 `2`，省略时默认玩家一。
//!
//! 示例（n = 2 的初始局面）：
//! `.22./1.../1.../.... 1`

use crate::board::Board;
use crate::constants::MAX_BOARD_SIZE;
use crate::error::{GameError, Result};
use crate::piece::{Cell, PlayerId, Position};
use crate::rules::{GameState, Rules};

/// 局面文本格式处理
pub struct Layout;

impl Layout {
    /// 解析局面文本
    ///
    /// 效用值按棋盘重新计算：哪一方的目标线已被占满就判该方获胜。
    pub fn parse(text: &str) -> Result<GameState> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        let Some(board_part) = parts.first() else {
            return Err(invalid("Empty layout string"));
        };

        let board = Self::parse_board(board_part)?;

        let to_move = match parts.get(1) {
            Some(side) => {
                let mut chars = side.chars();
                match (chars.next().and_then(PlayerId::from_layout_char), chars.next()) {
                    (Some(player), None) => player,
                    _ => return Err(invalid(format!("Invalid side to move: {}", side))),
                }
            }
            None => PlayerId::Player1,
        };

        if parts.len() > 2 {
            return Err(invalid("Unexpected trailing fields"));
        }

        let utility = Rules::utility_from_goals(&board);
        Ok(GameState::new(board, to_move, utility))
    }

    /// 解析棋盘部分
    pub fn parse_board(text: &str) -> Result<Board> {
        let rows: Vec<&str> = text.split('/').collect();
        let size = rows.len();
        if size < 3 {
            return Err(invalid(format!("Board needs at least 3 rows, got {}", size)));
        }
        if size - 2 > MAX_BOARD_SIZE {
            return Err(invalid(format!(
                "Board interior {} exceeds maximum {}",
                size - 2,
                MAX_BOARD_SIZE
            )));
        }

        let mut board = Board::empty(size - 2);
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().collect();
            if cells.len() != size {
                return Err(invalid(format!(
                    "Row {} has {} cells, expected {}",
                    row,
                    cells.len(),
                    size
                )));
            }
            for (col, c) in cells.into_iter().enumerate() {
                let cell = Cell::from_layout_char(c)
                    .ok_or_else(|| invalid(format!("Invalid cell character: {}", c)))?;
                board.set(Position::new(row as u8, col as u8), cell);
            }
        }

        Ok(board)
    }

    /// 生成局面文本
    pub fn format(state: &GameState) -> String {
        format!(
            "{} {}",
            Self::format_board(state.board()),
            state.to_move().to_layout_char()
        )
    }

    /// 生成棋盘部分
    pub fn format_board(board: &Board) -> String {
        board
            .rows()
            .map(|row| row.iter().map(Cell::to_layout_char).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn invalid(reason: impl Into<String>) -> GameError {
    GameError::InvalidLayout {
        reason: reason.into(),
    }
}
