//! 棋盘

use serde::{Deserialize, Serialize};

use crate::constants::{BORDER_WIDTH, MAX_BOARD_SIZE};
use crate::error::GameError;
use crate::piece::{Cell, PlayerId, Position};

/// 带边框的正方形棋盘
///
/// 内部边长为 `n`，总边长为 `n + 2`。第 0 行/列与第 n+1 行/列是边框：
/// 左边框与上边框是双方的出发线，右边框与下边框是双方的目标线。
/// 棋盘一旦挂到 `GameState` 上就不再修改，所有变化都通过 [`Board::copy_with`] 产生新快照。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord")]
pub struct Board {
    /// 总边长（含边框）
    size: usize,
    /// 按行存储，索引为 row * size + col
    cells: Vec<Cell>,
}

/// 反序列化用的原始棋盘，校验后才转成 [`Board`]
#[derive(Deserialize)]
struct BoardRecord {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardRecord> for Board {
    type Error = GameError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        let interior = record.size.saturating_sub(2 * BORDER_WIDTH);
        if interior == 0 || interior > MAX_BOARD_SIZE {
            return Err(GameError::InvalidSize {
                size: interior,
                max: MAX_BOARD_SIZE,
            });
        }
        if record.cells.len() != record.size * record.size {
            return Err(GameError::InvalidLayout {
                reason: format!(
                    "Expected {} cells, got {}",
                    record.size * record.size,
                    record.cells.len()
                ),
            });
        }
        Ok(Self {
            size: record.size,
            cells: record.cells,
        })
    }
}

impl Board {
    /// 创建内部边长为 n 的空棋盘
    pub fn empty(n: usize) -> Self {
        let size = n + 2 * BORDER_WIDTH;
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// 创建初始棋盘
    ///
    /// 玩家一占据左边框（第 0 列，第 1..=n 行），玩家二占据上边框（第 0 行，第 1..=n 列），
    /// 内部全部为空。
    pub fn initial(n: usize) -> Self {
        let mut board = Self::empty(n);
        for i in 1..=n {
            board.set(Position::new(i as u8, 0), Cell::Player1);
            board.set(Position::new(0, i as u8), Cell::Player2);
        }
        board
    }

    /// 总边长（含边框）
    pub fn size(&self) -> usize {
        self.size
    }

    /// 内部边长 n
    pub fn interior_size(&self) -> usize {
        self.size - 2 * BORDER_WIDTH
    }

    /// 获取指定位置的格子，越界返回 None
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.cells[self.index(pos)])
        } else {
            None
        }
    }

    /// 返回一个只在 `pos` 处不同的新棋盘，原棋盘保持不变
    pub fn copy_with(&self, pos: Position, cell: Cell) -> Board {
        let mut board = self.clone();
        board.set(pos, cell);
        board
    }

    /// 位置是否在网格内（含边框）
    pub fn contains(&self, pos: Position) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// 按行遍历所有格子
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// 获取指定玩家所有棋子的位置（行优先顺序）
    pub fn pieces(&self, player: PlayerId) -> Vec<Position> {
        let target = Cell::from(player);
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == target)
            .map(|(index, _)| self.position(index))
            .collect()
    }

    /// 内部空格数量
    pub fn empty_interior_count(&self) -> usize {
        let n = self.interior_size();
        (1..=n)
            .flat_map(|row| (1..=n).map(move |col| Position::new(row as u8, col as u8)))
            .filter(|pos| self.get(*pos) == Some(Cell::Empty))
            .count()
    }

    /// 指定玩家的目标线格子
    ///
    /// 玩家一的目标是右边框（第 n+1 列），玩家二的目标是下边框（第 n+1 行）。
    pub fn goal_cells(&self, player: PlayerId) -> Vec<Position> {
        let n = self.interior_size();
        let edge = (n + 1) as u8;
        (1..=n as u8)
            .map(|i| match player {
                PlayerId::Player1 => Position::new(i, edge),
                PlayerId::Player2 => Position::new(edge, i),
            })
            .collect()
    }

    /// 目标线是否已被该玩家完全占据
    pub fn is_goal_filled(&self, player: PlayerId) -> bool {
        let target = Cell::from(player);
        self.goal_cells(player)
            .into_iter()
            .all(|pos| self.get(pos) == Some(target))
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        if self.contains(pos) {
            let index = self.index(pos);
            self.cells[index] = cell;
        }
    }

    fn index(&self, pos: Position) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    fn position(&self, index: usize) -> Position {
        Position::new((index / self.size) as u8, (index % self.size) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board() {
        let board = Board::initial(2);
        assert_eq!(board.size(), 4);
        assert_eq!(board.interior_size(), 2);

        // 左边框是玩家一
        assert_eq!(board.get(Position::new(1, 0)), Some(Cell::Player1));
        assert_eq!(board.get(Position::new(2, 0)), Some(Cell::Player1));

        // 上边框是玩家二
        assert_eq!(board.get(Position::new(0, 1)), Some(Cell::Player2));
        assert_eq!(board.get(Position::new(0, 2)), Some(Cell::Player2));

        // 角落和内部为空
        assert_eq!(board.get(Position::new(0, 0)), Some(Cell::Empty));
        assert_eq!(board.get(Position::new(3, 3)), Some(Cell::Empty));
        assert_eq!(board.empty_interior_count(), 4);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::initial(1);
        assert_eq!(board.get(Position::new(3, 0)), None);
        assert_eq!(board.get(Position::new(0, 3)), None);
    }

    #[test]
    fn test_copy_with_leaves_original() {
        let board = Board::initial(2);
        let target = Position::new(1, 1);
        let copy = board.copy_with(target, Cell::Player1);

        assert_eq!(copy.get(target), Some(Cell::Player1));
        assert_eq!(board.get(target), Some(Cell::Empty));
        assert_eq!(board, Board::initial(2));
    }

    #[test]
    fn test_pieces_row_major() {
        let board = Board::initial(2);
        assert_eq!(
            board.pieces(PlayerId::Player1),
            vec![Position::new(1, 0), Position::new(2, 0)]
        );
        assert_eq!(
            board.pieces(PlayerId::Player2),
            vec![Position::new(0, 1), Position::new(0, 2)]
        );
    }

    #[test]
    fn test_goal_cells() {
        let board = Board::empty(2);
        assert_eq!(
            board.goal_cells(PlayerId::Player1),
            vec![Position::new(1, 3), Position::new(2, 3)]
        );
        assert_eq!(
            board.goal_cells(PlayerId::Player2),
            vec![Position::new(3, 1), Position::new(3, 2)]
        );
    }

    #[test]
    fn test_goal_filled() {
        let board = Board::empty(2)
            .copy_with(Position::new(1, 3), Cell::Player1)
            .copy_with(Position::new(2, 3), Cell::Player1);
        assert!(board.is_goal_filled(PlayerId::Player1));
        assert!(!board.is_goal_filled(PlayerId::Player2));

        let partial = board.copy_with(Position::new(2, 3), Cell::Empty);
        assert!(!partial.is_goal_filled(PlayerId::Player1));
    }

    #[test]
    fn test_deserialize_checks_shape() {
        let json = serde_json::to_string(&Board::initial(2)).unwrap();
        let decoded: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, Board::initial(2));

        // 格子数与边长不符
        let short = r#"{"size":4,"cells":["Empty","Empty"]}"#;
        assert!(serde_json::from_str::<Board>(short).is_err());
        // 没有内部格
        let bare = r#"{"size":2,"cells":["Empty","Empty","Empty","Empty"]}"#;
        assert!(serde_json::from_str::<Board>(bare).is_err());
    }
}
