//! 玩家、格子与坐标定义

use serde::{Deserialize, Serialize};

/// 玩家
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// 玩家一（先手，从左边框出发向右走）
    Player1,
    /// 玩家二（后手，从上边框出发向下走）
    Player2,
}

impl PlayerId {
    /// 获取对手
    pub fn opponent(&self) -> PlayerId {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    /// 前进方向 (行增量, 列增量)
    pub fn direction(&self) -> (i8, i8) {
        match self {
            PlayerId::Player1 => (0, 1),
            PlayerId::Player2 => (1, 0),
        }
    }

    /// 获取局面文本字符
    pub fn to_layout_char(&self) -> char {
        match self {
            PlayerId::Player1 => '1',
            PlayerId::Player2 => '2',
        }
    }

    /// 从局面文本字符解析
    pub fn from_layout_char(c: char) -> Option<PlayerId> {
        match c {
            '1' => Some(PlayerId::Player1),
            '2' => Some(PlayerId::Player2),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::Player1 => write!(f, "P1"),
            PlayerId::Player2 => write!(f, "P2"),
        }
    }
}

/// 格子内容
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// 占据该格的玩家
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(PlayerId::Player1),
            Cell::Player2 => Some(PlayerId::Player2),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// 获取局面文本字符
    pub fn to_layout_char(&self) -> char {
        match self.owner() {
            Some(player) => player.to_layout_char(),
            None => '.',
        }
    }

    /// 从局面文本字符解析
    pub fn from_layout_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            _ => PlayerId::from_layout_char(c).map(Cell::from),
        }
    }
}

impl From<PlayerId> for Cell {
    fn from(player: PlayerId) -> Self {
        match player {
            PlayerId::Player1 => Cell::Player1,
            PlayerId::Player2 => Cell::Player2,
        }
    }
}

/// 棋盘坐标（含边框）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// 行 (0..size)
    pub row: u8,
    /// 列 (0..size)
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 获取偏移后的位置，超出 `size x size` 网格时返回 None
    pub fn offset(&self, dr: i8, dc: i8, size: usize) -> Option<Position> {
        let new_row = self.row as i16 + dr as i16;
        let new_col = self.col as i16 + dc as i16;
        if new_row >= 0 && (new_row as usize) < size && new_col >= 0 && (new_col as usize) < size {
            Some(Position {
                row: new_row as u8,
                col: new_col as u8,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_opponent() {
        assert_eq!(PlayerId::Player1.opponent(), PlayerId::Player2);
        assert_eq!(PlayerId::Player2.opponent(), PlayerId::Player1);
    }

    #[test]
    fn test_directions_are_asymmetric() {
        assert_eq!(PlayerId::Player1.direction(), (0, 1));
        assert_eq!(PlayerId::Player2.direction(), (1, 0));
    }

    #[test]
    fn test_cell_layout_char() {
        assert_eq!(Cell::Empty.to_layout_char(), '.');
        assert_eq!(Cell::Player1.to_layout_char(), '1');
        assert_eq!(Cell::from_layout_char('2'), Some(Cell::Player2));
        assert_eq!(Cell::from_layout_char('x'), None);
    }

    #[test]
    fn test_cell_owner() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::from(PlayerId::Player2).owner(), Some(PlayerId::Player2));
    }

    #[test]
    fn test_position_offset() {
        let pos = Position::new(1, 2);
        assert_eq!(pos.offset(0, 1, 4), Some(Position::new(1, 3)));
        assert_eq!(pos.offset(0, 2, 4), None);
        assert_eq!(pos.offset(-2, 0, 4), None);
        assert_eq!(pos.offset(2, 0, 4), Some(Position::new(3, 2)));
    }
}
