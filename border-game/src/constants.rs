//! 规则常量定义

/// 棋盘内部最大边长（不含边框）
pub const MAX_BOARD_SIZE: usize = 16;

/// 默认棋盘内部边长
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// 边框宽度（四周各一格）
pub const BORDER_WIDTH: usize = 1;

/// 玩家一获胜时的效用值
pub const PLAYER1_WIN: i32 = 1;

/// 玩家二获胜时的效用值
pub const PLAYER2_WIN: i32 = -1;
