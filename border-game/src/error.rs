//! 错误类型定义

use thiserror::Error;

use crate::moves::Move;

/// 规则错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    /// 无效的棋盘尺寸
    #[error("Invalid board size: {size} (expected 1..={max})")]
    InvalidSize { size: usize, max: usize },

    /// 无效的局面文本
    #[error("Invalid layout: {reason}")]
    InvalidLayout { reason: String },

    /// 走法不在当前合法走法列表中
    #[error("Illegal move: {0}")]
    IllegalMove(Move),

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
