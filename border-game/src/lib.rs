//! Border Race 规则库
//!
//! 包含:
//! - 带边框棋盘、格子、坐标等核心数据结构
//! - 走法生成（单步、跳吃、Pass）
//! - 规则引擎（后继局面、效用、终局判定）
//! - 搜索使用的 `Game` 接口
//! - 局面文本格式

mod board;
mod constants;
mod error;
mod game;
mod layout;
mod moves;
mod piece;
mod rules;

pub use board::Board;
pub use constants::*;
pub use error::{GameError, Result};
pub use game::Game;
pub use layout::Layout;
pub use moves::{Move, MoveGenerator};
pub use piece::{Cell, PlayerId, Position};
pub use rules::{BorderGame, GameState, Outcome, Rules};
