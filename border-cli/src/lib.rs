//! Border Race 命令行对局
//!
//! 包含:
//! - 对局配置（JSON）
//! - AI 对 AI 的回合循环与计时
//! - 文本棋盘渲染

pub mod config;
pub mod game;
pub mod render;

pub use config::GameConfig;
pub use game::{MatchReport, MatchRunner};
pub use render::render_board;
