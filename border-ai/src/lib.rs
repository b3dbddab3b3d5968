//! Border Race AI 引擎
//!
//! 包含:
//! - 棋局评估函数（空格计数、推进距离）
//! - Minimax 搜索
//! - Alpha-Beta 剪枝（完整 / 深度截断）

mod evaluate;
mod search;

pub use evaluate::{AdvancementEvaluator, EmptyCellEvaluator, Evaluator, EvaluatorKind};
pub use search::{AiConfig, AiEngine, Algorithm, Difficulty, DEFAULT_DEPTH_LIMIT, WIN_SCORE};
