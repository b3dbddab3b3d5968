//! 搜索引擎
//!
//! 实现 Minimax、Alpha-Beta 剪枝以及带深度截断的 Alpha-Beta

use border_game::{Game, GameError};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::evaluate::{Evaluator, EvaluatorKind};

/// 截断搜索中终局效用的放大倍数，保证胜负总是压过启发式分值
pub const WIN_SCORE: i32 = 10_000;

/// 截断搜索的默认深度
pub const DEFAULT_DEPTH_LIMIT: u32 = 4;

const INF: i32 = i32::MAX;

/// 搜索算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// 完整 Minimax，搜索到终局
    Minimax,
    /// 完整 Alpha-Beta，搜索到终局
    AlphaBeta,
    /// 深度截断的 Alpha-Beta，叶子节点使用评估函数
    AlphaBetaCutoff,
}

/// 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// AI 配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub algorithm: Algorithm,
    /// 只对 `AlphaBetaCutoff` 生效，缺省为 [`DEFAULT_DEPTH_LIMIT`]
    #[serde(default)]
    pub depth_limit: Option<u32>,
    /// 截断搜索叶子节点的评估器
    #[serde(default)]
    pub evaluator: EvaluatorKind,
}

impl AiConfig {
    pub fn minimax() -> Self {
        Self {
            algorithm: Algorithm::Minimax,
            depth_limit: None,
            evaluator: EvaluatorKind::EmptyCell,
        }
    }

    pub fn alpha_beta() -> Self {
        Self {
            algorithm: Algorithm::AlphaBeta,
            depth_limit: None,
            evaluator: EvaluatorKind::EmptyCell,
        }
    }

    pub fn alpha_beta_cutoff(depth_limit: u32) -> Self {
        Self {
            algorithm: Algorithm::AlphaBetaCutoff,
            depth_limit: Some(depth_limit),
            evaluator: EvaluatorKind::EmptyCell,
        }
    }

    /// 换用指定的评估器
    pub fn with_evaluator_kind(mut self, evaluator: EvaluatorKind) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self::alpha_beta_cutoff(2),
            Difficulty::Medium => Self::alpha_beta_cutoff(DEFAULT_DEPTH_LIMIT),
            Difficulty::Hard => Self::alpha_beta(),
        }
    }

    /// 截断搜索实际使用的深度
    pub fn effective_depth(&self) -> u32 {
        self.depth_limit.unwrap_or(DEFAULT_DEPTH_LIMIT)
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}

/// AI 引擎
///
/// 每次 [`AiEngine::decide`] 都是一次独立的树搜索，除节点计数外不保留任何状态。
pub struct AiEngine<E = EvaluatorKind> {
    config: AiConfig,
    evaluator: E,
    nodes_searched: u64,
}

impl AiEngine {
    /// 使用配置中选择的评估器创建
    pub fn new(config: AiConfig) -> Self {
        let evaluator = config.evaluator;
        Self::with_evaluator(config, evaluator)
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }
}

impl<E> AiEngine<E> {
    /// 使用自定义评估器创建（只在截断搜索中使用）
    pub fn with_evaluator(config: AiConfig, evaluator: E) -> Self {
        Self {
            config,
            evaluator,
            nodes_searched: 0,
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 最近一次搜索访问的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// 为当前走子方选择走法
    ///
    /// 终局局面返回 [`GameError::GameOver`]。同分时取走法生成顺序中的第一个。
    pub fn decide<G>(&mut self, game: &G, state: &G::State) -> Result<G::Move, GameError>
    where
        G: Game,
        E: Evaluator<G>,
    {
        self.nodes_searched = 0;

        if game.terminal_test(state) {
            return Err(GameError::GameOver);
        }

        let moves = game.actions(state);
        assert!(!moves.is_empty(), "non-terminal state has no legal moves");

        // 只有一个走法（包括 Pass），直接返回
        if moves.len() == 1 {
            return Ok(moves[0]);
        }

        let player = game.to_move(state);
        let depth = match self.config.algorithm {
            Algorithm::AlphaBetaCutoff => Some(self.config.effective_depth()),
            Algorithm::Minimax | Algorithm::AlphaBeta => None,
        };

        let mut best_move = moves[0];
        let mut best_score = -INF;

        for &mv in moves {
            let child = game.result(state, mv);
            let score = match self.config.algorithm {
                Algorithm::Minimax => self.minimax(game, &child, player),
                // 根节点的 alpha 就是目前最好的分值
                _ => self.alpha_beta(game, &child, player, best_score, INF, depth),
            };
            trace!("root move {:?} scored {}", mv, score);

            if score > best_score {
                best_score = score;
                best_move = mv;
            }
        }

        debug!(
            "{:?} chose {:?} (score {}, {} nodes)",
            self.config.algorithm, best_move, best_score, self.nodes_searched
        );

        Ok(best_move)
    }

    /// Minimax 搜索到终局，返回 `player` 视角的效用值
    fn minimax<G: Game>(&mut self, game: &G, state: &G::State, player: G::Player) -> i32 {
        self.nodes_searched += 1;

        if game.terminal_test(state) {
            return game.utility(state, player);
        }

        let maximizing = game.to_move(state) == player;
        let mut best = if maximizing { -INF } else { INF };

        for &mv in game.actions(state) {
            let score = self.minimax(game, &game.result(state, mv), player);
            best = if maximizing { best.max(score) } else { best.min(score) };
        }

        best
    }

    /// Alpha-Beta 搜索
    ///
    /// `depth` 为 None 时搜索到终局；为 Some(d) 时还剩 d 层，到 0 时使用评估函数。
    /// 截断搜索中终局效用乘以 [`WIN_SCORE`]。
    fn alpha_beta<G>(
        &mut self,
        game: &G,
        state: &G::State,
        player: G::Player,
        mut alpha: i32,
        mut beta: i32,
        depth: Option<u32>,
    ) -> i32
    where
        G: Game,
        E: Evaluator<G>,
    {
        self.nodes_searched += 1;

        if game.terminal_test(state) {
            let utility = game.utility(state, player);
            return match depth {
                Some(_) => utility * WIN_SCORE,
                None => utility,
            };
        }

        // 到达深度限制，返回评估值
        if depth == Some(0) {
            return self.evaluator.evaluate(state, player);
        }
        let child_depth = depth.map(|d| d - 1);

        if game.to_move(state) == player {
            let mut best = -INF;
            for &mv in game.actions(state) {
                let child = game.result(state, mv);
                best = best.max(self.alpha_beta(game, &child, player, alpha, beta, child_depth));
                if best >= beta {
                    return best; // Beta 剪枝
                }
                alpha = alpha.max(best);
            }
            best
        } else {
            let mut best = INF;
            for &mv in game.actions(state) {
                let child = game.result(state, mv);
                best = best.min(self.alpha_beta(game, &child, player, alpha, beta, child_depth));
                if best <= alpha {
                    return best; // Alpha 剪枝
                }
                beta = beta.min(best);
            }
            best
        }
    }
}
