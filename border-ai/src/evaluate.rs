//! 局面评估函数

use border_game::{BorderGame, Game, GameState, PlayerId};
use serde::{Deserialize, Serialize};

/// 评估器
///
/// 深度截断搜索在非终局的叶子节点上调用，返回值越大对 `player`（最大化一方）越有利。
pub trait Evaluator<G: Game> {
    fn evaluate(&self, state: &G::State, player: G::Player) -> i32;
}

impl<G, F> Evaluator<G> for F
where
    G: Game,
    F: Fn(&G::State, G::Player) -> i32,
{
    fn evaluate(&self, state: &G::State, player: G::Player) -> i32 {
        self(state, player)
    }
}

/// 空格计数评估器（默认）
///
/// 返回内部空格数量的相反数：空格越少，局面离分出胜负越近。与 `player` 无关。
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCellEvaluator;

impl Evaluator<BorderGame> for EmptyCellEvaluator {
    fn evaluate(&self, state: &GameState, _player: PlayerId) -> i32 {
        -(state.board().empty_interior_count() as i32)
    }
}

/// 推进距离评估器
///
/// 己方所有棋子沿前进方向走过的格数之和，减去对手的同一数值。
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvancementEvaluator;

impl AdvancementEvaluator {
    fn advancement(state: &GameState, player: PlayerId) -> i32 {
        state
            .board()
            .pieces(player)
            .into_iter()
            .map(|pos| match player {
                PlayerId::Player1 => pos.col as i32,
                PlayerId::Player2 => pos.row as i32,
            })
            .sum()
    }
}

impl Evaluator<BorderGame> for AdvancementEvaluator {
    fn evaluate(&self, state: &GameState, player: PlayerId) -> i32 {
        Self::advancement(state, player) - Self::advancement(state, player.opponent())
    }
}

/// 可在配置中选择的评估器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EvaluatorKind {
    #[default]
    EmptyCell,
    Advancement,
}

impl Evaluator<BorderGame> for EvaluatorKind {
    fn evaluate(&self, state: &GameState, player: PlayerId) -> i32 {
        match self {
            EvaluatorKind::EmptyCell => {
                Evaluator::<BorderGame>::evaluate(&EmptyCellEvaluator, state, player)
            }
            EvaluatorKind::Advancement => {
                Evaluator::<BorderGame>::evaluate(&AdvancementEvaluator, state, player)
            }
        }
    }
}
