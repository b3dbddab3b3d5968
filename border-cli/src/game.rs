//! 对局控制
//!
//! AI 对 AI 的回合循环，附带计时

use std::time::{Duration, Instant};

use anyhow::Result;
use border_ai::AiEngine;
use border_game::{BorderGame, GameState, Move, Outcome, PlayerId, Rules};
use tracing::{debug, info};

use crate::config::GameConfig;

/// 对局报告
#[derive(Debug, Clone)]
pub struct MatchReport {
    /// 最终结果
    pub outcome: Outcome,
    /// 总步数（含 Pass）
    pub plies: u32,
    /// 对局总耗时
    pub elapsed: Duration,
    /// 玩家一累计搜索节点数
    pub player1_nodes: u64,
    /// 玩家二累计搜索节点数
    pub player2_nodes: u64,
    /// 终局局面
    pub final_state: GameState,
}

/// 对局控制器
pub struct MatchRunner {
    game: BorderGame,
    player1: AiEngine,
    player2: AiEngine,
}

impl MatchRunner {
    /// 按配置创建
    pub fn new(config: &GameConfig) -> Result<Self> {
        Ok(Self {
            game: config.game()?,
            player1: AiEngine::new(config.player1.clone()),
            player2: AiEngine::new(config.player2.clone()),
        })
    }

    pub fn initial_state(&self) -> GameState {
        self.game.initial_state()
    }

    /// 下完整盘棋，每走一步调用一次 `on_move`
    pub fn play<F>(&mut self, mut on_move: F) -> Result<MatchReport>
    where
        F: FnMut(PlayerId, Move, &GameState),
    {
        let start = Instant::now();
        let mut state = self.initial_state();
        let mut plies = 0;
        let mut player1_nodes = 0;
        let mut player2_nodes = 0;

        info!("Starting {}x{} game", self.game.n(), self.game.n());

        while !Rules::terminal_test(&state) {
            let mover = Rules::to_move(&state);
            let engine = match mover {
                PlayerId::Player1 => &mut self.player1,
                PlayerId::Player2 => &mut self.player2,
            };

            let mv = engine.decide(&self.game, &state)?;
            match mover {
                PlayerId::Player1 => player1_nodes += engine.nodes_searched(),
                PlayerId::Player2 => player2_nodes += engine.nodes_searched(),
            }
            debug!("{} plays {} ({} nodes)", mover, mv, engine.nodes_searched());

            state = Rules::try_result(&state, mv)?;
            plies += 1;
            on_move(mover, mv, &state);
        }

        let report = MatchReport {
            outcome: state.outcome(),
            plies,
            elapsed: start.elapsed(),
            player1_nodes,
            player2_nodes,
            final_state: state,
        };
        info!(
            "Game finished after {} plies in {:?}: {:?}",
            report.plies, report.elapsed, report.outcome
        );

        Ok(report)
    }
}
