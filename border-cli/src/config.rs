//! 对局配置
//!
//! 可选的 JSON 配置文件，例如:
//! ```json
//! {
//!   "board_size": 4,
//!   "player1": { "algorithm": "AlphaBetaCutoff", "depth_limit": 4, "evaluator": "Advancement" },
//!   "player2": { "algorithm": "AlphaBeta" }
//! }
//! ```
//! 缺省字段使用默认值。

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use border_ai::AiConfig;
use border_game::{BorderGame, DEFAULT_BOARD_SIZE};
use serde::{Deserialize, Serialize};
use tracing::info;

/// 对局配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 棋盘内部边长
    pub board_size: usize,
    /// 玩家一的 AI
    pub player1: AiConfig,
    /// 玩家二的 AI
    pub player2: AiConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            player1: AiConfig::default(),
            player2: AiConfig::default(),
        }
    }
}

impl GameConfig {
    /// 从 JSON 文件加载
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = Self::from_json(&content)
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// 从 JSON 字符串解析并校验
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse config JSON")?;
        config.game()?;
        Ok(config)
    }

    /// 按配置的边长创建对局
    pub fn game(&self) -> Result<BorderGame> {
        Ok(BorderGame::new(self.board_size)?)
    }
}
