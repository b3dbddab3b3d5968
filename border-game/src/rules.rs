//! 规则引擎：局面、后继状态、效用与终局判定

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::Board;
use crate::constants::{MAX_BOARD_SIZE, PLAYER1_WIN, PLAYER2_WIN};
use crate::error::{GameError, Result};
use crate::game::Game;
use crate::moves::{Move, MoveGenerator};
use crate::piece::{Cell, PlayerId};

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// 某方获胜
    Winner(PlayerId),
    /// 双方都无子可动
    Draw,
    /// 尚未结束
    Ongoing,
}

/// 不可变的局面
///
/// 创建时计算并缓存走子方的合法走法，之后不会再修改。
/// 反序列化只读取棋盘和走子方，效用与合法走法重新计算。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateRecord")]
pub struct GameState {
    to_move: PlayerId,
    /// 玩家一视角的效用：+1 玩家一胜，-1 玩家二胜，0 未分胜负
    utility: i32,
    board: Board,
    legal_moves: Vec<Move>,
}

#[derive(Deserialize)]
struct StateRecord {
    to_move: PlayerId,
    board: Board,
}

impl TryFrom<StateRecord> for GameState {
    type Error = GameError;

    fn try_from(record: StateRecord) -> Result<Self> {
        let utility = Rules::utility_from_goals(&record.board);
        Ok(Self::new(record.board, record.to_move, utility))
    }
}

impl GameState {
    /// 创建内部边长为 n 的初始局面
    pub fn new_game(n: usize) -> Result<Self> {
        validate_size(n)?;
        Ok(Self::new(Board::initial(n), PlayerId::Player1, 0))
    }

    pub(crate) fn new(board: Board, to_move: PlayerId, utility: i32) -> Self {
        let legal_moves = MoveGenerator::legal_moves(&board, to_move);
        assert!(
            !legal_moves.is_empty(),
            "move generator returned no moves for {} (expected at least Pass)",
            to_move
        );
        Self {
            to_move,
            utility,
            board,
            legal_moves,
        }
    }

    /// 当前走子方
    pub fn to_move(&self) -> PlayerId {
        self.to_move
    }

    /// 玩家一视角的效用值
    pub fn utility(&self) -> i32 {
        self.utility
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 创建局面时缓存的合法走法
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    /// 当前对局结果
    pub fn outcome(&self) -> Outcome {
        match self.utility {
            PLAYER1_WIN => Outcome::Winner(PlayerId::Player1),
            PLAYER2_WIN => Outcome::Winner(PlayerId::Player2),
            _ if Rules::is_stalemate(self) => Outcome::Draw,
            _ => Outcome::Ongoing,
        }
    }
}

/// 规则引擎
pub struct Rules;

impl Rules {
    /// 计算执行走法后的新局面
    ///
    /// 走法不做合法性检查；需要检查时使用 [`Rules::try_result`]。
    /// 跳吃只移动己方棋子，被跳过的对手棋子保留在原位。
    pub fn result(state: &GameState, mv: Move) -> GameState {
        let mover = state.to_move;
        match mv {
            Move::Pass => GameState::new(state.board.clone(), mover.opponent(), state.utility),
            Move::Step { from, to } => {
                let board = state
                    .board
                    .copy_with(from, Cell::Empty)
                    .copy_with(to, Cell::from(mover));
                // 只检查走子方自己是否因这一步获胜
                let utility = Self::utility_of_board(&board, mover);
                GameState::new(board, mover.opponent(), utility)
            }
        }
    }

    /// 带合法性检查的 [`Rules::result`]
    pub fn try_result(state: &GameState, mv: Move) -> Result<GameState> {
        if Self::terminal_test(state) {
            return Err(GameError::GameOver);
        }
        if !state.legal_moves.contains(&mv) {
            warn!("Rejected illegal move {} for {}", mv, state.to_move);
            return Err(GameError::IllegalMove(mv));
        }
        Ok(Self::result(state, mv))
    }

    /// 棋盘对 `mover` 的胜负判定
    ///
    /// 玩家一占满右边框时返回 +1，玩家二占满下边框时返回 -1，否则返回 0。
    pub fn utility_of_board(board: &Board, mover: PlayerId) -> i32 {
        if !board.is_goal_filled(mover) {
            return 0;
        }
        match mover {
            PlayerId::Player1 => PLAYER1_WIN,
            PlayerId::Player2 => PLAYER2_WIN,
        }
    }

    /// 不知道上一步是谁走的时，按两条目标线判定
    pub(crate) fn utility_from_goals(board: &Board) -> i32 {
        if board.is_goal_filled(PlayerId::Player1) {
            PLAYER1_WIN
        } else if board.is_goal_filled(PlayerId::Player2) {
            PLAYER2_WIN
        } else {
            0
        }
    }

    /// 从 `player` 视角看的效用值
    pub fn utility(state: &GameState, player: PlayerId) -> i32 {
        match player {
            PlayerId::Player1 => state.utility,
            PlayerId::Player2 => -state.utility,
        }
    }

    /// 有人获胜或双方都无子可动时为终局
    pub fn terminal_test(state: &GameState) -> bool {
        state.utility != 0 || Self::is_stalemate(state)
    }

    pub fn to_move(state: &GameState) -> PlayerId {
        state.to_move
    }

    /// 双方都没有非 Pass 的走法
    fn is_stalemate(state: &GameState) -> bool {
        // 缓存里有实际走法时走子方一定能动
        let mover_stuck = state.legal_moves.iter().all(Move::is_pass);
        mover_stuck && !MoveGenerator::has_moves(&state.board, state.to_move.opponent())
    }
}

/// 固定边长的 Border Race 对局
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderGame {
    n: usize,
}

impl BorderGame {
    pub fn new(n: usize) -> Result<Self> {
        validate_size(n)?;
        Ok(Self { n })
    }

    /// 内部边长
    pub fn n(&self) -> usize {
        self.n
    }

    /// 初始局面
    pub fn initial_state(&self) -> GameState {
        GameState::new(Board::initial(self.n), PlayerId::Player1, 0)
    }
}

impl Game for BorderGame {
    type State = GameState;
    type Move = Move;
    type Player = PlayerId;

    fn actions<'a>(&self, state: &'a GameState) -> &'a [Move] {
        state.legal_moves()
    }

    fn result(&self, state: &GameState, mv: Move) -> GameState {
        Rules::result(state, mv)
    }

    fn utility(&self, state: &GameState, player: PlayerId) -> i32 {
        Rules::utility(state, player)
    }

    fn terminal_test(&self, state: &GameState) -> bool {
        Rules::terminal_test(state)
    }

    fn to_move(&self, state: &GameState) -> PlayerId {
        Rules::to_move(state)
    }
}

fn validate_size(n: usize) -> Result<()> {
    if n == 0 || n > MAX_BOARD_SIZE {
        return Err(GameError::InvalidSize {
            size: n,
            max: MAX_BOARD_SIZE,
        });
    }
    Ok(())
}
