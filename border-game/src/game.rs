//! 搜索使用的博弈接口

use std::fmt::Debug;

/// 两人零和完全信息博弈
///
/// 搜索策略只通过这个接口访问规则，不依赖具体棋盘实现。
pub trait Game {
    /// 局面
    type State;
    /// 走法
    type Move: Copy + PartialEq + Debug;
    /// 玩家
    type Player: Copy + PartialEq + Debug;

    /// 当前局面的合法走法（有序，非空）
    fn actions<'a>(&self, state: &'a Self::State) -> &'a [Self::Move];

    /// 执行走法，返回新局面，原局面不变
    fn result(&self, state: &Self::State, mv: Self::Move) -> Self::State;

    /// 从 `player` 视角看的效用值
    fn utility(&self, state: &Self::State, player: Self::Player) -> i32;

    /// 是否为终局
    fn terminal_test(&self, state: &Self::State) -> bool;

    /// 当前走子方
    fn to_move(&self, state: &Self::State) -> Self::Player;
}
