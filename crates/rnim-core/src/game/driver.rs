//! ゲームドライバ
//!
//! 置換表つき negamax で指し手を決め、終局までプレイする。
//! 置換表は1プレイセッションで1個を生成し、セッション内の全探索で共有する
//! （指し手決定ごとにはリセットしない）。

use log::debug;

use super::moves::Take;
use super::state::Pile;
use crate::error::NimError;
use crate::search::negamax_with_tt;
use crate::tt::TranspositionTable;
use crate::types::{Player, Value};

/// 1回の指し手決定に使う固定の深さ上限
pub const SEARCH_DEPTH: i32 = 10;

/// 1手ごとに通知されるイベント（指し手を適用する前の局面で発火する）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlyEvent {
    /// 指す前の残り石数
    pub stones: u32,
    /// 手番
    pub player: Player,
    /// 選ばれた指し手
    pub take: Take,
    /// 探索が報告した評価値（手番側から見た値）
    pub utility: Value,
}

/// 対局結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameReport {
    /// 指された手数
    pub plies: u32,
    /// 残り1個に直面して負けたプレイヤー
    pub loser: Player,
}

/// 初期局面から終局までプレイする
///
/// MAX の手番から始め、毎手 `negamax_with_tt` を深さ `SEARCH_DEPTH`、
/// 窓 `(-INFINITE, +INFINITE)` で呼んで指し手を決める。`on_ply` は
/// 指し手を適用する前に呼ばれる。残り1個で終局し、そのとき手番だった
/// 側が敗者になる。
pub fn play_nim(start: Pile, on_ply: &mut dyn FnMut(&PlyEvent)) -> Result<GameReport, NimError> {
    let mut tt = TranspositionTable::new();
    let mut pile = start;
    let mut player = Player::Max;
    let mut plies = 0u32;

    while !pile.is_terminal() {
        let (utility, best_move) =
            negamax_with_tt(pile, SEARCH_DEPTH, -Value::INFINITE, Value::INFINITE, &mut tt);
        let utility = utility.ok_or(NimError::NoMoveFound { stones: pile.stones() })?;
        let take = best_move.ok_or(NimError::NoMoveFound { stones: pile.stones() })?;

        debug!("[Driver] {}: {} takes {} (utility {})", pile, player.label(), take, utility);
        on_ply(&PlyEvent { stones: pile.stones(), player, take, utility });

        pile = pile.apply(take);
        player = player.opponent();
        plies += 1;
    }

    debug!(
        "[Driver] game over after {} plies, tt: {} entries, {}/{} usable probe hits",
        plies,
        tt.len(),
        tt.hits(),
        tt.probes()
    );

    Ok(GameReport { plies, loser: player })
}
