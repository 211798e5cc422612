//! negamax 探索
//!
//! `value(state) = -value(相手の最善応手)` の恒等式で max/min を単一の
//! 再帰関数に統合する。`negamax_decision` はキャッシュなしの参照実装、
//! `negamax_with_tt` が置換表 + alpha-beta 枝刈りつきの本番探索。

use crate::game::{Pile, Take};
use crate::tt::{TranspositionTable, TtEntry};
use crate::types::Value;

/// キャッシュなしの negamax
///
/// `(最善手, 評価値)` を返す。終端（残り1個）は `(None, WIN)`:
/// この定式化では、残り1個に直面した手番側の値を +1 と定義している。
/// `max_value`/`min_value` とは終端センチネルの符号規約が異なる点に注意。
pub fn negamax_decision(pile: Pile) -> (Option<Take>, Value) {
    if pile.is_terminal() {
        return (None, Value::WIN);
    }

    let mut best = -Value::INFINITE;
    let mut best_move = None;

    for take in pile.legal_takes() {
        let (_, child_value) = negamax_decision(pile.apply(take));
        let value = -child_value;
        if value > best {
            best = value;
            best_move = Some(take);
        }
    }

    (best_move, best)
}

/// 置換表 + alpha-beta 枝刈りつき negamax
///
/// `(評価値, 最善手)` を返す。子ノードへは窓 `(-beta, -alpha)` を渡す。
///
/// キャッシュの扱いには既知の不健全性が2つあり、意図的に保持している:
///
/// 1. キーは局面のみで、残り深さと探索窓を区別しない。深さ打ち切りの
///    センチネルや浅い探索の結果が、より深い照会にそのまま返る。
/// 2. 書き込みは無条件で、beta カットで打ち切った（真の minimax 値では
///    なく境界にすぎない）値も exact として登録される。
pub fn negamax_with_tt(
    pile: Pile,
    depth: i32,
    alpha: Value,
    beta: Value,
    tt: &mut TranspositionTable,
) -> (Option<Value>, Option<Take>) {
    let key = pile.key();

    // 両フィールドが埋まったエントリだけ採用する
    if let Some(entry) = tt.probe(key) {
        if let (Some(utility), Some(best_move)) = (entry.utility, entry.best_move) {
            return (Some(utility), Some(best_move));
        }
    }

    // 深さ打ち切りと真の終端が同じセンチネルを共有する
    if depth == 0 || pile.is_terminal() {
        let entry = TtEntry { utility: Some(Value::LOSS), best_move: Some(Take::ONE) };
        tt.store(key, entry);
        return (entry.utility, entry.best_move);
    }

    let mut alpha = alpha;
    let mut best_utility: Option<Value> = None;
    let mut best_move: Option<Take> = None;

    for take in pile.legal_takes() {
        let (child_utility, _) = negamax_with_tt(pile.apply(take), depth - 1, -beta, -alpha, tt);
        // 評価値のない子は採点できない（合法手のある局面では発生しない）
        let Some(child_utility) = child_utility else {
            continue;
        };
        let value = -child_utility;

        if best_utility.is_none_or(|best| value > best) {
            best_utility = Some(value);
            best_move = Some(take);
        }

        alpha = alpha.max(value);
        if alpha >= beta {
            break; // beta カット（残りの手は枝刈り）
        }
    }

    tt.store(key, TtEntry { utility: best_utility, best_move });

    (best_utility, best_move)
}
