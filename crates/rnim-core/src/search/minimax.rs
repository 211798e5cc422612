//! minimax（素朴な全域評価）
//!
//! 枝刈りもキャッシュもない交互手番の全探索。コストは指数的で、
//! `negamax_with_tt` の参照実装として小さい局面でのみ使う。

use crate::game::{Pile, Take};
use crate::types::{Player, Value};

/// 手番側が最大化プレイヤーのときの評価値
///
/// 終端（残り1個）は最大化側の負けで `LOSS`。
pub fn max_value(pile: Pile) -> Value {
    if pile.is_terminal() {
        return Value::LOSS;
    }

    let mut best = -Value::INFINITE;
    for take in pile.legal_takes() {
        let value = min_value(pile.apply(take));
        if value > best {
            best = value;
        }
    }

    best
}

/// 手番側が最小化プレイヤーのときの評価値
///
/// 終端（残り1個）は最小化側の負けで、最大化側から見た `WIN`。
pub fn min_value(pile: Pile) -> Value {
    if pile.is_terminal() {
        return Value::WIN;
    }

    let mut best = Value::INFINITE;
    for take in pile.legal_takes() {
        let value = max_value(pile.apply(take));
        if value < best {
            best = value;
        }
    }

    best
}

/// 極値を達成する指し手を1つ返す
///
/// 子局面を相手役割の評価関数で評価し、厳密に改善する手だけ採用する
/// （同値なら昇順で最初に見つけた手を保持）。終端局面では `None`。
pub fn minimax_decision(pile: Pile, player: Player) -> Option<Take> {
    let mut best_move = None;

    match player {
        Player::Max => {
            let mut best = -Value::INFINITE;
            for take in pile.legal_takes() {
                let value = min_value(pile.apply(take));
                if value > best {
                    best = value;
                    best_move = Some(take);
                }
            }
        }
        Player::Min => {
            let mut best = Value::INFINITE;
            for take in pile.legal_takes() {
                let value = max_value(pile.apply(take));
                if value < best {
                    best = value;
                    best_move = Some(take);
                }
            }
        }
    }

    best_move
}
