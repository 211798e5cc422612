//! minimax モジュールのテスト

use crate::game::{Pile, Take};
use crate::search::{max_value, min_value, minimax_decision};
use crate::types::{Player, Value};

fn pile(stones: u32) -> Pile {
    Pile::new(stones).unwrap()
}

#[test]
fn test_max_value_terminal_sentinel() {
    assert_eq!(max_value(pile(1)), Value::LOSS);
}

#[test]
fn test_min_value_terminal_sentinel() {
    assert_eq!(min_value(pile(1)), Value::WIN);
}

#[test]
fn test_max_value_small_piles() {
    // 最大化側の手番で負けるのは 4k+1 の山だけ
    for stones in 2..=10 {
        let expected = if stones % 4 == 1 { Value::LOSS } else { Value::WIN };
        assert_eq!(max_value(pile(stones)), expected, "stones={stones}");
    }
}

#[test]
fn test_min_value_small_piles() {
    // 同じ局面を最小化側の手番で見ると符号が反転する
    for stones in 2..=10 {
        let expected = if stones % 4 == 1 { Value::WIN } else { Value::LOSS };
        assert_eq!(min_value(pile(stones)), expected, "stones={stones}");
    }
}

#[test]
fn test_minimax_decision_terminal_returns_none() {
    assert_eq!(minimax_decision(pile(1), Player::Max), None);
    assert_eq!(minimax_decision(pile(1), Player::Min), None);
}

#[test]
fn test_minimax_decision_small_piles() {
    // 勝てる局面では残りを 4k+1 にする手、必敗局面では昇順最初の手(1)を選ぶ
    let expected: [(u32, u32); 9] = [
        (2, 1),
        (3, 2),
        (4, 3),
        (5, 1),
        (6, 1),
        (7, 2),
        (8, 3),
        (9, 1),
        (10, 1),
    ];
    for (stones, best) in expected {
        assert_eq!(
            minimax_decision(pile(stones), Player::Max).map(Take::count),
            Some(best),
            "MAX stones={stones}"
        );
        // 役割が入れ替わっても子局面の序列は対称なので同じ手になる
        assert_eq!(
            minimax_decision(pile(stones), Player::Min).map(Take::count),
            Some(best),
            "MIN stones={stones}"
        );
    }
}
