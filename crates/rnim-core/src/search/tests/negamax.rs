//! negamax モジュールのテスト

use crate::game::{Pile, Take};
use crate::search::{negamax_decision, negamax_with_tt};
use crate::tt::TranspositionTable;
use crate::types::Value;

fn pile(stones: u32) -> Pile {
    Pile::new(stones).unwrap()
}

fn search(stones: u32, depth: i32, tt: &mut TranspositionTable) -> (Option<Value>, Option<Take>) {
    negamax_with_tt(pile(stones), depth, -Value::INFINITE, Value::INFINITE, tt)
}

#[test]
fn test_negamax_decision_terminal() {
    // 終端の評価値は手番側視点でも +1（反転した符号規約を保持している）
    assert_eq!(negamax_decision(pile(1)), (None, Value::WIN));
}

#[test]
fn test_negamax_decision_small_piles() {
    // 終端センチネルの符号が反転しているため、評価値は 4k+2 の山でのみ -1 になり、
    // 選ばれる手も minimax_decision とは一致しない
    let expected: [(u32, u32, i32); 9] = [
        (2, 1, -1),
        (3, 1, 1),
        (4, 2, 1),
        (5, 3, 1),
        (6, 1, -1),
        (7, 1, 1),
        (8, 2, 1),
        (9, 3, 1),
        (10, 1, -1),
    ];
    for (stones, best, value) in expected {
        let (best_move, utility) = negamax_decision(pile(stones));
        assert_eq!(best_move.map(Take::count), Some(best), "stones={stones}");
        assert_eq!(utility.raw(), value, "stones={stones}");
    }
}

#[test]
fn test_negamax_with_tt_terminal_scenario() {
    let mut tt = TranspositionTable::new();
    let (utility, best_move) = search(1, 10, &mut tt);

    assert_eq!(utility, Some(Value::LOSS));
    assert_eq!(best_move, Some(Take::ONE));
    // 終端のセンチネルもキャッシュされる
    assert!(tt.contains_key(pile(1).key()));
    let entry = tt.probe(pile(1).key()).unwrap();
    assert_eq!(entry.utility, Some(Value::LOSS));
    assert_eq!(entry.best_move, Some(Take::ONE));
}

#[test]
fn test_negamax_with_tt_depth_cutoff_shares_terminal_sentinel() {
    // 深さ0は真の終端と同じセンチネルを返す（ヒューリスティック評価はしない）
    let mut tt = TranspositionTable::new();
    let (utility, best_move) = search(50, 0, &mut tt);
    assert_eq!(utility, Some(Value::LOSS));
    assert_eq!(best_move, Some(Take::ONE));
    assert!(tt.contains_key(pile(50).key()));
}

#[test]
fn test_negamax_with_tt_matches_nim_theory_at_full_depth() {
    // 深さ上限を山サイズ以上にすると深さ打ち切りが起きず、
    // 必敗局面（4k+1）の判定が理論と一致する
    for stones in 2..=Pile::MAX_STONES {
        let mut tt = TranspositionTable::new();
        let (utility, best_move) = search(stones, stones as i32, &mut tt);

        let expected = if stones % 4 == 1 { Value::LOSS } else { Value::WIN };
        assert_eq!(utility, Some(expected), "stones={stones}");

        // 返る最善手は必ず合法手
        let take = best_move.expect("non-terminal pile must yield a move");
        assert!(stones > take.count(), "stones={stones}");
    }
}

#[test]
fn test_negamax_with_tt_populates_cache() {
    let mut tt = TranspositionTable::new();
    assert!(tt.is_empty());

    search(7, 10, &mut tt);
    assert!(tt.contains_key(pile(7).key()));
    assert!(!tt.is_empty());
}

#[test]
fn test_negamax_with_tt_idempotent_on_fresh_tables() {
    // 同一条件の2つの新品テーブルに対して結果は一致する（探索は決定的）
    let mut tt1 = TranspositionTable::new();
    let mut tt2 = TranspositionTable::new();
    assert_eq!(search(13, 10, &mut tt1), search(13, 10, &mut tt2));
}

#[test]
fn test_negamax_with_tt_repeat_call_returns_cached_pair() {
    // 2回目はルートのキャッシュヒットで即返るが、返る組は同一
    let mut tt = TranspositionTable::new();
    let first = search(13, 10, &mut tt);
    let probes_after_first = tt.probes();
    let second = search(13, 10, &mut tt);

    assert_eq!(first, second);
    // 2回目は子ノードを一切探索しない（probe は1回だけ増える）
    assert_eq!(tt.probes(), probes_after_first + 1);
}

#[test]
fn test_negamax_with_tt_stale_entry_reused_across_depths() {
    // キーに深さが含まれないため、浅い照会で入った値が深い照会にそのまま返る
    let mut tt = TranspositionTable::new();
    let shallow = search(20, 0, &mut tt);
    let deep = search(20, 20, &mut tt);
    assert_eq!(shallow, deep);
}
