//! TranspositionTable本体
//!
//! - probe/store操作
//! - ヒット率の統計（セッション終了時のログ用）

use std::collections::HashMap;

use crate::game::Take;
use crate::types::Value;

/// 置換表エントリ
///
/// どちらのフィールドも欠損しうる。照会結果を使ってよいのは
/// 両方が埋まっているときのみ（`is_usable`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtEntry {
    /// キャッシュされた評価値
    pub utility: Option<Value>,
    /// キャッシュされた最善手
    pub best_move: Option<Take>,
}

impl TtEntry {
    /// 両フィールドが埋まっているか
    #[inline]
    pub const fn is_usable(&self) -> bool {
        self.utility.is_some() && self.best_move.is_some()
    }
}

/// 置換表
///
/// 1プレイセッションにつき1個を生成し、探索関数に `&mut` で渡す
/// （プロセス全域の共有状態にはしない）。セッション内の指し手決定を
/// またいで蓄積され、セッション終了時に破棄される。
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, TtEntry>,
    probes: u64,
    hits: u64,
}

impl TranspositionTable {
    /// 新しい置換表を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 置換表を検索
    ///
    /// エントリの有無にかかわらず probe 数を数え、使用可能な
    /// （両フィールドが埋まった）エントリが見つかったときだけ hit を数える。
    pub fn probe(&mut self, key: u64) -> Option<TtEntry> {
        self.probes += 1;
        let entry = self.entries.get(&key).copied();
        if entry.is_some_and(|e| e.is_usable()) {
            self.hits += 1;
        }
        entry
    }

    /// エントリを書き込む（既存エントリは上書き）
    pub fn store(&mut self, key: u64, entry: TtEntry) {
        self.entries.insert(key, entry);
    }

    /// キーが登録済みか
    pub fn contains_key(&self, key: u64) -> bool {
        self.entries.contains_key(&key)
    }

    /// エントリ数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// probe 回数
    pub fn probes(&self) -> u64 {
        self.probes
    }

    /// 使用可能エントリへの hit 回数
    pub fn hits(&self) -> u64 {
        self.hits
    }
}
