//! 置換表モジュール
//!
//! 探索結果をキャッシュする置換表（Transposition Table）。
//!
//! - `TtEntry`: エントリ（評価値と最善手、どちらも欠損しうる）
//! - `TranspositionTable`: テーブル本体（1プレイセッションのスコープで所有）
//!
//! キーは局面の石数のみで、残り深さや alpha-beta 窓を区別しない。
//! 浅い深さや枝刈り済みの探索で得た値もそのまま書き込まれ、以後の照会に
//! exact として返るため、キャッシュ結果は厳密な minimax 値とは限らない
//! （既知の不健全性、意図的に保持）。

mod table;

pub use table::{TranspositionTable, TtEntry};
