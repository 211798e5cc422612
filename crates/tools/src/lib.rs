//! rnim ワークスペースの演習・分析ツール群
//!
//! - `queens`: n-queens の局所探索スイート（盤面モデルと各アルゴリズム）
//!
//! バイナリは `src/bin/` 配下:
//! - `queens`: 1回の局所探索を実行して盤面を表示する
//! - `queens_success_rate`: アルゴリズム別の成功率を反復計測する
//! - `analyze_nim`: nim 探索の勝敗判定を全山サイズで理論と突き合わせる

pub mod queens;
