//! nim の探索コアライブラリ
//!
//! - 状態モデル: 残り石数（1..=100）、1手で1〜3個取る、残り1で手番側の負け
//! - 探索: minimax / negamax / 置換表つき negamax（alpha-beta枝刈り）
//! - ドライバ: 置換表を1セッション共有して終局までプレイする

pub mod error;
pub mod game;
pub mod search;
pub mod tt;
pub mod types;

pub use error::NimError;
pub use game::{play_nim, GameReport, Pile, PlyEvent, Take, SEARCH_DEPTH};
pub use search::{max_value, min_value, minimax_decision, negamax_decision, negamax_with_tt};
pub use tt::{TranspositionTable, TtEntry};
pub use types::{Player, Value};
