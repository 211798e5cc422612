//! エラー型
//!
//! 回復可能なエラーはCLI境界の引数検証のみ。探索内部では合法手チェックが
//! すべての再帰呼び出しに先行するため、不正状態は構成上発生しない。

use crate::game::Pile;

/// nim コアのエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NimError {
    /// 初期の石数が範囲外
    #[error("pile size {0} is out of range ({min}..={max})", min = Pile::MIN_STONES, max = Pile::MAX_STONES)]
    InvalidPileSize(u32),

    /// 探索が指し手を返さなかった（合法手のある局面では到達しない）
    #[error("search returned no move for pile {stones}")]
    NoMoveFound { stones: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pile_size_message() {
        let err = NimError::InvalidPileSize(101);
        assert_eq!(err.to_string(), "pile size 101 is out of range (1..=100)");
    }

    #[test]
    fn test_no_move_found_message() {
        let err = NimError::NoMoveFound { stones: 1 };
        assert_eq!(err.to_string(), "search returned no move for pile 1");
    }
}
