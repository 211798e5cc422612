//! 状態（Pile）
//!
//! 状態は残り石数そのもの。指し手の適用は新しい `Pile` を返し、
//! 探索中の状態は常にイミュータブルに扱う。

use super::moves::Take;
use crate::error::NimError;

/// 残り石数
///
/// 不変条件: 石数は常に 1 以上。合法手判定（`stones - take > 0`）が
/// すべての再帰呼び出しに先行するため、0 以下の状態は構成されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pile(u32);

impl Pile {
    /// 初期局面の最小石数
    pub const MIN_STONES: u32 = 1;
    /// 初期局面の最大石数
    pub const MAX_STONES: u32 = 100;

    /// 石数から生成（範囲外は `NimError::InvalidPileSize`）
    pub fn new(stones: u32) -> Result<Pile, NimError> {
        if (Self::MIN_STONES..=Self::MAX_STONES).contains(&stones) {
            Ok(Pile(stones))
        } else {
            Err(NimError::InvalidPileSize(stones))
        }
    }

    /// 残り石数
    #[inline]
    pub const fn stones(self) -> u32 {
        self.0
    }

    /// 終端局面か（残り1個で手番側の負け）
    #[inline]
    pub const fn is_terminal(self) -> bool {
        self.0 == 1
    }

    /// 置換表のキー
    ///
    /// 状態は素の整数なので石数をそのままキーに使う。残り深さや
    /// 探索窓はキーに含まれない。
    #[inline]
    pub const fn key(self) -> u64 {
        self.0 as u64
    }

    /// 合法手を昇順で列挙する（取った後に石が1個以上残る手のみ）
    #[inline]
    pub fn legal_takes(self) -> impl Iterator<Item = Take> {
        Take::all().filter(move |take| self.0 > take.count())
    }

    /// 指し手を適用した新しい局面を返す
    ///
    /// 合法手のみを渡すこと（`legal_takes` で列挙した手）。
    #[inline]
    pub fn apply(self, take: Take) -> Pile {
        debug_assert!(self.0 > take.count());
        Pile(self.0 - take.count())
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pile_new_range() {
        assert!(Pile::new(1).is_ok());
        assert!(Pile::new(100).is_ok());
        assert_eq!(Pile::new(0), Err(NimError::InvalidPileSize(0)));
        assert_eq!(Pile::new(101), Err(NimError::InvalidPileSize(101)));
    }

    #[test]
    fn test_pile_terminal() {
        assert!(Pile::new(1).unwrap().is_terminal());
        assert!(!Pile::new(2).unwrap().is_terminal());
    }

    #[test]
    fn test_legal_takes_ascending() {
        let takes = |stones: u32| -> Vec<u32> {
            Pile::new(stones).unwrap().legal_takes().map(Take::count).collect()
        };
        // 残り1個になる手までが合法（0個にはできない）
        assert_eq!(takes(1), Vec::<u32>::new());
        assert_eq!(takes(2), vec![1]);
        assert_eq!(takes(3), vec![1, 2]);
        assert_eq!(takes(4), vec![1, 2, 3]);
        assert_eq!(takes(100), vec![1, 2, 3]);
    }

    #[test]
    fn test_pile_apply() {
        let pile = Pile::new(5).unwrap();
        let take = Take::new(3).unwrap();
        assert_eq!(pile.apply(take).stones(), 2);
    }

    #[test]
    fn test_pile_key_is_stone_count() {
        assert_eq!(Pile::new(42).unwrap().key(), 42);
    }
}
