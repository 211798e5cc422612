//! 盤面モデル
//!
//! `rows[column] = row` の形で、各列にちょうど1個のクイーンを置く。
//! 衝突判定は同行・同列・同対角の3条件。

use rand::Rng;

/// 扱えるクイーン数の上限
pub const MAX_QUEENS: usize = 100;

/// n-queens の盤面
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<usize>,
}

/// 2つの位置が互いに利いているか
#[inline]
pub fn in_conflict(column: usize, row: usize, other_column: usize, other_row: usize) -> bool {
    if column == other_column {
        return true; // 同列
    }
    if row == other_row {
        return true; // 同行
    }
    column.abs_diff(other_column) == row.abs_diff(other_row) // 対角
}

impl Board {
    /// 各列のクイーンを一様ランダムな行に置いた盤面を作る
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Board {
        let rows = (0..n).map(|_| rng.random_range(0..n)).collect();
        Board { rows }
    }

    /// 行の割り当てから盤面を作る（交叉などの組み立て用）
    pub fn from_rows(rows: Vec<usize>) -> Board {
        Board { rows }
    }

    /// 盤面サイズ（クイーン数）
    #[inline]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// 各列の行割り当て
    #[inline]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// 指定列のクイーンの行
    #[inline]
    pub fn row(&self, column: usize) -> usize {
        self.rows[column]
    }

    /// 指定列のクイーンを動かす
    #[inline]
    pub fn set_row(&mut self, column: usize, row: usize) {
        self.rows[column] = row;
    }

    /// 衝突しうるペアの最大数 n(n-1)/2
    #[inline]
    pub fn max_pairs(&self) -> u32 {
        let n = self.rows.len() as u32;
        n * n.saturating_sub(1) / 2
    }

    /// 互いに利いているペアの数
    pub fn count_conflicts(&self) -> u32 {
        let mut count = 0;
        for queen in 0..self.rows.len() {
            for other in queen + 1..self.rows.len() {
                if in_conflict(queen, self.rows[queen], other, self.rows[other]) {
                    count += 1;
                }
            }
        }
        count
    }

    /// 昇順探索用の評価値: `max_pairs - count_conflicts`
    #[inline]
    pub fn evaluate(&self) -> u32 {
        self.max_pairs() - self.count_conflicts()
    }

    /// 衝突が1つもないか
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.count_conflicts() == 0
    }

    /// 指定列のクイーンが他のどれかと衝突しているか（表示用）
    fn queen_in_conflict(&self, column: usize) -> bool {
        let row = self.rows[column];
        self.rows
            .iter()
            .enumerate()
            .any(|(other, &other_row)| other != column && in_conflict(column, row, other, other_row))
    }
}

impl std::fmt::Display for Board {
    /// 行を上から順に描画する。衝突中のクイーンは `Q`、安全なクイーンは `q`。
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows.len() {
            for (column, &queen_row) in self.rows.iter().enumerate() {
                let cell = if queen_row == row {
                    if self.queen_in_conflict(column) { 'Q' } else { 'q' }
                } else {
                    '.'
                };
                write!(f, "{cell}")?;
            }
            if row + 1 < self.rows.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
