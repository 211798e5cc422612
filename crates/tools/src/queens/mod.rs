//! n-queens の局所探索スイート
//!
//! 盤面は「列ごとに1個のクイーン」を前提に、列→行の対応だけを持つ。
//! 評価関数は昇順探索用に `最大衝突ペア数 - 現在の衝突ペア数` を使う。

pub mod board;
pub mod local_search;

pub use board::{Board, MAX_QUEENS};
pub use local_search::{
    crossover, genetic_algorithm, hill_climbing, hill_climbing_improved, random_search,
    simulated_annealing, time_to_temperature, Algorithm, SearchOutcome, MAX_ITERATIONS,
    MUTATION_RATE,
};
