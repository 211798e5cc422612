//! 局所探索アルゴリズム
//!
//! - ランダム探索（毎回盤面を作り直す）
//! - 山登り法（最急上昇、肩で停止する素朴版と肩を歩き続ける改良版）
//! - 焼きなまし法（線形温度スケジュール + メトロポリス受理）
//! - 遺伝的アルゴリズム（適応度比例選択 + 分割交叉 + 突然変異）
//!
//! どれも反復上限 1000 で打ち切る。乱数は呼び出し側が注入する
//! （シード固定で再現可能にするため）。

use log::debug;
use rand::prelude::IndexedRandom;
use rand::Rng;

use super::board::Board;

/// 反復・世代数の上限
pub const MAX_ITERATIONS: u32 = 1000;

/// 遺伝的アルゴリズムの子1個あたりの突然変異率
pub const MUTATION_RATE: f64 = 0.2;

/// 局所探索の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// 最終盤面
    pub board: Board,
    /// 実行した反復（世代）数
    pub iterations: u32,
    /// 衝突ゼロに到達したか
    pub solved: bool,
}

/// 実行するアルゴリズムの選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    Random,
    HillClimbing,
    HillClimbingImproved,
    Annealing,
    Genetic,
}

impl Algorithm {
    /// 全アルゴリズム（成功率計測のデフォルト対象）
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Random,
        Algorithm::HillClimbing,
        Algorithm::HillClimbingImproved,
        Algorithm::Annealing,
        Algorithm::Genetic,
    ];

    /// レポート用ラベル（CLIの値表記と同じ）
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Random => "random",
            Algorithm::HillClimbing => "hill-climbing",
            Algorithm::HillClimbingImproved => "hill-climbing-improved",
            Algorithm::Annealing => "annealing",
            Algorithm::Genetic => "genetic",
        }
    }

    /// 初期盤面からこのアルゴリズムを実行する
    ///
    /// 遺伝的アルゴリズムだけは初期盤面の中身を使わず、サイズから
    /// 自前の個体群を作る。
    pub fn run<R: Rng>(self, board: Board, rng: &mut R) -> SearchOutcome {
        match self {
            Algorithm::Random => random_search(board, rng),
            Algorithm::HillClimbing => hill_climbing(board, rng),
            Algorithm::HillClimbingImproved => hill_climbing_improved(board, rng),
            Algorithm::Annealing => simulated_annealing(board, rng),
            Algorithm::Genetic => genetic_algorithm(board.size(), rng),
        }
    }
}

/// 解が出るまで毎回すべての列をランダムに置き直す
///
/// 効率的な解法ではなく、他のアルゴリズムのベースライン。
pub fn random_search<R: Rng>(mut board: Board, rng: &mut R) -> SearchOutcome {
    let optimum = board.max_pairs();
    let mut iterations = 0;

    while board.evaluate() != optimum {
        iterations += 1;
        if iterations == MAX_ITERATIONS {
            break;
        }
        for column in 0..board.size() {
            board.set_row(column, rng.random_range(0..board.size()));
        }
        debug!("[Random] iteration {iterations}: evaluation = {}", board.evaluate());
    }

    SearchOutcome { solved: board.is_solved(), iterations, board }
}

/// 最良後続への1歩
///
/// すべての「1列のクイーンを別の行へ動かす」後続を評価し、現在の評価値を
/// 初期基準として同値以上の最良後続集合から一様に1つ選ぶ。集合が空
/// （すべての後続が厳密に悪化する局所最大）のときはその場に留まる。
fn best_successor_step<R: Rng>(board: &Board, rng: &mut R) -> Board {
    let mut best_evaluation = board.evaluate();
    let mut best_successors: Vec<(usize, usize)> = Vec::new();

    for column in 0..board.size() {
        for row in 0..board.size() {
            if row == board.row(column) {
                continue;
            }
            let mut successor = board.clone();
            successor.set_row(column, row);
            let evaluation = successor.evaluate();
            if evaluation == best_evaluation {
                best_successors.push((column, row));
            } else if evaluation > best_evaluation {
                best_evaluation = evaluation;
                best_successors.clear();
                best_successors.push((column, row));
            }
        }
    }

    match best_successors.choose(rng) {
        Some(&(column, row)) => {
            let mut next = board.clone();
            next.set_row(column, row);
            next
        }
        None => board.clone(),
    }
}

/// 山登り法（素朴版）
///
/// 最良後続へ進み、評価値が改善しなくなった時点（肩）で停止する。
pub fn hill_climbing<R: Rng>(mut board: Board, rng: &mut R) -> SearchOutcome {
    let optimum = board.max_pairs();
    let mut iterations = 0;

    while board.evaluate() != optimum {
        iterations += 1;
        if iterations == MAX_ITERATIONS {
            break;
        }
        debug!("[HillClimbing] iteration {iterations}: evaluation = {}", board.evaluate());

        let before = board.evaluate();
        board = best_successor_step(&board, rng);
        if board.evaluate() == before {
            break; // 肩に乗ったら打ち切り
        }
    }

    SearchOutcome { solved: board.is_solved(), iterations, board }
}

/// 山登り法（改良版）
///
/// 肩でも停止せず、解に到達するか反復上限まで歩き続ける。肩の先に
/// さらに高い極大が残っている場合に素朴版より成功率が上がる。
pub fn hill_climbing_improved<R: Rng>(mut board: Board, rng: &mut R) -> SearchOutcome {
    let optimum = board.max_pairs();
    let mut iterations = 0;

    while board.evaluate() != optimum {
        iterations += 1;
        if iterations == MAX_ITERATIONS {
            break;
        }
        debug!("[HillClimbing+] iteration {iterations}: evaluation = {}", board.evaluate());
        board = best_successor_step(&board, rng);
    }

    SearchOutcome { solved: board.is_solved(), iterations, board }
}

/// 線形温度スケジュール: `1 - (k+1)/kmax`
///
/// 最終ステップ（k = kmax-1）でちょうど 0 になる。
#[inline]
pub fn time_to_temperature(k: u32, kmax: u32) -> f64 {
    1.0 - (f64::from(k + 1) / f64::from(kmax))
}

/// ランダムな1列を別のランダムな行へ動かした後続を作る
fn random_successor<R: Rng>(board: &Board, rng: &mut R) -> Board {
    let mut successor = board.clone();
    let column = rng.random_range(0..board.size());
    successor.set_row(column, rng.random_range(0..board.size()));
    successor
}

/// 焼きなまし法
///
/// エネルギーは衝突ペア数。改善は常に受理し、悪化は確率
/// `exp(-ΔE/T)` で受理する。温度が 0 に達するまで歩き続け、
/// 解に到達しても早期終了はしない（解から離れることもある）。
pub fn simulated_annealing<R: Rng>(board: Board, rng: &mut R) -> SearchOutcome {
    let kmax = MAX_ITERATIONS;
    let mut current = board;
    let mut current_energy = current.count_conflicts();
    let mut iterations = 0;

    for k in 0..kmax {
        let temperature = time_to_temperature(k, kmax);
        if temperature <= 0.0 {
            break;
        }
        iterations += 1;

        let successor = random_successor(&current, rng);
        let delta = f64::from(successor.count_conflicts()) - f64::from(current_energy);

        if delta < 0.0 {
            current = successor;
            current_energy = current.count_conflicts();
        } else {
            let probability = (-delta / temperature).exp();
            if rng.random::<f64>() < probability {
                current = successor;
                current_energy = current.count_conflicts();
            }
        }
    }

    SearchOutcome { solved: current.is_solved(), iterations, board: current }
}

/// 適応度（評価値）に比例した重みで親を1つ選ぶ
///
/// 全個体の適応度が 0 のとき（重み付き選択が成立しない）は一様選択に落とす。
fn select_parent<'a, R: Rng>(population: &'a [Board], rng: &mut R) -> Option<&'a Board> {
    match population.choose_weighted(rng, |board| board.evaluate()) {
        Ok(board) => Some(board),
        Err(_) => population.choose(rng),
    }
}

/// 分割交叉
///
/// 前半を一方の親、後半をもう一方の親から取って子を2つ作る。
/// 奇数長では前半側が1列多くなる。
pub fn crossover(parent1: &Board, parent2: &Board) -> (Board, Board) {
    let rows1 = parent1.rows();
    let rows2 = parent2.rows();
    let half = rows1.len() / 2;
    let split = if rows1.len() % 2 == 0 { half } else { half + 1 };

    let child1 = rows1[..split].iter().chain(&rows2[split..]).copied().collect();
    let child2 = rows2[..split].iter().chain(&rows1[split..]).copied().collect();
    (Board::from_rows(child1), Board::from_rows(child2))
}

/// ランダムな1列のクイーンをランダムな行へ飛ばす突然変異
fn mutate<R: Rng>(board: &mut Board, rng: &mut R) {
    let column = rng.random_range(0..board.size());
    board.set_row(column, rng.random_range(0..board.size()));
}

/// 遺伝的アルゴリズム
///
/// n² 個体のランダム個体群から始め、適応度比例で選んだ親ペアの分割交叉と
/// 確率 [`MUTATION_RATE`] の突然変異で世代を入れ替える。個体群サイズは
/// 世代をまたいで一定に保つ。最大適応度の個体が現れたら成功。
pub fn genetic_algorithm<R: Rng>(n: usize, rng: &mut R) -> SearchOutcome {
    let mut population: Vec<Board> = (0..n * n).map(|_| Board::random(n, rng)).collect();
    let max_fitness = (n * n.saturating_sub(1) / 2) as u32;
    let mut generation = 0;

    loop {
        generation += 1;
        if generation == MAX_ITERATIONS {
            break; // 世代上限
        }

        let size = population.len();
        let mut next_population = Vec::with_capacity(size + 1);
        while next_population.len() < size {
            let Some(parent1) = select_parent(&population, rng).cloned() else {
                break;
            };
            let Some(parent2) = select_parent(&population, rng).cloned() else {
                break;
            };

            let (mut child1, mut child2) = crossover(&parent1, &parent2);
            if rng.random::<f64>() < MUTATION_RATE {
                mutate(&mut child1, rng);
            }
            if rng.random::<f64>() < MUTATION_RATE {
                mutate(&mut child2, rng);
            }
            next_population.push(child1);
            next_population.push(child2);
        }
        next_population.truncate(size);
        population = next_population;

        if let Some(solution) = population.iter().find(|board| board.evaluate() == max_fitness) {
            return SearchOutcome { board: solution.clone(), iterations: generation, solved: true };
        }

        if generation % 100 == 0 {
            let best = population.iter().map(Board::evaluate).max().unwrap_or(0);
            debug!("[Genetic] generation {generation}: best fitness = {best}/{max_fitness}");
        }
    }

    // 世代上限に達したら最良個体を返す
    let best = population
        .into_iter()
        .max_by_key(Board::evaluate)
        .unwrap_or_else(|| Board::from_rows(Vec::new()));
    SearchOutcome { solved: best.is_solved(), iterations: generation, board: best }
}
