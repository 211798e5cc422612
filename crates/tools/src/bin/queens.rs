//! n-queens 局所探索の実行ツール
//!
//! 使い方:
//!   # 改良版山登り法で 8-queens を解く
//!   queens 8
//!
//!   # アルゴリズムとシードを指定
//!   queens 8 --algorithm annealing --seed 42

use anyhow::Result;
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use tools::queens::{Algorithm, Board, MAX_QUEENS};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(about = "local search solvers for the n-queens puzzle")]
struct Cli {
    /// クイーン数（1..=100）
    #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_QUEENS as i64))]
    queens: u32,

    /// 使用するアルゴリズム
    #[arg(long, value_enum, default_value_t = Algorithm::HillClimbingImproved)]
    algorithm: Algorithm,

    /// 乱数シード（未指定時はOSエントロピー）
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_os_rng(),
    };

    let board = Board::random(cli.queens as usize, &mut rng);
    println!("Initial board:\n{board}\n");

    let outcome = cli.algorithm.run(board, &mut rng);

    if outcome.solved {
        println!("Solved puzzle!");
    }
    println!("Final state is:\n{}", outcome.board);

    info!(
        "[Queens] {} finished after {} iterations, solved: {}, conflicts: {}",
        cli.algorithm.label(),
        outcome.iterations,
        outcome.solved,
        outcome.board.count_conflicts()
    );
    Ok(())
}
