//! n-queens 局所探索の成功率計測ツール
//!
//! アルゴリズムごとに初期盤面を変えて反復実行し、解に到達した割合を集計する。
//!
//! 使い方:
//!   # 全アルゴリズムを 9 回ずつ（人間向けサマリ出力）
//!   queens_success_rate 8
//!
//!   # 山登り法だけを 100 回、JSONL 出力
//!   queens_success_rate 8 --algorithm hill-climbing --runs 100 --jsonl

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;

use tools::queens::{Algorithm, Board, MAX_QUEENS};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(about = "success-rate measurement for n-queens local search")]
struct Cli {
    /// クイーン数（1..=100）
    #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_QUEENS as i64))]
    queens: u32,

    /// 1アルゴリズムあたりの試行回数
    #[arg(long, default_value_t = 9)]
    runs: u32,

    /// 対象アルゴリズム（未指定時は全アルゴリズム）
    #[arg(long, value_enum)]
    algorithm: Option<Algorithm>,

    /// 乱数シード（未指定時はOSエントロピー）
    #[arg(long)]
    seed: Option<u64>,

    /// JSONL 出力モード
    #[arg(long)]
    jsonl: bool,
}

// ---------------------------------------------------------------------------
// JSONL レコード（シリアライズのみ）
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct MetaRecord<'a> {
    kind: &'a str,
    queens: u32,
    runs: u32,
    seed: Option<u64>,
    generated_at: String,
}

#[derive(Serialize)]
struct RunRecord<'a> {
    kind: &'a str,
    algorithm: &'a str,
    run: u32,
    solved: bool,
    iterations: u32,
    conflicts: u32,
}

#[derive(Serialize)]
struct SummaryRecord<'a> {
    kind: &'a str,
    algorithm: &'a str,
    runs: u32,
    solved: u32,
    success_rate: f64,
    mean_iterations: f64,
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

    let algorithms: Vec<Algorithm> =
        cli.algorithm.map_or_else(|| Algorithm::ALL.to_vec(), |algorithm| vec![algorithm]);

    if cli.jsonl {
        let meta = MetaRecord {
            kind: "meta",
            queens: cli.queens,
            runs: cli.runs,
            seed: cli.seed,
            generated_at: Local::now().to_rfc3339(),
        };
        println!("{}", serde_json::to_string(&meta)?);
    }

    for algorithm in algorithms {
        let mut solved_count = 0u32;
        let mut total_iterations = 0u64;

        for run in 1..=cli.runs {
            let board = Board::random(cli.queens as usize, &mut rng);
            let outcome = algorithm.run(board, &mut rng);

            if outcome.solved {
                solved_count += 1;
            }
            total_iterations += u64::from(outcome.iterations);

            if cli.jsonl {
                let record = RunRecord {
                    kind: "run",
                    algorithm: algorithm.label(),
                    run,
                    solved: outcome.solved,
                    iterations: outcome.iterations,
                    conflicts: outcome.board.count_conflicts(),
                };
                println!("{}", serde_json::to_string(&record)?);
            }
        }

        let success_rate = f64::from(solved_count) / f64::from(cli.runs.max(1));
        let mean_iterations = total_iterations as f64 / f64::from(cli.runs.max(1));

        if cli.jsonl {
            let summary = SummaryRecord {
                kind: "summary",
                algorithm: algorithm.label(),
                runs: cli.runs,
                solved: solved_count,
                success_rate,
                mean_iterations,
            };
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!(
                "{:<24} {:>4}/{:<4} solved ({:>5.1}%), mean iterations {:.1}",
                algorithm.label(),
                solved_count,
                cli.runs,
                success_rate * 100.0,
                mean_iterations
            );
        }

        info!(
            "[SuccessRate] {}: {}/{} solved",
            algorithm.label(),
            solved_count,
            cli.runs
        );
    }

    Ok(())
}
