//! nim 探索の全域検証ツール
//!
//! すべての山サイズを新品の置換表と十分な深さ（山サイズ以上）で探索し、
//! 報告される勝敗を理論値（4k+1 の山だけ手番側の必敗）と突き合わせる。
//!
//! 使い方:
//!   # 人間向けサマリ
//!   analyze_nim
//!
//!   # JSONL 出力（1山1レコード）
//!   analyze_nim --jsonl

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::info;
use serde::Serialize;

use rnim_core::game::{Pile, Take};
use rnim_core::search::negamax_with_tt;
use rnim_core::tt::TranspositionTable;
use rnim_core::types::Value;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(about = "pile-by-pile win/loss sweep for the nim search")]
struct Cli {
    /// 走査する最大の山サイズ
    #[arg(long, default_value_t = Pile::MAX_STONES, value_parser = clap::value_parser!(u32).range(1..=Pile::MAX_STONES as i64))]
    max_stones: u32,

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
    max_stones: u32,
    generated_at: String,
}

#[derive(Serialize)]
struct PileRecord<'a> {
    kind: &'a str,
    stones: u32,
    utility: i32,
    best_move: Option<u32>,
    theory_loss: bool,
    agrees: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    if cli.jsonl {
        let meta = MetaRecord {
            kind: "meta",
            max_stones: cli.max_stones,
            generated_at: Local::now().to_rfc3339(),
        };
        println!("{}", serde_json::to_string(&meta)?);
    }

    let mut mismatches = Vec::new();

    for stones in 1..=cli.max_stones {
        let pile = Pile::new(stones)?;
        // 深さ打ち切りを起こさないよう、深さは山サイズに合わせる
        let mut tt = TranspositionTable::new();
        let (utility, best_move) =
            negamax_with_tt(pile, stones as i32, -Value::INFINITE, Value::INFINITE, &mut tt);
        let utility = utility.with_context(|| format!("no utility for pile {stones}"))?;

        let theory_loss = stones % 4 == 1;
        let reported_loss = utility == Value::LOSS;
        let agrees = theory_loss == reported_loss;
        if !agrees {
            mismatches.push(stones);
        }

        if cli.jsonl {
            let record = PileRecord {
                kind: "pile",
                stones,
                utility: utility.raw(),
                best_move: best_move.map(Take::count),
                theory_loss,
                agrees,
            };
            println!("{}", serde_json::to_string(&record)?);
        }
    }

    if !cli.jsonl {
        if mismatches.is_empty() {
            println!(
                "all {} piles agree with theory (mover loses iff stones ≡ 1 mod 4)",
                cli.max_stones
            );
        } else {
            println!("{} piles disagree with theory: {:?}", mismatches.len(), mismatches);
        }
    }

    info!("[AnalyzeNim] swept {} piles, {} mismatches", cli.max_stones, mismatches.len());
    Ok(())
}
