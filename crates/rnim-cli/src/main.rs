//! nim をプレイするCLIフロントエンド
//!
//! 初期の石数を1つ受け取り、置換表つき negamax で両者を終局まで指させる。
//! 1手ごとの報告を stdout に、診断ログを stderr（env_logger）に出す。
//!
//! # 使用例
//!
//! ```shell
//! cargo run -p rnim-cli -- 21
//! RUST_LOG=debug cargo run -p rnim-cli -- 5
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;

use rnim_core::game::{play_nim, Pile, PlyEvent};

#[derive(Parser, Debug)]
#[command(name = "rnim", about = "plays nim to completion with a depth-limited negamax search")]
struct Cli {
    /// 初期の石の数（1..=100）
    stones: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let pile = Pile::new(cli.stones)?;

    let report = play_nim(pile, &mut |ev: &PlyEvent| {
        println!(
            "{}: {} takes {} with utility {}",
            ev.stones,
            ev.player.label(),
            ev.take,
            ev.utility
        );
    })?;
    println!("1: {} looses", report.loser.label());

    info!("[Game] finished after {} plies, loser: {}", report.plies, report.loser.label());
    Ok(())
}
