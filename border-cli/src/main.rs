use std::path::PathBuf;

use anyhow::Result;
use border_cli::{render_board, GameConfig, MatchRunner};
use border_game::{Outcome, PlayerId};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("border_cli=info".parse()?))
        .init();

    // 第一个参数为可选的配置文件路径
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => GameConfig::load(&path)?,
        None => GameConfig::default(),
    };
    info!("Config: {:?}", config);

    let mut runner = MatchRunner::new(&config)?;

    println!("Initial board:");
    println!("{}", render_board(runner.initial_state().board()));

    let report = runner.play(|mover, mv, state| {
        println!("{} plays {}", mover, mv);
        println!("{}", render_board(state.board()));
    })?;

    println!("Elapsed: {:.4} s", report.elapsed.as_secs_f64());
    println!(
        "Nodes searched: P1 {}, P2 {}",
        report.player1_nodes, report.player2_nodes
    );
    match report.outcome {
        Outcome::Winner(PlayerId::Player1) => println!("Player 1 wins!"),
        Outcome::Winner(PlayerId::Player2) => println!("Player 2 wins!"),
        Outcome::Draw | Outcome::Ongoing => println!("Draw!"),
    }

    Ok(())
}
