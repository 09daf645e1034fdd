use clap::Parser;
use common::utility::create_shutdown_channel;
use game_host::entrypoint::{play, GameConfig};
use tokio::io::{stdin, stdout, BufReader};
use tracing::Level;

/// Rock-paper-scissors with a single-use bomb, best of three against the computer.
#[derive(Parser, Debug)]
#[command(name = "rps-plus", version)]
struct Args {
    /// Seed for the opponent's moves
    #[arg(long)]
    seed: Option<u64>,

    /// Print one JSON object per line instead of text
    #[arg(long)]
    json: bool,

    /// Most verbose log level written to stderr
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig {
        seed: args.seed,
        json: args.json,
    };
    let shutdown_receiver = create_shutdown_channel();
    play(
        config.opponent(),
        &config,
        BufReader::new(stdin()),
        &mut stdout(),
        shutdown_receiver,
    )
    .await?;
    Ok(())
}
