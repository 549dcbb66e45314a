use std::io;

use clap::Parser;
use tracing::Level;
use xzcrc::{Session, Tables};

const CHUNK_SIZE: usize = 8192;

/// Print byte count, CRC-32 and CRC-64 of standard input
#[derive(Debug, Parser)]
#[command(version)]
struct Cmd {
    /// log level, logs go to stderr
    #[arg(long, default_value = "WARN")]
    level: Level,
}

fn main() {
    let cmd = Cmd::parse();
    tracing_subscriber::fmt()
        .with_max_level(cmd.level)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let tables = Tables::build();
    let mut session = Session::new(&tables);

    // a failed read ends the stream like EOF does
    if let Err(e) = session.consume(io::stdin().lock(), CHUNK_SIZE) {
        tracing::warn!(total = session.total(), "stopped reading stdin: {}", e);
    }

    println!("{}", session.report());
}
