use std::io;

use anyhow::{Context, Result};
use tracing::info;

use gambit_cli::Driver;
use gambit_core::Setup;

fn main() -> Result<()> {
    // Replies go to stdout; keep log lines off it.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let setup = if args.is_empty() {
        Setup::default()
    } else {
        let fen = args.join(" ");
        fen.parse::<Setup>()
            .with_context(|| format!("invalid starting FEN: {fen}"))?
    };
    info!(fen = %setup, "gambit starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Driver::with_setup(stdin.lock(), stdout.lock(), setup).run()?;
    Ok(())
}
