use clap::Parser;
use jm_cli::{init_tracing, run, Cli};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())?;
    Ok(())
}
