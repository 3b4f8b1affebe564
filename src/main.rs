use clap::Parser;
use rhymer::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        rhymer::init_debug_log()?;
    }

    rhymer::run(&cli)?;
    Ok(())
}
