use clap::Parser;

use booth_cli::{command::handle_command, setup_logger, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = setup_logger();

    handle_command(cli)
}
