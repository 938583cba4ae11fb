use super::ENV;

pub mod run;

pub fn handle_command(cli: super::Cli) -> anyhow::Result<()> {
    dotenvy::from_read(ENV.as_bytes())?;

    run::handle_command(cli.run)
}
