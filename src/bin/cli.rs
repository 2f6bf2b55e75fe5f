// src/bin/cli.rs
use bulletin_plot::cli;
use color_eyre::eyre::eyre;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let opts = match cli::from_env().map_err(|e| eyre!("{e}\n\n{}", cli::USAGE))? {
        cli::Command::Run(opts) => opts,
        cli::Command::Help => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
    };
    cli::init_logging(&opts);

    cli::run(&opts).map_err(|e| eyre!("{e}"))
}
