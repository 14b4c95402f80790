use clap::Parser;
use identicon::cli::{Cli, Commands};
use identicon::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Some(Commands::Generate(args)) => identicon::cli::generate::run(args, &printer)?,
        Some(Commands::Inspect(args)) => identicon::cli::inspect::run(args)?,
        Some(Commands::Completions(args)) => identicon::cli::completions::run(args)?,
        None => identicon::cli::generate::run(cli.generate, &printer)?,
    }

    Ok(())
}
