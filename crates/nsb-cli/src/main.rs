use clap::Parser;
use nsb_cli::{cli::Cli, commands, error, logger, ui};

fn main() -> miette::Result<()> {
    let args = Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = commands::dispatch(args.command, args.quiet);

    result.map_err(error::cli_error_to_miette)
}
