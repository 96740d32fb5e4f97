use std::process::ExitCode;

mod cli;
mod commands;
mod display;
mod util;

fn main() -> ExitCode {
    let cli = cli::parse();
    let ctx = display::Context::detect().with_quiet(match &cli.command {
        cli::Command::Info(args) => args.output.quiet,
        cli::Command::List(args) => args.output.quiet,
        cli::Command::Isotopes(args) => args.output.quiet,
        cli::Command::Grid(args) => args.output.quiet,
    });

    if ctx.interactive {
        display::print_banner();
    }

    match commands::dispatch(cli.command, ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
