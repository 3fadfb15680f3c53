// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `twirl` binary entry point.

use clap::Parser;

use twirl_cli::cli::{Cli, Command};
use twirl_cli::logging::setup_logging;
use twirl_cli::output::print_error;
use twirl_cli::run;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let code = match cli.command {
        Command::Run(args) => match run::run(args).await {
            Ok(code) => code,
            Err(e) => {
                print_error(&e);
                e.exit_code()
            }
        },
        Command::List => match run::list() {
            Ok(()) => 0,
            Err(e) => {
                print_error(&e);
                e.exit_code()
            }
        },
    };

    std::process::exit(code);
}
