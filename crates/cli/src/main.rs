// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! shtest binary entry point.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;

use shtest::app::{self, FATAL_EXIT};
use shtest::cli::Cli;
use shtest::config::HarnessConfig;
use shtest::logging;
use shtest::output_diagnostic::print_error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = std::io::stdout();
    let config = match HarnessConfig::from_cli(&cli, stdout.is_terminal()) {
        Ok(config) => config,
        Err(e) => {
            print_error(e);
            return ExitCode::from(FATAL_EXIT);
        }
    };

    match app::run(&config, stdout).await {
        Ok(summary) => ExitCode::from(app::exit_status(&config, &summary)),
        Err(e) => {
            print_error(e);
            ExitCode::from(FATAL_EXIT)
        }
    }
}
