// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! suggest-check binary entry point.

use clap::Parser;

use suggest_check::cli::Cli;
use suggest_check::exit_codes;
use suggest_check::report::print_error;
use suggest_check::telemetry::init_tracing;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let code = match suggest_check::run_cli(cli).await {
        Ok(code) => code,
        Err(e) => {
            print_error(format_args!("{:#}", e));
            exit_codes::SETUP_ERROR
        }
    };
    std::process::exit(code);
}
