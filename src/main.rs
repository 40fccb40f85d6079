// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> AppContext --> Command Dispatch
//!   Version | Options | Env | Config
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use vela_env::cli::global::GlobalOptions;
use vela_env::cli::{self, Command};
use vela_env::cmd::AppContext;
use vela_env::cmd::config::{run_config_command, run_options_command};
use vela_env::cmd::env::run_env_command;
use vela_env::logging::init_logging;
use vela_env::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = dispatch_command(&cli, &mut out).and_then(|()| out.flush().map_err(Into::into));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {}", format_error(&e));
            ExitCode::FAILURE
        }
    }
}

/// Joins the error chain, skipping causes already quoted by their parent.
fn format_error(error: &anyhow::Error) -> String {
    let mut message = String::new();
    for cause in error.chain() {
        let text = cause.to_string();
        if message.ends_with(&text) {
            continue;
        }
        if !message.is_empty() {
            message.push_str(": ");
        }
        message.push_str(&text);
    }
    message
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::WARN);

    LogConfig::builder()
        .with_console_level(console_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli, out: &mut dyn Write) -> vela_env::error::Result<()> {
    match &cli.command {
        Some(Command::Version) => {
            writeln!(out, "{}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
        Some(Command::Options) => {
            let ctx = AppContext::open(&cli.global)?;
            run_options_command(ctx.settings(), out)
        }
        Some(Command::Env(args)) => {
            let ctx = AppContext::open(&cli.global)?;
            run_env_command(args, &ctx, out)
        }
        Some(Command::Config(args)) => {
            let ctx = AppContext::open(&cli.global)?;
            run_config_command(args, &ctx, out)
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    }
}
