use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use callerboard::api::CallerApi;
use callerboard::cli::{Cli, Command};
use callerboard::config::BuildInfo;
use callerboard::list::{self, ListFormat};
use callerboard::logging::{init_tracing, LogTarget};
use callerboard::store::{Actions, State, Store};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config().context("Failed to load configuration")?;
    let command = cli.command();

    match command {
        Command::Tui => init_tracing(LogTarget::File),
        Command::List { .. } => init_tracing(LogTarget::Stderr),
    }

    let build = BuildInfo::new(config.app.mode);
    let store = Store::new(State::from_build(&build));
    let source = CallerApi::from_config(&config.api)?;
    tracing::debug!(url = %source.url(), mode = ?build.mode, "Configured recent callers source");
    let actions = Actions::new(store, Arc::new(source));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match command {
        Command::Tui => {
            actions.init_app();
            callerboard::ui::run(actions, &config.ui, runtime.handle().clone())
                .context("Terminal UI failed")?;
        }
        Command::List { json } => {
            let format = if json {
                ListFormat::Json
            } else {
                ListFormat::Table
            };
            let output = runtime.block_on(list::run(&actions, format))?;
            println!("{}", output.trim_end());
        }
    }

    Ok(())
}
