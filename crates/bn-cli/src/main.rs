//! bishnoi - BishNoi account session CLI
//!
//! Drives the session manager from a terminal.
//!
//! # Examples
//!
//! ```bash
//! # Create an account
//! bishnoi register --display-name Asha --email asha@example.com
//!
//! # Log in by username or email
//! bishnoi login asha
//!
//! # Show the stored session
//! bishnoi whoami
//! ```

mod cli;
mod commands;
mod error;
mod logger;
mod output;

#[cfg(test)]
mod tests;

use crate::{
    cli::Cli,
    commands::Commands,
    error::{CliError, Result as CliResult},
};

use bn_auth::{ResourceStream, SessionManager};
use bn_config::{Config, LogLevel};
use bn_core::{Resource, User};

use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use futures::StreamExt;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<ExitCode> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let level = cli
        .log_level
        .as_deref()
        .map(LogLevel::parse_lenient)
        .unwrap_or(config.logging.level);

    // Initialize logger (before any other logging)
    logger::initialize(level, config.log_file_path()?, config.logging.colored)?;

    info!("Starting bishnoi v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Local reads open the store alone and need no identity credentials.
    match cli.command {
        Commands::Whoami => return whoami(&config),
        Commands::Status => return status(&config),
        _ => {}
    }

    // The provider's identity ends with this process, so there is nothing
    // to reconcile the stored session against at startup.
    let manager = SessionManager::from_config(&config)?;

    let code = match cli.command {
        Commands::Register {
            display_name,
            email,
            password,
        } => {
            let password = read_password(password)?;
            drive(manager.register(&display_name, &email, &password), |user| {
                println!("{}", output::registered(&user));
            })
            .await
        }

        Commands::Login {
            identifier,
            password,
        } => {
            let password = read_password(password)?;
            drive(manager.login(&identifier, &password), |user| {
                println!("{}", output::logged_in(&user));
            })
            .await
        }

        Commands::Logout => {
            drive(manager.logout(), |()| println!("Logged out")).await
        }

        Commands::ResetPassword { identifier } => {
            drive(manager.send_password_reset(&identifier), |()| {
                println!("Password reset email sent");
            })
            .await
        }

        Commands::Whoami | Commands::Status => ExitCode::SUCCESS,
    };

    Ok(code)
}

fn whoami(config: &Config) -> CliResult<ExitCode> {
    let store = SessionManager::open_store(config)?;

    match store.record().map(|record| User::from_session(&record)) {
        Some(user) => {
            println!("{}", output::user_details(&user));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("Not logged in");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn status(config: &Config) -> CliResult<ExitCode> {
    let store = SessionManager::open_store(config)?;
    let user = store.record().map(|record| User::from_session(&record));

    println!("{}", output::status(user.as_ref(), store.dir()));
    Ok(ExitCode::SUCCESS)
}

/// Print progress and map the terminal state to an exit code.
async fn drive<T>(mut states: ResourceStream<'_, T>, on_success: impl FnOnce(T)) -> ExitCode {
    while let Some(state) = states.next().await {
        match state {
            Resource::Loading => eprintln!("Working..."),
            Resource::Success(value) => {
                on_success(value);
                return ExitCode::SUCCESS;
            }
            Resource::Error { message, .. } => {
                eprintln!("Error: {message}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::FAILURE
}

/// Use the password flag, or read one line from stdin.
fn read_password(flag: Option<String>) -> CliResult<String> {
    if let Some(password) = flag {
        return Ok(password);
    }

    eprint!("Password: ");
    std::io::stderr().flush().map_err(CliError::io)?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(CliError::io)?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
