use crate::cli::Cli;
use crate::commands::Commands;

use clap::Parser;

#[test]
fn test_parse_register() {
    let cli = Cli::try_parse_from([
        "bishnoi",
        "register",
        "--display-name",
        "Asha",
        "--email",
        "asha@example.com",
        "--password",
        "secret1",
    ])
    .unwrap();

    assert_eq!(
        cli.command,
        Commands::Register {
            display_name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            password: Some("secret1".to_string()),
        }
    );
}

#[test]
fn test_parse_login_without_password() {
    let cli = Cli::try_parse_from(["bishnoi", "login", "asha"]).unwrap();

    assert_eq!(
        cli.command,
        Commands::Login {
            identifier: "asha".to_string(),
            password: None,
        }
    );
}

#[test]
fn test_parse_reset_password_kebab_case() {
    let cli = Cli::try_parse_from(["bishnoi", "reset-password", "asha"]).unwrap();

    assert_eq!(
        cli.command,
        Commands::ResetPassword {
            identifier: "asha".to_string()
        }
    );
}

#[test]
fn test_global_log_level_after_subcommand() {
    let cli = Cli::try_parse_from(["bishnoi", "status", "--log-level", "debug"]).unwrap();

    assert_eq!(cli.command, Commands::Status);
    assert_eq!(cli.log_level.as_deref(), Some("debug"));
}

#[test]
fn test_register_requires_email() {
    let result = Cli::try_parse_from(["bishnoi", "register", "--display-name", "Asha"]);
    assert!(result.is_err());
}
