use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Create an account and log in
    Register {
        #[arg(long)]
        display_name: String,

        #[arg(long)]
        email: String,

        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Log in with an email address or username
    Login {
        identifier: String,

        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// End the current session
    Logout,

    /// Send a password reset email
    ResetPassword { identifier: String },

    /// Show the stored user
    Whoami,

    /// Show the stored session and where it lives
    Status,
}
