use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rBankroll
/// CLI application to track poker sessions and bankroll growth
#[derive(Parser)]
#[command(
    name = "rbankroll",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track poker sessions, bankroll progress and results, as a guest or with an account",
    long_about = None
)]
pub struct Cli {
    /// Override the device database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the self-hosted backend database path
    #[arg(global = true, long = "remote-db")]
    pub remote_db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the databases and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Continue without an account: data is saved on this device only
    Guest,

    /// Create an account (guest data is moved into it)
    Signup {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long = "confirm", help = "Repeat the password")]
        confirm: String,
    },

    /// Sign in to an existing account
    Signin {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign out (or leave guest mode)
    Signout,

    /// Set the starting bankroll and the goal
    Bankroll {
        #[arg(long, help = "Starting bankroll amount (e.g. 1000 or 1000.50)")]
        starting: String,

        #[arg(long, help = "Bankroll goal, greater than the starting amount")]
        goal: String,
    },

    /// Record a poker session
    Add {
        /// Date of the session (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        #[arg(
            long = "game",
            help = "Game type: cash (c) or tournament (t, mtt). Default: cash"
        )]
        game_type: Option<String>,

        #[arg(long, help = "Stakes, e.g. 1/2 or $50 buy-in")]
        stakes: String,

        #[arg(long, help = "Where the session was played")]
        location: String,

        #[arg(long = "buy-in", help = "Total amount put on the table")]
        buy_in: String,

        #[arg(long = "cash-out", help = "Amount taken home")]
        cash_out: String,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List recorded sessions, newest first
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, short = 'n', help = "Show only the most recent N sessions")]
        limit: Option<usize>,
    },

    /// Dashboard: bankroll, progress towards the goal and recent sessions
    Status,

    /// Results by location, game type and month
    Analytics {
        #[arg(long, help = "Also print the cumulative profit timeline")]
        timeline: bool,
    },

    /// Move guest data into an existing account
    Migrate {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export session data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
