use clap::{Parser, Subcommand};

/// Command-line interface definition for weightgoal
#[derive(Parser)]
#[command(
    name = "weightgoal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Work out how many grams per day you need to lose to reach your goal weight by a target date",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Set the goal weight in kg (saved for next time)
    Goal {
        /// Goal weight in kg, e.g. 65
        weight: String,
    },

    /// Set the target date (saved for next time)
    Date {
        /// Target date: YYYY-MM-DD, or a full RFC 3339 timestamp.
        /// Days before today are not accepted.
        date: String,
    },

    /// Calculate the daily loss needed to reach the goal
    Calc {
        /// Current weight in kg (never saved)
        current: String,

        /// Goal weight in kg; also saved, like `goal`
        #[arg(long = "goal")]
        goal: Option<String>,

        /// Target date; also saved, like `date`
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Show the saved goal weight and target date
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Clear the saved goal weight and target date
    Reset,

    /// Print or manage the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
