use crate::models::color_scheme::ColorScheme;
use clap::{Parser, Subcommand};

/// Command-line interface definition for workhours
/// CLI application to book work orders with SQLite
#[derive(Parser)]
#[command(
    name = "workhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Book work orders: derive billable hours from customer amounts and store them in SQLite",
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

    /// Show, check, edit or change the settings
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing keys")]
        check: bool,

        #[arg(
            long = "fix",
            requires = "check",
            help = "With --check: write missing keys with default values"
        )]
        fix: bool,

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

        #[arg(long = "color-scheme", value_enum, help = "Color scheme: system, light or dark")]
        color_scheme: Option<ColorScheme>,

        #[arg(
            long = "net-percentage",
            allow_hyphen_values = true,
            help = "Deduction (%) applied to customer amounts before deriving hours"
        )]
        net_percentage: Option<String>,

        #[arg(
            long = "hour-rate",
            allow_hyphen_values = true,
            help = "Monetary value of one hour of work"
        )]
        hour_rate: Option<String>,
    },

    /// Storage maintenance (info, integrity check, vacuum)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Enter a work order and save it
    Add {
        /// Date of the order (YYYY-MM-DD, default: today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Customer name (stored in title case)
        #[arg(long = "customer", default_value = "")]
        customer: String,

        /// Internal order: hours are entered directly
        #[arg(long = "internal")]
        internal: bool,

        /// Customer order reference (external orders only)
        #[arg(long = "order", conflicts_with = "internal")]
        customer_order: Option<String>,

        /// Net customer amount (external orders only)
        #[arg(
            long = "amount",
            conflicts_with = "internal",
            allow_hyphen_values = true
        )]
        amount: Option<String>,

        /// Spirit order reference
        #[arg(long = "spirit", default_value = "")]
        spirit_order: String,

        /// Free text description
        #[arg(long = "desc", default_value = "")]
        description: String,

        /// Hours booked (internal orders only)
        #[arg(long = "hours", requires = "internal", allow_hyphen_values = true)]
        hours: Option<String>,
    },

    /// Preview derived hours or internal cost without saving
    Calc {
        /// Net customer amount → hours to book
        #[arg(
            long = "amount",
            required_unless_present = "hours",
            conflicts_with = "hours",
            allow_hyphen_values = true
        )]
        amount: Option<String>,

        /// Hours booked → internal cost
        #[arg(long = "hours", allow_hyphen_values = true)]
        hours: Option<String>,

        /// Override the configured net percentage
        #[arg(long = "net-percentage", allow_hyphen_values = true)]
        net_percentage: Option<String>,

        /// Override the configured hour rate
        #[arg(long = "hour-rate", allow_hyphen_values = true)]
        hour_rate: Option<String>,
    },
}
