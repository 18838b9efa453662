use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for agentledger
/// CLI application to track agent attendance and partner payouts with SQLite
#[derive(Parser)]
#[command(
    name = "agentledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track agent attendance and compute partner commission payouts using SQLite",
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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

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

    /// Record a login/logout event for a subject
    Clock {
        /// Subject (agent) id
        subject: i64,

        /// Date of the event (YYYY-MM-DD); defaults to today
        #[arg(long = "date")]
        date: Option<String>,

        /// Login time (HH:MM)
        #[arg(long = "in", help = "Login time (HH:MM)")]
        login: Option<String>,

        /// Logout time (HH:MM)
        #[arg(long = "out", help = "Logout time (HH:MM)")]
        logout: Option<String>,
    },

    /// Show and recompute attendance day summaries
    Day {
        /// Subject (agent) id
        subject: i64,

        /// Filter by year/month/day or a custom range
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        /// Show only today's summary
        #[arg(long = "today", help = "Show only today's summary")]
        now: bool,

        /// Show the paired intervals for each day
        #[arg(long = "details", help = "Show the paired intervals for each day")]
        details: bool,
    },

    /// Manage commission partners
    Partner {
        #[arg(long = "add", help = "Add a new partner", requires = "name")]
        add: bool,

        #[arg(long = "list", help = "List all partners")]
        list: bool,

        #[arg(long = "name", help = "Partner name (with --add)")]
        name: Option<String>,

        #[arg(
            long = "rate",
            help = "Commission rate, free text, '%' allowed (e.g. '2.5%')"
        )]
        rate: Option<String>,

        #[arg(long = "id", help = "Partner id (with --rate to update it)")]
        id: Option<i64>,
    },

    /// Record and recompute commission records
    Commission {
        #[arg(
            long = "add",
            help = "Record a commission for a booking",
            requires = "partner",
            requires = "booking",
            requires = "total"
        )]
        add: bool,

        #[arg(long = "list", help = "List commission records", requires = "partner")]
        list: bool,

        #[arg(
            long = "recompute",
            help = "Delete and regenerate a partner's records with its current rate",
            requires = "partner"
        )]
        recompute: bool,

        #[arg(long = "partner", help = "Partner id")]
        partner: Option<i64>,

        #[arg(long = "booking", help = "Booking id (with --add)")]
        booking: Option<i64>,

        #[arg(long = "total", help = "Booking total amount (with --add)")]
        total: Option<String>,

        /// Sale date (YYYY-MM-DD); defaults to today
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Refresh and manage payout summaries
    Payout {
        #[arg(
            long = "refresh",
            help = "Refresh one summary (with --partner/--month/--year) or all"
        )]
        refresh: bool,

        #[arg(long = "list", help = "List payout summaries")]
        list: bool,

        #[arg(
            long = "set-status",
            value_name = "STATUS",
            help = "Set summary status: pending, approved or paid"
        )]
        set_status: Option<String>,

        #[arg(
            long = "reset",
            help = "Reset all summaries of a month back to pending",
            requires = "month",
            requires = "year"
        )]
        reset: bool,

        #[arg(long = "force", help = "Allow a backward status transition")]
        force: bool,

        #[arg(long = "partner", help = "Partner id")]
        partner: Option<i64>,

        #[arg(long = "month", help = "Month name, full or abbreviated (Dec, December)")]
        month: Option<String>,

        #[arg(long = "year", help = "Year (e.g. 2024)")]
        year: Option<i32>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export attendance events or payout summaries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter events by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Export payout summaries instead of events")]
        payouts: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
