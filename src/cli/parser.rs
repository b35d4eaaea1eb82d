use crate::core::collection::{EntryFilter, LocationFilter};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::approval::{ApprovalStatus, Decision};
use crate::models::identity::Role;
use crate::utils::date::parse_optional_date;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for farmsheets
#[derive(Parser)]
#[command(
    name = "farmsheets",
    version = env!("CARGO_PKG_VERSION"),
    about = "Farm timesheets: record hours, review entries and export payroll reports using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user (overrides `current_user` from the config)
    #[arg(global = true, long = "as", value_name = "USERNAME")]
    pub acting: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by `list`, `summary` and `export`.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    #[arg(long, help = "Part of the employee's full name (case-insensitive)")]
    pub name: Option<String>,

    #[arg(long, help = "Location name, or 'all'")]
    pub location: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "First date to include")]
    pub from: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Last date to include")]
    pub to: Option<String>,

    #[arg(long, value_enum, help = "Only entries with this approval status")]
    pub status: Option<ApprovalStatus>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> AppResult<EntryFilter> {
        let from = parse_optional_date(self.from.as_deref()).map_err(AppError::InvalidDate)?;
        let to = parse_optional_date(self.to.as_deref()).map_err(AppError::InvalidDate)?;

        Ok(EntryFilter {
            employee_name: self.name.clone().filter(|n| !n.trim().is_empty()),
            location: LocationFilter::parse(self.location.as_deref()),
            from,
            to,
            username: None,
            status: self.status,
        })
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Manage users (employees and admins)
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage farm work locations
    Location {
        #[command(subcommand)]
        action: LocationAction,
    },

    /// Record a work session or a day off
    Submit {
        /// Date worked (YYYY-MM-DD)
        date: String,

        #[arg(long, help = "Work location name")]
        location: String,

        #[arg(long = "in", help = "Start time (HH:MM)", conflicts_with = "day_off")]
        start: Option<String>,

        #[arg(long = "out", help = "End time (HH:MM)", conflicts_with = "day_off")]
        end: Option<String>,

        #[arg(long, help = "Lunch break in minutes", default_value_t = 0)]
        lunch: u32,

        #[arg(long = "day-off", help = "Mark the date as a day off")]
        day_off: bool,

        #[arg(long = "for", value_name = "USERNAME", help = "Record on behalf of another user (admin)")]
        on_behalf: Option<String>,
    },

    /// Edit an entry (employees: own Pending entries only)
    Edit {
        id: i64,

        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "in", help = "New start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "out", help = "New end time (HH:MM)")]
        end: Option<String>,

        #[arg(long, help = "New lunch break in minutes")]
        lunch: Option<u32>,

        #[arg(long, help = "New location name")]
        location: Option<String>,

        #[arg(long = "day-off", conflicts_with_all = ["worked", "start", "end"], help = "Turn the entry into a day off")]
        day_off: bool,

        #[arg(long, help = "Turn a day off back into a worked session (needs --in and --out)")]
        worked: bool,
    },

    /// Approve or reject an entry (admin)
    Review {
        id: i64,

        #[arg(value_enum)]
        decision: Decision,
    },

    /// Delete an entry (admin)
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List entries (employees see their own)
    List {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, default_value_t = 1, help = "Page number (1-based)")]
        page: usize,
    },

    /// Show the most recent entries waiting for approval (admin)
    Pending {
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },

    /// Total hours per employee (admin)
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export the filtered entries (admin)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default from config)")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Register a user
    Add {
        username: String,

        #[arg(long)]
        first: String,

        #[arg(long)]
        last: String,

        #[arg(long, value_enum, default_value = "employee")]
        role: Role,
    },

    /// List users
    List {
        #[arg(long, value_enum)]
        role: Option<Role>,
    },

    /// Remove a user (their entries are kept)
    Del { username: String },
}

/// Optional site details, shared by `location add` and `location edit`.
#[derive(Args, Clone, Debug, Default)]
pub struct LocationArgs {
    #[arg(long)]
    pub description: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub long: Option<f64>,

    #[arg(long, help = "Year the land was purchased")]
    pub year: Option<i32>,

    #[arg(long, help = "Size, e.g. '12 acres'")]
    pub size: Option<String>,
}

#[derive(Subcommand)]
pub enum LocationAction {
    /// Register a work site
    Add {
        name: String,

        #[command(flatten)]
        details: LocationArgs,
    },

    /// List work sites
    List,

    /// Change the details of a work site
    Edit {
        name: String,

        #[command(flatten)]
        details: LocationArgs,
    },

    /// Remove a work site
    Del { name: String },
}
