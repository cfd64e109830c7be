use crate::types::{LogLevel, OutputFormat};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Manage employees and departments on a roster server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml and roster.log
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Server base URL (overrides ROSTER_SERVER and config.toml)
    #[arg(long, global = true)]
    pub server: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive terminal UI (default)
    Tui,

    Employee {
        #[command(subcommand)]
        command: EmployeeCommand,
    },

    Department {
        #[command(subcommand)]
        command: DepartmentCommand,
    },

    /// Head count, department count and average salary
    Stats,

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum EmployeeCommand {
    List,

    Add {
        #[arg(long)]
        name: String,

        #[command(flatten)]
        fields: EmployeeFields,
    },

    /// Update an employee; omitted fields keep their current value
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: EmployeeFields,
    },

    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Optional employee fields; an empty value clears the field.
#[derive(Args, Debug, Clone, Default)]
pub struct EmployeeFields {
    /// Department id
    #[arg(long)]
    pub department: Option<String>,

    #[arg(long)]
    pub salary: Option<String>,

    /// Hire date (YYYY-MM-DD)
    #[arg(long)]
    pub hire_date: Option<String>,
}

#[derive(Subcommand)]
pub enum DepartmentCommand {
    List,

    Add {
        name: String,
    },

    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Persist the server base URL to config.toml
    SetServer {
        url: String,
    },
}
