//! CLI argument structs and top-level parser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Address, CIDR and file helpers.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Logging configuration.
    #[command(flatten)]
    pub logs: LogArgs,

    /// Path to a TOML configuration file.
    #[arg(long, global = true, value_name = "PATH", env = "ADDRUTIL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Inspect and enumerate CIDR blocks.
    #[command(subcommand)]
    Cidr(CidrCommand),

    /// Allocate the next free address of a block, recording it in a ledger file.
    Alloc(AllocArgs),

    /// Validate a value.
    Check(CheckArgs),

    /// Report whether a path is a file, a directory, or missing.
    Stat(StatArgs),
}

/// `cidr` subcommands.
#[derive(Debug, Subcommand)]
pub enum CidrCommand {
    /// Print every usable address of a block, one per line.
    List {
        /// Block in `address/prefix` form.
        cidr: String,
    },

    /// Print the address component of a block.
    Ip {
        /// Block in `address/prefix` form.
        cidr: String,

        /// Print the network address instead of the address as written.
        #[arg(long)]
        network: bool,
    },

    /// Print the first address not present in the reserved list.
    Next {
        /// Block in `address/prefix` form.
        cidr: String,

        /// Reserved address (repeatable).
        #[arg(short, long = "reserved", value_name = "ADDR")]
        reserved: Vec<String>,

        /// File with one reserved address per line.
        #[arg(long, value_name = "PATH")]
        reserved_file: Option<PathBuf>,
    },
}

/// Arguments for the `alloc` command.
#[derive(Debug, Args)]
pub struct AllocArgs {
    /// Block in `address/prefix` form.
    pub cidr: String,

    /// Ledger of handed-out addresses, one per line. Created if missing.
    #[arg(long, value_name = "PATH")]
    pub ledger: PathBuf,
}

/// What `check` validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckKind {
    /// IPv4 or IPv6 address literal.
    Ip,
    /// `address/prefix` block.
    Cidr,
    /// Genuine IPv6 address literal.
    Ipv6,
    /// E-mail address.
    Email,
}

/// Arguments for the `check` command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// What to validate.
    #[arg(value_enum)]
    pub kind: CheckKind,

    /// Value to validate.
    pub value: String,
}

/// Arguments for the `stat` command.
#[derive(Debug, Args)]
pub struct StatArgs {
    /// Path to inspect.
    pub path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Args, Clone, Default)]
#[command(next_help_heading = "Logging")]
pub struct LogArgs {
    /// Silence all log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (-v, -vv, etc.).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Log filter directive (e.g., "addrutil_core=trace").
    #[arg(long = "log.filter", global = true, value_name = "DIRECTIVE")]
    pub filter: Option<String>,

    /// Use JSON format for log output.
    #[arg(long = "log.json", global = true)]
    pub json: bool,
}
