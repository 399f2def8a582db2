//! Command-line interface for addrutil.
//!
//! - [`cli`] - argument structs and the top-level parser
//! - [`config`] - Figment configuration loading
//! - [`logging`] - tracing subscriber setup
//! - [`commands`] - subcommand implementations

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

pub use cli::{Cli, Commands};

use std::io;

use addrutil_core::AddressUtil;
use clap::Parser;
use color_eyre::eyre;
use tracing::debug;

/// Parse the command line and run the selected command.
///
/// This is the main entry point that should be called from the binary.
pub fn run() -> eyre::Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(&cli.logs)?;

    let config = config::load_config(cli.config.as_deref())?;
    debug!(?config, "loaded configuration");
    let util = AddressUtil::new(config);

    let mut out = io::stdout().lock();
    match cli.command {
        Commands::Cidr(command) => commands::cidr::run(command, &util, &mut out),
        Commands::Alloc(args) => commands::alloc::run(args, &util, &mut out),
        Commands::Check(args) => commands::check::run(args, &mut out),
        Commands::Stat(args) => commands::stat::run(args, &mut out),
    }
}
