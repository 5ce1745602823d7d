use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fpga_config::{assemble_tables, load_config, merge_tables, parse_u32, OutputFormat, PartsFile};
use fpga_id::{Family, IdentifierTable, Vendor};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod report;

#[derive(Parser)]
#[command(name = "fpga-part")]
#[command(about = "FPGA part lookup by JTAG IDCODE")]
#[command(version)]
struct Cli {
    /// Tool configuration file (default: ./fpga-part.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Extra parts file, overrides `parts_file` from the configuration
    #[arg(long, global = true)]
    parts: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve identifiers to part names
    Lookup {
        /// Identifiers, hex (0x...) or decimal
        #[arg(required = true, value_parser = parse_id)]
        ids: Vec<u32>,
    },
    /// Show the IDCODE fields of one identifier
    Decode {
        #[arg(value_parser = parse_id)]
        id: u32,
    },
    /// List table entries
    List {
        /// Only parts from this vendor (xilinx, intel)
        #[arg(long)]
        vendor: Option<Vendor>,
        /// Only parts from this family, e.g. "kintex ultrascale+"
        #[arg(long)]
        family: Option<Family>,
    },
    /// Validate the effective table
    Check,
    /// Write the effective table as 24-byte binary records
    Export {
        /// Output file
        path: PathBuf,
    },
}

fn parse_id(text: &str) -> Result<u32, String> {
    parse_u32(text).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };

    // RUST_LOG wins over the configured level; logs go to stderr in the
    // same format as the results
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        OutputFormat::Json => subscriber.json().init(),
        OutputFormat::Text => subscriber.init(),
    }

    debug!("Effective config: {:?}", config);

    let parts_path = match cli.parts {
        Some(path) => Some(path),
        None => config.parts_path()?,
    };
    let user = match &parts_path {
        Some(path) => PartsFile::load(path)?,
        None => Vec::new(),
    };
    // `check` reports conflicts itself; every other command needs a valid table
    let merged = if matches!(cli.command, Commands::Check) {
        assemble_tables(&user, IdentifierTable::builtin())?
    } else {
        merge_tables(&user, IdentifierTable::builtin())
            .context("User parts conflict with the built-in table")?
    };

    let status = match cli.command {
        Commands::Lookup { ids } => commands::lookup(&merged, &ids, format)?,
        Commands::Decode { id } => commands::decode(&merged, id, format)?,
        Commands::List { vendor, family } => commands::list(&merged, vendor, family, format)?,
        Commands::Check => commands::check(&merged, format)?,
        Commands::Export { path } => commands::export(&merged, &path)?,
    };
    Ok(status.into())
}
