mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "refdata")]
#[command(about = "Browse and edit reference-data catalogs", long_about = None)]
#[command(version)]
#[command(args_override_self = true)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (default: $REFDATA_PATH, then the platform data dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
