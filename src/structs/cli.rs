use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "hookmenu")]
#[clap(about = "Send selections, links and images to your webhooks", long_about = None)]
pub struct Cli {
    /// Use this configuration file instead of ~/hookmenu/config.toml
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
